use pdf_oxide::writer::{
    DocumentBuilder, DocumentMetadata, FontManager, PageSize, TextConfig, TextLayout,
};

use crate::application::ports::{DocumentRenderer, RenderError};

const FONT: &str = "Helvetica";
const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 1.5;
const MARGIN: f32 = 72.0;

/// Lays the text out one cell per input line, wrapped to the printable width
/// with Helvetica metrics and paginated onto as many A4 pages as needed.
pub struct PdfRenderer {
    title: String,
    page_size: PageSize,
    text_layout: TextLayout,
    font_manager: FontManager,
}

impl PdfRenderer {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            page_size: PageSize::A4,
            text_layout: TextLayout::new(),
            font_manager: FontManager::new(),
        }
    }

    pub fn printable_width(&self) -> f32 {
        self.page_size.dimensions().0 - 2.0 * MARGIN
    }

    /// Splits `text` into pages of wrapped lines. Every line fits the
    /// printable width; an empty cell is kept as an empty line.
    pub fn layout(&self, text: &str) -> Vec<Vec<String>> {
        let (_, height) = self.page_size.dimensions();
        let max_width = self.printable_width();
        let lines_per_page = (((height - 2.0 * MARGIN) / (FONT_SIZE * LINE_HEIGHT)) as usize).max(1);

        let lines: Vec<String> = text
            .split('\n')
            .flat_map(|cell| {
                self.text_layout
                    .wrap_text(cell.trim_end_matches('\r'), FONT, FONT_SIZE, max_width)
            })
            .flat_map(|(line, width)| {
                if width > max_width {
                    self.split_overlong(&line, max_width)
                } else {
                    vec![line]
                }
            })
            .collect();

        lines
            .chunks(lines_per_page)
            .map(|page| page.to_vec())
            .collect()
    }

    /// Breaks a single word wider than the page at character boundaries.
    fn split_overlong(&self, word: &str, max_width: f32) -> Vec<String> {
        let mut pieces = Vec::new();
        let mut current = String::new();

        for ch in word.chars() {
            current.push(ch);
            if current.chars().count() > 1
                && self.font_manager.text_width(&current, FONT, FONT_SIZE) > max_width
            {
                current.pop();
                pieces.push(std::mem::take(&mut current));
                current.push(ch);
            }
        }
        if !current.is_empty() {
            pieces.push(current);
        }

        pieces
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new("Summary")
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError> {
        let pages = self.layout(text);
        let (_, height) = self.page_size.dimensions();

        let mut builder =
            DocumentBuilder::new().metadata(DocumentMetadata::new().title(self.title.as_str()));

        for lines in &pages {
            let mut page = builder
                .page(self.page_size)
                .text_config(TextConfig {
                    font: FONT.to_string(),
                    size: FONT_SIZE,
                    line_height: LINE_HEIGHT,
                    ..TextConfig::default()
                })
                .at(MARGIN, height - MARGIN - FONT_SIZE);
            for line in lines {
                page = if line.is_empty() {
                    page.space(FONT_SIZE * LINE_HEIGHT)
                } else {
                    page.text(line)
                };
            }
            page.done();
        }

        let bytes = builder
            .build()
            .map_err(|e| RenderError::GenerationFailed(e.to_string()))?;

        tracing::debug!(pages = pages.len(), bytes = bytes.len(), "Summary PDF rendered");

        Ok(bytes)
    }
}

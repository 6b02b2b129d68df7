use std::fmt::Write;

use crate::domain::{Sentiment, SentimentLabel, SummaryReport};

#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub pasted_text: String,
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    pub summary: String,
    pub sentiment: Sentiment,
    pub download_href: String,
    pub input_words: usize,
    pub truncated: bool,
}

impl PageView {
    pub fn form_only(pasted_text: impl Into<String>) -> Self {
        Self {
            pasted_text: pasted_text.into(),
            result: None,
        }
    }

    pub fn with_report(pasted_text: impl Into<String>, report: &SummaryReport) -> Self {
        Self {
            pasted_text: pasted_text.into(),
            result: Some(ResultView {
                summary: report.summary.clone(),
                sentiment: report.sentiment,
                download_href: format!("/download/{}", report.id),
                input_words: report.input_words,
                truncated: report.truncated,
            }),
        }
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn badge_class(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "bg-success",
        SentimentLabel::Negative => "bg-danger",
        SentimentLabel::Neutral => "bg-secondary",
    }
}

const HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>Smart Notes Summarizer</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"/>
  <style>
    body { background-color: #e8f0fe; }
    .container { max-width: 900px; }
    .card { border-radius: 12px; }
    textarea { resize: vertical; font-size: 1rem; }
    footer { font-size: 0.9rem; }
  </style>
</head>
<body>
<nav class="navbar navbar-dark bg-primary mb-4">
  <div class="container-fluid">
    <span class="navbar-brand mb-0 h1"><i class="fas fa-book-reader"></i> Smart Notes Summarizer</span>
  </div>
</nav>
<div class="container">
"#;

const FOOT: &str = r#"  <footer class="text-center text-muted mt-4">
    Smart Notes Summarizer
  </footer>
</div>
</body>
</html>
"#;

pub fn render_page(view: &PageView) -> String {
    let mut html = String::from(HEAD);

    let _ = write!(
        html,
        r#"  <div class="card shadow-sm mb-4">
    <div class="card-body">
      <form method="POST" enctype="multipart/form-data">
        <div class="mb-3">
          <label class="form-label"><strong>Paste Your Text</strong></label>
          <textarea name="text" rows="10" class="form-control" placeholder="Paste content here...">{}</textarea>
        </div>
        <div class="mb-3">
          <label class="form-label"><strong>Or Upload a File</strong> (.txt or .pdf)</label>
          <input type="file" name="file" class="form-control">
        </div>
        <button type="submit" class="btn btn-primary w-100 btn-lg"><i class="fas fa-magic"></i> Summarize</button>
      </form>
    </div>
  </div>
"#,
        escape_html(&view.pasted_text)
    );

    if let Some(result) = &view.result {
        render_result(&mut html, result);
    }

    html.push_str(FOOT);
    html
}

fn render_result(html: &mut String, result: &ResultView) {
    if result.truncated {
        html.push_str(
            r#"  <div class="alert alert-warning">Input was longer than the model accepts; only the beginning was summarized.</div>
"#,
        );
    }

    let label = result.sentiment.label();
    let _ = write!(
        html,
        r#"  <div class="card shadow-sm mb-4" id="summary">
    <div class="card-header bg-success text-white">
      <i class="fas fa-lightbulb"></i> Summary
    </div>
    <div class="card-body">
      <p style="font-size: 1.1rem;">{summary}</p>
      <small class="text-muted" id="input-words">{input_words} words of input</small>
    </div>
  </div>

  <div class="card shadow-sm mb-4" id="sentiment">
    <div class="card-header bg-info text-white">
      <i class="fas fa-smile"></i> Sentiment Analysis
    </div>
    <div class="card-body">
      <p style="font-size: 1.1rem;">
        <strong>Polarity:</strong> {polarity:.3}
        <span class="badge {badge}">{label}</span><br>
        <strong>Subjectivity:</strong> {subjectivity:.3}
      </p>
    </div>
  </div>

  <a href="{href}" class="btn btn-outline-success w-100 mb-4" id="download"><i class="fas fa-download"></i> Download Summary as PDF</a>
"#,
        summary = escape_html(&result.summary),
        input_words = result.input_words,
        polarity = result.sentiment.polarity(),
        subjectivity = result.sentiment.subjectivity(),
        badge = badge_class(label),
        label = label,
        href = escape_html(&result.download_href),
    );
}

pub trait DocumentRenderer: Send + Sync {
    fn render(&self, text: &str) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("pdf generation failed: {0}")]
    GenerationFailed(String),
}

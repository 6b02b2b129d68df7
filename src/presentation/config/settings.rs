use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::ports::SummaryLength;
use crate::application::services::SummarizationSettings;

use super::environment::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub summarizer: SummarizerSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub output_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    pub provider: SummarizerProvider,
    pub model_id: String,
    pub revision: String,
    pub max_input_words: usize,
    pub min_summary_tokens: usize,
    pub max_summary_tokens: usize,
    pub max_concurrent_inferences: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerProvider {
    Local,
    Lead,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Layers built-in defaults, then `appsettings.<env>.toml` if present,
    /// then `APP_*` environment variables (`APP_SERVER__PORT=8080`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 16)?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("storage.output_dir", "summaries")?
            .set_default("summarizer.provider", "local")?
            .set_default("summarizer.model_id", "google/flan-t5-base")?
            .set_default("summarizer.revision", "main")?
            .set_default("summarizer.max_input_words", 1024)?
            .set_default("summarizer.min_summary_tokens", 40)?
            .set_default("summarizer.max_summary_tokens", 150)?
            .set_default("summarizer.max_concurrent_inferences", 1)?
            .set_default(
                "logging.level",
                "info,notes_summarizer=debug,tower_http=debug",
            )?
            .set_default("logging.json", false)?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

impl SummarizerSettings {
    pub fn to_service_settings(&self) -> SummarizationSettings {
        SummarizationSettings {
            max_input_words: self.max_input_words,
            length: SummaryLength {
                min_tokens: self.min_summary_tokens,
                max_tokens: self.max_summary_tokens,
            },
            max_concurrent_inferences: self.max_concurrent_inferences,
        }
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

mod init_tracing;
mod request_id;
mod text_preview;
mod tracing_config;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use text_preview::preview_for_log;
pub use tracing_config::TracingConfig;

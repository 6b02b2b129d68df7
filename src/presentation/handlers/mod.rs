mod download;
mod health;
mod home;

pub use download::{download_handler, download_latest_handler};
pub use health::health_handler;
pub use home::{index_handler, summarize_handler};

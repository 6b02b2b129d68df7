use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use notes_summarizer::application::ports::FileLoader;
use notes_summarizer::application::services::{ExtractionService, SummarizationService};
use notes_summarizer::domain::ContentType;
use notes_summarizer::infrastructure::observability::{TracingConfig, init_tracing};
use notes_summarizer::infrastructure::rendering::PdfRenderer;
use notes_summarizer::infrastructure::sentiment::PatternAnalyzer;
use notes_summarizer::infrastructure::storage::ObjectArtifactStore;
use notes_summarizer::infrastructure::summarization::SummarizerFactory;
use notes_summarizer::infrastructure::text_processing::{
    CompositeFileLoader, PdfAdapter, PlainTextAdapter,
};
use notes_summarizer::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    let upload_store = Arc::new(
        ObjectArtifactStore::local(&settings.storage.upload_dir)
            .context("failed to open upload directory")?,
    );
    let output_store = Arc::new(
        ObjectArtifactStore::local(&settings.storage.output_dir)
            .context("failed to open output directory")?,
    );

    let file_loader = Arc::new(CompositeFileLoader::new(vec![
        (
            ContentType::Pdf,
            Arc::new(PdfAdapter::new()) as Arc<dyn FileLoader>,
        ),
        (ContentType::Text, Arc::new(PlainTextAdapter)),
    ]));

    let summarizer = SummarizerFactory::create(&settings.summarizer)
        .context("failed to initialize summarizer")?;
    let sentiment_analyzer =
        Arc::new(PatternAnalyzer::new().context("failed to load sentiment lexicon")?);
    let renderer = Arc::new(PdfRenderer::default());

    let extraction_service = Arc::new(ExtractionService::new(file_loader, upload_store));
    let summarization_service = Arc::new(SummarizationService::new(
        summarizer,
        sentiment_analyzer,
        renderer,
        output_store,
        settings.summarizer.to_service_settings(),
    ));

    let state = AppState {
        extraction_service,
        summarization_service,
        max_upload_bytes: settings.server.max_upload_bytes(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!(
        %addr,
        provider = ?settings.summarizer.provider,
        "Notes summarizer listening"
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

use notes_summarizer::application::ports::SummaryLength;
use notes_summarizer::presentation::config::{Settings, SummarizerProvider};
use notes_summarizer::presentation::Environment;

#[test]
fn given_no_overrides_when_loading_settings_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.server.max_upload_bytes(), 16 * 1024 * 1024);
    assert_eq!(settings.storage.upload_dir, "uploads");
    assert_eq!(settings.storage.output_dir, "summaries");
    assert_eq!(settings.summarizer.provider, SummarizerProvider::Local);
    assert_eq!(settings.summarizer.max_input_words, 1024);
    assert!(!settings.logging.json);
}

#[test]
fn given_summarizer_settings_when_converting_then_service_settings_match() {
    let settings = Settings::load(Environment::Test).unwrap();

    let service = settings.summarizer.to_service_settings();

    assert_eq!(service.max_input_words, 1024);
    assert_eq!(
        service.length,
        SummaryLength {
            min_tokens: 40,
            max_tokens: 150
        }
    );
    assert_eq!(service.max_concurrent_inferences, 1);
}

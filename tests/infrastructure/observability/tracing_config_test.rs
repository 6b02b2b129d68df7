use notes_summarizer::infrastructure::observability::TracingConfig;
use notes_summarizer::presentation::Environment;
use notes_summarizer::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_fields_are_carried_over() {
    let logging = LoggingSettings {
        level: "warn,notes_summarizer=info".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.default_filter, "warn,notes_summarizer=info");
}

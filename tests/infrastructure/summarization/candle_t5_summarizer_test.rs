use notes_summarizer::application::ports::{Summarizer, SummaryLength};
use notes_summarizer::infrastructure::summarization::CandleT5Summarizer;

const TEST_MODEL: &str = "google/flan-t5-small";

#[tokio::test]
#[ignore = "downloads model weights from the Hugging Face hub"]
async fn given_real_model_when_summarizing_then_output_is_bounded_and_deterministic() {
    let summarizer = CandleT5Summarizer::new(TEST_MODEL, "main").unwrap();
    let text = "Rust is a systems programming language focused on safety, speed and \
                concurrency. It achieves memory safety without garbage collection by \
                tracking ownership of values at compile time.";
    let length = SummaryLength {
        min_tokens: 5,
        max_tokens: 30,
    };

    let first = summarizer.summarize(text, length).await.unwrap();
    let second = summarizer.summarize(text, length).await.unwrap();

    assert!(!first.text.is_empty());
    assert!(!first.input_truncated);
    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "downloads model weights from the Hugging Face hub"]
async fn given_input_beyond_context_window_when_summarizing_then_reports_truncation() {
    let summarizer = CandleT5Summarizer::new(TEST_MODEL, "main").unwrap();
    let text = "Ownership moves values between bindings. ".repeat(200);
    let length = SummaryLength {
        min_tokens: 5,
        max_tokens: 20,
    };

    let summary = summarizer.summarize(&text, length).await.unwrap();

    assert!(summary.input_truncated);
}

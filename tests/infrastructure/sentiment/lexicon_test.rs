use notes_summarizer::infrastructure::sentiment::Lexicon;

#[test]
fn given_embedded_lexicon_when_loading_then_contains_common_words() {
    let lexicon = Lexicon::embedded().unwrap();

    assert!(!lexicon.is_empty());
    assert!(lexicon.get("good").is_some());
    assert!(lexicon.get("terrible").is_some());
}

#[test]
fn given_intensifier_entry_when_inspected_then_is_modifier() {
    let lexicon = Lexicon::embedded().unwrap();

    assert!(lexicon.get("very").unwrap().is_modifier());
    assert!(!lexicon.get("good").unwrap().is_modifier());
}

#[test]
fn given_mixed_case_keys_when_loading_then_lookup_is_lowercase() {
    let lexicon = Lexicon::from_json(r#"{"Great": [0.8, 0.75, 1.0]}"#).unwrap();

    assert_eq!(lexicon.len(), 1);
    assert!(lexicon.get("great").is_some());
}

#[test]
fn given_malformed_json_when_loading_then_returns_error() {
    assert!(Lexicon::from_json(r#"{"good": "positive"}"#).is_err());
}

#[test]
fn given_embedded_lexicon_when_loading_then_covers_everyday_opinion_words() {
    let lexicon = Lexicon::embedded().unwrap();

    assert!(lexicon.len() >= 1000);
    for word in ["engaging", "insightful", "tedious", "confusing", "flawless", "shoddy"] {
        assert!(lexicon.get(word).is_some(), "missing {word}");
    }
    assert!(lexicon.get("insightful").unwrap().polarity > 0.0);
    assert!(lexicon.get("tedious").unwrap().polarity < 0.0);
}

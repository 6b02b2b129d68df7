use regex::Regex;
use std::sync::LazyLock;

use crate::application::ports::SentimentAnalyzer;
use crate::domain::Sentiment;

use super::lexicon::{Lexicon, LexiconError};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)?|!+|[.,;:?]").unwrap());

const NEGATIONS: &[&str] = &["not", "never", "no", "neither", "nor", "cannot"];
/// Negation still applies this many unscored tokens later ("not a good idea").
const NEGATION_REACH: usize = 3;
const NEGATION_FACTOR: f64 = -0.5;
const EXCLAMATION_EMPHASIS: f64 = 1.25;

/// Lexicon-based polarity/subjectivity scorer: the score is the mean of the
/// assessments of every lexicon word, adjusted for preceding intensifiers
/// and negations.
pub struct PatternAnalyzer {
    lexicon: Lexicon,
}

#[derive(Debug, Clone, Copy)]
struct Assessment {
    polarity: f64,
    subjectivity: f64,
}

impl PatternAnalyzer {
    pub fn new() -> Result<Self, LexiconError> {
        Ok(Self::with_lexicon(Lexicon::embedded()?))
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn assess(&self, text: &str) -> Vec<Assessment> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = TOKEN.find_iter(&lowered).map(|m| m.as_str()).collect();

        let mut assessments: Vec<Assessment> = Vec::new();
        let mut pending_intensity: Option<f64> = None;
        let mut negation_window = 0usize;

        for (index, token) in tokens.iter().enumerate() {
            if matches!(*token, "." | "," | ";" | ":" | "?") {
                pending_intensity = None;
                negation_window = 0;
                continue;
            }

            if token.starts_with('!') {
                if let Some(last) = assessments.last_mut() {
                    last.polarity *= EXCLAMATION_EMPHASIS;
                }
                continue;
            }

            if is_negation(token) {
                negation_window = NEGATION_REACH;
                continue;
            }

            let Some(entry) = self.lexicon.get(token) else {
                pending_intensity = None;
                negation_window = negation_window.saturating_sub(1);
                continue;
            };

            let modifies_next = tokens
                .get(index + 1)
                .is_some_and(|next| self.lexicon.get(next).is_some());
            if entry.is_modifier() && modifies_next {
                pending_intensity = Some(pending_intensity.unwrap_or(1.0) * entry.intensity);
                continue;
            }

            let mut assessment = Assessment {
                polarity: entry.polarity,
                subjectivity: entry.subjectivity,
            };
            if let Some(intensity) = pending_intensity.take() {
                assessment.polarity *= intensity;
                assessment.subjectivity *= intensity;
            }
            if negation_window > 0 {
                assessment.polarity *= NEGATION_FACTOR;
                negation_window = 0;
            }
            assessments.push(assessment);
        }

        assessments
    }
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.contains(&token) || token.ends_with("n't")
}

impl SentimentAnalyzer for PatternAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let assessments = self.assess(text);
        if assessments.is_empty() {
            return Sentiment::neutral();
        }

        let count = assessments.len() as f64;
        let polarity = assessments.iter().map(|a| a.polarity).sum::<f64>() / count;
        let subjectivity = assessments.iter().map(|a| a.subjectivity).sum::<f64>() / count;

        Sentiment::new(polarity, subjectivity)
    }
}

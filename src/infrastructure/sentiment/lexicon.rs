use std::collections::HashMap;

const EMBEDDED_LEXICON: &str = include_str!("../../../assets/sentiment_lexicon.json");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
}

impl LexiconEntry {
    /// Adverbs such as "very" scale the word that follows them.
    pub fn is_modifier(&self) -> bool {
        (self.intensity - 1.0).abs() > f64::EPSILON
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("invalid lexicon: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Word → (polarity, subjectivity, intensity) table, keyed by lowercase word.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: HashMap<String, LexiconEntry>,
}

impl Lexicon {
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::from_json(EMBEDDED_LEXICON)
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let raw: HashMap<String, (f64, f64, f64)> = serde_json::from_str(json)?;
        let entries = raw
            .into_iter()
            .map(|(word, (polarity, subjectivity, intensity))| {
                (
                    word.to_lowercase(),
                    LexiconEntry {
                        polarity,
                        subjectivity,
                        intensity,
                    },
                )
            })
            .collect();
        Ok(Self { entries })
    }

    pub fn get(&self, word: &str) -> Option<&LexiconEntry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

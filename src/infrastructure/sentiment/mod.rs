mod lexicon;
mod pattern_analyzer;

pub use lexicon::{Lexicon, LexiconEntry, LexiconError};
pub use pattern_analyzer::PatternAnalyzer;

use std::fmt;

const LABEL_THRESHOLD: f64 = 0.1;

/// Polarity in `[-1, 1]` and subjectivity in `[0, 1]`; both are clamped on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sentiment {
    polarity: f64,
    subjectivity: f64,
}

impl Sentiment {
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: clamp_finite(polarity, -1.0, 1.0),
            subjectivity: clamp_finite(subjectivity, 0.0, 1.0),
        }
    }

    pub fn neutral() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn polarity(&self) -> f64 {
        self.polarity
    }

    pub fn subjectivity(&self) -> f64 {
        self.subjectivity
    }

    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_polarity(self.polarity)
    }
}

fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(min, max)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > LABEL_THRESHOLD {
            Self::Positive
        } else if polarity < -LABEL_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Maps the free-text sentiment labels produced upstream onto display categories.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
    Unknown,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Unknown => "unknown",
        }
    }
}

/// Badge colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Green,
    Red,
    Blue,
    Gray,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Red => "red",
            Tone::Blue => "blue",
            Tone::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Check,
    Cross,
    Alert,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Check => "✓",
            Icon::Cross => "✗",
            Icon::Alert => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: Sentiment,
    pub tone: Tone,
    pub icon: Icon,
}

impl Classification {
    const fn of(category: Sentiment) -> Self {
        match category {
            Sentiment::Positive => Self { category, tone: Tone::Green, icon: Icon::Check },
            Sentiment::Negative => Self { category, tone: Tone::Red, icon: Icon::Cross },
            Sentiment::Neutral => Self { category, tone: Tone::Blue, icon: Icon::Alert },
            Sentiment::Unknown => Self { category, tone: Tone::Gray, icon: Icon::Alert },
        }
    }
}

// Checked in order; the first keyword contained in the label wins, so
// "positive but negative outlook" is Positive.
const KEYWORDS: [(&str, Sentiment); 3] = [
    ("positive", Sentiment::Positive),
    ("negative", Sentiment::Negative),
    ("neutral", Sentiment::Neutral),
];

/// Classifies a sentiment label by case-insensitive substring match.
pub fn classify(label: Option<&str>) -> Classification {
    let label = match label {
        Some(label) if !label.is_empty() => label.to_lowercase(),
        _ => return Classification::of(Sentiment::Unknown),
    };

    let category = KEYWORDS
        .iter()
        .find(|(keyword, _)| label.contains(keyword))
        .map(|(_, category)| *category)
        .unwrap_or(Sentiment::Unknown);

    Classification::of(category)
}

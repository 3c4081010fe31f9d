//! What the dashboard shows, independent of the surface it is drawn on.
//!
//! [`ViewState`] is the single source of truth held by the controller and
//! [`render`] turns it into a [`Screen`]: every fallback text is decided here
//! so the HTML and terminal surfaces only lay things out.

use crate::sentiment::{classify, Icon, Sentiment, Tone};
use crate::types::SummaryRecord;
use url::Url;

pub const LOADING_MESSAGE: &str = "Loading news...";
pub const FAILURE_TITLE: &str = "Failed to load news";
pub const RELOAD_ACTION: &str = "Try Again";
pub const EMPTY_MESSAGE: &str = "No news summaries available at the moment.";
pub const HEADING: &str = "AI News Digest";
pub const TAGLINE: &str = "Stay informed with AI-powered summaries of the latest news";

pub const UNKNOWN_SOURCE: &str = "Unknown Source";
pub const NO_TITLE: &str = "No Title";
pub const UNKNOWN_SENTIMENT: &str = "Unknown";
pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_LINK: &str = "#";
pub const LINK_LABEL: &str = "Read Full Article";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Loading,
    Error { message: String },
    Ready { records: Vec<SummaryRecord> },
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading {
        message: &'static str,
    },
    Failure {
        title: &'static str,
        message: String,
        action: &'static str,
    },
    Empty {
        heading: &'static str,
        tagline: &'static str,
        message: &'static str,
    },
    Grid {
        heading: &'static str,
        tagline: &'static str,
        cards: Vec<Card>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Stable identity for list rendering, the record id.
    pub key: String,
    pub source: String,
    pub title: String,
    pub badge: Badge,
    pub summary: String,
    pub link: Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub category: Sentiment,
    pub tone: Tone,
    pub icon: Icon,
    pub text: String,
}

/// Outbound article link. Always opened in a new browsing context with no
/// opener or referrer. `href` is either an http(s) URL or [`NO_LINK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub label: &'static str,
}

pub fn render(state: &ViewState) -> Screen {
    match state {
        ViewState::Loading => Screen::Loading { message: LOADING_MESSAGE },
        ViewState::Error { message } => Screen::Failure {
            title: FAILURE_TITLE,
            message: message.clone(),
            action: RELOAD_ACTION,
        },
        ViewState::Ready { records } if records.is_empty() => Screen::Empty {
            heading: HEADING,
            tagline: TAGLINE,
            message: EMPTY_MESSAGE,
        },
        ViewState::Ready { records } => Screen::Grid {
            heading: HEADING,
            tagline: TAGLINE,
            cards: records.iter().map(card).collect(),
        },
    }
}

fn card(record: &SummaryRecord) -> Card {
    let article = record.article.as_ref();
    let classification = classify(record.sentiment.as_deref());

    Card {
        key: record.id.clone(),
        source: or_fallback(article.and_then(|a| a.source.as_deref()), UNKNOWN_SOURCE),
        title: or_fallback(article.and_then(|a| a.title.as_deref()), NO_TITLE),
        badge: Badge {
            category: classification.category,
            tone: classification.tone,
            icon: classification.icon,
            text: or_fallback(record.sentiment.as_deref(), UNKNOWN_SENTIMENT),
        },
        summary: or_fallback(record.summary.as_deref(), NO_SUMMARY),
        link: Link {
            href: link_target(article.and_then(|a| a.url.as_deref())),
            label: LINK_LABEL,
        },
    }
}

// Anything that is not a plain web URL (javascript:, data:, relative junk)
// is not worth following.
fn link_target(url: Option<&str>) -> String {
    match url.map(Url::parse) {
        Some(Ok(parsed)) if matches!(parsed.scheme(), "http" | "https") => parsed.to_string(),
        _ => NO_LINK.to_string(),
    }
}

fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

use async_trait::async_trait;
use nt_core::{ArticleRef, Error, Result, SummaryProvider, SummaryRecord};

/// Serves a fixed answer. Used for offline runs and tests.
#[derive(Debug, Clone)]
pub struct InMemoryProvider {
    outcome: std::result::Result<Vec<SummaryRecord>, String>,
}

impl InMemoryProvider {
    pub fn new(records: Vec<SummaryRecord>) -> Self {
        Self { outcome: Ok(records) }
    }

    /// Every fetch fails as if the provider had reported `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { outcome: Err(message.into()) }
    }

    pub fn sample() -> Self {
        Self::new(vec![
            SummaryRecord::new("sample-1")
                .with_summary("Regional exporters reported their strongest quarter in three years.")
                .with_sentiment("Positive")
                .with_explanation("Growth figures beat expectations")
                .with_article(ArticleRef {
                    title: Some("Exports surge in third quarter".to_string()),
                    url: Some("https://example.com/news/exports".to_string()),
                    source: Some("Example Wire".to_string()),
                }),
            SummaryRecord::new("sample-2")
                .with_summary("Flooding closed two highways and delayed deliveries across the north.")
                .with_sentiment("negative")
                .with_article(ArticleRef {
                    title: Some("Floods disrupt northern routes".to_string()),
                    url: None,
                    source: Some("Example Daily".to_string()),
                }),
            SummaryRecord::new("sample-3")
                .with_summary("The council will publish the revised budget next week.")
                .with_sentiment("Neutral"),
            SummaryRecord::new("sample-4"),
        ])
    }
}

#[async_trait]
impl SummaryProvider for InMemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    async fn fetch_summaries(&self) -> Result<Vec<SummaryRecord>> {
        self.outcome.clone().map_err(Error::Provider)
    }
}

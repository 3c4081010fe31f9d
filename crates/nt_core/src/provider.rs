use async_trait::async_trait;
use crate::types::SummaryRecord;
use crate::Result;

#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Fetch every summary in provider order. One request, no retries.
    async fn fetch_summaries(&self) -> Result<Vec<SummaryRecord>>;
}

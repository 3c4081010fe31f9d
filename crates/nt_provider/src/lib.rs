use nt_core::{Error, ProviderConfig, Result, SummaryProvider};
use std::sync::Arc;

pub mod backends;

pub use backends::*;

/// Builds the provider backend selected on the command line.
pub fn create_provider(name: &str, config: Option<ProviderConfig>) -> Result<Arc<dyn SummaryProvider>> {
    match name {
        "hasura" => {
            let config = config.ok_or_else(|| {
                Error::Config("the hasura provider needs an endpoint URL and admin secret".to_string())
            })?;
            Ok(Arc::new(HasuraProvider::new(config)?))
        }
        "memory" => Ok(Arc::new(InMemoryProvider::sample())),
        other => Err(Error::Config(format!(
            "unknown provider: {} (available: hasura, memory)",
            other
        ))),
    }
}

use async_trait::async_trait;
use nt_core::types::dedup_by_id;
use nt_core::{Error, ProviderConfig, Result, SummaryProvider, SummaryRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

pub const SUMMARIES_QUERY: &str = r#"
query GetSummaries {
  summaries {
    id
    summary
    sentiment
    explanation
    Article {
      title
      url
      source
    }
  }
}
"#;

// Bodies quoted back in status errors are cut to this many chars.
const MAX_ERROR_BODY: usize = 200;

#[derive(Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

/// Raw envelope. `data` stays untyped until `errors` has been ruled out.
#[derive(Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
    #[serde(default)]
    data: Option<Value>,
}

#[derive(Deserialize)]
struct GraphQlError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct SummariesData {
    #[serde(default)]
    summaries: Option<Vec<SummaryRecord>>,
}

/// Reads summaries from a Hasura GraphQL endpoint.
pub struct HasuraProvider {
    client: Arc<Client>,
    config: ProviderConfig,
}

impl HasuraProvider {
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client: Arc::new(client),
            config,
        })
    }
}

impl fmt::Debug for HasuraProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HasuraProvider")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

#[async_trait]
impl SummaryProvider for HasuraProvider {
    fn name(&self) -> &str {
        "hasura"
    }

    async fn fetch_summaries(&self) -> Result<Vec<SummaryRecord>> {
        info!(endpoint = %self.config.endpoint_url, "🔎 Querying summaries");

        let response = self
            .client
            .post(self.config.endpoint_url.clone())
            .header(self.config.secret_header.as_str(), self.config.admin_secret.as_str())
            .json(&GraphQlRequest { query: SUMMARIES_QUERY })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "provider responded");

        decode_summaries(status.as_u16(), &body)
    }
}

/// Turns a provider answer into records or the error to show.
///
/// A reported `errors` list wins over everything else, including a non-2xx
/// status, so the provider's own message reaches the user.
pub fn decode_summaries(status: u16, body: &str) -> Result<Vec<SummaryRecord>> {
    let success = (200..300).contains(&status);

    let envelope: GraphQlResponse = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(_) if !success => return Err(status_error(status, body)),
        Err(e) => return Err(Error::Serialization(e)),
    };

    if let Some(first) = envelope.errors.as_ref().and_then(|errors| errors.first()) {
        let message = first
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "provider reported an error without a message".to_string());
        return Err(Error::Provider(message));
    }

    if !success {
        return Err(status_error(status, body));
    }

    let data: SummariesData = match envelope.data {
        Some(Value::Null) | None => {
            return Err(Error::MalformedResponse(
                "response contained neither data nor errors".to_string(),
            ))
        }
        Some(data) => serde_json::from_value(data)?,
    };

    let records = data.summaries.ok_or_else(|| {
        Error::MalformedResponse("response data has no summaries field".to_string())
    })?;
    debug!(count = records.len(), "decoded summaries");

    Ok(dedup_by_id(records))
}

fn status_error(status: u16, body: &str) -> Error {
    Error::Status {
        status,
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    }
}

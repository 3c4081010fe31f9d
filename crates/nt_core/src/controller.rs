use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::provider::SummaryProvider;
use crate::types::dedup_by_id;
use crate::view::ViewState;

/// Owns the view lifecycle of one mount: `Loading`, then exactly one
/// transition to `Ready` or `Error`.
///
/// Dropping the controller unmounts it. The outstanding fetch is aborted and
/// a completion that races the drop finds the channel closed, so a torn down
/// view is never written to.
pub struct ViewController {
    provider: Arc<dyn SummaryProvider>,
    state: watch::Receiver<ViewState>,
    task: JoinHandle<()>,
}

impl ViewController {
    /// Must be called from within a tokio runtime.
    pub fn mount(provider: Arc<dyn SummaryProvider>) -> Self {
        let (tx, rx) = watch::channel(ViewState::Loading);
        let task = tokio::spawn(fetch_once(provider.clone(), tx));
        Self { provider, state: rx, task }
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Waits until the fetch settles and returns the resulting state.
    pub async fn settled(&mut self) -> ViewState {
        let settled = self
            .state
            .wait_for(|state| !state.is_loading())
            .await
            .map(|state| state.clone());
        settled.unwrap_or_else(|_| self.state())
    }

    /// Full reload: tears this mount down and starts over at `Loading`.
    pub fn reload(self) -> Self {
        let provider = self.provider.clone();
        drop(self);
        Self::mount(provider)
    }
}

impl Drop for ViewController {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn fetch_once(provider: Arc<dyn SummaryProvider>, tx: watch::Sender<ViewState>) {
    let started = Instant::now();
    let next = tokio::select! {
        _ = tx.closed() => {
            debug!(provider = provider.name(), "view unmounted before fetch settled");
            return;
        }
        result = provider.fetch_summaries() => match result {
            Ok(records) => {
                let records = dedup_by_id(records);
                info!(
                    provider = provider.name(),
                    count = records.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "📰 summaries loaded"
                );
                ViewState::Ready { records }
            }
            Err(e) => {
                error!(
                    provider = provider.name(),
                    provider_reported = e.is_provider_reported(),
                    "failed to load summaries: {}",
                    e
                );
                ViewState::Error { message: e.to_string() }
            }
        }
    };

    if tx.send(next).is_err() {
        debug!(provider = provider.name(), "view unmounted, dropping fetch result");
    }
}

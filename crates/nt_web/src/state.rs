use std::sync::Arc;
use nt_core::SummaryProvider;

pub struct AppState {
    pub provider: Arc<dyn SummaryProvider>,
}

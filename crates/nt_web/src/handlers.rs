use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use nt_core::{render, Screen, ViewController};
use std::sync::Arc;
use tracing::debug;
use crate::html;
use crate::AppState;

/// Every page load is a fresh mount. If the client goes away first, the
/// handler future is dropped together with the controller, which unmounts it.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut controller = ViewController::mount(state.provider.clone());
    let view = controller.settled().await;

    let screen = render(&view);
    let status = match screen {
        Screen::Failure { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::OK,
    };
    debug!(status = status.as_u16(), "rendered dashboard");

    (status, Html(html::page(&screen)))
}

pub async fn health() -> &'static str {
    "ok"
}

pub mod config;
pub mod controller;
pub mod error;
pub mod provider;
pub mod sentiment;
pub mod types;
pub mod view;

pub use config::ProviderConfig;
pub use controller::ViewController;
pub use error::{Error, Result};
pub use provider::SummaryProvider;
pub use sentiment::{classify, Classification, Sentiment};
pub use types::{ArticleRef, SummaryRecord};
pub use view::{render, Screen, ViewState};

mod app;
mod config;
mod fragment;
mod ingest;
mod ui;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use fragment::FragmentError;
pub use ingest::IngestError;
pub use ui::UiError;
pub use validation::ValidationError;

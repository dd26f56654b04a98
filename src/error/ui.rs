use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("Failed to set up terminal: {source}")]
    Setup {
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to draw frame: {source}")]
    Draw {
        #[source]
        source: std::io::Error,
    },
}

use thiserror::Error;

/// Errors from loading specs and producing output. The panel builder itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid chart document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("chart document must be an array of charts or an object with a `charts` array")]
    Shape,
    #[error("drawing failed: {0}")]
    Draw(String),
}

pub type Result<T> = std::result::Result<T, Error>;

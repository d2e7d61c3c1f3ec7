use std::path::PathBuf;

/// Failure of a [`crate::WorkerSource`] to deliver worker records.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("Reading worker records failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Requesting the worker report failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("The master answered {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Worker records in {path:?} are malformed: {message}")]
    Decode { path: PathBuf, message: String },
    #[error("Invalid master URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Errors surfaced by report generation.
#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("Writing the report failed: {0}")]
    Output(#[source] std::io::Error),
    #[error("Exporting the report failed: {0}")]
    Export(#[from] serde_json::Error),
}

//! # Worker Sources
//!
//! Where worker records come from. The report core only sees the
//! [`WorkerSource`] trait:
//!
//! - **`HttpWorkerSource`**: asks the cluster master for its worker report
//! - **`FileWorkerSource`**: reads a cluster snapshot from a JSON or YAML file

pub mod file_source;
pub mod http_source;

use crate::{
    error::SourceError,
    metrics::WorkerRecord,
    options::WorkerReportOptions,
};
pub use file_source::FileWorkerSource;
pub use http_source::HttpWorkerSource;

/// Delivers the worker records selected by `options`.
///
/// Implementations block until the records are available. Failures are not
/// retried.
pub trait WorkerSource {
    fn worker_report(&self, options: &WorkerReportOptions) -> Result<Vec<WorkerRecord>, SourceError>;

    /// Get the name of this source
    fn name(&self) -> &'static str;
}

impl<T: WorkerSource + ?Sized> WorkerSource for Box<T> {
    fn worker_report(&self, options: &WorkerReportOptions) -> Result<Vec<WorkerRecord>, SourceError> {
        (**self).worker_report(options)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

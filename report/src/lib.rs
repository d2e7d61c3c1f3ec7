//! # Capacity Report
//!
//! Aggregates the storage statistics of a cluster's workers into a capacity report.
//!
//! ## Architecture
//!
//! - **`options`**: resolves the worker filter (all, live, lost, specified workers)
//! - **`sources`**: where worker records come from (master HTTP endpoint, snapshot file)
//! - **`metrics`**: worker records, per-tier byte maps, rows and totals
//! - **`collectors`**: the collector, the text/JSON reporter and the orchestrator running both
//! - **`format`**: human readable sizes and indentation
//!
//! ## Output
//!
//! ```text
//! Capacity information for all workers:
//!     Total Capacity: 300B
//!         Tier: MEM  Size: 100B
//!         Tier: SSD  Size: 200B
//!     Used Capacity: 150B
//!         Tier: MEM  Size: 50B
//!         Tier: SSD  Size: 100B
//!     Used Percentage: 50%
//!     Free Percentage: 50%
//!
//! Worker Name      Last Heartbeat   Storage       Total            MEM           SSD           HDD
//! w1               0                Capacity      100B             100B          0B            0B
//!                                   Used          50B (50%)        50B           0B            0B
//! ```

#[macro_use]
extern crate tracing;

pub mod collectors;
pub mod error;
pub mod format;
pub mod metrics;
pub mod options;
pub mod sources;

pub use collectors::*;
pub use error::{
    ReportError,
    SourceError,
};
pub use metrics::*;
pub use options::{
    WorkerFilter,
    WorkerRange,
    WorkerReportOptions,
    WorkerSelector,
};
pub use sources::{
    FileWorkerSource,
    HttpWorkerSource,
    WorkerSource,
};

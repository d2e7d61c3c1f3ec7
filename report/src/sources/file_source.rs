use crate::{
    error::SourceError,
    metrics::{
        ClusterSnapshot,
        WorkerRecord,
    },
    options::{
        WorkerRange,
        WorkerReportOptions,
    },
    sources::WorkerSource,
};
use std::path::{
    Path,
    PathBuf,
};

/// Reads worker records from a cluster snapshot file.
///
/// The file holds `live` and `lost` worker lists, as YAML when the extension is
/// `.yaml`/`.yml` and as JSON otherwise. The range is applied locally.
#[derive(Debug, Clone)]
pub struct FileWorkerSource {
    path: PathBuf,
}

impl FileWorkerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ClusterSnapshot, SourceError> {
        let content = std::fs::read_to_string(&self.path)?;
        let is_yaml = matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );

        let decoded = if is_yaml {
            serde_yml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        decoded.map_err(|message| SourceError::Decode {
            path: self.path.clone(),
            message,
        })
    }
}

impl WorkerSource for FileWorkerSource {
    #[instrument(level = "debug", skip(self), fields(path = ?self.path))]
    fn worker_report(&self, options: &WorkerReportOptions) -> Result<Vec<WorkerRecord>, SourceError> {
        let ClusterSnapshot { live, lost } = self.load()?;
        debug!(live = live.len(), lost = lost.len(), "Loaded cluster snapshot");

        let records = match options.range {
            WorkerRange::All => live.into_iter().chain(lost).collect(),
            WorkerRange::Live => live,
            WorkerRange::Lost => lost,
            WorkerRange::Specified => live
                .into_iter()
                .chain(lost)
                .filter(|record| options.addresses.contains(&record.host_name))
                .collect(),
        };
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "FileWorkerSource"
    }
}

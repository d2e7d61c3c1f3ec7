use capacity_report_core::WorkerFilter;
use clap::Parser;
use std::path::PathBuf;

/// Report capacity information of the cluster's workers.
///
/// Without a filter every worker is reported. At most one of `--live`, `--lost`
/// and `--workers` may be given.
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version = version(), about, long_about = None)]
pub struct Args {
    /// Live workers only.
    #[clap(long, action)]
    pub live: bool,

    /// Lost workers only.
    #[clap(long, action)]
    pub lost: bool,

    /// Specified workers only, host names or IP addresses separated by ",".
    #[clap(long, value_name = "WORKER_NAMES")]
    pub workers: Option<String>,

    /// Master to request the worker report from.
    #[clap(long, value_name = "URL", env = "CAPACITY_REPORT_MASTER_URL")]
    pub master_url: Option<String>,

    /// Read workers from a cluster snapshot file (JSON or YAML) instead of the master.
    #[clap(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Request timeout for the master, e.g. "30s" or "2m".
    #[clap(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Additionally export the report as JSON to this file.
    #[clap(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Enable debug logging.
    #[clap(short, long, action)]
    pub verbose: bool,
}

impl Args {
    /// Filter flags in the order they are checked.
    pub fn filters(&self) -> Vec<WorkerFilter> {
        let mut filters = Vec::new();
        if self.live {
            filters.push(WorkerFilter::Live);
        }
        if self.lost {
            filters.push(WorkerFilter::Lost);
        }
        if let Some(workers) = &self.workers {
            filters.push(WorkerFilter::Workers(workers.clone()));
        }
        filters
    }
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if let Some(master_url) = &self.master_url {
                cache.insert("master_url".to_string(), master_url.clone().into());
            }
            if let Some(snapshot) = &self.snapshot {
                cache.insert("snapshot".to_string(), snapshot.display().to_string().into());
            }
            if let Some(timeout) = &self.timeout {
                cache.insert("timeout".to_string(), timeout.clone().into());
            }
            if let Some(output_file) = &self.output_file {
                cache.insert("output_file".to_string(), output_file.display().to_string().into());
            }
            Ok(cache)
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let version = clap::crate_version!();
    let config_dir_path = crate::config::get_config_dir().display().to_string();

    format!(
        "\
{version}

Authors: {author}

Config directory: {config_dir_path}"
    )
}

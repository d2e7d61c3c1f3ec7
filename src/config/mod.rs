mod app_config;
mod args;

use app_config::AppConfig;
pub use app_config::get_config_dir;
pub use args::Args;
use color_eyre::Result;
use eyre::Context as _;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    path::{
        Path,
        PathBuf,
    },
    time::Duration,
};
use url::Url;

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten, skip_serializing)]
    app_config: AppConfig,
    pub master_url: Url,
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    pub timeout: String,
    pub display_tiers: Vec<String>,
    #[serde(default)]
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Embedded defaults, then `config.yaml` from the config directory, then `args`.
    pub fn new(args: &Args) -> Result<Self, config::ConfigError> {
        Self::with_config_dir(args, &get_config_dir())
    }

    pub fn with_config_dir(args: &Args, config_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("config_dir", config_dir.display().to_string())?
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Yaml));

        let config_files = [("config.yaml", config::FileFormat::Yaml)];

        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(args.clone());

        let cfg: Self = builder.build()?.try_deserialize()?;

        Ok(cfg)
    }

    pub fn config_dir(&self) -> &Path {
        &self.app_config.config_dir
    }

    pub fn timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.timeout).wrap_err_with(|| format!("Invalid timeout {:?}", self.timeout))
    }
}

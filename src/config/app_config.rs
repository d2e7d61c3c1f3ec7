use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env,
    path::PathBuf,
};

#[derive(Clone, Debug, Deserialize, Default)]
pub(super) struct AppConfig {
    #[serde(default)]
    pub(super) config_dir: PathBuf,
}

lazy_static::lazy_static! {
    static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    static ref CONFIG_FOLDER: Option<PathBuf> = env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
        .ok()
        .map(PathBuf::from);
}

/// `$CAPACITY_REPORT_CONFIG`, else the platform config directory, else `./.config`.
pub fn get_config_dir() -> PathBuf {
    if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("video", "hyper", env!("CARGO_PKG_NAME"))
}

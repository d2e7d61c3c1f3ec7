use super::TierBytes;
use serde::{
    Deserialize,
    Serialize,
};

/// Storage statistics of a single worker as reported by the data source.
///
/// Values are taken as-is: `used_bytes > capacity_bytes` or negative values are
/// carried through to the report without validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerRecord {
    pub host_name: String,
    /// Seconds since the master last heard from this worker.
    #[serde(rename = "lastContactSec", alias = "lastHeartbeatSeconds")]
    pub last_heartbeat_secs: i64,
    pub capacity_bytes: i64,
    pub used_bytes: i64,
    #[serde(default)]
    pub capacity_bytes_on_tiers: TierBytes,
    #[serde(default)]
    pub used_bytes_on_tiers: TierBytes,
}

impl WorkerRecord {
    pub fn new(host_name: impl Into<String>, last_heartbeat_secs: i64, capacity_bytes: i64, used_bytes: i64) -> Self {
        Self {
            host_name: host_name.into(),
            last_heartbeat_secs,
            capacity_bytes,
            used_bytes,
            capacity_bytes_on_tiers: TierBytes::new(),
            used_bytes_on_tiers: TierBytes::new(),
        }
    }

    pub fn with_capacity_tiers<S: Into<String>>(mut self, tiers: impl IntoIterator<Item = (S, i64)>) -> Self {
        self.capacity_bytes_on_tiers = tiers.into_iter().collect();
        self
    }

    pub fn with_used_tiers<S: Into<String>>(mut self, tiers: impl IntoIterator<Item = (S, i64)>) -> Self {
        self.used_bytes_on_tiers = tiers.into_iter().collect();
        self
    }
}

/// Worker records split by liveness, the layout of a cluster snapshot file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub live: Vec<WorkerRecord>,
    #[serde(default)]
    pub lost: Vec<WorkerRecord>,
}

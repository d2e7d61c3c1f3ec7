use super::TierBytes;
use crate::options::WorkerRange;
use serde::{
    Deserialize,
    Serialize,
};

/// Tiers shown as columns of the per-worker table unless configured otherwise.
pub const DEFAULT_DISPLAY_TIERS: [&str; 3] = ["MEM", "SSD", "HDD"];

/// Integer percentage of `used` in `capacity`, truncated toward zero.
///
/// Returns `None` for zero capacity instead of dividing. Results outside the
/// `i64` range saturate.
pub fn used_percentage(used_bytes: i64, capacity_bytes: i64) -> Option<i64> {
    if capacity_bytes == 0 {
        return None;
    }
    let percentage = 100i128 * i128::from(used_bytes) / i128::from(capacity_bytes);
    Some(i64::try_from(percentage).unwrap_or(if percentage < 0 { i64::MIN } else { i64::MAX }))
}

/// Cluster-wide sums over every worker of one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityTotals {
    pub capacity_bytes: i64,
    pub used_bytes: i64,
    pub capacity_bytes_on_tiers: TierBytes,
    pub used_bytes_on_tiers: TierBytes,
}

impl CapacityTotals {
    pub fn used_percentage(&self) -> Option<i64> {
        used_percentage(self.used_bytes, self.capacity_bytes)
    }

    pub fn free_percentage(&self) -> Option<i64> {
        self.used_percentage().map(|used| 100i64.saturating_sub(used))
    }
}

/// One line pair of the per-worker table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub host_name: String,
    pub last_heartbeat_secs: i64,
    pub capacity_bytes: i64,
    pub used_bytes: i64,
    /// Capacity per display tier, aligned with [`CapacityReport::display_tiers`].
    pub capacity_on_display_tiers: Vec<i64>,
    /// Used bytes per display tier, aligned with [`CapacityReport::display_tiers`].
    pub used_on_display_tiers: Vec<i64>,
    pub used_percentage: Option<i64>,
}

impl ReportRow {
    /// ` (N%)` suffix for the used cell, empty when the worker has no capacity.
    pub fn used_percentage_label(&self) -> String {
        match self.used_percentage {
            Some(percentage) => format!(" ({percentage}%)"),
            None => String::new(),
        }
    }
}

/// Everything one report run renders: rows sorted by heartbeat and the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityReport {
    pub range: WorkerRange,
    pub display_tiers: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub totals: CapacityTotals,
}

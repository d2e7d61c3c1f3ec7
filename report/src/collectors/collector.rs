use crate::{
    metrics::*,
    options::WorkerRange,
};

/// Builds per-worker rows and cluster-wide totals from worker records.
#[derive(Debug, Clone)]
pub struct CapacityCollector {
    display_tiers: Vec<String>,
}

impl Default for CapacityCollector {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_TIERS)
    }
}

impl CapacityCollector {
    /// `display_tiers` become the tier columns of each row. Other tiers still
    /// count toward the totals.
    pub fn new<S: Into<String>>(display_tiers: impl IntoIterator<Item = S>) -> Self {
        Self {
            display_tiers: display_tiers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn display_tiers(&self) -> &[String] {
        &self.display_tiers
    }

    /// Rows come out sorted by heartbeat age; equal ages keep their input order.
    pub fn collect(&self, mut records: Vec<WorkerRecord>, range: WorkerRange) -> CapacityReport {
        records.sort_by_key(|record| record.last_heartbeat_secs);

        let mut totals = CapacityTotals::default();
        let mut rows = Vec::with_capacity(records.len());

        for record in &records {
            totals.capacity_bytes = totals.capacity_bytes.wrapping_add(record.capacity_bytes);
            totals.used_bytes = totals.used_bytes.wrapping_add(record.used_bytes);
            totals.capacity_bytes_on_tiers.merge(&record.capacity_bytes_on_tiers);
            totals.used_bytes_on_tiers.merge(&record.used_bytes_on_tiers);

            if record.used_bytes > record.capacity_bytes {
                warn!(
                    worker = %record.host_name,
                    used = record.used_bytes,
                    capacity = record.capacity_bytes,
                    "Worker reports more used bytes than capacity"
                );
            }

            rows.push(self.row(record));
        }

        debug!(
            workers = rows.len(),
            tiers = totals.capacity_bytes_on_tiers.len(),
            capacity = totals.capacity_bytes,
            used = totals.used_bytes,
            "Collected worker capacity"
        );

        CapacityReport {
            range,
            display_tiers: self.display_tiers.clone(),
            rows,
            totals,
        }
    }

    fn row(&self, record: &WorkerRecord) -> ReportRow {
        let on_display_tiers = |tiers: &TierBytes| {
            self.display_tiers
                .iter()
                .map(|tier| tiers.get_or_zero(tier))
                .collect::<Vec<_>>()
        };

        ReportRow {
            host_name: record.host_name.clone(),
            last_heartbeat_secs: record.last_heartbeat_secs,
            capacity_bytes: record.capacity_bytes,
            used_bytes: record.used_bytes,
            capacity_on_display_tiers: on_display_tiers(&record.capacity_bytes_on_tiers),
            used_on_display_tiers: on_display_tiers(&record.used_bytes_on_tiers),
            used_percentage: used_percentage(record.used_bytes, record.capacity_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_workers() -> Vec<WorkerRecord> {
        vec![
            WorkerRecord::new("w1", 0, 100, 50)
                .with_capacity_tiers([("MEM", 100)])
                .with_used_tiers([("MEM", 50)]),
            WorkerRecord::new("w2", 0, 200, 100)
                .with_capacity_tiers([("SSD", 200)])
                .with_used_tiers([("SSD", 100)]),
        ]
    }

    #[test]
    fn sums_totals_and_tiers() {
        let report = CapacityCollector::default().collect(two_workers(), WorkerRange::All);

        assert_eq!(report.totals.capacity_bytes, 300);
        assert_eq!(report.totals.used_bytes, 150);
        assert_eq!(report.totals.used_percentage(), Some(50));
        assert_eq!(report.totals.free_percentage(), Some(50));
        assert_eq!(
            report.totals.capacity_bytes_on_tiers.iter().collect::<Vec<_>>(),
            vec![("MEM", 100), ("SSD", 200)]
        );
        assert_eq!(
            report.totals.used_bytes_on_tiers.iter().collect::<Vec<_>>(),
            vec![("MEM", 50), ("SSD", 100)]
        );
    }

    #[test]
    fn totals_do_not_depend_on_input_order() {
        let collector = CapacityCollector::default();
        let records = vec![
            WorkerRecord::new("a", 5, 10, 1).with_capacity_tiers([("HDD", 10)]),
            WorkerRecord::new("b", 1, 20, 2).with_capacity_tiers([("MEM", 5), ("HDD", 15)]),
            WorkerRecord::new("c", 3, 30, 3).with_capacity_tiers([("SSD", 30)]),
        ];
        let mut reversed = records.clone();
        reversed.reverse();

        let forward = collector.collect(records, WorkerRange::All);
        let backward = collector.collect(reversed, WorkerRange::All);

        assert_eq!(forward.totals.capacity_bytes, 60);
        assert_eq!(forward.totals.used_bytes, 6);
        assert_eq!(forward.totals.capacity_bytes, backward.totals.capacity_bytes);
        assert_eq!(forward.totals.used_bytes, backward.totals.used_bytes);
        for tier in ["MEM", "SSD", "HDD"] {
            assert_eq!(
                forward.totals.capacity_bytes_on_tiers.get(tier),
                backward.totals.capacity_bytes_on_tiers.get(tier)
            );
        }
        assert_eq!(forward.totals.capacity_bytes_on_tiers.get("HDD"), Some(25));
    }

    #[test]
    fn rows_sorted_by_heartbeat_and_stable() {
        let records = vec![
            WorkerRecord::new("late", 9, 1, 0),
            WorkerRecord::new("tie-first", 2, 1, 0),
            WorkerRecord::new("early", 0, 1, 0),
            WorkerRecord::new("tie-second", 2, 1, 0),
        ];
        let report = CapacityCollector::default().collect(records, WorkerRange::Live);

        let hosts: Vec<_> = report.rows.iter().map(|row| row.host_name.as_str()).collect();
        assert_eq!(hosts, vec!["early", "tie-first", "tie-second", "late"]);
        assert_eq!(report.range, WorkerRange::Live);
    }

    #[test]
    fn zero_capacity_worker_has_no_percentage() {
        let report = CapacityCollector::default().collect(vec![WorkerRecord::new("idle", 1, 0, 0)], WorkerRange::All);

        assert_eq!(report.rows[0].used_percentage, None);
        assert_eq!(report.rows[0].used_percentage_label(), "");
        assert_eq!(report.totals.capacity_bytes, 0);
        assert_eq!(report.totals.used_percentage(), None);
    }

    #[test]
    fn empty_input_gives_zero_totals() {
        let report = CapacityCollector::default().collect(Vec::new(), WorkerRange::All);

        assert!(report.rows.is_empty());
        assert_eq!(report.totals, CapacityTotals::default());
        assert!(report.totals.capacity_bytes_on_tiers.is_empty());
        assert!(report.totals.used_bytes_on_tiers.is_empty());
    }

    #[test]
    fn rows_show_display_tiers_only() {
        let record = WorkerRecord::new("w", 0, 400, 100)
            .with_capacity_tiers([("NVME", 100), ("SSD", 300)])
            .with_used_tiers([("SSD", 100)]);
        let report = CapacityCollector::default().collect(vec![record], WorkerRange::All);

        let row = &report.rows[0];
        assert_eq!(row.capacity_on_display_tiers, vec![0, 300, 0]);
        assert_eq!(row.used_on_display_tiers, vec![0, 100, 0]);
        assert_eq!(row.used_percentage_label(), " (25%)");
        assert_eq!(report.totals.capacity_bytes_on_tiers.get("NVME"), Some(100));
    }

    #[test]
    fn custom_display_tiers() {
        let record = WorkerRecord::new("w", 0, 100, 0).with_capacity_tiers([("NVME", 100)]);
        let collector = CapacityCollector::new(["NVME"]);
        let report = collector.collect(vec![record], WorkerRange::All);

        assert_eq!(report.display_tiers, vec!["NVME".to_string()]);
        assert_eq!(report.rows[0].capacity_on_display_tiers, vec![100]);
    }

    #[test]
    fn anomalies_pass_through() {
        let record = WorkerRecord::new("w", -4, 100, 250);
        let report = CapacityCollector::default().collect(vec![record], WorkerRange::All);

        assert_eq!(report.rows[0].used_percentage, Some(250));
        assert_eq!(report.totals.free_percentage(), Some(-150));
    }

    #[test]
    fn oversized_totals_wrap_instead_of_panicking() {
        let half = i64::MAX / 2 + 1;
        let records = vec![
            WorkerRecord::new("a", 0, half, 1).with_capacity_tiers([("HDD", half)]),
            WorkerRecord::new("b", 1, half, 1).with_capacity_tiers([("HDD", half)]),
        ];
        let report = CapacityCollector::default().collect(records, WorkerRange::All);

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.totals.capacity_bytes, i64::MIN);
        assert_eq!(report.totals.used_bytes, 2);
        assert_eq!(report.totals.capacity_bytes_on_tiers.get("HDD"), Some(i64::MIN));
        assert_eq!(report.totals.used_percentage(), Some(0));
    }
}

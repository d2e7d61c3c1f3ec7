use crate::{
    format::{
        format_size,
        push_indented,
    },
    metrics::*,
};
use std::fmt::Write as _;

/// Renders a [`CapacityReport`] as text or JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter;

impl Reporter {
    /// Summary block followed by the per-worker table.
    ///
    /// The table is left out when there are no workers. The result always ends
    /// with an empty line.
    pub fn render(&self, report: &CapacityReport) -> String {
        let mut output = String::new();
        self.push_summary(&mut output, report);

        if !report.rows.is_empty() {
            output.push('\n');
            self.push_worker_table(&mut output, report);
        }

        output.push('\n');
        output
    }

    fn push_summary(&self, output: &mut String, report: &CapacityReport) {
        let totals = &report.totals;

        push_indented(
            output,
            0,
            format_args!("Capacity information for {} workers: ", report.range),
        );

        push_indented(
            output,
            1,
            format_args!("Total Capacity: {}", format_size(totals.capacity_bytes)),
        );
        for (tier, bytes) in totals.capacity_bytes_on_tiers.iter() {
            push_indented(output, 2, format_args!("Tier: {tier}  Size: {}", format_size(bytes)));
        }

        push_indented(
            output,
            1,
            format_args!("Used Capacity: {}", format_size(totals.used_bytes)),
        );
        for (tier, bytes) in totals.used_bytes_on_tiers.iter() {
            push_indented(output, 2, format_args!("Tier: {tier}  Size: {}", format_size(bytes)));
        }

        if let (Some(used), Some(free)) = (totals.used_percentage(), totals.free_percentage()) {
            push_indented(output, 1, format_args!("Used Percentage: {used}%"));
            push_indented(output, 1, format_args!("Free Percentage: {free}%"));
        }
    }

    fn push_worker_table(&self, output: &mut String, report: &CapacityReport) {
        let tier_headers: Vec<&str> = report.display_tiers.iter().map(String::as_str).collect();
        push_table_line(output, "Worker Name", "Last Heartbeat", "Storage", "Total", &tier_headers);

        for row in &report.rows {
            let capacity_tiers: Vec<String> = row.capacity_on_display_tiers.iter().map(|b| format_size(*b)).collect();
            let used_tiers: Vec<String> = row.used_on_display_tiers.iter().map(|b| format_size(*b)).collect();

            push_table_line(
                output,
                &row.host_name,
                &row.last_heartbeat_secs.to_string(),
                "Capacity",
                &format_size(row.capacity_bytes),
                &capacity_tiers,
            );
            push_table_line(
                output,
                "",
                "",
                "Used",
                &format!("{}{}", format_size(row.used_bytes), row.used_percentage_label()),
                &used_tiers,
            );
        }
    }

    /// Report as JSON, for export.
    pub fn summary(&self, report: &CapacityReport) -> serde_json::Value {
        serde_json::json!({
            "range": report.range,
            "displayTiers": report.display_tiers,
            "workers": report.rows,
            "totals": {
                "capacityBytes": report.totals.capacity_bytes,
                "usedBytes": report.totals.used_bytes,
                "capacityBytesOnTiers": report.totals.capacity_bytes_on_tiers,
                "usedBytesOnTiers": report.totals.used_bytes_on_tiers,
                "usedPercentage": report.totals.used_percentage(),
                "freePercentage": report.totals.free_percentage(),
            }
        })
    }
}

fn push_table_line<T: AsRef<str>>(
    output: &mut String,
    name: &str,
    heartbeat: &str,
    storage: &str,
    total: &str,
    tiers: &[T],
) {
    let _ = write!(output, "{name:<16} {heartbeat:<16} {storage:<13} {total:<16}");
    for tier in tiers {
        let _ = write!(output, " {:<13}", tier.as_ref());
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        collectors::CapacityCollector,
        options::WorkerRange,
    };
    use pretty_assertions::assert_eq;

    fn render(records: Vec<WorkerRecord>, range: WorkerRange) -> String {
        Reporter.render(&CapacityCollector::default().collect(records, range))
    }

    /// Drops the column padding at line ends so layouts can be written inline.
    fn trim_line_ends(text: &str) -> String {
        text.split('\n').map(str::trim_end).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn two_workers_report() {
        let records = vec![
            WorkerRecord::new("w2", 7, 200, 100)
                .with_capacity_tiers([("SSD", 200)])
                .with_used_tiers([("SSD", 100)]),
            WorkerRecord::new("w1", 3, 100, 50)
                .with_capacity_tiers([("MEM", 100)])
                .with_used_tiers([("MEM", 50)]),
        ];

        let expected = "\
Capacity information for all workers:
    Total Capacity: 300B
        Tier: MEM  Size: 100B
        Tier: SSD  Size: 200B
    Used Capacity: 150B
        Tier: MEM  Size: 50B
        Tier: SSD  Size: 100B
    Used Percentage: 50%
    Free Percentage: 50%

Worker Name      Last Heartbeat   Storage       Total            MEM           SSD           HDD
w1               3                Capacity      100B             100B          0B            0B
                                  Used          50B (50%)        50B           0B            0B
w2               7                Capacity      200B             0B            200B          0B
                                  Used          100B (50%)       0B            100B          0B

";
        assert_eq!(trim_line_ends(&render(records, WorkerRange::All)), expected);
    }

    #[test]
    fn zero_capacity_worker() {
        let expected = "\
Capacity information for live workers:
    Total Capacity: 0B
    Used Capacity: 0B

Worker Name      Last Heartbeat   Storage       Total            MEM           SSD           HDD
idle             0                Capacity      0B               0B            0B            0B
                                  Used          0B               0B            0B            0B

";
        assert_eq!(
            trim_line_ends(&render(vec![WorkerRecord::new("idle", 0, 0, 0)], WorkerRange::Live)),
            expected
        );
    }

    #[test]
    fn empty_report_has_only_summary() {
        let expected = "\
Capacity information for lost workers:
    Total Capacity: 0B
    Used Capacity: 0B

";
        assert_eq!(trim_line_ends(&render(Vec::new(), WorkerRange::Lost)), expected);
    }

    #[test]
    fn columns_are_padded_to_fixed_widths() {
        let rendered = render(vec![WorkerRecord::new("w", 0, 100, 50)], WorkerRange::All);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Capacity information for all workers: ");
        let header = format!(
            "{:<16} {:<16} {:<13} {:<16} {:<13} {:<13} {:<13}",
            "Worker Name", "Last Heartbeat", "Storage", "Total", "MEM", "SSD", "HDD"
        );
        assert_eq!(lines[6], header);
        assert_eq!(lines[7].len(), header.len());
        assert_eq!(&lines[8][..48], format!("{:<16} {:<16} {:<13} ", "", "", "Used"));
        assert!(lines[8].contains("50B (50%)"));
        assert!(rendered.ends_with("\n\n"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let records = vec![
            WorkerRecord::new("a", 1, 10_000, 2_500).with_capacity_tiers([("HDD", 10_000)]),
            WorkerRecord::new("b", 1, 20_000, 0).with_capacity_tiers([("MEM", 8_000), ("HDD", 12_000)]),
        ];
        let first = render(records.clone(), WorkerRange::Specified);
        let second = render(records, WorkerRange::Specified);
        assert_eq!(first, second);
        assert!(first.starts_with("Capacity information for specified workers: \n"));
        assert!(first.contains("        Tier: HDD  Size: 21.48KB\n"));
    }

    #[test]
    fn summary_json() {
        let report = CapacityCollector::default().collect(
            vec![WorkerRecord::new("w", 0, 100, 25).with_capacity_tiers([("MEM", 100)])],
            WorkerRange::All,
        );
        let summary = Reporter.summary(&report);

        assert_eq!(summary["range"], "all");
        assert_eq!(summary["totals"]["usedPercentage"], 25);
        assert_eq!(summary["totals"]["freePercentage"], 75);
        assert_eq!(summary["totals"]["capacityBytesOnTiers"]["MEM"], 100);
        assert_eq!(summary["workers"][0]["hostName"], "w");
    }
}

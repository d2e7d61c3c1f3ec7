use crate::{
    collectors::{
        CapacityCollector,
        Reporter,
    },
    error::ReportError,
    metrics::CapacityReport,
    options::{
        WorkerReportOptions,
        WorkerSelector,
    },
    sources::WorkerSource,
};
use chrono::Utc;
use std::io::Write;

/// Runs one capacity report: fetch, collect, render, write.
pub struct Orchestrator<S> {
    source: S,
    collector: CapacityCollector,
    reporter: Reporter,
}

impl<S: WorkerSource> Orchestrator<S> {
    pub fn new(source: S, collector: CapacityCollector) -> Self {
        Self {
            source,
            collector,
            reporter: Reporter,
        }
    }

    /// Fetches the selected workers and builds the report.
    ///
    /// # Errors
    /// A failing source is returned unchanged as [`ReportError::Source`].
    #[instrument(level = "debug", skip(self), fields(source = self.source.name()))]
    pub fn collect(&self, selector: &WorkerSelector) -> Result<CapacityReport, ReportError> {
        let options = WorkerReportOptions::capacity(selector);
        let records = self.source.worker_report(&options)?;
        debug!(workers = records.len(), range = %options.range, "Fetched worker records");

        Ok(self.collector.collect(records, options.range))
    }

    /// Generates the report for `selector` and writes it to `sink` in one write.
    ///
    /// Nothing is written when fetching fails.
    pub fn generate(&self, selector: &WorkerSelector, sink: &mut impl Write) -> Result<CapacityReport, ReportError> {
        let report = self.collect(selector)?;
        let text = self.reporter.render(&report);
        sink.write_all(text.as_bytes()).map_err(ReportError::Output)?;
        sink.flush().map_err(ReportError::Output)?;
        Ok(report)
    }

    /// JSON export of `report`, stamped with the export time.
    pub fn export(&self, report: &CapacityReport) -> Result<String, ReportError> {
        let mut json = self.reporter.summary(report);
        json["generatedAt"] = serde_json::json!(Utc::now());
        Ok(serde_json::to_string_pretty(&json)?)
    }
}

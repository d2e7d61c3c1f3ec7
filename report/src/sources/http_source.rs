use crate::{
    error::SourceError,
    metrics::WorkerRecord,
    options::WorkerReportOptions,
    sources::WorkerSource,
};
use reqwest::blocking::Client;
use std::time::Duration;
use url::Url;

const WORKER_REPORT_PATH: &str = "api/v1/master/worker_report";

/// Fetches worker records from the cluster master's worker report endpoint.
#[derive(Debug, Clone)]
pub struct HttpWorkerSource {
    master_url: Url,
    client: Client,
}

impl HttpWorkerSource {
    pub fn new(master_url: Url, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { master_url, client })
    }

    /// The endpoint URL including the query for `options`.
    pub fn report_url(&self, options: &WorkerReportOptions) -> Result<Url, SourceError> {
        let mut url = self.master_url.join(WORKER_REPORT_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("range", options.range.as_query());
            let fields = options
                .fields
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            query.append_pair("fields", &fields);
            if !options.addresses.is_empty() {
                let addresses = options.addresses.iter().cloned().collect::<Vec<_>>().join(",");
                query.append_pair("addresses", &addresses);
            }
        }
        Ok(url)
    }
}

impl WorkerSource for HttpWorkerSource {
    #[instrument(level = "debug", skip(self, options), fields(master = %self.master_url))]
    fn worker_report(&self, options: &WorkerReportOptions) -> Result<Vec<WorkerRecord>, SourceError> {
        let url = self.report_url(options)?;
        debug!(%url, "Requesting worker report");

        let response = self.client.get(url.clone()).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let records: Vec<WorkerRecord> = response.json()?;
        debug!(workers = records.len(), "Received worker report");
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "HttpWorkerSource"
    }
}

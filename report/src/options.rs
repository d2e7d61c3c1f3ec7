//! # Worker Selection
//!
//! Turns the mutually exclusive filter flags of the command line into the single
//! [`WorkerSelector`] a report is generated for, and into the
//! [`WorkerReportOptions`] handed to a [`crate::WorkerSource`].

use crate::error::ReportError;
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::BTreeSet;
use strum::Display;

/// Scope of workers a report covers.
#[derive(Debug, Default, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum WorkerRange {
    #[default]
    All,
    Live,
    Lost,
    Specified,
}

impl WorkerRange {
    /// Name used by the master's worker report endpoint.
    pub fn as_query(&self) -> &'static str {
        match self {
            WorkerRange::All => "ALL",
            WorkerRange::Live => "LIVE",
            WorkerRange::Lost => "LOST",
            WorkerRange::Specified => "SPECIFIED",
        }
    }
}

/// Worker attributes a source has to fill in.
#[derive(Debug, Clone, Copy, Display, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkerInfoField {
    Address,
    CapacityBytes,
    CapacityBytesOnTiers,
    LastContactSec,
    UsedBytes,
    UsedBytesOnTiers,
}

/// A single filter flag as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerFilter {
    Live,
    Lost,
    /// Comma separated host names or IP addresses.
    Workers(String),
}

/// The resolved worker scope.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum WorkerSelector {
    #[default]
    All,
    Live,
    Lost,
    Specified(BTreeSet<String>),
}

impl WorkerSelector {
    /// Resolves zero or one filter into a selector.
    ///
    /// # Errors
    /// Returns [`ReportError::Usage`] when more than one filter is supplied.
    pub fn resolve(filters: impl IntoIterator<Item = WorkerFilter>) -> Result<Self, ReportError> {
        let mut filters = filters.into_iter();
        let Some(filter) = filters.next() else {
            return Ok(WorkerSelector::All);
        };
        if filters.next().is_some() {
            return Err(ReportError::Usage("Too many arguments passed in.".to_string()));
        }

        let selector = match filter {
            WorkerFilter::Live => WorkerSelector::Live,
            WorkerFilter::Lost => WorkerSelector::Lost,
            WorkerFilter::Workers(addresses) => WorkerSelector::Specified(parse_addresses(&addresses)),
        };
        Ok(selector)
    }

    pub fn range(&self) -> WorkerRange {
        match self {
            WorkerSelector::All => WorkerRange::All,
            WorkerSelector::Live => WorkerRange::Live,
            WorkerSelector::Lost => WorkerRange::Lost,
            WorkerSelector::Specified(_) => WorkerRange::Specified,
        }
    }

    pub fn addresses(&self) -> Option<&BTreeSet<String>> {
        match self {
            WorkerSelector::Specified(addresses) => Some(addresses),
            _ => None,
        }
    }
}

fn parse_addresses(addresses: &str) -> BTreeSet<String> {
    addresses
        .split(',')
        .map(str::trim)
        .filter(|address| !address.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Request sent to a worker source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReportOptions {
    pub range: WorkerRange,
    /// Only meaningful for [`WorkerRange::Specified`].
    pub addresses: BTreeSet<String>,
    pub fields: BTreeSet<WorkerInfoField>,
}

impl WorkerReportOptions {
    /// Options requesting the fields a capacity report renders.
    pub fn capacity(selector: &WorkerSelector) -> Self {
        Self {
            range: selector.range(),
            addresses: selector.addresses().cloned().unwrap_or_default(),
            fields: BTreeSet::from([
                WorkerInfoField::Address,
                WorkerInfoField::CapacityBytes,
                WorkerInfoField::CapacityBytesOnTiers,
                WorkerInfoField::LastContactSec,
                WorkerInfoField::UsedBytes,
                WorkerInfoField::UsedBytesOnTiers,
            ]),
        }
    }
}

use eyre::{
    Context as _,
    Result,
};
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
    Layer,
};

/// Logs go to stderr so that stdout only carries the report.
///
/// `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("capacity_report={level},capacity_report_core={level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .with(tracing_error::ErrorLayer::default())
        .try_init()
        .context("Failed to initialize tracing subscriber")
}

pub fn init_errors() -> Result<()> {
    color_eyre::install()
}

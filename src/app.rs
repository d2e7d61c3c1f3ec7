use crate::config::{
    Args,
    Config,
};
use capacity_report_core::{
    CapacityCollector,
    CapacityReport,
    FileWorkerSource,
    HttpWorkerSource,
    Orchestrator,
    WorkerSelector,
    WorkerSource,
};
use clap::CommandFactory as _;
use color_eyre::Result;
use eyre::Context as _;
use std::io::Write;

pub struct App {
    config: Config,
    selector: WorkerSelector,
}

impl App {
    /// Resolves the worker filter before anything else, then loads the configuration.
    ///
    /// # Errors
    /// More than one filter flag prints the usage and fails.
    pub fn new(args: Args) -> Result<Self> {
        let selector = Self::resolve_selector(&args)?;
        let config = Config::new(&args)?;
        debug!(config_dir = ?config.config_dir(), "Loaded configuration");
        Ok(Self::with_config(config, selector))
    }

    pub fn with_config(config: Config, selector: WorkerSelector) -> Self {
        Self { config, selector }
    }

    fn resolve_selector(args: &Args) -> Result<WorkerSelector> {
        match WorkerSelector::resolve(args.filters()) {
            Ok(selector) => {
                debug!(?selector, "Resolved worker selector");
                Ok(selector)
            }
            Err(err) => {
                eprintln!("{}", Args::command().render_usage());
                Err(err.into())
            }
        }
    }

    fn source(&self) -> Result<Box<dyn WorkerSource>> {
        if let Some(snapshot) = &self.config.snapshot {
            info!(path = ?snapshot, "Reading workers from snapshot");
            return Ok(Box::new(FileWorkerSource::new(snapshot)));
        }

        info!(master = %self.config.master_url, "Requesting worker report from master");
        let source = HttpWorkerSource::new(self.config.master_url.clone(), self.config.timeout()?)?;
        Ok(Box::new(source))
    }

    /// Writes the report to `sink` and exports it when an output file is configured.
    pub fn generate(&self, sink: &mut impl Write) -> Result<CapacityReport> {
        let orchestrator = Orchestrator::new(
            self.source()?,
            CapacityCollector::new(self.config.display_tiers.iter().cloned()),
        );
        let report = orchestrator.generate(&self.selector, sink)?;

        if let Some(output_file) = &self.config.output_file {
            let json = orchestrator.export(&report)?;
            std::fs::write(output_file, json)
                .wrap_err_with(|| format!("Failed to write report to {:?}", output_file))?;
            info!(path = ?output_file, "Report exported");
        }

        Ok(report)
    }

    pub fn run(&self) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        self.generate(&mut stdout)?;
        Ok(())
    }
}

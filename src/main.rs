use capacity_report::{
    init_errors,
    init_logging,
    App,
    Args,
};
use clap::Parser;
use color_eyre::Result;

fn main() -> Result<()> {
    init_errors()?;
    let args = Args::parse();
    init_logging(args.verbose)?;
    App::new(args)?.run()
}

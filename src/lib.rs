#[macro_use]
extern crate tracing;

mod app;
pub mod config;
mod logging;

pub use app::App;
pub use config::{
    Args,
    Config,
};
pub use logging::{
    init_errors,
    init_logging,
};

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::CheckConfig;
pub use crate::core::{
    arithmetic::{add, circle_area, divide},
    runner::{CheckReport, CheckRunner},
    CaseSource, Number, Operation,
};
pub use utils::error::{CalcError, Result};

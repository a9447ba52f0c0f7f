pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CliConfig, Endpoints};
pub use core::engine::AssignEngine;
pub use domain::model::{BatchResult, RunSummary, TargetSelector};
pub use utils::error::{AssignError, Result};

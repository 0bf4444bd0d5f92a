pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use adapters::{FileVehicleSource, HttpVehicleSource};
pub use core::{etl::RankEngine, pipeline::RankingPipeline, ranking::score_and_rank};
pub use domain::model::{
    FinanceRecord, InteriorRecord, PurchaseType, RankedResults, RankingReport, ScoredResult,
    VehicleRecord,
};
pub use utils::error::{RankError, Result};

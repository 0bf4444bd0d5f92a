pub mod amortization;
pub mod etl;
pub mod normalizer;
pub mod pipeline;
pub mod ranker;
pub mod ranking;
pub mod report;
pub mod scoring;

pub use crate::domain::model::{RankingReport, VehicleRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage, VehicleSource};
pub use crate::utils::error::Result;

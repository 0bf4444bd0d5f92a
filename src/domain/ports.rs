use crate::domain::model::{RankingReport, VehicleRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn owner_id(&self) -> Option<u64>;
    fn top_n(&self) -> usize;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn compress_output(&self) -> bool;
}

/// Lookup of a user's vehicles, with interior and finance attached when present.
/// Ordering is not significant.
#[async_trait]
pub trait VehicleSource: Send + Sync {
    async fn fetch_vehicles(&self, owner_id: Option<u64>) -> Result<Vec<VehicleRecord>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<VehicleRecord>>;
    async fn transform(&self, vehicles: Vec<VehicleRecord>) -> Result<RankingReport>;
    async fn load(&self, report: RankingReport) -> Result<String>;
}

use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct RankEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> RankEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting ranking run");

        // Extract
        let vehicles = self.pipeline.extract().await?;
        tracing::info!("📥 Loaded {} vehicles", vehicles.len());

        // Transform
        let report = self.pipeline.transform(vehicles).await?;
        tracing::info!(
            "🏁 Ranked {} performance / {} value / {} cheapest entries",
            report.best_performance.len(),
            report.best_value.len(),
            report.cheapest.len()
        );

        // Load
        let output_path = self.pipeline.load(report).await?;
        tracing::info!("📁 Output saved to: {}", output_path);

        Ok(output_path)
    }
}

use crate::core::ranking::score_and_rank;
use crate::core::report::{build_report, render};
use crate::core::{ConfigProvider, Pipeline, RankingReport, Storage, VehicleRecord, VehicleSource};
use crate::utils::error::Result;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const ARCHIVE_NAME: &str = "rankings.zip";

pub struct RankingPipeline<V: VehicleSource, S: Storage, C: ConfigProvider> {
    source: V,
    storage: S,
    config: C,
}

impl<V: VehicleSource, S: Storage, C: ConfigProvider> RankingPipeline<V, S, C> {
    pub fn new(source: V, storage: S, config: C) -> Self {
        Self {
            source,
            storage,
            config,
        }
    }

    fn bundle(files: &[(String, String)]) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for (name, content) in files {
            zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
            zip.write_all(content.as_bytes())?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<V: VehicleSource, S: Storage, C: ConfigProvider> Pipeline for RankingPipeline<V, S, C> {
    async fn extract(&self) -> Result<Vec<VehicleRecord>> {
        let owner_id = self.config.owner_id();
        match owner_id {
            Some(id) => tracing::debug!("Fetching vehicles for owner {}", id),
            None => tracing::debug!("Fetching vehicles for all owners"),
        }
        self.source.fetch_vehicles(owner_id).await
    }

    async fn transform(&self, vehicles: Vec<VehicleRecord>) -> Result<RankingReport> {
        let top_n = self.config.top_n();
        let results = score_and_rank(&vehicles, top_n)?;

        if !results.skipped.is_empty() {
            tracing::warn!(
                "⚠️ {} vehicle(s) left out of the rankings",
                results.skipped.len()
            );
        }

        Ok(build_report(
            &results,
            self.config.owner_id(),
            top_n,
            vehicles.len(),
        ))
    }

    async fn load(&self, report: RankingReport) -> Result<String> {
        let files = self
            .config
            .output_formats()
            .iter()
            .map(|format| render(&report, format))
            .collect::<Result<Vec<_>>>()?;

        if self.config.compress_output() {
            let zip_data = Self::bundle(&files)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(ARCHIVE_NAME, &zip_data).await?;
            return Ok(format!("{}/{}", self.config.output_path(), ARCHIVE_NAME));
        }

        for (name, content) in &files {
            tracing::debug!("Writing {} ({} bytes)", name, content.len());
            self.storage.write_file(name, content.as_bytes()).await?;
        }
        Ok(self.config.output_path().to_string())
    }
}

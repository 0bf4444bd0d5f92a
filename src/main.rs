use clap::Parser;
use garage_rank::core::ranker::by_horsepower;
use garage_rank::domain::ports::VehicleSource;
use garage_rank::utils::{logger, validation::Validate};
use garage_rank::config::InputSource;
use garage_rank::{
    CliConfig, FileVehicleSource, HttpVehicleSource, LocalStorage, RankEngine, RankingPipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting garage-rank CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match dispatch(&config).await {
        Ok(Some(output_path)) => {
            tracing::info!("✅ Ranking completed successfully!");
            println!("✅ Ranking completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                "❌ Ranking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

async fn dispatch(config: &CliConfig) -> garage_rank::Result<Option<String>> {
    match config.input_source()? {
        InputSource::File(path) => run(FileVehicleSource::new(path), config.clone()).await,
        InputSource::Api(endpoint) => run(HttpVehicleSource::new(endpoint), config.clone()).await,
    }
}

/// `--list` 只列出車輛，不做排名
async fn run<V: VehicleSource>(
    source: V,
    config: CliConfig,
) -> garage_rank::Result<Option<String>> {
    if config.list {
        let vehicles = source.fetch_vehicles(config.owner_id).await?;
        print_listing(&vehicles);
        return Ok(None);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = RankingPipeline::new(source, storage, config);
    let engine = RankEngine::new(pipeline);

    engine.run().await.map(Some)
}

fn print_listing(vehicles: &[garage_rank::VehicleRecord]) {
    println!("🚗 {} vehicle(s), by horsepower:", vehicles.len());
    for vehicle in by_horsepower(vehicles) {
        println!(
            "  #{:<4} {:<16} {:<16} {:>5} hp  {:>4.1} L  {:>2} cyl  {}",
            vehicle.id,
            vehicle.company,
            vehicle.model.as_deref().unwrap_or("-"),
            vehicle.horsepower,
            vehicle.engine_capacity,
            vehicle.cylinders,
            if vehicle.finance.is_some() {
                "financed"
            } else {
                "no finance"
            }
        );
    }
}

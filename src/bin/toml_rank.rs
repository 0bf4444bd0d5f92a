use anyhow::Context;
use clap::Parser;
use garage_rank::config::toml_config::{SourceType, TomlConfig};
use garage_rank::domain::ports::{ConfigProvider, VehicleSource};
use garage_rank::utils::{logger, validation::Validate};
use garage_rank::{
    FileVehicleSource, HttpVehicleSource, LocalStorage, RankEngine, RankError, RankingPipeline,
};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "toml-rank")]
#[command(about = "Vehicle ranking driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "rank-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override ranking.top_n from config
    #[arg(long)]
    top_n: Option<usize>,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    let verbose = args.verbose || config.log_level() == Some("debug");
    logger::init_logger(verbose, config.json_logs());

    tracing::info!("🚀 Starting TOML-based ranking");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(top_n) = args.top_n {
        config.ranking.top_n = Some(top_n);
        tracing::info!("🔧 top_n overridden to: {}", top_n);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        return Ok(());
    }

    let source_type = config.source.r#type;
    let outcome = match source_type {
        SourceType::File => match config.source.path.clone() {
            Some(path) => run(FileVehicleSource::new(path), config).await,
            None => Err(RankError::MissingConfigError {
                field: "source.path".to_string(),
            }),
        },
        SourceType::Api => match config.source.endpoint.clone() {
            Some(endpoint) => {
                let mut source = HttpVehicleSource::new(endpoint)
                    .with_headers(config.source.headers.clone().unwrap_or_default());
                if let Some(timeout) = config.source.timeout_seconds {
                    source = source.with_timeout(Duration::from_secs(timeout));
                }
                run(source, config).await
            }
            None => Err(RankError::MissingConfigError {
                field: "source.endpoint".to_string(),
            }),
        },
    };

    match outcome {
        Ok(output_path) => {
            tracing::info!("✅ Ranking completed successfully!");
            println!("✅ Ranking completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Ranking failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

async fn run<V: VehicleSource>(source: V, config: TomlConfig) -> garage_rank::Result<String> {
    let storage = LocalStorage::new(config.load.output_path.clone());
    let pipeline = RankingPipeline::new(source, storage, config);
    RankEngine::new(pipeline).run().await
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!(
        "  Pipeline: {} v{}",
        config.pipeline.name, config.pipeline.version
    );
    if let Some(description) = &config.pipeline.description {
        println!("  Description: {}", description);
    }

    match config.source.r#type {
        SourceType::File => println!(
            "  Source: file {}",
            config.source.path.as_deref().unwrap_or("-")
        ),
        SourceType::Api => println!(
            "  Source: api {}",
            config.source.endpoint.as_deref().unwrap_or("-")
        ),
    }

    match ConfigProvider::owner_id(config) {
        Some(id) => println!("  Owner: {}", id),
        None => println!("  Owner: all"),
    }

    println!("  Top N: {}", config.top_n());
    println!("  Output: {}", config.load.output_path);
    println!("  Formats: {}", config.load.output_formats.join(", "));
    if config.compression_enabled() {
        println!("  Compression: rankings.zip");
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

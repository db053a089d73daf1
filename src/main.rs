use anyhow::Context;
use clap::Parser;
use jbhub::utils::error::ErrorSeverity;
use jbhub::utils::logger;
use jbhub::utils::validation::Validate;
use jbhub::{CliConfig, LocalStorage, PortfolioEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    logger::init_logger(cli.verbose, config.logging.format);
    tracing::info!("Starting jbhub");
    if cli.verbose {
        tracing::debug!("Resolved config: {:?}", config);
    }

    std::fs::create_dir_all(&config.output.path)
        .with_context(|| format!("creating output directory {}", config.output.path))?;

    let storage = LocalStorage::new(config.output.path.clone());
    let output_dir = storage.base_path().to_string();
    let engine = PortfolioEngine::new(storage, config);

    match engine.run().await {
        Ok(file) => {
            tracing::info!("Page rendered");
            println!("Page saved to: {}/{}", output_dir, file);
        }
        Err(e) => {
            tracing::error!(
                "Render failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

//! Report generator - Main entry point.
//!
//! Usage: `bdd-report <report.json>...`, configured through `REPORT_*`
//! environment variables (a `.env` file is honoured).

use std::path::PathBuf;

use bdd_report_lib::config::Config;
use bdd_report_lib::services::{JsonContextRenderer, ReportBuilder};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let json_files: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if json_files.is_empty() {
        error!("Usage: bdd-report <report.json>...");
        std::process::exit(1);
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - REPORT_PROJECT_NAME must be set");
            error!("  - REPORT_TRENDS_LIMIT must be a number");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Report Generator");
    info!("  Project: {}", config.project_name);
    info!("========================================");

    let renderer = JsonContextRenderer::new(config.report_directory());
    let builder = ReportBuilder::new(json_files, config);

    if let Err(e) = builder.generate_reports(&renderer) {
        error!("Report generation failed: {}", e);
        std::process::exit(1);
    }
}

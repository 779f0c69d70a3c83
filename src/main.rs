use clap::Parser;
use guitar_trainer::core::config::{self, CliOverrides, ResolvedConfig};
use guitar_trainer::obs::{ObsEvent, Observer, Telemetry};
use guitar_trainer::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "guitar-trainer", about = "Browse guitar scales and lessons in the terminal")]
struct Args {
    /// Directory holding scales.json and lessons.json
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level: debug, info, warn or error
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let cli = CliOverrides {
        data_dir: args.data_dir,
        log_level: args.log_level,
    };
    // Logging isn't up yet, so a bad config file is reported after init below.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (Default::default(), Some(e)),
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logger(&resolved);
    match config_error {
        Some(e) => log::warn!("Ignoring config file: {}", e),
        None => config::ensure_default_config(),
    }
    log::info!("Guitar Trainer starting up with config: {:?}", resolved);

    let telemetry = Arc::new(Telemetry::new());
    telemetry.record(ObsEvent::AppStarted);

    let result = tui::run(&resolved, telemetry.clone());

    telemetry.record(ObsEvent::AppExited);
    match &result {
        Ok(()) => log::info!("Guitar Trainer exiting"),
        Err(e) => log::error!("Terminal error: {}", e),
    }
    telemetry.flush();
    result
}

/// File logger so output never lands on the full-screen terminal.
/// If the file can't be opened, the app runs without logging; the reason
/// goes to stderr before the terminal is taken over.
fn init_logger(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    match config::open_log_file(&config.log_file) {
        Ok(log_file) => {
            let _ = WriteLogger::init(config.log_level, log_config, log_file);
        }
        Err(e) => {
            eprintln!(
                "guitar-trainer: logging disabled, cannot open {}: {}",
                config.log_file.display(),
                e
            );
        }
    }
}

// Headless front end: stands in for the interactive layer that picks files,
// starts a job, shows progress and cancels.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use image_converter_lib::core::ConverterConfig;
use image_converter_lib::{
    BatchConverter, ConversionObserver, ConversionOutcome, OutcomeStatus, TargetFormat,
    dispatch_events, validate_request,
};

#[derive(Debug, Parser)]
#[command(name = "image-converter", version, about = "Convert PNG/JPEG images to AVIF and other formats")]
struct Cli {
    /// Images to convert, in order
    files: Vec<PathBuf>,

    /// Directory to write converted images into (created if missing)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Encoder quality, 0-100
    #[arg(short, long)]
    quality: Option<u32>,

    /// Target format: avif, jpeg, png or webp
    #[arg(short, long)]
    format: Option<TargetFormat>,

    /// AVIF encoder speed, 1 (slowest) to 10 (fastest)
    #[arg(long)]
    speed: Option<u8>,

    /// JSON config file; command-line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Prints job events the way the desktop status line showed them.
struct ConsoleObserver {
    verbose: bool,
}

impl ConversionObserver for ConsoleObserver {
    fn on_progress(&mut self, percent: u8) {
        println!("[{percent:>3}%]");
    }

    fn on_status(&mut self, message: &str) {
        println!("{message}");
    }

    fn on_outcome(&mut self, outcome: &ConversionOutcome) {
        if let (true, OutcomeStatus::Converted(path)) = (self.verbose, &outcome.status) {
            println!("  -> {}", path.display());
        }
    }

    fn on_finished(&mut self) {
        println!("Conversion finished.");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)       // Remove module path
        .with_thread_ids(false)
        .with_writer(std::io::stderr) // Keep stdout for status lines
        .compact()
        .init();
}

async fn load_config(cli: &Cli) -> anyhow::Result<ConverterConfig> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::load(path).await?,
        None => ConverterConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(speed) = cli.speed {
        config.avif_speed = speed;
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    let config = load_config(&cli).await?;
    if cli.quality.is_some() && !config.format.is_lossy() {
        warn!("{} output is lossless, --quality has no effect", config.format);
    }
    let quality = cli.quality.unwrap_or(u32::from(config.default_quality));
    let job = validate_request(cli.files, cli.output.unwrap_or_default(), quality)?;

    let converter = BatchConverter::from_config(&config);
    let (handle, mut events) = converter
        .start(job)
        .context("Failed to start conversion")?;

    let flag = handle.cancellation_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() && flag.cancel() {
            info!("Ctrl-C received, stopping after the current file");
        }
    });

    let mut observer = ConsoleObserver { verbose: tracing::enabled!(tracing::Level::DEBUG) };
    dispatch_events(&mut events, &mut observer).await;

    let summary = handle.wait().await?;
    println!(
        "{} converted, {} failed, {} skipped{}",
        summary.converted,
        summary.failed,
        summary.total - summary.attempted(),
        if summary.cancelled { " (cancelled)" } else { "" }
    );

    if let Some(reason) = summary.fatal {
        anyhow::bail!("Conversion aborted: {reason}");
    }
    Ok(())
}

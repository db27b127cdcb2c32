use clap::{Parser, Subcommand};
use nord_dither::FrameDitherer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nordframe::models::AppConfig;
use nordframe::services::{convert_file, BatchRunner};

#[derive(Parser)]
#[command(name = "nordframe")]
#[command(about = "Convert photos into Nord-palette dithered frames for the Framework 13")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert every photo in the input directory that has no frame yet
    Convert {
        /// Input directory (overrides config and INPUT_DIR)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory (overrides config and OUTPUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML configuration file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for reproducible noise
        #[arg(long)]
        seed: Option<u64>,

        /// Noise amplitude as a fraction of 255 (e.g. 0.05, 0 to disable)
        #[arg(long)]
        noise: Option<f64>,

        /// Re-compress output PNGs with oxipng
        #[arg(long)]
        optimize: bool,
    },
    /// Convert a single photo to a PNG frame
    Render {
        /// Input photo (JPEG or PNG)
        input: PathBuf,

        /// Output PNG file path
        output: PathBuf,

        /// Seed for reproducible noise
        #[arg(long)]
        seed: Option<u64>,

        /// Noise amplitude as a fraction of 255
        #[arg(long)]
        noise: Option<f64>,

        /// Re-compress the PNG with oxipng
        #[arg(long)]
        optimize: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            output,
            config,
            seed,
            noise,
            optimize,
        }) => run_convert_command(input, output, config, seed, noise, optimize),
        Some(Commands::Render {
            input,
            output,
            seed,
            noise,
            optimize,
        }) => run_render_command(&input, &output, seed, noise, optimize),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn check_noise(noise: f64) -> anyhow::Result<()> {
    if !noise.is_finite() || noise < 0.0 {
        anyhow::bail!("noise amount must be a non-negative number, got {noise}");
    }
    Ok(())
}

/// Batch-convert the input directory
fn run_convert_command(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_file: Option<PathBuf>,
    seed: Option<u64>,
    noise: Option<f64>,
    optimize: bool,
) -> anyhow::Result<()> {
    init_tracing("nordframe=info");

    let mut config = AppConfig::resolve(config_file.as_deref());
    if let Some(dir) = input {
        config.input_dir = dir;
    }
    if let Some(dir) = output {
        config.output_dir = dir;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(noise) = noise {
        config.noise_amount = noise;
    }
    config.optimize_png |= optimize;
    check_noise(config.noise_amount)?;

    tracing::info!(
        input = %config.input_dir.display(),
        output = %config.output_dir.display(),
        width = config.width,
        height = config.height,
        noise = config.noise_amount,
        seed = ?config.seed,
        "Starting batch"
    );

    let report = BatchRunner::new(config).run()?;

    if !report.is_clean() {
        tracing::warn!(failed = report.failed.len(), "Some images could not be converted");
    }
    Ok(())
}

/// Convert one file, overwriting the output
fn run_render_command(
    input: &Path,
    output: &Path,
    seed: Option<u64>,
    noise: Option<f64>,
    optimize: bool,
) -> anyhow::Result<()> {
    // Minimal logging for CLI
    init_tracing("nordframe=warn");

    let config = AppConfig::resolve(None);
    let noise = noise.unwrap_or(config.noise_amount);
    check_noise(noise)?;

    let ditherer = FrameDitherer::new(config.display()).noise_amount(noise);
    let mut rng = match seed.or(config.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let bytes = convert_file(
        &ditherer,
        input,
        output,
        optimize || config.optimize_png,
        &mut rng,
    )?;
    println!("Rendered {} ({} bytes)", output.display(), bytes);

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let input_dir = std::env::var("INPUT_DIR").ok();
    let output_dir = std::env::var("OUTPUT_DIR").ok();

    println!("nordframe v{VERSION}");
    println!("Nord-palette photo frames for the Framework 13\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  INPUT_DIR   = {}",
        input_dir.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  OUTPUT_DIR  = {}",
        output_dir.as_deref().unwrap_or("(not set)")
    );

    let config = AppConfig::resolve(None);
    let source = match config_file {
        Some(ref path) if Path::new(path).exists() => path.to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };

    println!("\nEffective Configuration ({source}):");
    println!("  input_dir     = {}", config.input_dir.display());
    println!("  output_dir    = {}", config.output_dir.display());
    println!("  output_prefix = {}", config.output_prefix);
    println!("  display       = {}x{}", config.width, config.height);
    println!("  noise_amount  = {}", config.noise_amount);
    println!(
        "  seed          = {}",
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "(entropy)".to_string())
    );
    println!("  optimize_png  = {}", config.optimize_png);

    println!("\nCommands:");
    println!("  nordframe convert   Convert all new photos in the input directory");
    println!("  nordframe render    Convert a single photo to a PNG frame");
    println!("\nRun 'nordframe --help' for more details.");
}

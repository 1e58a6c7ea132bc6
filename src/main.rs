use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use doomfire::app;
use doomfire::config::{FireConfig, Overrides};
use doomfire::fire::step::EdgePolicy;
use doomfire::logging::{self, LogTarget};
use doomfire::settings::Settings;
use doomfire::terminal::Terminal;
use doomfire::FireSim;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "doomfire")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Doom-style fire effect in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every mode
#[derive(Args)]
struct FireArgs {
    /// Grid width in cells
    #[arg(short = 'W', long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    height: Option<usize>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Where leftward drift from the first column lands
    #[arg(short, long, value_enum)]
    edge: Option<EdgePolicy>,

    /// Settings file (defaults to <config dir>/doomfire/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive fire animation
    Play {
        #[command(flatten)]
        fire: FireArgs,

        /// Terminal cells per grid cell
        #[arg(short, long)]
        pixel_size: Option<u32>,

        /// Ticks per second
        #[arg(short, long)]
        fps: Option<u32>,

        /// Append logs to this file
        #[arg(short, long)]
        log_file: Option<PathBuf>,
    },

    /// Run a number of ticks and print the final frame to stdout
    Print {
        #[command(flatten)]
        fire: FireArgs,

        /// Ticks to run before printing
        #[arg(short, long, default_value = "40")]
        ticks: u32,

        /// Put the source out before running
        #[arg(short = 'x', long)]
        extinguish: bool,
    },
}

/// Default grid for print mode, small enough for a normal terminal
const PRINT_WIDTH: usize = 40;
const PRINT_HEIGHT: usize = 12;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { fire, pixel_size, fps, log_file } => {
            let target = log_file.map_or(LogTarget::Off, LogTarget::File);
            logging::init(&target).context("failed to open log file")?;

            let settings = Settings::load(fire.config.as_deref())?;
            let overrides = Overrides { pixel_size, frame_rate: fps, ..cli_overrides(&fire) };
            let mut config = resolve(&settings, &overrides)?;

            // Dimensions nobody asked for follow the terminal
            let (cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
            let mut fitted = config.clone();
            fitted.fit_to_screen(cols, rows);
            if overrides.width.or(settings.width).is_none() {
                config.width = fitted.width;
            }
            if overrides.height.or(settings.height).is_none() {
                config.height = fitted.height;
            }

            // Build before the terminal enters raw mode so errors print cleanly
            let mut sim = FireSim::from_config(&config).context("invalid configuration")?;
            let mut term = Terminal::new(true).context("failed to initialize terminal")?;
            app::play(&mut term, &mut sim, config.frame_interval())?;
            Ok(())
        }
        Commands::Print { fire, ticks, extinguish } => {
            logging::init(&LogTarget::Stderr)?;

            let settings = Settings::load(fire.config.as_deref())?;
            let mut overrides = cli_overrides(&fire);
            overrides.width = overrides.width.or(settings.width).or(Some(PRINT_WIDTH));
            overrides.height = overrides.height.or(settings.height).or(Some(PRINT_HEIGHT));
            let config = resolve(&settings, &overrides)?;

            let mut sim = FireSim::from_config(&config)?;
            if extinguish {
                sim.extinguish();
            }
            let mut out = io::stdout().lock();
            app::print_frame(&mut sim, ticks, config.pixel_size, &mut out)
                .context("failed to write frame")?;
            Ok(())
        }
    }
}

fn cli_overrides(fire: &FireArgs) -> Overrides {
    Overrides {
        width: fire.width,
        height: fire.height,
        seed: fire.seed,
        edge: fire.edge,
        ..Overrides::default()
    }
}

fn resolve(settings: &Settings, overrides: &Overrides) -> Result<FireConfig> {
    let config = FireConfig::resolve(settings, overrides).context("invalid configuration")?;
    info!(
        width = config.width,
        height = config.height,
        pixel_size = config.pixel_size,
        frame_rate = config.frame_rate,
        seed = ?config.seed,
        edge = ?config.edge,
        "configuration loaded"
    );
    Ok(config)
}

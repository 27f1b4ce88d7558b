use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::logging::{LogTarget, init_tracing};
use torus_snake::modes::{HeadlessConfig, HeadlessMode, HumanMode};

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON game config; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Simulation ticks per second
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Seed for target placement
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value = "100")]
    ticks: u64,

    /// Headless move script: U/D/L/R per tick, '.' for no input
    #[arg(long, default_value = "")]
    moves: String,

    /// Write the headless report here instead of stdout
    #[arg(long)]
    report: Option<PathBuf>,

    /// Log file (human mode logs nowhere else)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
    /// Run a scripted game and print a JSON report
    Headless,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(rate) = self.tick_rate {
            config.ticks_per_second = rate;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn log_target(&self) -> LogTarget<'_> {
        match (&self.log_file, &self.mode) {
            (Some(path), _) => LogTarget::File(path),
            (None, Mode::Headless) => LogTarget::Stderr,
            (None, Mode::Human) => LogTarget::Disabled,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_target())?;

    let config = cli.game_config()?;

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config)?;
            human_mode.run().await?;
        }
        Mode::Headless => {
            let settings = HeadlessConfig {
                ticks: cli.ticks,
                moves: cli.moves.clone(),
                report_path: cli.report.clone(),
            };
            let mut headless_mode = HeadlessMode::new(config, settings)?;
            let report = headless_mode.run()?;
            if cli.report.is_none() {
                println!("{}", report.to_json()?);
            }
        }
    }

    Ok(())
}

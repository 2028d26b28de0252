use anyhow::Context;
use clap::Parser;
use slotgrid_core::{
    RngState, SlotEngine, SpinOptions, DEFAULT_BONUS_PROBABILITY, DEFAULT_MAX_ATTEMPTS,
};
use slotgrid_data::load_game_config;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "slotgrid", about = "Spin a weighted slot grid and print the reward")]
struct CliOptions {
    /// Path to the JSON config file
    #[arg(short = 'c', long = "config")]
    config: PathBuf,
    /// Betting amount, a positive integer
    #[arg(short = 'b', long = "betting-amount", value_parser = clap::value_parser!(u32).range(1..))]
    betting_amount: u32,
    /// Bonus symbol hit percentage, 0 to 100
    #[arg(short = 'p', long = "bonus-percentage")]
    bonus_percentage: Option<String>,
    /// Seed for a reproducible spin
    #[arg(long)]
    seed: Option<u64>,
    /// Grids to try before giving up on a win
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,
}

fn bonus_probability(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return DEFAULT_BONUS_PROBABILITY;
    };
    match raw.trim().parse::<f64>() {
        Ok(percentage) if (0.0..=100.0).contains(&percentage) => percentage / 100.0,
        _ => {
            log::warn!(
                "invalid bonus symbol hit percentage {raw:?}, expected a number from 0 to 100; using {}%",
                DEFAULT_BONUS_PROBABILITY * 100.0
            );
            DEFAULT_BONUS_PROBABILITY
        }
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let config = load_game_config(&options.config)?;
    let engine = SlotEngine::new(config).context("prepare engine")?;
    let mut rng = options
        .seed
        .map(RngState::from_seed)
        .unwrap_or_else(RngState::from_entropy);
    log::info!("seed: {}", rng.seed());

    let spin = SpinOptions {
        betting_amount: options.betting_amount,
        bonus_probability: bonus_probability(options.bonus_percentage.as_deref()),
        max_attempts: options.max_attempts,
    };
    let result = engine.spin(&mut rng, &spin)?;
    log::info!("attempts: {}", result.attempts);

    let report = serde_json::to_string_pretty(&result).context("serialize result")?;
    println!("{report}");
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let options = CliOptions::parse();
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

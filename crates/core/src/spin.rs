use crate::{
    aggregate_reward, match_combinations, ConfigError, GameConfig, Grid, GridGenerator,
    MatchError, RandomSource, RewardBreakdown, SampleError,
};
use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_BONUS_PROBABILITY: f64 = 0.5;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 100_000;

#[derive(Debug, Error)]
pub enum SpinError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("sampling error: {0}")]
    Sample(#[from] SampleError),
    #[error("match error: {0}")]
    Match(#[from] MatchError),
    #[error("betting amount must be positive")]
    InvalidBet,
    #[error("bonus probability {0} is outside [0, 1]")]
    InvalidBonusProbability(f64),
    #[error("no winning grid found in {attempts} attempts")]
    NoWinningGrid { attempts: u32 },
}

#[derive(Debug, Clone, Copy)]
pub struct SpinOptions {
    pub betting_amount: u32,
    pub bonus_probability: f64,
    pub max_attempts: u32,
}

impl SpinOptions {
    pub fn new(betting_amount: u32) -> Self {
        Self {
            betting_amount,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), SpinError> {
        if self.betting_amount == 0 {
            return Err(SpinError::InvalidBet);
        }
        if !(0.0..=1.0).contains(&self.bonus_probability) {
            return Err(SpinError::InvalidBonusProbability(self.bonus_probability));
        }
        Ok(())
    }
}

impl Default for SpinOptions {
    fn default() -> Self {
        Self {
            betting_amount: 1,
            bonus_probability: DEFAULT_BONUS_PROBABILITY,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpinResult {
    #[serde(rename = "matrix")]
    pub grid: Grid,
    pub reward: f64,
    #[serde(rename = "applied_winning_combinations")]
    pub applied_combinations: IndexMap<String, Vec<String>>,
    #[serde(rename = "applied_bonus_symbol")]
    pub applied_bonus_symbols: Vec<String>,
    #[serde(skip)]
    pub attempts: u32,
}

impl SpinResult {
    fn from_breakdown(grid: Grid, breakdown: RewardBreakdown, attempts: u32) -> Self {
        Self {
            grid,
            reward: breakdown.reward,
            applied_combinations: breakdown.applied_combinations,
            applied_bonus_symbols: breakdown.applied_bonus_symbols,
            attempts,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SlotEngine {
    config: GameConfig,
    generator: GridGenerator,
}

impl SlotEngine {
    pub fn new(config: GameConfig) -> Result<Self, SpinError> {
        config.validate()?;
        let generator = GridGenerator::new(&config)?;
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R, bonus_probability: f64) -> Grid {
        self.generator.generate(rng, bonus_probability)
    }

    pub fn evaluate(&self, grid: &Grid, betting_amount: u32) -> Result<RewardBreakdown, SpinError> {
        let matches = match_combinations(grid, &self.config)?;
        Ok(aggregate_reward(grid, &self.config, &matches, betting_amount))
    }

    /// One attempt: whatever grid comes out, winning or not.
    pub fn spin_once<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        options: &SpinOptions,
    ) -> Result<SpinResult, SpinError> {
        options.check()?;
        let grid = self.generate(rng, options.bonus_probability);
        let breakdown = self.evaluate(&grid, options.betting_amount)?;
        Ok(SpinResult::from_breakdown(grid, breakdown, 1))
    }

    /// Generates grids until one pays, giving up after `max_attempts`.
    pub fn spin<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
        options: &SpinOptions,
    ) -> Result<SpinResult, SpinError> {
        options.check()?;
        for attempt in 1..=options.max_attempts {
            let grid = self.generate(rng, options.bonus_probability);
            let breakdown = self.evaluate(&grid, options.betting_amount)?;
            log::info!("attempt {attempt}: reward {}", breakdown.reward);
            if breakdown.reward > 0.0 {
                log::info!("winning grid found after {attempt} attempts");
                return Ok(SpinResult::from_breakdown(grid, breakdown, attempt));
            }
        }
        Err(SpinError::NoWinningGrid {
            attempts: options.max_attempts,
        })
    }
}

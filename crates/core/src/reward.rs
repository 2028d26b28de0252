use crate::{BonusImpact, GameConfig, Grid, Matches, SymbolKind};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RewardBreakdown {
    pub reward: f64,
    /// Sum of the per-symbol values before bonus symbols are applied.
    pub base_reward: f64,
    pub symbol_rewards: IndexMap<String, f64>,
    pub applied_combinations: IndexMap<String, Vec<String>>,
    pub applied_bonus_symbols: Vec<String>,
}

pub fn aggregate_reward(
    grid: &Grid,
    config: &GameConfig,
    matches: &Matches,
    betting_amount: u32,
) -> RewardBreakdown {
    let bet = betting_amount as f64;
    let mut symbol_rewards: IndexMap<String, f64> = IndexMap::new();
    let mut applied_combinations: IndexMap<String, Vec<String>> = IndexMap::new();

    for hit in matches.iter() {
        let Some(combination) = config
            .win_combinations
            .iter()
            .find(|combination| combination.id == hit.combination)
        else {
            log::warn!(
                "combination {} is not configured, skipping symbol {}",
                hit.combination,
                hit.symbol
            );
            continue;
        };
        match config
            .symbol(&hit.symbol)
            .and_then(|def| def.reward_multiplier)
        {
            Some(symbol_multiplier) => {
                let contribution = bet * symbol_multiplier * combination.reward_multiplier;
                log::debug!(
                    "reward {}: {} x {}",
                    combination.group,
                    hit.symbol,
                    contribution
                );
                // A repeated hit scales what the symbol already earned.
                symbol_rewards
                    .entry(hit.symbol.clone())
                    .and_modify(|value| *value *= combination.reward_multiplier)
                    .or_insert(contribution);
            }
            None => log::warn!("symbol {} has no reward multiplier", hit.symbol),
        }
        applied_combinations
            .entry(hit.symbol.clone())
            .or_default()
            .push(combination.id.clone());
    }

    let base_reward: f64 = symbol_rewards.values().sum();
    let mut breakdown = RewardBreakdown {
        reward: 0.0,
        base_reward,
        symbol_rewards,
        applied_combinations,
        applied_bonus_symbols: Vec::new(),
    };
    if base_reward == 0.0 {
        log::debug!("no winning combination, bonus symbols ignored");
        return breakdown;
    }

    let mut bonus_multiplier = 1.0;
    let mut extra_bonus = 0.0;
    for (_, symbol) in grid.cells() {
        let Some(def) = config.symbol(symbol) else {
            continue;
        };
        if def.kind != SymbolKind::Bonus {
            continue;
        }
        let Some(impact) = def.impact else {
            continue;
        };
        match impact {
            BonusImpact::MultiplyReward => match def.reward_multiplier {
                Some(multiplier) => {
                    bonus_multiplier *= multiplier;
                    log::debug!("reward {}: x{multiplier}", impact.id());
                    breakdown.applied_bonus_symbols.push(symbol.to_string());
                }
                None => log::warn!("bonus symbol {symbol} has no reward multiplier"),
            },
            BonusImpact::ExtraBonus => match def.extra {
                Some(extra) => {
                    extra_bonus += extra as f64;
                    log::debug!("reward {}: +{extra}", impact.id());
                    breakdown.applied_bonus_symbols.push(symbol.to_string());
                }
                None => log::warn!("bonus symbol {symbol} has no extra amount"),
            },
            BonusImpact::Miss => log::debug!("reward {}: {symbol} has no effect", impact.id()),
        }
    }

    breakdown.reward = base_reward * bonus_multiplier + extra_bonus;
    log::debug!("total reward: {}", breakdown.reward);
    breakdown
}

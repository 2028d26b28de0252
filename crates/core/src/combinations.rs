use crate::{CellCoord, CombinationKind, GameConfig, Grid, WinCombination};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("combination {combination} covers {coord}, outside the {rows}x{columns} grid")]
    InvalidCombinationArea {
        combination: String,
        coord: CellCoord,
        rows: usize,
        columns: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinationMatch {
    pub symbol: String,
    pub combination: String,
}

impl CombinationMatch {
    fn new(symbol: &str, combination: &WinCombination) -> Self {
        Self {
            symbol: symbol.to_string(),
            combination: combination.id.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matches {
    pub same_symbols: Vec<CombinationMatch>,
    pub linear_symbols: Vec<CombinationMatch>,
}

impl Matches {
    /// Same-symbol matches first, then linear ones; the order rewards are merged in.
    pub fn iter(&self) -> impl Iterator<Item = &CombinationMatch> + '_ {
        self.same_symbols.iter().chain(self.linear_symbols.iter())
    }
}

pub fn match_combinations(grid: &Grid, config: &GameConfig) -> Result<Matches, MatchError> {
    Ok(Matches {
        same_symbols: match_same_symbols(grid, config),
        linear_symbols: match_linear_symbols(grid, config)?,
    })
}

/// Occurrences of every standard symbol, keyed in lexicographic order.
pub fn standard_symbol_counts<'a>(grid: &'a Grid, config: &GameConfig) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for (_, symbol) in grid.cells() {
        if config.symbol(symbol).is_some_and(|def| def.is_standard()) {
            *counts.entry(symbol).or_insert(0) += 1;
        }
    }
    counts
}

pub fn match_same_symbols(grid: &Grid, config: &GameConfig) -> Vec<CombinationMatch> {
    let counts = standard_symbol_counts(grid, config);
    let mut matches = Vec::new();
    for combination in config.combinations_of(CombinationKind::SameSymbols) {
        let Some(required) = combination.count else {
            continue;
        };
        for (symbol, count) in &counts {
            if *count == required {
                matches.push(CombinationMatch::new(symbol, combination));
            }
        }
    }
    matches
}

pub fn match_linear_symbols(
    grid: &Grid,
    config: &GameConfig,
) -> Result<Vec<CombinationMatch>, MatchError> {
    let mut matches = Vec::new();
    for combination in config.combinations_of(CombinationKind::LinearSymbols) {
        for area in &combination.covered_areas {
            if let Some(symbol) = uniform_symbol(grid, combination, area)? {
                matches.push(CombinationMatch::new(symbol, combination));
            }
        }
    }
    Ok(matches)
}

fn uniform_symbol<'a>(
    grid: &'a Grid,
    combination: &WinCombination,
    area: &[CellCoord],
) -> Result<Option<&'a str>, MatchError> {
    let mut found: Option<&str> = None;
    let mut uniform = true;
    for coord in area {
        let symbol = grid
            .get(*coord)
            .ok_or_else(|| MatchError::InvalidCombinationArea {
                combination: combination.id.clone(),
                coord: *coord,
                rows: grid.rows(),
                columns: grid.columns(),
            })?;
        match found {
            None => found = Some(symbol),
            Some(first) if first != symbol => uniform = false,
            Some(_) => {}
        }
    }
    Ok(found.filter(|_| uniform))
}

use crate::{BonusImpact, SymbolDef, SymbolKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Symbol id to relative weight, in declared order.
pub type WeightTable = IndexMap<String, u32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellCoord {
    pub row: usize,
    pub column: usize,
}

impl CellCoord {
    pub const ORIGIN: CellCoord = CellCoord { row: 0, column: 0 };

    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected `row:column`, got `{0}`")]
pub struct CoordParseError(pub String);

impl FromStr for CellCoord {
    type Err = CoordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (row, column) = value
            .split_once(':')
            .ok_or_else(|| CoordParseError(value.to_string()))?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| CoordParseError(value.to_string()))?;
        let column = column
            .trim()
            .parse::<usize>()
            .map_err(|_| CoordParseError(value.to_string()))?;
        Ok(Self { row, column })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionWeights {
    pub row: usize,
    pub column: usize,
    pub weights: WeightTable,
}

impl PositionWeights {
    pub fn coord(&self) -> CellCoord {
        CellCoord::new(self.row, self.column)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Probabilities {
    pub standard_symbols: Vec<PositionWeights>,
    pub bonus_symbols: WeightTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombinationKind {
    SameSymbols,
    LinearSymbols,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinCombination {
    pub id: String,
    pub reward_multiplier: f64,
    pub kind: CombinationKind,
    pub count: Option<usize>,
    pub group: String,
    pub covered_areas: Vec<Vec<CellCoord>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
    pub symbols: IndexMap<String, SymbolDef>,
    pub probabilities: Probabilities,
    pub win_combinations: Vec<WinCombination>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {rows}x{columns}")]
    InvalidDimensions { rows: usize, columns: usize },
    #[error("no standard symbol weights declared for position 0:0")]
    MissingDefaultWeights,
    #[error("weights declared for {0}, which is outside the grid")]
    PositionOutOfBounds(CellCoord),
    #[error("weights declared twice for position {0}")]
    DuplicatePosition(CellCoord),
    #[error("{0} has no symbols")]
    EmptyWeights(String),
    #[error("{table} gives symbol {symbol} a zero weight")]
    ZeroWeight { table: String, symbol: String },
    #[error("{table} references unknown symbol {symbol}")]
    UnknownSymbol { table: String, symbol: String },
    #[error("symbol {0} needs a reward_multiplier")]
    MissingRewardMultiplier(String),
    #[error("bonus symbol {0} needs an impact")]
    MissingImpact(String),
    #[error("bonus symbol {0} needs an extra amount")]
    MissingExtra(String),
    #[error("combination {0} needs a positive count")]
    MissingCount(String),
    #[error("combination {0} needs at least one covered area")]
    MissingCoveredAreas(String),
    #[error("combination {combination} has an empty covered area at index {index}")]
    EmptyCoveredArea { combination: String, index: usize },
    #[error("combination {combination} covers {coord}, which is outside the grid")]
    InvalidCombinationArea { combination: String, coord: CellCoord },
    #[error("combination id {0} is declared more than once")]
    DuplicateCombination(String),
    #[error("combination {0} has a non-finite reward_multiplier")]
    InvalidRewardMultiplier(String),
}

impl GameConfig {
    pub fn symbol(&self, id: &str) -> Option<&SymbolDef> {
        self.symbols.get(id)
    }

    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.rows && coord.column < self.columns
    }

    pub fn weights_at(&self, coord: CellCoord) -> Option<&WeightTable> {
        self.probabilities
            .standard_symbols
            .iter()
            .find(|entry| entry.row == coord.row && entry.column == coord.column)
            .map(|entry| &entry.weights)
    }

    /// Table used for every position without its own declaration.
    pub fn default_weights(&self) -> Option<&WeightTable> {
        self.weights_at(CellCoord::ORIGIN)
    }

    pub fn combinations_of(
        &self,
        kind: CombinationKind,
    ) -> impl Iterator<Item = &WinCombination> + '_ {
        self.win_combinations
            .iter()
            .filter(move |combination| combination.kind == kind)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                columns: self.columns,
            });
        }
        for (id, def) in &self.symbols {
            validate_symbol(id, def)?;
        }

        let mut seen = HashSet::new();
        for entry in &self.probabilities.standard_symbols {
            let coord = entry.coord();
            if !self.contains(coord) {
                return Err(ConfigError::PositionOutOfBounds(coord));
            }
            if !seen.insert(coord) {
                return Err(ConfigError::DuplicatePosition(coord));
            }
            self.validate_table(&format!("standard symbols at {coord}"), &entry.weights)?;
        }
        if !seen.contains(&CellCoord::ORIGIN) {
            return Err(ConfigError::MissingDefaultWeights);
        }
        self.validate_table("bonus symbols", &self.probabilities.bonus_symbols)?;

        let mut ids = HashSet::new();
        for combination in &self.win_combinations {
            if !ids.insert(combination.id.as_str()) {
                return Err(ConfigError::DuplicateCombination(combination.id.clone()));
            }
            self.validate_combination(combination)?;
        }
        Ok(())
    }

    fn validate_table(&self, table: &str, weights: &WeightTable) -> Result<(), ConfigError> {
        if weights.is_empty() {
            return Err(ConfigError::EmptyWeights(table.to_string()));
        }
        for (symbol, weight) in weights {
            if !self.symbols.contains_key(symbol) {
                return Err(ConfigError::UnknownSymbol {
                    table: table.to_string(),
                    symbol: symbol.clone(),
                });
            }
            if *weight == 0 {
                return Err(ConfigError::ZeroWeight {
                    table: table.to_string(),
                    symbol: symbol.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_combination(&self, combination: &WinCombination) -> Result<(), ConfigError> {
        if !combination.reward_multiplier.is_finite() {
            return Err(ConfigError::InvalidRewardMultiplier(
                combination.id.clone(),
            ));
        }
        match combination.kind {
            CombinationKind::SameSymbols => match combination.count {
                Some(count) if count > 0 => Ok(()),
                _ => Err(ConfigError::MissingCount(combination.id.clone())),
            },
            CombinationKind::LinearSymbols => {
                if combination.covered_areas.is_empty() {
                    return Err(ConfigError::MissingCoveredAreas(combination.id.clone()));
                }
                for (index, area) in combination.covered_areas.iter().enumerate() {
                    if area.is_empty() {
                        return Err(ConfigError::EmptyCoveredArea {
                            combination: combination.id.clone(),
                            index,
                        });
                    }
                    if let Some(coord) = area.iter().find(|coord| !self.contains(**coord)) {
                        return Err(ConfigError::InvalidCombinationArea {
                            combination: combination.id.clone(),
                            coord: *coord,
                        });
                    }
                }
                Ok(())
            }
        }
    }
}

fn validate_symbol(id: &str, def: &SymbolDef) -> Result<(), ConfigError> {
    match def.kind {
        SymbolKind::Standard => {
            if def.reward_multiplier.is_none() {
                return Err(ConfigError::MissingRewardMultiplier(id.to_string()));
            }
        }
        SymbolKind::Bonus => match def.impact {
            None => return Err(ConfigError::MissingImpact(id.to_string())),
            Some(BonusImpact::MultiplyReward) if def.reward_multiplier.is_none() => {
                return Err(ConfigError::MissingRewardMultiplier(id.to_string()));
            }
            Some(BonusImpact::ExtraBonus) if def.extra.is_none() => {
                return Err(ConfigError::MissingExtra(id.to_string()));
            }
            Some(_) => {}
        },
    }
    Ok(())
}

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use slotgrid_core::{
    BonusImpact, CellCoord, CombinationKind, GameConfig, PositionWeights, Probabilities,
    SymbolDef, SymbolKind, WeightTable, WinCombination,
};

/// On-disk layout of a configuration document. Unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGameConfig {
    pub columns: usize,
    pub rows: usize,
    pub symbols: IndexMap<String, RawSymbol>,
    pub probabilities: RawProbabilities,
    #[serde(default)]
    pub win_combinations: IndexMap<String, RawWinCombination>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSymbol {
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    #[serde(default)]
    pub reward_multiplier: Option<f64>,
    #[serde(default)]
    pub extra: Option<i64>,
    #[serde(default)]
    pub impact: Option<BonusImpact>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawProbabilities {
    #[serde(default)]
    pub standard_symbols: Vec<RawStandardSymbols>,
    pub bonus_symbols: RawBonusSymbols,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStandardSymbols {
    pub column: usize,
    pub row: usize,
    pub symbols: IndexMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBonusSymbols {
    pub symbols: IndexMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWinCombination {
    pub reward_multiplier: f64,
    pub when: CombinationKind,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub covered_areas: Option<Vec<Vec<String>>>,
}

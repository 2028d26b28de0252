use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Standard,
    Bonus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusImpact {
    MultiplyReward,
    ExtraBonus,
    Miss,
}

impl BonusImpact {
    pub fn id(self) -> &'static str {
        match self {
            BonusImpact::MultiplyReward => "multiply_reward",
            BonusImpact::ExtraBonus => "extra_bonus",
            BonusImpact::Miss => "miss",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolDef {
    pub kind: SymbolKind,
    pub reward_multiplier: Option<f64>,
    pub extra: Option<i64>,
    pub impact: Option<BonusImpact>,
}

impl SymbolDef {
    pub fn standard(reward_multiplier: f64) -> Self {
        Self {
            kind: SymbolKind::Standard,
            reward_multiplier: Some(reward_multiplier),
            extra: None,
            impact: None,
        }
    }

    pub fn multiply_reward(multiplier: f64) -> Self {
        Self {
            kind: SymbolKind::Bonus,
            reward_multiplier: Some(multiplier),
            extra: None,
            impact: Some(BonusImpact::MultiplyReward),
        }
    }

    pub fn extra_bonus(extra: i64) -> Self {
        Self {
            kind: SymbolKind::Bonus,
            reward_multiplier: None,
            extra: Some(extra),
            impact: Some(BonusImpact::ExtraBonus),
        }
    }

    pub fn miss() -> Self {
        Self {
            kind: SymbolKind::Bonus,
            reward_multiplier: None,
            extra: None,
            impact: Some(BonusImpact::Miss),
        }
    }

    pub fn is_standard(&self) -> bool {
        self.kind == SymbolKind::Standard
    }

    pub fn is_bonus(&self) -> bool {
        self.kind == SymbolKind::Bonus
    }
}

use crate::schema::{
    GameConfig, PositionWeights, Probabilities, RawGameConfig, RawSymbol, RawWinCombination,
    SymbolDef, WinCombination,
};
use anyhow::{bail, Context};
use slotgrid_core::CellCoord;
use std::fs;
use std::path::Path;

pub fn load_game_config(path: &Path) -> anyhow::Result<GameConfig> {
    if !path.is_file() {
        bail!("config file does not exist or is not a file: {}", path.display());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config = parse_game_config(&raw).with_context(|| format!("load {}", path.display()))?;
    log::debug!(
        "loaded {}: {}x{} grid, {} symbols, {} combinations",
        path.display(),
        config.rows,
        config.columns,
        config.symbols.len(),
        config.win_combinations.len()
    );
    Ok(config)
}

pub fn parse_game_config(text: &str) -> anyhow::Result<GameConfig> {
    let raw: RawGameConfig = serde_json::from_str(text).context("parse config json")?;
    build_game_config(raw)
}

pub fn build_game_config(raw: RawGameConfig) -> anyhow::Result<GameConfig> {
    let symbols = raw
        .symbols
        .into_iter()
        .map(|(id, symbol)| (id, symbol_def(symbol)))
        .collect();
    let standard_symbols = raw
        .probabilities
        .standard_symbols
        .into_iter()
        .map(|entry| PositionWeights {
            row: entry.row,
            column: entry.column,
            weights: entry.symbols,
        })
        .collect();
    let win_combinations = raw
        .win_combinations
        .into_iter()
        .map(|(id, combination)| win_combination(id, combination))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let config = GameConfig {
        rows: raw.rows,
        columns: raw.columns,
        symbols,
        probabilities: Probabilities {
            standard_symbols,
            bonus_symbols: raw.probabilities.bonus_symbols.symbols,
        },
        win_combinations,
    };
    config.validate().context("validate config")?;
    Ok(config)
}

fn symbol_def(raw: RawSymbol) -> SymbolDef {
    SymbolDef {
        kind: raw.kind,
        reward_multiplier: raw.reward_multiplier,
        extra: raw.extra,
        impact: raw.impact,
    }
}

fn win_combination(id: String, raw: RawWinCombination) -> anyhow::Result<WinCombination> {
    let covered_areas = raw
        .covered_areas
        .unwrap_or_default()
        .iter()
        .map(|area| parse_area(area))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("invalid covered area in combination {id}"))?;
    Ok(WinCombination {
        id,
        reward_multiplier: raw.reward_multiplier,
        kind: raw.when,
        count: raw.count,
        group: raw.group,
        covered_areas,
    })
}

fn parse_area(area: &[String]) -> Result<Vec<CellCoord>, slotgrid_core::CoordParseError> {
    area.iter().map(|coord| coord.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotgrid_core::{BonusImpact, CombinationKind, SymbolKind};

    const MINIMAL: &str = r#"{
        "columns": 2,
        "rows": 2,
        "symbols": {
            "B": { "reward_multiplier": 3, "type": "standard" },
            "A": { "reward_multiplier": 5, "type": "standard" },
            "5x": { "reward_multiplier": 5, "type": "bonus", "impact": "multiply_reward" },
            "+500": { "extra": 500, "type": "bonus", "impact": "extra_bonus" },
            "MISS": { "type": "bonus", "impact": "miss" }
        },
        "probabilities": {
            "standard_symbols": [
                { "column": 0, "row": 0, "symbols": { "B": 2, "A": 1 } }
            ],
            "bonus_symbols": { "symbols": { "5x": 1, "+500": 2, "MISS": 3 } }
        },
        "win_combinations": {
            "same_symbol_3_times": {
                "reward_multiplier": 1, "when": "same_symbols", "count": 3, "group": "same_symbols"
            },
            "same_symbols_horizontally": {
                "reward_multiplier": 2, "when": "linear_symbols",
                "group": "horizontally_linear_symbols",
                "covered_areas": [["0:0", "0:1"], ["1:0", "1:1"]]
            }
        },
        "comment": "ignored"
    }"#;

    #[test]
    fn parses_document_in_declared_order() {
        let config = parse_game_config(MINIMAL).expect("parse");
        let symbols: Vec<&str> = config.symbols.keys().map(String::as_str).collect();
        assert_eq!(symbols, vec!["B", "A", "5x", "+500", "MISS"]);
        let weights: Vec<&str> = config.probabilities.standard_symbols[0]
            .weights
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(weights, vec!["B", "A"]);
        let combinations: Vec<&str> = config
            .win_combinations
            .iter()
            .map(|combination| combination.id.as_str())
            .collect();
        assert_eq!(
            combinations,
            vec!["same_symbol_3_times", "same_symbols_horizontally"]
        );
    }

    #[test]
    fn maps_kinds_impacts_and_areas() {
        let config = parse_game_config(MINIMAL).expect("parse");
        assert_eq!(config.symbols["A"].kind, SymbolKind::Standard);
        assert_eq!(config.symbols["5x"].impact, Some(BonusImpact::MultiplyReward));
        assert_eq!(config.symbols["+500"].extra, Some(500));
        assert_eq!(config.symbols["MISS"].impact, Some(BonusImpact::Miss));
        let linear = &config.win_combinations[1];
        assert_eq!(linear.kind, CombinationKind::LinearSymbols);
        assert_eq!(
            linear.covered_areas,
            vec![
                vec![CellCoord::new(0, 0), CellCoord::new(0, 1)],
                vec![CellCoord::new(1, 0), CellCoord::new(1, 1)],
            ]
        );
        assert_eq!(config.win_combinations[0].count, Some(3));
    }

    #[test]
    fn rejects_malformed_coordinate() {
        let text = MINIMAL.replace("\"1:0\"", "\"1-0\"");
        let err = parse_game_config(&text).expect_err("malformed coordinate");
        let message = format!("{err:#}");
        assert!(message.contains("same_symbols_horizontally"), "{message}");
        assert!(message.contains("1-0"), "{message}");
    }

    #[test]
    fn rejects_coordinate_outside_grid() {
        let text = MINIMAL.replace("\"1:1\"", "\"1:2\"");
        let err = parse_game_config(&text).expect_err("coordinate outside grid");
        assert!(format!("{err:#}").contains("outside the grid"));
    }

    #[test]
    fn rejects_unknown_impact() {
        let text = MINIMAL.replace("\"miss\"", "\"teleport\"");
        assert!(parse_game_config(&text).is_err());
    }

    #[test]
    fn rejects_missing_default_position() {
        let text = MINIMAL.replace("\"column\": 0, \"row\": 0", "\"column\": 1, \"row\": 0");
        let err = parse_game_config(&text).expect_err("no 0:0 weights");
        assert!(format!("{err:#}").contains("0:0"));
    }

    #[test]
    fn rejects_unknown_symbol_in_bonus_weights() {
        let text = MINIMAL.replace("\"MISS\": 3", "\"LOSE\": 3");
        let err = parse_game_config(&text).expect_err("unknown symbol");
        assert!(format!("{err:#}").contains("LOSE"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_game_config(Path::new("does/not/exist.json")).expect_err("missing");
        assert!(err.to_string().contains("does not exist"));
    }
}

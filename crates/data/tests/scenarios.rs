use slotgrid_core::{Grid, RngState, SlotEngine, SpinOptions};
use slotgrid_data::load_game_config;
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

fn new_engine() -> SlotEngine {
    let config = load_game_config(&assets_root().join("config.json")).expect("load config");
    SlotEngine::new(config).expect("engine")
}

fn grid(rows: [[&str; 3]; 3]) -> Grid {
    Grid::from_rows(rows).expect("grid")
}

fn combos(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn same_symbols_with_columns() {
    let engine = new_engine();
    let board = grid([["A", "A", "B"], ["A", "C", "B"], ["A", "A", "B"]]);
    let breakdown = engine.evaluate(&board, 100).expect("evaluate");
    assert_eq!(breakdown.reward, 2600.0);
    assert_eq!(
        breakdown.applied_combinations.get("A"),
        Some(&combos(&["same_symbol_5_times", "same_symbols_vertically"]))
    );
    assert_eq!(
        breakdown.applied_combinations.get("B"),
        Some(&combos(&["same_symbol_3_times", "same_symbols_vertically"]))
    );
    assert!(breakdown.applied_bonus_symbols.is_empty());
}

#[test]
fn extra_bonus_is_added_after_combinations() {
    let engine = new_engine();
    let board = grid([["A", "A", "B"], ["A", "+1000", "B"], ["A", "A", "B"]]);
    let breakdown = engine.evaluate(&board, 100).expect("evaluate");
    assert_eq!(breakdown.reward, 3600.0);
    assert_eq!(breakdown.applied_bonus_symbols, vec!["+1000"]);
}

#[test]
fn lost_game_keeps_bonus_symbols_unapplied() {
    let engine = new_engine();
    let board = grid([["A", "B", "C"], ["E", "B", "5x"], ["F", "D", "C"]]);
    let breakdown = engine.evaluate(&board, 100).expect("evaluate");
    assert_eq!(breakdown.reward, 0.0);
    assert!(breakdown.applied_bonus_symbols.is_empty());
}

#[test]
fn diagonal_line_with_extra_bonus() {
    let engine = new_engine();
    let board = grid([["D", "A", "+1000"], ["D", "D", "E"], ["C", "F", "D"]]);
    let breakdown = engine.evaluate(&board, 100).expect("evaluate");
    assert_eq!(breakdown.reward, 2500.0);
    assert_eq!(
        breakdown.applied_combinations.get("D"),
        Some(&combos(&[
            "same_symbol_4_times",
            "same_symbols_diagonally_left_to_right"
        ]))
    );
}

#[test]
fn multiplier_and_extra_bonus_are_both_applied() {
    let engine = new_engine();
    let board = grid([["A", "A", "B"], ["A", "5x", "B"], ["A", "A", "+1000"]]);
    let breakdown = engine.evaluate(&board, 100).expect("evaluate");
    assert_eq!(breakdown.applied_bonus_symbols.len(), 2);
    assert!(breakdown.applied_bonus_symbols.contains(&"5x".to_string()));
    // A: 100 * 5 * 2 then x2 for the first column, x5, +1000.
    assert_eq!(breakdown.reward, 2000.0 * 5.0 + 1000.0);
}

#[test]
fn spin_result_serializes_in_report_layout() {
    let engine = new_engine();
    let options = SpinOptions {
        betting_amount: 100,
        bonus_probability: 0.5,
        max_attempts: 10_000,
    };
    let result = engine
        .spin(&mut RngState::from_seed(2024), &options)
        .expect("spin");
    let text = serde_json::to_string(&result).expect("serialize");
    let positions: Vec<usize> = [
        "\"matrix\"",
        "\"reward\"",
        "\"applied_winning_combinations\"",
        "\"applied_bonus_symbol\"",
    ]
    .iter()
    .map(|key| text.find(key).expect("key present"))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{text}");

    let value: serde_json::Value = serde_json::from_str(&text).expect("json");
    let matrix = value["matrix"].as_array().expect("matrix rows");
    assert_eq!(matrix.len(), 3);
    assert!(matrix
        .iter()
        .all(|row| row.as_array().map(|cells| cells.len()) == Some(3)));
    let reward = value["reward"].as_f64().expect("reward");
    assert!((reward - result.reward).abs() < 1e-6);
    assert!(reward > 0.0);
}

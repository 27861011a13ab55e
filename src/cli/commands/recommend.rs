//! Recommend command - pick the next move from a pair of value tables

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde_json::Value;

use crate::{
    advisor::{Advisor, MoveRequest, ValuePair},
    cli::{
        config::{TableFormat, load_table, parse_board, parse_player_token},
        output::print_json,
    },
    ports::ValueTable,
};

#[derive(Parser, Debug)]
#[command(about = "Recommend the next move for a board")]
pub struct RecommendArgs {
    /// Board as nine cells (`X...O....`) or a JSON grid of 0/-1/1
    pub board: String,

    /// Player to move (`x` or `o`)
    #[arg(long, short = 'p')]
    pub player: String,

    /// Value table for X
    #[arg(long)]
    pub vx: PathBuf,

    /// Value table for O
    #[arg(long)]
    pub vo: PathBuf,

    /// Table file format (inferred from the extension by default)
    #[arg(long, value_enum)]
    pub format: Option<TableFormat>,

    /// Also report every candidate move with its value
    #[arg(long)]
    pub explain: bool,
}

pub fn execute(args: RecommendArgs) -> Result<()> {
    let request = MoveRequest {
        board: parse_board(&args.board)?,
        current_player: parse_player_token(&args.player, "--player")?,
    };

    let advisor = Advisor::new(ValuePair::new(
        load_table(&args.vx, args.format)?,
        load_table(&args.vo, args.format)?,
    ));

    print_json(&report(&advisor, &request, args.explain)?)
}

/// The recommendation as one JSON object, with the valued candidates under
/// `candidates` when `explain` is set
pub fn report<T: ValueTable>(
    advisor: &Advisor<T>,
    request: &MoveRequest,
    explain: bool,
) -> Result<Value> {
    let candidates = if explain {
        Some(advisor.explain(request)?)
    } else {
        None
    };

    let mut report = serde_json::to_value(advisor.recommend(request)?)?;
    if let Some(candidates) = candidates {
        report["candidates"] = serde_json::to_value(candidates)?;
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{adapters::SparseValueTable, tictactoe::{Board, Player}};

    fn advisor() -> Advisor<SparseValueTable> {
        let corner = Board::from_string("X...O...X").unwrap().encode();
        Advisor::new(ValuePair::new(
            SparseValueTable::new().with(corner, 0.5),
            SparseValueTable::new(),
        ))
    }

    fn request() -> MoveRequest {
        MoveRequest {
            board: parse_board("X...O....").unwrap(),
            current_player: Player::X,
        }
    }

    #[test]
    fn test_report_without_explain_is_plain_recommendation() {
        let report = report(&advisor(), &request(), false).unwrap();
        assert_eq!(report["next_move"], json!([2, 2]));
        assert!(report.get("candidates").is_none());
    }

    #[test]
    fn test_explain_adds_candidates_to_the_same_object() {
        let report = report(&advisor(), &request(), true).unwrap();
        assert_eq!(report["next_move"], json!([2, 2]));

        let candidates = report["candidates"].as_array().unwrap();
        assert_eq!(candidates.len(), 7);
        assert_eq!(candidates[0]["coord"], json!([0, 1]));
        assert_eq!(candidates[6]["coord"], json!([2, 2]));
        assert_eq!(candidates[6]["value"], json!(0.5));

        // Whole report is a single JSON document
        let text = serde_json::to_string_pretty(&report).unwrap();
        assert_eq!(serde_json::from_str::<Value>(&text).unwrap(), report);
    }
}

//! Status command - report whether a board is ongoing, won or drawn

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use crate::{
    advisor::check_state,
    cli::{config::parse_board, output::print_json},
};

#[derive(Parser, Debug)]
#[command(about = "Report the status of a board")]
pub struct StatusArgs {
    /// Board as nine cells (`X...O....`) or a JSON grid of 0/-1/1
    pub board: String,
}

pub fn execute(args: StatusArgs) -> Result<()> {
    let grid = parse_board(&args.board)?;
    let status = check_state(&grid)?;
    print_json(&json!({ "status": status }))
}

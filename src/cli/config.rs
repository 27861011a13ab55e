//! Argument types shared across commands

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;

use crate::{
    adapters::{JsonRepository, MsgPackRepository, StoredValueTable},
    ports::ValueTableRepository,
    tictactoe::{Board, Player},
};

/// On-disk value table format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    Json,
    Msgpack,
}

impl TableFormat {
    /// Guess the format from a file extension; anything but `.json` is
    /// treated as MessagePack.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
            _ => TableFormat::Msgpack,
        }
    }

    fn repository(self) -> Box<dyn ValueTableRepository> {
        match self {
            TableFormat::Json => Box::new(JsonRepository::new()),
            TableFormat::Msgpack => Box::new(MsgPackRepository::new()),
        }
    }
}

/// Load a value table, inferring the format unless one is forced
pub fn load_table(path: &Path, format: Option<TableFormat>) -> Result<StoredValueTable> {
    let format = format.unwrap_or_else(|| TableFormat::infer(path));
    format
        .repository()
        .load(path)
        .with_context(|| format!("Failed to load value table {}", path.display()))
}

/// Parse a board given either as a JSON grid (`[[0,0,0],...]`) or as nine
/// cell characters (`"X...O...."`)
pub fn parse_board(value: &str) -> Result<Vec<Vec<i64>>> {
    let trimmed = value.trim();
    if trimmed.starts_with('[') {
        serde_json::from_str(trimmed).with_context(|| format!("Invalid board grid '{trimmed}'"))
    } else {
        Ok(Board::from_string(trimmed)?.to_grid())
    }
}

pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    value
        .parse()
        .map_err(|_| anyhow!("Invalid value '{value}' for {flag} (expected 'x' or 'o')"))
}

//! Command-line interface for the move advisor

pub mod commands;
pub mod config;
pub mod output;

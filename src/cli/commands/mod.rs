//! Advisor subcommands

pub mod recommend;
pub mod status;

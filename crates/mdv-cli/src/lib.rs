//! CLI library components for the master data validator.

pub mod commands;
pub mod logging;
pub mod output;

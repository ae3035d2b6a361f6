//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod greeks;
pub mod price;

use clap::ValueEnum;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Formats one table row with a fixed label column.
pub(crate) fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!("│ {:<22} │ {:>20} │\n", label, value)
}

pub(crate) const TABLE_TOP: &str = "┌────────────────────────┬──────────────────────┐\n";
pub(crate) const TABLE_RULE: &str = "├────────────────────────┼──────────────────────┤\n";
pub(crate) const TABLE_BOTTOM: &str = "└────────────────────────┴──────────────────────┘\n";

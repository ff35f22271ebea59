//! cuptower library exports for the binary and for testing

use clap::ValueEnum;

pub mod core;
pub mod script;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How the script runner reports its results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Echo each command followed by its outcome
    #[default]
    Text,
    /// One JSON report at the end
    Json,
}

//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the toonlens binary.

mod commands;
mod compare;
mod encode;
mod pricing;

pub use commands::{Cli, Commands};
pub use compare::handle_compare;
pub use encode::handle_encode;
pub use pricing::handle_pricing;

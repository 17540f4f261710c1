//! Command implementations.
//!
//! Commands write their output to a caller-supplied writer so that stdout
//! stays the only place rendered output goes, and tests can capture it.

pub mod products;
pub mod shop;
pub mod theme;

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// How one-shot commands print their result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write `value` as pretty JSON followed by a newline.
fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

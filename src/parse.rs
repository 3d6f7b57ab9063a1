// src/parse.rs

//! Parsing of the plain-text instruction list.
//!
//! Each non-blank line must match the fixed sentence template
//! `Step <X> must be finished before step <Y> can begin.` (terminal period
//! optional, interior whitespace flexible). Anything else aborts the parse;
//! a partial edge list would build a graph with silently missing
//! constraints.

use regex::Regex;
use tracing::debug;

use crate::dag::TaskId;
use crate::errors::{PlandagError, Result};

const INSTRUCTION_PATTERN: &str =
    r"^Step\s+(\S+)\s+must\s+be\s+finished\s+before\s+step\s+(\S+)\s+can\s+begin\.?$";

/// Parse an instruction list into `(prerequisite, dependent)` pairs.
///
/// Blank lines are skipped. The first non-matching line fails the whole
/// parse with its 1-based line number and text.
pub fn parse_instructions(input: &str) -> Result<Vec<(TaskId, TaskId)>> {
    // The pattern is a fixed literal, so compilation cannot fail.
    let re = Regex::new(INSTRUCTION_PATTERN).map_err(anyhow::Error::from)?;

    let mut pairs = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let caps = re
            .captures(line)
            .ok_or_else(|| PlandagError::MalformedInstruction {
                line: idx + 1,
                text: raw.to_string(),
            })?;

        pairs.push((caps[1].to_string(), caps[2].to_string()));
    }

    debug!(edges = pairs.len(), "parsed instruction list");
    Ok(pairs)
}

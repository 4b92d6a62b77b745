//! Case-pair reduction.
//!
//! Two strategies produce identical output for every input:
//!
//! - [`Strategy::Stack`]: single left-to-right pass, cancelling each
//!   character against the top of an output stack. Linear time.
//! - [`Strategy::Rescan`]: the reference loop. Scan for the first bad pair,
//!   remove it, restart from the beginning. Quadratic in the worst case;
//!   kept as the oracle the stack pass is checked against.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pair::is_bad_pair;

/// Which algorithm computes the reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Stack,
    Rescan,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Stack, Strategy::Rescan];

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Stack => "stack",
            Strategy::Rescan => "rescan",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stack" => Ok(Strategy::Stack),
            "rescan" => Ok(Strategy::Rescan),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'stack' or 'rescan')"
            )),
        }
    }
}

/// Outcome of reducing one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reduction {
    pub output: String,
    /// Number of bad pairs cancelled; each removes two characters.
    pub removed_pairs: usize,
}

/// Fully reduce `input`, removing adjacent opposite-case pairs until none remain.
pub fn fix_the_string(input: &str) -> String {
    reduce_by_stack(input)
}

/// Reduce with an explicit strategy.
pub fn reduce_with(strategy: Strategy, input: &str) -> String {
    reduce_report(strategy, input).output
}

/// Reduce with an explicit strategy and report how many pairs were removed.
pub fn reduce_report(strategy: Strategy, input: &str) -> Reduction {
    let reduction = match strategy {
        Strategy::Stack => stack_pass(input),
        Strategy::Rescan => rescan_pass(input),
    };
    log::debug!(
        "{strategy}: {} chars in, {} pairs removed",
        input.chars().count(),
        reduction.removed_pairs
    );
    reduction
}

/// Linear-time reduction: cancel each char against the top of the output.
pub fn reduce_by_stack(input: &str) -> String {
    stack_pass(input).output
}

/// Reference reduction: remove the first bad pair, restart the scan at 0.
pub fn reduce_by_rescan(input: &str) -> String {
    rescan_pass(input).output
}

fn stack_pass(input: &str) -> Reduction {
    let mut output = String::with_capacity(input.len());
    let mut removed_pairs = 0;

    for c in input.chars() {
        match output.chars().next_back() {
            Some(top) if is_bad_pair(top, c) => {
                output.pop();
                removed_pairs += 1;
            }
            _ => output.push(c),
        }
    }

    Reduction {
        output,
        removed_pairs,
    }
}

fn rescan_pass(input: &str) -> Reduction {
    let mut buf: Vec<char> = input.chars().collect();
    let mut removed_pairs = 0;
    let mut i = 0;

    // `i + 1 < len` instead of `i < len - 1`: len is unsigned
    while !buf.is_empty() && i + 1 < buf.len() {
        if is_bad_pair(buf[i], buf[i + 1]) {
            log::trace!("rescan: removing {:?}{:?} at {i}", buf[i], buf[i + 1]);
            buf.drain(i..=i + 1);
            removed_pairs += 1;
            i = 0;
        } else {
            i += 1;
        }
    }

    Reduction {
        output: buf.into_iter().collect(),
        removed_pairs,
    }
}

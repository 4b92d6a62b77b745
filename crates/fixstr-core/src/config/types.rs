use serde::{Deserialize, Serialize};

use crate::reduce::{reduce_report, Reduction, Strategy};

/// Reduction settings, read from `.fixstr.toml` or the global config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReduceConfig {
    /// Algorithm used for the reduction.
    #[serde(default)]
    pub strategy: Strategy,

    /// Treat each input line as a separate string.
    #[serde(default = "default_per_line")]
    pub per_line: bool,

    /// Strip surrounding whitespace from each input before reducing.
    #[serde(default)]
    pub trim: bool,
}

fn default_per_line() -> bool {
    true
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            per_line: default_per_line(),
            trim: false,
        }
    }
}

impl ReduceConfig {
    /// Apply this config to a single input.
    pub fn reduce(&self, input: &str) -> Reduction {
        let input = if self.trim { input.trim() } else { input };
        reduce_report(self.strategy, input)
    }
}

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Demo {
    /// Number of invoice cases to synthesize.
    pub cases: usize,

    /// RNG seed; unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for Demo {
    fn default() -> Self {
        Self {
            cases: 2500,
            seed: None,
        }
    }
}

impl Demo {}

#![forbid(unsafe_code)]

use crate::domain::ActivityKind;
use serde::{Deserialize, Serialize};

/// One distinct activity with its aggregate statistics.
///
/// The activity name is the node identity; names are matched exactly.
/// Durations are hours from an occurrence of this activity to the next
/// event in the same case, so the last event of a case contributes no
/// sample to its own node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessNode {
    pub name: String,
    pub count: u64,
    pub avg_duration: f64,
    pub total_duration: f64,
    pub percentage: f64,
    pub kind: ActivityKind,
    pub is_bottleneck: bool,
}

/// One distinct observed transition between consecutive activities of a
/// case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessFlow {
    pub source: String,
    pub target: String,
    pub count: u64,
    pub avg_duration: f64,
    pub total_duration: f64,
    pub is_bottleneck: bool,
    pub bottleneck_score: f64,
}

/// The derived process graph. Rebuilt wholesale on every build call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProcessGraph {
    pub nodes: Vec<ProcessNode>,
    pub flows: Vec<ProcessFlow>,
}

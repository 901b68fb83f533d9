#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of an activity in the process, derived from its name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Start,
    End,
    Task,
    Manual,
    Approval,
    Rejection,
    /// Reserved for logs that tag activities explicitly; never produced
    /// by [`ActivityKind::classify`].
    System,
}

/// Ordered substring rules; the first matching row wins.
const RULES: &[(&[&str], ActivityKind)] = &[
    (&["Invoice Received"], ActivityKind::Start),
    (&["Payment Processed", "Cancelled"], ActivityKind::End),
    (&["Manual"], ActivityKind::Manual),
    (&["Approval", "Review"], ActivityKind::Approval),
    (&["Rejected"], ActivityKind::Rejection),
];

impl ActivityKind {
    /// Classify an activity name. Matching is case-sensitive and falls
    /// back to [`ActivityKind::Task`].
    pub fn classify(name: &str) -> Self {
        RULES
            .iter()
            .find(|(patterns, _)| patterns.iter().any(|p| name.contains(p)))
            .map(|(_, kind)| *kind)
            .unwrap_or(ActivityKind::Task)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActivityKind::Start => "start",
            ActivityKind::End => "end",
            ActivityKind::Task => "task",
            ActivityKind::Manual => "manual",
            ActivityKind::Approval => "approval",
            ActivityKind::Rejection => "rejection",
            ActivityKind::System => "system",
        };
        f.write_str(name)
    }
}

#![forbid(unsafe_code)]

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the event log: a single step of a single case.
///
/// Created once by the parser and never mutated. `resource`, `amount` and
/// `vendor` are descriptive; only `case_id`, `activity` and `timestamp`
/// feed the graph statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessEvent {
    pub case_id: String,
    pub activity: String,
    pub timestamp: NaiveDateTime,
    pub resource: String,
    pub amount: f64,
    pub vendor: String,
}

/// Whole-log counters consumed by reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LogSummary {
    pub total_events: u64,
    pub cases: u64,
    pub activities: u64,
    pub rejections: u64,
}

impl LogSummary {
    pub fn from_events(events: &[ProcessEvent]) -> Self {
        let mut cases = HashSet::new();
        let mut activities = HashSet::new();
        let mut rejections = 0;
        for event in events {
            cases.insert(event.case_id.as_str());
            activities.insert(event.activity.as_str());
            if event.activity.contains("Rejected") {
                rejections += 1;
            }
        }
        Self {
            total_events: events.len() as u64,
            cases: cases.len() as u64,
            activities: activities.len() as u64,
            rejections,
        }
    }
}

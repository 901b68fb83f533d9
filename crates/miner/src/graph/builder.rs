#![forbid(unsafe_code)]

use crate::domain::{ActivityKind, ProcessEvent, ProcessFlow, ProcessGraph, ProcessNode};
use crate::graph::stats::{bottleneck_score, quantile};
use config::Config;
use std::collections::HashMap;
use tracing::debug;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Derives the statistical process graph from an event sequence.
///
/// Thresholds come from [`config::Analysis`]; the defaults mark a node a
/// bottleneck above 3 hours average hand-off time and a flow a
/// bottleneck above the pooled 75th-percentile transition duration.
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder {
    node_bottleneck_hours: f64,
    flow_quantile: f64,
    severe_quantile: f64,
}

impl GraphBuilder {
    pub fn new(config: &Config) -> Self {
        let analysis = config.analysis.clamp();
        Self {
            node_bottleneck_hours: analysis.node_bottleneck_hours,
            flow_quantile: analysis.flow_quantile,
            severe_quantile: analysis.severe_quantile,
        }
    }

    /// Build a fresh graph from the events. Total over its input: an
    /// empty slice yields an empty graph, and repeated calls on the same
    /// input yield structurally equal output.
    ///
    /// Events need not arrive grouped or sorted; cases are partitioned by
    /// `case_id` and each case is stable-sorted by timestamp, so equal
    /// timestamps keep their input order.
    pub fn build(&self, events: &[ProcessEvent]) -> ProcessGraph {
        let mut acc = Accumulator::default();
        for mut case in partition_into_cases(events) {
            case.sort_by_key(|event| event.timestamp);
            acc.observe_case(&case);
        }

        let total_events = events.len();
        let nodes = acc
            .activity_order
            .iter()
            .map(|name| {
                let count = acc.activity_counts.get(name).copied().unwrap_or_default();
                let durations = acc
                    .activity_durations
                    .get(name)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let (avg_duration, total_duration) = duration_stats(durations);
                ProcessNode {
                    name: name.clone(),
                    count,
                    avg_duration,
                    total_duration,
                    percentage: count as f64 / total_events as f64 * 100.0,
                    kind: ActivityKind::classify(name),
                    is_bottleneck: avg_duration > self.node_bottleneck_hours,
                }
            })
            .collect();

        // One pooled distribution across every transition, not a
        // per-edge quantile.
        let mut pooled: Vec<f64> = acc.flow_durations.values().flatten().copied().collect();
        pooled.sort_by(f64::total_cmp);
        let q75 = quantile(&pooled, self.flow_quantile);
        let q90 = quantile(&pooled, self.severe_quantile);

        let flows = acc
            .flow_order
            .iter()
            .map(|key| {
                let count = acc.flow_counts.get(key).copied().unwrap_or_default();
                let durations = acc
                    .flow_durations
                    .get(key)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let (avg_duration, total_duration) = duration_stats(durations);
                ProcessFlow {
                    source: key.0.clone(),
                    target: key.1.clone(),
                    count,
                    avg_duration,
                    total_duration,
                    is_bottleneck: avg_duration > q75,
                    bottleneck_score: bottleneck_score(avg_duration, q75, q90),
                }
            })
            .collect();

        let graph = ProcessGraph { nodes, flows };
        debug!(
            nodes = graph.nodes.len(),
            flows = graph.flows.len(),
            q75,
            q90,
            "built process graph"
        );
        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Group events by case id, preserving first-appearance order of cases
/// and input order of events within each case.
fn partition_into_cases(events: &[ProcessEvent]) -> Vec<Vec<&ProcessEvent>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut cases: Vec<Vec<&ProcessEvent>> = Vec::new();
    for event in events {
        let ix = *index.entry(event.case_id.as_str()).or_insert_with(|| {
            cases.push(Vec::new());
            cases.len() - 1
        });
        cases[ix].push(event);
    }
    cases
}

fn duration_stats(durations: &[f64]) -> (f64, f64) {
    let total: f64 = durations.iter().sum();
    if durations.is_empty() {
        (0.0, total)
    } else {
        (total / durations.len() as f64, total)
    }
}

/// Per-build accumulation maps; constructed and discarded within a single
/// [`GraphBuilder::build`] call.
#[derive(Debug, Default)]
struct Accumulator {
    activity_order: Vec<String>,
    activity_counts: HashMap<String, u64>,
    activity_durations: HashMap<String, Vec<f64>>,
    flow_order: Vec<(String, String)>,
    flow_counts: HashMap<(String, String), u64>,
    flow_durations: HashMap<(String, String), Vec<f64>>,
}

impl Accumulator {
    /// Walk one timestamp-sorted case. Every event counts once for its
    /// activity; every consecutive pair contributes one transition count
    /// and one duration sample to both the transition and the SOURCE
    /// activity. The last event of a case therefore has no duration
    /// sample of its own.
    fn observe_case(&mut self, case: &[&ProcessEvent]) {
        for (index, event) in case.iter().enumerate() {
            self.count_activity(&event.activity);
            if let Some(next) = case.get(index + 1) {
                let hours = (next.timestamp - event.timestamp).num_milliseconds() as f64
                    / MILLIS_PER_HOUR;
                self.count_flow(&event.activity, &next.activity, hours);
            }
        }
    }

    fn count_activity(&mut self, activity: &str) {
        if !self.activity_counts.contains_key(activity) {
            self.activity_order.push(activity.to_owned());
        }
        *self.activity_counts.entry(activity.to_owned()).or_default() += 1;
    }

    fn count_flow(&mut self, source: &str, target: &str, hours: f64) {
        let key = (source.to_owned(), target.to_owned());
        if !self.flow_counts.contains_key(&key) {
            self.flow_order.push(key.clone());
        }
        *self.flow_counts.entry(key.clone()).or_default() += 1;
        self.flow_durations.entry(key).or_default().push(hours);
        self.activity_durations
            .entry(source.to_owned())
            .or_default()
            .push(hours);
    }
}

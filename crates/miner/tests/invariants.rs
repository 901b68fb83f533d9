#![forbid(unsafe_code)]

use chrono::DateTime;
use miner::{GraphBuilder, ProcessEvent};
use proptest::prelude::*;
use std::collections::HashSet;

/// Events drawn from small case/activity pools so that cases regularly
/// span several events and transitions repeat.
fn arbitrary_event() -> impl Strategy<Value = ProcessEvent> {
    (0u8..6, 0u8..8, 0i64..1_000_000).prop_map(|(case, activity, offset)| ProcessEvent {
        case_id: format!("INV{case:05}"),
        activity: format!("Activity {activity}"),
        timestamp: DateTime::from_timestamp(offset, 0).unwrap().naive_utc(),
        resource: "System".into(),
        amount: 100.0,
        vendor: "ABC Supplies".into(),
    })
}

proptest! {
    #[test]
    fn node_counts_sum_to_total_events(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let graph = GraphBuilder::default().build(&events);
        let total: u64 = graph.nodes.iter().map(|n| n.count).sum();
        prop_assert_eq!(total, events.len() as u64);
    }

    #[test]
    fn flow_counts_sum_to_events_minus_cases(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let graph = GraphBuilder::default().build(&events);
        let cases: HashSet<_> = events.iter().map(|e| e.case_id.as_str()).collect();
        let total: u64 = graph.flows.iter().map(|f| f.count).sum();
        prop_assert_eq!(total, (events.len() - cases.len()) as u64);
    }

    #[test]
    fn percentages_sum_to_one_hundred(events in prop::collection::vec(arbitrary_event(), 1..200)) {
        let graph = GraphBuilder::default().build(&events);
        let total: f64 = graph.nodes.iter().map(|n| n.percentage).sum();
        prop_assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn build_is_pure(events in prop::collection::vec(arbitrary_event(), 0..100)) {
        let builder = GraphBuilder::default();
        prop_assert_eq!(builder.build(&events), builder.build(&events));
    }

    #[test]
    fn durations_and_scores_stay_in_range(events in prop::collection::vec(arbitrary_event(), 0..200)) {
        let graph = GraphBuilder::default().build(&events);
        for flow in &graph.flows {
            prop_assert!(flow.avg_duration >= 0.0);
            prop_assert!((0.0..=100.0).contains(&flow.bottleneck_score));
        }
        for node in &graph.nodes {
            prop_assert!(node.avg_duration >= 0.0);
        }
    }
}

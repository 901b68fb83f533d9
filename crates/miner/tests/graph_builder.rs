#![forbid(unsafe_code)]

use chrono::NaiveDateTime;
use miner::{ActivityKind, GraphBuilder, ProcessEvent};
use pretty_assertions::assert_eq;

fn event(case_id: &str, activity: &str, timestamp: &str) -> ProcessEvent {
    ProcessEvent {
        case_id: case_id.into(),
        activity: activity.into(),
        timestamp: NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap(),
        resource: "System".into(),
        amount: 250.0,
        vendor: "ABC Supplies".into(),
    }
}

#[test]
fn two_step_case_yields_handoff_durations() {
    let events = vec![
        event("INV00001", "A", "2024-01-01 08:00:00"),
        event("INV00001", "B", "2024-01-01 10:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    assert_eq!(graph.nodes.len(), 2);
    let a = &graph.nodes[0];
    assert_eq!(a.name, "A");
    assert_eq!(a.count, 1);
    assert_eq!(a.avg_duration, 2.0);
    assert_eq!(a.total_duration, 2.0);
    // B ends its case, so it has no hand-off sample of its own
    let b = &graph.nodes[1];
    assert_eq!(b.name, "B");
    assert_eq!(b.count, 1);
    assert_eq!(b.avg_duration, 0.0);

    assert_eq!(graph.flows.len(), 1);
    let flow = &graph.flows[0];
    assert_eq!((flow.source.as_str(), flow.target.as_str()), ("A", "B"));
    assert_eq!(flow.count, 1);
    assert_eq!(flow.avg_duration, 2.0);
}

#[test]
fn empty_input_builds_empty_graph() {
    let graph = GraphBuilder::default().build(&[]);
    assert!(graph.nodes.is_empty());
    assert!(graph.flows.is_empty());
}

#[test]
fn repeated_transition_pools_samples() {
    // two cases both run A -> B, taking 1h and 3h
    let events = vec![
        event("INV00001", "A", "2024-01-01 08:00:00"),
        event("INV00001", "B", "2024-01-01 09:00:00"),
        event("INV00002", "A", "2024-01-02 08:00:00"),
        event("INV00002", "B", "2024-01-02 11:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    assert_eq!(graph.flows.len(), 1);
    let flow = &graph.flows[0];
    assert_eq!(flow.count, 2);
    assert_eq!(flow.avg_duration, 2.0);
    assert_eq!(flow.total_duration, 4.0);
}

#[test]
fn builder_sorts_within_cases_and_ignores_interleaving() {
    // events arrive interleaved across cases and out of time order
    let events = vec![
        event("INV00002", "B", "2024-01-01 12:00:00"),
        event("INV00001", "B", "2024-01-01 10:00:00"),
        event("INV00001", "A", "2024-01-01 08:00:00"),
        event("INV00002", "A", "2024-01-01 09:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    assert_eq!(graph.flows.len(), 1);
    assert_eq!(graph.flows[0].count, 2);
    // samples of 2h and 3h
    assert_eq!(graph.flows[0].avg_duration, 2.5);
}

#[test]
fn equal_timestamps_keep_input_order() {
    let events = vec![
        event("INV00001", "A", "2024-01-01 08:00:00"),
        event("INV00001", "B", "2024-01-01 08:00:00"),
        event("INV00001", "C", "2024-01-01 08:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    let transitions: Vec<_> = graph
        .flows
        .iter()
        .map(|f| (f.source.as_str(), f.target.as_str()))
        .collect();
    assert_eq!(transitions, vec![("A", "B"), ("B", "C")]);
    assert!(graph.flows.iter().all(|f| f.avg_duration == 0.0));
}

#[test]
fn singleton_case_contributes_count_but_no_flow() {
    let events = vec![event("INV00001", "Invoice Received", "2024-01-01 08:00:00")];
    let graph = GraphBuilder::default().build(&events);

    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].count, 1);
    assert_eq!(graph.nodes[0].percentage, 100.0);
    assert!(graph.flows.is_empty());
}

#[test]
fn node_kinds_follow_activity_names() {
    let events = vec![
        event("INV00001", "Invoice Received", "2024-01-01 08:00:00"),
        event("INV00001", "Manager Review", "2024-01-01 09:00:00"),
        event("INV00001", "Rejected - Duplicate Invoice", "2024-01-01 10:00:00"),
        event("INV00001", "Invoice Cancelled", "2024-01-01 11:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    let kinds: Vec<_> = graph
        .nodes
        .iter()
        .map(|n| (n.name.as_str(), n.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("Invoice Received", ActivityKind::Start),
            ("Manager Review", ActivityKind::Approval),
            ("Rejected - Duplicate Invoice", ActivityKind::Rejection),
            ("Invoice Cancelled", ActivityKind::End),
        ]
    );
}

#[test]
fn flow_sitting_on_the_quantile_is_not_a_bottleneck() {
    // every transition takes exactly 2h, so each avg equals the pooled q75
    let events = vec![
        event("INV00001", "A", "2024-01-01 08:00:00"),
        event("INV00001", "B", "2024-01-01 10:00:00"),
        event("INV00002", "B", "2024-01-02 08:00:00"),
        event("INV00002", "C", "2024-01-02 10:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    assert_eq!(graph.flows.len(), 2);
    for flow in &graph.flows {
        assert!(!flow.is_bottleneck);
        assert_eq!(flow.bottleneck_score, 75.0);
    }
}

#[test]
fn slow_transition_is_flagged_against_the_pool() {
    // twenty fast hand-offs and one ten-hour outlier
    let mut events = Vec::new();
    for case in 0..20 {
        let case_id = format!("INV{case:05}");
        events.push(event(&case_id, "A", "2024-01-01 08:00:00"));
        events.push(event(&case_id, "B", "2024-01-01 09:00:00"));
    }
    events.push(event("INV90000", "B", "2024-01-01 08:00:00"));
    events.push(event("INV90000", "C", "2024-01-01 18:00:00"));

    let graph = GraphBuilder::default().build(&events);

    let slow = graph.flows.iter().find(|f| f.target == "C").unwrap();
    assert!(slow.is_bottleneck);
    assert_eq!(slow.bottleneck_score, 100.0);

    let fast = graph.flows.iter().find(|f| f.target == "B").unwrap();
    assert!(!fast.is_bottleneck);
}

#[test]
fn slow_node_uses_the_absolute_threshold() {
    // A hands off after 4h (above the 3h default), B after 1h
    let events = vec![
        event("INV00001", "A", "2024-01-01 08:00:00"),
        event("INV00001", "B", "2024-01-01 12:00:00"),
        event("INV00001", "C", "2024-01-01 13:00:00"),
    ];
    let graph = GraphBuilder::default().build(&events);

    let a = graph.nodes.iter().find(|n| n.name == "A").unwrap();
    assert!(a.is_bottleneck);
    let b = graph.nodes.iter().find(|n| n.name == "B").unwrap();
    assert!(!b.is_bottleneck);
}

#[test]
fn build_is_idempotent() {
    let events = vec![
        event("INV00001", "Invoice Received", "2024-01-01 08:00:00"),
        event("INV00001", "Manual Data Entry", "2024-01-01 08:45:00"),
        event("INV00001", "Payment Processed", "2024-01-02 09:00:00"),
        event("INV00002", "Invoice Received", "2024-01-03 08:00:00"),
    ];
    let builder = GraphBuilder::default();
    assert_eq!(builder.build(&events), builder.build(&events));
}

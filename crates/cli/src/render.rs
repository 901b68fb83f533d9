use anyhow::Result;
use miner::{LogSummary, ProcessGraph, Recommendation};
use serde_json::json;
use std::io::{self, Write};

pub(crate) fn graph_text(summary: &LogSummary, graph: &ProcessGraph) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "events: {}  cases: {}  activities: {}  rejections: {}",
        summary.total_events, summary.cases, summary.activities, summary.rejections
    )?;

    writeln!(out)?;
    writeln!(
        out,
        "{:<40} {:>7} {:>7} {:>9} {:>10}  kind",
        "activity", "count", "pct", "avg(h)", "total(h)"
    )?;
    for node in &graph.nodes {
        writeln!(
            out,
            "{:<40} {:>7} {:>6.1}% {:>9.2} {:>10.2}  {}{}",
            node.name,
            node.count,
            node.percentage,
            node.avg_duration,
            node.total_duration,
            node.kind,
            if node.is_bottleneck { "  [bottleneck]" } else { "" }
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{:<60} {:>7} {:>9} {:>7}",
        "transition", "count", "avg(h)", "score"
    )?;
    for flow in &graph.flows {
        writeln!(
            out,
            "{:<60} {:>7} {:>9.2} {:>7.1}{}",
            format!("{} -> {}", flow.source, flow.target),
            flow.count,
            flow.avg_duration,
            flow.bottleneck_score,
            if flow.is_bottleneck { "  [bottleneck]" } else { "" }
        )?;
    }
    Ok(())
}

pub(crate) fn graph_json(summary: &LogSummary, graph: &ProcessGraph) -> Result<()> {
    let report = json!({
        "summary": summary,
        "nodes": graph.nodes,
        "flows": graph.flows,
    });
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn recommendations_text(recommendations: &[Recommendation]) -> Result<()> {
    let mut out = io::stdout().lock();
    for (index, rec) in recommendations.iter().enumerate() {
        writeln!(
            out,
            "{}. {} [{} impact, saves {}]",
            index + 1,
            rec.title,
            rec.impact,
            rec.time_saved
        )?;
        writeln!(out, "   {}", rec.description)?;
        writeln!(out, "   affects: {}", rec.affected_activities.join(", "))?;
        writeln!(out, "   how: {}", rec.implementation)?;
        writeln!(out)?;
    }
    Ok(())
}

pub(crate) fn recommendations_json(recommendations: &[Recommendation]) -> Result<()> {
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, recommendations)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn raw(text: &str) -> Result<()> {
    io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}

mod cli;
mod render;

use anyhow::Context as _;
use clap::Parser;
use cli::{Cli, Command};
use config::Config;
use miner::{DemoLog, GraphBuilder, LogSummary};
use std::fs;
use std::path::Path;
use tracing::debug;
use tracing_log::AsTrace;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.log_level_filter().as_trace())
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli);

    let config = match &cli.conffile {
        Some(path) => Config::load(path)?,
        _ => Config::new(),
    };

    match cli.command {
        Command::Analyze { logfile, json } => {
            let events = read_events(&logfile)?;
            let summary = LogSummary::from_events(&events);
            let graph = GraphBuilder::new(&config).build(&events);
            if json {
                render::graph_json(&summary, &graph)?;
            } else {
                render::graph_text(&summary, &graph)?;
            }
        }
        Command::Recommend { logfile, json } => {
            let events = read_events(&logfile)?;
            let recommendations = miner::recommend(&events);
            if json {
                render::recommendations_json(&recommendations)?;
            } else {
                render::recommendations_text(&recommendations)?;
            }
        }
        Command::Generate { output } => {
            let log = DemoLog::new(&config).generate();
            match output {
                Some(path) => fs::write(&path, log)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => render::raw(&log)?,
            }
        }
    }

    Ok(())
}

fn read_events(logfile: &Path) -> anyhow::Result<Vec<miner::ProcessEvent>> {
    let text = fs::read_to_string(logfile)
        .with_context(|| format!("failed to read {}", logfile.display()))?;
    let events = miner::parse_log(&text)?;
    Ok(events)
}

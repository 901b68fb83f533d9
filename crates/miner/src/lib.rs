#![forbid(unsafe_code)]

//! Event-log process mining: parse a delimited event log, derive a
//! directed process graph with duration statistics and bottleneck
//! scores, and evaluate canned automation recommendations against it.

pub mod domain;
mod error;
pub mod graph;
pub mod log;
pub mod recommend;

pub use domain::{ActivityKind, LogSummary, ProcessEvent, ProcessFlow, ProcessGraph, ProcessNode};
pub use error::Error;
pub use graph::GraphBuilder;
pub use log::{DemoLog, parse_log};
pub use recommend::{Impact, Recommendation, recommend};

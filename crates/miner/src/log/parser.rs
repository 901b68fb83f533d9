#![forbid(unsafe_code)]

use crate::domain::ProcessEvent;
use crate::error::Error;
use chrono::NaiveDateTime;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a comma-separated event log into events, preserving line order.
///
/// The first line is a header (`Case ID,Activity,Timestamp,Resource,
/// Amount,Vendor`); every following line is one event. A malformed row,
/// timestamp or amount aborts the whole parse with the offending line
/// number, so a partial event list never reaches the graph statistics.
/// Header-only or empty input yields an empty event list.
pub fn parse_log(text: &str) -> Result<Vec<ProcessEvent>, Error> {
    let mut reader = csv::ReaderBuilder::new().from_reader(text.as_bytes());
    let mut events = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let field = |index: usize, name: &'static str| {
            record
                .get(index)
                .ok_or(Error::MissingField { line, field: name })
        };

        let raw_timestamp = field(2, "Timestamp")?;
        let timestamp = NaiveDateTime::parse_from_str(raw_timestamp, TIMESTAMP_FORMAT).map_err(
            |source| Error::Timestamp {
                line,
                value: raw_timestamp.to_owned(),
                source,
            },
        )?;

        let raw_amount = field(4, "Amount")?;
        let amount = raw_amount.parse().map_err(|source| Error::Amount {
            line,
            value: raw_amount.to_owned(),
            source,
        })?;

        events.push(ProcessEvent {
            case_id: field(0, "Case ID")?.to_owned(),
            activity: field(1, "Activity")?.to_owned(),
            timestamp,
            resource: field(3, "Resource")?.to_owned(),
            amount,
            vendor: field(5, "Vendor")?.to_owned(),
        });
    }

    debug!(events = events.len(), "parsed event log");
    Ok(events)
}

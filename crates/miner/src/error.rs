#![forbid(unsafe_code)]

/// Errors raised while parsing an event log.
///
/// Graph building and recommendation generation are total and never fail;
/// a malformed log aborts the whole parse instead of yielding a partial
/// event list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed row: {0}")]
    Row(#[from] csv::Error),

    #[error("line {line}: missing field `{field}`")]
    MissingField { line: u64, field: &'static str },

    #[error("line {line}: invalid timestamp `{value}`: {source}")]
    Timestamp {
        line: u64,
        value: String,
        source: chrono::ParseError,
    },

    #[error("line {line}: invalid amount `{value}`: {source}")]
    Amount {
        line: u64,
        value: String,
        source: std::num::ParseFloatError,
    },
}

#![forbid(unsafe_code)]

mod rules;
mod types;

pub use rules::recommend;
pub use types::{Impact, Recommendation};

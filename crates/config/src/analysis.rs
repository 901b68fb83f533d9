#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Analysis {
    /// Absolute threshold in hours above which an activity is a bottleneck.
    pub node_bottleneck_hours: f64,

    /// Pooled-duration quantile a transition must exceed to be a bottleneck.
    pub flow_quantile: f64,

    /// Upper quantile of the pooled durations used for severe scoring.
    pub severe_quantile: f64,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            node_bottleneck_hours: 3.0,
            flow_quantile: 0.75,
            severe_quantile: 0.90,
        }
    }
}

impl Analysis {
    /// Clamp quantiles into [0, 1] and keep them ordered.
    pub fn clamp(self) -> Self {
        let flow_quantile = self.flow_quantile.clamp(0.0, 1.0);
        let severe_quantile = self.severe_quantile.clamp(flow_quantile, 1.0);
        Self {
            node_bottleneck_hours: self.node_bottleneck_hours.max(0.0),
            flow_quantile,
            severe_quantile,
        }
    }
}

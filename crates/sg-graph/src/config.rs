//! Synthesis configuration.

use serde::{Deserialize, Serialize};
use sg_core::SgResult;

use crate::edges::EdgeConfig;
use crate::stops::StopConfig;

/// All tunable thresholds of a synthesis run.
///
/// Missing fields take their defaults when deserialized, so an empty document
/// is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    pub stops: StopConfig,
    pub edges: EdgeConfig,
}

impl SynthConfig {
    pub fn validate(&self) -> SgResult<()> {
        self.stops.validate()?;
        self.edges.validate()
    }
}

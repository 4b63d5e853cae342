use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Bumped whenever `TrailEngine`'s persisted shape changes. Readers must
/// discard mismatched snapshots and start a fresh round; there is no partial
/// restore.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned wrapper around the engine's full serializable state. This is the
/// whole interface handed to the persistence collaborator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    version: u32,
    engine: TrailEngine,
}

impl RoundSnapshot {
    pub fn capture(engine: &TrailEngine) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            engine: engine.clone(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Unwraps the engine, refusing snapshots written by any other version.
    pub fn restore(self) -> Result<TrailEngine> {
        if self.version != SNAPSHOT_VERSION {
            log::warn!(
                "discarding snapshot version {} (expected {})",
                self.version,
                SNAPSHOT_VERSION
            );
            return Err(GameError::UnsupportedSnapshotVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(self.engine)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|_| GameError::MalformedSnapshot)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|_| GameError::MalformedSnapshot)
    }
}

//! Transient advisory shown after a rejected duplicate commit.

use std::time::Duration;

/// How long an advisory stays visible.
pub const ADVISORY_TTL: Duration = Duration::from_millis(2000);

/// A user-facing advisory. `generation` identifies which expiry timer may
/// clear it; a timer for an older generation is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub message: String,
    pub generation: u64,
}

impl Advisory {
    pub fn duplicate(tag: &str, generation: u64) -> Self {
        Self {
            message: format!("\"{tag}\" is already added"),
            generation,
        }
    }
}

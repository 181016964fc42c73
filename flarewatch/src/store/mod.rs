//! Durable alert state.
//!
//! Everything the monitor needs across invocations lives in one record
//! so a single atomic write commits a whole phase transition. Nothing
//! is kept in process memory between runs.

mod file;

pub use file::FileStateStore;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::alert::AlertPhase;
use crate::error::Result;

/// The record shared by all invocations.
///
/// `episode_start` is meaningful only while `phase` is `Active`. If a
/// store ever reports `Active` without a start time, the episode
/// duration is reported as unknown rather than treated as an error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub phase: AlertPhase,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub episode_start: Option<OffsetDateTime>,
}

impl PersistedState {
    pub fn active(since: OffsetDateTime) -> Self {
        PersistedState {
            phase: AlertPhase::Active,
            episode_start: Some(since),
        }
    }

    pub fn normal() -> Self {
        PersistedState::default()
    }
}

/// Backend holding the last committed alert state.
///
/// Overlapping invocations racing load-then-save are an operational
/// concern (serialize the scheduler); implementations do not lock.
pub trait StateStore {
    /// The last committed state. Fail-open: a missing, unreadable, or
    /// unparsable record yields the default rather than an error, so a
    /// broken store can never wedge the monitor in a stale phase.
    fn load(&self) -> PersistedState;

    /// Durably commit. Must be atomic enough that a crash mid-write
    /// cannot leave a partial record observable by the next load.
    fn save(&self, state: &PersistedState) -> Result<()>;
}

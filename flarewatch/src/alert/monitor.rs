//! The threshold-crossing monitor.
//!
//! One call per scheduled invocation: classify the reading, look at the
//! last committed phase, and raise or clear the alert on the paging
//! network. The phase is committed only after delivery is confirmed, so
//! a failed send leaves the store describing reality as last
//! successfully communicated and the next invocation simply retries the
//! same transition. All cross-invocation state is durable; nothing
//! survives in memory.

use time::OffsetDateTime;

use crate::error::Result;
use crate::notify::NotificationSink;
use crate::source::ReadingSource;
use crate::store::{PersistedState, StateStore};
use crate::tracing::prelude::*;
use crate::types::XrayReading;

use super::duration::format_duration;
use super::state::{AlertPhase, Transition};

/// Rendered when the store says `Active` but carries no start time.
const UNKNOWN_DURATION: &str = "duree inconnue";

/// Result of one poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// No reading was available; nothing was read or written.
    Skipped,
    /// The reading stayed on the committed side of the threshold.
    Unchanged(AlertPhase),
    /// Start alert delivered, `Active` committed.
    Raised,
    /// End alert delivered, `Normal` committed. Duration is `None` when
    /// the episode start was missing from the store.
    Cleared { duration_secs: Option<u64> },
    /// Delivery failed; the committed phase is untouched and the same
    /// transition will be retried next cycle.
    DeliveryFailed(AlertPhase),
}

/// Core orchestrator: decide-act-persist, in that order.
pub struct AlertMonitor<S, N> {
    store: S,
    sink: N,
    threshold: XrayReading,
}

impl<S: StateStore, N: NotificationSink> AlertMonitor<S, N> {
    pub fn new(store: S, sink: N, threshold: XrayReading) -> Self {
        AlertMonitor {
            store,
            sink,
            threshold,
        }
    }

    /// Run one complete cycle from a reading source.
    ///
    /// A fetch failure skips the cycle entirely; the store is not even
    /// read.
    pub async fn poll<R: ReadingSource>(&mut self, source: &R) -> Result<CycleOutcome> {
        match source.fetch().await {
            Some(reading) => self.run_cycle(&reading).await,
            None => {
                warn!("no x-ray reading available; skipping this cycle");
                Ok(CycleOutcome::Skipped)
            }
        }
    }

    /// Run one cycle against an already-fetched reading.
    pub async fn run_cycle(&mut self, reading: &XrayReading) -> Result<CycleOutcome> {
        self.run_cycle_at(reading, OffsetDateTime::now_utc()).await
    }

    /// Clock seam for deterministic tests; `run_cycle` passes wall time.
    pub async fn run_cycle_at(
        &mut self,
        reading: &XrayReading,
        now: OffsetDateTime,
    ) -> Result<CycleOutcome> {
        if !reading.class.is_known() {
            // Distinct from the plain below-threshold case so operators
            // can tell "truly low" from "unparsable class".
            warn!("unrecognized x-ray class in {reading}; treating as negligible flux");
        }

        let above = reading.is_above(&self.threshold);
        let state = self.store.load();

        match Transition::decide(state.phase, above) {
            Transition::Raise => self.raise(reading, now).await,
            Transition::Clear => self.clear(reading, &state, now).await,
            Transition::Hold => {
                debug!("no phase change ({:?}, above={above})", state.phase);
                Ok(CycleOutcome::Unchanged(state.phase))
            }
        }
    }

    async fn raise(&mut self, reading: &XrayReading, now: OffsetDateTime) -> Result<CycleOutcome> {
        info!("solar storm detected: {reading} >= {}", self.threshold);
        let text = format!(
            "ALERTE XRAY : {reading} (seuil {})  DEBUT ORAGE SOLAIRE",
            self.threshold
        );

        match self.sink.send(&text, true).await {
            Ok(()) => {
                self.store.save(&PersistedState::active(now))?;
                Ok(CycleOutcome::Raised)
            }
            Err(err) => {
                warn!("start alert not delivered, staying in normal phase: {err}");
                Ok(CycleOutcome::DeliveryFailed(AlertPhase::Normal))
            }
        }
    }

    async fn clear(
        &mut self,
        reading: &XrayReading,
        state: &PersistedState,
        now: OffsetDateTime,
    ) -> Result<CycleOutcome> {
        let duration_secs = state
            .episode_start
            .map(|start| (now - start).whole_seconds().max(0) as u64);
        let duration_text = match duration_secs {
            Some(secs) => format_duration(secs),
            None => UNKNOWN_DURATION.to_string(),
        };

        info!("solar storm over after {duration_text} (reading {reading})");
        let text = format!("FIN ORAGE SOLAIRE  XRAY : {reading}  Duree : {duration_text}");

        match self.sink.send(&text, false).await {
            Ok(()) => {
                self.store.save(&PersistedState::normal())?;
                Ok(CycleOutcome::Cleared { duration_secs })
            }
            Err(err) => {
                warn!("end alert not delivered, staying in active phase: {err}");
                Ok(CycleOutcome::DeliveryFailed(AlertPhase::Active))
            }
        }
    }
}

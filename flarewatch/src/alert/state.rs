use serde::{Deserialize, Serialize};

/// Alert phase, durable across invocations.
///
/// Serialized as the state-file tokens `"ok"` and `"alert"`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertPhase {
    #[default]
    #[serde(rename = "ok")]
    Normal,
    #[serde(rename = "alert")]
    Active,
}

/// What a poll cycle should do, decided from the last committed phase
/// and the threshold test. Pure edge detection, no hysteresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Crossed up out of `Normal`: send the start alert.
    Raise,
    /// Dropped below while `Active`: send the end alert with duration.
    Clear,
    /// No edge. Already-active readings do not re-notify or restart the
    /// episode clock.
    Hold,
}

impl Transition {
    /// | previous phase | above | result |
    /// |----------------|-------|--------|
    /// | Normal | true  | `Raise` |
    /// | Active | false | `Clear` |
    /// | Normal | false | `Hold` |
    /// | Active | true  | `Hold` |
    pub fn decide(previous: AlertPhase, above: bool) -> Self {
        match (previous, above) {
            (AlertPhase::Normal, true) => Transition::Raise,
            (AlertPhase::Active, false) => Transition::Clear,
            (AlertPhase::Normal, false) | (AlertPhase::Active, true) => Transition::Hold,
        }
    }
}

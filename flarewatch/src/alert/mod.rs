mod duration;
mod monitor;
mod state;

pub use duration::format_duration;
pub use monitor::{AlertMonitor, CycleOutcome};
pub use state::{AlertPhase, Transition};

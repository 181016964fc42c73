//! Solar X-ray flare alerting over the DAPNET paging network.
//!
//! Polls the HamQSL solar XML feed and pages configured callsigns when
//! the X-ray flux crosses a threshold, then again when the storm ends,
//! with the episode duration. Designed to be run by a scheduler (cron,
//! systemd timer): each invocation is one complete, idempotent
//! poll-decide-act-persist cycle, and all state that must survive
//! between runs lives in a durable store.

pub mod alert;
pub mod bulletin;
pub mod config;
pub mod error;
pub mod notify;
pub mod source;
pub mod store;
pub mod tracing;
pub mod types;

pub use error::{Error, Result};

//! Crate-wide error taxonomy.
//!
//! None of these abort a run once configuration is validated; every
//! failure degrades to "retry on the next scheduled cycle".

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The solar feed could not be fetched or did not contain a usable
    /// X-ray value. The cycle is skipped without touching state.
    #[error("solar feed unavailable: {0}")]
    SourceUnavailable(String),

    /// A string that should have been `<class letter><magnitude>` was
    /// not parseable as a reading.
    #[error("malformed x-ray reading: {0:?}")]
    MalformedReading(String),

    /// Writing the alert state record failed. Reads never produce this;
    /// they fail open to the default state.
    #[error("state persistence failed: {0}")]
    Persistence(#[from] std::io::Error),

    /// DAPNET did not confirm delivery. The pending phase transition is
    /// not committed and will be retried next cycle.
    #[error("DAPNET delivery failed: {0}")]
    Delivery(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

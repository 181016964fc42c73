mod hamqsl;

pub use hamqsl::{DEFAULT_FEED_URL, HamQslSource, SolarData};

use async_trait::async_trait;

use crate::types::XrayReading;

/// Source of the current X-ray flux reading.
///
/// `None` covers every failure mode (network, HTTP status, XML shape,
/// unparsable value); the caller skips the cycle without touching any
/// persisted state.
#[async_trait]
pub trait ReadingSource {
    async fn fetch(&self) -> Option<XrayReading>;
}

mod dapnet;

pub use dapnet::{DEFAULT_CALLS_URL, DapnetSink};

use async_trait::async_trait;

use crate::error::Result;

/// Delivers pager messages.
///
/// An error means nothing reached the network as far as the caller can
/// tell; the monitor treats it as "no state change" and retries the
/// same transition next cycle. Partial delivery is never assumed.
#[async_trait]
pub trait NotificationSink {
    async fn send(&self, text: &str, emergency: bool) -> Result<()>;
}

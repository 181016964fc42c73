//! HamQSL solar XML feed client.
//!
//! The feed (<https://www.hamqsl.com/solarxml.php>) publishes one
//! `<solar><solardata>...</solardata></solar>` document with the
//! current propagation numbers. The X-ray flux arrives as a classified
//! string like `M1.2`.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::tracing::prelude::*;
use crate::types::XrayReading;

use super::ReadingSource;

pub const DEFAULT_FEED_URL: &str = "https://www.hamqsl.com/solarxml.php";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "flarewatch/0.1 (+solar alert bot)";

#[derive(Debug, Deserialize)]
struct SolarFeed {
    solardata: SolarData,
}

/// The solardata fields we consume. Values come with surrounding
/// whitespace in the feed; trim on use.
#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolarData {
    pub solarflux: String,
    pub sunspots: String,
    pub aindex: String,
    pub kindex: String,
    pub xray: String,
    pub signalnoise: String,
    pub geomagfield: String,
}

/// Parse a feed document into its solardata block.
pub fn parse_feed(xml: &str) -> Result<SolarData> {
    let feed: SolarFeed = quick_xml::de::from_str(xml)
        .map_err(|err| Error::SourceUnavailable(format!("bad feed XML: {err}")))?;
    Ok(feed.solardata)
}

/// Extract the classified X-ray reading from a solardata block.
pub fn reading_from(data: &SolarData) -> Option<XrayReading> {
    let raw = data.xray.trim();
    if raw.is_empty() {
        warn!("feed has no x-ray value");
        return None;
    }
    match raw.parse() {
        Ok(reading) => Some(reading),
        Err(err) => {
            warn!("unusable x-ray value {raw:?}: {err}");
            None
        }
    }
}

/// Fetches solar data over HTTP.
pub struct HamQslSource {
    client: reqwest::Client,
    url: String,
}

impl HamQslSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(HamQslSource {
            client,
            url: url.into(),
        })
    }

    /// Fetch and parse the whole solardata block (the bulletin needs
    /// more than the X-ray field).
    pub async fn fetch_solar_data(&self) -> Result<SolarData> {
        let response = self.client.get(&self.url).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        parse_feed(&body)
    }
}

#[async_trait]
impl ReadingSource for HamQslSource {
    async fn fetch(&self) -> Option<XrayReading> {
        match self.fetch_solar_data().await {
            Ok(data) => reading_from(&data),
            Err(err) => {
                warn!("could not fetch solar feed: {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::types::XrayClass;

    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<solar>
  <solardata>
    <source url="http://www.hamqsl.com/solar.html">N0NBH</source>
    <updated>10 Nov 2025 1430 GMT</updated>
    <solarflux>142</solarflux>
    <aindex>8</aindex>
    <kindex>2</kindex>
    <sunspots>96</sunspots>
    <xray> M1.2 </xray>
    <heliumline>141.2</heliumline>
    <signalnoise>S1-S2</signalnoise>
    <geomagfield>QUIET</geomagfield>
  </solardata>
</solar>"#;

    #[test]
    fn parses_feed_document() {
        let data = parse_feed(SAMPLE).unwrap();
        assert_eq!(data.solarflux, "142");
        assert_eq!(data.sunspots, "96");
        assert_eq!(data.xray.trim(), "M1.2");
        assert_eq!(data.geomagfield, "QUIET");
    }

    #[test]
    fn extracts_trimmed_reading() {
        let data = parse_feed(SAMPLE).unwrap();
        let reading = reading_from(&data).unwrap();
        assert_eq!(reading.class, XrayClass::M);
        assert_eq!(reading.magnitude, 1.2);
    }

    #[test]
    fn missing_xray_tag_yields_none() {
        let data = parse_feed("<solar><solardata><kindex>2</kindex></solardata></solar>").unwrap();
        assert_eq!(data.xray, "");
        assert!(reading_from(&data).is_none());
    }

    #[test]
    fn unparsable_xray_yields_none() {
        let data = SolarData {
            xray: "M..".to_string(),
            ..SolarData::default()
        };
        assert!(reading_from(&data).is_none());
    }

    #[test]
    fn garbage_document_is_an_error() {
        assert!(parse_feed("this is not xml <<<").is_err());
    }
}

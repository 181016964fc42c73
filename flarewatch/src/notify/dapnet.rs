//! DAPNET (hampager.de) paging client.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::tracing::prelude::*;

use super::NotificationSink;

pub const DEFAULT_CALLS_URL: &str = "https://hampager.de/api/calls";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of a DAPNET call, field names per their REST API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CallRequest<'a> {
    text: &'a str,
    call_sign_names: &'a [String],
    transmitter_group_names: &'a [String],
    emergency: bool,
}

/// Sends pages through the DAPNET calls endpoint with HTTP basic auth.
///
/// No retry here: a failed call surfaces as [`Error::Delivery`] and the
/// next scheduled cycle repeats the attempt.
pub struct DapnetSink {
    client: reqwest::Client,
    url: String,
    user: String,
    password: String,
    callsigns: Vec<String>,
    transmitter_groups: Vec<String>,
}

impl DapnetSink {
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        callsigns: Vec<String>,
        transmitter_group: impl Into<String>,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(DapnetSink {
            client,
            url: url.into(),
            user: user.into(),
            password: password.into(),
            callsigns,
            transmitter_groups: vec![transmitter_group.into()],
        })
    }
}

#[async_trait]
impl NotificationSink for DapnetSink {
    async fn send(&self, text: &str, emergency: bool) -> Result<()> {
        let request = CallRequest {
            text,
            call_sign_names: &self.callsigns,
            transmitter_group_names: &self.transmitter_groups,
            emergency,
        };

        let response = self
            .client
            .post(&self.url)
            .basic_auth(&self.user, Some(&self.password))
            .json(&request)
            .send()
            .await
            .map_err(|err| Error::Delivery(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Delivery(format!("HTTP {status}: {body}")));
        }

        info!("DAPNET accepted message ({status}): {text:?}");
        Ok(())
    }
}

use serde::Deserialize;
use thiserror::Error;

use crate::payload::Payload;
use crate::verify::DEFAULT_FETCH_TIMEOUT;

/// Why a confirmation call failed. Separate from verification: no trust
/// decision is made here, trust was established upstream.
#[derive(Debug, Error)]
pub enum ConfirmError {
    #[error("payload does not have a {0} URL")]
    MissingUrl(&'static str),
    #[error("confirmation request failed: {0}")]
    Transport(String),
    #[error("confirmation response could not be parsed: {0}")]
    MalformedResponse(#[from] quick_xml::DeError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ConfirmSubscriptionResult {
    #[serde(rename = "SubscriptionArn")]
    subscription_arn: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ResponseMetadata {
    #[serde(rename = "RequestId")]
    request_id: String,
}

/// XML reply from accessing a SubscribeURL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConfirmSubscriptionResponse {
    #[serde(rename = "ConfirmSubscriptionResult")]
    result: ConfirmSubscriptionResult,
    #[serde(rename = "ResponseMetadata")]
    metadata: ResponseMetadata,
}

impl ConfirmSubscriptionResponse {
    pub fn subscription_arn(&self) -> &str {
        &self.result.subscription_arn
    }

    pub fn request_id(&self) -> &str {
        &self.metadata.request_id
    }
}

/// XML reply from accessing an UnsubscribeURL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UnsubscribeResponse {
    #[serde(rename = "ResponseMetadata")]
    metadata: ResponseMetadata,
}

impl UnsubscribeResponse {
    pub fn request_id(&self) -> &str {
        &self.metadata.request_id
    }
}

impl Payload {
    /// Confirms the subscription through the payload's SubscribeURL.
    ///
    /// The URL is an attacker-controllable field in an unverified payload:
    /// call this only after [`Payload::verify`] has succeeded.
    pub fn subscribe(&self) -> Result<ConfirmSubscriptionResponse, ConfirmError> {
        if self.subscribe_url.is_empty() {
            return Err(ConfirmError::MissingUrl("subscribe"));
        }
        let body = get_text(&self.subscribe_url)?;
        Ok(quick_xml::de::from_str(&body)?)
    }

    /// Cancels the subscription through the payload's UnsubscribeURL.
    ///
    /// Same caveat as [`Payload::subscribe`]: verify first.
    pub fn unsubscribe(&self) -> Result<UnsubscribeResponse, ConfirmError> {
        if self.unsubscribe_url.is_empty() {
            return Err(ConfirmError::MissingUrl("unsubscribe"));
        }
        let body = get_text(&self.unsubscribe_url)?;
        Ok(quick_xml::de::from_str(&body)?)
    }
}

fn get_text(url: &str) -> Result<String, ConfirmError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DEFAULT_FETCH_TIMEOUT)
        .build()
        .map_err(|e| ConfirmError::Transport(e.to_string()))?;
    let response = client
        .get(url)
        .send()
        .map_err(|e| ConfirmError::Transport(e.to_string()))?;
    if !response.status().is_success() {
        return Err(ConfirmError::Transport(format!(
            "HTTP {}",
            response.status()
        )));
    }
    response
        .text()
        .map_err(|e| ConfirmError::Transport(e.to_string()))
}

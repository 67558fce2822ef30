use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Timestamp;

/// The `mail` object common to every SES notification type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mail {
    pub timestamp: Timestamp,
    pub source: String,
    pub source_arn: String,
    pub source_ip: String,
    pub caller_identity: String,
    pub sending_account_id: String,
    pub message_id: String,
    pub destination: Vec<String>,
    #[serde(default)]
    pub headers_truncated: bool,
    #[serde(default)]
    pub headers: Vec<MailHeader>,
    #[serde(default)]
    pub common_headers: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MailHeader {
    pub name: String,
    pub value: String,
}

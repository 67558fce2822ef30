use serde::{Deserialize, Serialize};

use crate::util::Canonicalize;
use crate::verify::SignatureAlgorithm;

/// A single POST from SNS, with field names as they appear on the wire.
///
/// All fields are optional on the wire; a missing field deserializes to the
/// empty string and is indistinguishable from a present-but-empty one, which
/// is exactly how the signer treats it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Payload {
    pub message: String,
    pub message_id: String,
    pub signature: String,
    pub signature_version: String,
    #[serde(rename = "SigningCertURL")]
    pub signing_cert_url: String,
    #[serde(rename = "SubscribeURL")]
    pub subscribe_url: String,
    pub subject: String,
    pub timestamp: String,
    pub token: String,
    pub topic_arn: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "UnsubscribeURL")]
    pub unsubscribe_url: String,
}

impl Payload {
    /// The signable fields, in the order the origin signs them.
    ///
    /// This order is the verification contract: changing it diverges from
    /// genuine signatures.
    fn signable_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("Message", self.message.as_str()),
            ("MessageId", self.message_id.as_str()),
            ("Subject", self.subject.as_str()),
            ("SubscribeURL", self.subscribe_url.as_str()),
            ("Timestamp", self.timestamp.as_str()),
            ("Token", self.token.as_str()),
            ("TopicArn", self.topic_arn.as_str()),
            ("Type", self.kind.as_str()),
        ]
    }

    /// The algorithm the origin used, selected from the version tag.
    pub fn signature_algorithm(&self) -> SignatureAlgorithm {
        SignatureAlgorithm::from_version(&self.signature_version)
    }
}

impl Canonicalize for Payload {
    fn canonicalize(&self) -> Vec<u8> {
        let mut data = Vec::new();
        for (name, value) in self.signable_fields() {
            if value.is_empty() {
                continue;
            }
            data.extend_from_slice(name.as_bytes());
            data.push(b'\n');
            data.extend_from_slice(value.as_bytes());
            data.push(b'\n');
        }
        data
    }
}

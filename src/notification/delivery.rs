use serde::{Deserialize, Serialize};

use super::{Mail, Timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNotification {
    pub notification_type: String,
    pub delivery: Delivery,
    pub mail: Mail,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub timestamp: Timestamp,
    pub processing_time_millis: i32,
    pub recipients: Vec<String>,
    pub smtp_response: String,
    #[serde(rename = "reportingMTA")]
    pub reporting_mta: String,
    pub remote_mta_ip: String,
}

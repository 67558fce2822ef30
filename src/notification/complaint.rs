use serde::{Deserialize, Serialize};

use super::{Mail, Timestamp};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintNotification {
    pub notification_type: String,
    pub complaint: Complaint,
    pub mail: Mail,
}

// Sub-type, user agent and arrival date are genuinely optional on the wire;
// absence is distinct from present-but-empty.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub complained_recipients: Vec<ComplainedRecipient>,
    pub timestamp: Timestamp,
    pub feedback_id: String,
    pub complaint_sub_type: Option<String>,
    pub user_agent: Option<String>,
    pub complaint_feedback_type: Option<String>,
    pub arrival_date: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplainedRecipient {
    pub email_address: String,
}

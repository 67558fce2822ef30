mod confirm;
mod notification;
mod payload;
mod util;
mod verify;

pub use confirm::{ConfirmError, ConfirmSubscriptionResponse, UnsubscribeResponse};
pub use notification::{
    Bounce, BounceNotification, BouncedRecipient, Complaint, ComplainedRecipient,
    ComplaintNotification, Delivery, DeliveryNotification, Mail, MailHeader, ParseTimestampError,
    Timestamp,
};
pub use payload::Payload;
pub use util::Canonicalize;
pub use verify::{
    validate_certificate_origin, CertificateFetcher, HttpCertificateFetcher, PayloadVerifier,
    SignatureAlgorithm, VerifyError, DEFAULT_FETCH_TIMEOUT,
};

#[cfg(test)]
mod tests;

//! Typed SES notification bodies. Passive records with no verification
//! logic: decode them from a payload's `Message` field only after the
//! payload itself has been verified.

mod bounce;
mod complaint;
mod delivery;
mod mail;
mod timestamp;

pub use bounce::{Bounce, BounceNotification, BouncedRecipient};
pub use complaint::{Complaint, ComplainedRecipient, ComplaintNotification};
pub use delivery::{Delivery, DeliveryNotification};
pub use mail::{Mail, MailHeader};
pub use timestamp::{ParseTimestampError, Timestamp};

mod algorithm;
mod error;
mod fetcher;
mod origin;
mod verifier;

pub use algorithm::SignatureAlgorithm;
pub use error::VerifyError;
pub use fetcher::{CertificateFetcher, HttpCertificateFetcher, DEFAULT_FETCH_TIMEOUT};
pub use origin::validate_certificate_origin;
pub use verifier::PayloadVerifier;

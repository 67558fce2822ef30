use thiserror::Error;

/// Why a payload was rejected.
///
/// Every variant is a rejection; there is no partial pass. Callers must not
/// process the business payload of a message that fails verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("certificate URL could not be parsed: {0}")]
    MalformedUrl(#[from] url::ParseError),
    #[error("certificate URL should be using https")]
    InsecureScheme,
    #[error("certificate is located on an untrusted domain: {0}")]
    UntrustedHost(String),
    #[error("signature is not valid base64: {0}")]
    BadSignatureEncoding(#[from] base64::DecodeError),
    #[error("certificate could not be fetched: {0}")]
    CertificateFetchFailed(String),
    #[error("fetched certificate contains no PEM block")]
    InvalidPem,
    #[error("fetched certificate could not be parsed: {0}")]
    InvalidCertificate(String),
    #[error("signature does not match the signed payload")]
    SignatureMismatch,
}

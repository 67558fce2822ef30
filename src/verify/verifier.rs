use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use ring::signature::UnparsedPublicKey;
use x509_parser::pem::parse_x509_pem;

use super::origin::validate_certificate_origin;
use super::{CertificateFetcher, HttpCertificateFetcher, VerifyError};
use crate::payload::Payload;
use crate::util::Canonicalize;

/// Checks that a payload was signed by the service it claims to come from.
///
/// Each call is a fresh, stateless verification: the origin of the signing
/// certificate is validated before any fetch, the certificate is downloaded
/// and parsed anew, and the detached signature is checked over the canonical
/// bytes with the certificate's public key. Nothing is cached or pinned
/// across calls.
#[derive(Debug, Clone)]
pub struct PayloadVerifier<F = HttpCertificateFetcher> {
    fetcher: F,
}

impl PayloadVerifier<HttpCertificateFetcher> {
    pub fn new() -> Result<Self, VerifyError> {
        Ok(Self {
            fetcher: HttpCertificateFetcher::new()?,
        })
    }
}

impl<F: CertificateFetcher> PayloadVerifier<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    #[cfg(test)]
    pub(crate) fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Verifies the payload's detached signature. Success is the only
    /// "genuine" outcome; every error is a rejection.
    pub fn verify(&self, payload: &Payload) -> Result<(), VerifyError> {
        let signature = BASE64.decode(payload.signature.as_bytes())?;

        // Fail fast on an untrusted source before touching the network.
        validate_certificate_origin(&payload.signing_cert_url)?;

        let pem_bytes = self.fetcher.fetch(&payload.signing_cert_url)?;
        let (_, pem) = parse_x509_pem(&pem_bytes).map_err(|_| VerifyError::InvalidPem)?;
        let certificate = pem
            .parse_x509()
            .map_err(|e| VerifyError::InvalidCertificate(e.to_string()))?;

        let public_key = &certificate.public_key().subject_public_key.data;
        let algorithm = payload.signature_algorithm();
        let key = UnparsedPublicKey::new(algorithm.ring_algorithm(public_key.len()), public_key);
        key.verify(&payload.canonicalize(), &signature)
            .map_err(|_| VerifyError::SignatureMismatch)
    }
}

impl Payload {
    /// Verifies with the bundled HTTP fetcher and default timeout.
    pub fn verify(&self) -> Result<(), VerifyError> {
        PayloadVerifier::new()?.verify(self)
    }
}

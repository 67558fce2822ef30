use std::time::Duration;

use super::VerifyError;

/// Default bound on the certificate download. A malicious or slow host must
/// not be able to stall the caller indefinitely.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Raw byte transport for the signing certificate.
///
/// Verification treats the transfer as an external collaborator: the fetched
/// bytes are untrusted until the origin check and the signature check both
/// pass. Swapping the implementation is how tests avoid the network.
pub trait CertificateFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, VerifyError>;
}

/// Blocking HTTP fetcher used outside of tests. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct HttpCertificateFetcher {
    client: reqwest::blocking::Client,
}

impl HttpCertificateFetcher {
    pub fn new() -> Result<Self, VerifyError> {
        Self::with_timeout(DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, VerifyError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerifyError::CertificateFetchFailed(e.to_string()))?;
        Ok(Self { client })
    }
}

impl CertificateFetcher for HttpCertificateFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, VerifyError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| VerifyError::CertificateFetchFailed(e.to_string()))?;
        if !response.status().is_success() {
            return Err(VerifyError::CertificateFetchFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }
        let body = response
            .bytes()
            .map_err(|e| VerifyError::CertificateFetchFailed(e.to_string()))?;
        Ok(body.to_vec())
    }
}

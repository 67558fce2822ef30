use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::VerifyError;

// Permissive on the region segment, strict on the suffix: the suffix and the
// https requirement are the two levers a lookalike host could control.
static HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^sns\.[a-zA-Z0-9-]{3,}\.amazonaws\.com(\.cn)?$").expect("invalid regex")
});

/// Decides whether a certificate URL points at a host trusted to serve
/// signing certificates. Pure predicate, no network use.
pub fn validate_certificate_origin(raw_url: &str) -> Result<(), VerifyError> {
    let url = Url::parse(raw_url)?;
    if url.scheme() != "https" {
        return Err(VerifyError::InsecureScheme);
    }
    let host = url.host_str().unwrap_or("");
    if !HOST_PATTERN.is_match(host) {
        return Err(VerifyError::UntrustedHost(host.to_owned()));
    }
    Ok(())
}

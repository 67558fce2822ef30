use ring::signature;

/// The signature algorithm a payload's version tag selects.
///
/// Version `"2"` means SHA-256; every other value, including `"1"` and an
/// absent tag, falls back to SHA-1 for compatibility with older senders.
/// The fallback is weak but must not be silently upgraded: legitimately
/// SHA-1-signed messages would stop verifying. Callers that want to flag
/// legacy senders can check [`SignatureAlgorithm::is_legacy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    Sha1WithRsa,
    Sha256WithRsa,
}

impl SignatureAlgorithm {
    pub fn from_version(version: &str) -> Self {
        if version == "2" {
            Self::Sha256WithRsa
        } else {
            Self::Sha1WithRsa
        }
    }

    /// True for the SHA-1 fallback, which is cryptographically weak.
    pub fn is_legacy(self) -> bool {
        matches!(self, Self::Sha1WithRsa)
    }

    pub(crate) fn ring_algorithm(
        self,
        public_key_len: usize,
    ) -> &'static dyn signature::VerificationAlgorithm {
        match self {
            Self::Sha256WithRsa => {
                if public_key_len < 256 {
                    &signature::RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY
                } else {
                    &signature::RSA_PKCS1_2048_8192_SHA256
                }
            }
            Self::Sha1WithRsa => {
                if public_key_len < 256 {
                    &signature::RSA_PKCS1_1024_8192_SHA1_FOR_LEGACY_USE_ONLY
                } else {
                    &signature::RSA_PKCS1_2048_8192_SHA1_FOR_LEGACY_USE_ONLY
                }
            }
        }
    }
}

use std::cell::Cell;

use crate::{CertificateFetcher, Payload, PayloadVerifier, VerifyError};

// Fixture generated offline with OpenSSL: a 2048-bit RSA key, a self-signed
// certificate, and detached signatures over the canonical bytes of
// fixture_payload() under both algorithms.
const CERT_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIDLTCCAhWgAwIBAgIUXcDm/RLmxvNzmSuu5ijCa1NHuN4wDQYJKoZIhvcNAQEL
BQAwJjEkMCIGA1UEAwwbc25zLnVzLWVhc3QtMS5hbWF6b25hd3MuY29tMB4XDTI2
MDgyOTE0NTkwN1oXDTQ2MDgyNDE0NTkwN1owJjEkMCIGA1UEAwwbc25zLnVzLWVh
c3QtMS5hbWF6b25hd3MuY29tMIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKC
AQEAyyWziqvKpgH8jvYzbbsTvd05u1u8ZArnAEztQXTima8YDyz+ahF7iSI7RTlV
+++p4jSiHDm6TGBpzjal8SYyzyOnIImov7Ka6lkEz8XqfBLIt3+xvjdd0Cw6r8NP
q6ma/Vo5Mm4zdkbjFKzs9OnBlDsInD6u2EHSQOP/kbtF5xArVOPcS0DSth+1/x+Z
Cbhyjskb9c/dwsd+8ECkxHcEcZTYHDRzbHnrOgCxCcscYbm5kJs9rpHZ+ImiRwy7
hyu0Wv2whTAwIDFM+n4wvq4F3wDWJUK9tceAa2u/vZKeagnhew5yJhl4DVZseQ9C
oi+rs3Fka+E8VK5Bj7+j8w5J+wIDAQABo1MwUTAdBgNVHQ4EFgQU5DpE+sTZ9Ah1
IsdpdiJCPz3Bt+kwHwYDVR0jBBgwFoAU5DpE+sTZ9Ah1IsdpdiJCPz3Bt+kwDwYD
VR0TAQH/BAUwAwEB/zANBgkqhkiG9w0BAQsFAAOCAQEAe5ANVRT2AkX3XxZ8YYgy
PZocWjif2yoiIuY8A2kAcYMIwQ7cX2HGsmic5Ad7PXK4UVfV7RfI6Pl5rSXih70R
eVp4fAvHL1emz7VBoE7h4B+3Zzr7xh/MkWOQsNbg+yXhW8Lmsep++utfD6jNXpVi
s7X1G+vT0LsmG9LdTn2wCSHTp/QlZKiwH1iR0Bm1WE8YwJWrKvWZ+SFuXnKksa/b
RYQCw53MzPNYHg2Du5hzLdPDj68ObtThi1METMctZqVnd9E1G8SDVqTll+6jveeI
e4SN8sM8Gloepw6l10pi6baPXZc9XpCgH1EPCE69yFRFnKl0K8yB+Naj9yUPhGfk
vw==
-----END CERTIFICATE-----
";

const SIGNATURE_SHA1: &str = "rrjzu67sycboJxqhFge+e35Ivb9QdL5UDukOlmNMWpjEavGOTvanxVyaOZ82/v7we07CZwYmtToqgJhaeXh5PPU+VB8NwESEtCQ9qwbnDZqE14a2IB1SWgQfE6pW09UNkgLcPCR3J8zg9weUrGeZkSfmFricoPGHBs23zoJqmb1oQTQWuXKmiF6oFyylwEELtwBC5XAiqNgCg4S0c4/MjzsVz78C/ySPTVd+37/lOcIlIdUgTyPGXeTDchP5+IWazonRJcWsD69sl8gVDsb1kxupeZKAEzHEFhgw2j7GPNYIgfQ0HNBC5GSVzOa/QwQqI/O/XgPh84zcBuNYLagTMA==";

const SIGNATURE_SHA256: &str = "isuMfMbMMLr6FeYaPA0kh3UEN4NixFUw72fEltY6G8+uHGT93ivpooQ2MZJHXOEDF6dZL8M/Utn6tc8l0ZuUZcZrh4PUsUT7wwm0Km0rLDkU8BNte+P6F0QarX1TTkqmUymzj45mysMkL65NaZNA+aFVu8fLa72rLW7v2ktrEjP7qsnmV3xKe2h2CEE5SGc1GIqMtiSTxzi3EA3mPg8aY3FREgPD4jbNbcFyR6bvH0tcGtGdv0iTNJsBkSRyh2uJfJSehH9yTH0BKLEPXusskI+FRXhH/cmaTrlO0gzjlTDtC/KjYhR8nSImJde/KcsIOCNtapqTem+W01GKWF2Q2w==";

/// In-memory fetcher that also counts invocations, so tests can assert that
/// failing paths never touch the network.
struct FixedFetcher {
    body: Vec<u8>,
    calls: Cell<usize>,
}

impl FixedFetcher {
    fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            calls: Cell::new(0),
        }
    }

    fn certificate() -> Self {
        Self::new(CERT_PEM)
    }
}

impl CertificateFetcher for FixedFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, VerifyError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.body.clone())
    }
}

fn fixture_payload() -> Payload {
    Payload {
        message: "Hello from the topic!".into(),
        message_id: "d1b2ad36-c9b6-4e10-9a27-8d2b0e1e42cf".into(),
        subject: "test subject".into(),
        timestamp: "2024-05-04T18:25:43.511Z".into(),
        topic_arn: "arn:aws:sns:us-east-1:123456789012:test-topic".into(),
        kind: "Notification".into(),
        signature: SIGNATURE_SHA1.into(),
        signing_cert_url: "https://sns.us-east-1.amazonaws.com/cert.pem".into(),
        ..Default::default()
    }
}

#[test]
fn genuine_payload_verifies() {
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    verifier.verify(&fixture_payload()).unwrap();
}

#[test]
fn genuine_sha256_payload_verifies_under_version_two() {
    let mut payload = fixture_payload();
    payload.signature_version = "2".into();
    payload.signature = SIGNATURE_SHA256.into();
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    verifier.verify(&payload).unwrap();
}

#[test]
fn altering_a_signable_field_is_a_mismatch() {
    let mut payload = fixture_payload();
    payload.message.push('!');
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    assert!(matches!(
        verifier.verify(&payload),
        Err(VerifyError::SignatureMismatch)
    ));
}

#[test]
fn algorithm_selection_is_wired_into_the_check() {
    // Same SHA-1 signature, but the tag now claims SHA-256. If algorithm
    // selection were cosmetic this would still pass.
    let mut payload = fixture_payload();
    payload.signature_version = "2".into();
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    assert!(matches!(
        verifier.verify(&payload),
        Err(VerifyError::SignatureMismatch)
    ));
}

#[test]
fn version_one_and_unset_both_select_sha1() {
    let mut payload = fixture_payload();
    payload.signature_version = "1".into();
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    verifier.verify(&payload).unwrap();
}

#[test]
fn insecure_cert_url_is_rejected_without_fetching() {
    let mut payload = fixture_payload();
    payload.signing_cert_url = "http://sns.us-east-1.amazonaws.com/cert.pem".into();
    let fetcher = FixedFetcher::certificate();
    let verifier = PayloadVerifier::with_fetcher(fetcher);
    assert!(matches!(
        verifier.verify(&payload),
        Err(VerifyError::InsecureScheme)
    ));
    assert_eq!(verifier_calls(&verifier), 0);
}

#[test]
fn untrusted_cert_host_is_rejected_without_fetching() {
    let mut payload = fixture_payload();
    payload.signing_cert_url = "https://evil.com/cert.pem".into();
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    assert!(matches!(
        verifier.verify(&payload),
        Err(VerifyError::UntrustedHost(_))
    ));
    assert_eq!(verifier_calls(&verifier), 0);
}

#[test]
fn bad_base64_signature_is_rejected_without_fetching() {
    let mut payload = fixture_payload();
    payload.signature = "not base64 !!!".into();
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    assert!(matches!(
        verifier.verify(&payload),
        Err(VerifyError::BadSignatureEncoding(_))
    ));
    assert_eq!(verifier_calls(&verifier), 0);
}

#[test]
fn body_without_pem_block_is_invalid_pem() {
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::new("this is not a certificate"));
    assert!(matches!(
        verifier.verify(&fixture_payload()),
        Err(VerifyError::InvalidPem)
    ));
}

#[test]
fn pem_block_with_garbage_der_is_an_invalid_certificate() {
    let body = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::new(body));
    assert!(matches!(
        verifier.verify(&fixture_payload()),
        Err(VerifyError::InvalidCertificate(_))
    ));
}

#[test]
fn verification_is_stateless_across_calls() {
    let verifier = PayloadVerifier::with_fetcher(FixedFetcher::certificate());
    let payload = fixture_payload();
    verifier.verify(&payload).unwrap();
    verifier.verify(&payload).unwrap();
    // No caching: every verification fetches the certificate afresh.
    assert_eq!(verifier_calls(&verifier), 2);
}

fn verifier_calls(verifier: &PayloadVerifier<FixedFetcher>) -> usize {
    verifier.fetcher().calls.get()
}

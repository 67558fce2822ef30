/// Deterministic serialization of the exact bytes a signer covered.
///
/// Implementations must be pure: identical field values produce
/// byte-identical output on every call.
pub trait Canonicalize {
    fn canonicalize(&self) -> Vec<u8>;
}

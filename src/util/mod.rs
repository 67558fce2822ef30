mod canonicalize;

pub use canonicalize::Canonicalize;

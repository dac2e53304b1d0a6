//! Service layer for swift code records.
//! - Validates and normalizes incoming records before they reach the store.
//! - Shapes store rows into the per-endpoint response types.
//! - Talks to storage only through `SwiftCodeRepository`, so the store can be swapped in tests.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod swift_codes;

pub use swift_codes::SwiftCodeService;

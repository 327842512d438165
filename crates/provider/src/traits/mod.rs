//! Traits for the provider module.

mod error;
pub use error::{ProviderError, ProviderResult};

mod oracle;
pub use oracle::GasPriceOracle;

#[cfg(any(test, feature = "test-utils"))]
pub(crate) mod test_utils;

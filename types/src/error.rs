use std::error::Error as StdError;

use thiserror::Error;

use crate::CapabilityMethod;

/// Error type returned by user-supplied capability methods and callables.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A capability method raised while being invoked on behalf of a classifier.
///
/// The method's own error is carried unchanged: `Display` forwards to it,
/// `source()` returns it and [`CapabilityError::into_source`] hands it back.
/// The only addition is which protocol method was running.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct CapabilityError {
    method: CapabilityMethod,
    #[source]
    source: BoxError,
}

impl CapabilityError {
    #[must_use]
    pub fn new(method: CapabilityMethod, source: BoxError) -> Self {
        Self { method, source }
    }

    #[must_use]
    pub const fn method(&self) -> CapabilityMethod {
        self.method
    }

    #[must_use]
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

use std::fmt;
use std::sync::Arc;

use crate::{BoxError, Value};

type CallableFn = dyn Fn(&[Value]) -> Result<Value, BoxError> + Send + Sync;

/// A function-like value.
///
/// Carries its declared parameter count the way a script function does, but
/// nothing in classification reads it: a callable is classified by being a
/// callable, never by its shape.
#[derive(Clone)]
pub struct Callable {
    name: Option<Arc<str>>,
    arity: usize,
    body: Arc<CallableFn>,
}

impl Callable {
    pub fn new<F>(arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
    {
        Self {
            name: None,
            arity,
            body: Arc::new(body),
        }
    }

    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(Arc::from(name));
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, args: &[Value]) -> Result<Value, BoxError> {
        (self.body)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name())
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

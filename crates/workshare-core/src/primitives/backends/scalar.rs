//! Scalar backend implementation
//!
//! The portable reference backend. It works for every element kind and uses
//! no SIMD instructions; accelerated backends are validated against it.

use crate::numeric::Element;
use crate::primitives::ComputePrimitives;

/// Scalar backend - works for all element types
#[derive(Clone, Copy, Debug, Default)]
pub struct ScalarBackend;

impl ScalarBackend {
    pub fn new() -> Self {
        Self
    }
}

// Generic implementation for all element kinds
impl<T: Element> ComputePrimitives<T> for ScalarBackend {
    fn backend_name(&self) -> &'static str {
        "scalar"
    }

    // axpy uses the default strided loop from the trait
}

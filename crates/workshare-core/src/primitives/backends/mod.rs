//! Concrete backend implementations
//!
//! Simple unit types with compile-time dispatch; no Box, no dyn.

pub mod scalar;
#[cfg(feature = "simd")]
pub mod wide;

pub use scalar::ScalarBackend;
#[cfg(feature = "simd")]
pub use wide::WideBackend;

use super::ComputePrimitives;
use crate::numeric::Element;

/// Backend selection trait for automatic backend choice
///
/// Resolves each element kind to its preferred backend at compile time.
pub trait SelectBackend: Element {
    /// The backend type to use for this element kind
    type Backend: ComputePrimitives<Self>;

    /// Get an instance of the backend
    fn backend() -> Self::Backend;
}

// Real kinds use the wide lanes when compiled in
impl SelectBackend for f32 {
    #[cfg(feature = "simd")]
    type Backend = WideBackend;

    #[cfg(not(feature = "simd"))]
    type Backend = ScalarBackend;

    fn backend() -> Self::Backend {
        #[cfg(feature = "simd")]
        {
            WideBackend::new()
        }
        #[cfg(not(feature = "simd"))]
        {
            ScalarBackend
        }
    }
}

impl SelectBackend for f64 {
    #[cfg(feature = "simd")]
    type Backend = WideBackend;

    #[cfg(not(feature = "simd"))]
    type Backend = ScalarBackend;

    fn backend() -> Self::Backend {
        #[cfg(feature = "simd")]
        {
            WideBackend::new()
        }
        #[cfg(not(feature = "simd"))]
        {
            ScalarBackend
        }
    }
}

// Complex kinds get the unrolled-block path when simd is compiled in
impl SelectBackend for num_complex::Complex<f32> {
    #[cfg(feature = "simd")]
    type Backend = WideBackend;

    #[cfg(not(feature = "simd"))]
    type Backend = ScalarBackend;

    fn backend() -> Self::Backend {
        #[cfg(feature = "simd")]
        {
            WideBackend::new()
        }
        #[cfg(not(feature = "simd"))]
        {
            ScalarBackend
        }
    }
}

impl SelectBackend for num_complex::Complex<f64> {
    #[cfg(feature = "simd")]
    type Backend = WideBackend;

    #[cfg(not(feature = "simd"))]
    type Backend = ScalarBackend;

    fn backend() -> Self::Backend {
        #[cfg(feature = "simd")]
        {
            WideBackend::new()
        }
        #[cfg(not(feature = "simd"))]
        {
            ScalarBackend
        }
    }
}

/// Get the best available backend for the given element kind
pub fn best_available_backend<T: SelectBackend>() -> T::Backend {
    T::backend()
}

//! Computational primitives with compile-time dispatch
//!
//! # Architecture
//!
//! - Single unified `ComputePrimitives<T>` trait for all operations
//! - Concrete backend types: `ScalarBackend` and (feature `simd`)
//!   `WideBackend`
//! - Compile-time backend selection via `SelectBackend`
//! - Zero-cost abstractions - no heap allocation or dynamic dispatch
//!
//! # Usage
//!
//! ```rust
//! use workshare_core::{best_available_backend, ComputePrimitives};
//!
//! let backend = best_available_backend::<f64>();
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let mut y = [0.0; 4];
//! backend.axpy(4, 2.0, &x, 1, &mut y, 1);
//! assert_eq!(y, [2.0, 4.0, 6.0, 8.0]);
//! ```

pub mod backends;
pub mod traits;

pub use backends::{best_available_backend, ScalarBackend, SelectBackend};
#[cfg(feature = "simd")]
pub use backends::WideBackend;
pub use traits::ComputePrimitives;

// Convenience functions for backend creation
/// Create a scalar backend (always available)
pub fn scalar_backend() -> ScalarBackend {
    ScalarBackend::new()
}

/// Create a wide SIMD backend
#[cfg(feature = "simd")]
pub fn wide_backend() -> WideBackend {
    WideBackend::new()
}

/// Get the best available backend name
pub fn best_backend_name() -> &'static str {
    #[cfg(feature = "simd")]
    {
        "wide"
    }
    #[cfg(not(feature = "simd"))]
    {
        "scalar"
    }
}

//! Element types, strided views, and precision-dispatched AXPY backends
//!
//! This crate provides the numeric foundation for the workshare workspace.
//!
//! # Architecture Overview
//!
//! The library is organized into three layers:
//!
//! 1. **Elements** - the closed set of supported scalar kinds with static
//!    precision dispatch
//! 2. **Primitives** - backend types implementing the low-level strided
//!    update, from the portable reference loop to SIMD lanes
//! 3. **Kernels** - validated entry points that fail fast on bad strides or
//!    undersized buffers before touching the hot path
//!
//! # Design Philosophy
//!
//! - **Zero-Cost Dispatch**: the element type picks the backend routine at
//!   compile time
//! - **Reference Semantics**: the scalar backend is the behavior every
//!   accelerated path is validated against
//! - **No Hidden Allocations**: kernels work directly on caller buffers
//!
//! # Example
//!
//! ```rust
//! use workshare_core::{axpy, best_available_backend};
//!
//! let backend = best_available_backend::<f64>();
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let mut y = [0.0; 4];
//! axpy(&backend, 4, 2.0, &x, 1, &mut y, 1).unwrap();
//! assert_eq!(y, [2.0, 4.0, 6.0, 8.0]);
//! ```

pub mod error;
pub mod kernels;
pub mod numeric;
pub mod primitives;
pub mod view;

// Re-export core types
pub use error::{Error, Result};

pub use kernels::{axpy, axpy_unrolled, axpy_views};
pub use numeric::{Element, ScalarKind};
pub use primitives::{
    best_available_backend, best_backend_name, scalar_backend, ComputePrimitives, ScalarBackend,
    SelectBackend,
};
#[cfg(feature = "simd")]
pub use primitives::{wide_backend, WideBackend};
pub use view::{VectorView, VectorViewMut};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        axpy, axpy_views, best_available_backend, ComputePrimitives, Element, Result, ScalarBackend,
        ScalarKind, SelectBackend, VectorView, VectorViewMut,
    };

    pub use crate::error::Error;

    #[cfg(feature = "simd")]
    pub use crate::WideBackend;
}

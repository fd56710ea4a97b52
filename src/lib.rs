//! # workshare
//!
//! Fork-join task execution with wall/CPU timing, plus precision-dispatched
//! AXPY kernels over f32/f64 and their complex counterparts.
//!
//! This crate re-exports the workspace members:
//!
//! - [`workshare_core`] - element types, strided vector views, AXPY
//!   backends and validated kernels
//! - [`workshare_runner`] - the [`TaskRunner`] and the [`ParallelTask`]
//!   capability trait
//!
//! # Quick Start
//!
//! ```rust
//! use workshare::prelude::*;
//!
//! let backend = best_available_backend::<f64>();
//! let x = [1.0, 2.0, 3.0, 4.0];
//! let mut y = [0.0; 4];
//! axpy(&backend, 4, 2.0, &x, 1, &mut y, 1).unwrap();
//! assert_eq!(y, [2.0, 4.0, 6.0, 8.0]);
//! ```

pub use workshare_core;
pub use workshare_runner;

pub use workshare_core::{
    axpy, axpy_unrolled, axpy_views, best_available_backend, best_backend_name, ComputePrimitives,
    Element, Error, Result, ScalarBackend, ScalarKind, SelectBackend, VectorView, VectorViewMut,
};
#[cfg(feature = "simd")]
pub use workshare_core::WideBackend;

pub use workshare_runner::{ParallelTask, TaskRunner, TimingSample, WorkerContext};

/// Prelude module for convenient imports
pub mod prelude {
    pub use workshare_core::prelude::*;
    pub use workshare_runner::{ParallelTask, TaskRunner, WorkerContext};
}

//! Element trait hierarchy for precision-dispatched kernels
//!
//! This module defines the closed set of element types the kernels operate
//! on: `f32`, `f64`, `Complex<f32>`, and `Complex<f64>`. Backend selection
//! and kernel specialization key off the implementing type at compile time;
//! there is no runtime branching on precision.
//!
//! # Design Philosophy
//!
//! - **Pure type constraints**: no computation lives here, only the type
//!   relationships the backends need
//! - **Static dispatch**: the element type decides the kernel path during
//!   monomorphization
//! - **Closed set**: the four supported kinds are enumerated by
//!   [`ScalarKind`]; adding a kind means adding an `Element` impl

use num_complex::Complex;
use num_traits::{Float, Num, NumAssign};
use std::fmt::Debug;

/// Precision/domain tag for the supported element types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Single-precision real
    Real32,
    /// Double-precision real
    Real64,
    /// Single-precision complex
    Complex32,
    /// Double-precision complex
    Complex64,
}

impl ScalarKind {
    /// Whether this kind has an imaginary component
    pub fn is_complex(self) -> bool {
        matches!(self, ScalarKind::Complex32 | ScalarKind::Complex64)
    }

    /// Short name for logging and diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Real32 => "f32",
            ScalarKind::Real64 => "f64",
            ScalarKind::Complex32 => "c32",
            ScalarKind::Complex64 => "c64",
        }
    }
}

/// Base trait for element types accepted by the compute kernels
///
/// The arithmetic surface comes from `num-traits`; this trait adds the
/// real-component type used for magnitudes and tolerances, and the
/// [`ScalarKind`] tag used for static precision dispatch.
pub trait Element: Num + NumAssign + Copy + Debug + PartialEq + Send + Sync + 'static {
    /// The underlying real type (`f32` or `f64`)
    type Real: Float + Debug + Send + Sync;

    /// Precision/domain tag for this element type
    const KIND: ScalarKind;

    /// Lift a real value into this element type
    fn from_real(re: Self::Real) -> Self;

    /// Create an element from an `f64` constant (for tests and defaults)
    fn from_f64(val: f64) -> Self;

    /// Magnitude: absolute value for reals, modulus for complex
    fn modulus(self) -> Self::Real;

    /// Check that all components are finite
    fn is_finite(self) -> bool;
}

impl Element for f32 {
    type Real = f32;

    const KIND: ScalarKind = ScalarKind::Real32;

    fn from_real(re: f32) -> Self {
        re
    }

    fn from_f64(val: f64) -> Self {
        val as f32
    }

    fn modulus(self) -> f32 {
        self.abs()
    }

    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Element for f64 {
    type Real = f64;

    const KIND: ScalarKind = ScalarKind::Real64;

    fn from_real(re: f64) -> Self {
        re
    }

    fn from_f64(val: f64) -> Self {
        val
    }

    fn modulus(self) -> f64 {
        self.abs()
    }

    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
}

impl Element for Complex<f32> {
    type Real = f32;

    const KIND: ScalarKind = ScalarKind::Complex32;

    fn from_real(re: f32) -> Self {
        Complex::new(re, 0.0)
    }

    fn from_f64(val: f64) -> Self {
        Complex::new(val as f32, 0.0)
    }

    fn modulus(self) -> f32 {
        self.norm()
    }

    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Element for Complex<f64> {
    type Real = f64;

    const KIND: ScalarKind = ScalarKind::Complex64;

    fn from_real(re: f64) -> Self {
        Complex::new(re, 0.0)
    }

    fn from_f64(val: f64) -> Self {
        Complex::new(val, 0.0)
    }

    fn modulus(self) -> f64 {
        self.norm()
    }

    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

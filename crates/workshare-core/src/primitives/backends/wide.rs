//! SIMD backend built on the `wide` crate
//!
//! Accelerates the contiguous real-precision paths with `f32x8`/`f64x4`
//! lanes and the contiguous complex paths with fixed unrolled blocks.
//! Non-unit strides fall back to the portable strided loop; results must
//! match [`ScalarBackend`](super::ScalarBackend) to within rounding.

use num_complex::Complex;
use wide::{f32x8, f64x4};

use crate::kernels::axpy_unrolled;
use crate::primitives::traits::{axpy_strided, debug_check_axpy};
use crate::primitives::ComputePrimitives;

/// Block width for the unrolled complex path
const COMPLEX_BLOCK: usize = 4;

/// Wide backend - portable SIMD for real kinds, unrolled blocks for complex
#[derive(Clone, Copy, Debug, Default)]
pub struct WideBackend;

impl WideBackend {
    pub fn new() -> Self {
        Self
    }

    /// The `wide` lanes are portable; the backend is always usable
    pub fn is_available() -> bool {
        true
    }
}

impl ComputePrimitives<f32> for WideBackend {
    fn backend_name(&self) -> &'static str {
        "wide"
    }

    fn simd_width(&self) -> usize {
        8
    }

    fn axpy(&self, n: usize, a: f32, x: &[f32], incx: usize, y: &mut [f32], incy: usize) {
        debug_check_axpy(n, x, incx, y, incy);
        if incx != 1 || incy != 1 {
            axpy_strided(n, a, x, incx, y, incy);
            return;
        }

        let av = f32x8::splat(a);
        let split = n - n % 8;
        for (xc, yc) in x[..split].chunks_exact(8).zip(y[..split].chunks_exact_mut(8)) {
            let xa: [f32; 8] = xc.try_into().unwrap();
            let ya: [f32; 8] = (&*yc).try_into().unwrap();
            let r = av * f32x8::from(xa) + f32x8::from(ya);
            yc.copy_from_slice(&r.to_array());
        }
        for i in split..n {
            y[i] += a * x[i];
        }
    }
}

impl ComputePrimitives<f64> for WideBackend {
    fn backend_name(&self) -> &'static str {
        "wide"
    }

    fn simd_width(&self) -> usize {
        4
    }

    fn axpy(&self, n: usize, a: f64, x: &[f64], incx: usize, y: &mut [f64], incy: usize) {
        debug_check_axpy(n, x, incx, y, incy);
        if incx != 1 || incy != 1 {
            axpy_strided(n, a, x, incx, y, incy);
            return;
        }

        let av = f64x4::splat(a);
        let split = n - n % 4;
        for (xc, yc) in x[..split].chunks_exact(4).zip(y[..split].chunks_exact_mut(4)) {
            let xa: [f64; 4] = xc.try_into().unwrap();
            let ya: [f64; 4] = (&*yc).try_into().unwrap();
            let r = av * f64x4::from(xa) + f64x4::from(ya);
            yc.copy_from_slice(&r.to_array());
        }
        for i in split..n {
            y[i] += a * x[i];
        }
    }
}

impl ComputePrimitives<Complex<f32>> for WideBackend {
    fn backend_name(&self) -> &'static str {
        "wide"
    }

    fn axpy(
        &self,
        n: usize,
        a: Complex<f32>,
        x: &[Complex<f32>],
        incx: usize,
        y: &mut [Complex<f32>],
        incy: usize,
    ) {
        debug_check_axpy(n, x, incx, y, incy);
        if incx != 1 || incy != 1 {
            axpy_strided(n, a, x, incx, y, incy);
            return;
        }
        axpy_blocked(n, a, x, y);
    }
}

impl ComputePrimitives<Complex<f64>> for WideBackend {
    fn backend_name(&self) -> &'static str {
        "wide"
    }

    fn axpy(
        &self,
        n: usize,
        a: Complex<f64>,
        x: &[Complex<f64>],
        incx: usize,
        y: &mut [Complex<f64>],
        incy: usize,
    ) {
        debug_check_axpy(n, x, incx, y, incy);
        if incx != 1 || incy != 1 {
            axpy_strided(n, a, x, incx, y, incy);
            return;
        }
        axpy_blocked(n, a, x, y);
    }
}

/// Contiguous update in fixed unrolled blocks, with a scalar tail
fn axpy_blocked<T: crate::Element>(n: usize, a: T, x: &[T], y: &mut [T]) {
    let split = n - n % COMPLEX_BLOCK;
    for (xc, yc) in x[..split]
        .chunks_exact(COMPLEX_BLOCK)
        .zip(y[..split].chunks_exact_mut(COMPLEX_BLOCK))
    {
        let xa: &[T; COMPLEX_BLOCK] = xc.try_into().unwrap();
        let ya: &mut [T; COMPLEX_BLOCK] = yc.try_into().unwrap();
        axpy_unrolled(a, xa, ya);
    }
    for i in split..n {
        y[i] += a * x[i];
    }
}

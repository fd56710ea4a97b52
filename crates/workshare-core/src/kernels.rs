//! Validated AXPY entry points
//!
//! The public kernels check their preconditions and fail fast, then hand
//! the work to a [`ComputePrimitives`] backend. The backends themselves
//! keep the zero-validation hot path.

use crate::error::{Error, Result};
use crate::numeric::Element;
use crate::primitives::ComputePrimitives;
use crate::view::{required_len, VectorView, VectorViewMut};

/// Compute `y[i*incy] += a * x[i*incx]` for `i` in `0..n`
///
/// Strides must be at least 1 and both buffers long enough for `n` logical
/// elements; violations are reported as errors rather than undefined
/// behavior.
pub fn axpy<T, P>(
    primitives: &P,
    n: usize,
    a: T,
    x: &[T],
    incx: usize,
    y: &mut [T],
    incy: usize,
) -> Result<()>
where
    T: Element,
    P: ComputePrimitives<T>,
{
    if incx == 0 {
        return Err(Error::zero_stride("x"));
    }
    if incy == 0 {
        return Err(Error::zero_stride("y"));
    }
    let required_x = required_len(n, incx);
    if x.len() < required_x {
        return Err(Error::buffer_too_short("x", required_x, x.len()));
    }
    let required_y = required_len(n, incy);
    if y.len() < required_y {
        return Err(Error::buffer_too_short("y", required_y, y.len()));
    }

    primitives.axpy(n, a, x, incx, y, incy);
    Ok(())
}

/// View-based convenience overload: `y += a * x` element-wise
///
/// Binds a scale factor and two views and forwards to the strided kernel.
/// The element count is taken from `x`; `y` must hold at least as many
/// elements.
pub fn axpy_views<T, P>(
    primitives: &P,
    a: T,
    x: &VectorView<'_, T>,
    y: &mut VectorViewMut<'_, T>,
) -> Result<()>
where
    T: Element,
    P: ComputePrimitives<T>,
{
    if y.len() < x.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "axpy operands"));
    }

    let n = x.len();
    let (x_data, incx) = x.as_raw();
    let (y_data, incy) = y.as_raw_mut();
    primitives.axpy(n, a, x_data, incx, y_data, incy);
    Ok(())
}

/// Fixed-width contiguous update with a compile-time-known block length
///
/// The block length is a const generic, so the loop fully unrolls during
/// monomorphization. Used by the accelerated backends for element kinds
/// without lane support.
#[inline]
pub fn axpy_unrolled<T: Element, const N: usize>(a: T, x: &[T; N], y: &mut [T; N]) {
    for i in 0..N {
        y[i] += a * x[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::ScalarBackend;
    use approx::assert_relative_eq;
    use num_complex::Complex;

    #[test]
    fn test_axpy_contiguous() {
        let backend = ScalarBackend::new();
        let x = [1.0f64, 2.0, 3.0, 4.0];
        let mut y = [0.0f64; 4];
        axpy(&backend, 4, 2.0, &x, 1, &mut y, 1).unwrap();
        assert_eq!(y, [2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_axpy_strided_read() {
        let backend = ScalarBackend::new();
        let x = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [10.0f64, 10.0, 10.0];
        axpy(&backend, 3, 1.0, &x, 2, &mut y, 1).unwrap();
        assert_eq!(y, [11.0, 13.0, 15.0]);
    }

    #[test]
    fn test_axpy_zero_scale_is_identity() {
        let backend = ScalarBackend::new();
        let x = [1.0f64, 2.0, 3.0, 4.0, 5.0];
        let mut y = [10.0f64; 5];
        axpy(&backend, 5, 0.0, &x, 1, &mut y, 1).unwrap();
        assert_eq!(y, [10.0; 5]);
    }

    #[test]
    fn test_axpy_linearity_in_scale() {
        let backend = ScalarBackend::new();
        let x = [0.5f64, -1.5, 2.25, 4.0];
        let y0 = [1.0f64, 2.0, 3.0, 4.0];
        let (a1, a2) = (0.75, -2.5);

        let mut y_once = y0;
        axpy(&backend, 4, a1 + a2, &x, 1, &mut y_once, 1).unwrap();

        let mut y_twice = y0;
        axpy(&backend, 4, a1, &x, 1, &mut y_twice, 1).unwrap();
        axpy(&backend, 4, a2, &x, 1, &mut y_twice, 1).unwrap();

        for (a, b) in y_once.iter().zip(y_twice.iter()) {
            assert_relative_eq!(*a, *b, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_axpy_complex() {
        let backend = ScalarBackend::new();
        let a = Complex::new(0.0f64, 1.0); // multiply by i
        let x = [Complex::new(1.0, 0.0), Complex::new(0.0, 2.0)];
        let mut y = [Complex::new(0.0, 0.0); 2];
        axpy(&backend, 2, a, &x, 1, &mut y, 1).unwrap();
        assert_eq!(y[0], Complex::new(0.0, 1.0));
        assert_eq!(y[1], Complex::new(-2.0, 0.0));
    }

    #[test]
    fn test_axpy_rejects_zero_stride() {
        let backend = ScalarBackend::new();
        let x = [1.0f64; 4];
        let mut y = [0.0f64; 4];
        assert!(axpy(&backend, 4, 1.0, &x, 0, &mut y, 1).is_err());
        assert!(axpy(&backend, 4, 1.0, &x, 1, &mut y, 0).is_err());
    }

    #[test]
    fn test_axpy_rejects_short_buffers() {
        let backend = ScalarBackend::new();
        let x = [1.0f64; 4];
        let mut y = [0.0f64; 4];
        assert!(axpy(&backend, 5, 1.0, &x, 1, &mut y, 1).is_err());
        assert!(axpy(&backend, 3, 1.0, &x, 2, &mut y, 1).is_err());
    }

    #[test]
    fn test_axpy_empty_range() {
        let backend = ScalarBackend::new();
        let x: [f64; 0] = [];
        let mut y: [f64; 0] = [];
        axpy(&backend, 0, 2.0, &x, 1, &mut y, 1).unwrap();
    }

    #[test]
    fn test_axpy_views() {
        let backend = ScalarBackend::new();
        let x_buf = [1.0f64, 9.0, 2.0, 9.0, 3.0, 9.0];
        let x = VectorView::new(&x_buf, 3, 2).unwrap();
        let mut y_buf = [10.0f64, 10.0, 10.0];
        let mut y = VectorViewMut::from_slice(&mut y_buf);

        axpy_views(&backend, 1.0, &x, &mut y).unwrap();
        assert_eq!(y_buf, [11.0, 12.0, 13.0]);
    }

    #[test]
    fn test_axpy_views_rejects_short_y() {
        let backend = ScalarBackend::new();
        let x_buf = [1.0f64; 4];
        let x = VectorView::from_slice(&x_buf);
        let mut y_buf = [0.0f64; 3];
        let mut y = VectorViewMut::from_slice(&mut y_buf);
        assert!(axpy_views(&backend, 1.0, &x, &mut y).is_err());
    }

    #[test]
    fn test_axpy_unrolled_block() {
        let x = [1.0f64, 2.0, 3.0, 4.0];
        let mut y = [1.0f64; 4];
        axpy_unrolled(3.0, &x, &mut y);
        assert_eq!(y, [4.0, 7.0, 10.0, 13.0]);
    }
}

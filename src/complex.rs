// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The handful of complex-number operators the escape-time iteration
//! needs.  We use `num::Complex<f64>` as the value type, but spell the
//! arithmetic out field by field so the exact evaluation order (and
//! therefore the exact floating-point results) is pinned down here
//! rather than left to whatever `num` happens to do.
//!
//! Every operator takes its operands by value and returns a fresh
//! value.  NaN and infinity are not rejected; they propagate the way
//! IEEE-754 says they do.

use num::Complex;

/// `a + b`
#[inline]
pub fn add(a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
    Complex {
        re: a.re + b.re,
        im: a.im + b.im,
    }
}

/// `a * b`, the ordinary complex product.
#[inline]
pub fn multiply(a: Complex<f64>, b: Complex<f64>) -> Complex<f64> {
    Complex {
        re: a.re * b.re - a.im * b.im,
        im: a.im * b.re + a.re * b.im,
    }
}

/// Scales `a` by the real number `r`.
#[inline]
pub fn multiply_by_real(r: f64, a: Complex<f64>) -> Complex<f64> {
    Complex {
        re: r * a.re,
        im: r * a.im,
    }
}

/// Multiplies `a` by the purely imaginary number `0 + i·j`.  The real
/// part of the result is `-(i * a.im)`, the imaginary part `i * a.re`.
#[inline]
pub fn multiply_by_imaginary(i: f64, a: Complex<f64>) -> Complex<f64> {
    Complex {
        re: -(i * a.im),
        im: i * a.re,
    }
}

/// Distance of `a` from the origin.
#[inline]
pub fn modulus(a: Complex<f64>) -> f64 {
    (a.re * a.re + a.im * a.im).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Complex<f64> {
        Complex::new(1.0, 1.0)
    }

    fn b() -> Complex<f64> {
        Complex::new(1.0, -2.0)
    }

    #[test]
    fn adds_the_reference_operands() {
        assert_eq!(add(a(), b()), Complex::new(2.0, -1.0));
    }

    #[test]
    fn multiplies_the_reference_operands() {
        assert_eq!(multiply(a(), b()), Complex::new(3.0, -1.0));
    }

    #[test]
    fn scales_by_a_real() {
        assert_eq!(multiply_by_real(1.5, a()), Complex::new(1.5, 1.5));
    }

    #[test]
    fn scales_by_an_imaginary() {
        assert_eq!(multiply_by_imaginary(1.5, a()), Complex::new(-1.5, 1.5));
    }

    #[test]
    fn imaginary_scaling_agrees_with_the_full_product() {
        let samples = [
            Complex::new(0.25, -3.0),
            Complex::new(-7.5, 2.0),
            Complex::new(1e-3, 1e3),
        ];
        for s in samples.iter() {
            assert_eq!(
                multiply_by_imaginary(2.0, *s),
                multiply(*s, Complex::new(0.0, 2.0))
            );
        }
    }

    #[test]
    fn add_and_multiply_commute() {
        let samples = [
            Complex::new(1.0, 1.0),
            Complex::new(1.0, -2.0),
            Complex::new(-0.75, 0.1),
            Complex::new(3.5, -1e-9),
            Complex::new(0.0, 0.0),
        ];
        for x in samples.iter() {
            for y in samples.iter() {
                assert_eq!(add(*x, *y), add(*y, *x));
                assert_eq!(multiply(*x, *y), multiply(*y, *x));
            }
        }
    }

    #[test]
    fn one_is_the_real_identity() {
        for x in [a(), b(), Complex::new(-0.5, 123.25)].iter() {
            assert_eq!(multiply_by_real(1.0, *x), *x);
        }
    }

    #[test]
    fn nan_propagates() {
        let n = add(Complex::new(std::f64::NAN, 0.0), a());
        assert!(n.re.is_nan());
        assert_eq!(n.im, 1.0);
    }

    #[test]
    fn modulus_of_three_four() {
        assert_eq!(modulus(Complex::new(3.0, -4.0)), 5.0);
    }
}

//! # cmath.rs
//!
//! Complex arithmetic with well-defined behavior at singularities.
//!
//! Values are plain [`num_complex::Complex<f64>`]. The functions here do not
//! delegate to the transcendental methods of `num_complex` because those pick
//! different conventions at the edges (for example `ln(0)` is `-inf`). Instead
//! every mathematically undefined result is represented as `(NaN, NaN)` and is
//! carried through subsequent operations untouched, so the caller only has to
//! special-case it once, at the very end of the pipeline.
//!
//! | operation         | undefined at            |
//! |-------------------|-------------------------|
//! | [`div`]           | divisor exactly `0`     |
//! | [`log`]           | argument exactly `0`    |
//! | [`pow`]           | base exactly `0`        |
//! | [`tan`]           | real poles `pi/2 + k*pi`|

use num_complex::Complex;
use num_traits::Zero;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Absolute tolerance used by [`sqrt`] and [`tan`] to snap to exact values.
pub const TOL: f64 = 1.0e-10;

/// The "undefined" sentinel.
pub const NAN: Complex<f64> = Complex::new(f64::NAN, f64::NAN);

/// Returns `true` if either component is NaN.
pub fn is_nan(z: Complex<f64>) -> bool {
    z.re.is_nan() || z.im.is_nan()
}

/// Converts polar coordinates to rectangular ones: `r * exp(i*t)`.
pub fn polar_to_rect(r: f64, t: f64) -> Complex<f64> {
    Complex::new(r * t.cos(), r * t.sin())
}

/// Modulus `sqrt(x^2 + y^2)`.
pub fn abs(z: Complex<f64>) -> f64 {
    (z.re * z.re + z.im * z.im).sqrt()
}

/// Principal argument in `(-pi, pi]`.
pub fn arg(z: Complex<f64>) -> f64 {
    z.im.atan2(z.re)
}

/// Argument shifted into `[0, 2*pi)`.
pub fn arg2(z: Complex<f64>) -> f64 {
    let t = arg(z);
    if t >= 0.0 {
        t
    } else {
        // -0.0 and tiny negatives would otherwise round up to exactly 2*pi
        let shifted = TAU + t;
        if shifted >= TAU { 0.0 } else { shifted }
    }
}

pub fn conj(z: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re, -z.im)
}

pub fn neg(z: Complex<f64>) -> Complex<f64> {
    Complex::new(-z.re, -z.im)
}

pub fn add(z: Complex<f64>, w: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re + w.re, z.im + w.im)
}

pub fn sub(z: Complex<f64>, w: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re - w.re, z.im - w.im)
}

pub fn mul(z: Complex<f64>, w: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re * w.re - z.im * w.im, z.re * w.im + z.im * w.re)
}

/// Quotient `z / w`; `(NaN, NaN)` when `w` is exactly zero.
pub fn div(z: Complex<f64>, w: Complex<f64>) -> Complex<f64> {
    if w.is_zero() {
        return NAN;
    }
    let d = w.re * w.re + w.im * w.im;
    Complex::new((z.re * w.re + z.im * w.im) / d, (z.im * w.re - z.re * w.im) / d)
}

/// `exp(z) = e^x * (cos y + i sin y)`.
pub fn exp(z: Complex<f64>) -> Complex<f64> {
    polar_to_rect(z.re.exp(), z.im)
}

/// Principal logarithm `ln|z| + i arg z`; `(NaN, NaN)` at the origin.
pub fn log(z: Complex<f64>) -> Complex<f64> {
    if z.is_zero() {
        return NAN;
    }
    Complex::new(abs(z).ln(), arg(z))
}

/// Principal power `exp(w * log(z))`.
///
/// There is no special case for a zero base: `log(0)` is undefined, so
/// `pow(0, w)` is `(NaN, NaN)` for every `w`, `0^0` included.
pub fn pow(z: Complex<f64>, w: Complex<f64>) -> Complex<f64> {
    exp(mul(w, log(z)))
}

/// Principal square root.
///
/// Inputs within [`TOL`] of the origin return exact zero, which the
/// `pow`-based formula cannot produce.
pub fn sqrt(z: Complex<f64>) -> Complex<f64> {
    if z.re.abs() < TOL && z.im.abs() < TOL {
        return Complex::zero();
    }
    pow(z, Complex::new(0.5, 0.0))
}

pub fn sin(z: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re.sin() * z.im.cosh(), z.re.cos() * z.im.sinh())
}

pub fn cos(z: Complex<f64>) -> Complex<f64> {
    Complex::new(z.re.cos() * z.im.cosh(), -z.re.sin() * z.im.sinh())
}

/// `sin(z) / cos(z)`, undefined at the real poles.
///
/// `cos(pi/2)` evaluates to about `6e-17` rather than zero, so near a pole the
/// quotient would be a huge but finite number. Those inputs are mapped to
/// `(NaN, NaN)` directly.
pub fn tan(z: Complex<f64>) -> Complex<f64> {
    if is_near_real_pole(z) {
        return NAN;
    }
    div(sin(z), cos(z))
}

fn is_near_real_pole(z: Complex<f64>) -> bool {
    if z.im.abs() >= TOL || !z.re.is_finite() {
        return false;
    }
    let k = ((z.re - FRAC_PI_2) / PI).round();
    (z.re - (FRAC_PI_2 + k * PI)).abs() < TOL
}

#[cfg(test)]
mod cmath_tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1.0e-9;

    fn assert_close(z: Complex<f64>, expected: Complex<f64>) {
        assert_abs_diff_eq!(z.re, expected.re, epsilon=EPS);
        assert_abs_diff_eq!(z.im, expected.im, epsilon=EPS);
    }

    fn samples() -> Vec<Complex<f64>> {
        vec![
            Complex::new(1.0, 0.0),
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(0.0, -0.5),
            Complex::new(3.0, -4.0),
            Complex::new(-2.5, 1.25),
            Complex::new(1.0e-3, 7.0),
        ]
    }

    #[test]
    fn test_polar_to_rect() {
        assert_close(polar_to_rect(1.0, 0.0), Complex::new(1.0, 0.0));
        assert_close(polar_to_rect(1.0, FRAC_PI_2), Complex::new(0.0, 1.0));
        assert_close(polar_to_rect(1.0, PI), Complex::new(-1.0, 0.0));
        assert_close(polar_to_rect(2.0_f64.sqrt(), 0.25 * PI), Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_polar_round_trip() {
        for z in samples() {
            assert_close(polar_to_rect(abs(z), arg(z)), z);
        }
    }

    #[test]
    fn test_abs_and_arg() {
        assert_eq!(abs(Complex::new(0.0, 0.0)), 0.0);
        assert_abs_diff_eq!(abs(Complex::new(3.0, -4.0)), 5.0, epsilon=EPS);
        assert_abs_diff_eq!(arg(Complex::new(-10.0, 0.0)), PI, epsilon=EPS);
        assert_abs_diff_eq!(arg(Complex::new(100.0, -100.0)), -0.25 * PI, epsilon=EPS);
        assert_abs_diff_eq!(arg(Complex::new(-1.0, -1.0)), -0.75 * PI, epsilon=EPS);
    }

    #[test]
    fn test_arg2_range() {
        for z in samples() {
            let t = arg2(z);
            assert!((0.0..TAU).contains(&t), "arg2({}) = {}", z, t);
            if arg(z) >= 0.0 {
                assert_eq!(t, arg(z));
            } else {
                assert_abs_diff_eq!(t, arg(z) + TAU, epsilon=EPS);
            }
        }
        assert_abs_diff_eq!(arg2(Complex::new(0.0, -1.0)), 1.5 * PI, epsilon=EPS);
        assert_eq!(arg2(Complex::new(1.0, -0.0)), 0.0);
    }

    #[test]
    fn test_basic_arithmetic() {
        let z = Complex::new(1.0, -1.0);
        let w = Complex::new(-2.0, 0.5);
        assert_eq!(conj(z), Complex::new(1.0, 1.0));
        assert_eq!(neg(z), Complex::new(-1.0, 1.0));
        assert_eq!(add(z, w), Complex::new(-1.0, -0.5));
        assert_eq!(sub(z, w), Complex::new(3.0, -1.5));
        assert_close(mul(Complex::new(0.0, 1.0), Complex::new(0.0, 1.0)), Complex::new(-1.0, 0.0));
        assert_close(mul(z, w), z * w);
    }

    #[test]
    fn test_div() {
        assert_close(div(Complex::new(4.0, 0.0), Complex::new(-2.0, 0.0)), Complex::new(-2.0, 0.0));
        assert_close(div(Complex::new(-1.0, 0.0), Complex::new(0.0, 1.0)), Complex::new(0.0, 1.0));
        assert_close(div(Complex::new(10.0, 5.0), Complex::new(10.0, 5.0)), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_div_by_zero_is_nan() {
        for z in samples().into_iter().chain([Complex::zero()]) {
            let q = div(z, Complex::zero());
            assert!(q.re.is_nan() && q.im.is_nan(), "{} / 0 = {}", z, q);
        }
    }

    #[test]
    fn test_exp_and_log() {
        assert_close(exp(Complex::zero()), Complex::new(1.0, 0.0));
        assert_close(exp(Complex::new(0.0, PI)), Complex::new(-1.0, 0.0));
        assert_eq!(log(Complex::new(1.0, 0.0)), Complex::new(0.0, 0.0));
        assert_close(log(Complex::new(-1.0, 0.0)), Complex::new(0.0, PI));
        for z in samples() {
            assert_close(exp(log(z)), z);
        }
    }

    #[test]
    fn test_log_of_zero_is_nan() {
        assert!(is_nan(log(Complex::zero())));
        assert!(is_nan(log(Complex::new(-0.0, 0.0))));
    }

    #[test]
    fn test_pow() {
        assert_close(pow(Complex::new(2.0, 0.0), Complex::new(2.0, 0.0)), Complex::new(4.0, 0.0));
        assert_close(pow(Complex::new(0.0, 1.0), Complex::new(2.0, 0.0)), Complex::new(-1.0, 0.0));
        // i^i = exp(-pi/2)
        assert_close(pow(Complex::new(0.0, 1.0), Complex::new(0.0, 1.0)), Complex::new((-0.5 * PI).exp(), 0.0));
    }

    #[test]
    fn test_pow_zero_exponent() {
        for z in samples() {
            assert_close(pow(z, Complex::zero()), Complex::new(1.0, 0.0));
        }
    }

    #[test]
    fn test_pow_zero_base_is_nan() {
        for w in samples().into_iter().chain([Complex::zero()]) {
            let p = pow(Complex::zero(), w);
            assert!(p.re.is_nan() && p.im.is_nan(), "0^{} = {}", w, p);
        }
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(Complex::zero()), Complex::new(0.0, 0.0));
        assert_eq!(sqrt(Complex::new(1.0e-12, -1.0e-12)), Complex::new(0.0, 0.0));
        assert_close(sqrt(Complex::new(-1.0, 0.0)), Complex::new(0.0, 1.0));
        assert_close(sqrt(Complex::new(4.0, 0.0)), Complex::new(2.0, 0.0));
        for z in samples() {
            let r = sqrt(z);
            assert_close(mul(r, r), z);
        }
    }

    #[test]
    fn test_trig_matches_reference() {
        for z in samples() {
            assert_close(sin(z), z.sin());
            assert_close(cos(z), z.cos());
            assert_close(tan(z), z.tan());
        }
    }

    #[test]
    fn test_tan_real_poles() {
        assert!(is_nan(tan(Complex::new(FRAC_PI_2, 0.0))));
        assert!(is_nan(tan(Complex::new(-FRAC_PI_2, 0.0))));
        assert!(is_nan(tan(Complex::new(3.0 * FRAC_PI_2, 0.0))));
        assert!(is_nan(tan(Complex::new(FRAC_PI_2 + 1.0e-12, -1.0e-12))));
        // off the real axis the tangent is finite
        assert!(!is_nan(tan(Complex::new(FRAC_PI_2, 0.1))));
        assert!(!is_nan(tan(Complex::new(FRAC_PI_2 - 1.0e-3, 0.0))));
    }

    #[test]
    fn test_nan_propagates() {
        let z = Complex::new(2.0, 3.0);
        assert!(is_nan(add(NAN, z)));
        assert!(is_nan(mul(z, NAN)));
        assert!(is_nan(exp(NAN)));
        assert!(is_nan(sin(NAN)));
    }
}

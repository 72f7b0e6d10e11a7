//! Shared numerical primitives anchored on `nalgebra`.
//!
//! Fields are carried as fixed-size three-component vectors. Phasors use
//! complex components while directions and instantaneous samples are real.

use nalgebra::{Matrix3, Vector3};
use num_complex::Complex;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;
/// Convenient alias for three-by-three real matrices.
pub type R3x3 = Matrix3<Scalar>;
/// Primary complex scalar type used for phasors.
pub type CScalar = Complex<Scalar>;
/// Convenient alias for three-dimensional complex vectors.
pub type C3 = Vector3<CScalar>;

/// Returns the complex exponential `e^(j * theta)` using `Scalar` precision.
#[must_use]
pub fn phasor(theta: Scalar) -> CScalar {
    Complex::from_polar(1.0, theta)
}

/// Builds the complex vector `real + j * imaginary`.
#[must_use]
pub fn complex_vector(real: &R3, imaginary: &R3) -> C3 {
    real.zip_map(imaginary, Complex::new)
}

/// Real part of every component.
#[must_use]
pub fn real_part(v: &C3) -> R3 {
    v.map(|c| c.re)
}

/// Imaginary part of every component.
#[must_use]
pub fn imag_part(v: &C3) -> R3 {
    v.map(|c| c.im)
}

/// Unconjugated sum `Σ vᵢ·aᵢ` of a complex vector against a real one.
#[must_use]
pub fn dot_complex_real(v: &C3, a: &R3) -> CScalar {
    v.iter().zip(a.iter()).map(|(c, r)| *c * *r).sum()
}

/// Cross product `a × v` of a real vector with a complex vector.
#[must_use]
pub fn cross_real_complex(a: &R3, v: &C3) -> C3 {
    let a = a.map(CScalar::from);
    a.cross(v)
}

/// Applies a real matrix to a complex vector, rotating the real and imaginary
/// parts independently.
#[must_use]
pub fn apply_real_matrix(m: &R3x3, v: &C3) -> C3 {
    let re = m * real_part(v);
    let im = m * imag_part(v);
    complex_vector(&re, &im)
}

/// Euclidean norm of a complex vector, `sqrt(Σ |vᵢ|²)`.
#[must_use]
pub fn complex_norm(v: &C3) -> Scalar {
    v.iter().map(Complex::norm_sqr).sum::<Scalar>().sqrt()
}

/// Unconjugated bilinear product `Σ uᵢ·vᵢ` of two complex vectors.
#[must_use]
pub fn dot_complex(u: &C3, v: &C3) -> CScalar {
    u.iter().zip(v.iter()).map(|(a, b)| *a * *b).sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn cross_matches_componentwise_determinant() {
        let a = R3::new(0.0, 0.0, 1.0);
        let e = complex_vector(&R3::new(0.5, 0.0, 0.0), &R3::new(0.0, 0.5, 0.0));
        let h = cross_real_complex(&a, &e);
        // (0,0,1) x (0.5, 0.5j, 0) = (-0.5j, 0.5, 0)
        assert_relative_eq!(h[0].re, 0.0, epsilon = 1.0e-15);
        assert_relative_eq!(h[0].im, -0.5, epsilon = 1.0e-15);
        assert_relative_eq!(h[1].re, 0.5, epsilon = 1.0e-15);
        assert_relative_eq!(h[1].im, 0.0, epsilon = 1.0e-15);
        assert_eq!(h[2], CScalar::new(0.0, 0.0));
    }

    #[test]
    fn dot_keeps_imaginary_component() {
        let e = complex_vector(&R3::new(0.0, 0.0, 0.0), &R3::new(0.0, 0.0, 2.0));
        let d = dot_complex_real(&e, &R3::new(0.0, 0.0, 1.0));
        assert_relative_eq!(d.re, 0.0);
        assert_relative_eq!(d.im, 2.0);
    }

    #[test]
    fn matrix_application_splits_parts() {
        let m = R3x3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        let v = complex_vector(&R3::new(1.0, 0.0, 0.0), &R3::new(0.0, 0.0, 3.0));
        let out = apply_real_matrix(&m, &v);
        assert_relative_eq!(real_part(&out), R3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(imag_part(&out), R3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn complex_norm_counts_both_parts() {
        let v = complex_vector(&R3::new(1.0, 2.0, 0.0), &R3::new(0.0, 2.0, 4.0));
        assert_relative_eq!(complex_norm(&v), 5.0, epsilon = 1.0e-12);
    }

    #[test]
    fn cross_product_is_orthogonal_to_its_factor() {
        let a = R3::new(1.0, -2.0, 3.0);
        let v = complex_vector(&R3::new(0.3, 0.1, 0.0), &R3::new(-1.0, 0.0, 2.0));
        let w = cross_real_complex(&a, &v);
        assert_relative_eq!(dot_complex(&v, &w).norm(), 0.0, epsilon = 1.0e-12);
        assert_relative_eq!(dot_complex_real(&w, &a).norm(), 0.0, epsilon = 1.0e-12);
    }
}

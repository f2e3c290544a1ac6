//! Fixed-size 3-vector arithmetic (L0).
//!
//! The source keeps its own `Vec<T, 3>` template; here `nalgebra::Vector3`
//! already provides the arithmetic, so this module is reduced to the
//! norm/component-wise helpers the rest of the crate reaches for (the
//! equivalent of `utils/ArrayUtils.h`).

use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;

/// The Euclidean (L2) norm of a difference vector.
pub fn l2_norm(v: &Vec3) -> f64 {
    v.norm()
}

/// Squared L2 norm; avoids the `sqrt` on the hot pair-enumeration path.
pub fn l2_norm_squared(v: &Vec3) -> f64 {
    v.norm_squared()
}

/// The maximum-magnitude component (L∞ norm), used by convergence checks
/// in the surrounding minimizer/analytics tooling.
pub fn linf_norm(v: &Vec3) -> f64 {
    v.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()))
}

use crate::math::{Real, Vector};

/// Returns `true` if every component of `v` has a magnitude smaller than `threshold`.
#[inline]
pub fn is_tiny(v: &Vector<Real>, threshold: Real) -> bool {
    v.iter().all(|e| e.abs() < threshold)
}

/// Scales `v` by `factor` if all its components are smaller than `threshold`.
///
/// Cross products of nearly parallel edges quickly lose their magnitude. Support
/// queries are scale-invariant, but the dot products computed afterward are not, so
/// such vectors are brought back to a usable range before being used as directions.
#[inline]
pub fn rescale_if_tiny(v: Vector<Real>, threshold: Real, factor: Real) -> Vector<Real> {
    if is_tiny(&v, threshold) {
        v * factor
    } else {
        v
    }
}

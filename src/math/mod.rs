//! # Vector Math Helpers
//!
//! Small extensions over [`cgmath`] used throughout the mesh and render
//! modules. The crate leans on cgmath for vector arithmetic; this module only
//! adds the degenerate-input policies the rest of the code relies on:
//! normalizing a zero-length vector yields the zero vector, and scaling by a
//! zero divisor is reported as an explicit arithmetic error instead of
//! producing infinities.

use cgmath::{InnerSpace, Vector3};
use thiserror::Error;

/// Arithmetic failures surfaced by vector operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
}

/// Normalize a vector, returning the zero vector for zero-length input.
///
/// Degenerate directions (collapsed triangle edges, a camera looking at its
/// own position) flow through the pipeline as zero vectors rather than NaNs.
pub fn normalize_or_zero(v: Vector3<f32>) -> Vector3<f32> {
    let len = v.magnitude();
    if len == 0.0 {
        Vector3::new(0.0, 0.0, 0.0)
    } else {
        v / len
    }
}

/// Divide a vector by a scalar, rejecting a zero divisor.
pub fn div_scalar(v: Vector3<f32>, scalar: f32) -> Result<Vector3<f32>, MathError> {
    if scalar == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(v / scalar)
}

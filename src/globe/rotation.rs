// Globe orientation as an accumulated 3x3 rotation matrix.
//
// Incremental rotations (from drags or momentum) are left-composed onto the
// current orientation: `state ← delta · state`. The product of rotation
// matrices stays approximately orthonormal; no renormalization is applied.

use super::constants::AXIS_EPSILON;
use glam::{Mat3, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationMatrix(Mat3);

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl RotationMatrix {
    pub const IDENTITY: Self = Self(Mat3::IDENTITY);

    /// Build from nine row-major values.
    pub fn from_row_major(m: [f32; 9]) -> Self {
        // glam reads column-major; reading rows as columns then transposing
        // restores the intended layout.
        Self(Mat3::from_cols_array(&m).transpose())
    }

    /// Nine row-major values.
    pub fn to_row_major(&self) -> [f32; 9] {
        self.0.transpose().to_cols_array()
    }

    pub fn as_mat3(&self) -> &Mat3 {
        &self.0
    }

    /// Rodrigues rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized here; a near-zero axis returns the identity.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let len = axis.length();
        if len < AXIS_EPSILON {
            return Self::IDENTITY;
        }
        let Vec3 { x, y, z } = axis / len;
        let (s, c) = angle.sin_cos();
        let t = 1.0 - c;
        Self::from_row_major([
            t * x * x + c,
            t * x * y - s * z,
            t * x * z + s * y,
            t * x * y + s * z,
            t * y * y + c,
            t * y * z - s * x,
            t * x * z - s * y,
            t * y * z + s * x,
            t * z * z + c,
        ])
    }

    /// Rotation for a screen-space pointer delta.
    ///
    /// The axis lies perpendicular to the drag direction, `(-dy, dx, 0)`, and
    /// the angle grows linearly with the drag length.
    pub fn from_drag(delta: Vec2, sensitivity: f32) -> Self {
        let axis = Vec3::new(-delta.y, delta.x, 0.0);
        Self::from_axis_angle(axis, delta.length() * sensitivity)
    }

    /// Apply `delta` on top of this orientation (`delta · self`).
    #[must_use]
    pub fn compose(self, delta: RotationMatrix) -> Self {
        multiply(&delta, &self)
    }

    #[inline]
    pub fn rotate_point(&self, p: Vec3) -> Vec3 {
        self.0 * p
    }

    pub fn rotate_all_points(&self, points: &[Vec3]) -> Vec<Vec3> {
        points.iter().map(|&p| self.rotate_point(p)).collect()
    }
}

/// Row-major matrix product `a · b`.
#[inline]
pub fn multiply(a: &RotationMatrix, b: &RotationMatrix) -> RotationMatrix {
    RotationMatrix(a.0 * b.0)
}

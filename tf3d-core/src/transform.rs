/// Point transforms: translation, axis rotations and homogeneous matrices
use log::{debug, trace};
use nalgebra::{Matrix3, Matrix4, Point3};

use crate::error::{TransformError, TransformResult};
use crate::geometry::{self, Matrix4x4, Offset3D, Point3D, AFFINE_TOLERANCE};

/// Rotation about the three axes, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl EulerAngles {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Rotate by delta amounts (in degrees)
    pub fn rotate(&mut self, dx: f64, dy: f64, dz: f64) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }

    /// Rotate a point about X, then Y, then Z
    pub fn apply(&self, point: &Point3D) -> Point3D {
        let rotated = Transform3D::rotate_x(point, self.x);
        let rotated = Transform3D::rotate_y(&rotated, self.y);
        Transform3D::rotate_z(&rotated, self.z)
    }
}

/// Stateless 3D point transforms
pub struct Transform3D;

impl Transform3D {
    /// Move a point by `offset`, componentwise
    pub fn translate(point: &Point3D, offset: &Offset3D) -> Point3D {
        point + offset
    }

    /// Rotate a point about the X axis (right-handed)
    pub fn rotate_x(point: &Point3D, angle_degrees: f64) -> Point3D {
        Point3::from(Self::rotation_x_matrix(angle_degrees) * point.coords)
    }

    /// Rotate a point about the Y axis (right-handed)
    pub fn rotate_y(point: &Point3D, angle_degrees: f64) -> Point3D {
        Point3::from(Self::rotation_y_matrix(angle_degrees) * point.coords)
    }

    /// Rotate a point about the Z axis (right-handed)
    pub fn rotate_z(point: &Point3D, angle_degrees: f64) -> Point3D {
        Point3::from(Self::rotation_z_matrix(angle_degrees) * point.coords)
    }

    /// Rotate a point by Euler angles, X first
    pub fn rotate(point: &Point3D, angles: &EulerAngles) -> Point3D {
        angles.apply(point)
    }

    /// Apply a 4x4 homogeneous matrix to a point.
    ///
    /// The point is promoted to `(x, y, z, 1)` and the first three components
    /// of the product are returned. The resulting w is dropped, never divided
    /// by, so this is not `Matrix4::transform_point`. Matrices whose last row
    /// is not `[0, 0, 0, 1]` are accepted as-is.
    pub fn apply_transformation(point: &Point3D, matrix: &Matrix4x4) -> Point3D {
        let h = matrix * point.to_homogeneous();
        Point3D::new(h.x, h.y, h.z)
    }

    /// Like `apply_transformation`, but rejects projective matrices
    pub fn apply_affine_transformation(
        point: &Point3D,
        matrix: &Matrix4x4,
    ) -> TransformResult<Point3D> {
        if !geometry::is_affine(matrix, AFFINE_TOLERANCE) {
            let last_row = geometry::last_row(matrix);
            debug!("rejecting non-affine matrix with last row {:?}", last_row);
            return Err(TransformError::not_affine(last_row));
        }
        Ok(Self::apply_transformation(point, matrix))
    }

    pub fn try_rotate_x(point: &Point3D, angle_degrees: f64) -> TransformResult<Point3D> {
        Ok(Self::rotate_x(point, Self::finite(angle_degrees)?))
    }

    pub fn try_rotate_y(point: &Point3D, angle_degrees: f64) -> TransformResult<Point3D> {
        Ok(Self::rotate_y(point, Self::finite(angle_degrees)?))
    }

    pub fn try_rotate_z(point: &Point3D, angle_degrees: f64) -> TransformResult<Point3D> {
        Ok(Self::rotate_z(point, Self::finite(angle_degrees)?))
    }

    fn finite(angle_degrees: f64) -> TransformResult<f64> {
        if angle_degrees.is_finite() {
            Ok(angle_degrees)
        } else {
            debug!("rejecting non-finite angle {}", angle_degrees);
            Err(TransformError::NonFiniteAngle(angle_degrees))
        }
    }

    /// Rotation matrix about the X axis
    pub fn rotation_x_matrix(angle_degrees: f64) -> Matrix3<f64> {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        )
    }

    /// Rotation matrix about the Y axis
    pub fn rotation_y_matrix(angle_degrees: f64) -> Matrix3<f64> {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        Matrix3::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        )
    }

    /// Rotation matrix about the Z axis
    pub fn rotation_z_matrix(angle_degrees: f64) -> Matrix3<f64> {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        )
    }

    /// Embed a 3x3 linear map in a homogeneous matrix
    pub fn homogeneous(linear: &Matrix3<f64>) -> Matrix4x4 {
        linear.to_homogeneous()
    }

    /// Create a rotation matrix from Euler angles
    pub fn rotation_matrix(angles: &EulerAngles) -> Matrix4x4 {
        let rx = Self::rotation_x_matrix(angles.x);
        let ry = Self::rotation_y_matrix(angles.y);
        let rz = Self::rotation_z_matrix(angles.z);

        // Apply rotations in order: X, Y, Z
        let matrix = (rz * ry * rx).to_homogeneous();
        trace!("rotation matrix for {:?}: {}", angles, matrix);
        matrix
    }

    /// Create a translation matrix
    pub fn translation_matrix(offset: &Offset3D) -> Matrix4x4 {
        Matrix4::new_translation(offset)
    }

    /// Matrix applying `first`, then `second`
    pub fn compose(first: &Matrix4x4, second: &Matrix4x4) -> Matrix4x4 {
        second * first
    }
}

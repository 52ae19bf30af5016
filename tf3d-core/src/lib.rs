/// TF3D Core Library - Stateless 3D point transforms
///
/// This library provides translation, axis-aligned rotations and homogeneous
/// 4x4 matrix application over fixed-size `nalgebra` types.

pub mod error;
pub mod geometry;
pub mod transform;

// Re-export commonly used types
pub use error::{TransformError, TransformResult};
pub use geometry::{Matrix4x4, Offset3D, Point3D, AFFINE_TOLERANCE};
pub use transform::{EulerAngles, Transform3D};

/// Value types for points, offsets and homogeneous matrices
use log::debug;
use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::{TransformError, TransformResult};

/// A point in 3D space
pub type Point3D = Point3<f64>;

/// A displacement applied by translation
pub type Offset3D = Vector3<f64>;

/// A 4x4 homogeneous transform, built row by row with `Matrix4::new`
pub type Matrix4x4 = Matrix4<f64>;

/// Largest deviation from `[0, 0, 0, 1]` tolerated in a matrix's last row
pub const AFFINE_TOLERANCE: f64 = 1e-12;

/// Build a point from a slice of exactly three coordinates
pub fn point_from_slice(coords: &[f64]) -> TransformResult<Point3D> {
    match *coords {
        [x, y, z] => Ok(Point3D::new(x, y, z)),
        _ => {
            debug!("rejecting point with {} components", coords.len());
            Err(TransformError::invalid_dimension("point", 3, coords.len()))
        }
    }
}

/// Build a translation offset from a slice of exactly three components
pub fn offset_from_slice(components: &[f64]) -> TransformResult<Offset3D> {
    match *components {
        [x, y, z] => Ok(Offset3D::new(x, y, z)),
        _ => {
            debug!("rejecting offset with {} components", components.len());
            Err(TransformError::invalid_dimension("offset", 3, components.len()))
        }
    }
}

/// Build a 4x4 matrix from four rows of four values each
pub fn matrix_from_rows(rows: &[&[f64]]) -> TransformResult<Matrix4x4> {
    if rows.len() != 4 {
        debug!("rejecting matrix with {} rows", rows.len());
        return Err(TransformError::invalid_dimension("matrix rows", 4, rows.len()));
    }

    let mut matrix = Matrix4x4::zeros();
    for (i, row) in rows.iter().enumerate() {
        if row.len() != 4 {
            debug!("rejecting matrix row {} with {} columns", i, row.len());
            return Err(TransformError::invalid_dimension("matrix row", 4, row.len()));
        }
        for (j, value) in row.iter().enumerate() {
            matrix[(i, j)] = *value;
        }
    }

    Ok(matrix)
}

/// Last row of a homogeneous matrix
pub fn last_row(matrix: &Matrix4x4) -> [f64; 4] {
    [matrix[(3, 0)], matrix[(3, 1)], matrix[(3, 2)], matrix[(3, 3)]]
}

/// Whether the matrix's last row is `[0, 0, 0, 1]` within `tolerance`
pub fn is_affine(matrix: &Matrix4x4, tolerance: f64) -> bool {
    last_row(matrix)
        .iter()
        .zip([0.0, 0.0, 0.0, 1.0])
        .all(|(actual, expected)| (actual - expected).abs() <= tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_from_slice() {
        let point = point_from_slice(&[6.0, 19.0, 14.0]).unwrap();
        assert_eq!(point, Point3D::new(6.0, 19.0, 14.0));
    }

    #[test]
    fn test_point_wrong_dimension() {
        let err = point_from_slice(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, TransformError::invalid_dimension("point", 3, 2));

        let err = point_from_slice(&[1.0, 2.0, 3.0, 1.0]).unwrap_err();
        assert_eq!(err, TransformError::invalid_dimension("point", 3, 4));
    }

    #[test]
    fn test_offset_wrong_dimension() {
        assert!(offset_from_slice(&[]).is_err());
        assert_eq!(
            offset_from_slice(&[19.0, 19.0, 9.0]).unwrap(),
            Offset3D::new(19.0, 19.0, 9.0)
        );
    }

    #[test]
    fn test_matrix_from_rows_is_row_major() {
        let rows: [&[f64]; 4] = [
            &[1.0, 2.0, 3.0, 4.0],
            &[5.0, 6.0, 7.0, 8.0],
            &[9.0, 10.0, 11.0, 12.0],
            &[0.0, 0.0, 0.0, 1.0],
        ];
        let matrix = matrix_from_rows(&rows).unwrap();
        assert_eq!(matrix[(0, 3)], 4.0);
        assert_eq!(matrix[(1, 0)], 5.0);
        assert_eq!(last_row(&matrix), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_matrix_from_rows_rejects_bad_shapes() {
        let three_rows: [&[f64]; 3] = [&[1.0; 4], &[1.0; 4], &[1.0; 4]];
        assert_eq!(
            matrix_from_rows(&three_rows).unwrap_err(),
            TransformError::invalid_dimension("matrix rows", 4, 3)
        );

        let short_row: [&[f64]; 4] = [&[1.0; 4], &[1.0; 3], &[1.0; 4], &[1.0; 4]];
        assert_eq!(
            matrix_from_rows(&short_row).unwrap_err(),
            TransformError::invalid_dimension("matrix row", 4, 3)
        );
    }

    #[test]
    fn test_is_affine() {
        assert!(is_affine(&Matrix4x4::identity(), AFFINE_TOLERANCE));

        let mut projective = Matrix4x4::identity();
        projective[(3, 2)] = 1.0;
        assert!(!is_affine(&projective, AFFINE_TOLERANCE));
        assert!(is_affine(&projective, 1.0));
    }
}

// Rotation generators: principal-axis rotation matrices for goniometer circles
// Each generator maps an angle in radians to an orthogonal matrix with determinant +1

use nalgebra::Matrix3;

/// Right-handed rotation about the x-axis.
pub fn rotation_x_pos(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, -s,
        0.0, s, c,
    )
}

/// Rotation about the x-axis in the negative sense.
pub fn rotation_x_neg(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c, s,
        0.0, -s, c,
    )
}

/// Right-handed rotation about the y-axis.
pub fn rotation_y_pos(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, s,
        0.0, 1.0, 0.0,
        -s, 0.0, c,
    )
}

/// Rotation about the y-axis in the negative sense.
pub fn rotation_y_neg(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, 0.0, -s,
        0.0, 1.0, 0.0,
        s, 0.0, c,
    )
}

/// Right-handed rotation about the z-axis.
pub fn rotation_z_pos(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, -s, 0.0,
        s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

/// Rotation about the z-axis in the negative sense.
pub fn rotation_z_neg(angle: f64) -> Matrix3<f64> {
    let (s, c) = angle.sin_cos();
    Matrix3::new(
        c, s, 0.0,
        -s, c, 0.0,
        0.0, 0.0, 1.0,
    )
}

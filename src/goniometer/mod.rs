// Goniometer module: circle specifications and rotation matrix generation
// This module resolves axis specification strings and composes per-circle rotations

// ======================== MODULE DECLARATIONS ========================
pub mod circle;
pub mod rotations;


// ======================== CIRCLE SPECIFICATION & RESOLUTION ========================
pub use circle::{
    CircleSpec,      // struct - axis + rotation sense of one goniometer circle
    compose_circles, // fn(circles: &[CircleSpec], angles: &[f64]) -> Matrix3<f64> - composes rotations, circle 0 outermost
    resolve_axes,    // fn(spec: &str, role: AxisRole) -> Result<Vec<CircleSpec>> - parses an axis specification string
};

// ======================== ROTATION GENERATORS ========================
pub use rotations::{
    rotation_x_neg, // fn(angle: f64) -> Matrix3<f64> - rotation about x, negative sense
    rotation_x_pos, // fn(angle: f64) -> Matrix3<f64> - right-handed rotation about x
    rotation_y_neg, // analogous about y
    rotation_y_pos,
    rotation_z_neg, // analogous about z
    rotation_z_pos,
};

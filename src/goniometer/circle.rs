use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};

use crate::error::QConversionError;
use crate::goniometer::rotations;
use crate::interfaces::{Axis, AxisRole, Sense};

/// One rotational degree of freedom of the sample or detector stage.
///
/// A circle is described by its laboratory-frame rotation axis and the sense
/// in which a positive angle turns the stage. The six possible combinations
/// correspond to the axis specification pairs `x+`, `x-`, `y+`, `y-`, `z+`,
/// `z-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub axis: Axis,
    pub sense: Sense,
}

impl CircleSpec {
    pub fn new(axis: Axis, sense: Sense) -> Self {
        Self { axis, sense }
    }

    /// Rotation matrix of this circle at the given angle (radians).
    pub fn rotation(&self, angle: f64) -> Matrix3<f64> {
        match (self.axis, self.sense) {
            (Axis::X, Sense::Positive) => rotations::rotation_x_pos(angle),
            (Axis::X, Sense::Negative) => rotations::rotation_x_neg(angle),
            (Axis::Y, Sense::Positive) => rotations::rotation_y_pos(angle),
            (Axis::Y, Sense::Negative) => rotations::rotation_y_neg(angle),
            (Axis::Z, Sense::Positive) => rotations::rotation_z_pos(angle),
            (Axis::Z, Sense::Negative) => rotations::rotation_z_neg(angle),
        }
    }
}

/// Resolve an axis specification string into circle specs.
///
/// The string holds two characters per circle: a case-insensitive axis letter
/// (`x`, `y` or `z`) followed by a sense character (`+` or `-`), e.g. `"x+y-"`
/// for a two-circle stage. Circle order in the string is outermost first.
///
/// Any malformed pair fails the whole resolution; no partial circle list is
/// returned and no default axis is substituted.
pub fn resolve_axes(spec: &str, role: AxisRole) -> Result<Vec<CircleSpec>, QConversionError> {
    let chars: Vec<char> = spec.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(QConversionError::SpecLength {
            role,
            len: chars.len(),
        });
    }

    let mut circles = Vec::with_capacity(chars.len() / 2);
    for (circle, pair) in chars.chunks(2).enumerate() {
        let axis = match pair[0].to_ascii_lowercase() {
            'x' => Axis::X,
            'y' => Axis::Y,
            'z' => Axis::Z,
            _ => {
                return Err(QConversionError::InvalidAxis {
                    role,
                    circle,
                    letter: pair[0],
                })
            }
        };
        let sense = match pair[1] {
            '+' => Sense::Positive,
            '-' => Sense::Negative,
            _ => {
                return Err(QConversionError::InvalidSign {
                    role,
                    circle,
                    sign: pair[1],
                })
            }
        };
        circles.push(CircleSpec::new(axis, sense));
    }

    Ok(circles)
}

/// Compose per-circle rotations in ascending circle order.
///
/// Circle 0 is the outermost stage: its rotation is applied first and every
/// following circle composes onto the right of the running product, so the
/// result is R_0 * R_1 * ... * R_{n-1}. With all angles zero this is exactly
/// the identity.
pub fn compose_circles(circles: &[CircleSpec], angles: &[f64]) -> Matrix3<f64> {
    debug_assert_eq!(circles.len(), angles.len());

    circles
        .iter()
        .zip(angles)
        .fold(Matrix3::identity(), |product, (circle, &angle)| {
            product * circle.rotation(angle)
        })
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::QConversionError;
use crate::interfaces::{Axis, Sense};

/// Direction of a detector pixel axis in the laboratory frame.
///
/// Parsed from a two-character specification such as `"z+"`: a
/// case-insensitive axis letter followed by a sign character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelDirection {
    pub axis: Axis,
    pub sense: Sense,
}

impl PixelDirection {
    pub fn new(axis: Axis, sense: Sense) -> Self {
        Self { axis, sense }
    }

    /// Parse a two-character direction specification.
    pub fn parse(direction: &str) -> Result<Self, QConversionError> {
        let chars: Vec<char> = direction.chars().collect();
        let [letter, sign] = chars.as_slice() else {
            return Err(QConversionError::DirectionLength { len: chars.len() });
        };

        let axis = match letter.to_ascii_lowercase() {
            'x' => Axis::X,
            'y' => Axis::Y,
            'z' => Axis::Z,
            _ => return Err(QConversionError::InvalidDirectionAxis { letter: *letter }),
        };
        let sense = match sign {
            '+' => Sense::Positive,
            '-' => Sense::Negative,
            _ => return Err(QConversionError::InvalidDirectionSign { sign: *sign }),
        };

        Ok(Self { axis, sense })
    }

    /// Physical displacement between two adjacent pixels along this axis.
    ///
    /// The returned vector has a single non-zero component of magnitude
    /// `pitch`, signed by the direction's sense.
    pub fn step(&self, pitch: f64) -> Vector3<f64> {
        let component = self.sense.signum() * pitch;
        match self.axis {
            Axis::X => Vector3::new(component, 0.0, 0.0),
            Axis::Y => Vector3::new(0.0, component, 0.0),
            Axis::Z => Vector3::new(0.0, 0.0, component),
        }
    }
}

/// Resolve a direction specification and scale it by the pixel pitch.
pub fn pixel_step_vector(direction: &str, pitch: f64) -> Result<Vector3<f64>, QConversionError> {
    Ok(PixelDirection::parse(direction)?.step(pitch))
}

/// Inclusive-exclusive channel index range actually converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roi {
    pub lo: usize,
    pub hi: usize,
}

impl Roi {
    pub fn new(lo: usize, hi: usize) -> Self {
        Self { lo, hi }
    }

    /// Range covering every channel of a detector.
    pub fn full(channels: usize) -> Self {
        Self {
            lo: 0,
            hi: channels,
        }
    }

    /// Number of channels in the range. `hi <= lo` is an empty range, not an
    /// error.
    pub fn len(&self) -> usize {
        self.hi.saturating_sub(self.lo)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rescale the range for channel averaging, merging `averaging` adjacent
    /// channels into one. An averaging factor of 0 behaves as 1.
    pub fn averaged(&self, averaging: usize) -> Self {
        let averaging = averaging.max(1);
        Self {
            lo: self.lo.div_ceil(averaging),
            hi: self.hi.div_ceil(averaging),
        }
    }
}

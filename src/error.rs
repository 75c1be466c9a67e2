use thiserror::Error;

use crate::interfaces::AxisRole;

/// Errors raised during the sequential setup phase of a conversion call.
///
/// Every variant is detected before any parallel work begins; a failed call
/// produces no momentum-transfer output at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QConversionError {
    /// Unrecognized axis letter in a circle specification
    #[error("{role} axis specification: invalid axis letter '{letter}' for circle {circle}")]
    InvalidAxis {
        role: AxisRole,
        circle: usize,
        letter: char,
    },

    /// Unrecognized rotation sense character in a circle specification
    #[error("{role} axis specification: invalid rotation sense '{sign}' for circle {circle}")]
    InvalidSign {
        role: AxisRole,
        circle: usize,
        sign: char,
    },

    /// Axis specification string is not two characters per circle
    #[error("{role} axis specification has length {len}, expected two characters per circle")]
    SpecLength { role: AxisRole, len: usize },

    /// Unrecognized axis letter in a detector pixel direction
    #[error("detector direction: invalid axis letter '{letter}'")]
    InvalidDirectionAxis { letter: char },

    /// Unrecognized sign character in a detector pixel direction
    #[error("detector direction: invalid sign '{sign}'")]
    InvalidDirectionSign { sign: char },

    /// Detector pixel direction string is not exactly two characters
    #[error("detector direction has length {len}, expected an axis letter and a sign")]
    DirectionLength { len: usize },

    /// Beam or center-channel vector too short to define a direction
    #[error("beam / center-channel direction has near-zero length")]
    DegenerateBeam,

    /// Wavelength must be positive and finite
    #[error("invalid wavelength {wavelength}")]
    InvalidWavelength { wavelength: f64 },

    /// Flattened angle array does not hold circles-per-position rows
    #[error("{role} angle array has length {len}, expected {expected} (positions x circles)")]
    AngleShape {
        role: AxisRole,
        len: usize,
        expected: usize,
    },

    /// Wrong number of per-circle angle columns passed to the wrapper
    #[error("expected {expected} angle columns (sample + detector circles), got {found}")]
    CircleCount { expected: usize, found: usize },

    /// Angle columns passed to the wrapper differ in length
    #[error("angle column has length {found}, expected {expected}")]
    ColumnLength { expected: usize, found: usize },

    /// Misalignment offset array does not match the circle count
    #[error("misalignment offsets: expected {expected} values, got {found}")]
    DeltaShape { expected: usize, found: usize },

    /// Linear conversion requested before a linear detector was attached
    #[error("linear detector geometry not initialized")]
    LinearDetectorUninitialized,

    /// Area conversion requested before an area detector was attached
    #[error("area detector geometry not initialized")]
    AreaDetectorUninitialized,

    /// Dedicated worker pool could not be constructed
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}


//! Angular to reciprocal-space conversion for multi-circle goniometers
//!
//! This library converts batches of goniometer angles (sample stage + detector
//! arm, each built from an arbitrary sequence of rotation circles) into
//! momentum-transfer vectors Q for point, linear and area detectors.

pub mod config;
pub mod conversion;
pub mod detector;
pub mod error;
pub mod goniometer;
pub mod interfaces;

pub use conversion::{
    ang2q_area, ang2q_linear, ang2q_point, ConversionOptions, GoniometerBatch, Parallelism,
    QConversion,
};
pub use detector::{AreaGeometry, LinearGeometry, PixelDirection, Roi};
pub use error::QConversionError;
pub use goniometer::{compose_circles, resolve_axes, CircleSpec};

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, error::QConversionError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}

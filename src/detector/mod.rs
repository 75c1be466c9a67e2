// Detector module: pixel-array detector directions and geometry
// This module resolves pixel-axis direction strings and describes linear / area detectors

// ======================== MODULE DECLARATIONS ========================
pub mod geometry;
pub mod pixel;

// Test modules
mod _tests_geometry;
mod _tests_pixel;

// ======================== PIXEL DIRECTIONS & REGIONS OF INTEREST ========================
pub use pixel::{
    pixel_step_vector, // fn(direction: &str, pitch: f64) -> Result<Vector3<f64>> - displacement between adjacent pixels
    PixelDirection,    // struct - axis + sense of a detector pixel axis
    Roi,               // struct - inclusive-exclusive channel range actually converted
};

// ======================== DETECTOR GEOMETRIES ========================
pub use geometry::{
    AreaGeometry,   // struct - two-axis pixel-array detector (center pixel, pitches, ROIs)
    LinearGeometry, // struct - one-axis pixel-array detector (center channel, pitch, ROI)
};

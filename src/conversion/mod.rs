// Conversion module: batch conversion of goniometer angles to momentum transfer
// This module holds the three detector entry points and the experiment-level wrapper

// ======================== MODULE DECLARATIONS ========================
pub mod engine;
pub mod experiment;


// ======================== CONVERSION ENTRY POINTS ========================
pub use engine::{
    ang2q_area,      // fn(batch, axes, center channel, geometry, wavelength, parallelism) -> Result<Vec<Vector3<f64>>>
    ang2q_linear,    // fn(batch, axes, center channel, geometry, wavelength, parallelism) -> Result<Vec<Vector3<f64>>>
    ang2q_point,     // fn(batch, axes, beam direction, wavelength, parallelism) -> Result<Vec<Vector3<f64>>>
    GoniometerBatch, // struct - borrowed row-major angle arrays, one row per position
    Parallelism,     // enum - worker fan-out policy (Sequential / Auto / Threads)
};

// ======================== EXPERIMENT-LEVEL WRAPPER ========================
pub use experiment::{
    ConversionOptions, // struct - per-call options (degrees, offsets, wavelength, ROI overrides)
    QConversion,       // struct - goniometer description + detector geometry + conversion methods
};

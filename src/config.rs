// Constants

// Tolerances
pub const BEAM_TOLERANCE: f64 = 1e-10; // For rejecting degenerate beam / center-channel vectors

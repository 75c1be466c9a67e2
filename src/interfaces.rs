// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};
use std::fmt;

// Enumeration for the principal laboratory-frame axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

// Enumeration for the sense of a rotation or pixel direction along its axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sense {
    Positive,
    Negative,
}

impl Sense {
    pub fn signum(self) -> f64 {
        match self {
            Sense::Positive => 1.0,
            Sense::Negative => -1.0,
        }
    }
}

// Enumeration to track which goniometer side an axis specification belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisRole {
    Sample,
    Detector,
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::Sample => write!(f, "sample"),
            AxisRole::Detector => write!(f, "detector"),
        }
    }
}

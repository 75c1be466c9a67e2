use serde::{Deserialize, Serialize};

use crate::detector::pixel::{PixelDirection, Roi};
use crate::error::QConversionError;

/// Linear (one-axis) pixel-array detector geometry.
///
/// The center channel points along the primary beam when all detector angles
/// are zero; `pixel_width` and `distance` share one length unit, only their
/// ratio enters the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGeometry {
    /// Direction of increasing channel number
    pub direction: PixelDirection,
    /// Channel corresponding to zero detector-axis offset (may be fractional)
    pub center_channel: f64,
    /// Total number of channels
    pub channels: usize,
    /// Distance of the center channel from the center of rotation
    pub distance: f64,
    /// Width of one pixel
    pub pixel_width: f64,
    /// Default region of interest
    pub roi: Roi,
    /// Channel averaging factor (1 = no averaging)
    pub averaging: usize,
}

impl LinearGeometry {
    pub fn new(
        direction: &str,
        center_channel: f64,
        channels: usize,
        distance: f64,
        pixel_width: f64,
    ) -> Result<Self, QConversionError> {
        Ok(Self {
            direction: PixelDirection::parse(direction)?,
            center_channel,
            channels,
            distance,
            pixel_width,
            roi: Roi::full(channels),
            averaging: 1,
        })
    }

    /// Calibrate the pixel width from channels per degree of arm rotation.
    ///
    /// Places the center channel at unit distance; one channel then subtends
    /// `1 / |chpdeg|` degrees, giving a width of `2 * tan(0.5 deg) / |chpdeg|`.
    pub fn from_channels_per_degree(
        direction: &str,
        center_channel: f64,
        channels: usize,
        chpdeg: f64,
    ) -> Result<Self, QConversionError> {
        let pixel_width = 2.0 * 0.5_f64.to_radians().tan() / chpdeg.abs();
        Self::new(direction, center_channel, channels, 1.0, pixel_width)
    }

    pub fn with_roi(mut self, roi: Roi) -> Self {
        self.roi = roi;
        self
    }

    pub fn with_averaging(mut self, averaging: usize) -> Self {
        self.averaging = averaging;
        self
    }

    /// Effective center channel, pixel width and ROI after channel averaging.
    pub(crate) fn effective(&self) -> (f64, f64, Roi) {
        let averaging = self.averaging.max(1);
        (
            self.center_channel / averaging as f64,
            self.pixel_width * averaging as f64,
            self.roi.averaged(averaging),
        )
    }
}

/// Area (two-axis) pixel-array detector geometry.
///
/// The center pixel `(center_channel1, center_channel2)` points along the
/// primary beam at zero detector angles. The two pixel axes need not be
/// orthogonal but must be linearly independent for the geometry to be
/// meaningful; this is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    /// Direction of increasing channel number along the first pixel axis
    pub direction1: PixelDirection,
    /// Direction of increasing channel number along the second pixel axis
    pub direction2: PixelDirection,
    pub center_channel1: f64,
    pub center_channel2: f64,
    pub channels1: usize,
    pub channels2: usize,
    /// Distance of the center pixel from the center of rotation
    pub distance: f64,
    pub pixel_width1: f64,
    pub pixel_width2: f64,
    pub roi1: Roi,
    pub roi2: Roi,
    pub averaging1: usize,
    pub averaging2: usize,
}

impl AreaGeometry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        direction1: &str,
        direction2: &str,
        center_channel1: f64,
        center_channel2: f64,
        channels1: usize,
        channels2: usize,
        distance: f64,
        pixel_width1: f64,
        pixel_width2: f64,
    ) -> Result<Self, QConversionError> {
        Ok(Self {
            direction1: PixelDirection::parse(direction1)?,
            direction2: PixelDirection::parse(direction2)?,
            center_channel1,
            center_channel2,
            channels1,
            channels2,
            distance,
            pixel_width1,
            pixel_width2,
            roi1: Roi::full(channels1),
            roi2: Roi::full(channels2),
            averaging1: 1,
            averaging2: 1,
        })
    }

    /// Calibrate both pixel widths from channels per degree of arm rotation.
    #[allow(clippy::too_many_arguments)]
    pub fn from_channels_per_degree(
        direction1: &str,
        direction2: &str,
        center_channel1: f64,
        center_channel2: f64,
        channels1: usize,
        channels2: usize,
        chpdeg1: f64,
        chpdeg2: f64,
    ) -> Result<Self, QConversionError> {
        let half_degree = 0.5_f64.to_radians().tan();
        Self::new(
            direction1,
            direction2,
            center_channel1,
            center_channel2,
            channels1,
            channels2,
            1.0,
            2.0 * half_degree / chpdeg1.abs(),
            2.0 * half_degree / chpdeg2.abs(),
        )
    }

    pub fn with_roi(mut self, roi1: Roi, roi2: Roi) -> Self {
        self.roi1 = roi1;
        self.roi2 = roi2;
        self
    }

    pub fn with_averaging(mut self, averaging1: usize, averaging2: usize) -> Self {
        self.averaging1 = averaging1;
        self.averaging2 = averaging2;
        self
    }

    /// Effective per-axis (center channel, pixel width, ROI) after averaging.
    pub(crate) fn effective(&self) -> ((f64, f64, Roi), (f64, f64, Roi)) {
        let nav1 = self.averaging1.max(1);
        let nav2 = self.averaging2.max(1);
        (
            (
                self.center_channel1 / nav1 as f64,
                self.pixel_width1 * nav1 as f64,
                self.roi1.averaged(nav1),
            ),
            (
                self.center_channel2 / nav2 as f64,
                self.pixel_width2 * nav2 as f64,
                self.roi2.averaged(nav2),
            ),
        )
    }
}

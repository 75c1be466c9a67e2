// Experiment-level wrapper: owns the goniometer description and detector
// geometry, accepts per-circle angle columns in degrees and handles
// misalignment offsets before delegating to the conversion engine.

use nalgebra::Vector3;

use crate::conversion::engine::{
    ang2q_area, ang2q_linear, ang2q_point, unit_direction, wavenumber, GoniometerBatch,
    Parallelism,
};
use crate::detector::{AreaGeometry, LinearGeometry, Roi};
use crate::error::QConversionError;
use crate::goniometer::resolve_axes;
use crate::interfaces::AxisRole;
use crate::Result;

/// Per-call conversion options.
///
/// The defaults match a typical beamline workflow: angles in degrees, no
/// misalignment correction, the experiment's own wavelength and detector
/// configuration.
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Angles are given in degrees (the native goniometer unit)
    pub degrees: bool,
    /// Per-circle misalignment offsets, subtracted from the input angles
    /// before conversion; length Ns + Nd, same unit as the angles
    pub delta: Option<Vec<f64>>,
    /// Override the experiment wavelength for this call
    pub wavelength: Option<f64>,
    /// Override the linear detector ROI for this call
    pub roi: Option<Roi>,
    /// Override the area detector ROI for this call
    pub area_roi: Option<(Roi, Roi)>,
    /// Override the linear channel averaging factor for this call
    pub averaging: Option<usize>,
    /// Override the area channel averaging factors for this call
    pub area_averaging: Option<(usize, usize)>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            degrees: true,
            delta: None,
            wavelength: None,
            roi: None,
            area_roi: None,
            averaging: None,
            area_averaging: None,
        }
    }
}

/// Angular to momentum-space conversion for one experimental setup.
///
/// Describes the goniometer once (circle order is outermost first, the
/// primary beam points along `beam_direction` when all angles are zero) and
/// converts any number of angle batches against it. Detector geometries are
/// attached with [`QConversion::init_linear`] / [`QConversion::init_area`].
#[derive(Debug, Clone)]
pub struct QConversion {
    sample_axes: String,
    detector_axes: String,
    sample_circles: usize,
    detector_circles: usize,
    beam_direction: Vector3<f64>,
    wavelength: f64,
    parallelism: Parallelism,
    linear: Option<LinearGeometry>,
    area: Option<AreaGeometry>,
}

impl QConversion {
    /// Validate the goniometer description up front.
    ///
    /// `wavelength` is in the same length unit the momentum transfer should
    /// be reciprocal to (Angstroem for X-ray work).
    pub fn new(
        sample_axes: &str,
        detector_axes: &str,
        beam_direction: Vector3<f64>,
        wavelength: f64,
    ) -> Result<Self> {
        let sample = resolve_axes(sample_axes, AxisRole::Sample)?;
        let detector = resolve_axes(detector_axes, AxisRole::Detector)?;
        unit_direction(beam_direction)?;
        wavenumber(wavelength)?;

        Ok(Self {
            sample_axes: sample_axes.to_string(),
            detector_axes: detector_axes.to_string(),
            sample_circles: sample.len(),
            detector_circles: detector.len(),
            beam_direction,
            wavelength,
            parallelism: Parallelism::default(),
            linear: None,
            area: None,
        })
    }

    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Attach a linear detector geometry.
    pub fn init_linear(&mut self, geometry: LinearGeometry) {
        self.linear = Some(geometry);
    }

    /// Attach an area detector geometry.
    pub fn init_area(&mut self, geometry: AreaGeometry) {
        self.area = Some(geometry);
    }

    pub fn sample_circles(&self) -> usize {
        self.sample_circles
    }

    pub fn detector_circles(&self) -> usize {
        self.detector_circles
    }

    pub fn wavelength(&self) -> f64 {
        self.wavelength
    }

    /// Convert for a point detector.
    ///
    /// `angles` holds one column per circle, outermost sample circle first,
    /// then the detector circles; all columns must have equal length (the
    /// number of positions).
    pub fn point(
        &self,
        angles: &[&[f64]],
        options: &ConversionOptions,
    ) -> Result<Vec<Vector3<f64>>> {
        let (sample, detector, npoints) = self.prepare(angles, options)?;
        let batch = GoniometerBatch::new(&sample, &detector, npoints);
        ang2q_point(
            &batch,
            &self.sample_axes,
            &self.detector_axes,
            self.beam_direction,
            options.wavelength.unwrap_or(self.wavelength),
            self.parallelism,
        )
    }

    /// Convert for the attached linear detector.
    pub fn linear(
        &self,
        angles: &[&[f64]],
        options: &ConversionOptions,
    ) -> Result<Vec<Vector3<f64>>> {
        let mut geometry = self
            .linear
            .clone()
            .ok_or(QConversionError::LinearDetectorUninitialized)?;
        if let Some(roi) = options.roi {
            geometry.roi = roi;
        }
        if let Some(averaging) = options.averaging {
            geometry.averaging = averaging;
        }

        let (sample, detector, npoints) = self.prepare(angles, options)?;
        let batch = GoniometerBatch::new(&sample, &detector, npoints);
        ang2q_linear(
            &batch,
            &self.sample_axes,
            &self.detector_axes,
            unit_direction(self.beam_direction)? * geometry.distance,
            &geometry,
            options.wavelength.unwrap_or(self.wavelength),
            self.parallelism,
        )
    }

    /// Convert for the attached area detector.
    pub fn area(
        &self,
        angles: &[&[f64]],
        options: &ConversionOptions,
    ) -> Result<Vec<Vector3<f64>>> {
        let mut geometry = self
            .area
            .clone()
            .ok_or(QConversionError::AreaDetectorUninitialized)?;
        if let Some((roi1, roi2)) = options.area_roi {
            geometry.roi1 = roi1;
            geometry.roi2 = roi2;
        }
        if let Some((averaging1, averaging2)) = options.area_averaging {
            geometry.averaging1 = averaging1;
            geometry.averaging2 = averaging2;
        }

        let (sample, detector, npoints) = self.prepare(angles, options)?;
        let batch = GoniometerBatch::new(&sample, &detector, npoints);
        ang2q_area(
            &batch,
            &self.sample_axes,
            &self.detector_axes,
            unit_direction(self.beam_direction)? * geometry.distance,
            &geometry,
            options.wavelength.unwrap_or(self.wavelength),
            self.parallelism,
        )
    }

    /// Assemble the row-major batch arrays from per-circle columns, applying
    /// misalignment offsets and degree conversion.
    fn prepare(
        &self,
        angles: &[&[f64]],
        options: &ConversionOptions,
    ) -> Result<(Vec<f64>, Vec<f64>, usize)> {
        let circles = self.sample_circles + self.detector_circles;
        if angles.len() != circles {
            return Err(QConversionError::CircleCount {
                expected: circles,
                found: angles.len(),
            });
        }

        let npoints = angles.first().map_or(0, |column| column.len());
        for column in angles {
            if column.len() != npoints {
                return Err(QConversionError::ColumnLength {
                    expected: npoints,
                    found: column.len(),
                });
            }
        }

        let delta = match &options.delta {
            Some(delta) if delta.len() != circles => {
                return Err(QConversionError::DeltaShape {
                    expected: circles,
                    found: delta.len(),
                });
            }
            Some(delta) => delta.as_slice(),
            None => &[],
        };
        let offset = |circle: usize| delta.get(circle).copied().unwrap_or(0.0);
        let to_radians = |angle: f64| if options.degrees { angle.to_radians() } else { angle };

        let mut sample = Vec::with_capacity(npoints * self.sample_circles);
        let mut detector = Vec::with_capacity(npoints * self.detector_circles);
        for position in 0..npoints {
            for (circle, column) in angles[..self.sample_circles].iter().enumerate() {
                sample.push(to_radians(column[position] - offset(circle)));
            }
            for (circle, column) in angles[self.sample_circles..].iter().enumerate() {
                detector.push(to_radians(
                    column[position] - offset(self.sample_circles + circle),
                ));
            }
        }

        Ok((sample, detector, npoints))
    }
}

// Momentum-transfer engine: converts batches of goniometer positions to Q vectors
// Setup (axis and direction resolution, beam checks) runs sequentially before the
// per-position loop fans out; each position writes its own disjoint output chunk.

use std::f64::consts::PI;

use log::debug;
use nalgebra::{Matrix3, Vector3};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::BEAM_TOLERANCE;
use crate::detector::{AreaGeometry, LinearGeometry};
use crate::error::QConversionError;
use crate::goniometer::{compose_circles, resolve_axes, CircleSpec};
use crate::interfaces::AxisRole;
use crate::Result;

/// Worker fan-out policy for the per-position loop.
///
/// The choice is an explicit per-call parameter; nothing is tuned through
/// global state. Without the `parallel` cargo feature every variant runs on
/// the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Run all positions on the calling thread
    Sequential,
    /// Fan out on the global worker pool, sized by the runtime
    #[default]
    Auto,
    /// Fan out on a dedicated pool with the given number of workers
    Threads(usize),
}

/// Borrowed row-major goniometer angle arrays, one row per position.
///
/// The sample array holds `npoints * Ns` angles and the detector array
/// `npoints * Nd`, where the circle counts come from the axis specification
/// strings of the conversion call. Angles are in radians.
#[derive(Debug, Clone, Copy)]
pub struct GoniometerBatch<'a> {
    sample_angles: &'a [f64],
    detector_angles: &'a [f64],
    npoints: usize,
}

impl<'a> GoniometerBatch<'a> {
    pub fn new(sample_angles: &'a [f64], detector_angles: &'a [f64], npoints: usize) -> Self {
        Self {
            sample_angles,
            detector_angles,
            npoints,
        }
    }

    pub fn npoints(&self) -> usize {
        self.npoints
    }

    fn validate(&self, sample_circles: usize, detector_circles: usize) -> Result<()> {
        if self.sample_angles.len() != self.npoints * sample_circles {
            return Err(QConversionError::AngleShape {
                role: AxisRole::Sample,
                len: self.sample_angles.len(),
                expected: self.npoints * sample_circles,
            });
        }
        if self.detector_angles.len() != self.npoints * detector_circles {
            return Err(QConversionError::AngleShape {
                role: AxisRole::Detector,
                len: self.detector_angles.len(),
                expected: self.npoints * detector_circles,
            });
        }
        Ok(())
    }

    fn sample_row(&self, circles: usize, position: usize) -> &[f64] {
        &self.sample_angles[position * circles..(position + 1) * circles]
    }

    fn detector_row(&self, circles: usize, position: usize) -> &[f64] {
        &self.detector_angles[position * circles..(position + 1) * circles]
    }
}

/// Resolved circle specs for both goniometer sides.
struct ResolvedAxes {
    sample: Vec<CircleSpec>,
    detector: Vec<CircleSpec>,
}

fn resolve_goniometer(
    sample_axes: &str,
    detector_axes: &str,
    batch: &GoniometerBatch<'_>,
) -> Result<ResolvedAxes> {
    let sample = resolve_axes(sample_axes, AxisRole::Sample)?;
    let detector = resolve_axes(detector_axes, AxisRole::Detector)?;
    batch.validate(sample.len(), detector.len())?;
    Ok(ResolvedAxes { sample, detector })
}

pub(crate) fn wavenumber(wavelength: f64) -> Result<f64> {
    if !wavelength.is_finite() || wavelength <= 0.0 {
        return Err(QConversionError::InvalidWavelength { wavelength });
    }
    Ok(2.0 * PI / wavelength)
}

pub(crate) fn unit_direction(direction: Vector3<f64>) -> Result<Vector3<f64>> {
    direction
        .try_normalize(BEAM_TOLERANCE)
        .ok_or(QConversionError::DegenerateBeam)
}

/// Run `task` once per position, handing each its disjoint output chunk of
/// `chunk` slots. The task reads only immutable shared inputs, so the fan-out
/// needs no locks.
fn for_each_position<F>(
    parallelism: Parallelism,
    output: &mut [Vector3<f64>],
    chunk: usize,
    task: F,
) -> Result<()>
where
    F: Fn(usize, &mut [Vector3<f64>]) + Send + Sync,
{
    // Empty ROI: nothing to write for any position
    if chunk == 0 {
        return Ok(());
    }

    #[cfg(feature = "parallel")]
    match parallelism {
        Parallelism::Sequential => {
            output
                .chunks_mut(chunk)
                .enumerate()
                .for_each(|(position, slots)| task(position, slots));
        }
        Parallelism::Auto => {
            output
                .par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(position, slots)| task(position, slots));
        }
        Parallelism::Threads(workers) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| QConversionError::WorkerPool(e.to_string()))?;
            pool.install(|| {
                output
                    .par_chunks_mut(chunk)
                    .enumerate()
                    .for_each(|(position, slots)| task(position, slots));
            });
        }
    }

    #[cfg(not(feature = "parallel"))]
    {
        if parallelism != Parallelism::Sequential {
            log::warn!("parallel feature disabled, running sequentially");
        }
        output
            .chunks_mut(chunk)
            .enumerate()
            .for_each(|(position, slots)| task(position, slots));
    }

    Ok(())
}

/// Convert a batch of goniometer positions for a point detector.
///
/// `beam_direction` is the primary beam direction at zero angles (its length
/// is irrelevant, it is renormalized internally). For every position the
/// momentum transfer is
///
/// Q = R_s^-1 * (R_d - I) * k_i,  |k_i| = 2 pi / wavelength
///
/// so a position with all angles zero maps to Q = 0 exactly.
pub fn ang2q_point(
    batch: &GoniometerBatch<'_>,
    sample_axes: &str,
    detector_axes: &str,
    beam_direction: Vector3<f64>,
    wavelength: f64,
    parallelism: Parallelism,
) -> Result<Vec<Vector3<f64>>> {
    let axes = resolve_goniometer(sample_axes, detector_axes, batch)?;
    let k_i = unit_direction(beam_direction)? * wavenumber(wavelength)?;

    debug!(
        "point conversion: {} positions, {} sample / {} detector circles",
        batch.npoints(),
        axes.sample.len(),
        axes.detector.len()
    );

    let sample_circles = axes.sample.len();
    let detector_circles = axes.detector.len();
    let mut qpos = vec![Vector3::zeros(); batch.npoints()];

    for_each_position(parallelism, &mut qpos, 1, |position, slots| {
        // The composed circle product is orthogonal, its transpose is the inverse
        let sample_inverse =
            compose_circles(&axes.sample, batch.sample_row(sample_circles, position)).transpose();
        let detector =
            compose_circles(&axes.detector, batch.detector_row(detector_circles, position));

        slots[0] = sample_inverse * ((detector - Matrix3::identity()) * k_i);
    })?;

    Ok(qpos)
}

/// Convert a batch of goniometer positions for a linear pixel-array detector.
///
/// `center_channel` is the direction and distance of the detector's center
/// channel at zero detector angles; the primary beam direction is its
/// normalization. The output holds one Q vector per (position, ROI channel)
/// pair, channels varying fastest.
pub fn ang2q_linear(
    batch: &GoniometerBatch<'_>,
    sample_axes: &str,
    detector_axes: &str,
    center_channel: Vector3<f64>,
    geometry: &LinearGeometry,
    wavelength: f64,
    parallelism: Parallelism,
) -> Result<Vec<Vector3<f64>>> {
    let axes = resolve_goniometer(sample_axes, detector_axes, batch)?;
    let beam = unit_direction(center_channel)?;
    let scale = wavenumber(wavelength)?;

    let (cch, pixel_width, roi) = geometry.effective();
    let step = geometry.direction.step(pixel_width);
    let center_offset = step * cch;
    let channels = roi.len();

    debug!(
        "linear conversion: {} positions, {} channels in ROI [{}, {})",
        batch.npoints(),
        channels,
        roi.lo,
        roi.hi
    );

    let sample_circles = axes.sample.len();
    let detector_circles = axes.detector.len();
    let mut qpos = vec![Vector3::zeros(); batch.npoints() * channels];

    for_each_position(parallelism, &mut qpos, channels, |position, slots| {
        let sample_inverse =
            compose_circles(&axes.sample, batch.sample_row(sample_circles, position)).transpose();
        let detector =
            compose_circles(&axes.detector, batch.detector_row(detector_circles, position));

        for (slot, channel) in (roi.lo..roi.hi).enumerate() {
            let pixel =
                (step * channel as f64 - center_offset + center_channel).normalize();
            slots[slot] = sample_inverse * ((detector * pixel - beam) * scale);
        }
    })?;

    Ok(qpos)
}

/// Convert a batch of goniometer positions for an area pixel-array detector.
///
/// `center_channel` is the direction and distance of the detector's center
/// pixel at zero detector angles. The output holds one Q vector per
/// (position, ROI pixel) with slot index
/// `position * N1 * N2 + (p2 - roi2.lo) * N1 + (p1 - roi1.lo)`,
/// so the first pixel axis varies fastest.
pub fn ang2q_area(
    batch: &GoniometerBatch<'_>,
    sample_axes: &str,
    detector_axes: &str,
    center_channel: Vector3<f64>,
    geometry: &AreaGeometry,
    wavelength: f64,
    parallelism: Parallelism,
) -> Result<Vec<Vector3<f64>>> {
    let axes = resolve_goniometer(sample_axes, detector_axes, batch)?;
    let beam = unit_direction(center_channel)?;
    let scale = wavenumber(wavelength)?;

    let ((cch1, pixel_width1, roi1), (cch2, pixel_width2, roi2)) = geometry.effective();
    let step1 = geometry.direction1.step(pixel_width1);
    let step2 = geometry.direction2.step(pixel_width2);
    let center_offset = step1 * cch1 + step2 * cch2;
    let (n1, n2) = (roi1.len(), roi2.len());

    debug!(
        "area conversion: {} positions, {}x{} pixels in ROI [{}, {}) x [{}, {})",
        batch.npoints(),
        n1,
        n2,
        roi1.lo,
        roi1.hi,
        roi2.lo,
        roi2.hi
    );

    let sample_circles = axes.sample.len();
    let detector_circles = axes.detector.len();
    let mut qpos = vec![Vector3::zeros(); batch.npoints() * n1 * n2];

    for_each_position(parallelism, &mut qpos, n1 * n2, |position, slots| {
        let sample_inverse =
            compose_circles(&axes.sample, batch.sample_row(sample_circles, position)).transpose();
        let detector =
            compose_circles(&axes.detector, batch.detector_row(detector_circles, position));

        for p2 in roi2.lo..roi2.hi {
            for p1 in roi1.lo..roi1.hi {
                let pixel = (step1 * p1 as f64 + step2 * p2 as f64 - center_offset
                    + center_channel)
                    .normalize();
                slots[(p2 - roi2.lo) * n1 + (p1 - roi1.lo)] =
                    sample_inverse * ((detector * pixel - beam) * scale);
            }
        }
    })?;

    Ok(qpos)
}

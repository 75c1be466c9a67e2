// Symmetric omega / two-theta scan of a one-circle goniometer with a point
// detector and a linear detector attached.
//
// Run with: cargo run --example powder_scan

use env_logger::Env;
use log::info;
use nalgebra::Vector3;

use qspace::{ConversionOptions, LinearGeometry, QConversion, Roi};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Cu K-alpha1, beam along z, omega and two-theta both about x
    let wavelength = 1.5406;
    let mut qconv = QConversion::new("x+", "x+", Vector3::new(0.0, 0.0, 1.0), wavelength)?;
    qconv.init_linear(LinearGeometry::from_channels_per_degree("y+", 640.0, 1280, 345.28)?);

    info!("qspace v{}, wavelength {} A", qspace::VERSION, wavelength);

    // Symmetric scan: two-theta = 2 * omega
    let omega: Vec<f64> = (0..9).map(|i| 10.0 + 2.5 * i as f64).collect();
    let two_theta: Vec<f64> = omega.iter().map(|o| 2.0 * o).collect();

    let qpos = qconv.point(&[&omega[..], &two_theta[..]], &ConversionOptions::default())?;
    println!("point detector:");
    for (angle, q) in omega.iter().zip(&qpos) {
        println!(
            "  omega {:6.2} deg -> Q = ({:8.4}, {:8.4}, {:8.4}) 1/A",
            angle, q.x, q.y, q.z
        );
    }

    // Same scan on the central channels of the linear detector
    let options = ConversionOptions {
        roi: Some(Roi::new(639, 642)),
        ..Default::default()
    };
    let qlin = qconv.linear(&[&omega[..], &two_theta[..]], &options)?;
    println!("linear detector, channels 639..642 of position 0:");
    for (channel, q) in (639..642).zip(&qlin) {
        println!(
            "  channel {} -> Q = ({:8.4}, {:8.4}, {:8.4}) 1/A",
            channel, q.x, q.y, q.z
        );
    }

    Ok(())
}

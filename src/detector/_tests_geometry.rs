#[cfg(test)]
mod _tests_geometry {
    use super::super::geometry::{AreaGeometry, LinearGeometry};
    use super::super::pixel::Roi;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_linear_defaults() {
        let geometry = LinearGeometry::new("y+", 640.0, 1280, 0.5, 50e-6).unwrap();
        assert_eq!(geometry.roi, Roi::full(1280));
        assert_eq!(geometry.averaging, 1);
        assert_eq!(geometry.channels, 1280);
    }

    #[test]
    fn test_linear_rejects_bad_direction() {
        assert!(LinearGeometry::new("k+", 640.0, 1280, 0.5, 50e-6).is_err());
    }

    #[test]
    fn test_linear_channels_per_degree() {
        let chpdeg = 345.28;
        let geometry = LinearGeometry::from_channels_per_degree("z+", 640.0, 1280, chpdeg).unwrap();
        // One channel subtends 1/chpdeg degrees at unit distance
        let expected = 2.0 * (0.5_f64.to_radians()).tan() / chpdeg;
        assert_abs_diff_eq!(geometry.pixel_width, expected, epsilon = 1e-15);
        assert_abs_diff_eq!(geometry.distance, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_linear_channels_per_degree_sign_is_irrelevant() {
        let positive =
            LinearGeometry::from_channels_per_degree("z+", 640.0, 1280, 345.28).unwrap();
        let negative =
            LinearGeometry::from_channels_per_degree("z+", 640.0, 1280, -345.28).unwrap();
        assert_eq!(positive.pixel_width, negative.pixel_width);
    }

    #[test]
    fn test_linear_builders() {
        let geometry = LinearGeometry::new("y+", 640.0, 1280, 0.5, 50e-6)
            .unwrap()
            .with_roi(Roi::new(100, 900))
            .with_averaging(4);
        assert_eq!(geometry.roi, Roi::new(100, 900));
        assert_eq!(geometry.averaging, 4);
    }

    #[test]
    fn test_linear_effective_rescales_for_averaging() {
        let geometry = LinearGeometry::new("y+", 640.0, 1280, 0.5, 50e-6)
            .unwrap()
            .with_averaging(2);
        let (cch, pixel_width, roi) = geometry.effective();
        assert_abs_diff_eq!(cch, 320.0, epsilon = 1e-15);
        assert_abs_diff_eq!(pixel_width, 100e-6, epsilon = 1e-18);
        assert_eq!(roi, Roi::new(0, 640));
    }

    #[test]
    fn test_linear_effective_without_averaging_is_unchanged() {
        let geometry = LinearGeometry::new("y+", 640.0, 1280, 0.5, 50e-6).unwrap();
        let (cch, pixel_width, roi) = geometry.effective();
        assert_eq!(cch, 640.0);
        assert_eq!(pixel_width, 50e-6);
        assert_eq!(roi, Roi::full(1280));
    }

    #[test]
    fn test_area_defaults() {
        let geometry =
            AreaGeometry::new("z+", "x+", 256.5, 256.5, 516, 516, 0.3, 55e-6, 55e-6).unwrap();
        assert_eq!(geometry.roi1, Roi::full(516));
        assert_eq!(geometry.roi2, Roi::full(516));
        assert_eq!((geometry.averaging1, geometry.averaging2), (1, 1));
    }

    #[test]
    fn test_area_rejects_bad_directions() {
        assert!(AreaGeometry::new("z+", "x?", 256.5, 256.5, 516, 516, 0.3, 55e-6, 55e-6).is_err());
        assert!(AreaGeometry::new("??", "x+", 256.5, 256.5, 516, 516, 0.3, 55e-6, 55e-6).is_err());
    }

    #[test]
    fn test_area_channels_per_degree() {
        let geometry = AreaGeometry::from_channels_per_degree(
            "z+", "x+", 256.5, 256.5, 516, 516, 200.0, 400.0,
        )
        .unwrap();
        let half_degree = 0.5_f64.to_radians().tan();
        assert_abs_diff_eq!(geometry.pixel_width1, 2.0 * half_degree / 200.0, epsilon = 1e-15);
        assert_abs_diff_eq!(geometry.pixel_width2, 2.0 * half_degree / 400.0, epsilon = 1e-15);
        assert_abs_diff_eq!(geometry.distance, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_area_effective_rescales_each_axis() {
        let geometry = AreaGeometry::new("z+", "x+", 256.0, 128.0, 512, 512, 0.3, 55e-6, 55e-6)
            .unwrap()
            .with_roi(Roi::new(0, 512), Roi::new(0, 256))
            .with_averaging(2, 4);
        let ((cch1, pw1, roi1), (cch2, pw2, roi2)) = geometry.effective();
        assert_abs_diff_eq!(cch1, 128.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cch2, 32.0, epsilon = 1e-15);
        assert_abs_diff_eq!(pw1, 110e-6, epsilon = 1e-18);
        assert_abs_diff_eq!(pw2, 220e-6, epsilon = 1e-18);
        assert_eq!(roi1, Roi::new(0, 256));
        assert_eq!(roi2, Roi::new(0, 64));
    }
}

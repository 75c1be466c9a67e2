#[cfg(test)]
mod _tests_pixel {
    use super::super::pixel::{pixel_step_vector, PixelDirection, Roi};
    use crate::error::QConversionError;
    use crate::interfaces::{Axis, Sense};
    use nalgebra::Vector3;

    #[test]
    fn test_parse_directions() {
        assert_eq!(
            PixelDirection::parse("x+").unwrap(),
            PixelDirection::new(Axis::X, Sense::Positive)
        );
        assert_eq!(
            PixelDirection::parse("y-").unwrap(),
            PixelDirection::new(Axis::Y, Sense::Negative)
        );
        assert_eq!(
            PixelDirection::parse("Z+").unwrap(),
            PixelDirection::new(Axis::Z, Sense::Positive)
        );
    }

    #[test]
    fn test_parse_invalid_axis() {
        let err = PixelDirection::parse("a+").unwrap_err();
        assert_eq!(err, QConversionError::InvalidDirectionAxis { letter: 'a' });
    }

    #[test]
    fn test_parse_invalid_sign() {
        let err = PixelDirection::parse("x0").unwrap_err();
        assert_eq!(err, QConversionError::InvalidDirectionSign { sign: '0' });
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            PixelDirection::parse("").unwrap_err(),
            QConversionError::DirectionLength { len: 0 }
        );
        assert_eq!(
            PixelDirection::parse("x++").unwrap_err(),
            QConversionError::DirectionLength { len: 3 }
        );
    }

    #[test]
    fn test_step_has_single_component() {
        let pitch = 55e-6;
        assert_eq!(
            PixelDirection::parse("x+").unwrap().step(pitch),
            Vector3::new(pitch, 0.0, 0.0)
        );
        assert_eq!(
            PixelDirection::parse("y-").unwrap().step(pitch),
            Vector3::new(0.0, -pitch, 0.0)
        );
        assert_eq!(
            PixelDirection::parse("z+").unwrap().step(pitch),
            Vector3::new(0.0, 0.0, pitch)
        );
    }

    #[test]
    fn test_pixel_step_vector() {
        assert_eq!(
            pixel_step_vector("z-", 2.0).unwrap(),
            Vector3::new(0.0, 0.0, -2.0)
        );
        assert!(pixel_step_vector("w+", 2.0).is_err());
    }

    #[test]
    fn test_roi_len() {
        assert_eq!(Roi::new(100, 900).len(), 800);
        assert_eq!(Roi::full(1280).len(), 1280);
        assert!(!Roi::new(0, 1).is_empty());
    }

    #[test]
    fn test_roi_empty_when_hi_not_above_lo() {
        assert_eq!(Roi::new(5, 5).len(), 0);
        assert_eq!(Roi::new(7, 3).len(), 0);
        assert!(Roi::new(7, 3).is_empty());
    }

    #[test]
    fn test_roi_averaging_rescales_bounds() {
        assert_eq!(Roi::new(100, 900).averaged(4), Roi::new(25, 225));
        // Bounds round up, partially covered channels stay inside
        assert_eq!(Roi::new(3, 10).averaged(4), Roi::new(1, 3));
    }

    #[test]
    fn test_roi_averaging_of_zero_behaves_as_one() {
        assert_eq!(Roi::new(2, 9).averaged(0), Roi::new(2, 9));
        assert_eq!(Roi::new(2, 9).averaged(1), Roi::new(2, 9));
    }
}

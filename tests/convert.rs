mod tests {
    use rgb_pwm_controller::convert::{clamp_unit, duty_from_unit};

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(0.5), 0.5);
        assert_eq!(clamp_unit(0.0), 0.0);
        assert_eq!(clamp_unit(1.0), 1.0);
        assert_eq!(clamp_unit(-0.25), 0.0);
        assert_eq!(clamp_unit(-1000.0), 0.0);
        assert_eq!(clamp_unit(1.25), 1.0);
        assert_eq!(clamp_unit(1000.0), 1.0);
    }

    #[test]
    fn test_duty_from_unit() {
        assert_eq!(duty_from_unit(0.0), 0);
        assert_eq!(duty_from_unit(0.0005), 0);
        assert_eq!(duty_from_unit(0.001), 0);
        assert_eq!(duty_from_unit(0.1), 25);
        assert_eq!(duty_from_unit(0.5), 127);
        assert_eq!(duty_from_unit(0.999), 255);
        assert_eq!(duty_from_unit(1.0), 255);
    }

    #[test]
    fn test_duty_from_unit_truncates_toward_zero() {
        assert_eq!(duty_from_unit(0.25), 63);
        assert_eq!(duty_from_unit(0.9), 229);
    }
}

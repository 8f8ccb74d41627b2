mod tests {
    use rgb_pwm_controller::color::{self, Color, Rgb, clamped, duty_from_color};

    #[test]
    fn test_constants() {
        assert_eq!(
            color::BLACK,
            Color {
                r: 0.0,
                g: 0.0,
                b: 0.0
            }
        );
        assert_eq!(
            color::WHITE,
            Color {
                r: 1.0,
                g: 1.0,
                b: 1.0
            }
        );
        assert_eq!(
            color::RED,
            Color {
                r: 1.0,
                g: 0.0,
                b: 0.0
            }
        );
        assert_eq!(
            color::GREEN,
            Color {
                r: 0.0,
                g: 1.0,
                b: 0.0
            }
        );
        assert_eq!(
            color::BLUE,
            Color {
                r: 0.0,
                g: 0.0,
                b: 1.0
            }
        );
    }

    #[test]
    fn test_clamped() {
        assert_eq!(
            clamped(Color {
                r: -0.5,
                g: 0.25,
                b: 1.5
            }),
            Color {
                r: 0.0,
                g: 0.25,
                b: 1.0
            }
        );
        assert_eq!(clamped(color::WHITE), color::WHITE);
    }

    #[test]
    fn test_duty_from_color() {
        assert_eq!(duty_from_color(color::BLACK), Rgb { r: 0, g: 0, b: 0 });
        assert_eq!(
            duty_from_color(color::WHITE),
            Rgb {
                r: 255,
                g: 255,
                b: 255
            }
        );
        assert_eq!(
            duty_from_color(Color {
                r: 0.1,
                g: 0.5,
                b: 1.0
            }),
            Rgb {
                r: 25,
                g: 127,
                b: 255
            }
        );
    }
}

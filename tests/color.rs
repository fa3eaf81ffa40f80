mod tests {
    use myrtio_led_strip::color::{Color, Rgb, Rgbw, project_to_rgb, project_to_rgbw};
    use smart_leds::White;

    #[test]
    fn test_project_to_rgbw_zero_fills_white() {
        assert_eq!(
            project_to_rgbw(Color::rgb(10, 20, 30)),
            Color::rgbw(10, 20, 30, 0)
        );
        // No white is derived from the color components
        assert_eq!(
            project_to_rgbw(Color::rgb(255, 255, 255)),
            Color::rgbw(255, 255, 255, 0)
        );
    }

    #[test]
    fn test_project_to_rgb_drops_white() {
        assert_eq!(
            project_to_rgb(Color::rgbw(1, 2, 3, 200)),
            Color::rgbw(1, 2, 3, 0)
        );
    }

    #[test]
    fn test_white_defaults_to_zero() {
        assert_eq!(Color::rgb(1, 2, 3).w, 0);
        assert_eq!(Color::default(), Color::rgbw(0, 0, 0, 0));
    }

    #[test]
    fn test_smart_leds_conversions() {
        assert_eq!(Color::from(Rgb::new(4, 5, 6)), Color::rgb(4, 5, 6));

        let rgbw = Rgbw {
            r: 4,
            g: 5,
            b: 6,
            a: White(7),
        };
        assert_eq!(Color::from(rgbw), Color::rgbw(4, 5, 6, 7));
        assert_eq!(Rgbw::from(Color::rgbw(4, 5, 6, 7)), rgbw);
        assert_eq!(Rgb::from(Color::rgbw(4, 5, 6, 7)), Rgb::new(4, 5, 6));
    }
}

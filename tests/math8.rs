mod tests {
    use climate_lamp::math8::{rescale, rescale_f32, scale8, scale8_video};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_video() {
        assert_eq!(scale8_video(0, 200), 0);
        assert_eq!(scale8_video(200, 0), 0);
        assert_eq!(scale8_video(255, 255), 255);
        assert_eq!(scale8_video(128, 255), 128);
        assert_eq!(scale8_video(255, 128), 128);
        // Video law keeps dim channels lit at low scale
        assert_eq!(scale8_video(1, 1), 1);
        assert_eq!(scale8(1, 1), 0);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(0, 0, 1023, 0, 100), 0);
        assert_eq!(rescale(1023, 0, 1023, 0, 100), 100);
        assert_eq!(rescale(512, 0, 1023, 0, 100), 50);
        // Inverted output range
        assert_eq!(rescale(0, 0, 100, 255, 0), 255);
        assert_eq!(rescale(100, 0, 100, 255, 0), 0);
    }

    #[test]
    fn test_rescale_f32() {
        assert_eq!(rescale_f32(22.5, 15.0, 30.0, 0.0, 255.0), 127.5);
        assert_eq!(rescale_f32(15.0, 15.0, 30.0, 0.0, 255.0), 0.0);
        assert_eq!(rescale_f32(30.0, 15.0, 30.0, 0.0, 255.0), 255.0);
    }
}

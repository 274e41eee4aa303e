mod tests {
    use climate_lamp::brightness::LightLevel;
    use climate_lamp::color::ColorParseError;
    use climate_lamp::command::{CommandQueue, PanelCommand};
    use climate_lamp::effect::RenderMode;
    use climate_lamp::panel::{Panel, PanelError, PanelResponse};
    use climate_lamp::readings::{Readings, ReadingsCell};
    use climate_lamp::render::Renderer;
    use climate_lamp::sensor::EnvironmentReading;
    use climate_lamp::Rgb;
    use embassy_time::Instant;

    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };

    fn drain<const N: usize>(queue: &CommandQueue<N>) -> Vec<PanelCommand> {
        let receiver = queue.receiver();
        let mut commands = Vec::new();
        while let Some(command) = receiver.try_receive() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn test_root_serves_control_page() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        match panel.handle_request("/").unwrap() {
            PanelResponse::Page(html) => {
                assert!(html.contains("<html>"));
                assert!(html.contains("/setColor"));
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_data_returns_published_readings() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        readings.publish(Readings {
            temperature: 22.5,
            humidity: 40.0,
            brightness: 55,
        });
        let panel = Panel::new(queue.sender(), &readings);

        match panel.handle_request("/data").unwrap() {
            PanelResponse::Json(body) => {
                assert!(body.contains("\"temperature\":22.5"), "body={body}");
                assert!(body.contains("\"brightness\":55"), "body={body}");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn test_set_color_decodes_and_parses() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        let response = panel.handle_request("/setColor?color=%2300ff00").unwrap();
        assert_eq!(response, PanelResponse::Accepted);
        assert_eq!(drain(&queue), vec![PanelCommand::SetColor(GREEN)]);
    }

    #[test]
    fn test_set_color_errors() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        assert_eq!(
            panel.handle_request("/setColor"),
            Err(PanelError::MissingParam("color"))
        );
        assert_eq!(
            panel.handle_request("/setColor?color=00ff00"),
            Err(PanelError::BadColor(ColorParseError::MissingHash))
        );
        assert_eq!(
            panel.handle_request("/setColor?color=%23zzzzzz"),
            Err(PanelError::BadColor(ColorParseError::BadDigit))
        );
        assert!(drain(&queue).is_empty());
    }

    #[test]
    fn test_set_mode() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        let response = panel.handle_request("/setMode?mode=rainbow").unwrap();
        assert_eq!(response, PanelResponse::Accepted);
        assert_eq!(
            drain(&queue),
            vec![PanelCommand::SetMode(RenderMode::Rainbow)]
        );
    }

    #[test]
    fn test_unknown_mode_leaves_state_unchanged() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);
        let mut renderer = Renderer::<8, 4>::new(queue.receiver());

        assert_eq!(
            panel.handle_request("/setMode?mode=disco"),
            Err(PanelError::UnknownMode)
        );

        let reading = EnvironmentReading {
            temperature: 20.0,
            humidity: 50.0,
            valid: true,
        };
        renderer.render(&reading, LightLevel::from_raw(0), Instant::from_millis(0));
        assert_eq!(renderer.state().mode, RenderMode::Temperature);
    }

    #[test]
    fn test_set_brightness_clamps() {
        let queue = CommandQueue::<8>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        panel.handle_request("/setBrightness?brightness=300").unwrap();
        panel.handle_request("/setBrightness?brightness=-5").unwrap();
        panel.handle_request("/setBrightness?brightness=128").unwrap();
        assert_eq!(
            drain(&queue),
            vec![
                PanelCommand::SetBrightness(255),
                PanelCommand::SetBrightness(0),
                PanelCommand::SetBrightness(128),
            ]
        );

        assert_eq!(
            panel.handle_request("/setBrightness?brightness=abc"),
            Err(PanelError::BadValue)
        );
    }

    #[test]
    fn test_set_auto_brightness() {
        let queue = CommandQueue::<8>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        panel.handle_request("/setAutoBrightness?auto=1").unwrap();
        panel.handle_request("/setAutoBrightness?auto=0").unwrap();
        assert_eq!(
            drain(&queue),
            vec![
                PanelCommand::SetAutoBrightness(true),
                PanelCommand::SetAutoBrightness(false),
            ]
        );

        assert_eq!(
            panel.handle_request("/setAutoBrightness?auto=2"),
            Err(PanelError::BadValue)
        );
    }

    #[test]
    fn test_unknown_route_is_not_found() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        assert_eq!(
            panel.handle_request("/reboot"),
            Ok(PanelResponse::NotFound)
        );
    }

    #[test]
    fn test_full_queue_is_busy() {
        let queue = CommandQueue::<1>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);

        panel.handle_request("/setAutoBrightness?auto=1").unwrap();
        assert_eq!(
            panel.handle_request("/setAutoBrightness?auto=0"),
            Err(PanelError::Busy)
        );
    }

    #[test]
    fn test_set_color_then_mode_renders_green() {
        let queue = CommandQueue::<4>::new();
        let readings = ReadingsCell::new();
        let panel = Panel::new(queue.sender(), &readings);
        let mut renderer = Renderer::<8, 4>::new(queue.receiver());

        panel.handle_request("/setColor?color=%2300ff00").unwrap();
        panel.handle_request("/setMode?mode=rgb").unwrap();

        let reading = EnvironmentReading {
            temperature: 20.0,
            humidity: 50.0,
            valid: true,
        };
        let frame = renderer.render(&reading, LightLevel::from_raw(0), Instant::from_millis(0));
        assert!(frame.pixels.iter().all(|led| *led == GREEN));
    }
}

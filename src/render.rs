//! Render state and the per-tick frame renderer.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::brightness::{LightLevel, auto_drive};
use crate::color::Rgb;
use crate::command::{CommandReceiver, PanelCommand};
use crate::effect::{Effect, FixedColorEffect, RainbowEffect, RenderMode, TemperatureEffect};
use crate::sensor::EnvironmentReading;

const DEFAULT_COLOR: Rgb = Rgb { r: 255, g: 0, b: 0 };

/// State the control surface mutates and the renderer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub mode: RenderMode,
    pub fixed_color: Rgb,
    /// LED drive level, 0-255. Overwritten every tick from the light
    /// level while auto-brightness is on.
    pub brightness_drive: u8,
    pub auto_brightness: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            mode: RenderMode::Temperature,
            fixed_color: DEFAULT_COLOR,
            brightness_drive: 0,
            auto_brightness: false,
        }
    }
}

impl RenderState {
    /// Apply one panel command.
    pub fn apply(&mut self, command: PanelCommand) {
        #[cfg(feature = "esp32-log")]
        println!("panel: applying {:?}", command);

        match command {
            PanelCommand::SetMode(mode) => self.mode = mode,
            PanelCommand::SetColor(color) => self.fixed_color = color,
            PanelCommand::SetBrightness(drive) => self.brightness_drive = drive,
            PanelCommand::SetAutoBrightness(enabled) => self.auto_brightness = enabled,
        }
    }

    /// Recompute the drive level from ambient light when auto-brightness
    /// is enabled; otherwise the last explicit setting stays.
    pub fn apply_auto_brightness(&mut self, light: LightLevel) {
        if self.auto_brightness {
            self.brightness_drive = auto_drive(light.percent);
        }
    }
}

/// One fully repainted frame.
///
/// `strip_brightness` is the global linear brightness the driver should
/// apply. The temperature mode scales pixels itself (video law) and
/// leaves this at full; the other modes pass the drive level through.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'f> {
    pub pixels: &'f [Rgb],
    pub strip_brightness: u8,
}

/// Turns environmental state and panel commands into pixel frames.
pub struct Renderer<'a, const MAX_LEDS: usize, const CMD: usize> {
    commands: CommandReceiver<'a, CMD>,
    state: RenderState,
    frame_buffer: [Rgb; MAX_LEDS],
}

impl<'a, const MAX_LEDS: usize, const CMD: usize> Renderer<'a, MAX_LEDS, CMD> {
    pub fn new(commands: CommandReceiver<'a, CMD>) -> Self {
        Self {
            commands,
            state: RenderState::default(),
            frame_buffer: [Rgb::default(); MAX_LEDS],
        }
    }

    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    /// Process one frame.
    ///
    /// Drains pending panel commands, folds in auto-brightness, and fully
    /// repaints the pixel buffer from the current mode. The buffer length
    /// is always `MAX_LEDS`; there are no partial updates.
    pub fn render(
        &mut self,
        env: &EnvironmentReading,
        light: LightLevel,
        now: Instant,
    ) -> Frame<'_> {
        self.process_commands();
        self.state.apply_auto_brightness(light);

        let pixels = &mut self.frame_buffer[..];
        let strip_brightness = match self.state.mode {
            RenderMode::Temperature => {
                TemperatureEffect::new(env.temperature, self.state.brightness_drive)
                    .render(now, pixels);
                255
            }
            RenderMode::Fixed => {
                FixedColorEffect::new(self.state.fixed_color).render(now, pixels);
                self.state.brightness_drive
            }
            RenderMode::Rainbow => {
                RainbowEffect.render(now, pixels);
                self.state.brightness_drive
            }
        };

        Frame {
            pixels: &self.frame_buffer,
            strip_brightness,
        }
    }

    /// Drain all pending commands from the queue (non-blocking).
    fn process_commands(&mut self) {
        while let Some(command) = self.commands.try_receive() {
            self.state.apply(command);
        }
    }
}

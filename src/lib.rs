#![no_std]

pub mod brightness;
pub mod color;
pub mod command;
pub mod display;
pub mod effect;
pub mod math8;
pub mod panel;
pub mod readings;
pub mod render;
pub mod scheduler;
pub mod sensor;

pub use brightness::{LightLevel, auto_drive};
pub use command::{CommandQueue, CommandReceiver, CommandSender, PanelCommand};
pub use display::DisplayPresenter;
pub use effect::RenderMode;
pub use panel::{Panel, PanelError, PanelResponse};
pub use readings::{Readings, ReadingsCell};
pub use render::{Frame, RenderState, Renderer};
pub use scheduler::{TICK_INTERVAL, TickResult, TickScheduler};
pub use sensor::{Environment, EnvironmentReading, EnvironmentSample, EnvironmentSensor, LightSensor};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine is generic over this trait.
pub trait StripDriver {
    /// Write colors to the strip.
    ///
    /// `brightness` is the driver's global linear brightness (0-255),
    /// applied on top of whatever per-pixel scaling the frame already
    /// carries.
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}

/// Abstract numeric display driver trait (4-digit 7-segment class)
pub trait DisplayDriver {
    /// Blank the display.
    fn clear(&mut self);

    /// Show an integer value.
    fn show_number(&mut self, value: i32);
}

//! Snapshot of current readings published for the control surface.

use core::cell::RefCell;

use critical_section::Mutex;
use serde::Serialize;

/// Readings exposed on the `/data` route.
///
/// `brightness` is the ambient light percent, not the LED drive level;
/// the field name matches the wire format the control page expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Readings {
    pub temperature: f32,
    pub humidity: f32,
    pub brightness: u8,
}

/// Shared cell the render loop publishes into every tick.
///
/// The control surface only ever snapshots; it never writes here.
pub struct ReadingsCell {
    inner: Mutex<RefCell<Readings>>,
}

impl ReadingsCell {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Readings {
                temperature: 0.0,
                humidity: 0.0,
                brightness: 0,
            })),
        }
    }

    pub fn publish(&self, readings: Readings) {
        critical_section::with(|cs| {
            *self.inner.borrow(cs).borrow_mut() = readings;
        });
    }

    pub fn snapshot(&self) -> Readings {
        critical_section::with(|cs| *self.inner.borrow(cs).borrow())
    }
}

impl Default for ReadingsCell {
    fn default() -> Self {
        Self::new()
    }
}

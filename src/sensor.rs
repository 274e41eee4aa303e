//! Environmental sensor sampling and shared reading state.
//!
//! The hardware sensor is reached through [`EnvironmentSensor`]; a failed
//! read surfaces as NaN in the sample, the way DHT-class drivers report
//! transient faults.

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// One raw sample from the temperature/humidity sensor.
///
/// Either channel may be NaN on a transient read fault.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentSample {
    pub temperature: f32,
    pub humidity: f32,
}

/// Published environmental state.
///
/// `valid` is false while the most recent sample was faulty; the value
/// fields then still hold the last good reading.
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentReading {
    pub temperature: f32,
    pub humidity: f32,
    pub valid: bool,
}

/// Temperature/humidity sensor boundary.
pub trait EnvironmentSensor {
    /// Take one synchronous sample. Expected to be short relative to
    /// the tick budget.
    fn sample(&mut self) -> EnvironmentSample;
}

/// Ambient light sensor boundary (10-bit ADC, 0-1023).
pub trait LightSensor {
    fn read_raw(&mut self) -> u16;
}

/// Holds the reading published to the rest of the engine.
#[derive(Debug)]
pub struct Environment {
    reading: EnvironmentReading,
}

impl Environment {
    pub const fn new() -> Self {
        Self {
            reading: EnvironmentReading {
                temperature: 0.0,
                humidity: 0.0,
                valid: false,
            },
        }
    }

    /// Fold a new sample into the published reading.
    ///
    /// A NaN in either channel marks the reading invalid but keeps the
    /// previous temperature/humidity visible. No retry; the fault is
    /// logged and the next tick samples again.
    pub fn update(&mut self, sample: EnvironmentSample) {
        if sample.temperature.is_nan() || sample.humidity.is_nan() {
            self.reading.valid = false;
            #[cfg(feature = "esp32-log")]
            println!("sensor: invalid sample, keeping previous reading");
            return;
        }

        self.reading = EnvironmentReading {
            temperature: sample.temperature,
            humidity: sample.humidity,
            valid: true,
        };
    }

    pub const fn reading(&self) -> EnvironmentReading {
        self.reading
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

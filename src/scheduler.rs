//! Tick scheduling and loop orchestration.
//!
//! Provides portable tick pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping/waiting between ticks.

use embassy_time::{Duration, Instant};

use crate::brightness::LightLevel;
use crate::display::DisplayPresenter;
use crate::readings::{Readings, ReadingsCell};
use crate::render::Renderer;
use crate::sensor::{Environment, EnvironmentSensor, LightSensor};
use crate::{DisplayDriver, StripDriver};

/// Cadence of the sensor/render tick.
pub const TICK_INTERVAL: Duration = Duration::from_millis(10);

/// Result of a tick operation.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Cooperative tick scheduler driving the whole engine.
///
/// Each `tick` runs the full pipeline in sequence: sample the sensors,
/// map ambient light, repaint the strip, update the numeric display, and
/// publish the readings snapshot. Timing is drift-corrected: falling
/// behind by more than two ticks skips the backlog instead of bursting.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = TickScheduler::new(renderer, dht, photo, strip, tm1637, &READINGS);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
///     // service at most one pending panel request here
/// }
/// ```
pub struct TickScheduler<'a, E, L, S, D, const MAX_LEDS: usize, const CMD: usize>
where
    E: EnvironmentSensor,
    L: LightSensor,
    S: StripDriver,
    D: DisplayDriver,
{
    env_sensor: E,
    light_sensor: L,
    strip: S,
    display: D,

    renderer: Renderer<'a, MAX_LEDS, CMD>,
    presenter: DisplayPresenter,
    environment: Environment,
    readings: &'a ReadingsCell,

    next_tick: Instant,
    tick_duration: Duration,
}

impl<'a, E, L, S, D, const MAX_LEDS: usize, const CMD: usize>
    TickScheduler<'a, E, L, S, D, MAX_LEDS, CMD>
where
    E: EnvironmentSensor,
    L: LightSensor,
    S: StripDriver,
    D: DisplayDriver,
{
    /// Create a new scheduler with the default 10 ms tick.
    pub fn new(
        renderer: Renderer<'a, MAX_LEDS, CMD>,
        env_sensor: E,
        light_sensor: L,
        strip: S,
        display: D,
        readings: &'a ReadingsCell,
    ) -> Self {
        Self::with_tick_duration(
            renderer,
            env_sensor,
            light_sensor,
            strip,
            display,
            readings,
            TICK_INTERVAL,
        )
    }

    /// Create a new scheduler with a custom tick duration.
    #[allow(clippy::too_many_arguments)]
    pub fn with_tick_duration(
        renderer: Renderer<'a, MAX_LEDS, CMD>,
        env_sensor: E,
        light_sensor: L,
        strip: S,
        display: D,
        readings: &'a ReadingsCell,
        tick_duration: Duration,
    ) -> Self {
        Self {
            env_sensor,
            light_sensor,
            strip,
            display,
            renderer,
            presenter: DisplayPresenter::new(),
            environment: Environment::new(),
            readings,
            next_tick: Instant::from_millis(0),
            tick_duration,
        }
    }

    /// Run one tick and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        // Drift correction: after a stall longer than two ticks, reset
        // to now instead of replaying the backlog.
        let max_drift_ms = self.tick_duration.as_millis() * 2;
        if now.as_millis() > self.next_tick.as_millis() + max_drift_ms {
            self.next_tick = now;
        }

        self.environment.update(self.env_sensor.sample());
        let light = LightLevel::from_raw(self.light_sensor.read_raw());
        let reading = self.environment.reading();

        let frame = self.renderer.render(&reading, light, now);
        self.strip.write(frame.pixels, frame.strip_brightness);

        self.presenter.present(&reading, now, &mut self.display);

        self.readings.publish(Readings {
            temperature: reading.temperature,
            humidity: reading.humidity,
            brightness: light.percent,
        });

        self.next_tick += self.tick_duration;

        let sleep_duration = if self.next_tick.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_tick.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_tick,
            sleep_duration,
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, MAX_LEDS, CMD> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS, CMD> {
        &mut self.renderer
    }
}

use crate::settings::Settings;

/// The press state machine shared by every control kind. It is fed one
/// "in pressed zone" boolean per tick along with the host tick clock,
/// and derives press edges and the double/long press gestures from it.
///
/// Release keeps the press timestamps around: the next press needs the
/// previous press start to evaluate the double-press window.
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
    double_pressed: bool,
    long_pressed: bool,
    press_start: Option<f64>,
    last_press_start: Option<f64>,
    now: f64,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, in_pressed_zone: bool, now: f64, settings: &Settings) {
        self.now = now;
        self.just_pressed = false;
        self.just_released = false;
        self.double_pressed = false;

        if in_pressed_zone && !self.pressed {
            self.pressed = true;
            self.just_pressed = true;
            if let Some(prev) = self.press_start {
                self.double_pressed =
                    now - prev <= f64::from(settings.double_press_duration);
            }
            self.last_press_start = self.press_start;
            self.press_start = Some(now);
        } else if !in_pressed_zone && self.pressed {
            self.pressed = false;
            self.just_released = true;
        }

        self.long_pressed = self.pressed
            && self.press_start.is_some_and(|start| {
                now - start > f64::from(settings.long_press_duration)
            });
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// True only during the tick of the idle-to-pressed transition.
    pub fn just_pressed(&self) -> bool {
        self.just_pressed
    }

    /// True only during the tick of the pressed-to-idle transition.
    pub fn just_released(&self) -> bool {
        self.just_released
    }

    /// Edge-triggered: latched for the tick of a press that started
    /// within the double-press window of the previous press start.
    pub fn double_pressed(&self) -> bool {
        self.double_pressed
    }

    /// Level-triggered: true once the continuous press duration
    /// strictly exceeds the long-press threshold, until release.
    pub fn long_pressed(&self) -> bool {
        self.long_pressed
    }

    /// Elapsed seconds of the current press, 0 while idle.
    pub fn press_duration(&self) -> f64 {
        match (self.pressed, self.press_start) {
            (true, Some(start)) => self.now - start,
            _ => 0.0,
        }
    }

    /// Drop the transient per-tick flags without consuming a sample.
    /// Disabled controls call this instead of a full update so an edge
    /// raised on the disable tick does not stay latched.
    pub fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
        self.double_pressed = false;
    }

    /// Force a release transition without a sample. Used when a control
    /// is disabled mid-press so aggregates see a consistent release.
    pub fn force_release(&mut self) {
        if self.pressed {
            self.pressed = false;
            self.just_released = true;
        }
        self.long_pressed = false;
    }

    /// Back to construction-time defaults. Timers are cleared, so the
    /// next press cannot pair with a pre-reset press into a double.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

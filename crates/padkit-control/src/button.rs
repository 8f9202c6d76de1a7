use crate::gesture::Gesture;
use crate::pressable::Pressable;
use crate::settings::Settings;

/// Position above which a button counts as pressed. Buttons have no
/// dead zone; digital hosts feed 0 or 1, analog hosts feed pressure.
const PRESS_POINT: f32 = 0.5;

/// A digital (or pressure-sensitive) button.
#[derive(Debug, Clone)]
pub struct Button {
    label: &'static str,
    enabled: bool,
    position: f32,
    gesture: Gesture,
}

impl Button {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            enabled: true,
            position: 0.0,
            gesture: Gesture::new(),
        }
    }

    /// Consume one raw sample in [0, 1].
    pub fn update(&mut self, raw: f32, now: f64, settings: &Settings) {
        if !self.enabled {
            self.gesture.clear_edges();
            return;
        }
        self.position = raw.clamp(0.0, 1.0);
        self.gesture
            .update(self.position > PRESS_POINT, now, settings);
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Stops tracking. Forces a release first so dependent aggregate
    /// state stays consistent.
    pub fn disable(&mut self) {
        self.gesture.force_release();
        self.position = 0.0;
        self.enabled = false;
    }

    pub fn reset(&mut self) {
        self.position = 0.0;
        self.gesture.reset();
    }
}

impl Pressable for Button {
    fn magnitude(&self) -> f32 {
        self.position
    }

    fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    fn label(&self) -> &str {
        self.label
    }
}

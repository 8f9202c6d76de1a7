use crate::gesture::Gesture;
use crate::pressable::Pressable;
use crate::settings::Settings;

/// A virtual control with no raw sample of its own. The owner computes
/// the aggregated pressed flag and position from its constituents each
/// tick (strictly after updating them, so no stale state leaks in) and
/// feeds the result here; the gesture engine runs on top of that.
#[derive(Debug, Clone)]
pub struct AnyInput {
    label: &'static str,
    enabled: bool,
    position: f32,
    gesture: Gesture,
}

impl AnyInput {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            enabled: true,
            position: 0.0,
            gesture: Gesture::new(),
        }
    }

    /// Feed the current-tick aggregate of the constituents.
    pub fn update(
        &mut self,
        pressed: bool,
        position: f32,
        now: f64,
        settings: &Settings,
    ) {
        if !self.enabled {
            self.gesture.clear_edges();
            return;
        }
        self.position = position;
        self.gesture.update(pressed, now, settings);
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

impl Pressable for AnyInput {
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

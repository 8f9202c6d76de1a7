use crate::gesture::Gesture;
use crate::pressable::Pressable;
use crate::settings::Settings;
use crate::util::remap_magnitude;

/// A 1D analog trigger in [0, 1], with its own dead/pressed zones.
#[derive(Debug, Clone)]
pub struct Trigger {
    label: &'static str,
    enabled: bool,
    raw: f32,
    position: f32,
    gesture: Gesture,
}

impl Trigger {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            enabled: true,
            raw: 0.0,
            position: 0.0,
            gesture: Gesture::new(),
        }
    }

    /// Consume one raw sample in [0, 1]. The position maps the trigger
    /// dead zone to 0 and full pull to 1; pressed means the remapped
    /// position is strictly above the trigger pressed zone.
    pub fn update(&mut self, raw: f32, now: f64, settings: &Settings) {
        if !self.enabled {
            self.gesture.clear_edges();
            return;
        }
        self.raw = raw.clamp(0.0, 1.0);
        self.position = remap_magnitude(self.raw, settings.trigger_dead_zone);
        self.gesture.update(
            self.position > settings.trigger_pressed_zone,
            now,
            settings,
        );
    }

    /// Dead-zone-filtered position in [0, 1].
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Unfiltered sample, bypassing the dead zone entirely.
    pub fn raw_position(&self) -> f32 {
        self.raw
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.gesture.force_release();
        self.raw = 0.0;
        self.position = 0.0;
        self.enabled = false;
    }

    pub fn reset(&mut self) {
        self.raw = 0.0;
        self.position = 0.0;
        self.gesture.reset();
    }
}

impl Pressable for Trigger {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_flattens_position() {
        let settings = Settings::default(); // trigger_dead_zone 0.1
        let mut t = Trigger::new("LeftTrigger");
        t.update(0.1, 0.01, &settings);
        assert_eq!(t.position(), 0.0);
        assert_eq!(t.raw_position(), 0.1, "raw bypasses the dead zone");
    }

    #[test]
    fn pressed_zone_boundary_is_exclusive() {
        // dead 0, pressed 0.5: raw == position, pressed iff > 0.5
        let settings = Settings {
            trigger_dead_zone: 0.0,
            trigger_pressed_zone: 0.5,
            ..Settings::default()
        };
        let mut t = Trigger::new("LeftTrigger");
        t.update(0.5, 0.01, &settings);
        assert!(!t.is_pressed(), "== pressed zone is not pressed");
        t.update(0.501, 0.02, &settings);
        assert!(t.is_pressed());
    }

    #[test]
    fn pressed_zone_is_measured_past_dead_zone() {
        let settings = Settings {
            trigger_dead_zone: 0.5,
            trigger_pressed_zone: 0.5,
            ..Settings::default()
        };
        let mut t = Trigger::new("RightTrigger");
        // Raw 0.7 remaps to 0.4, below the pressed zone.
        t.update(0.7, 0.01, &settings);
        assert!(!t.is_pressed());
        // Raw 0.8 remaps to 0.6, past it.
        t.update(0.8, 0.02, &settings);
        assert!(t.is_pressed());
    }

    #[test]
    fn threshold_change_applies_next_tick() {
        let mut settings = Settings {
            trigger_dead_zone: 0.0,
            ..Settings::default()
        };
        let mut t = Trigger::new("LeftTrigger");
        t.update(0.4, 0.01, &settings);
        assert_eq!(t.position(), 0.4);
        settings.trigger_dead_zone = 0.5;
        t.update(0.4, 0.02, &settings);
        assert_eq!(t.position(), 0.0);
    }

    #[test]
    fn full_pull_reaches_one() {
        let settings = Settings::default();
        let mut t = Trigger::new("LeftTrigger");
        t.update(1.0, 0.01, &settings);
        assert_eq!(t.position(), 1.0);
    }
}

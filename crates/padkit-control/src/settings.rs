use serde::Deserialize;
use thiserror::Error;

/// Error raised when a settings field is outside its valid range.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("setting {name} is out of range: {value}")]
    OutOfRange { name: &'static str, value: f32 },
}

/// Tuning thresholds for every control. Owned by the caller and passed
/// by reference into each update; a changed threshold takes effect on
/// the next tick's remap. It never retroactively alters vibration
/// magnitudes that were captured when an effect started.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// The distance from the origin beyond which stick inputs start
    /// being registered (except for raw inputs).
    pub stick_dead_zone: f32,
    /// The distance from the origin beyond which trigger inputs start
    /// being registered (except for raw inputs).
    pub trigger_dead_zone: f32,
    /// The distance from the end of the dead zone beyond which stick
    /// inputs are considered pressed.
    pub stick_pressed_zone: f32,
    /// The distance from the end of the dead zone beyond which trigger
    /// inputs are considered pressed.
    pub trigger_pressed_zone: f32,
    /// The width in degrees of the angular sector that defines a stick
    /// direction. Above 45° adjacent directions overlap; below 90°
    /// there are gaps between them. Both are accepted behavior.
    pub direction_angle: f32,
    /// The maximum duration in seconds between the start of two
    /// presses for them to count as a double press.
    pub double_press_duration: f32,
    /// The minimum duration in seconds of a press for it to count as a
    /// long press.
    pub long_press_duration: f32,
    /// Left motor intensity used by the no-argument vibrate call.
    pub vibration_default_left: f32,
    /// Right motor intensity used by the no-argument vibrate call.
    pub vibration_default_right: f32,
    /// Duration in seconds used by the no-argument vibrate call.
    pub vibration_default_duration: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stick_dead_zone: 0.2,
            trigger_dead_zone: 0.1,
            stick_pressed_zone: 0.5,
            trigger_pressed_zone: 0.5,
            direction_angle: 90.0,
            double_press_duration: 0.3,
            long_press_duration: 0.3,
            vibration_default_left: 0.5,
            vibration_default_right: 0.5,
            vibration_default_duration: 0.5,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let unit_ranged = [
            ("stick_dead_zone", self.stick_dead_zone),
            ("trigger_dead_zone", self.trigger_dead_zone),
            ("stick_pressed_zone", self.stick_pressed_zone),
            ("trigger_pressed_zone", self.trigger_pressed_zone),
            ("vibration_default_left", self.vibration_default_left),
            ("vibration_default_right", self.vibration_default_right),
        ];
        for (name, value) in unit_ranged {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::OutOfRange { name, value });
            }
        }
        let non_negative = [
            ("direction_angle", self.direction_angle),
            ("double_press_duration", self.double_press_duration),
            ("long_press_duration", self.long_press_duration),
            ("vibration_default_duration", self.vibration_default_duration),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(SettingsError::OutOfRange { name, value });
            }
        }
        Ok(())
    }
}

use padkit_control::{
    AnyInput, Button, Pressable, Settings, Stick, Trigger, Vec2,
};
use padkit_haptics::{MotorCaps, MotorSink, ResponseCurve, Vibration};

use crate::sample::{ButtonSlot, PadSample, StickSlot, TriggerSlot};

/// One gamepad's fixed set of logical controls plus its vibration
/// compositor. Control slots are constructed once; samples flow through
/// them every tick while the pad is enabled.
///
/// Update order matters: all physical controls first, then the
/// any-input aggregate (which reads their current-tick state), then
/// vibration.
pub struct Gamepad {
    index: usize,
    name: String,
    enabled: bool,
    enable_when_connected: bool,
    connected: bool,

    pub a: Button,
    pub b: Button,
    pub x: Button,
    pub y: Button,
    pub left_bumper: Button,
    pub right_bumper: Button,
    pub back: Button,
    pub start: Button,
    pub left_stick_click: Button,
    pub right_stick_click: Button,
    pub guide: Button,

    pub left_trigger: Trigger,
    pub right_trigger: Trigger,

    pub left_stick: Stick,
    pub right_stick: Stick,
    pub dpad: Stick,

    pub any_input: AnyInput,

    vibration: Vibration,
}

impl Gamepad {
    pub fn new(index: usize, caps: MotorCaps) -> Self {
        Self {
            index,
            name: format!("Gamepad{index}"),
            enabled: false,
            enable_when_connected: true,
            connected: false,

            a: Button::new("A"),
            b: Button::new("B"),
            x: Button::new("X"),
            y: Button::new("Y"),
            left_bumper: Button::new("LeftBumper"),
            right_bumper: Button::new("RightBumper"),
            back: Button::new("Back"),
            start: Button::new("Start"),
            left_stick_click: Button::new("LeftStickClick"),
            right_stick_click: Button::new("RightStickClick"),
            guide: Button::new("Guide"),

            left_trigger: Trigger::new("LeftTrigger"),
            right_trigger: Trigger::new("RightTrigger"),

            left_stick: Stick::new("LeftStick"),
            right_stick: Stick::new("RightStick"),
            dpad: Stick::new("DPad"),

            any_input: AnyInput::new("AnyInput"),

            vibration: Vibration::new(caps),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Start tracking this pad. Happens automatically the first time it
    /// is seen connected.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Reset every control and stop tracking. Vibration is stopped so a
    /// disabled pad cannot keep its motors running.
    pub fn disable(&mut self) {
        let controls: [&mut dyn ResetControl; 16] = [
            &mut self.a,
            &mut self.b,
            &mut self.x,
            &mut self.y,
            &mut self.left_bumper,
            &mut self.right_bumper,
            &mut self.back,
            &mut self.start,
            &mut self.left_stick_click,
            &mut self.right_stick_click,
            &mut self.guide,
            &mut self.left_trigger,
            &mut self.right_trigger,
            &mut self.left_stick,
            &mut self.right_stick,
            &mut self.dpad,
        ];
        for control in controls {
            control.reset();
        }
        self.any_input.reset();
        self.vibration.stop(0.0);
        self.enabled = false;
    }

    /// Consume one raw sample and advance every control and the
    /// vibration compositor by one tick.
    pub fn update(
        &mut self,
        sample: &PadSample,
        dt: f32,
        now: f64,
        settings: &Settings,
        sink: &mut dyn MotorSink,
    ) {
        self.connected = sample.connected;
        if !self.enabled && self.enable_when_connected && self.connected {
            self.enabled = true;
            self.enable_when_connected = false;
        }
        if !self.enabled {
            return;
        }

        let buttons: [&mut Button; 11] = [
            &mut self.a,
            &mut self.b,
            &mut self.x,
            &mut self.y,
            &mut self.left_bumper,
            &mut self.right_bumper,
            &mut self.back,
            &mut self.start,
            &mut self.left_stick_click,
            &mut self.right_stick_click,
            &mut self.guide,
        ];
        for (button, raw) in buttons.into_iter().zip(sample.buttons) {
            button.update(raw, now, settings);
        }

        self.left_trigger.update(sample.triggers[0], now, settings);
        self.right_trigger.update(sample.triggers[1], now, settings);

        let sticks: [&mut Stick; 3] =
            [&mut self.left_stick, &mut self.right_stick, &mut self.dpad];
        for (stick, raw) in sticks.into_iter().zip(sample.sticks) {
            stick.update(Vec2::from(raw), now, settings);
        }

        let (pressed, position) = self.aggregate();
        self.any_input.update(pressed, position, now, settings);

        self.vibration.update(dt, sink);
    }

    /// Every physical control, in a stable order (buttons, triggers,
    /// sticks). Excludes the any-input aggregate itself.
    pub fn controls(&self) -> [&dyn Pressable; 16] {
        [
            &self.a,
            &self.b,
            &self.x,
            &self.y,
            &self.left_bumper,
            &self.right_bumper,
            &self.back,
            &self.start,
            &self.left_stick_click,
            &self.right_stick_click,
            &self.guide,
            &self.left_trigger,
            &self.right_trigger,
            &self.left_stick,
            &self.right_stick,
            &self.dpad,
        ]
    }

    pub fn button(&self, slot: ButtonSlot) -> &Button {
        match slot {
            ButtonSlot::A => &self.a,
            ButtonSlot::B => &self.b,
            ButtonSlot::X => &self.x,
            ButtonSlot::Y => &self.y,
            ButtonSlot::LeftBumper => &self.left_bumper,
            ButtonSlot::RightBumper => &self.right_bumper,
            ButtonSlot::Back => &self.back,
            ButtonSlot::Start => &self.start,
            ButtonSlot::LeftStickClick => &self.left_stick_click,
            ButtonSlot::RightStickClick => &self.right_stick_click,
            ButtonSlot::Guide => &self.guide,
        }
    }

    pub fn trigger(&self, slot: TriggerSlot) -> &Trigger {
        match slot {
            TriggerSlot::Left => &self.left_trigger,
            TriggerSlot::Right => &self.right_trigger,
        }
    }

    pub fn stick(&self, slot: StickSlot) -> &Stick {
        match slot {
            StickSlot::Left => &self.left_stick,
            StickSlot::Right => &self.right_stick,
            StickSlot::DPad => &self.dpad,
        }
    }

    /// Labels of all controls currently pressed.
    pub fn active_inputs(&self) -> Vec<&str> {
        self.controls()
            .into_iter()
            .filter(|c| c.is_pressed())
            .map(Pressable::label)
            .collect()
    }

    fn aggregate(&self) -> (bool, f32) {
        let mut pressed = false;
        let mut position = 0.0f32;
        for control in self.controls() {
            pressed |= control.is_pressed();
            position = position.max(control.magnitude());
        }
        (pressed, position)
    }

    // Vibration surface. All calls are safe no-ops on unsupported
    // devices.

    pub fn vibrate(&mut self, left: f32, right: f32, duration: f32) {
        self.vibration.vibrate(left, right, duration);
    }

    pub fn vibrate_default(&mut self, settings: &Settings) {
        self.vibration.vibrate(
            settings.vibration_default_left,
            settings.vibration_default_right,
            settings.vibration_default_duration,
        );
    }

    /// Default intensities for a caller-chosen duration.
    pub fn vibrate_for(&mut self, duration: f32, settings: &Settings) {
        self.vibration.vibrate(
            settings.vibration_default_left,
            settings.vibration_default_right,
            duration,
        );
    }

    /// Caller-chosen intensities for the default duration.
    pub fn vibrate_with(&mut self, left: f32, right: f32, settings: &Settings) {
        self.vibration
            .vibrate(left, right, settings.vibration_default_duration);
    }

    pub fn vibrate_curves(&mut self, left: ResponseCurve, right: ResponseCurve) {
        self.vibration.vibrate_curves(left, right);
    }

    pub fn vibrate_advanced(&mut self, left: f32, right: f32) {
        self.vibration.vibrate_advanced(left, right);
    }

    pub fn stop_vibration(&mut self, duration: f32) {
        self.vibration.stop(duration);
    }

    pub fn left_vibration(&self) -> f32 {
        self.vibration.current_left()
    }

    pub fn right_vibration(&self) -> f32 {
        self.vibration.current_right()
    }
}

/// Object-safe reset shim so disable can walk mixed control kinds.
trait ResetControl {
    fn reset(&mut self);
}

impl ResetControl for Button {
    fn reset(&mut self) {
        Button::reset(self);
    }
}

impl ResetControl for Trigger {
    fn reset(&mut self) {
        Trigger::reset(self);
    }
}

impl ResetControl for Stick {
    fn reset(&mut self) {
        Stick::reset(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padkit_haptics::NullSink;

    const DT: f32 = 0.01;

    fn tick(pad: &mut Gamepad, sample: &PadSample, now: f64) {
        let settings = Settings::default();
        pad.update(sample, DT, now, &settings, &mut NullSink);
    }

    #[test]
    fn auto_enables_on_first_connection() {
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        assert!(!pad.is_enabled());

        tick(&mut pad, &PadSample::default(), 0.01);
        assert!(!pad.is_enabled(), "stays off while disconnected");

        tick(&mut pad, &PadSample::connected(), 0.02);
        assert!(pad.is_enabled());
        assert!(pad.is_connected());
    }

    #[test]
    fn controls_follow_the_sample() {
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        let mut sample = PadSample::connected();
        sample.set_button(ButtonSlot::A, 1.0);
        sample.set_trigger(TriggerSlot::Left, 0.9);
        sample.set_stick(StickSlot::Left, [0.0, 1.0]);

        tick(&mut pad, &sample, 0.01);
        assert!(pad.a.is_pressed());
        assert!(pad.left_trigger.is_pressed());
        assert!(pad.left_stick.is_pressed());
        assert!(!pad.b.is_pressed());
        assert_eq!(
            pad.active_inputs(),
            vec!["A", "LeftTrigger", "LeftStick"]
        );
    }

    #[test]
    fn any_input_aggregates_same_tick() {
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        let mut sample = PadSample::connected();
        sample.set_button(ButtonSlot::B, 1.0);

        tick(&mut pad, &sample, 0.01);
        assert!(pad.any_input.is_pressed());
        assert!(pad.any_input.just_pressed(), "no one-tick lag");
        assert_eq!(pad.any_input.position(), 1.0);

        tick(&mut pad, &PadSample::connected(), 0.02);
        assert!(pad.any_input.just_released());
    }

    #[test]
    fn any_input_takes_highest_position() {
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        let mut sample = PadSample::connected();
        sample.set_trigger(TriggerSlot::Left, 0.55); // remaps to 0.5
        sample.set_stick(StickSlot::Right, [0.84, 0.0]); // remaps to 0.8

        tick(&mut pad, &sample, 0.01);
        assert!((pad.any_input.position() - 0.8).abs() < 1e-5);
    }

    #[test]
    fn disable_resets_everything() {
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        let mut sample = PadSample::connected();
        sample.set_button(ButtonSlot::A, 1.0);
        tick(&mut pad, &sample, 0.01);
        pad.vibrate_advanced(0.5, 0.5);

        pad.disable();
        assert!(!pad.is_enabled());
        assert!(!pad.a.is_pressed());
        assert!(!pad.any_input.is_pressed());

        // Updates are ignored while disabled.
        tick(&mut pad, &sample, 0.02);
        assert!(!pad.a.is_pressed());
    }

    #[test]
    fn vibrate_shorthands_fill_in_defaults() {
        let settings = Settings {
            vibration_default_left: 0.3,
            vibration_default_right: 0.7,
            vibration_default_duration: 0.5,
            ..Settings::default()
        };
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        tick(&mut pad, &PadSample::connected(), 0.01);

        pad.vibrate_for(1.0, &settings);
        tick(&mut pad, &PadSample::connected(), 0.02);
        assert!((pad.left_vibration() - 0.3).abs() < 1e-5);
        assert!((pad.right_vibration() - 0.7).abs() < 1e-5);

        pad.stop_vibration(0.0);
        pad.vibrate_with(0.9, 0.1, &settings);
        tick(&mut pad, &PadSample::connected(), 0.03);
        assert!((pad.left_vibration() - 0.9).abs() < 1e-5);
        assert!((pad.right_vibration() - 0.1).abs() < 1e-5);
    }

    #[test]
    fn no_long_press_inherited_across_re_enable() {
        let settings = Settings {
            long_press_duration: 0.05,
            ..Settings::default()
        };
        let mut pad = Gamepad::new(0, MotorCaps::supported());
        let mut sample = PadSample::connected();
        sample.set_button(ButtonSlot::A, 1.0);

        let mut now = 0.0;
        for _ in 0..20 {
            now += f64::from(DT);
            pad.update(&sample, DT, now, &settings, &mut NullSink);
        }
        assert!(pad.a.long_pressed());

        pad.disable();
        pad.enable();

        // Still held, but the machine restarts from idle.
        now += f64::from(DT);
        pad.update(&sample, DT, now, &settings, &mut NullSink);
        assert!(pad.a.just_pressed());
        assert!(!pad.a.long_pressed());
    }
}

use padkit_control::{AnyInput, Gesture, Pressable, Settings, Vec2};

use crate::gamepad::Gamepad;
use crate::sample::{
    ButtonSlot, StickSlot, TriggerSlot, BUTTON_COUNT, STICK_COUNT, TRIGGER_COUNT,
};

/// Cross-pad view of one stick slot. Pressed when any enabled pad's
/// stick is pressed; the position is the arithmetic mean of the pressed
/// sticks' positions, so pads resting in their dead zone do not drag
/// the aggregate toward zero.
pub struct FleetStick {
    position: Vec2,
    inner: AnyInput,
}

impl FleetStick {
    fn new(label: &'static str) -> Self {
        Self {
            position: Vec2::ZERO,
            inner: AnyInput::new(label),
        }
    }

    fn update(&mut self, pads: &[Gamepad], slot: StickSlot, now: f64, settings: &Settings) {
        let mut sum = Vec2::ZERO;
        let mut pressed = 0.0f32;
        for pad in pads.iter().filter(|p| p.is_enabled()) {
            let stick = pad.stick(slot);
            if stick.is_pressed() {
                let p = stick.position();
                sum.x += p.x;
                sum.y += p.y;
                pressed += 1.0;
            }
        }
        self.position = if pressed == 0.0 {
            Vec2::ZERO
        } else {
            sum.scaled(1.0 / pressed)
        };
        self.inner
            .update(pressed > 0.0, self.position.magnitude(), now, settings);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn horizontal(&self) -> f32 {
        self.position.x
    }

    pub fn vertical(&self) -> f32 {
        self.position.y
    }

    fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.inner.reset();
    }
}

impl Pressable for FleetStick {
    fn magnitude(&self) -> f32 {
        self.inner.magnitude()
    }

    fn gesture(&self) -> &Gesture {
        self.inner.gesture()
    }

    fn label(&self) -> &str {
        self.inner.label()
    }
}

/// Aggregate gamepad spanning every enabled pad. Each control slot gets
/// its own gesture machine fed with cross-pad state: buttons and
/// triggers take pressed-OR and position-max, sticks average pressed
/// members. Updated after the individual pads each tick.
pub struct PadFleet {
    connected: bool,
    buttons: [AnyInput; BUTTON_COUNT],
    triggers: [AnyInput; TRIGGER_COUNT],
    sticks: [FleetStick; STICK_COUNT],
    any_input: AnyInput,
}

impl PadFleet {
    pub fn new() -> Self {
        Self {
            connected: false,
            buttons: [
                AnyInput::new("A"),
                AnyInput::new("B"),
                AnyInput::new("X"),
                AnyInput::new("Y"),
                AnyInput::new("LeftBumper"),
                AnyInput::new("RightBumper"),
                AnyInput::new("Back"),
                AnyInput::new("Start"),
                AnyInput::new("LeftStickClick"),
                AnyInput::new("RightStickClick"),
                AnyInput::new("Guide"),
            ],
            triggers: [AnyInput::new("LeftTrigger"), AnyInput::new("RightTrigger")],
            sticks: [
                FleetStick::new("LeftStick"),
                FleetStick::new("RightStick"),
                FleetStick::new("DPad"),
            ],
            any_input: AnyInput::new("AnyInput"),
        }
    }

    pub fn update(&mut self, pads: &[Gamepad], now: f64, settings: &Settings) {
        self.connected = pads.iter().any(Gamepad::is_connected);
        for slot in ButtonSlot::ALL {
            let (pressed, position) = aggregate(pads, |pad| pad.button(slot));
            self.buttons[slot.index()].update(pressed, position, now, settings);
        }
        for slot in TriggerSlot::ALL {
            let (pressed, position) = aggregate(pads, |pad| pad.trigger(slot));
            self.triggers[slot.index()].update(pressed, position, now, settings);
        }
        for slot in StickSlot::ALL {
            let [left, right, dpad] = &mut self.sticks;
            let stick = match slot {
                StickSlot::Left => left,
                StickSlot::Right => right,
                StickSlot::DPad => dpad,
            };
            stick.update(pads, slot, now, settings);
        }
        let (pressed, position) = aggregate(pads, |pad| &pad.any_input);
        self.any_input.update(pressed, position, now, settings);
    }

    pub fn button(&self, slot: ButtonSlot) -> &AnyInput {
        &self.buttons[slot.index()]
    }

    pub fn trigger(&self, slot: TriggerSlot) -> &AnyInput {
        &self.triggers[slot.index()]
    }

    pub fn stick(&self, slot: StickSlot) -> &FleetStick {
        &self.sticks[slot.index()]
    }

    pub fn any_input(&self) -> &AnyInput {
        &self.any_input
    }

    /// True when at least one pad is connected.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn reset(&mut self) {
        self.connected = false;
        for button in &mut self.buttons {
            button.reset();
        }
        for trigger in &mut self.triggers {
            trigger.reset();
        }
        for stick in &mut self.sticks {
            stick.reset();
        }
        self.any_input.reset();
    }
}

impl Default for PadFleet {
    fn default() -> Self {
        Self::new()
    }
}

fn aggregate<'a, F, P>(pads: &'a [Gamepad], pick: F) -> (bool, f32)
where
    F: Fn(&'a Gamepad) -> &'a P,
    P: Pressable + 'a,
{
    let mut pressed = false;
    let mut position = 0.0f32;
    for pad in pads.iter().filter(|p| p.is_enabled()) {
        let control = pick(pad);
        pressed |= control.is_pressed();
        position = position.max(control.magnitude());
    }
    (pressed, position)
}

pub const BUTTON_COUNT: usize = 11;
pub const TRIGGER_COUNT: usize = 2;
pub const STICK_COUNT: usize = 3;

/// Button slots of a gamepad, in sample order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSlot {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    Back,
    Start,
    LeftStickClick,
    RightStickClick,
    Guide,
}

impl ButtonSlot {
    pub const ALL: [ButtonSlot; BUTTON_COUNT] = [
        ButtonSlot::A,
        ButtonSlot::B,
        ButtonSlot::X,
        ButtonSlot::Y,
        ButtonSlot::LeftBumper,
        ButtonSlot::RightBumper,
        ButtonSlot::Back,
        ButtonSlot::Start,
        ButtonSlot::LeftStickClick,
        ButtonSlot::RightStickClick,
        ButtonSlot::Guide,
    ];

    pub fn index(self) -> usize {
        match self {
            ButtonSlot::A => 0,
            ButtonSlot::B => 1,
            ButtonSlot::X => 2,
            ButtonSlot::Y => 3,
            ButtonSlot::LeftBumper => 4,
            ButtonSlot::RightBumper => 5,
            ButtonSlot::Back => 6,
            ButtonSlot::Start => 7,
            ButtonSlot::LeftStickClick => 8,
            ButtonSlot::RightStickClick => 9,
            ButtonSlot::Guide => 10,
        }
    }
}

/// Trigger slots of a gamepad, in sample order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerSlot {
    Left,
    Right,
}

impl TriggerSlot {
    pub const ALL: [TriggerSlot; TRIGGER_COUNT] =
        [TriggerSlot::Left, TriggerSlot::Right];

    pub fn index(self) -> usize {
        match self {
            TriggerSlot::Left => 0,
            TriggerSlot::Right => 1,
        }
    }
}

/// Stick slots of a gamepad, in sample order. The d-pad is a stick fed
/// with digital axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickSlot {
    Left,
    Right,
    DPad,
}

impl StickSlot {
    pub const ALL: [StickSlot; STICK_COUNT] =
        [StickSlot::Left, StickSlot::Right, StickSlot::DPad];

    pub fn index(self) -> usize {
        match self {
            StickSlot::Left => 0,
            StickSlot::Right => 1,
            StickSlot::DPad => 2,
        }
    }
}

/// One tick's worth of raw input for one gamepad. Button and trigger
/// values are in [0, 1]; stick axes in [-1, 1]. The default sample is
/// disconnected, all-zero input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PadSample {
    pub connected: bool,
    pub buttons: [f32; BUTTON_COUNT],
    pub triggers: [f32; TRIGGER_COUNT],
    pub sticks: [[f32; 2]; STICK_COUNT],
}

impl PadSample {
    pub fn connected() -> Self {
        Self {
            connected: true,
            ..Self::default()
        }
    }

    pub fn set_button(&mut self, slot: ButtonSlot, value: f32) {
        self.buttons[slot.index()] = value;
    }

    pub fn set_trigger(&mut self, slot: TriggerSlot, value: f32) {
        self.triggers[slot.index()] = value;
    }

    pub fn set_stick(&mut self, slot: StickSlot, value: [f32; 2]) {
        self.sticks[slot.index()] = value;
    }
}

/// Where raw samples come from. Implemented by the host against its
/// input backend; the core only ever sees the returned values.
pub trait SampleSource {
    /// One fresh sample for the given pad. `None` means no sample is
    /// available this tick and is treated as all-zero, disconnected
    /// input rather than an error.
    fn sample(&mut self, pad: usize) -> Option<PadSample>;
}

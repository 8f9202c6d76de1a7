use crate::gesture::Gesture;

/// The shared surface of every logical control: buttons, triggers,
/// sticks and the virtual any-input aggregates. Position semantics are
/// control-specific; the gesture surface is shared via [`Gesture`].
pub trait Pressable {
    /// Magnitude of the filtered position, in [0, 1].
    fn magnitude(&self) -> f32;

    /// The control's press/gesture state for the current tick.
    fn gesture(&self) -> &Gesture;

    /// A short stable label, like "A" or "LeftStick".
    fn label(&self) -> &str;

    fn is_pressed(&self) -> bool {
        self.gesture().is_pressed()
    }

    fn just_pressed(&self) -> bool {
        self.gesture().just_pressed()
    }

    fn just_released(&self) -> bool {
        self.gesture().just_released()
    }

    fn double_pressed(&self) -> bool {
        self.gesture().double_pressed()
    }

    fn long_pressed(&self) -> bool {
        self.gesture().long_pressed()
    }

    /// Elapsed seconds of the current press, 0 while released.
    fn press_duration(&self) -> f64 {
        self.gesture().press_duration()
    }
}

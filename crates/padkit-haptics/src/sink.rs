/// The hardware write seam. Receives one `(left, right)` intensity pair
/// per device, each clamped to [0, 1], and only when the value changed
/// since the last write.
pub trait MotorSink {
    fn apply(&mut self, left: f32, right: f32);
}

/// A sink that discards everything. Useful for disconnected devices and
/// tests that only care about the accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MotorSink for NullSink {
    fn apply(&mut self, _left: f32, _right: f32) {}
}

mod contribution;
mod curve;
mod sink;
mod vibration;

pub use curve::ResponseCurve;
pub use sink::{MotorSink, NullSink};
pub use vibration::{MotorCaps, Vibration};

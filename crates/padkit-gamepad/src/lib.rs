mod fleet;
mod gamepad;
mod hub;
mod sample;

use thiserror::Error;

pub use fleet::{FleetStick, PadFleet};
pub use gamepad::Gamepad;
pub use hub::Hub;
pub use sample::{
    ButtonSlot, PadSample, SampleSource, StickSlot, TriggerSlot, BUTTON_COUNT,
    STICK_COUNT, TRIGGER_COUNT,
};

/// Error type for hub-level gamepad operations. Everything here is
/// non-fatal: a bad index or missing device degrades to a no-op.
#[derive(Debug, Error)]
pub enum PadError {
    /// Operation addressed a gamepad index beyond the configured count.
    #[error("gamepad index out of range: {0}")]
    IndexOutOfRange(usize),
}

/// Convenient result alias for gamepad operations.
pub type Result<T> = std::result::Result<T, PadError>;

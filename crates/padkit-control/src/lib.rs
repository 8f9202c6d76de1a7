mod any_input;
mod button;
mod gesture;
mod pressable;
mod settings;
mod stick;
mod trigger;
mod util;

pub use any_input::AnyInput;
pub use button::Button;
pub use gesture::Gesture;
pub use pressable::Pressable;
pub use settings::{Settings, SettingsError};
pub use stick::{Direction, Stick};
pub use trigger::Trigger;
pub use util::{remap_magnitude, Vec2};

use padkit_control::{Settings, SettingsError};
use padkit_gamepad::{ButtonSlot, StickSlot, TriggerSlot};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ScriptError {
    #[error("failed to parse script: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported script version: {0}")]
    UnsupportedVersion(u8),
    #[error(transparent)]
    InvalidTuning(#[from] SettingsError),
    #[error("unknown button: {0}")]
    UnknownButton(String),
    #[error("unknown trigger: {0}")]
    UnknownTrigger(String),
    #[error("unknown stick: {0}")]
    UnknownStick(String),
    #[error("event at {at}s addresses pad {pad}, but the script declares {pads} pads")]
    PadOutOfRange { at: f32, pad: usize, pads: usize },
}

/// One scripted change, applied once its timestamp is reached.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ScriptAction {
    Connect(bool),
    Button(ButtonSlot, f32),
    Trigger(TriggerSlot, f32),
    Stick(StickSlot, [f32; 2]),
    Vibrate { left: f32, right: f32, duration: f32 },
    StopVibration { duration: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScriptEvent {
    pub at: f32,
    pub pad: usize,
    pub action: ScriptAction,
}

/// A replay script: how many pads to host, the tuning to run them
/// with, and a timeline of input and haptic commands.
#[derive(Debug)]
pub(crate) struct Script {
    pub pads: usize,
    pub settings: Settings,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Timestamp of the last event, or 0 for an empty timeline.
    pub(crate) fn end(&self) -> f32 {
        self.events.last().map_or(0.0, |e| e.at)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScriptV1 {
    version: u8,
    #[serde(default = "default_pads")]
    pads: usize,
    #[serde(default)]
    tuning: Settings,
    #[serde(default)]
    events: Vec<ScriptV1Event>,
}

fn default_pads() -> usize {
    1
}

// No deny_unknown_fields here: serde does not support it together
// with flatten.
#[derive(Debug, Deserialize)]
struct ScriptV1Event {
    at: f32,
    #[serde(default)]
    pad: usize,
    #[serde(flatten)]
    action: ScriptV1Action,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ScriptV1Action {
    Connect(bool),
    Button { name: String, value: f32 },
    Trigger { side: String, value: f32 },
    Stick { name: String, x: f32, y: f32 },
    Vibrate { left: f32, right: f32, duration: f32 },
    StopVibration {
        #[serde(default)]
        duration: f32,
    },
}

pub(crate) fn parse_script(input: &str) -> Result<Script, ScriptError> {
    let raw: ScriptV1 = serde_yaml::from_str(input)?;
    if raw.version != 1 {
        return Err(ScriptError::UnsupportedVersion(raw.version));
    }
    raw.tuning.validate()?;

    let mut events = raw
        .events
        .into_iter()
        .map(|e| parse_event(e, raw.pads))
        .collect::<Result<Vec<_>, _>>()?;
    events.sort_by(|a, b| a.at.total_cmp(&b.at));

    Ok(Script {
        pads: raw.pads,
        settings: raw.tuning,
        events,
    })
}

fn parse_event(raw: ScriptV1Event, pads: usize) -> Result<ScriptEvent, ScriptError> {
    if raw.pad >= pads {
        return Err(ScriptError::PadOutOfRange {
            at: raw.at,
            pad: raw.pad,
            pads,
        });
    }
    let action = match raw.action {
        ScriptV1Action::Connect(connected) => ScriptAction::Connect(connected),
        ScriptV1Action::Button { name, value } => {
            ScriptAction::Button(parse_button_name(&name)?, value)
        }
        ScriptV1Action::Trigger { side, value } => {
            ScriptAction::Trigger(parse_trigger_name(&side)?, value)
        }
        ScriptV1Action::Stick { name, x, y } => {
            ScriptAction::Stick(parse_stick_name(&name)?, [x, y])
        }
        ScriptV1Action::Vibrate {
            left,
            right,
            duration,
        } => ScriptAction::Vibrate {
            left,
            right,
            duration,
        },
        ScriptV1Action::StopVibration { duration } => {
            ScriptAction::StopVibration { duration }
        }
    };
    Ok(ScriptEvent {
        at: raw.at,
        pad: raw.pad,
        action,
    })
}

fn parse_button_name(raw: &str) -> Result<ButtonSlot, ScriptError> {
    Ok(match raw.to_lowercase().as_str() {
        "a" => ButtonSlot::A,
        "b" => ButtonSlot::B,
        "x" => ButtonSlot::X,
        "y" => ButtonSlot::Y,
        "left_bumper" => ButtonSlot::LeftBumper,
        "right_bumper" => ButtonSlot::RightBumper,
        "back" => ButtonSlot::Back,
        "start" => ButtonSlot::Start,
        "left_stick_click" => ButtonSlot::LeftStickClick,
        "right_stick_click" => ButtonSlot::RightStickClick,
        "guide" => ButtonSlot::Guide,
        other => return Err(ScriptError::UnknownButton(other.to_string())),
    })
}

fn parse_trigger_name(raw: &str) -> Result<TriggerSlot, ScriptError> {
    Ok(match raw.to_lowercase().as_str() {
        "left" => TriggerSlot::Left,
        "right" => TriggerSlot::Right,
        other => return Err(ScriptError::UnknownTrigger(other.to_string())),
    })
}

fn parse_stick_name(raw: &str) -> Result<StickSlot, ScriptError> {
    Ok(match raw.to_lowercase().as_str() {
        "left" => StickSlot::Left,
        "right" => StickSlot::Right,
        "dpad" => StickSlot::DPad,
        other => return Err(ScriptError::UnknownStick(other.to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_script() {
        let input = r#"
version: 1
pads: 2
tuning:
  stick_dead_zone: 0.25
  long_press_duration: 0.4
events:
  - at: 0.0
    pad: 0
    connect: true
  - at: 0.5
    pad: 0
    button: { name: a, value: 1.0 }
  - at: 0.2
    pad: 1
    stick: { name: left, x: -0.2, y: 0.9 }
  - at: 1.0
    pad: 0
    vibrate: { left: 0.5, right: 0.5, duration: 0.3 }
"#;
        let script = parse_script(input).unwrap();
        assert_eq!(script.pads, 2);
        assert!((script.settings.stick_dead_zone - 0.25).abs() < 1e-6);
        assert!((script.settings.long_press_duration - 0.4).abs() < 1e-6);
        // Untouched tuning fields keep their defaults.
        assert!((script.settings.trigger_dead_zone - 0.1).abs() < 1e-6);

        // Events come out sorted by timestamp.
        assert_eq!(script.events.len(), 4);
        assert_eq!(script.events[0].action, ScriptAction::Connect(true));
        assert_eq!(
            script.events[1].action,
            ScriptAction::Stick(StickSlot::Left, [-0.2, 0.9])
        );
        assert_eq!(
            script.events[2].action,
            ScriptAction::Button(ButtonSlot::A, 1.0)
        );
        assert!((script.end() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_unsupported_version() {
        let err = parse_script("version: 2\n").unwrap_err();
        assert!(matches!(err, ScriptError::UnsupportedVersion(2)));
    }

    #[test]
    fn rejects_unknown_button() {
        let input = r#"
version: 1
events:
  - at: 0.0
    button: { name: turbo, value: 1.0 }
"#;
        let err = parse_script(input).unwrap_err();
        assert!(matches!(err, ScriptError::UnknownButton(name) if name == "turbo"));
    }

    #[test]
    fn rejects_event_beyond_declared_pads() {
        let input = r#"
version: 1
pads: 1
events:
  - at: 0.0
    pad: 3
    connect: true
"#;
        let err = parse_script(input).unwrap_err();
        assert!(matches!(err, ScriptError::PadOutOfRange { pad: 3, pads: 1, .. }));
    }

    #[test]
    fn rejects_out_of_range_tuning() {
        let input = r#"
version: 1
tuning:
  stick_dead_zone: 1.5
"#;
        let err = parse_script(input).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidTuning(_)));
    }
}

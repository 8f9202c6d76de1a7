use std::time::Duration;

use ahash::AHashMap;
use colored::Colorize;
use crossbeam_channel::{select, tick, Receiver};

use padkit_control::{Direction, Pressable};
use padkit_gamepad::{Hub, PadSample, SampleSource, StickSlot};
use padkit_haptics::{MotorCaps, MotorSink};

use crate::script::{Script, ScriptAction, ScriptEvent};
use crate::{print_debug, print_error, print_info};

const TICK_INTERVAL: Duration = Duration::from_millis(10);
const DT: f32 = 0.01;
/// How long to keep ticking after the last event, so trailing gestures
/// and vibration ramps get to play out.
const TAIL_SECONDS: f32 = 1.0;

/// Holds the current raw state per pad. Scripted events mutate it; the
/// hub reads it back through the `SampleSource` seam every tick.
struct ScriptSource {
    samples: Vec<PadSample>,
}

impl ScriptSource {
    fn new(pads: usize) -> Self {
        Self {
            samples: vec![PadSample::default(); pads],
        }
    }
}

impl SampleSource for ScriptSource {
    fn sample(&mut self, pad: usize) -> Option<PadSample> {
        self.samples.get(pad).copied()
    }
}

/// Motor sink that logs every (deduplicated) write instead of driving
/// hardware.
struct LogSink {
    pad: usize,
}

impl MotorSink for LogSink {
    fn apply(&mut self, left: f32, right: f32) {
        print_info!("pad{}: motors -> ({left:.2}, {right:.2})", self.pad);
    }
}

/// Tracks level-held flags between ticks so only edges get logged.
#[derive(Default)]
struct Reporter {
    long_pressed: AHashMap<(usize, usize), bool>,
    directions: AHashMap<(usize, StickSlot), Option<Direction>>,
}

impl Reporter {
    fn report(&mut self, hub: &Hub) {
        for pad in hub.pads() {
            let index = pad.index();
            for (slot, control) in pad.controls().into_iter().enumerate() {
                if control.just_pressed() {
                    print_info!("{}: {} pressed", pad.name(), control.label());
                }
                if control.just_released() {
                    print_info!("{}: {} released", pad.name(), control.label());
                }
                if control.double_pressed() {
                    print_info!("{}: {} double pressed", pad.name(), control.label());
                }
                let long = control.long_pressed();
                let seen = self.long_pressed.entry((index, slot)).or_insert(false);
                if long && !*seen {
                    print_info!("{}: {} long pressed", pad.name(), control.label());
                }
                *seen = long;
            }
            for slot in StickSlot::ALL {
                let dir = pad.stick(slot).direction();
                let seen = self.directions.entry((index, slot)).or_insert(None);
                if dir != *seen {
                    if let Some(d) = dir {
                        print_debug!(
                            "{}: {} points {d:?}",
                            pad.name(),
                            pad.stick(slot).label()
                        );
                    }
                    *seen = dir;
                }
            }
        }
        if hub.fleet().any_input().just_pressed() {
            print_debug!("fleet: input active");
        }
        if hub.fleet().any_input().just_released() {
            print_debug!("fleet: input idle");
        }
    }
}

fn apply_event(event: &ScriptEvent, source: &mut ScriptSource, hub: &mut Hub) {
    let sample = &mut source.samples[event.pad];
    match event.action {
        ScriptAction::Connect(connected) => sample.connected = connected,
        ScriptAction::Button(slot, value) => sample.set_button(slot, value),
        ScriptAction::Trigger(slot, value) => sample.set_trigger(slot, value),
        ScriptAction::Stick(slot, axes) => sample.set_stick(slot, axes),
        ScriptAction::Vibrate {
            left,
            right,
            duration,
        } => {
            if let Err(e) = hub.vibrate(event.pad, left, right, duration) {
                print_error!("vibrate failed: {e}");
            }
        }
        ScriptAction::StopVibration { duration } => {
            if let Err(e) = hub.stop_vibration(event.pad, duration) {
                print_error!("stop vibration failed: {e}");
            }
        }
    }
}

/// Replay the script against a fresh hub until the timeline (plus a
/// short tail) is exhausted or a stop signal arrives.
pub(crate) fn run(script: Script, stop_rx: &Receiver<()>) {
    let end = f64::from(script.end() + TAIL_SECONDS);
    let mut hub = Hub::new(
        script.pads,
        MotorCaps::supported(),
        script.settings.clone(),
    );
    let mut source = ScriptSource::new(script.pads);
    let mut sinks: Vec<LogSink> = (0..script.pads).map(|pad| LogSink { pad }).collect();
    let mut pending = script.events.into_iter().peekable();
    let mut reporter = Reporter::default();
    let ticker = tick(TICK_INTERVAL);

    print_info!(
        "replaying {} pad(s), {:.2}s timeline",
        hub.pad_count(),
        end - f64::from(TAIL_SECONDS)
    );
    loop {
        select! {
            recv(stop_rx) -> _ => {
                print_info!("stopped at {:.2}s", hub.now());
                break;
            }
            recv(ticker) -> _ => {
                let next_now = hub.now() + f64::from(DT);
                // Half-tick slack: the clock accumulates f32-rounded
                // deltas, so exact timestamp comparison drifts.
                while let Some(event) = pending
                    .next_if(|e| f64::from(e.at) <= next_now + f64::from(DT) / 2.0)
                {
                    apply_event(&event, &mut source, &mut hub);
                }
                hub.tick(DT, &mut source, &mut sinks);
                reporter.report(&hub);
                if hub.now() >= end {
                    print_info!("script finished at {:.2}s", hub.now());
                    break;
                }
            }
        }
    }
}

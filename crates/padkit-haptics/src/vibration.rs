use smallvec::SmallVec;

use crate::contribution::Contribution;
use crate::curve::ResponseCurve;
use crate::sink::MotorSink;

/// What the platform can do with this device's motors, detected by the
/// host at construction time. When rumble is unsupported every vibrate
/// call degrades to a logged no-op; nothing here ever crashes on a
/// missing or disconnected backend.
#[derive(Debug, Clone, Copy)]
pub struct MotorCaps {
    pub supported: bool,
}

impl MotorCaps {
    pub const fn supported() -> Self {
        Self { supported: true }
    }

    pub const fn unsupported() -> Self {
        Self { supported: false }
    }
}

impl Default for MotorCaps {
    fn default() -> Self {
        Self::supported()
    }
}

/// Composites overlapping haptic effects into one additive motor
/// signal. Contributions are advanced once per tick and the accumulator
/// is recomputed as the plain sum of their instantaneous values, so
/// ordering between contributions never matters and cancelling drops
/// every in-flight effect atomically within the tick.
#[derive(Debug, Default)]
pub struct Vibration {
    caps: MotorCaps,
    contributions: SmallVec<[Contribution; 4]>,
    current_left: f32,
    current_right: f32,
    prev_left: f32,
    prev_right: f32,
}

impl Vibration {
    pub fn new(caps: MotorCaps) -> Self {
        Self {
            caps,
            ..Self::default()
        }
    }

    /// Add a flat effect: `(left, right)` for `duration` seconds. The
    /// intensities are captured now and stay fixed for the effect's
    /// lifetime even if the caller's defaults change underneath it.
    pub fn vibrate(&mut self, left: f32, right: f32, duration: f32) {
        if !self.supported("vibrate") {
            return;
        }
        self.contributions.push(Contribution::Flat {
            left,
            right,
            duration,
            elapsed: 0.0,
        });
    }

    /// Add an effect whose intensity over time follows two response
    /// curves, one per motor. Completes once both domains are passed.
    pub fn vibrate_curves(&mut self, left: ResponseCurve, right: ResponseCurve) {
        if !self.supported("vibrate_curves") {
            return;
        }
        self.contributions.push(Contribution::Curve {
            left,
            right,
            elapsed: 0.0,
        });
    }

    /// Add a persistent contribution with no automatic expiry. The
    /// caller owns its lifetime: nothing but a stop call removes it.
    pub fn vibrate_advanced(&mut self, left: f32, right: f32) {
        if !self.supported("vibrate_advanced") {
            return;
        }
        self.contributions
            .push(Contribution::Manual { left, right });
    }

    /// Cancel every active contribution immediately and ramp the output
    /// down linearly from the pre-stop accumulator over `duration`
    /// seconds. A zero duration snaps straight to silence. No cancelled
    /// effect can touch the accumulator afterwards: it is recomputed
    /// from live contributions only.
    pub fn stop(&mut self, duration: f32) {
        let (left, right) = (self.current_left, self.current_right);
        self.contributions.clear();
        if duration > 0.0 && (left != 0.0 || right != 0.0) {
            self.contributions.push(Contribution::Ramp {
                left,
                right,
                duration,
                elapsed: 0.0,
            });
        }
    }

    /// Advance all contributions by one tick, recompute the accumulator
    /// and emit to the motor sink, but only when the clamped output
    /// pair actually changed since the last write.
    pub fn update(&mut self, dt: f32, sink: &mut dyn MotorSink) {
        let mut left = 0.0;
        let mut right = 0.0;
        for c in &mut self.contributions {
            let (l, r) = c.value();
            left += l;
            right += r;
            c.advance(dt);
        }
        self.contributions.retain(|c| !c.finished());

        self.current_left = left;
        self.current_right = right;

        let emit_left = left.clamp(0.0, 1.0);
        let emit_right = right.clamp(0.0, 1.0);
        if emit_left != self.prev_left || emit_right != self.prev_right {
            self.prev_left = emit_left;
            self.prev_right = emit_right;
            sink.apply(emit_left, emit_right);
        }
    }

    /// The unclamped additive accumulator for the left motor.
    pub fn current_left(&self) -> f32 {
        self.current_left
    }

    /// The unclamped additive accumulator for the right motor.
    pub fn current_right(&self) -> f32 {
        self.current_right
    }

    pub fn is_supported(&self) -> bool {
        self.caps.supported
    }

    fn supported(&self, call: &str) -> bool {
        if !self.caps.supported {
            log::warn!("ignoring {call}: rumble is not supported on this device");
        }
        self.caps.supported
    }
}

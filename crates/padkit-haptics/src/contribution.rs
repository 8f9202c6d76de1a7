use crate::curve::ResponseCurve;

/// One active haptic effect. Each contribution is a small state object
/// advanced one step per tick; the compositor sums the instantaneous
/// values of all live contributions, so expiry never needs a matching
/// "subtract" step and cancellation can simply drop the set.
///
/// Intensities are captured when the effect starts and are immune to
/// later settings changes.
#[derive(Debug, Clone)]
pub(crate) enum Contribution {
    /// Constant `(left, right)` for `duration` seconds.
    Flat {
        left: f32,
        right: f32,
        duration: f32,
        elapsed: f32,
    },
    /// Resampled from two response curves at the elapsed time.
    Curve {
        left: ResponseCurve,
        right: ResponseCurve,
        elapsed: f32,
    },
    /// Caller-managed, no automatic expiry. Lives until a stop call.
    Manual { left: f32, right: f32 },
    /// Linear ramp from the captured pre-stop accumulator to zero.
    Ramp {
        left: f32,
        right: f32,
        duration: f32,
        elapsed: f32,
    },
}

impl Contribution {
    /// Instantaneous output at the current elapsed time.
    pub(crate) fn value(&self) -> (f32, f32) {
        match self {
            Contribution::Flat {
                left,
                right,
                duration,
                elapsed,
            } => {
                if elapsed < duration {
                    (*left, *right)
                } else {
                    (0.0, 0.0)
                }
            }
            Contribution::Curve {
                left,
                right,
                elapsed,
            } => (left.sample(*elapsed), right.sample(*elapsed)),
            Contribution::Manual { left, right } => (*left, *right),
            Contribution::Ramp {
                left,
                right,
                duration,
                elapsed,
            } => {
                if *duration <= 0.0 || elapsed >= duration {
                    (0.0, 0.0)
                } else {
                    let frac = (duration - elapsed) / duration;
                    (left * frac, right * frac)
                }
            }
        }
    }

    pub(crate) fn advance(&mut self, dt: f32) {
        match self {
            Contribution::Flat { elapsed, .. }
            | Contribution::Curve { elapsed, .. }
            | Contribution::Ramp { elapsed, .. } => *elapsed += dt,
            Contribution::Manual { .. } => {}
        }
    }

    pub(crate) fn finished(&self) -> bool {
        match self {
            Contribution::Flat {
                duration, elapsed, ..
            }
            | Contribution::Ramp {
                duration, elapsed, ..
            } => elapsed >= duration,
            Contribution::Curve {
                left,
                right,
                elapsed,
            } => *elapsed > left.end() && *elapsed > right.end(),
            Contribution::Manual { .. } => false,
        }
    }
}

use padkit_control::Settings;
use padkit_haptics::{MotorCaps, MotorSink, NullSink, ResponseCurve};

use crate::fleet::PadFleet;
use crate::gamepad::Gamepad;
use crate::sample::SampleSource;
use crate::{PadError, Result};

/// Owns the pad roster, the fleet aggregate and the monotonic clock.
/// The host drives it with `tick` at whatever cadence it samples input;
/// everything downstream measures time in the accumulated tick deltas.
pub struct Hub {
    settings: Settings,
    pads: Vec<Gamepad>,
    fleet: PadFleet,
    now: f64,
}

impl Hub {
    pub fn new(pad_count: usize, caps: MotorCaps, settings: Settings) -> Self {
        let pads = (0..pad_count)
            .map(|i| Gamepad::new(i, caps))
            .collect();
        Self {
            settings,
            pads,
            fleet: PadFleet::new(),
            now: 0.0,
        }
    }

    /// Advance the whole system by one frame: pull a sample per pad,
    /// run the pads, then the fleet. A missing sink for a pad routes
    /// its vibration to a null sink.
    pub fn tick<S, M>(&mut self, dt: f32, source: &mut S, sinks: &mut [M])
    where
        S: SampleSource,
        M: MotorSink,
    {
        self.now += f64::from(dt);
        for (i, pad) in self.pads.iter_mut().enumerate() {
            let sample = source.sample(i).unwrap_or_default();
            match sinks.get_mut(i) {
                Some(sink) => pad.update(&sample, dt, self.now, &self.settings, sink),
                None => pad.update(&sample, dt, self.now, &self.settings, &mut NullSink),
            }
        }
        self.fleet.update(&self.pads, self.now, &self.settings);
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn pad_count(&self) -> usize {
        self.pads.len()
    }

    pub fn pads(&self) -> &[Gamepad] {
        &self.pads
    }

    pub fn pad(&self, index: usize) -> Result<&Gamepad> {
        self.pads
            .get(index)
            .ok_or(PadError::IndexOutOfRange(index))
    }

    pub fn pad_mut(&mut self, index: usize) -> Result<&mut Gamepad> {
        self.pads
            .get_mut(index)
            .ok_or(PadError::IndexOutOfRange(index))
    }

    pub fn fleet(&self) -> &PadFleet {
        &self.fleet
    }

    pub fn vibrate(&mut self, pad: usize, left: f32, right: f32, duration: f32) -> Result<()> {
        self.pad_mut(pad)?.vibrate(left, right, duration);
        Ok(())
    }

    pub fn vibrate_default(&mut self, pad: usize) -> Result<()> {
        let settings = self.settings.clone();
        self.pad_mut(pad)?.vibrate_default(&settings);
        Ok(())
    }

    pub fn vibrate_curves(
        &mut self,
        pad: usize,
        left: ResponseCurve,
        right: ResponseCurve,
    ) -> Result<()> {
        self.pad_mut(pad)?.vibrate_curves(left, right);
        Ok(())
    }

    pub fn stop_vibration(&mut self, pad: usize, duration: f32) -> Result<()> {
        self.pad_mut(pad)?.stop_vibration(duration);
        Ok(())
    }

    pub fn vibrate_all(&mut self, left: f32, right: f32, duration: f32) {
        for pad in &mut self.pads {
            pad.vibrate(left, right, duration);
        }
    }

    pub fn stop_all_vibration(&mut self) {
        for pad in &mut self.pads {
            pad.stop_vibration(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{ButtonSlot, PadSample};
    use padkit_control::Pressable;
    use padkit_haptics::NullSink;

    const DT: f32 = 0.01;

    struct ScriptedSource {
        samples: Vec<PadSample>,
    }

    impl SampleSource for ScriptedSource {
        fn sample(&mut self, pad: usize) -> Option<PadSample> {
            self.samples.get(pad).copied()
        }
    }

    struct RecordingSink {
        writes: Vec<(f32, f32)>,
    }

    impl MotorSink for RecordingSink {
        fn apply(&mut self, left: f32, right: f32) {
            self.writes.push((left, right));
        }
    }

    #[test]
    fn tick_advances_clock_and_pads() {
        let mut hub = Hub::new(2, MotorCaps::supported(), Settings::default());
        let mut pressed = PadSample::connected();
        pressed.set_button(ButtonSlot::A, 1.0);
        let mut source = ScriptedSource {
            samples: vec![pressed, PadSample::connected()],
        };

        hub.tick(DT, &mut source, &mut [NullSink, NullSink]);
        assert!((hub.now() - 0.01).abs() < 1e-9);
        assert!(hub.pad(0).unwrap().a.is_pressed());
        assert!(!hub.pad(1).unwrap().a.is_pressed());
        assert!(hub.fleet().button(ButtonSlot::A).is_pressed());
    }

    #[test]
    fn missing_sample_reads_as_disconnected_zero() {
        let mut hub = Hub::new(2, MotorCaps::supported(), Settings::default());
        let mut source = ScriptedSource {
            samples: vec![PadSample::connected()],
        };

        hub.tick(DT, &mut source, &mut [NullSink, NullSink]);
        assert!(hub.pad(0).unwrap().is_connected());
        assert!(!hub.pad(1).unwrap().is_connected());
    }

    #[test]
    fn out_of_range_pad_is_an_error() {
        let mut hub = Hub::new(1, MotorCaps::supported(), Settings::default());
        let err = hub.vibrate(3, 0.5, 0.5, 0.2).unwrap_err();
        assert!(matches!(err, PadError::IndexOutOfRange(3)));
    }

    #[test]
    fn vibration_reaches_the_matching_sink() {
        let mut hub = Hub::new(1, MotorCaps::supported(), Settings::default());
        let mut source = ScriptedSource {
            samples: vec![PadSample::connected()],
        };
        let mut sinks = [RecordingSink { writes: Vec::new() }];

        hub.tick(DT, &mut source, &mut sinks);
        hub.vibrate(0, 0.4, 0.6, 1.0).unwrap();
        hub.tick(DT, &mut source, &mut sinks);
        assert_eq!(sinks[0].writes.last(), Some(&(0.4, 0.6)));
    }
}

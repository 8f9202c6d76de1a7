/// A piecewise-linear intensity curve over time. Keys are
/// `(seconds, intensity)` pairs; sampling interpolates linearly between
/// neighbors and yields 0 outside the key domain. An empty curve is 0
/// everywhere and already over.
#[derive(Debug, Clone, Default)]
pub struct ResponseCurve {
    keys: Vec<(f32, f32)>,
}

impl ResponseCurve {
    /// Build a curve from keyframes. Keys are sorted by time; NaN times
    /// are dropped.
    pub fn new(mut keys: Vec<(f32, f32)>) -> Self {
        keys.retain(|(t, _)| !t.is_nan());
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// End of the curve's domain; 0 for an empty curve.
    pub fn end(&self) -> f32 {
        self.keys.last().map_or(0.0, |(t, _)| *t)
    }

    /// Value at time `t`, 0 outside the defined domain.
    pub fn sample(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if t < first.0 || t > last.0 {
            return 0.0;
        }
        let mut prev = *first;
        for &key in &self.keys {
            if key.0 >= t {
                let span = key.0 - prev.0;
                if span <= 0.0 {
                    return key.1;
                }
                let frac = (t - prev.0) / span;
                return prev.1 + (key.1 - prev.1) * frac;
            }
            prev = key;
        }
        last.1
    }
}

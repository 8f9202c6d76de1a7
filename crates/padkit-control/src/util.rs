/// A 2D stick position with each axis in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle in degrees, normalized to [0, 360). 0° points right (+x),
    /// 90° points up (+y). Zero-length vectors return 0.
    pub fn angle_deg(self) -> f32 {
        let a = self.y.atan2(self.x).to_degrees();
        if a < 0.0 {
            a + 360.0
        } else {
            a
        }
    }

    pub fn clamp_axes(self, min: f32, max: f32) -> Self {
        Self::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl From<[f32; 2]> for Vec2 {
    fn from(v: [f32; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

/// Remap a magnitude so that the dead zone maps to 0 and 1 stays 1.
/// Magnitudes at or below the dead zone are flattened to exactly 0.
/// A dead zone of 1 or more swallows everything.
pub fn remap_magnitude(mag: f32, dead_zone: f32) -> f32 {
    if dead_zone >= 1.0 || mag <= dead_zone {
        return 0.0;
    }
    ((mag - dead_zone) / (1.0 - dead_zone)).clamp(0.0, 1.0)
}

/// Vector dead-zone remap: the magnitude is remapped, the direction is
/// preserved. The result's magnitude never exceeds 1.
pub(crate) fn remap_vector(raw: Vec2, dead_zone: f32) -> Vec2 {
    let mag = raw.magnitude();
    let remapped = remap_magnitude(mag, dead_zone);
    if remapped == 0.0 {
        return Vec2::ZERO;
    }
    raw.scaled(remapped / mag)
}

/// Minimal angular distance between two angles, in degrees, in [0, 180].
pub(crate) fn angular_distance_deg(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_is_zero_inside_dead_zone() {
        for mag in [0.0, 0.05, 0.1, 0.2] {
            assert_eq!(remap_magnitude(mag, 0.2), 0.0, "mag = {mag}");
        }
    }

    #[test]
    fn remap_is_monotonic_past_dead_zone() {
        let dead: f32 = 0.2;
        let mut prev = 0.0;
        let mut m = dead;
        while m < 1.0 {
            m += 0.05;
            let v = remap_magnitude(m.min(1.0), dead);
            assert!(v > prev, "value must grow with magnitude ({m})");
            prev = v;
        }
    }

    #[test]
    fn remap_endpoints() {
        assert_eq!(remap_magnitude(1.0, 0.2), 1.0);
        // Just past the dead zone is just past zero.
        assert!(remap_magnitude(0.2001, 0.2) > 0.0);
    }

    #[test]
    fn remap_degenerate_dead_zone() {
        assert_eq!(remap_magnitude(1.0, 1.0), 0.0);
        assert_eq!(remap_magnitude(0.5, 1.5), 0.0);
    }

    #[test]
    fn vector_remap_preserves_direction() {
        let raw = Vec2::new(0.6, 0.8); // magnitude 1.0
        let v = remap_vector(raw, 0.2);
        assert!((v.magnitude() - 1.0).abs() < 1e-6);
        assert!((v.angle_deg() - raw.angle_deg()).abs() < 1e-4);

        let half = remap_vector(Vec2::new(0.3, 0.4), 0.2);
        assert!((half.angle_deg() - raw.angle_deg()).abs() < 1e-4);
        assert!(half.magnitude() < v.magnitude());
    }

    #[test]
    fn vector_remap_flattens_dead_zone() {
        assert_eq!(remap_vector(Vec2::new(0.1, 0.1), 0.2), Vec2::ZERO);
    }

    #[test]
    fn angular_distance_wraps() {
        assert_eq!(angular_distance_deg(350.0, 10.0), 20.0);
        assert_eq!(angular_distance_deg(10.0, 350.0), 20.0);
        assert_eq!(angular_distance_deg(90.0, 90.0), 0.0);
        assert_eq!(angular_distance_deg(0.0, 180.0), 180.0);
    }
}

use crate::gesture::Gesture;
use crate::pressable::Pressable;
use crate::settings::Settings;
use crate::util::{angular_distance_deg, remap_vector, Vec2};

/// The eight compass directions a stick can point toward. 0° is right
/// (+x) and angles grow counter-clockwise, so up is 90°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    UpRight,
    Up,
    UpLeft,
    Left,
    DownLeft,
    Down,
    DownRight,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::UpRight,
        Direction::Up,
        Direction::UpLeft,
        Direction::Left,
        Direction::DownLeft,
        Direction::Down,
        Direction::DownRight,
    ];

    /// Center axis of this direction's sector, in degrees.
    pub fn angle_deg(self) -> f32 {
        match self {
            Direction::Right => 0.0,
            Direction::UpRight => 45.0,
            Direction::Up => 90.0,
            Direction::UpLeft => 135.0,
            Direction::Left => 180.0,
            Direction::DownLeft => 225.0,
            Direction::Down => 270.0,
            Direction::DownRight => 315.0,
        }
    }
}

/// A 2-axis stick. The filtered position preserves the raw direction
/// while remapping the magnitude past the stick dead zone; the raw
/// surface bypasses filtering entirely for zero-threshold callers.
#[derive(Debug, Clone)]
pub struct Stick {
    label: &'static str,
    enabled: bool,
    raw: Vec2,
    position: Vec2,
    direction: Option<Direction>,
    raw_direction: Option<Direction>,
    // Sector half-width captured at update time, for points_toward.
    half_angle: f32,
    gesture: Gesture,
}

impl Stick {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            enabled: true,
            raw: Vec2::ZERO,
            position: Vec2::ZERO,
            direction: None,
            raw_direction: None,
            half_angle: 0.0,
            gesture: Gesture::new(),
        }
    }

    /// Consume one raw sample with each axis in [-1, 1].
    pub fn update(&mut self, raw: Vec2, now: f64, settings: &Settings) {
        if !self.enabled {
            self.gesture.clear_edges();
            return;
        }
        self.raw = raw.clamp_axes(-1.0, 1.0);
        self.position = remap_vector(self.raw, settings.stick_dead_zone);
        self.half_angle = settings.direction_angle / 2.0;
        self.direction = classify(self.position, self.half_angle);
        self.raw_direction = classify(self.raw, self.half_angle);
        self.gesture.update(
            self.position.magnitude() > settings.stick_pressed_zone,
            now,
            settings,
        );
    }

    /// Dead-zone-filtered position; zero while inside the dead zone.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Unfiltered position, bypassing the dead zone.
    pub fn raw_position(&self) -> Vec2 {
        self.raw
    }

    pub fn horizontal(&self) -> f32 {
        self.position.x
    }

    pub fn vertical(&self) -> f32 {
        self.position.y
    }

    /// The compass sector the filtered position points into, or `None`
    /// inside the dead zone. When `direction_angle` is above 45°
    /// adjacent sectors overlap and the nearest center wins; below 90°
    /// positions can fall into the gap between sectors and get `None`.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Sector classification of the unfiltered position.
    pub fn raw_direction(&self) -> Option<Direction> {
        self.raw_direction
    }

    /// The raw per-sector test: true iff the filtered position is
    /// non-zero and within half the direction angle of `dir`'s axis.
    /// Unlike [`Stick::direction`], overlapping sectors can both match.
    pub fn points_toward(&self, dir: Direction) -> bool {
        if self.position.magnitude() == 0.0 {
            return false;
        }
        angular_distance_deg(self.position.angle_deg(), dir.angle_deg())
            <= self.half_angle
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.gesture.force_release();
        self.raw = Vec2::ZERO;
        self.position = Vec2::ZERO;
        self.direction = None;
        self.raw_direction = None;
        self.enabled = false;
    }

    pub fn reset(&mut self) {
        self.raw = Vec2::ZERO;
        self.position = Vec2::ZERO;
        self.direction = None;
        self.raw_direction = None;
        self.gesture.reset();
    }
}

fn classify(position: Vec2, half_angle: f32) -> Option<Direction> {
    if position.magnitude() == 0.0 {
        return None;
    }
    let angle = position.angle_deg();
    let mut best: Option<(Direction, f32)> = None;
    for dir in Direction::ALL {
        let dist = angular_distance_deg(angle, dir.angle_deg());
        if dist <= half_angle && best.map_or(true, |(_, d)| dist < d) {
            best = Some((dir, dist));
        }
    }
    best.map(|(dir, _)| dir)
}

impl Pressable for Stick {
    fn magnitude(&self) -> f32 {
        self.position.magnitude()
    }

    fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    fn label(&self) -> &str {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_zone_zeroes_position_and_direction() {
        let settings = Settings::default(); // stick_dead_zone 0.2
        let mut s = Stick::new("LeftStick");
        s.update(Vec2::new(0.1, 0.1), 0.01, &settings);
        assert_eq!(s.position(), Vec2::ZERO);
        assert_eq!(s.direction(), None);
        // Raw surface still sees the sample.
        assert_eq!(s.raw_position(), Vec2::new(0.1, 0.1));
        assert_eq!(s.raw_direction(), Some(Direction::UpRight));
    }

    #[test]
    fn filtered_position_preserves_direction() {
        let settings = Settings::default();
        let mut s = Stick::new("LeftStick");
        s.update(Vec2::new(0.6, 0.8), 0.01, &settings);
        let pos = s.position();
        assert!((pos.angle_deg() - Vec2::new(0.6, 0.8).angle_deg()).abs() < 1e-4);
        assert!((pos.magnitude() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn compass_classification_default_angle() {
        // direction_angle 90: sectors overlap, nearest center wins.
        let settings = Settings::default();
        let mut s = Stick::new("LeftStick");

        s.update(Vec2::new(0.0, 1.0), 0.01, &settings);
        assert_eq!(s.direction(), Some(Direction::Up));

        s.update(Vec2::new(-1.0, 0.0), 0.02, &settings);
        assert_eq!(s.direction(), Some(Direction::Left));

        s.update(Vec2::new(0.7, -0.7), 0.03, &settings);
        assert_eq!(s.direction(), Some(Direction::DownRight));
    }

    #[test]
    fn overlapping_sectors_both_match_points_toward() {
        let settings = Settings {
            direction_angle: 90.0,
            ..Settings::default()
        };
        let mut s = Stick::new("LeftStick");
        // 70° is within 45° of both Up (90°) and UpRight (45°).
        let a = 70f32.to_radians();
        s.update(Vec2::new(a.cos(), a.sin()), 0.01, &settings);
        assert!(s.points_toward(Direction::Up));
        assert!(s.points_toward(Direction::UpRight));
        // direction() picks the nearest center.
        assert_eq!(s.direction(), Some(Direction::Up));
    }

    #[test]
    fn narrow_angle_leaves_gaps() {
        let settings = Settings {
            direction_angle: 30.0,
            ..Settings::default()
        };
        let mut s = Stick::new("LeftStick");
        // 68° is more than 15° away from both Up (90°) and UpRight (45°).
        let a = 68f32.to_radians();
        s.update(Vec2::new(a.cos(), a.sin()), 0.01, &settings);
        assert_eq!(s.direction(), None, "gap between sectors");
        assert!(!s.points_toward(Direction::Up));
        assert!(!s.points_toward(Direction::UpRight));
    }

    #[test]
    fn pressed_zone_uses_filtered_magnitude() {
        let settings = Settings {
            stick_dead_zone: 0.2,
            stick_pressed_zone: 0.5,
            ..Settings::default()
        };
        let mut s = Stick::new("LeftStick");
        // magnitude 0.55 remaps to ~0.44, below the pressed zone.
        s.update(Vec2::new(0.55, 0.0), 0.01, &settings);
        assert!(!s.is_pressed());
        // magnitude 0.7 remaps to 0.625, past it.
        s.update(Vec2::new(0.7, 0.0), 0.02, &settings);
        assert!(s.is_pressed());
        assert!(s.just_pressed());
    }

    #[test]
    fn disable_clears_and_forces_release() {
        let settings = Settings::default();
        let mut s = Stick::new("LeftStick");
        s.update(Vec2::new(1.0, 0.0), 0.01, &settings);
        assert!(s.is_pressed());
        s.disable();
        assert!(!s.is_pressed());
        assert!(s.just_released());
        assert_eq!(s.direction(), None);
        s.update(Vec2::new(1.0, 0.0), 0.02, &settings);
        assert_eq!(s.position(), Vec2::ZERO);
        assert!(!s.just_released(), "release edge lasts one tick");
    }
}

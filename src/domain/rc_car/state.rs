use std::fmt;

/// Pose and speed of the car.
///
/// `(x, y)` is the midpoint of the rear axle. `speed` is signed (negative
/// means reversing) and `heading` is in radians, kept in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarState {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub heading: f64,
}

impl CarState {
    pub const DIMS: usize = 4;

    pub fn new(x: f64, y: f64, speed: f64, heading: f64) -> Self {
        Self {
            x,
            y,
            speed,
            heading,
        }
    }

    /// Euclidean distance from the rear axle to `point`.
    pub fn distance_to(&self, point: (f64, f64)) -> f64 {
        let dx = self.x - point.0;
        let dy = self.y - point.1;
        (dx * dx + dy * dy).sqrt()
    }

    /// `[x, y, speed, heading]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.speed, self.heading]
    }
}

impl From<[f64; 4]> for CarState {
    fn from(v: [f64; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<CarState> for [f64; 4] {
    fn from(s: CarState) -> Self {
        s.to_array()
    }
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x={:.3}, y={:.3}, speed={:.3}, heading={:.3})",
            self.x, self.y, self.speed, self.heading
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_conversions() {
        let s = CarState::from([1.0, -1.0, 0.2, 3.0]);
        assert_eq!(s.speed, 0.2);
        let back: [f64; 4] = s.into();
        assert_eq!(back, [1.0, -1.0, 0.2, 3.0]);
    }

    #[test]
    fn distance() {
        let s = CarState::new(0.0, 0.0, 0.0, 0.0);
        assert!((s.distance_to((3.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn display() {
        let s = CarState::new(0.5, 0.25, 0.0, 0.0);
        assert_eq!(
            s.to_string(),
            "(x=0.500, y=0.250, speed=0.000, heading=0.000)"
        );
    }
}

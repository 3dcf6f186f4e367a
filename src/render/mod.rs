//! Diagnostic scene rendering.
//!
//! Renderers own their drawing resources outright: nothing here is shared
//! with the domain, and a renderer failing to draw never affects
//! [`Domain::step`](crate::domain::Domain::step).

pub mod text;

pub use text::TextRenderer;

use crate::domain::{CarState, RCCarConfig};

/// Visualization hook consuming `(state, action)` pairs.
///
/// Best effort: implementations log and swallow drawing problems.
pub trait SceneRenderer<S> {
    fn show_domain(&mut self, state: &S, action: usize);
}

/// The goal disc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalMarker {
    pub center: (f64, f64),
    pub radius: f64,
}

impl GoalMarker {
    pub fn from_config(config: &RCCarConfig) -> Self {
        Self {
            center: config.goal,
            radius: config.goal_radius,
        }
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        let dx = p.0 - self.center.0;
        let dy = p.1 - self.center.1;
        dx * dx + dy * dy <= self.radius * self.radius
    }
}

/// Car body as a rectangle rotated about the rear axle.
///
/// Unrotated, the body spans `[x - rear_wheel_offset, x - rear_wheel_offset + car_length]`
/// along the heading and `car_width` across it, centered on the axle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarPatch {
    pub axle: (f64, f64),
    pub heading: f64,
    pub length: f64,
    pub width: f64,
    pub rear_offset: f64,
}

impl CarPatch {
    pub fn from_state(state: &CarState, config: &RCCarConfig) -> Self {
        Self {
            axle: (state.x, state.y),
            heading: state.heading,
            length: config.car_length,
            width: config.car_width,
            rear_offset: config.rear_wheel_offset,
        }
    }

    /// Maps a world point into the body frame (along, across).
    fn to_body(&self, p: (f64, f64)) -> (f64, f64) {
        let (sin, cos) = self.heading.sin_cos();
        let dx = p.0 - self.axle.0;
        let dy = p.1 - self.axle.1;
        (dx * cos + dy * sin, -dx * sin + dy * cos)
    }

    pub fn contains(&self, p: (f64, f64)) -> bool {
        let (u, v) = self.to_body(p);
        u >= -self.rear_offset
            && u <= self.length - self.rear_offset
            && v.abs() <= self.width / 2.0
    }

    /// Corners in world coordinates, counter-clockwise from rear-right.
    pub fn corners(&self) -> [(f64, f64); 4] {
        let (sin, cos) = self.heading.sin_cos();
        let rear = -self.rear_offset;
        let front = self.length - self.rear_offset;
        let half = self.width / 2.0;
        [(rear, -half), (front, -half), (front, half), (rear, half)].map(|(u, v)| {
            (
                self.axle.0 + u * cos - v * sin,
                self.axle.1 + u * sin + v * cos,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn unrotated_corners() {
        let config = RCCarConfig::default();
        let patch = CarPatch::from_state(&CarState::new(0.0, 0.0, 0.0, 0.0), &config);
        let c = patch.corners();
        assert_relative_eq!(c[0].0, -0.05, epsilon = 1e-12);
        assert_relative_eq!(c[0].1, -0.075, epsilon = 1e-12);
        assert_relative_eq!(c[2].0, 0.25, epsilon = 1e-12);
        assert_relative_eq!(c[2].1, 0.075, epsilon = 1e-12);
    }

    #[test]
    fn rotation_about_rear_axle() {
        let config = RCCarConfig::default();
        let patch = CarPatch::from_state(&CarState::new(1.0, 0.0, 0.0, PI / 2.0), &config);
        // Facing +y, the nose sits above the axle.
        assert!(patch.contains((1.0, 0.2)));
        assert!(!patch.contains((1.0, -0.2)));
        assert!(!patch.contains((1.2, 0.0)));
        let c = patch.corners();
        assert_relative_eq!(c[1].1, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn goal_marker() {
        let goal = GoalMarker::from_config(&RCCarConfig::default());
        assert!(goal.contains((0.5, 0.55)));
        assert!(!goal.contains((0.0, 0.0)));
    }
}

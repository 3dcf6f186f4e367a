//! Configuration for the RC car domain.

use std::f64::consts::PI;

use super::state::CarState;
use crate::domain::DomainError;

/// Geometry, dynamics, and reward constants of the RC car domain.
///
/// The room is centered on the origin. All values are fixed for the lifetime
/// of an [`RCCar`](super::RCCar); override fields with struct update syntax:
///
/// ```
/// use rcdomain::domain::RCCarConfig;
///
/// let config = RCCarConfig {
///     goal_radius: 0.2,
///     ..RCCarConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RCCarConfig {
    // --- Room geometry (meters) ---
    /// Extent of the room along x; walls at `±room_width / 2`.
    pub room_width: f64,
    /// Extent of the room along y; walls at `±room_height / 2`.
    pub room_height: f64,

    // --- Dynamics ---
    /// Speed change per unit time for a full throttle input.
    pub acceleration: f64,
    /// Front-wheel steering angle for a full left/right input (radians).
    /// Must lie in `[0, π/2)` so that `tan` keeps its sign.
    pub turn_angle: f64,
    /// Lowest (reversing) speed.
    pub speed_min: f64,
    /// Highest forward speed.
    pub speed_max: f64,
    /// Integration time step Δt.
    pub delta_t: f64,

    // --- Vehicle ---
    /// Wheelbase L of the bicycle model.
    pub car_length: f64,
    /// Body width, used only for rendering.
    pub car_width: f64,
    /// Distance from the rear end of the body to the rear axle.
    pub rear_wheel_offset: f64,

    // --- Episode ---
    /// State returned by `s0`; must lie inside the state-space box.
    pub init_state: CarState,
    /// Center of the goal disc.
    pub goal: (f64, f64),
    /// Episode ends when the rear axle is strictly closer than this to `goal`.
    pub goal_radius: f64,
    /// Reward for every non-terminal step.
    pub step_reward: f64,
    /// Reward for the step that enters the goal disc.
    pub goal_reward: f64,
    /// Discount factor for returns.
    pub gamma: f64,
    /// Step cap an episode driver enforces.
    pub episode_cap: u32,
}

impl RCCarConfig {
    pub fn x_min(&self) -> f64 {
        -self.room_width / 2.0
    }

    pub fn x_max(&self) -> f64 {
        self.room_width / 2.0
    }

    pub fn y_min(&self) -> f64 {
        -self.room_height / 2.0
    }

    pub fn y_max(&self) -> f64 {
        self.room_height / 2.0
    }

    pub const HEADING_MIN: f64 = -PI;
    pub const HEADING_MAX: f64 = PI;

    /// Checks that the configuration describes a usable domain.
    pub fn validate(&self) -> Result<(), DomainError> {
        let finite = [
            ("room_width", self.room_width),
            ("room_height", self.room_height),
            ("acceleration", self.acceleration),
            ("turn_angle", self.turn_angle),
            ("speed_min", self.speed_min),
            ("speed_max", self.speed_max),
            ("delta_t", self.delta_t),
            ("car_length", self.car_length),
            ("car_width", self.car_width),
            ("rear_wheel_offset", self.rear_wheel_offset),
            ("goal.x", self.goal.0),
            ("goal.y", self.goal.1),
            ("goal_radius", self.goal_radius),
            ("step_reward", self.step_reward),
            ("goal_reward", self.goal_reward),
            ("gamma", self.gamma),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        let positive = [
            ("room_width", self.room_width),
            ("room_height", self.room_height),
            ("delta_t", self.delta_t),
            ("car_length", self.car_length),
            ("car_width", self.car_width),
            ("goal_radius", self.goal_radius),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(invalid(format!("{name} must be positive")));
        }

        if !(0.0..PI / 2.0).contains(&self.turn_angle) {
            return Err(invalid("turn_angle must lie in [0, π/2)".into()));
        }
        if self.rear_wheel_offset < 0.0 {
            return Err(invalid("rear_wheel_offset must not be negative".into()));
        }
        if self.speed_min > self.speed_max {
            return Err(invalid("speed_min must not exceed speed_max".into()));
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(invalid("gamma must lie in [0, 1]".into()));
        }
        if self.episode_cap == 0 {
            return Err(invalid("episode_cap must be positive".into()));
        }
        let (gx, gy) = self.goal;
        if gx < self.x_min() || gx > self.x_max() || gy < self.y_min() || gy > self.y_max() {
            return Err(invalid("goal must lie inside the room".into()));
        }

        let s = &self.init_state;
        let finite_state = s.to_array().iter().all(|v| v.is_finite());
        if !finite_state
            || s.x < self.x_min()
            || s.x > self.x_max()
            || s.y < self.y_min()
            || s.y > self.y_max()
        {
            return Err(invalid("init_state must lie inside the room".into()));
        }
        if s.speed < self.speed_min || s.speed > self.speed_max {
            return Err(invalid("init_state speed must lie in [speed_min, speed_max]".into()));
        }
        if !(s.heading > Self::HEADING_MIN && s.heading <= Self::HEADING_MAX) {
            return Err(invalid("init_state heading must lie in (-π, π]".into()));
        }
        Ok(())
    }
}

fn invalid(msg: String) -> DomainError {
    DomainError::InvalidConfig(msg)
}

impl Default for RCCarConfig {
    fn default() -> Self {
        Self {
            room_width: 3.0,
            room_height: 2.0,
            acceleration: 0.1,
            turn_angle: PI / 6.0,
            speed_min: -0.3,
            speed_max: 0.3,
            delta_t: 0.1,
            car_length: 0.3,
            car_width: 0.15,
            rear_wheel_offset: 0.05,
            init_state: CarState::new(0.0, 0.0, 0.0, 0.0),
            goal: (0.5, 0.5),
            goal_radius: 0.1,
            step_reward: -1.0,
            goal_reward: 0.0,
            gamma: 0.9,
            episode_cap: 10_000,
        }
    }
}

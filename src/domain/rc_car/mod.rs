//! Remote-controlled car driving to a goal in an empty rectangular room.
//!
//! Planar kinematic bicycle model: the state is the rear-axle position,
//! signed speed and heading; each step applies one throttle input and one
//! steering input. Walls are inelastic (the car is pinned to the wall and
//! stops), heading wraps around. Every step costs `step_reward` until the
//! rear axle enters the goal disc, which pays `goal_reward` and ends the
//! episode.

pub mod action;
pub mod config;
pub mod state;


use tracing::{debug, trace};

pub use action::{CarAction, Steering, Throttle, ACTION_COUNT, ACTION_RADICES};
pub use config::RCCarConfig;
pub use state::CarState;

use super::{Domain, DomainError, StateBounds, Transition};
use crate::tools::{bound, wrap_angle};

/// The RC car domain.
///
/// Holds only immutable configuration; callers own and thread the state.
#[derive(Debug, Clone)]
pub struct RCCar {
    config: RCCarConfig,
    bounds: StateBounds,
    noise: f64,
}

impl RCCar {
    /// Creates the domain after validating `config`.
    pub fn new(config: RCCarConfig) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: RCCarConfig) -> Self {
        let bounds = StateBounds::new(&[
            (config.x_min(), config.x_max()),
            (config.y_min(), config.y_max()),
            (config.speed_min, config.speed_max),
            (RCCarConfig::HEADING_MIN, RCCarConfig::HEADING_MAX),
        ]);
        Self {
            config,
            bounds,
            noise: 0.0,
        }
    }

    /// Sets the noise level. Stored for extensions; the transition ignores it.
    pub fn with_noise(mut self, noise: f64) -> Self {
        self.noise = noise;
        self
    }

    pub fn config(&self) -> &RCCarConfig {
        &self.config
    }

    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Applies a decoded action. Infallible counterpart of [`Domain::step`].
    pub fn step_action(&self, state: &CarState, action: CarAction) -> Transition<CarState> {
        let next_state = self.integrate(state, action);
        let terminal = self.is_terminal(&next_state);
        let reward = if terminal {
            self.config.goal_reward
        } else {
            self.config.step_reward
        };

        trace!(
            action = %action,
            state = %state,
            next_state = %next_state,
            reward,
            "rc_car step"
        );
        if terminal {
            debug!(state = %next_state, "rc_car reached goal");
        }

        Transition {
            reward,
            next_state,
            terminal,
        }
    }

    /// One Euler step of the bicycle model followed by bounding and the
    /// wall-collision rule.
    fn integrate(&self, s: &CarState, action: CarAction) -> CarState {
        let c = &self.config;
        let acc = action.throttle.sign();
        let turn = action.steering.sign();

        let nx = s.x + s.speed * s.heading.cos() * c.delta_t;
        let ny = s.y + s.speed * s.heading.sin() * c.delta_t;
        let nspeed = s.speed + acc * c.acceleration * c.delta_t;
        let nheading = s.heading + s.speed / c.car_length * (turn * c.turn_angle).tan();

        let nx = bound(nx, c.x_min(), c.x_max());
        let ny = bound(ny, c.y_min(), c.y_max());
        let mut nspeed = bound(nspeed, c.speed_min, c.speed_max);
        let nheading = wrap_angle(nheading, RCCarConfig::HEADING_MIN, RCCarConfig::HEADING_MAX);

        // `bound` assigns the wall coordinate exactly, so equality detects contact.
        if nx == c.x_min() || nx == c.x_max() || ny == c.y_min() || ny == c.y_max() {
            nspeed = 0.0;
        }

        CarState::new(nx, ny, nspeed, nheading)
    }
}

impl Default for RCCar {
    fn default() -> Self {
        Self::from_valid(RCCarConfig::default())
    }
}

impl Domain for RCCar {
    type State = CarState;

    fn state_space_bounds(&self) -> &StateBounds {
        &self.bounds
    }

    fn action_count(&self) -> usize {
        ACTION_COUNT
    }

    fn s0(&self) -> CarState {
        self.config.init_state
    }

    fn step(&self, state: &CarState, action: usize) -> Result<Transition<CarState>, DomainError> {
        let action = CarAction::from_id(action)?;
        Ok(self.step_action(state, action))
    }

    fn is_terminal(&self, state: &CarState) -> bool {
        state.distance_to(self.config.goal) < self.config.goal_radius
    }

    fn gamma(&self) -> f64 {
        self.config.gamma
    }

    fn episode_cap(&self) -> u32 {
        self.config.episode_cap
    }
}

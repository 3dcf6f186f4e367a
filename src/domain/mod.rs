//! The episodic MDP contract and its concrete domains.
//!
//! A [`Domain`] is a pure transition function over caller-owned states:
//!
//! 1. Call [`Domain::s0`] to start an episode.
//! 2. Ask a policy for an action in `[0, action_count)`.
//! 3. Call [`Domain::step`] and thread the returned `next_state` into the
//!    next call, until `terminal` or [`Domain::episode_cap`] steps elapse.
//!
//! The domain keeps no per-episode state, so one instance can serve many
//! concurrent rollouts.

pub mod error;
pub mod rc_car;
pub mod rollout;

use std::fmt;

pub use error::DomainError;
pub use rc_car::{CarAction, CarState, RCCar, RCCarConfig, Steering, Throttle};
pub use rollout::{run_episode, EpisodeSummary, RandomActions};

/// Closed interval `[min, max]` for one state dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimBounds {
    pub min: f64,
    pub max: f64,
}

impl DimBounds {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    pub fn width(&self) -> f64 {
        self.max - self.min
    }
}

/// Ordered per-dimension bounds of a box-shaped continuous state space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateBounds {
    dims: Vec<DimBounds>,
}

impl StateBounds {
    /// Builds bounds from `(min, max)` pairs, one per state dimension.
    pub fn new(pairs: &[(f64, f64)]) -> Self {
        Self {
            dims: pairs.iter().map(|&(lo, hi)| DimBounds::new(lo, hi)).collect(),
        }
    }

    /// Number of state dimensions.
    pub fn dims(&self) -> usize {
        self.dims.len()
    }

    pub fn get(&self, dim: usize) -> Option<&DimBounds> {
        self.dims.get(dim)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimBounds> {
        self.dims.iter()
    }

    /// True if `values` has one entry per dimension and each lies in its interval.
    pub fn contains(&self, values: &[f64]) -> bool {
        values.len() == self.dims.len()
            && self.dims.iter().zip(values).all(|(b, &v)| b.contains(v))
    }

    /// Bounds as `(min, max)` pairs.
    pub fn as_pairs(&self) -> Vec<(f64, f64)> {
        self.dims.iter().map(|b| (b.min, b.max)).collect()
    }
}

/// Outcome of one call to [`Domain::step`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition<S> {
    /// Reward earned by this transition.
    pub reward: f64,
    /// Freshly computed successor state.
    pub next_state: S,
    /// Whether `next_state` ends the episode.
    pub terminal: bool,
}

/// Responsibilities every simulated environment provides.
///
/// Implementations must be pure: `step` and `is_terminal` depend only on
/// their arguments and the immutable domain configuration.
pub trait Domain: Send + Sync {
    /// State representation threaded through `step` by the caller.
    type State: Clone + fmt::Debug + PartialEq;

    /// Declared continuous state-space box.
    fn state_space_bounds(&self) -> &StateBounds;

    /// Number of discrete actions; valid identifiers are `[0, action_count)`.
    fn action_count(&self) -> usize;

    /// Initial state of a new episode.
    fn s0(&self) -> Self::State;

    /// Applies `action` to `state`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidAction`] if `action >= action_count()`.
    fn step(&self, state: &Self::State, action: usize)
        -> Result<Transition<Self::State>, DomainError>;

    /// Whether `state` ends the episode. Agrees with the flag returned by `step`.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Discount factor.
    fn gamma(&self) -> f64 {
        1.0
    }

    /// Step cap an episode driver should enforce.
    fn episode_cap(&self) -> u32 {
        u32::MAX
    }

    fn state_dims(&self) -> usize {
        self.state_space_bounds().dims()
    }

    /// Actions available in `state`. Every action by default.
    fn possible_actions(&self, _state: &Self::State) -> Vec<usize> {
        (0..self.action_count()).collect()
    }

    /// Rejects identifiers outside `[0, action_count)`.
    fn check_action(&self, action: usize) -> Result<(), DomainError> {
        let action_count = self.action_count();
        if action < action_count {
            Ok(())
        } else {
            Err(DomainError::InvalidAction {
                action: i64::try_from(action).unwrap_or(i64::MAX),
                action_count,
            })
        }
    }
}

//! Episode driver for smoke-testing domains.
//!
//! Runs a single episode from [`Domain::s0`] with a caller-supplied action
//! selector and summarizes it. Learning agents live elsewhere; this is the
//! minimal loop needed to exercise a domain end to end.

use std::fmt;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

use super::{Domain, DomainError};

/// Outcome of one episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary<S> {
    /// Number of transitions taken.
    pub steps: u32,
    /// Undiscounted sum of rewards.
    pub total_return: f64,
    /// Sum of rewards discounted by the domain's `gamma`.
    pub discounted_return: f64,
    /// Whether the episode ended in a terminal state (as opposed to the cap).
    pub terminal: bool,
    pub final_state: S,
}

/// Runs one episode.
///
/// `select` receives the current state and the actions available in it and
/// returns the action to take. The episode stops at a terminal state or
/// after `cap` steps; `None` uses [`Domain::episode_cap`].
///
/// # Errors
///
/// Propagates [`DomainError::InvalidAction`] if `select` returns an
/// identifier outside the action space.
pub fn run_episode<D, F>(
    domain: &D,
    mut select: F,
    cap: Option<u32>,
) -> Result<EpisodeSummary<D::State>, DomainError>
where
    D: Domain + ?Sized,
    F: FnMut(&D::State, &[usize]) -> usize,
{
    let cap = cap.unwrap_or_else(|| domain.episode_cap());
    let gamma = domain.gamma();

    let mut state = domain.s0();
    let mut terminal = domain.is_terminal(&state);
    let mut steps = 0u32;
    let mut total_return = 0.0;
    let mut discounted_return = 0.0;
    let mut discount = 1.0;

    while !terminal && steps < cap {
        let actions = domain.possible_actions(&state);
        let action = select(&state, &actions);
        let t = domain.step(&state, action)?;

        total_return += t.reward;
        discounted_return += discount * t.reward;
        discount *= gamma;
        steps += 1;
        terminal = t.terminal;
        state = t.next_state;
    }

    debug!(steps, total_return, terminal, "episode finished");

    Ok(EpisodeSummary {
        steps,
        total_return,
        discounted_return,
        terminal,
        final_state: state,
    })
}

/// Uniformly random action selection, seeded for reproducibility.
#[derive(Debug, Clone)]
pub struct RandomActions {
    rng: StdRng,
}

impl RandomActions {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks one of `actions`, or `0` when the list is empty.
    pub fn select(&mut self, actions: &[usize]) -> usize {
        actions.choose(&mut self.rng).copied().unwrap_or(0)
    }
}

impl<S: fmt::Debug> fmt::Display for EpisodeSummary<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Episode ({} steps) ===", self.steps)?;
        writeln!(f, "  Reached goal:       {}", self.terminal)?;
        writeln!(f, "  Return:             {:.2}", self.total_return)?;
        writeln!(f, "  Discounted return:  {:.4}", self.discounted_return)?;
        write!(f, "  Final state:        {:?}", self.final_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarAction, CarState, RCCar, RCCarConfig, Steering, Throttle};

    #[test]
    fn capped_episode_counts_steps() {
        let d = RCCar::default();
        let coast = CarAction::new(Throttle::Coast, Steering::Straight).id();
        let summary = run_episode(&d, |_, _| coast, Some(25)).unwrap();
        assert_eq!(summary.steps, 25);
        assert!(!summary.terminal);
        assert_eq!(summary.total_return, -25.0);
        assert_eq!(summary.final_state, d.s0());
    }

    #[test]
    fn discounted_return_uses_gamma() {
        let d = RCCar::default();
        let summary = run_episode(&d, |_, _| 4, Some(3)).unwrap();
        let expected = -(1.0 + 0.9 + 0.81);
        assert!((summary.discounted_return - expected).abs() < 1e-12);
    }

    #[test]
    fn drive_to_goal_terminates() {
        // Start on the goal's x axis, facing it, and drive straight.
        let d = RCCar::new(RCCarConfig {
            init_state: CarState::new(-0.5, 0.5, 0.0, 0.0),
            ..RCCarConfig::default()
        })
        .unwrap();
        let forward = CarAction::new(Throttle::Accelerate, Steering::Straight).id();
        let summary = run_episode(&d, |_, _| forward, None).unwrap();
        assert!(summary.terminal);
        assert!(d.is_terminal(&summary.final_state));
        assert!(summary.steps < 1000);
        assert_eq!(summary.total_return, -(summary.steps as f64 - 1.0));
    }

    #[test]
    fn invalid_selection_propagates() {
        let d = RCCar::default();
        let err = run_episode(&d, |_, _| 42, Some(5)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidAction { action: 42, .. }));
    }

    #[test]
    fn random_actions_are_reproducible_and_valid() {
        let d = RCCar::default();
        let mut a = RandomActions::new(7);
        let mut b = RandomActions::new(7);
        let first = run_episode(&d, |_, acts| a.select(acts), Some(200)).unwrap();
        let second = run_episode(&d, |_, acts| b.select(acts), Some(200)).unwrap();
        assert_eq!(first, second);
        assert_eq!(RandomActions::new(1).select(&[]), 0);
    }

    #[test]
    fn summary_display() {
        let d = RCCar::default();
        let summary = run_episode(&d, |_, _| 4, Some(2)).unwrap();
        let text = summary.to_string();
        assert!(text.contains("Episode (2 steps)"));
        assert!(text.contains("-2.00"));
    }
}

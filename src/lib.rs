//! rcdomain - episodic MDP domains for reinforcement-learning test beds.
//!
//! Provides the [`Domain`] contract (initial state, pure transition,
//! termination test, bounded state space, flat discrete actions), the
//! [`RCCar`] kinematic vehicle domain, the mixed-radix action codec, and a
//! text scene renderer.

pub mod domain;
pub mod render;
pub mod tools;

pub use domain::{
    CarAction, CarState, Domain, DomainError, RCCar, RCCarConfig, StateBounds, Transition,
};
pub use render::{SceneRenderer, TextRenderer};
pub use tools::{index_to_multi_index, multi_index_to_index, CodecError, MixedRadix};

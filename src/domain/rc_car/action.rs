//! Flat action identifiers and their two control axes.
//!
//! The nine actions are the product `Throttle × Steering`, flattened with the
//! mixed-radix codec (throttle varies fastest):
//!
//! | id | throttle | steering |
//! |----|----------|----------|
//! | 0  | -1       | -1       |
//! | 1  |  0       | -1       |
//! | 2  | +1       | -1       |
//! | 3  | -1       |  0       |
//! | 4  |  0       |  0       |
//! | 5  | +1       |  0       |
//! | 6  | -1       | +1       |
//! | 7  |  0       | +1       |
//! | 8  | +1       | +1       |

use std::fmt;

use crate::domain::DomainError;
use crate::tools::index_to_multi_index;

/// Per-axis cardinalities of the action space.
pub const ACTION_RADICES: [usize; 2] = [3, 3];

/// Number of flat action identifiers.
pub const ACTION_COUNT: usize = 9;

/// Longitudinal control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Throttle {
    Decelerate,
    Coast,
    Accelerate,
}

/// Front-wheel steering control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Steering {
    Left,
    Straight,
    Right,
}

impl Throttle {
    fn from_digit(d: usize) -> Self {
        match d {
            0 => Throttle::Decelerate,
            1 => Throttle::Coast,
            _ => Throttle::Accelerate,
        }
    }

    fn digit(self) -> usize {
        match self {
            Throttle::Decelerate => 0,
            Throttle::Coast => 1,
            Throttle::Accelerate => 2,
        }
    }

    /// Signed magnitude in `{-1, 0, 1}`.
    pub fn sign(self) -> f64 {
        self.digit() as f64 - 1.0
    }
}

impl Steering {
    fn from_digit(d: usize) -> Self {
        match d {
            0 => Steering::Left,
            1 => Steering::Straight,
            _ => Steering::Right,
        }
    }

    fn digit(self) -> usize {
        match self {
            Steering::Left => 0,
            Steering::Straight => 1,
            Steering::Right => 2,
        }
    }

    /// Signed magnitude in `{-1, 0, 1}`.
    pub fn sign(self) -> f64 {
        self.digit() as f64 - 1.0
    }
}

/// A decoded RC car action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CarAction {
    pub throttle: Throttle,
    pub steering: Steering,
}

impl CarAction {
    pub fn new(throttle: Throttle, steering: Steering) -> Self {
        Self { throttle, steering }
    }

    /// Decodes a flat identifier in `[0, 9)`.
    pub fn from_id(id: usize) -> Result<Self, DomainError> {
        let digits = index_to_multi_index(id, &ACTION_RADICES)
            .map_err(|_| invalid(i64::try_from(id).unwrap_or(i64::MAX)))?;
        Ok(Self {
            throttle: Throttle::from_digit(digits[0]),
            steering: Steering::from_digit(digits[1]),
        })
    }

    /// Flat identifier of this action.
    pub fn id(&self) -> usize {
        // Throttle is the fastest-varying axis.
        self.throttle.digit() + ACTION_RADICES[0] * self.steering.digit()
    }

    /// All actions in identifier order.
    pub fn all() -> impl Iterator<Item = CarAction> {
        (0..ACTION_COUNT).filter_map(|id| CarAction::from_id(id).ok())
    }
}

fn invalid(action: i64) -> DomainError {
    DomainError::InvalidAction {
        action,
        action_count: ACTION_COUNT,
    }
}

impl TryFrom<usize> for CarAction {
    type Error = DomainError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        CarAction::from_id(id)
    }
}

impl TryFrom<i64> for CarAction {
    type Error = DomainError;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        let id = usize::try_from(id).map_err(|_| invalid(id))?;
        CarAction::from_id(id)
    }
}

impl From<CarAction> for usize {
    fn from(a: CarAction) -> Self {
        a.id()
    }
}

impl fmt::Display for CarAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{:?}", self.throttle, self.steering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_table() {
        let a = CarAction::from_id(0).unwrap();
        assert_eq!(a, CarAction::new(Throttle::Decelerate, Steering::Left));
        let a = CarAction::from_id(5).unwrap();
        assert_eq!(a, CarAction::new(Throttle::Accelerate, Steering::Straight));
        let a = CarAction::from_id(7).unwrap();
        assert_eq!(a, CarAction::new(Throttle::Coast, Steering::Right));
    }

    #[test]
    fn signs() {
        let a = CarAction::from_id(5).unwrap();
        assert_eq!(a.throttle.sign(), 1.0);
        assert_eq!(a.steering.sign(), 0.0);
        let a = CarAction::from_id(0).unwrap();
        assert_eq!(a.throttle.sign(), -1.0);
        assert_eq!(a.steering.sign(), -1.0);
    }

    #[test]
    fn id_round_trip() {
        for id in 0..ACTION_COUNT {
            assert_eq!(CarAction::from_id(id).unwrap().id(), id);
        }
        assert_eq!(CarAction::all().count(), ACTION_COUNT);
    }

    #[test]
    fn id_agrees_with_codec() {
        for action in CarAction::all() {
            let digits = [action.throttle.digit(), action.steering.digit()];
            assert_eq!(
                action.id(),
                crate::tools::multi_index_to_index(&digits, &ACTION_RADICES).unwrap()
            );
        }
        assert_eq!(CarAction::new(Throttle::Accelerate, Steering::Right).id(), 8);
        assert_eq!(CarAction::new(Throttle::Decelerate, Steering::Left).id(), 0);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(
            CarAction::from_id(9).unwrap_err(),
            DomainError::InvalidAction {
                action: 9,
                action_count: 9
            }
        );
        assert_eq!(
            CarAction::try_from(-1i64).unwrap_err(),
            DomainError::InvalidAction {
                action: -1,
                action_count: 9
            }
        );
    }

    #[test]
    fn display() {
        let a = CarAction::new(Throttle::Coast, Steering::Left);
        assert_eq!(a.to_string(), "Coast/Left");
    }
}

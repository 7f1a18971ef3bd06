//! Weight value object for decision criteria (1 to 10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance of a criterion: 1 (barely matters) to 10 (decisive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weight(u8);

impl Weight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Weight given to a freshly added criterion.
    pub const DEFAULT: Self = Self(5);

    /// Creates a Weight, clamping into `1..=10` the way a bounded slider does.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a Weight, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weight",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for Weight {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Weight> for u8 {
    fn from(weight: Weight) -> Self {
        weight.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weight_is_five() {
        assert_eq!(Weight::default().value(), 5);
    }

    #[test]
    fn new_clamps_into_range() {
        assert_eq!(Weight::new(0).value(), 1);
        assert_eq!(Weight::new(7).value(), 7);
        assert_eq!(Weight::new(42).value(), 10);
    }

    #[test]
    fn try_new_accepts_bounds() {
        assert!(Weight::try_new(1).is_ok());
        assert!(Weight::try_new(10).is_ok());
    }

    #[test]
    fn try_new_rejects_zero_and_eleven() {
        assert!(matches!(
            Weight::try_new(0),
            Err(ValidationError::OutOfRange { min: 1, max: 10, actual: 0, .. })
        ));
        assert!(Weight::try_new(11).is_err());
    }

    #[test]
    fn deserialization_enforces_range() {
        let weight: Weight = serde_json::from_str("8").unwrap();
        assert_eq!(weight.value(), 8);
        assert!(serde_json::from_str::<Weight>("0").is_err());
        assert!(serde_json::from_str::<Weight>("11").is_err());
    }

    #[test]
    fn displays_out_of_ten() {
        assert_eq!(format!("{}", Weight::new(3)), "3/10");
    }
}

/*
MIT License with ARTmie Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: ARTmie 0.1.1
Copyright (c) 2025 Enrico P. Metzner.
*/

//! Kind selector of the Hankel functions
//!
//! H⁽¹⁾_ν = J_ν + iY_ν and H⁽²⁾_ν = J_ν - iY_ν. The engine evaluates both
//! together with J and Y; see [`Evaluation`](super::Evaluation).

use crate::utils::errors::NumericError;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

/// Kind of Hankel function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HankelKind {
    /// H⁽¹⁾ = J + iY
    First,
    /// H⁽²⁾ = J - iY
    Second,
}

impl TryFrom<i64> for HankelKind {
    type Error = NumericError;

    fn try_from(kind: i64) -> Result<Self, Self::Error> {
        match kind {
            1 => Ok(HankelKind::First),
            2 => Ok(HankelKind::Second),
            other => Err(NumericError::Domain(format!(
                "Hankel kind must be 1 or 2, got {}",
                other
            ))),
        }
    }
}

impl TryFrom<i32> for HankelKind {
    type Error = NumericError;

    fn try_from(kind: i32) -> Result<Self, Self::Error> {
        HankelKind::try_from(kind as i64)
    }
}

impl From<HankelKind> for u8 {
    fn from(kind: HankelKind) -> Self {
        match kind {
            HankelKind::First => 1,
            HankelKind::Second => 2,
        }
    }
}

impl fmt::Display for HankelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H({})", u8::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_integer() {
        assert_eq!(HankelKind::try_from(1_i64).unwrap(), HankelKind::First);
        assert_eq!(HankelKind::try_from(2_i32).unwrap(), HankelKind::Second);
        assert!(HankelKind::try_from(3_i64).unwrap_err().is_domain());
        assert!(HankelKind::try_from(0_i32).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(HankelKind::First.to_string(), "H(1)");
        assert_eq!(u8::from(HankelKind::Second), 2);
    }
}

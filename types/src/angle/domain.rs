//! The ordinal classification of an angle, analogous to a quadrant.
//! <https://en.wikipedia.org/wiki/Quadrant_(plane_geometry)>

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::consts::MACRO_IN_DOMAIN;

/// One of the four ordinal domains of a full turn.
///
/// A domain spans ten whole macro units, so the domain of an angle
/// is the tens digit of its macro value plus one.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Domain {
    /// Macro values in `[0, 10)`, degrees in `[0, 90)`
    First = 1,
    /// Macro values in `[10, 20)`, degrees in `[90, 180)`
    Second = 2,
    /// Macro values in `[20, 30)`, degrees in `[180, 270)`
    Third = 3,
    /// Macro values in `[30, 40)`, degrees in `[270, 360)`
    Fourth = 4,
}

impl Domain {
    /// Classify a macro value by its tens digit.
    ///
    /// The boundaries are left-inclusive: exactly 10, 20 or 30 macro units
    /// belong to the higher domain. A normalized angle cannot produce a value
    /// outside of `[0, 40)` except through the rounding at the upper boundary;
    /// any such value falls into the last domain.
    pub(super) fn from_macro(m: f64) -> Self {
        if (0.0..MACRO_IN_DOMAIN).contains(&m) {
            Self::First
        } else if (MACRO_IN_DOMAIN..2.0 * MACRO_IN_DOMAIN).contains(&m) {
            Self::Second
        } else if (2.0 * MACRO_IN_DOMAIN..3.0 * MACRO_IN_DOMAIN).contains(&m) {
            Self::Third
        } else {
            Self::Fourth
        }
    }

    /// The ordinal number of the domain, 1 to 4
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl From<Domain> for u8 {
    fn from(domain: Domain) -> Self {
        domain.number()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_domains() {
        assert_eq!(Domain::from_macro(5.0), Domain::First);
        assert_eq!(Domain::from_macro(15.0), Domain::Second);
        assert_eq!(Domain::from_macro(25.0), Domain::Third);
        assert_eq!(Domain::from_macro(35.0), Domain::Fourth);
    }

    #[test]
    fn left_inclusive_boundaries() {
        assert_eq!(Domain::from_macro(0.0), Domain::First);
        assert_eq!(Domain::from_macro(10.0), Domain::Second);
        assert_eq!(Domain::from_macro(20.0), Domain::Third);
        assert_eq!(Domain::from_macro(30.0), Domain::Fourth);
    }

    #[test]
    fn just_below_the_boundary() {
        assert_eq!(Domain::from_macro(9.999), Domain::First);
        assert_eq!(Domain::from_macro(19.999), Domain::Second);
        assert_eq!(Domain::from_macro(29.999), Domain::Third);
        assert_eq!(Domain::from_macro(39.999), Domain::Fourth);
    }

    #[test]
    fn out_of_turn_values_fall_into_the_last_domain() {
        assert_eq!(Domain::from_macro(40.0), Domain::Fourth);
        assert_eq!(Domain::from_macro(100.0), Domain::Fourth);
        assert_eq!(Domain::from_macro(-1.0), Domain::Fourth);
    }

    #[test]
    fn numbers() {
        assert_eq!(Domain::First.number(), 1);
        assert_eq!(Domain::Second.number(), 2);
        assert_eq!(Domain::Third.number(), 3);
        assert_eq!(Domain::Fourth.number(), 4);
        assert_eq!(u8::from(Domain::Third), 3);
    }

    #[test]
    fn ordinal_ordering() {
        assert!(Domain::First < Domain::Second);
        assert!(Domain::Third < Domain::Fourth);
    }

    #[test]
    fn display_is_the_number() {
        assert_eq!(Domain::Third.to_string(), "3");
    }
}

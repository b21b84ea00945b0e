//! The closed set of units an angular value can be expressed in

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    consts::{DEG_IN_MACRO, DEG_IN_MICRO},
    errors::InvalidUnit,
};

/// The four recognized representations of an angular value.
///
/// The set is closed, so constructing an [`Angle`](super::Angle)
/// with a statically known unit cannot fail.
/// Dynamic (textual) unit selectors go through [`FromStr`]
/// which rejects anything else with [`InvalidUnit`].
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Standard degrees, 360 per turn
    Degrees,
    /// Standard radians, 2π per turn
    Radians,
    /// DPAS macro units, 40 per turn (9 degrees each)
    Macro,
    /// DPAS micro units, 400 per turn (0.9 degrees each)
    Micro,
}

impl AngleUnit {
    /// Scale a value in this unit into degrees (not yet reduced to a single turn)
    pub(super) fn to_degrees(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value,
            Self::Radians => value.to_degrees(),
            Self::Macro => value * DEG_IN_MACRO,
            Self::Micro => value * DEG_IN_MICRO,
        }
    }

    /// Represent a degrees value in this unit
    pub(super) fn from_degrees(self, degrees: f64) -> f64 {
        match self {
            Self::Degrees => degrees,
            Self::Radians => degrees.to_radians(),
            Self::Macro => degrees / DEG_IN_MACRO,
            Self::Micro => degrees / DEG_IN_MICRO,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Radians => "radians",
            Self::Macro => "macro",
            Self::Micro => "micro",
        }
    }
}

impl FromStr for AngleUnit {
    type Err = InvalidUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" | "°" => Ok(Self::Degrees),
            "radians" | "radian" | "rad" => Ok(Self::Radians),
            "macro" | "mac" => Ok(Self::Macro),
            "micro" | "mic" => Ok(Self::Micro),
            _ => Err(InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names() {
        assert_eq!("degrees".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!("radians".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert_eq!("macro".parse::<AngleUnit>().unwrap(), AngleUnit::Macro);
        assert_eq!("micro".parse::<AngleUnit>().unwrap(), AngleUnit::Micro);
    }

    #[test]
    fn short_names() {
        assert_eq!("deg".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!("rad".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert_eq!("mac".parse::<AngleUnit>().unwrap(), AngleUnit::Macro);
        assert_eq!("mic".parse::<AngleUnit>().unwrap(), AngleUnit::Micro);
    }

    #[test]
    fn degree_sign() {
        assert_eq!("°".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!("Degrees".parse::<AngleUnit>().unwrap(), AngleUnit::Degrees);
        assert_eq!("RAD".parse::<AngleUnit>().unwrap(), AngleUnit::Radians);
        assert_eq!("Macro".parse::<AngleUnit>().unwrap(), AngleUnit::Macro);
    }

    #[test]
    #[should_panic(expected = "InvalidUnit(\"foo\")")]
    fn unknown_unit() {
        let _u: AngleUnit = "foo".parse().unwrap();
    }

    #[test]
    fn unknown_unit_keeps_the_token() {
        let err = "turns".parse::<AngleUnit>().unwrap_err();
        assert_eq!(err.unit(), "turns");
    }

    #[test]
    fn empty_is_not_a_unit() {
        assert!("".parse::<AngleUnit>().is_err());
    }

    #[test]
    fn display_canonical() {
        assert_eq!(AngleUnit::Degrees.to_string(), "degrees");
        assert_eq!(AngleUnit::Macro.to_string(), "macro");
    }

    #[test]
    fn display_parses_back() {
        for unit in [
            AngleUnit::Degrees,
            AngleUnit::Radians,
            AngleUnit::Macro,
            AngleUnit::Micro,
        ] {
            assert_eq!(unit.to_string().parse::<AngleUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn scale_to_degrees() {
        assert_eq!(AngleUnit::Degrees.to_degrees(90.0), 90.0);
        assert_eq!(AngleUnit::Macro.to_degrees(10.0), 90.0);
        assert_eq!(AngleUnit::Micro.to_degrees(100.0), 90.0);
        assert_eq!(AngleUnit::Radians.to_degrees(std::f64::consts::FRAC_PI_2), 90.0);
    }

    #[test]
    fn scale_from_degrees() {
        assert_eq!(AngleUnit::Degrees.from_degrees(90.0), 90.0);
        assert_eq!(AngleUnit::Macro.from_degrees(90.0), 10.0);
        assert_eq!(AngleUnit::Micro.from_degrees(90.0), 100.0);
        assert_eq!(
            AngleUnit::Radians.from_degrees(90.0),
            std::f64::consts::FRAC_PI_2
        );
    }

    #[test]
    fn scaling_does_not_reduce_the_turn() {
        assert_eq!(AngleUnit::Macro.to_degrees(41.5), 373.5);
        assert_eq!(AngleUnit::Degrees.to_degrees(-90.0), -90.0);
    }
}

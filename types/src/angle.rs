//! The DPAS angle value: one normalized scalar with derived views.
//!
//! DPAS (the decimal positional angle system) subdivides the full turn
//! into 40 macro units (9° each) or 400 micro units (0.9° each),
//! so a quadrant spans ten whole macro units and the quadrant of an angle
//! is read off the tens digit of its macro value.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::wrap;

mod consts;
mod domain;
mod errors;
mod unit;

pub use domain::Domain;
pub use errors::{InvalidUnit, ParseAngleError};
pub use unit::AngleUnit;

use consts::{DEGREE_SIGN, FULL_TURN_DEG};

/// An angular value reduced into a single turn.
///
/// The only stored state is the angle in degrees, normalized at construction
/// by the mathematical (sign-independent) modulo 360; every other
/// representation is computed on demand. The value is immutable:
/// there is no way to change the angle once it is constructed.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Construct an angle from a value in the given unit.
    ///
    /// The value is converted to degrees and reduced into `[0, 360)`
    /// independently of its sign: `-90` degrees is the same angle as `270`.
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self {
            degrees: wrap(unit.to_degrees(value), FULL_TURN_DEG),
        }
    }

    /// The angle of the given number of degrees
    pub fn from_degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::Degrees)
    }

    /// The angle of the given number of radians
    pub fn from_radians(value: f64) -> Self {
        Self::new(value, AngleUnit::Radians)
    }

    /// The angle of the given number of DPAS macro units
    pub fn from_macro(value: f64) -> Self {
        Self::new(value, AngleUnit::Macro)
    }

    /// The angle of the given number of DPAS micro units
    pub fn from_micro(value: f64) -> Self {
        Self::new(value, AngleUnit::Micro)
    }

    /// The angle in standard degrees, in `[0, 360)`
    pub fn degrees(self) -> f64 {
        self.degrees
    }

    /// The angle in radians, in `[0, 2π)`
    pub fn radians(self) -> f64 {
        self.value_in(AngleUnit::Radians)
    }

    /// The DPAS macro value: the angle in 1/40-ths of the turn, in `[0, 40)`.
    ///
    /// (Named with the suffix since `macro` is a reserved word in Rust.)
    pub fn macro_value(self) -> f64 {
        self.value_in(AngleUnit::Macro)
    }

    /// The DPAS micro value: the angle in 1/400-ths of the turn, in `[0, 400)`
    pub fn micro_value(self) -> f64 {
        self.value_in(AngleUnit::Micro)
    }

    /// The angle represented in the given unit
    pub fn value_in(self, unit: AngleUnit) -> f64 {
        unit.from_degrees(self.degrees)
    }

    /// The ordinal domain (quadrant) the angle falls into
    pub fn domain(self) -> Domain {
        Domain::from_macro(self.macro_value())
    }
}

impl From<f64> for Angle {
    /// A bare number is treated as degrees
    fn from(value: f64) -> Self {
        Self::from_degrees(value)
    }
}

lazy_static! {
    static ref RE_VALUE_UNIT: Regex = Regex::new(
        r"(?x)                                  # enables verbose mode (to allow these comments)
        ^                                           # match the whole string from the start
        (?P<value>[-+]?                             # optional sign
            (?:\d+(?:\.\d*)?|\.\d+)                     # integer, decimal or bare fraction VALUE
            (?:[eE][-+]?\d+)?                           # optional exponent
        )
        \x20*                                       # the unit may be separated with spaces
        (?P<unit>\S+)                               # unit token (validated separately)
        $                                           # match the whole string till the end
        "
    )
    .expect("Value-unit regex is valid");
}

impl FromStr for Angle {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<f64>() {
            return Ok(Self::from_degrees(number));
        }
        Self::parse_value_unit(s)
    }
}

impl Angle {
    fn parse_value_unit(s: &str) -> Result<Self, ParseAngleError> {
        let capture = RE_VALUE_UNIT.captures(s).ok_or(ParseAngleError::Notation)?;
        let value = capture
            .name("value")
            .ok_or(ParseAngleError::Notation)?
            .as_str()
            .parse::<f64>()?;
        let unit: AngleUnit = capture
            .name("unit")
            .ok_or(ParseAngleError::Notation)?
            .as_str()
            .parse()?;
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // diagnostic description
        if f.alternate() {
            write!(
                f,
                "{:.2}{} (macro {:.2}, domain {})",
                self.degrees(),
                DEGREE_SIGN,
                self.macro_value(),
                self.domain()
            )
        } else {
            write!(f, "{}{}", self.degrees(), DEGREE_SIGN)
        }
    }
}

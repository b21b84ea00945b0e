pub(crate) const FULL_TURN_DEG: f64 = 360.0;

// one macro unit is a 1/40-th of the full turn,
// one micro unit is a 1/400-th
pub(crate) const DEG_IN_MACRO: f64 = 9.0;
pub(crate) const DEG_IN_MICRO: f64 = 0.9;

pub(crate) const MACRO_IN_TURN: f64 = FULL_TURN_DEG / DEG_IN_MACRO;
pub(crate) const MACRO_IN_DOMAIN: f64 = MACRO_IN_TURN / 4.0;

pub(crate) const DEGREE_SIGN: char = '°';

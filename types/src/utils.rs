//! Utility functions not tied to the angular domain

use num_traits::Euclid;

#[doc(hidden)]
#[macro_export]
/// Implements `From` trait for newtype-like enum variants
macro_rules! enum_trivial_from_impl {
    ($from:ty => $to:ty:$constructor:ident) => {
        impl From<$from> for $to {
            fn from(val: $from) -> Self {
                Self::$constructor(val)
            }
        }
    };
}

/// Mathematical (sign-independent) modulo.
///
/// Unlike the native `%` operator which preserves the sign of the dividend,
/// the result is non-negative for any sign of `value`
/// and falls into `[0, modulus)` up to the rounding at the upper boundary.
pub(crate) fn wrap<T>(value: T, modulus: T) -> T
where
    T: Euclid + Copy,
{
    value.rem_euclid(&modulus)
}

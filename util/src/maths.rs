//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::{Float, FloatConst};

/// Linearly interpolate between `a` and `b` by the fraction `f`.
pub fn lerp<T>(a: T, b: T, f: T) -> T
where
    T: Float
{
    a + (b - a) * f
}

pub fn clamp<T>(value: T, min: T, max: T) -> T 
where
    T: Float
{
    let mut ret = value;

    if ret > max {
        ret = max
    }
    if ret < min {
        ret = min
    }

    ret
}

/// Wrap an angle into the range [-pi, pi).
pub fn wrap_pi<T>(value: T) -> T
where
    T: Float + FloatConst
{
    let wrapped = rem_euclid(value + T::PI(), T::PI() + T::PI()) - T::PI();

    // rem_euclid can round up to the modulus itself
    if wrapped >= T::PI() {
        -T::PI()
    } else {
        wrapped
    }
}

/// Get the shortest signed angular distance to travel from `a` to `b`.
///
/// The result lies in [-pi, pi), so a positive distance is an anticlockwise rotation.
pub fn get_ang_dist_pi<T>(a: T, b: T) -> T
where
    T: Float + FloatConst
{
    wrap_pi(b - a)
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
/// 
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()`, violating the mathematical definition, if
/// `self` is much smaller than `rhs.abs()` in magnitude and `self < 0.0`.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Power-of-two helpers for buffer and texture sizing.

/// `true` when exactly one bit of `x` is set. Zero is not a power of two.
pub const fn is_power_of_2(x: u32) -> bool {
    x != 0 && x & (x - 1) == 0
}

/// Smallest power of two `>= x`.
///
/// Powers of two map to themselves. `0` maps to `0`, and inputs above
/// `2^31` wrap to `0`.
///
/// # Examples
/// ```
/// use mars_math::next_power_of_2;
/// assert_eq!(next_power_of_2(17), 32);
/// assert_eq!(next_power_of_2(64), 64);
/// ```
pub const fn next_power_of_2(x: u32) -> u32 {
    let mut v = x.wrapping_sub(1);
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v.wrapping_add(1)
}

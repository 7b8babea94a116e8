//! Power-of-two predicates.
//!
//! A value is a power of two when it is non-zero and has exactly one set bit
//! in its two's-complement representation. For signed types this makes
//! `MIN` a power of two and every other negative value not one.
//!
//! ```rust
//! use bit_word::{is_power_of_two, is_power_of_two_i32};
//!
//! assert!(is_power_of_two(64u32));
//! assert!(!is_power_of_two(0u64));
//! assert!(!is_power_of_two_i32(-4));
//! ```

#[inline(always)]
pub const fn is_power_of_two_i32(x: i32) -> bool {
    x != 0 && (x & x.wrapping_sub(1)) == 0
}

#[inline(always)]
pub const fn is_power_of_two_u32(x: u32) -> bool {
    x != 0 && (x & x.wrapping_sub(1)) == 0
}

#[inline(always)]
pub const fn is_power_of_two_i64(x: i64) -> bool {
    x != 0 && (x & x.wrapping_sub(1)) == 0
}

#[inline(always)]
pub const fn is_power_of_two_u64(x: u64) -> bool {
    x != 0 && (x & x.wrapping_sub(1)) == 0
}

/// Integer types that can be tested with [`is_power_of_two`].
pub trait PowerOfTwo: Copy {
    fn is_pot(self) -> bool;
}

macro_rules! impl_power_of_two {
    ($($ty:ty => $f:ident),* $(,)?) => {$(
        impl PowerOfTwo for $ty {
            #[inline(always)]
            fn is_pot(self) -> bool {
                $f(self)
            }
        }
    )*};
}

impl_power_of_two!(
    i32 => is_power_of_two_i32,
    u32 => is_power_of_two_u32,
    i64 => is_power_of_two_i64,
    u64 => is_power_of_two_u64,
);

#[inline(always)]
pub fn is_power_of_two<T: PowerOfTwo>(x: T) -> bool {
    x.is_pot()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_not_a_power_of_two() {
        assert!(!is_power_of_two(0i32));
        assert!(!is_power_of_two(0u32));
        assert!(!is_power_of_two(0i64));
        assert!(!is_power_of_two(0u64));
    }

    #[test]
    fn single_bits_are_powers_of_two() {
        for shift in 0..32 {
            assert!(is_power_of_two(1u32 << shift));
        }
        for shift in 0..64 {
            assert!(is_power_of_two(1u64 << shift));
        }
        for shift in 0..31 {
            assert!(is_power_of_two(1i32 << shift));
        }
        for shift in 0..63 {
            assert!(is_power_of_two(1i64 << shift));
        }
    }

    #[test]
    fn multi_bit_values_are_rejected() {
        assert!(!is_power_of_two(3u32));
        assert!(!is_power_of_two(6u64));
        assert!(!is_power_of_two(u32::MAX));
        assert!(!is_power_of_two(1023i64));
    }

    #[test]
    fn negative_values_follow_bitwise_rule() {
        assert!(!is_power_of_two_i32(-1));
        assert!(!is_power_of_two_i32(-4));
        assert!(!is_power_of_two_i64(-8));
        // sign bit alone
        assert!(is_power_of_two_i32(i32::MIN));
        assert!(is_power_of_two_i64(i64::MIN));
    }

    #[test]
    fn usable_in_const_context() {
        const WIDTH_OK: bool = is_power_of_two_u64(64);
        assert!(WIDTH_OK);
    }
}

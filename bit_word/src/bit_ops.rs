//! Bit deposit, mask and integer-logarithm helpers.
//!
//! ```rust
//! use bit_word::{least_pot_bound, log2int, pdep, pot_mask, product};
//!
//! assert_eq!(pdep(0b101u32, 0b010101), 0b010001);
//! assert_eq!(pot_mask(5), 0b11111);
//! assert_eq!(log2int(1023), 9);
//! assert_eq!(least_pot_bound(5), 8);
//! assert_eq!(product([2, 3, 4]), 24);
//! ```

use core::iter::Product;

use crate::error::{BitsError, Result};

/// Integers accepted by [`pdep`]. Signed inputs are deposited through their
/// unsigned representation.
pub trait Deposit: Copy {
    type Output;

    fn deposit(self, mask: Self) -> Self::Output;
}

/// Scatters the low bits of `value` into the set bits of `mask`, lowest
/// mask bit first. Bits outside `mask` are zero.
#[inline(always)]
pub fn pdep<T: Deposit>(value: T, mask: T) -> T::Output {
    value.deposit(mask)
}

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2", not(miri)))]
#[allow(unused_unsafe)]
#[inline(always)]
pub fn pdep_u32(value: u32, mask: u32) -> u32 {
    // Safety: bmi2 is enabled for this build.
    unsafe { core::arch::x86_64::_pdep_u32(value, mask) }
}

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2", not(miri)))]
#[allow(unused_unsafe)]
#[inline(always)]
pub fn pdep_u64(value: u64, mask: u64) -> u64 {
    // Safety: bmi2 is enabled for this build.
    unsafe { core::arch::x86_64::_pdep_u64(value, mask) }
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2", not(miri))))]
#[inline(always)]
pub fn pdep_u32(value: u32, mask: u32) -> u32 {
    deposit_portable_u32(value, mask)
}

#[cfg(not(all(target_arch = "x86_64", target_feature = "bmi2", not(miri))))]
#[inline(always)]
pub fn pdep_u64(value: u64, mask: u64) -> u64 {
    deposit_portable_u64(value, mask)
}

macro_rules! deposit_portable {
    ($($name:ident: $ty:ty),*) => {$(
        #[allow(dead_code)]
        #[inline]
        pub(crate) fn $name(value: $ty, mut mask: $ty) -> $ty {
            let mut result: $ty = 0;
            let mut bit: $ty = 1;
            while mask != 0 {
                let lowest = mask & mask.wrapping_neg();
                if value & bit != 0 {
                    result |= lowest;
                }
                mask &= mask - 1;
                bit <<= 1;
            }
            result
        }
    )*};
}

deposit_portable!(deposit_portable_u32: u32, deposit_portable_u64: u64);

impl Deposit for u32 {
    type Output = u32;

    #[inline(always)]
    fn deposit(self, mask: Self) -> u32 {
        pdep_u32(self, mask)
    }
}

impl Deposit for i32 {
    type Output = u32;

    #[inline(always)]
    fn deposit(self, mask: Self) -> u32 {
        pdep_u32(self as u32, mask as u32)
    }
}

impl Deposit for u64 {
    type Output = u64;

    #[inline(always)]
    fn deposit(self, mask: Self) -> u64 {
        pdep_u64(self, mask)
    }
}

impl Deposit for i64 {
    type Output = u64;

    #[inline(always)]
    fn deposit(self, mask: Self) -> u64 {
        pdep_u64(self as u64, mask as u64)
    }
}

/// The low `x` bits set. `x` must be in `0..=32`.
#[inline(always)]
pub const fn pot_mask(x: u32) -> u32 {
    debug_assert!(x <= 32, "pot_mask argument must be at most 32");
    if x >= u32::BITS {
        u32::MAX
    } else {
        (1u32 << x) - 1
    }
}

/// `floor(log2(value))`.
///
/// Zero has no logarithm; `log2int(0)` returns 0 by convention. Use
/// [`try_log2int`] to reject it instead.
#[inline(always)]
pub const fn log2int(value: u64) -> u32 {
    if value == 0 { 0 } else { value.ilog2() }
}

pub fn try_log2int(value: u64) -> Result<u32> {
    value.checked_ilog2().ok_or(BitsError::ZeroLogarithm)
}

/// Smallest power of two that is `>= v`. `least_pot_bound(0) == 1`.
pub const fn least_pot_bound(v: usize) -> usize {
    let mut ret = 1;
    while ret < v {
        ret *= 2;
    }
    ret
}

/// Left-to-right product of `arr`, starting from one.
#[inline]
pub fn product<T, const N: usize>(arr: [T; N]) -> T
where
    T: Product<T>,
{
    arr.into_iter().product()
}

/// [`product`] for `usize` arrays in const contexts, e.g. array shapes.
pub const fn product_usize<const N: usize>(arr: [usize; N]) -> usize {
    let mut ret = 1;
    let mut i = 0;
    while i < N {
        ret *= arr[i];
        i += 1;
    }
    ret
}

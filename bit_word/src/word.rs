//! Storage words and compile-time width selection.
//!
//! `Bits<N>` stores a `u32` when `N == 32` and a `u64` when `N == 64`. The
//! mapping goes through [`SupportedWidth`], which is only implemented for
//! those two widths, so any other `N` is rejected by the compiler.

use core::fmt::{Binary, Debug, LowerHex, UpperHex};
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

use bytemuck::Pod;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
    impl Sealed for super::Width<32> {}
    impl Sealed for super::Width<64> {}
}

/// An unsigned machine word usable as `Bits` storage.
pub trait Word:
    Copy
    + Default
    + Debug
    + Binary
    + LowerHex
    + UpperHex
    + Eq
    + Ord
    + Hash
    + Pod
    + Send
    + Sync
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + sealed::Sealed
{
    const BITS: u32;
    const ZERO: Self;
    const ONES: Self;

    /// Keeps the low `Self::BITS` bits of `value`.
    fn truncate_from(value: u64) -> Self;

    fn widen(self) -> u64;

    fn count_ones(self) -> u32;
}

macro_rules! impl_word {
    ($($ty:ty),*) => {$(
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONES: Self = <$ty>::MAX;

            #[inline(always)]
            fn truncate_from(value: u64) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn widen(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn count_ones(self) -> u32 {
                <$ty>::count_ones(self)
            }
        }
    )*};
}

impl_word!(u32, u64);

/// Type-level word width.
#[derive(Debug, Clone, Copy)]
pub struct Width<const N: usize>;

pub trait SupportedWidth: sealed::Sealed {
    type Word: Word;
}

impl SupportedWidth for Width<32> {
    type Word = u32;
}

impl SupportedWidth for Width<64> {
    type Word = u64;
}

/// The storage word of `Bits<N>`.
pub type WordOf<const N: usize> = <Width<N> as SupportedWidth>::Word;

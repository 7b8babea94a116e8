//! Fixed-width bit container with typed sub-field access.
//!
//! # Examples
//!
//! ## Explicit ranges
//!
//! ```rust
//! use bit_word::Bits;
//!
//! let mut word = Bits::<32>::new();
//! word.set::<4, 8>(0xAB);
//! word.set::<12, 4>(0x1F); // truncated to 0xF
//!
//! assert_eq!(word.get::<4, 8>(), 0xAB);
//! assert_eq!(word.get::<12, 4>(), 0xF);
//! assert_eq!(word.word(), 0xFAB0);
//! ```
//!
//! ## Typed fields
//!
//! ```rust
//! use bit_word::Bits;
//!
//! let mut word = Bits::<64>::new();
//! word.write::<bool, 0>(true);
//! word.write::<u16, 8>(0xBEEF);
//!
//! assert!(word.read::<bool, 0>());
//! assert_eq!(word.read::<u16, 8>(), 0xBEEF);
//! ```
//!
//! Widths other than 32 and 64 do not compile:
//!
//! ```compile_fail
//! let _ = bit_word::Bits::<16>::new();
//! ```
//!
//! Neither does a constant range that runs past the word:
//!
//! ```compile_fail
//! let word = bit_word::Bits::<32>::new();
//! let _ = word.get::<30, 4>();
//! ```
use core::fmt;
use core::mem::MaybeUninit;

use bytemuck::{Pod, Zeroable};

use crate::error::{BitsError, Result};
use crate::field::FieldValue;
use crate::pot::is_power_of_two_u64;
use crate::word::{SupportedWidth, Width, Word, WordOf};

/// `width` one-bits starting at bit `start`, as a 64-bit pattern.
#[inline(always)]
pub const fn range_mask(start: u32, width: u32) -> u64 {
    let ones = if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    };
    ones << start
}

const fn assert_range_fits(start: u32, width: u32, word_bits: usize) {
    assert!(width > 0, "bit range must be at least one bit wide");
    assert!(
        start as usize + width as usize <= word_bits,
        "bit range exceeds the word width"
    );
}

/// A `[start, start + width)` slice of a word, decided at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitRange {
    pub start: u32,
    pub width: u32,
}

impl BitRange {
    #[inline(always)]
    pub const fn new(start: u32, width: u32) -> Self {
        Self { start, width }
    }

    /// Validates the range against a 32- or 64-bit word.
    pub fn within(self, word_bits: u32) -> Result<Self> {
        if word_bits != 32 && word_bits != 64 {
            return Err(BitsError::UnsupportedWidth(word_bits));
        }
        if !self.fits(word_bits) {
            return Err(BitsError::RangeOutOfBounds {
                start: self.start,
                width: self.width,
                word_bits,
            });
        }
        Ok(self)
    }

    #[inline(always)]
    pub const fn end(self) -> u32 {
        self.start + self.width
    }

    #[inline(always)]
    pub const fn fits(self, word_bits: u32) -> bool {
        self.width > 0 && self.start as u64 + self.width as u64 <= word_bits as u64
    }

    #[inline(always)]
    pub const fn overlaps(self, other: BitRange) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    #[inline(always)]
    pub const fn mask(self) -> u64 {
        range_mask(self.start, self.width)
    }
}

/// A 32- or 64-bit word addressed by bit ranges.
///
/// All range accessors are read-modify-write operations on the whole word.
/// Values written into a range are truncated to its width without any
/// overflow signal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bits<const N: usize>
where
    Width<N>: SupportedWidth,
{
    data: WordOf<N>,
}

// Safety: `Bits` is a transparent wrapper around `u32` or `u64`.
unsafe impl<const N: usize> Zeroable for Bits<N> where Width<N>: SupportedWidth {}

unsafe impl<const N: usize> Pod for Bits<N> where Width<N>: SupportedWidth {}

impl<const N: usize> Bits<N>
where
    Width<N>: SupportedWidth,
{
    pub const WIDTH: u32 = N as u32;

    const WIDTH_CHECK: () = {
        assert!(is_power_of_two_u64(N as u64), "Bits width must be a power of two");
        assert!(N == 32 || N == 64, "Bits width must be 32 or 64");
    };

    /// Creates a zeroed word.
    #[inline(always)]
    pub const fn new() -> Self {
        let () = Self::WIDTH_CHECK;
        Self {
            data: <WordOf<N> as Word>::ZERO,
        }
    }

    /// Storage for a word the caller overwrites before reading.
    ///
    /// ```rust
    /// use bit_word::Bits;
    ///
    /// let mut slot = Bits::<64>::uninit();
    /// let word = slot.write(Bits::from_word(0xFF));
    /// assert_eq!(word.get::<0, 4>(), 0xF);
    /// ```
    #[inline(always)]
    pub const fn uninit() -> MaybeUninit<Self> {
        let () = Self::WIDTH_CHECK;
        MaybeUninit::uninit()
    }

    #[inline(always)]
    pub const fn from_word(word: WordOf<N>) -> Self {
        let () = Self::WIDTH_CHECK;
        Self { data: word }
    }

    /// The whole underlying word.
    #[inline(always)]
    pub fn word(&self) -> WordOf<N> {
        self.data
    }

    /// Overwrites the whole underlying word.
    #[inline(always)]
    pub fn set_word(&mut self, word: WordOf<N>) {
        self.data = word;
    }

    #[inline(always)]
    fn lift(value: u64) -> WordOf<N> {
        <WordOf<N> as Word>::truncate_from(value)
    }

    /// `WIDTH` one-bits located at `START`.
    #[inline(always)]
    pub fn mask<const START: u32, const WIDTH: u32>() -> WordOf<N> {
        const { assert_range_fits(START, WIDTH, N) };
        Self::lift(const { range_mask(START, WIDTH) })
    }

    /// Reads `WIDTH` bits starting at `START`, right-aligned.
    #[inline(always)]
    pub fn get<const START: u32, const WIDTH: u32>(&self) -> WordOf<N> {
        const { assert_range_fits(START, WIDTH, N) };
        (self.data >> START) & Self::lift(const { range_mask(0, WIDTH) })
    }

    /// Merges the low `WIDTH` bits of `value` in at `START`.
    #[inline(always)]
    pub fn set<const START: u32, const WIDTH: u32>(&mut self, value: WordOf<N>) {
        let mask = Self::mask::<START, WIDTH>();
        self.data = (self.data & !mask) | ((value << START) & mask);
    }

    /// Runtime counterpart of [`get`](Self::get).
    ///
    /// The range must fit in the word; this is only checked in debug builds.
    #[inline(always)]
    pub fn get_range(&self, range: BitRange) -> WordOf<N> {
        debug_assert!(range.fits(Self::WIDTH), "bit range exceeds the word width");
        (self.data >> range.start) & Self::lift(range_mask(0, range.width))
    }

    /// Runtime counterpart of [`set`](Self::set).
    #[inline(always)]
    pub fn set_range(&mut self, range: BitRange, value: WordOf<N>) {
        debug_assert!(range.fits(Self::WIDTH), "bit range exceeds the word width");
        let mask = Self::lift(range.mask());
        self.data = (self.data & !mask) | ((value << range.start) & mask);
    }

    /// Reads a typed field of `bit_length::<T>()` bits at `START`.
    #[inline(always)]
    pub fn read<T: FieldValue, const START: u32>(&self) -> T {
        const { assert_range_fits(START, T::BIT_LENGTH, N) };
        T::from_field(
            self.get_range(BitRange::new(START, T::BIT_LENGTH))
                .widen(),
        )
    }

    /// Writes a typed field of `bit_length::<T>()` bits at `START`.
    #[inline(always)]
    pub fn write<T: FieldValue, const START: u32>(&mut self, value: T) {
        const { assert_range_fits(START, T::BIT_LENGTH, N) };
        self.set_range(
            BitRange::new(START, T::BIT_LENGTH),
            Self::lift(value.into_field()),
        );
    }

    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.data.count_ones()
    }
}

impl<const N: usize> fmt::Debug for Bits<N>
where
    Width<N>: SupportedWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits<{}>({:#0width$b})", N, self.data, width = N + 2)
    }
}

impl<const N: usize> fmt::Binary for Bits<N>
where
    Width<N>: SupportedWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.data, f)
    }
}

impl<const N: usize> fmt::LowerHex for Bits<N>
where
    Width<N>: SupportedWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.data, f)
    }
}

impl<const N: usize> fmt::UpperHex for Bits<N>
where
    Width<N>: SupportedWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.data, f)
    }
}

macro_rules! impl_word_conversions {
    ($($n:literal => $ty:ty),*) => {$(
        impl From<$ty> for Bits<$n> {
            #[inline(always)]
            fn from(word: $ty) -> Self {
                Self::from_word(word)
            }
        }

        impl From<Bits<$n>> for $ty {
            #[inline(always)]
            fn from(bits: Bits<$n>) -> Self {
                bits.word()
            }
        }
    )*};
}

impl_word_conversions!(32 => u32, 64 => u64);

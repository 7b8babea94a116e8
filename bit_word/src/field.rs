//! Named fields packed into one `Bits` word.
//!
//! A record is declared once as a list of `(type, name, offset)` entries.
//! [`bit_fields!`](crate::bit_fields) turns that list into a newtype over
//! `Bits<N>` with a getter and a `set_` setter per entry, plus a `FIELDS`
//! table describing the layout.
//!
//! # Examples
//!
//! ```rust
//! use bit_word::bit_fields;
//!
//! bit_fields! {
//!     /// Control register of a toy device.
//!     pub struct Control: Bits<32> {
//!         (bool, enabled, 0),
//!         (u8, channel, 1),
//!         (u16, threshold, 9),
//!     }
//! }
//!
//! let mut reg = Control::new();
//! reg.set_enabled(true);
//! reg.set_channel(12);
//! reg.set_threshold(1000);
//!
//! assert!(reg.enabled());
//! assert_eq!(reg.channel(), 12);
//! assert_eq!(reg.threshold(), 1000);
//! assert_eq!(Control::FIELDS[2].name, "threshold");
//! assert!(Control::check_layout().is_ok());
//! ```

use crate::bits::BitRange;
use crate::error::{BitsError, Result};
use crate::punning::reinterpret_bits;

/// A value that occupies a fixed number of bits inside a word.
///
/// `into_field` may return bits above `BIT_LENGTH`; writers mask them off.
pub trait FieldValue: Copy {
    const BIT_LENGTH: u32;

    fn into_field(self) -> u64;

    fn from_field(bits: u64) -> Self;
}

/// Number of bits a field of type `T` occupies.
#[inline(always)]
pub const fn bit_length<T: FieldValue>() -> u32 {
    T::BIT_LENGTH
}

impl FieldValue for bool {
    const BIT_LENGTH: u32 = 1;

    #[inline(always)]
    fn into_field(self) -> u64 {
        self as u64
    }

    #[inline(always)]
    fn from_field(bits: u64) -> Self {
        bits & 1 != 0
    }
}

macro_rules! impl_field_value_unsigned {
    ($($ty:ty),*) => {$(
        impl FieldValue for $ty {
            const BIT_LENGTH: u32 = <$ty>::BITS;

            #[inline(always)]
            fn into_field(self) -> u64 {
                self as u64
            }

            #[inline(always)]
            fn from_field(bits: u64) -> Self {
                bits as $ty
            }
        }
    )*};
}

macro_rules! impl_field_value_signed {
    ($($ty:ty => $unsigned:ty),*) => {$(
        impl FieldValue for $ty {
            const BIT_LENGTH: u32 = <$ty>::BITS;

            #[inline(always)]
            fn into_field(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline(always)]
            fn from_field(bits: u64) -> Self {
                bits as $unsigned as $ty
            }
        }
    )*};
}

impl_field_value_unsigned!(u8, u16, u32, u64);
impl_field_value_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);

// Stored as its bit pattern, not as a numeric value.
impl FieldValue for f32 {
    const BIT_LENGTH: u32 = 32;

    #[inline(always)]
    fn into_field(self) -> u64 {
        reinterpret_bits::<u32, _>(self) as u64
    }

    #[inline(always)]
    fn from_field(bits: u64) -> Self {
        reinterpret_bits(bits as u32)
    }
}

/// One entry of a record layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldInfo {
    pub name: &'static str,
    pub range: BitRange,
}

impl FieldInfo {
    pub const fn of<T: FieldValue>(name: &'static str, start: u32) -> Self {
        Self {
            name,
            range: BitRange::new(start, T::BIT_LENGTH),
        }
    }
}

/// Checks that every field fits in a `word_bits` word and no two overlap.
pub fn check_layout(fields: &[FieldInfo], word_bits: u32) -> Result<()> {
    if word_bits != 32 && word_bits != 64 {
        return Err(BitsError::UnsupportedWidth(word_bits));
    }
    for (i, field) in fields.iter().enumerate() {
        if !field.range.fits(word_bits) {
            return Err(BitsError::FieldOutOfBounds {
                name: field.name,
                start: field.range.start,
                width: field.range.width,
                word_bits,
            });
        }
        if let Some(other) = fields[..i]
            .iter()
            .find(|other| other.range.overlaps(field.range))
        {
            return Err(BitsError::OverlappingFields {
                first: other.name,
                second: field.name,
            });
        }
    }
    Ok(())
}

/// Declares a record type stored in one `Bits` word.
///
/// Each `(type, name, offset)` entry produces `name()` and `set_name()`
/// accessors and one [`FieldInfo`] in the record's `FIELDS` table. Offsets
/// are not checked against each other at compile time; overlapping entries
/// silently share bits. `check_layout()` reports them, and `new()` asserts it
/// in debug builds.
#[macro_export]
macro_rules! bit_fields {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : Bits<$n:literal> {
            $(
                $(#[$field_meta:meta])*
                ($ty:ty, $field:ident, $start:literal)
            ),* $(,)?
        }
    ) => {
        $crate::__private::paste! {
            $(#[$meta])*
            #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
            #[repr(transparent)]
            $vis struct $name($crate::Bits<{ $n }>);

            impl $name {
                pub const FIELDS: &'static [$crate::FieldInfo] = &[
                    $( $crate::FieldInfo::of::<$ty>(stringify!($field), $start), )*
                ];

                pub fn new() -> Self {
                    debug_assert!(
                        Self::check_layout().is_ok(),
                        concat!("overlapping or out-of-range fields in ", stringify!($name))
                    );
                    Self($crate::Bits::new())
                }

                pub const fn from_bits(bits: $crate::Bits<{ $n }>) -> Self {
                    Self(bits)
                }

                pub fn bits(&self) -> $crate::Bits<{ $n }> {
                    self.0
                }

                pub fn check_layout() -> $crate::Result<()> {
                    $crate::check_layout(Self::FIELDS, $n)
                }

                $(
                    $(#[$field_meta])*
                    #[inline(always)]
                    pub fn $field(&self) -> $ty {
                        self.0.read::<$ty, { $start }>()
                    }

                    #[inline(always)]
                    pub fn [<set_ $field>](&mut self, value: $ty) {
                        self.0.write::<$ty, { $start }>(value)
                    }
                )*
            }

            impl ::core::fmt::Debug for $name {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    f.debug_struct(stringify!($name))
                        $( .field(stringify!($field), &self.$field()) )*
                        .finish()
                }
            }
        }
    };
}

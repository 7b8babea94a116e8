//! Bit-pattern reinterpretation between equally sized types.
//!
//! Nothing here converts numerically: a value goes in, the same bits come
//! out under another type. That includes NaN payloads and the sign of zero.
//!
//! ```rust
//! use bit_word::{compress, extract, reinterpret_bits};
//!
//! let bits: u32 = reinterpret_bits(1.0f32);
//! assert_eq!(bits, 0x3F80_0000);
//!
//! let packed = compress(-0.0, f32::MAX);
//! let (h, l) = extract(packed);
//! assert_eq!(h.to_bits(), (-0.0f32).to_bits());
//! assert_eq!(l, f32::MAX);
//! ```
//!
//! Types of different size are rejected at compile time:
//!
//! ```compile_fail
//! let _: u64 = bit_word::reinterpret_bits(1.0f32);
//! ```

use core::mem::size_of;

use bytemuck::Pod;

/// Returns `t`'s bit pattern as a `G`.
#[inline(always)]
pub fn reinterpret_bits<G: Pod, T: Pod>(t: T) -> G {
    const {
        assert!(
            size_of::<T>() == size_of::<G>(),
            "reinterpret_bits requires types of equal size"
        )
    };
    bytemuck::cast(t)
}

/// Method form of [`reinterpret_bits`].
pub trait Reinterpret: Pod {
    #[inline(always)]
    fn reinterpret<G: Pod>(self) -> G {
        reinterpret_bits(self)
    }
}

impl<T: Pod> Reinterpret for T {}

/// Packs `h` into the high and `l` into the low 32 bits of an `f64` carrier.
///
/// The result is only a container for the two patterns, not a meaningful
/// number.
#[inline(always)]
pub fn compress(h: f32, l: f32) -> f64 {
    let data = (u64::from(reinterpret_bits::<u32, _>(h)) << 32)
        | u64::from(reinterpret_bits::<u32, _>(l));
    reinterpret_bits(data)
}

/// Inverse of [`compress`]: returns `(h, l)`.
#[inline(always)]
pub fn extract(x: f64) -> (f32, f32) {
    let data: u64 = reinterpret_bits(x);
    (
        reinterpret_bits((data >> 32) as u32),
        reinterpret_bits(data as u32),
    )
}

//! # bit_word
//!
//! A `no_std` compatible toolkit for packing several small values into one
//! machine word.
//!
//! ```rust
//! use bit_word::Bits;
//!
//! // 5-bit opcode, 1-bit flag and 10-bit operand in one 32-bit word
//! let mut insn = Bits::<32>::new();
//! insn.set::<0, 5>(0b10110);
//! insn.set::<5, 1>(1);
//! insn.set::<6, 10>(513);
//!
//! assert_eq!(insn.get::<0, 5>(), 0b10110);
//! assert_eq!(insn.get::<6, 10>(), 513);
//! ```
//!
//! ## Named fields
//!
//! ```rust
//! use bit_word::bit_fields;
//!
//! bit_fields! {
//!     pub struct Texel: Bits<64> {
//!         (u16, u, 0),
//!         (u16, v, 16),
//!         (f32, depth, 32),
//!     }
//! }
//!
//! let mut t = Texel::new();
//! t.set_u(640);
//! t.set_depth(0.25);
//! assert_eq!(t.u(), 640);
//! assert_eq!(t.depth(), 0.25);
//! ```
//!
//! ## Packing two floats
//!
//! ```rust
//! use bit_word::{compress, extract};
//!
//! let carrier = compress(1.5, -2.0);
//! assert_eq!(extract(carrier), (1.5, -2.0));
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::{BitsError, Result};

pub mod bit_ops;
pub mod bits;
pub mod field;
pub mod pot;
pub mod punning;
pub mod word;

pub use bit_ops::{
    Deposit, least_pot_bound, log2int, pdep, pdep_u32, pdep_u64, pot_mask, product,
    product_usize, try_log2int,
};
pub use bits::{BitRange, Bits, range_mask};
pub use field::{FieldInfo, FieldValue, bit_length, check_layout};
pub use pot::{
    PowerOfTwo, is_power_of_two, is_power_of_two_i32, is_power_of_two_i64, is_power_of_two_u32,
    is_power_of_two_u64,
};
pub use punning::{Reinterpret, compress, extract, reinterpret_bits};
pub use word::{SupportedWidth, Width, Word, WordOf};

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
}

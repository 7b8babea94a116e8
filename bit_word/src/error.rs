#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    #[cfg_attr(feature = "std", error("log2 of zero is undefined"))]
    ZeroLogarithm,

    #[cfg_attr(
        feature = "std",
        error("Bit range {start}+{width} does not fit in a {word_bits}-bit word")
    )]
    RangeOutOfBounds {
        start: u32,
        width: u32,
        word_bits: u32,
    },

    #[cfg_attr(feature = "std", error("Word width must be 32 or 64, got {0}"))]
    UnsupportedWidth(u32),

    #[cfg_attr(
        feature = "std",
        error("Field `{name}` at {start}+{width} does not fit in a {word_bits}-bit word")
    )]
    FieldOutOfBounds {
        name: &'static str,
        start: u32,
        width: u32,
        word_bits: u32,
    },

    #[cfg_attr(feature = "std", error("Fields `{first}` and `{second}` overlap"))]
    OverlappingFields {
        first: &'static str,
        second: &'static str,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitsError::ZeroLogarithm => write!(f, "log2 of zero is undefined"),
            BitsError::RangeOutOfBounds {
                start,
                width,
                word_bits,
            } => write!(
                f,
                "Bit range {}+{} does not fit in a {}-bit word",
                start, width, word_bits
            ),
            BitsError::UnsupportedWidth(w) => write!(f, "Word width must be 32 or 64, got {}", w),
            BitsError::FieldOutOfBounds {
                name,
                start,
                width,
                word_bits,
            } => write!(
                f,
                "Field `{}` at {}+{} does not fit in a {}-bit word",
                name, start, width, word_bits
            ),
            BitsError::OverlappingFields { first, second } => {
                write!(f, "Fields `{}` and `{}` overlap", first, second)
            }
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::error::Error for BitsError {}

pub type Result<T> = core::result::Result<T, BitsError>;

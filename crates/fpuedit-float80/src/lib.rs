#![forbid(unsafe_code)]

//! 80-bit x87 extended-precision register values.
//!
//! The crate API is centered around [`Float80`], an opaque 10-byte value in
//! the hardware's little-endian layout (1 sign bit, 15 exponent bits, 64
//! explicit significand bits including the integer bit). The byte form is
//! authoritative: every 10-byte pattern is representable and preserved
//! exactly, including the non-canonical unnormal/pseudo encodings that have
//! no `f64` counterpart.
//!
//! Rust has no native 80-bit float type, so the host numeric type is `f64`:
//! widening `f64 -> Float80` is exact, narrowing `Float80 -> f64` rounds to
//! 53 significand bits. Anything that must be bit-exact goes through the
//! byte or hex form, never through `f64`.

pub mod hex;
mod parse;
pub mod special;
mod value;

pub use crate::hex::HexError;
pub use crate::parse::{parse, ParseError};
pub use crate::value::{Float80, Float80Class};

//! Base64 encoding and decoding.
//!
//! This crate provides a small base64 codec with support for:
//! - The standard and URL-safe alphabets, or any other 64 ASCII symbols
//! - Optional, configurable padding on encode
//! - Lenient decoding that skips padding and unresolvable symbol groups
//!
//! # Example
//!
//! ```
//! use base64_codec::{decode, encode, url_decode, url_encode};
//!
//! let data = b"hello world";
//! assert_eq!(encode(data), "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(encode(data)), data);
//! assert_eq!(url_decode(url_encode(data)), data);
//! ```

mod alphabet;
mod calc_decoded_length;
mod calc_encoded_length;
mod codec;
mod constants;
mod decode;
mod encode;
mod url_decode;
mod url_encode;

use thiserror::Error;

pub use alphabet::Alphabet;
pub use calc_decoded_length::calc_decoded_length;
pub use calc_encoded_length::calc_encoded_length;
pub use codec::Base64;
pub use constants::{ALPHABET, ALPHABET_BYTES, ALPHABET_URL, ALPHABET_URL_BYTES, PAD};
pub use decode::{decode, decode_with_padding};
pub use encode::{encode, encode_with_padding};
pub use url_decode::{url_decode, url_decode_with_padding};
pub use url_encode::{url_encode, url_encode_with_padding};

/// Error type for base64 codec construction and buffer operations.
///
/// Decoding text never fails; symbols that do not resolve are skipped
/// group-wise instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The character set must be exactly 64 characters.
    #[error("chars must be 64 characters long, got {length}")]
    InvalidCharSetLength { length: usize },
    /// Alphabet symbols must be single-byte ASCII.
    #[error("non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    /// Every alphabet symbol must be distinct.
    #[error("duplicate character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter {
        character: char,
        first: usize,
        second: usize,
    },
    /// The padding must be empty or a single ASCII character.
    #[error("padding must be empty or a single ascii character")]
    InvalidPadding,
    /// The padding character is also an alphabet symbol.
    #[error("padding character '{character}' is part of the alphabet")]
    PaddingInAlphabet { character: char },
    /// The destination buffer cannot hold the output.
    #[error("destination buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

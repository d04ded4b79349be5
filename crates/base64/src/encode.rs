//! Standard base64 encoding entry points.

use crate::alphabet::Alphabet;
use crate::codec::{parse_padding, Base64};
use crate::Base64Error;

/// Encodes bytes, or the UTF-8 bytes of a string, with the standard alphabet
/// and `=` padding.
///
/// # Example
///
/// ```
/// use base64_codec::encode;
///
/// assert_eq!(encode("Hello World!ö"), "SGVsbG8gV29ybGQhw7Y=");
/// assert_eq!(encode([0xff, 0xff, 0xa0]), "//+g");
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> String {
    Base64::STANDARD.encode(input)
}

/// Encodes with the standard alphabet and the given padding; an empty `pad`
/// disables padding.
///
/// # Errors
///
/// Returns an error if `pad` is not empty or a single ASCII character outside
/// the alphabet.
///
/// # Example
///
/// ```
/// use base64_codec::encode_with_padding;
///
/// assert_eq!(encode_with_padding("Hello World", "").unwrap(), "SGVsbG8gV29ybGQ");
/// ```
pub fn encode_with_padding(input: impl AsRef<[u8]>, pad: &str) -> Result<String, Base64Error> {
    let codec = Base64::new(Alphabet::STANDARD, parse_padding(pad)?)?;
    Ok(codec.encode(input))
}

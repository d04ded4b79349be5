//! Standard base64 decoding entry points.

use crate::alphabet::Alphabet;
use crate::codec::{parse_padding, Base64};
use crate::Base64Error;

/// Decodes standard base64 text to bytes.
///
/// Padding is optional and never required; see [`Base64`] for how malformed
/// input is skipped.
///
/// # Example
///
/// ```
/// use base64_codec::decode;
///
/// assert_eq!(decode("SGVsbG8gV29ybGQ="), b"Hello World");
/// assert_eq!(decode("SGVsbG8gV29ybGQ"), b"Hello World");
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Base64::STANDARD_NO_PAD.decode(input)
}

/// Decodes standard base64 text after validating `pad` as a padding symbol.
///
/// Decoding does not depend on the padding: padding symbols never resolve in
/// the alphabet and are skipped like any other unknown symbol.
pub fn decode_with_padding(input: impl AsRef<[u8]>, pad: &str) -> Result<Vec<u8>, Base64Error> {
    let codec = Base64::new(Alphabet::STANDARD, parse_padding(pad)?)?;
    Ok(codec.decode(input))
}

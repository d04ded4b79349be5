//! URL-safe base64 decoding entry points.

use crate::alphabet::Alphabet;
use crate::codec::{parse_padding, Base64};
use crate::Base64Error;

/// Decodes URL-safe base64 text to bytes; padding is accepted but not needed.
///
/// # Example
///
/// ```
/// use base64_codec::url_decode;
///
/// assert_eq!(url_decode("__-g"), vec![0xff, 0xff, 0xa0]);
/// assert_eq!(url_decode("aGVsbG8gd29ybGQ"), b"hello world");
/// ```
pub fn url_decode(input: impl AsRef<[u8]>) -> Vec<u8> {
    Base64::URL_SAFE.decode(input)
}

/// Decodes URL-safe base64 text after validating `pad` as a padding symbol.
pub fn url_decode_with_padding(input: impl AsRef<[u8]>, pad: &str) -> Result<Vec<u8>, Base64Error> {
    let codec = Base64::new(Alphabet::URL_SAFE, parse_padding(pad)?)?;
    Ok(codec.decode(input))
}

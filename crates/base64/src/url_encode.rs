//! URL-safe base64 encoding entry points.

use crate::alphabet::Alphabet;
use crate::codec::{parse_padding, Base64};
use crate::Base64Error;

/// Encodes with the URL-safe alphabet (`-` and `_` instead of `+` and `/`)
/// and no padding.
///
/// # Example
///
/// ```
/// use base64_codec::url_encode;
///
/// assert_eq!(url_encode([0xff, 0xff, 0xa0]), "__-g");
/// assert_eq!(url_encode("hello world"), "aGVsbG8gd29ybGQ");
/// ```
pub fn url_encode(input: impl AsRef<[u8]>) -> String {
    Base64::URL_SAFE.encode(input)
}

/// Encodes with the URL-safe alphabet and the given padding; an empty `pad`
/// disables padding.
pub fn url_encode_with_padding(input: impl AsRef<[u8]>, pad: &str) -> Result<String, Base64Error> {
    let codec = Base64::new(Alphabet::URL_SAFE, parse_padding(pad)?)?;
    Ok(codec.encode(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bytes() {
        assert_eq!(url_encode([0u8]), "AA");
        assert_eq!(url_encode([0u8, 0]), "AAA");
        assert_eq!(url_encode([0u8, 0, 0]), "AAAA");
    }

    #[test]
    fn test_url_symbols() {
        assert_eq!(url_encode([0xffu8, 0xff, 0xa0]), "__-g");
        assert_eq!(url_encode([0xfbu8, 0xff]), "-_8");
    }

    #[test]
    fn test_padded() {
        assert_eq!(url_encode_with_padding([0u8], "="), Ok("AA==".to_string()));
        assert_eq!(url_encode_with_padding([0u8], ""), Ok("AA".to_string()));
        assert_eq!(
            url_encode_with_padding([0u8], "-"),
            Err(Base64Error::PaddingInAlphabet { character: '-' })
        );
    }
}

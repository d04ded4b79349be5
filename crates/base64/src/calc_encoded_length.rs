//! Encoded text length calculation.

/// Returns the length of the base64 text produced for `byte_length` input bytes.
///
/// Each full group of 3 bytes becomes 4 symbols, a trailing single byte becomes
/// 2 symbols and a trailing pair becomes 3. With `padded` set, the length is
/// rounded up to a multiple of 4.
///
/// # Example
///
/// ```
/// use base64_codec::calc_encoded_length;
///
/// assert_eq!(calc_encoded_length(4, false), 6);
/// assert_eq!(calc_encoded_length(4, true), 8);
/// ```
pub const fn calc_encoded_length(byte_length: usize, padded: bool) -> usize {
    // ceil(byte_length * 4 / 3) without overflowing on the multiplication.
    let length = byte_length / 3 * 4
        + match byte_length % 3 {
            0 => 0,
            1 => 2,
            _ => 3,
        };
    if padded && length % 4 != 0 {
        length + 4 - length % 4
    } else {
        length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(calc_encoded_length(0, false), 0);
        assert_eq!(calc_encoded_length(0, true), 0);
    }

    #[test]
    fn test_unpadded() {
        for (input, expected) in [(1, 2), (2, 3), (3, 4), (4, 6), (5, 7), (6, 8)] {
            assert_eq!(calc_encoded_length(input, false), expected, "input {input}");
        }
    }

    #[test]
    fn test_padded() {
        for (input, expected) in [(1, 4), (2, 4), (3, 4), (4, 8), (5, 8), (6, 8), (7, 12)] {
            assert_eq!(calc_encoded_length(input, true), expected, "input {input}");
        }
    }

    #[test]
    fn test_matches_ceiling_formula() {
        for input in 0..1000usize {
            assert_eq!(calc_encoded_length(input, false), (input * 4).div_ceil(3));
        }
    }
}

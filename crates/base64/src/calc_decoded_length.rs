//! Decoded byte length calculation.

/// Returns the buffer capacity needed to decode `text_length` base64 symbols.
///
/// This is `ceil(text_length * 3 / 4)` rounded up to a multiple of 3. It is an
/// upper bound: padding and unresolvable trailing symbols make the actual
/// decoded output shorter.
///
/// # Example
///
/// ```
/// use base64_codec::calc_decoded_length;
///
/// assert_eq!(calc_decoded_length(4), 3);
/// assert_eq!(calc_decoded_length(5), 6);
/// ```
pub const fn calc_decoded_length(text_length: usize) -> usize {
    let min_length = text_length / 4 * 3 + (text_length % 4 * 3).div_ceil(4);
    let pad = match min_length % 3 {
        0 => 0,
        rem => 3 - rem,
    };
    min_length + pad
}

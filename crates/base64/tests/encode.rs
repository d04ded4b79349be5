//! Tests for standard base64 encoding (encode).

use base64_codec::{calc_encoded_length, encode, encode_with_padding, Base64};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

#[test]
fn works() {
    let codec = Base64::from_chars(base64_codec::ALPHABET, "=").unwrap();

    for _ in 0..100 {
        let blob = generate_blob();
        let result = encode(&blob);
        let result2 = codec.encode(&blob);

        let expected = base64_encode(&blob);
        assert_eq!(result, expected, "Failed for blob of length {}", blob.len());
        assert_eq!(result2, expected, "Failed for blob of length {}", blob.len());
        assert_eq!(result.len(), calc_encoded_length(blob.len(), true));
    }
}

#[test]
fn unpadded_is_padded_without_trailing_pad() {
    for _ in 0..100 {
        let blob = generate_blob();
        let unpadded = encode_with_padding(&blob, "").unwrap();
        assert_eq!(unpadded, encode(&blob).trim_end_matches('='));
        assert_eq!(unpadded.len(), calc_encoded_length(blob.len(), false));
    }
}

#[test]
fn empty_input() {
    assert_eq!(encode(b""), "");
    assert_eq!(encode(""), "");
}

#[test]
fn literal_bytes() {
    assert_eq!(encode([0xff, 0xff, 0xa0]), "//+g");
}

#[test]
fn utf8_text() {
    assert_eq!(encode("Hello World!ö"), "SGVsbG8gV29ybGQhw7Y=");
    assert_eq!(encode("Hello World"), "SGVsbG8gV29ybGQ=");
    assert_eq!(encode_with_padding("Hello World!ö", "").unwrap(), "SGVsbG8gV29ybGQhw7Y");
    assert_eq!(encode_with_padding("Hello World", "").unwrap(), "SGVsbG8gV29ybGQ");
}

#[test]
fn rfc4648_vectors() {
    assert_eq!(encode(b"f"), "Zg==");
    assert_eq!(encode(b"fo"), "Zm8=");
    assert_eq!(encode(b"foo"), "Zm9v");
    assert_eq!(encode(b"foob"), "Zm9vYg==");
    assert_eq!(encode(b"fooba"), "Zm9vYmE=");
    assert_eq!(encode(b"foobar"), "Zm9vYmFy");
}

/// Simple base64 encoding for test verification
fn base64_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    let mut result = String::new();
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        let n = ((b0 as u32) << 16) | ((b1 as u32) << 8) | b2 as u32;

        result.push(ALPHABET[(n >> 18) as usize & 63] as char);
        result.push(ALPHABET[(n >> 12) as usize & 63] as char);
        if chunk.len() > 1 {
            result.push(ALPHABET[(n >> 6) as usize & 63] as char);
        } else {
            result.push('=');
        }
        if chunk.len() > 2 {
            result.push(ALPHABET[n as usize & 63] as char);
        } else {
            result.push('=');
        }
    }
    result
}

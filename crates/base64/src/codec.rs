//! The base64 codec: an alphabet plus an optional padding symbol.

use crate::alphabet::Alphabet;
use crate::calc_decoded_length::calc_decoded_length;
use crate::calc_encoded_length::calc_encoded_length;
use crate::constants::PAD;
use crate::Base64Error;

/// A base64 codec over a fixed alphabet with optional padding.
///
/// Instances are immutable and hold no resources, so one codec can be shared
/// across threads and reused for any number of calls.
///
/// Decoding is lenient. Input is read in groups of 4 symbols; a group whose
/// first or second symbol is not in the alphabet is dropped without error,
/// and a group yields one byte plus one more for each of its third and fourth
/// symbols that resolves. Padding, excess padding and trailing garbage are
/// therefore skipped rather than rejected.
///
/// # Example
///
/// ```
/// use base64_codec::Base64;
///
/// let codec = Base64::from_chars(base64_codec::ALPHABET, "=").unwrap();
/// assert_eq!(codec.encode("Hello World"), "SGVsbG8gV29ybGQ=");
/// assert_eq!(codec.decode("SGVsbG8gV29ybGQ======"), b"Hello World");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Base64 {
    alphabet: Alphabet,
    padding: Option<u8>,
}

impl Base64 {
    /// Standard alphabet, padded with `=`.
    pub const STANDARD: Base64 = match Base64::new(Alphabet::STANDARD, Some(PAD as u8)) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build standard codec"),
    };

    /// Standard alphabet without padding.
    pub const STANDARD_NO_PAD: Base64 = match Base64::new(Alphabet::STANDARD, None) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build unpadded standard codec"),
    };

    /// URL-safe alphabet without padding.
    pub const URL_SAFE: Base64 = match Base64::new(Alphabet::URL_SAFE, None) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build URL-safe codec"),
    };

    /// URL-safe alphabet, padded with `=`.
    pub const URL_SAFE_PADDED: Base64 = match Base64::new(Alphabet::URL_SAFE, Some(PAD as u8)) {
        Ok(codec) => codec,
        Err(_) => panic!("Could not build padded URL-safe codec"),
    };

    /// Creates a codec from an alphabet and an optional padding symbol.
    ///
    /// # Errors
    ///
    /// The padding symbol must be ASCII and must not belong to the alphabet.
    pub const fn new(alphabet: Alphabet, padding: Option<u8>) -> Result<Self, Base64Error> {
        if let Some(pad) = padding {
            if !pad.is_ascii() {
                return Err(Base64Error::InvalidPadding);
            }
            if alphabet.contains(pad) {
                return Err(Base64Error::PaddingInAlphabet {
                    character: pad as char,
                });
            }
        }
        Ok(Self { alphabet, padding })
    }

    /// Creates a codec from a 64-character alphabet string and a padding
    /// string, where an empty `pad` disables padding.
    pub fn from_chars(chars: &str, pad: &str) -> Result<Self, Base64Error> {
        let alphabet = Alphabet::from_chars(chars)?;
        Self::new(alphabet, parse_padding(pad)?).inspect_err(|error| {
            tracing::debug!(%error, "rejected base64 codec");
        })
    }

    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub const fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// Length of the text [`encode`](Self::encode) produces for `byte_length` bytes.
    pub const fn encoded_length(&self, byte_length: usize) -> usize {
        calc_encoded_length(byte_length, self.padding.is_some())
    }

    /// Encodes bytes, or the UTF-8 bytes of a string, to base64 text.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut out = String::with_capacity(self.encoded_length(input.len()));
        for group in input.chunks(3) {
            let (symbols, count) = self.encode_group(group);
            out.extend(symbols[..count].iter().map(|&symbol| symbol as char));
        }
        if let Some(pad) = self.padding {
            while out.len() % 4 != 0 {
                out.push(pad as char);
            }
        }
        out
    }

    /// Encodes into the start of `dest` and returns the number of symbols
    /// written.
    ///
    /// # Errors
    ///
    /// Returns [`Base64Error::BufferTooSmall`] if `dest` is shorter than
    /// [`encoded_length`](Self::encoded_length); `dest` is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_codec::Base64;
    ///
    /// let mut dest = [0u8; 8];
    /// let len = Base64::STANDARD.encode_to_slice(b"hello", &mut dest).unwrap();
    /// assert_eq!(&dest[..len], b"aGVsbG8=");
    /// ```
    pub fn encode_to_slice(
        &self,
        input: impl AsRef<[u8]>,
        dest: &mut [u8],
    ) -> Result<usize, Base64Error> {
        let input = input.as_ref();
        let needed = self.encoded_length(input.len());
        if dest.len() < needed {
            return Err(Base64Error::BufferTooSmall {
                needed,
                available: dest.len(),
            });
        }

        let mut offset = 0;
        for group in input.chunks(3) {
            let (symbols, count) = self.encode_group(group);
            dest[offset..offset + count].copy_from_slice(&symbols[..count]);
            offset += count;
        }
        if let Some(pad) = self.padding {
            dest[offset..needed].fill(pad);
        }
        Ok(needed)
    }

    /// Decodes base64 text to bytes, skipping groups that cannot be resolved.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> Vec<u8> {
        let input = input.as_ref();
        let mut out = vec![0u8; calc_decoded_length(input.len())];
        let length = self.decode_groups(input, &mut out);
        out.truncate(length);
        out
    }

    /// Decodes into the start of `dest` and returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// `dest` must hold at least [`calc_decoded_length`] of the input length,
    /// otherwise [`Base64Error::BufferTooSmall`] is returned and `dest` is left
    /// untouched.
    pub fn decode_to_slice(
        &self,
        input: impl AsRef<[u8]>,
        dest: &mut [u8],
    ) -> Result<usize, Base64Error> {
        let input = input.as_ref();
        let needed = calc_decoded_length(input.len());
        if dest.len() < needed {
            return Err(Base64Error::BufferTooSmall {
                needed,
                available: dest.len(),
            });
        }
        Ok(self.decode_groups(input, dest))
    }

    /// Symbols for up to 3 bytes and how many of them to emit. Missing bytes
    /// count as zero in the bit math but do not add symbols.
    fn encode_group(&self, group: &[u8]) -> ([u8; 4], usize) {
        let a = group[0];
        let (b, has_b) = match group.get(1) {
            Some(&b) => (b, true),
            None => (0, false),
        };
        let (c, has_c) = match group.get(2) {
            Some(&c) => (c, true),
            None => (0, false),
        };

        let symbols = [
            self.alphabet.encode(a >> 2),
            self.alphabet.encode(((a & 3) << 4) | (b >> 4)),
            self.alphabet.encode(((b & 15) << 2) | (c >> 6)),
            self.alphabet.encode(c & 63),
        ];
        (symbols, 2 + has_b as usize + has_c as usize)
    }

    /// `dest` must hold `calc_decoded_length(input.len())` bytes.
    fn decode_groups(&self, input: &[u8], dest: &mut [u8]) -> usize {
        let mut written = 0;
        for (index, group) in input.chunks(4).enumerate() {
            let sextet = |i: usize| {
                group
                    .get(i)
                    .and_then(|&symbol| self.alphabet.decode(symbol))
            };

            let (Some(a), Some(b)) = (sextet(0), sextet(1)) else {
                tracing::trace!(
                    offset = index * 4,
                    "skipping base64 group without two leading symbols"
                );
                continue;
            };
            let c = sextet(2);
            let d = sextet(3);
            let cv = c.unwrap_or(0);
            let dv = d.unwrap_or(0);

            let bytes = [
                (a << 2) | (b >> 4),
                ((b & 15) << 4) | (cv >> 2),
                ((cv & 3) << 6) | dv,
            ];
            let count = 1 + c.is_some() as usize + d.is_some() as usize;
            dest[written..written + count].copy_from_slice(&bytes[..count]);
            written += count;
        }
        written
    }
}

impl Default for Base64 {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Empty means no padding; anything else must be one ASCII character.
pub(crate) fn parse_padding(pad: &str) -> Result<Option<u8>, Base64Error> {
    match pad.as_bytes() {
        [] => Ok(None),
        [pad] => Ok(Some(*pad)),
        _ => Err(Base64Error::InvalidPadding),
    }
}

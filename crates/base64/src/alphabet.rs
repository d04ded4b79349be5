//! 64-symbol alphabets with a reverse lookup table for decoding.

use crate::constants::{ALPHABET_BYTES, ALPHABET_URL_BYTES};
use crate::Base64Error;

const ABSENT: u8 = 0xff;

/// An ordered set of 64 distinct ASCII symbols; a symbol's position is the
/// 6-bit value it encodes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    encode: [u8; 64],
    decode: [u8; 256],
}

impl Alphabet {
    /// Standard alphabet, `A-Z a-z 0-9 + /`.
    pub const STANDARD: Alphabet = match Alphabet::new(ALPHABET_BYTES) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build standard alphabet"),
    };

    /// URL-safe alphabet, `A-Z a-z 0-9 - _`.
    pub const URL_SAFE: Alphabet = match Alphabet::new(ALPHABET_URL_BYTES) {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("Could not build URL-safe alphabet"),
    };

    /// Builds an alphabet from exactly 64 symbols.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is not ASCII or appears more than once.
    pub const fn new(symbols: &[u8; 64]) -> Result<Self, Base64Error> {
        let mut encode = [0u8; 64];
        let mut decode = [ABSENT; 256];

        let mut index = 0;
        while index < 64 {
            let character = symbols[index];
            if !character.is_ascii() {
                return Err(Base64Error::NonAsciiCharacter { character, index });
            }
            let previous = decode[character as usize];
            if previous != ABSENT {
                return Err(Base64Error::DuplicateCharacter {
                    character: character as char,
                    first: previous as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = index as u8;
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Builds an alphabet from a string of exactly 64 ASCII characters.
    ///
    /// # Example
    ///
    /// ```
    /// use base64_codec::{Alphabet, ALPHABET_URL};
    ///
    /// let alphabet = Alphabet::from_chars(ALPHABET_URL).unwrap();
    /// assert_eq!(alphabet, Alphabet::URL_SAFE);
    /// ```
    pub fn from_chars(chars: &str) -> Result<Self, Base64Error> {
        let symbols: &[u8; 64] = chars.as_bytes().try_into().map_err(|_| {
            tracing::debug!(length = chars.len(), "rejected base64 alphabet");
            Base64Error::InvalidCharSetLength { length: chars.len() }
        })?;
        Self::new(symbols).inspect_err(|error| {
            tracing::debug!(%error, "rejected base64 alphabet");
        })
    }

    /// Symbol for a 6-bit value. Only the low 6 bits of `value` are used.
    #[inline]
    pub const fn encode(&self, value: u8) -> u8 {
        self.encode[(value & 63) as usize]
    }

    /// 6-bit value of a symbol, or `None` if the byte is not in the alphabet.
    #[inline]
    pub const fn decode(&self, symbol: u8) -> Option<u8> {
        match self.decode[symbol as usize] {
            ABSENT => None,
            value => Some(value),
        }
    }

    pub const fn contains(&self, symbol: u8) -> bool {
        self.decode[symbol as usize] != ABSENT
    }

    pub const fn as_bytes(&self) -> &[u8; 64] {
        &self.encode
    }
}

impl std::fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Symbols are validated ASCII.
        let symbols: String = self.encode.iter().map(|&c| c as char).collect();
        f.debug_tuple("Alphabet").field(&symbols).finish()
    }
}

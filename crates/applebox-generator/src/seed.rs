use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::Rng as _;
use sha2::{Digest as _, Sha256};

/// Errors returned when parsing a [`BoardSeed`] from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {_0} characters")]
    InvalidLength(#[error(not(source))] usize),
    /// A character is not a hex digit.
    #[display("invalid hex digit {ch:?} at position {index}")]
    InvalidHexDigit {
        /// Offending character.
        ch: char,
        /// Zero-based character position.
        index: usize,
    },
}

/// A 256-bit seed that fully determines a generated board.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use applebox_generator::BoardSeed;
///
/// let seed = BoardSeed::from_phrase("daily-2026-10-16");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<BoardSeed>()?, seed);
/// # Ok::<(), applebox_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSeed([u8; 32]);

impl BoardSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local random generator.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        rand::rng().fill(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from arbitrary text by hashing it with SHA-256.
    ///
    /// The same phrase always yields the same seed, so a phrase such as a date
    /// can name a shared board.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl Display for BoardSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for BoardSeed {
    type Err = SeedParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != 64 {
            return Err(SeedParseError::InvalidLength(len));
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(index, ch)| {
            ch.to_digit(16)
                .ok_or(SeedParseError::InvalidHexDigit { ch, index })
        });
        for byte in &mut bytes {
            let (Some(high), Some(low)) = (digits.next(), digits.next()) else {
                unreachable!("length checked above");
            };
            *byte = ((high? << 4) | low?) as u8;
        }
        Ok(Self(bytes))
    }
}

impl From<[u8; 32]> for BoardSeed {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

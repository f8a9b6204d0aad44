//! Case-normalized guess letters.

use std::fmt;
use std::str::FromStr;

/// A lowercase ASCII letter, `'a'` through `'z'`.
///
/// # Examples
///
/// ```rust
/// use guesstree::ledger::Letter;
///
/// let letter = Letter::new('G').unwrap();
/// assert_eq!(letter.as_char(), 'g');
///
/// let parsed: Letter = " x ".parse().unwrap();
/// assert_eq!(parsed.as_char(), 'x');
///
/// assert!(Letter::new('é').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Letter(char);

impl Letter {
    /// Lower-cases `character` if it is an ASCII letter.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::NotAlphabetic`] for any other character.
    pub const fn new(character: char) -> Result<Self, LetterError> {
        if character.is_ascii_alphabetic() {
            Ok(Self(character.to_ascii_lowercase()))
        } else {
            Err(LetterError::NotAlphabetic(character))
        }
    }

    /// Returns the letter as a `char`.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        Self::new(character)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let mut characters = trimmed.chars();
        match (characters.next(), characters.next()) {
            (None, _) => Err(LetterError::Empty),
            (Some(character), None) => Self::new(character),
            (Some(_), Some(_)) => Err(LetterError::MultipleCharacters(trimmed.to_string())),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// LetterError
// =============================================================================

/// Input that cannot be turned into a [`Letter`].
///
/// # Examples
///
/// ```rust
/// use guesstree::ledger::{Letter, LetterError};
///
/// let error = "ab".parse::<Letter>().unwrap_err();
/// assert_eq!(error, LetterError::MultipleCharacters("ab".to_string()));
/// assert_eq!(format!("{error}"), "expected a single letter, got \"ab\"");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    /// Nothing but whitespace was given.
    Empty,
    /// More than one character was given.
    MultipleCharacters(String),
    /// The character is not an ASCII letter.
    NotAlphabetic(char),
}

impl fmt::Display for LetterError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(formatter, "expected a letter, got nothing"),
            Self::MultipleCharacters(input) => {
                write!(formatter, "expected a single letter, got {input:?}")
            }
            Self::NotAlphabetic(character) => {
                write!(formatter, "{character:?} is not a letter from a to z")
            }
        }
    }
}

impl std::error::Error for LetterError {}

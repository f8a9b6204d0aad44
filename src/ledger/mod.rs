//! Guess tracking on top of [`AvlTree`].
//!
//! A word-guessing game needs to know, for every letter a player picks,
//! whether that letter was already tried. [`GuessLedger`] answers that with
//! one membership check followed by at most one insertion, so the underlying
//! tree never holds a duplicate.
//!
//! Input is normalized into a [`Letter`] first: ASCII letters are
//! lower-cased, anything else is rejected with a [`LetterError`].
//!
//! # Examples
//!
//! ```rust
//! use guesstree::ledger::{GuessLedger, GuessOutcome};
//!
//! let mut ledger = GuessLedger::new();
//!
//! let first = ledger.guess_char('E').unwrap();
//! assert!(first.is_fresh());
//!
//! let again = ledger.guess_str(" e ").unwrap();
//! assert!(matches!(again, GuessOutcome::Repeated(_)));
//!
//! assert!(ledger.guess_char('7').is_err());
//! assert_eq!(ledger.len(), 1);
//! ```

mod letter;

pub use letter::Letter;
pub use letter::LetterError;

use std::fmt;

use log::{debug, trace};

use crate::tree::AvlTree;

// =============================================================================
// GuessOutcome
// =============================================================================

/// What recording a guess did.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum GuessOutcome {
    /// The letter had not been guessed before and is now recorded.
    Fresh(Letter),
    /// The letter was already recorded; nothing changed.
    Repeated(Letter),
}

impl GuessOutcome {
    /// Returns the letter that was guessed.
    #[inline]
    pub const fn letter(&self) -> Letter {
        match self {
            Self::Fresh(letter) | Self::Repeated(letter) => *letter,
        }
    }

    /// Returns `true` if the guess was new.
    #[inline]
    pub const fn is_fresh(&self) -> bool {
        matches!(self, Self::Fresh(_))
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh(letter) => write!(formatter, "guessed '{letter}'"),
            Self::Repeated(letter) => write!(formatter, "already guessed '{letter}'"),
        }
    }
}

// =============================================================================
// GuessLedger
// =============================================================================

/// The set of letters guessed so far in one round.
///
/// # Examples
///
/// ```rust
/// use guesstree::ledger::{GuessLedger, Letter};
///
/// let mut ledger = GuessLedger::new();
/// let letter = Letter::new('q').unwrap();
///
/// assert!(!ledger.has_guessed(letter));
/// ledger.guess(letter);
/// assert!(ledger.has_guessed(letter));
///
/// ledger.reset();
/// assert!(ledger.is_empty());
/// ```
#[derive(Clone, Default, Debug)]
pub struct GuessLedger {
    guesses: AvlTree<Letter>,
}

impl GuessLedger {
    /// Creates an empty ledger.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            guesses: AvlTree::new(),
        }
    }

    /// Records `letter` unless it was already guessed.
    pub fn guess(&mut self, letter: Letter) -> GuessOutcome {
        if self.guesses.contains(&letter) {
            trace!("letter '{letter}' was already guessed");
            return GuessOutcome::Repeated(letter);
        }
        self.guesses.insert(letter);
        trace!(
            "recorded letter '{letter}' ({} guessed so far)",
            self.guesses.len()
        );
        GuessOutcome::Fresh(letter)
    }

    /// Normalizes `character` and records it.
    ///
    /// # Errors
    ///
    /// Returns [`LetterError::NotAlphabetic`] if `character` is not an ASCII
    /// letter.
    pub fn guess_char(&mut self, character: char) -> Result<GuessOutcome, LetterError> {
        let letter =
            Letter::new(character).inspect_err(|error| debug!("rejected guess: {error}"))?;
        Ok(self.guess(letter))
    }

    /// Parses a single letter from `input`, ignoring surrounding whitespace,
    /// and records it.
    ///
    /// # Errors
    ///
    /// Returns a [`LetterError`] if `input` is not exactly one ASCII letter.
    pub fn guess_str(&mut self, input: &str) -> Result<GuessOutcome, LetterError> {
        let letter = input
            .parse::<Letter>()
            .inspect_err(|error| debug!("rejected guess: {error}"))?;
        Ok(self.guess(letter))
    }

    /// Returns `true` if `letter` has been guessed.
    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guesses.contains(&letter)
    }

    /// Returns the number of distinct letters guessed.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.guesses.len()
    }

    /// Returns `true` if nothing has been guessed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// Forgets every guess.
    pub fn reset(&mut self) {
        debug!("resetting ledger after {} guesses", self.guesses.len());
        self.guesses.clear();
    }

    /// Returns the tree backing this ledger.
    #[inline]
    #[must_use]
    pub const fn tree(&self) -> &AvlTree<Letter> {
        &self.guesses
    }
}

/// Writes the guessed letters in alphabetical order, e.g. `{a, e, t}`.
impl fmt::Display for GuessLedger {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.guesses)
    }
}

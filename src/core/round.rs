//! Hangman round state machine
//!
//! A Round tracks the target word, the set of guessed letters, and the
//! mistake count, deriving the game status from them. Status transitions are
//! one-way within a round: Playing → Won or Playing → Lost, and no further
//! guesses are accepted once the round is over.

use rustc_hash::FxHashSet;
use std::fmt;

/// Maximum number of incorrect guesses before the round is lost
pub const MAX_MISTAKES: u8 = 6;

/// Derived game status for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => write!(f, "playing"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Result of feeding one letter to [`Round::guess`]
///
/// `Won` and `Lost` are returned only on the guess that causes the
/// transition, so observers (session stats, banners) fire exactly once per
/// round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; round continues
    Hit,
    /// Letter is not in the word; round continues
    Miss,
    /// This guess completed the word
    Won,
    /// This guess was the sixth mistake
    Lost,
    /// Ignored: round over, repeat guess, or non-alphabetic input
    Ignored,
}

/// One play-through from word selection to Won/Lost
#[derive(Debug, Clone)]
pub struct Round {
    word: String,
    guessed: FxHashSet<char>,
    guess_order: Vec<char>,
    mistakes: u8,
    status: GameStatus,
}

impl Round {
    /// Start a round against the given target word
    ///
    /// The word is uppercased; spaces in multi-word phrases are treated as
    /// already revealed and never need a guess.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_uppercase(),
            guessed: FxHashSet::default(),
            guess_order: Vec::new(),
            mistakes: 0,
            status: GameStatus::Playing,
        }
    }

    /// Reset the round with a new target word
    ///
    /// Allowed from any state: clears guessed letters, zeroes the mistake
    /// count, and returns the status to Playing.
    pub fn reset(&mut self, word: impl Into<String>) {
        *self = Self::new(word);
    }

    /// Feed one guessed letter into the state machine
    ///
    /// No-op (`Ignored`) when the round is over or the letter was already
    /// guessed, making repeat guesses idempotent. Non-alphabetic input is
    /// filtered at the UI boundary; anything that slips through is ignored
    /// here as well.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        if self.status != GameStatus::Playing {
            return GuessOutcome::Ignored;
        }

        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return GuessOutcome::Ignored;
        }

        if !self.guessed.insert(letter) {
            return GuessOutcome::Ignored;
        }
        self.guess_order.push(letter);

        if self.word.contains(letter) {
            if self.is_word_complete() {
                self.status = GameStatus::Won;
                GuessOutcome::Won
            } else {
                GuessOutcome::Hit
            }
        } else {
            self.mistakes += 1;
            if self.mistakes >= MAX_MISTAKES {
                self.status = GameStatus::Lost;
                GuessOutcome::Lost
            } else {
                GuessOutcome::Miss
            }
        }
    }

    /// Display form of the target word
    ///
    /// Spaces and guessed letters are revealed; every other position renders
    /// as `_`. Always the same length as the target word.
    #[must_use]
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if c == ' ' || self.guessed.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    fn is_word_complete(&self) -> bool {
        self.word
            .chars()
            .filter(|&c| c != ' ')
            .all(|c| self.guessed.contains(&c))
    }

    /// The target word (uppercase)
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Incorrect guesses so far, bounded by [`MAX_MISTAKES`]
    #[inline]
    #[must_use]
    pub const fn mistakes(&self) -> u8 {
        self.mistakes
    }

    /// Current derived status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the round has reached a terminal state
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Guessed letters in the order they were entered
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[char] {
        &self.guess_order
    }

    /// Whether a letter has been guessed this round
    #[inline]
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_uppercase())
    }

    /// Whether a guessed letter was a hit (used for keyboard coloring)
    #[inline]
    #[must_use]
    pub fn is_hit(&self, letter: char) -> bool {
        let letter = letter.to_ascii_uppercase();
        self.has_guessed(letter) && self.word.contains(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_round_starts_clean() {
        let round = Round::new("cat");
        assert_eq!(round.word(), "CAT");
        assert_eq!(round.mistakes(), 0);
        assert_eq!(round.status(), GameStatus::Playing);
        assert_eq!(round.masked_word(), "___");
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn cat_scenario() {
        let mut round = Round::new("CAT");

        assert_eq!(round.guess('T'), GuessOutcome::Hit);
        assert_eq!(round.masked_word(), "__T");
        assert_eq!(round.mistakes(), 0);
        assert_eq!(round.status(), GameStatus::Playing);

        assert_eq!(round.guess('C'), GuessOutcome::Hit);
        assert_eq!(round.masked_word(), "C_T");

        assert_eq!(round.guess('A'), GuessOutcome::Won);
        assert_eq!(round.masked_word(), "CAT");
        assert_eq!(round.status(), GameStatus::Won);
    }

    #[test]
    fn dog_scenario_six_misses_loses() {
        let mut round = Round::new("DOG");

        for (i, letter) in ['X', 'Y', 'Z', 'Q', 'W'].into_iter().enumerate() {
            assert_eq!(round.guess(letter), GuessOutcome::Miss);
            assert_eq!(round.mistakes(), i as u8 + 1);
            assert_eq!(round.status(), GameStatus::Playing);
        }

        assert_eq!(round.guess('V'), GuessOutcome::Lost);
        assert_eq!(round.mistakes(), 6);
        assert_eq!(round.status(), GameStatus::Lost);
    }

    #[test]
    fn mistakes_never_exceed_max() {
        let mut round = Round::new("DOG");
        for letter in 'A'..='Z' {
            round.guess(letter);
        }
        assert!(round.mistakes() <= MAX_MISTAKES);
        assert_eq!(round.mistakes(), MAX_MISTAKES);
    }

    #[test]
    fn repeat_guess_is_idempotent() {
        let mut round = Round::new("DOG");

        assert_eq!(round.guess('X'), GuessOutcome::Miss);
        assert_eq!(round.mistakes(), 1);

        assert_eq!(round.guess('X'), GuessOutcome::Ignored);
        assert_eq!(round.mistakes(), 1);

        assert_eq!(round.guess('O'), GuessOutcome::Hit);
        assert_eq!(round.guess('O'), GuessOutcome::Ignored);
        assert_eq!(round.masked_word(), "_O_");
        assert_eq!(round.guessed_letters(), &['X', 'O']);
    }

    #[test]
    fn lowercase_guess_normalized() {
        let mut round = Round::new("DOG");
        assert_eq!(round.guess('d'), GuessOutcome::Hit);
        assert_eq!(round.masked_word(), "D__");
        assert_eq!(round.guess('D'), GuessOutcome::Ignored);
    }

    #[test]
    fn non_alphabetic_ignored() {
        let mut round = Round::new("DOG");
        assert_eq!(round.guess('3'), GuessOutcome::Ignored);
        assert_eq!(round.guess('!'), GuessOutcome::Ignored);
        assert_eq!(round.guess(' '), GuessOutcome::Ignored);
        assert_eq!(round.mistakes(), 0);
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn win_before_six_mistakes_never_lost() {
        let mut round = Round::new("DOG");
        round.guess('X');
        round.guess('Y');
        round.guess('Z');
        round.guess('Q');
        round.guess('W'); // five mistakes
        assert_eq!(round.mistakes(), 5);

        round.guess('D');
        round.guess('O');
        assert_eq!(round.guess('G'), GuessOutcome::Won);
        assert_eq!(round.status(), GameStatus::Won);
    }

    #[test]
    fn lost_round_stays_lost() {
        let mut round = Round::new("DOG");
        for letter in ['X', 'Y', 'Z', 'Q', 'W', 'V'] {
            round.guess(letter);
        }
        assert_eq!(round.status(), GameStatus::Lost);

        // Even a correct letter changes nothing after the round ends
        assert_eq!(round.guess('D'), GuessOutcome::Ignored);
        assert_eq!(round.status(), GameStatus::Lost);
        assert_eq!(round.masked_word(), "___");
    }

    #[test]
    fn won_round_ignores_further_guesses() {
        let mut round = Round::new("A");
        assert_eq!(round.guess('A'), GuessOutcome::Won);
        assert_eq!(round.guess('B'), GuessOutcome::Ignored);
        assert_eq!(round.mistakes(), 0);
        assert_eq!(round.status(), GameStatus::Won);
    }

    #[test]
    fn spaces_always_revealed() {
        let round = Round::new("ICE HOCKEY");
        let masked = round.masked_word();
        assert_eq!(masked.len(), "ICE HOCKEY".len());
        assert_eq!(masked, "___ ______");
    }

    #[test]
    fn phrase_wins_without_guessing_space() {
        let mut round = Round::new("GO UP");
        round.guess('G');
        round.guess('O');
        round.guess('U');
        assert_eq!(round.guess('P'), GuessOutcome::Won);
    }

    #[test]
    fn repeated_letters_revealed_together() {
        let mut round = Round::new("SPEED");
        assert_eq!(round.guess('E'), GuessOutcome::Hit);
        assert_eq!(round.masked_word(), "__EE_");
    }

    #[test]
    fn reset_clears_everything() {
        let mut round = Round::new("DOG");
        round.guess('X');
        round.guess('D');

        round.reset("cat");
        assert_eq!(round.word(), "CAT");
        assert_eq!(round.mistakes(), 0);
        assert_eq!(round.status(), GameStatus::Playing);
        assert_eq!(round.masked_word(), "___");
        assert!(round.guessed_letters().is_empty());
    }

    #[test]
    fn reset_allowed_from_terminal_state() {
        let mut round = Round::new("A");
        round.guess('A');
        assert_eq!(round.status(), GameStatus::Won);

        round.reset("DOG");
        assert_eq!(round.status(), GameStatus::Playing);
        assert_eq!(round.guess('D'), GuessOutcome::Hit);
    }

    #[test]
    fn hit_tracking_for_keyboard() {
        let mut round = Round::new("DOG");
        round.guess('D');
        round.guess('X');

        assert!(round.is_hit('D'));
        assert!(round.is_hit('d'));
        assert!(!round.is_hit('X'));
        assert!(!round.is_hit('O')); // in word but not guessed
        assert!(round.has_guessed('x'));
        assert!(!round.has_guessed('Z'));
    }
}

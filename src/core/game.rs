//! Hangman game state machine
//!
//! A [`Game`] owns everything about one round: the word, what has been
//! revealed, the letters already played and the remaining lives. A
//! [`GameSlot`] is what a player session holds between rounds, either an
//! active game or nothing.
//!
//! Invalid input never mutates state. Submitting a guess returns a
//! [`GuessResult`] that either carries the evaluation [`Outcome`] or says why
//! the input was ignored.

use super::guess::{Guess, Outcome, evaluate};
use super::mask::RevealedMask;
use super::normalize::{NormalizedForm, normalize};
use super::word::Word;
use rustc_hash::FxHashSet;
use std::fmt;

/// Lives granted at the start of a game unless configured otherwise
pub const DEFAULT_MAX_LIVES: u32 = 5;

/// Display name used when the player leaves the name blank
pub const DEFAULT_PLAYER: &str = "Joueur";

/// Trim a submitted player name, falling back to [`DEFAULT_PLAYER`]
#[must_use]
pub fn player_name_or_default(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_PLAYER.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a guess was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// No game is running in this slot
    NoActiveGame,
    /// The game is already won or lost
    GameOver,
    /// Not exactly one alphabetic character
    InvalidInput,
    /// Letter (or an accented variant of it) was already played
    Repeat,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "no game in progress"),
            Self::GameOver => write!(f, "game is over"),
            Self::InvalidInput => write!(f, "guess must be a single letter"),
            Self::Repeat => write!(f, "letter already played"),
        }
    }
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess was evaluated and the state updated
    Applied(Outcome),
    /// Guess was ignored, state unchanged
    Rejected(Rejection),
}

impl GuessResult {
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// State of one hangman round
#[derive(Debug, Clone)]
pub struct Game {
    player: String,
    word: Word,
    mask: RevealedMask,
    forms: Vec<NormalizedForm>,
    guessed: FxHashSet<NormalizedForm>,
    lives: u32,
    max_lives: u32,
    status: Status,
}

impl Game {
    /// Start a new game
    ///
    /// The status starts as playing even for a word with nothing to hide; the
    /// first accepted guess then ends it as won.
    #[must_use]
    pub fn start(player: impl Into<String>, word: Word, max_lives: u32) -> Self {
        let (mask, forms) = word.prepare();
        Self {
            player: player.into(),
            word,
            mask,
            forms,
            guessed: FxHashSet::default(),
            lives: max_lives,
            max_lives,
            status: Status::Playing,
        }
    }

    /// Validate and apply one guess
    ///
    /// On a miss one life is lost. Win is checked before loss, so revealing the
    /// last letter always wins.
    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        if self.status.is_over() {
            return GuessResult::Rejected(Rejection::GameOver);
        }
        let Some(guess) = Guess::parse(raw) else {
            return GuessResult::Rejected(Rejection::InvalidInput);
        };
        if self.guessed.contains(guess.form()) {
            return GuessResult::Rejected(Rejection::Repeat);
        }

        let form = guess.into_form();
        let outcome = evaluate(&form, &self.word, &self.forms, &mut self.mask);
        self.guessed.insert(form);

        if outcome.was_miss {
            self.lives = self.lives.saturating_sub(1);
        }

        if self.mask.is_complete() {
            self.status = Status::Won;
        } else if self.lives == 0 {
            self.status = Status::Lost;
        }

        GuessResult::Applied(outcome)
    }

    #[inline]
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Target word
    ///
    /// Front-ends should only display it once the game is over.
    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn mask(&self) -> &RevealedMask {
        &self.mask
    }

    #[inline]
    #[must_use]
    pub const fn lives(&self) -> u32 {
        self.lives
    }

    #[inline]
    #[must_use]
    pub const fn max_lives(&self) -> u32 {
        self.max_lives
    }

    /// Number of missed guesses so far
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.max_lives - self.lives
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Normalized forms played so far, sorted
    #[must_use]
    pub fn guessed(&self) -> Vec<&NormalizedForm> {
        let mut forms: Vec<_> = self.guessed.iter().collect();
        forms.sort();
        forms
    }

    /// Whether `letter` (or any letter sharing its form) was already played
    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&normalize(letter))
    }
}

/// A session's game, if any
#[derive(Debug, Clone, Default)]
pub struct GameSlot(Option<Game>);

impl GameSlot {
    /// Replace whatever is in the slot with a fresh game
    pub fn start(&mut self, player: impl Into<String>, word: Word, max_lives: u32) -> &Game {
        self.0.insert(Game::start(player, word, max_lives))
    }

    /// Apply a guess to the active game
    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        match &mut self.0 {
            Some(game) => game.submit_guess(raw),
            None => GuessResult::Rejected(Rejection::NoActiveGame),
        }
    }

    /// Drop the game, player name included
    pub fn reset(&mut self) {
        self.0 = None;
    }

    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.0.as_ref()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str, lives: u32) -> Game {
        Game::start("Alice", Word::new(word).unwrap(), lives)
    }

    fn guess_all(game: &mut Game, letters: &str) {
        for c in letters.chars() {
            game.submit_guess(&c.to_string());
        }
    }

    #[test]
    fn new_game_state() {
        let g = game("forêt", 5);
        assert_eq!(g.player(), "Alice");
        assert_eq!(g.lives(), 5);
        assert_eq!(g.max_lives(), 5);
        assert_eq!(g.status(), Status::Playing);
        assert_eq!(g.mask().to_string(), "_____");
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn foret_scenario() {
        let mut g = game("forêt", 5);

        let result = g.submit_guess("e");
        assert!(matches!(&result, GuessResult::Applied(o) if o.revealed == vec![3]));
        assert_eq!(g.mask().to_string(), "___ê_");

        g.submit_guess("o");
        assert!(g.mask().is_revealed(1));

        let result = g.submit_guess("z");
        assert!(matches!(&result, GuessResult::Applied(o) if o.was_miss));
        assert_eq!(g.lives(), 4);

        guess_all(&mut g, "frt");
        assert_eq!(g.mask().to_string(), "forêt");
        assert_eq!(g.status(), Status::Won);
        assert_eq!(g.lives(), 4);
        assert_eq!(g.wrong_guesses(), 1);
    }

    #[test]
    fn coeur_scenario() {
        let mut g = game("cœur", 5);

        g.submit_guess("o");
        assert_eq!(g.mask().to_string(), "_œ__");

        // 'e' is a different form, it hits the already shown ligature
        let result = g.submit_guess("e");
        assert!(matches!(&result, GuessResult::Applied(o) if o.revealed == vec![1] && !o.was_miss));
        assert_eq!(g.mask().to_string(), "_œ__");
        assert_eq!(g.lives(), 5);

        let before = g.clone();
        assert_eq!(
            g.submit_guess("o"),
            GuessResult::Rejected(Rejection::Repeat)
        );
        assert_eq!(g.lives(), before.lives());
        assert_eq!(g.mask(), before.mask());
        assert_eq!(g.status(), before.status());
    }

    #[test]
    fn single_life_miss_loses_immediately() {
        let mut g = game("forêt", 1);
        g.submit_guess("z");
        assert_eq!(g.lives(), 0);
        assert_eq!(g.status(), Status::Lost);
        assert_eq!(g.mask().to_string(), "_____");
    }

    #[test]
    fn final_reveal_wins_with_no_lives_left() {
        // A hit never costs a life, so a win and a loss cannot land on the
        // same guess. Starting at zero lives is the only way to see the win
        // check run first.
        let mut g = game("a-", 0);
        g.submit_guess("a");
        assert_eq!(g.status(), Status::Won);
        assert_eq!(g.lives(), 0);
    }

    #[test]
    fn lives_never_negative() {
        let mut g = game("a", 0);
        g.submit_guess("z");
        assert_eq!(g.lives(), 0);
        assert_eq!(g.status(), Status::Lost);
    }

    #[test]
    fn loss_after_all_lives_spent() {
        let mut g = game("forêt", 3);
        guess_all(&mut g, "xyz");
        assert_eq!(g.lives(), 0);
        assert_eq!(g.status(), Status::Lost);
        assert_eq!(g.wrong_guesses(), 3);
    }

    #[test]
    fn terminal_state_rejects_guesses() {
        let mut g = game("a", 5);
        g.submit_guess("a");
        assert_eq!(g.status(), Status::Won);

        assert_eq!(g.submit_guess("b"), GuessResult::Rejected(Rejection::GameOver));
        assert_eq!(g.lives(), 5);
        assert!(!g.has_guessed('b'));
    }

    #[test]
    fn invalid_input_is_a_no_op() {
        let mut g = game("forêt", 5);
        for raw in ["", "ab", "3", "-", " "] {
            assert_eq!(
                g.submit_guess(raw),
                GuessResult::Rejected(Rejection::InvalidInput)
            );
        }
        assert_eq!(g.lives(), 5);
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn combining_mark_guess_is_invalid() {
        let mut g = game("forêt", 5);
        assert_eq!(
            g.submit_guess("\u{0345}"),
            GuessResult::Rejected(Rejection::InvalidInput)
        );
        assert_eq!(g.mask().to_string(), "_____");
        assert_eq!(g.status(), Status::Playing);
        assert!(g.guessed().is_empty());
    }

    #[test]
    fn accented_guess_repeats_base_letter() {
        let mut g = game("forêt", 5);
        assert!(g.submit_guess("e").is_applied());
        assert_eq!(g.submit_guess("É"), GuessResult::Rejected(Rejection::Repeat));
        assert!(g.has_guessed('ê'));
    }

    #[test]
    fn revealing_is_monotonic() {
        let mut g = game("chocolat", 5);
        g.submit_guess("c");
        let shown: Vec<usize> = (0..g.mask().len()).filter(|&i| g.mask().is_revealed(i)).collect();

        guess_all(&mut g, "zxqwh");
        for i in shown {
            assert!(g.mask().is_revealed(i));
        }
    }

    #[test]
    fn guessed_forms_sorted() {
        let mut g = game("forêt", 5);
        guess_all(&mut g, "tzea");
        let forms: Vec<&str> = g.guessed().iter().map(|f| f.as_str()).collect();
        assert_eq!(forms, ["a", "e", "t", "z"]);
    }

    #[test]
    fn slot_lifecycle() {
        let mut slot = GameSlot::default();
        assert!(slot.is_empty());
        assert_eq!(
            slot.submit_guess("a"),
            GuessResult::Rejected(Rejection::NoActiveGame)
        );

        slot.start("Bob", Word::new("été").unwrap(), DEFAULT_MAX_LIVES);
        assert!(slot.submit_guess("t").is_applied());
        assert_eq!(slot.game().map(Game::player), Some("Bob"));

        slot.reset();
        assert!(slot.game().is_none());
    }

    #[test]
    fn player_name_defaults() {
        assert_eq!(player_name_or_default("  Zoé "), "Zoé");
        assert_eq!(player_name_or_default("   "), DEFAULT_PLAYER);
        assert_eq!(player_name_or_default(""), DEFAULT_PLAYER);
    }
}

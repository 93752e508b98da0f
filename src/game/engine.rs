//! The game engine: turn progression, win/loss evaluation, input
//! validation/retry, and rendering, composed purely from deferred effects.
//!
//! `Hangman` is generic over the execution strategy `F`; it only ever
//! *describes* work as `F::Carrier<_>` values. The strategy is injected
//! once, at construction, and discharged once, at the program edge — the
//! engine itself never runs anything.

use std::marker::PhantomData;
use std::ops::ControlFlow;

use crate::console::{Console, StdConsole};
use crate::eff;
use crate::effect::MonadDefer;
use crate::error::GameError;

use super::dictionary::Dictionary;
use super::picker::{RandomPicker, WordPicker};
use super::render::board;
use super::state::GameState;

/// A console hangman game described against an abstract effect strategy.
///
/// # Examples
///
/// A deterministic game under the blocking strategy:
///
/// ```rust
/// use gallows::console::ScriptedConsole;
/// use gallows::effect::Blocking;
/// use gallows::game::{Dictionary, FixedPicker, Hangman};
///
/// let console = ScriptedConsole::new(["Ann", "g", "o"]);
/// let dictionary = Dictionary::from_lines(["go"]).unwrap();
/// let game: Hangman<Blocking, _, _> =
///     Hangman::new(console.clone(), FixedPicker::new(0), dictionary);
///
/// let state = game.play().run_unsafe().unwrap();
/// assert!(state.player_won());
/// ```
pub struct Hangman<F, C = StdConsole, R = RandomPicker>
where
    F: MonadDefer,
    C: Console,
    R: WordPicker,
{
    console: C,
    picker: R,
    dictionary: Dictionary,
    strategy: PhantomData<fn() -> F>,
}

impl<F, C, R> Clone for Hangman<F, C, R>
where
    F: MonadDefer,
    C: Console,
    R: WordPicker,
{
    fn clone(&self) -> Self {
        Self {
            console: self.console.clone(),
            picker: self.picker.clone(),
            dictionary: self.dictionary.clone(),
            strategy: PhantomData,
        }
    }
}

impl<F, C, R> Hangman<F, C, R>
where
    F: MonadDefer,
    C: Console,
    R: WordPicker,
{
    /// Builds a game against the given console, picker, and word list.
    pub fn new(console: C, picker: R, dictionary: Dictionary) -> Self {
        Self {
            console,
            picker,
            dictionary,
            strategy: PhantomData,
        }
    }

    /// The whole game as one effect: welcome banner, name acquisition,
    /// word selection, initial render, then the turn loop. Resolves to the
    /// terminal [`GameState`].
    pub fn play(&self) -> F::Carrier<GameState> {
        let this = self.clone();
        eff!(F;
            _ <= self.put_line("Welcome to purely functional hangman");
            name <= this.get_name();
            _ <= this.put_line(format!("Welcome {name}. Let's begin!"));
            word <= this.choose_word();
            let state = GameState::new(name, word);
            _ <= this.render_state(&state);
            this.game_loop(state)
        )
    }

    /// Runs turns until a terminal state is reached.
    ///
    /// Driven by `tail_rec` so an arbitrarily long game never builds an
    /// arbitrarily deep composed-effect chain.
    fn game_loop(&self, state: GameState) -> F::Carrier<GameState> {
        let this = self.clone();
        F::tail_rec(state, move |state| this.turn(state))
    }

    /// One full turn: guess acquisition, state update, render, outcome
    /// evaluation.
    ///
    /// Win and loss are checked strictly before the correct/incorrect
    /// acknowledgments, so a terminal guess never additionally prints the
    /// plain feedback line.
    fn turn(&self, state: GameState) -> F::Carrier<ControlFlow<GameState, GameState>> {
        let this = self.clone();
        eff!(F;
            guess <= self.get_choice();
            let updated = state.with_guess(guess);
            _ <= this.render_state(&updated);
            this.conclude(updated, guess)
        )
    }

    fn conclude(
        &self,
        state: GameState,
        guess: char,
    ) -> F::Carrier<ControlFlow<GameState, GameState>> {
        if state.player_won() {
            F::map(
                self.put_line(format!("Congratulations {} you won the game", state.name())),
                move |_| ControlFlow::Break(state),
            )
        } else if state.player_lost() {
            F::map(
                self.put_line(format!(
                    "Sorry {} you lost the game. The word was {}",
                    state.name(),
                    state.word()
                )),
                move |_| ControlFlow::Break(state),
            )
        } else if state.word_contains(guess) {
            F::map(self.put_line("You guessed correctly!"), move |_| {
                ControlFlow::Continue(state)
            })
        } else {
            F::map(self.put_line("That's wrong, but keep trying"), move |_| {
                ControlFlow::Continue(state)
            })
        }
    }

    fn get_name(&self) -> F::Carrier<String> {
        let this = self.clone();
        eff!(F;
            _ <= self.put_line("What is your name: ");
            this.read_line()
        )
    }

    /// Acquires exactly one lowercase character guess.
    ///
    /// An empty line retries from the prompt without consuming a turn; a
    /// non-empty line yields its first character after lowercasing, with any
    /// later characters discarded and no rejection of digits or symbols.
    /// End-of-input propagates as a failed effect.
    fn get_choice(&self) -> F::Carrier<char> {
        let this = self.clone();
        F::tail_rec((), move |()| {
            let this = this.clone();
            eff!(F;
                _ <= this.put_line("Please enter a letter");
                line <= this.read_line();
                let lowered = line.to_lowercase();
                match lowered.chars().next() {
                    Some(guess) => F::succeed(ControlFlow::Break(guess)),
                    None => F::succeed(ControlFlow::Continue(())),
                }
            )
        })
    }

    /// Word selection as an effect: the draw happens at execution time.
    fn choose_word(&self) -> F::Carrier<String> {
        let picker = self.picker.clone();
        let dictionary = self.dictionary.clone();
        F::delay(move || {
            let index = picker.pick(dictionary.len());
            let word = dictionary.word(index).to_owned();
            tracing::debug!(%word, "selected secret word");
            word
        })
    }

    fn render_state(&self, state: &GameState) -> F::Carrier<()> {
        self.put_line(board(state))
    }

    fn put_line(&self, line: impl Into<String>) -> F::Carrier<()> {
        let console = self.console.clone();
        let line = line.into();
        F::delay(move || console.write_line(&line))
    }

    fn read_line(&self) -> F::Carrier<String> {
        let console = self.console.clone();
        F::and_then(
            F::delay(move || console.read_line()),
            move |line| match line {
                Some(line) => F::succeed(line),
                None => F::fail(GameError::InputExhausted),
            },
        )
    }
}

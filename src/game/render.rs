//! Board rendering: a stateless projection of [`GameState`].

use super::state::GameState;

/// Formats the board as one multi-line block:
///
/// - a row revealing each guessed letter in place, three columns per letter
///   (`" c "` if guessed, `"   "` otherwise);
/// - a `" - "` underline per letter, irrespective of guesses;
/// - a blank separator line;
/// - `"Guesses: "` followed by the distinct guessed characters in ascending
///   order, no separator.
///
/// Rendering never inspects win/loss status. The trailing newline means a
/// line-oriented write leaves a blank line after the block.
///
/// # Examples
///
/// ```rust
/// use gallows::game::{board, GameState};
///
/// let state = GameState::new("Ann", "go").with_guess('g');
/// assert_eq!(board(&state), " g    \n -  - \n\nGuesses: g\n");
/// ```
pub fn board(state: &GameState) -> String {
    let letters: String = state
        .word()
        .chars()
        .map(|letter| {
            if state.guesses().contains(&letter) {
                format!(" {letter} ")
            } else {
                "   ".to_string()
            }
        })
        .collect();
    let underline = " - ".repeat(state.word().chars().count());
    let guessed: String = state.guesses().iter().collect();
    format!("{letters}\n{underline}\n\nGuesses: {guessed}\n")
}

//! # gallows
//!
//! A purely functional console hangman game built on a pluggable
//! deferred-effect system.
//!
//! ## Overview
//!
//! The game logic is written against an abstract "deferred computation"
//! capability rather than any concrete execution engine, so the same game
//! description runs unchanged under different execution strategies:
//!
//! - **Effect contract**: the [`effect::MonadDefer`] trait — deferred
//!   creation, sequencing, mapping, error raising, and stack-safe
//!   iteration over a carrier family.
//! - **Execution strategies**: [`effect::Blocking`] (synchronous),
//!   [`effect::Asynchronous`] (single-value async, feature `async`), and
//!   [`effect::Streaming`] (one-shot stream, feature `stream`).
//! - **Game engine**: [`game::Hangman`] — turn progression, win/loss
//!   evaluation, input retry, and rendering as pure effect compositions.
//! - **Ports**: [`console::Console`] and [`game::WordPicker`], with
//!   production and deterministic test adapters.
//!
//! ## Feature Flags
//!
//! - `async`: the tokio-driven asynchronous strategy
//! - `stream`: the futures-stream strategy
//!
//! ## Example
//!
//! ```rust
//! use gallows::console::ScriptedConsole;
//! use gallows::effect::Blocking;
//! use gallows::game::{Dictionary, FixedPicker, Hangman};
//!
//! let console = ScriptedConsole::new(["Ann", "g", "o"]);
//! let dictionary = Dictionary::from_lines(["go"]).unwrap();
//! let game: Hangman<Blocking, _, _> =
//!     Hangman::new(console.clone(), FixedPicker::new(0), dictionary);
//!
//! let state = game.play().run_unsafe().unwrap();
//! assert!(state.player_won());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use gallows::prelude::*;
/// ```
pub mod prelude {
    pub use crate::console::*;
    pub use crate::effect::*;
    pub use crate::error::GameError;
    pub use crate::game::*;
}

pub mod console;
pub mod effect;
pub mod error;
pub mod game;

pub use error::GameError;

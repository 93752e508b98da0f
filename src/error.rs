//! Error types for the game and its effect system.
//!
//! A single taxonomy covers the whole crate: effects raise [`GameError`]
//! through [`MonadDefer::fail`](crate::effect::MonadDefer::fail), and every
//! pending `and_then` propagates it unchanged until the strategy's run
//! method surfaces it at the program edge.

/// Errors that can abort a game session.
///
/// There is deliberately no recovery path for any of these: once raised, the
/// failure short-circuits the remaining effect chain and the session ends.
/// An empty guess line is *not* an error — it is handled locally by the
/// input-acquisition retry loop and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A line read yielded no input (end-of-input on the console).
    #[error("failed to read input: input is exhausted")]
    InputExhausted,

    /// The word list materialised with no usable words.
    #[error("the word list is empty")]
    EmptyDictionary,

    /// The word list file could not be read.
    #[error("failed to load the word list")]
    DictionaryIo(#[from] std::io::Error),

    /// A carrier stream completed without yielding its value.
    ///
    /// Unreachable through the public constructors, which always produce
    /// exactly one item; raised only if a hand-built stream violates the
    /// single-value protocol.
    #[cfg(feature = "stream")]
    #[error("effect stream completed without yielding a value")]
    StreamExhausted,
}

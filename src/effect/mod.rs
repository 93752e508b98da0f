//! Deferred-effect system: the contract and its execution strategies.
//!
//! The game engine is written against [`MonadDefer`], a minimal capability
//! set for building programs without committing to how, or when, side
//! effects run: `succeed`, `delay`, `fail`, `and_then`, and the derived
//! `map`, plus `tail_rec` for stack-safe loops.
//!
//! Three execution strategies discharge the same description:
//!
//! - [`Blocking`] with carrier [`IO`] — synchronous, runs on the calling
//!   thread via `run_unsafe`.
//! - [`Asynchronous`] with carrier [`AsyncIO`] (feature `async`) — a
//!   single-value future driven by whatever runtime the edge supplies.
//! - [`Streaming`] with carrier [`StreamIO`] (feature `stream`) — a one-shot
//!   [`futures::Stream`].
//!
//! # Examples
//!
//! ```rust
//! use gallows::effect::{Blocking, MonadDefer};
//!
//! // Effects are descriptions; nothing runs until the edge.
//! let effect = Blocking::and_then(Blocking::delay(|| 20), |n| Blocking::succeed(n + 2));
//! assert_eq!(effect.run_unsafe().unwrap(), 22);
//! ```

// =============================================================================
// Contract
// =============================================================================

mod monad_defer;

pub use monad_defer::MonadDefer;

// =============================================================================
// Blocking strategy
// =============================================================================

mod io;

pub use io::{Blocking, IO};

// =============================================================================
// Asynchronous strategy (requires async feature)
// =============================================================================

#[cfg(feature = "async")]
mod async_io;

#[cfg(feature = "async")]
pub use async_io::{AsyncIO, Asynchronous};

// =============================================================================
// Streaming strategy (requires stream feature)
// =============================================================================

#[cfg(feature = "stream")]
mod stream_io;

#[cfg(feature = "stream")]
pub use stream_io::{StreamIO, Streaming};

// =============================================================================
// Do-Notation Macro
// =============================================================================

mod eff_macro;

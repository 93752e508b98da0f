//! `IO` — the blocking synchronous carrier.
//!
//! The `IO` type represents a computation that may perform side effects
//! and/or fail. Side effects are not executed until `run_unsafe` is called,
//! maintaining referential transparency in pure code.
//!
//! # Design Philosophy
//!
//! `IO` "describes" side effects but doesn't "execute" them. Execution
//! happens only via `run_unsafe`, which should be called at the program's
//! "edge" (e.g., in the `main` function).
//!
//! # Examples
//!
//! ```rust
//! use gallows::effect::IO;
//!
//! // Create a pure IO action
//! let io = IO::pure(42);
//! assert_eq!(io.run_unsafe().unwrap(), 42);
//!
//! // Chain IO actions
//! let io = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .and_then(|x| IO::pure(x + 1));
//! assert_eq!(io.run_unsafe().unwrap(), 21);
//! ```

use std::ops::ControlFlow;

use crate::error::GameError;

use super::monad_defer::MonadDefer;

/// A deferred, fallible, blocking computation.
///
/// `IO<A>` wraps a computation that produces a value of type `A` or fails
/// with [`GameError`]. The computation is not executed until
/// [`run_unsafe`](IO::run_unsafe) is called, and is consumed exactly once.
pub struct IO<A> {
    /// The wrapped computation.
    run_io: Box<dyn FnOnce() -> Result<A, GameError> + Send>,
}

impl<A: Send + 'static> IO<A> {
    /// Creates a new `IO` action from a fallible closure.
    ///
    /// The closure will not be executed until `run_unsafe` is called.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> Result<A, GameError> + Send + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// Wraps a pure value in an `IO` action.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gallows::effect::IO;
    ///
    /// let io = IO::pure(42);
    /// assert_eq!(io.run_unsafe().unwrap(), 42);
    /// ```
    pub fn pure(value: A) -> Self {
        Self::new(move || Ok(value))
    }

    /// Defers an infallible computation.
    ///
    /// The thunk is invoked exactly once, at execution time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gallows::effect::IO;
    ///
    /// let io = IO::delay(|| 40 + 2);
    /// assert_eq!(io.run_unsafe().unwrap(), 42);
    /// ```
    pub fn delay<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self::new(move || Ok(thunk()))
    }

    /// An `IO` action that fails with `error` when executed.
    pub fn raise(error: GameError) -> Self {
        Self::new(move || Err(error))
    }

    /// Executes the `IO` action and returns the result.
    ///
    /// This is the only way to extract a value from an `IO` action. It
    /// should be called at the program's "edge".
    ///
    /// # Safety Note
    ///
    /// This method is named `run_unsafe` to indicate that it executes side
    /// effects. While it's memory-safe, calling it breaks referential
    /// transparency.
    ///
    /// # Errors
    ///
    /// Returns whatever [`GameError`] the described computation raised.
    pub fn run_unsafe(self) -> Result<A, GameError> {
        (self.run_io)()
    }

    /// Transforms the result of an `IO` action using a function.
    ///
    /// This is the `fmap` operation from Functor.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.and_then(move |value| IO::pure(function(value)))
    }

    /// Chains `IO` actions, passing the result of the first to a function
    /// that produces the second. A failure in the first action
    /// short-circuits: `next` is never invoked.
    pub fn and_then<B, F>(self, next: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        IO::new(move || {
            let value = self.run_unsafe()?;
            next(value).run_unsafe()
        })
    }
}

/// The blocking synchronous execution strategy.
///
/// Discharges every effect on the calling thread, in order, the moment
/// [`run_unsafe`](IO::run_unsafe) is invoked on the composed carrier.
///
/// # Examples
///
/// ```rust
/// use gallows::effect::{Blocking, MonadDefer};
///
/// let effect = Blocking::map(Blocking::succeed(20), |n| n * 2);
/// assert_eq!(effect.run_unsafe().unwrap(), 40);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Blocking;

impl MonadDefer for Blocking {
    type Carrier<A: Send + 'static> = IO<A>;

    fn succeed<A>(value: A) -> IO<A>
    where
        A: Send + 'static,
    {
        IO::pure(value)
    }

    fn delay<A, F>(thunk: F) -> IO<A>
    where
        A: Send + 'static,
        F: FnOnce() -> A + Send + 'static,
    {
        IO::delay(thunk)
    }

    fn fail<A>(error: GameError) -> IO<A>
    where
        A: Send + 'static,
    {
        IO::raise(error)
    }

    fn and_then<A, B, F>(effect: IO<A>, next: F) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> IO<B> + Send + 'static,
    {
        effect.and_then(next)
    }

    fn tail_rec<A, B, S>(initial: A, step: S) -> IO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        S: Fn(A) -> IO<ControlFlow<B, A>> + Send + 'static,
    {
        // One iteration's chain is run to completion per pass, so loop depth
        // never accumulates on the stack.
        IO::new(move || {
            let mut current = initial;
            loop {
                match step(current).run_unsafe()? {
                    ControlFlow::Continue(next) => current = next,
                    ControlFlow::Break(value) => return Ok(value),
                }
            }
        })
    }
}

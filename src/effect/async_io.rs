//! `AsyncIO` — the single-value asynchronous carrier.
//!
//! `AsyncIO` describes an asynchronous computation that may perform side
//! effects and/or fail. Nothing runs until `run_async().await`, which should
//! be called at the program's "edge" (an async `main` or a runtime's
//! `block_on`).
//!
//! # Examples
//!
//! ```rust,ignore
//! use gallows::effect::AsyncIO;
//!
//! #[tokio::main]
//! async fn main() {
//!     let effect = AsyncIO::pure(10).and_then(|x| AsyncIO::pure(x + 1));
//!     assert_eq!(effect.run_async().await.unwrap(), 11);
//! }
//! ```

use std::future::Future;
use std::ops::ControlFlow;
use std::pin::Pin;

use crate::error::GameError;

use super::monad_defer::MonadDefer;

type BoxedAsyncRun<A> =
    Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = Result<A, GameError>> + Send>> + Send>;

/// A deferred, fallible, asynchronous computation.
///
/// `AsyncIO<A>` wraps a computation producing `A` or failing with
/// [`GameError`]. The future is not even constructed until
/// [`run_async`](AsyncIO::run_async) is called, so building and composing
/// carriers performs no work.
pub struct AsyncIO<A> {
    /// The wrapped async computation.
    run_async_io: BoxedAsyncRun<A>,
}

impl<A: Send + 'static> AsyncIO<A> {
    /// Creates a new `AsyncIO` action from a closure returning a future.
    ///
    /// Neither the closure nor the future runs until `run_async` is called.
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, GameError>> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || Box::pin(action())),
        }
    }

    /// Creates an `AsyncIO` from an existing future.
    ///
    /// The future should not have been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, GameError>> + Send + 'static,
    {
        Self {
            run_async_io: Box::new(move || Box::pin(future)),
        }
    }

    /// Wraps a pure value in an `AsyncIO` action.
    pub fn pure(value: A) -> Self {
        Self::new(move || async move { Ok(value) })
    }

    /// Defers an infallible blocking thunk.
    ///
    /// The thunk is invoked exactly once, inside the future, at execution
    /// time.
    pub fn delay<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self::new(move || async move { Ok(thunk()) })
    }

    /// An `AsyncIO` action that fails with `error` when executed.
    pub fn raise(error: GameError) -> Self {
        Self::new(move || async move { Err(error) })
    }

    /// Executes the `AsyncIO` action and returns the result.
    ///
    /// # Errors
    ///
    /// Returns whatever [`GameError`] the described computation raised.
    pub async fn run_async(self) -> Result<A, GameError> {
        (self.run_async_io)().await
    }

    /// Transforms the result of an `AsyncIO` action using a function.
    pub fn fmap<B, F>(self, function: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.and_then(move |value| AsyncIO::pure(function(value)))
    }

    /// Chains `AsyncIO` actions; a failure in the first short-circuits and
    /// `next` is never invoked.
    pub fn and_then<B, F>(self, next: F) -> AsyncIO<B>
    where
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
        B: Send + 'static,
    {
        AsyncIO::new(move || async move {
            let value = self.run_async().await?;
            next(value).run_async().await
        })
    }
}

/// The single-value asynchronous execution strategy.
///
/// Carriers are tokio-agnostic futures; the entry point (or test) supplies
/// the runtime that drives them.
#[derive(Debug, Clone, Copy, Default)]
pub struct Asynchronous;

impl MonadDefer for Asynchronous {
    type Carrier<A: Send + 'static> = AsyncIO<A>;

    fn succeed<A>(value: A) -> AsyncIO<A>
    where
        A: Send + 'static,
    {
        AsyncIO::pure(value)
    }

    fn delay<A, F>(thunk: F) -> AsyncIO<A>
    where
        A: Send + 'static,
        F: FnOnce() -> A + Send + 'static,
    {
        AsyncIO::delay(thunk)
    }

    fn fail<A>(error: GameError) -> AsyncIO<A>
    where
        A: Send + 'static,
    {
        AsyncIO::raise(error)
    }

    fn and_then<A, B, F>(effect: AsyncIO<A>, next: F) -> AsyncIO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> AsyncIO<B> + Send + 'static,
    {
        effect.and_then(next)
    }

    fn tail_rec<A, B, S>(initial: A, step: S) -> AsyncIO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        S: Fn(A) -> AsyncIO<ControlFlow<B, A>> + Send + 'static,
    {
        AsyncIO::new(move || async move {
            let mut current = initial;
            loop {
                match step(current).run_async().await? {
                    ControlFlow::Continue(next) => current = next,
                    ControlFlow::Break(value) => return Ok(value),
                }
            }
        })
    }
}

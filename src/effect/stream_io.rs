//! `StreamIO` — the streaming asynchronous carrier.
//!
//! `StreamIO` expresses a deferred computation as a one-shot
//! [`futures::Stream`]: every carrier built through the contract yields
//! exactly one `Result` item. The stream form exists so the same game
//! description can be discharged by a stream-driven executor; composing
//! carriers never polls anything.

use std::ops::ControlFlow;

use futures::StreamExt;
use futures::stream::{self, BoxStream};

use crate::error::GameError;

use super::monad_defer::MonadDefer;

/// A deferred, fallible computation carried by a one-shot stream.
///
/// The single item is produced only when the stream is polled. Consuming a
/// hand-built stream that completes without yielding raises
/// [`GameError::StreamExhausted`]; the constructors here always yield
/// exactly one item.
pub struct StreamIO<A> {
    stream: BoxStream<'static, Result<A, GameError>>,
}

impl<A: Send + 'static> StreamIO<A> {
    /// Creates a `StreamIO` from an existing stream.
    ///
    /// The stream is expected to yield exactly one item; only the first is
    /// ever observed.
    pub fn new<S>(stream: S) -> Self
    where
        S: futures::Stream<Item = Result<A, GameError>> + Send + 'static,
    {
        Self {
            stream: stream.boxed(),
        }
    }

    /// Wraps a pure value.
    pub fn pure(value: A) -> Self {
        Self::new(stream::iter(std::iter::once(Ok(value))))
    }

    /// Defers an infallible thunk; it is invoked exactly once, when the
    /// stream is polled.
    pub fn delay<F>(thunk: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self::new(stream::once(async move { Ok(thunk()) }))
    }

    /// A `StreamIO` that fails with `error` when polled.
    pub fn raise(error: GameError) -> Self {
        Self::new(stream::iter(std::iter::once(Err(error))))
    }

    /// Chains computations; a failure short-circuits and `next` is never
    /// invoked.
    pub fn and_then<B, F>(self, next: F) -> StreamIO<B>
    where
        F: FnOnce(A) -> StreamIO<B> + Send + 'static,
        B: Send + 'static,
    {
        let flattened = stream::once(async move {
            match self.first().await {
                Ok(value) => next(value).stream,
                Err(error) => stream::iter(std::iter::once(Err(error))).boxed(),
            }
        })
        .flatten();
        StreamIO::new(flattened)
    }

    /// Transforms the single successful item.
    pub fn fmap<B, F>(self, function: F) -> StreamIO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.and_then(move |value| StreamIO::pure(function(value)))
    }

    /// Drives the stream to its single item.
    ///
    /// # Errors
    ///
    /// Returns the raised [`GameError`], or
    /// [`GameError::StreamExhausted`] if the stream completed without
    /// yielding.
    pub async fn run_stream(self) -> Result<A, GameError> {
        self.first().await
    }

    /// Unwraps the carrier into the underlying boxed stream.
    pub fn into_stream(self) -> BoxStream<'static, Result<A, GameError>> {
        self.stream
    }

    async fn first(self) -> Result<A, GameError> {
        let (head, _rest) = self.stream.into_future().await;
        head.unwrap_or(Err(GameError::StreamExhausted))
    }
}

/// The streaming asynchronous execution strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Streaming;

impl MonadDefer for Streaming {
    type Carrier<A: Send + 'static> = StreamIO<A>;

    fn succeed<A>(value: A) -> StreamIO<A>
    where
        A: Send + 'static,
    {
        StreamIO::pure(value)
    }

    fn delay<A, F>(thunk: F) -> StreamIO<A>
    where
        A: Send + 'static,
        F: FnOnce() -> A + Send + 'static,
    {
        StreamIO::delay(thunk)
    }

    fn fail<A>(error: GameError) -> StreamIO<A>
    where
        A: Send + 'static,
    {
        StreamIO::raise(error)
    }

    fn and_then<A, B, F>(effect: StreamIO<A>, next: F) -> StreamIO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> StreamIO<B> + Send + 'static,
    {
        effect.and_then(next)
    }

    fn tail_rec<A, B, S>(initial: A, step: S) -> StreamIO<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        S: Fn(A) -> StreamIO<ControlFlow<B, A>> + Send + 'static,
    {
        StreamIO::new(stream::once(async move {
            let mut current = initial;
            loop {
                match step(current).run_stream().await? {
                    ControlFlow::Continue(next) => current = next,
                    ControlFlow::Break(value) => return Ok(value),
                }
            }
        }))
    }
}

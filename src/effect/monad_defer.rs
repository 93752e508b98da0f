//! The deferred-computation contract shared by every execution strategy.
//!
//! [`MonadDefer`] is the capability set the game engine is written against:
//! create a deferred computation, sequence two computations, transform a
//! result, raise an error. A type implementing it is an *execution
//! strategy* — a marker that names a carrier family (`Carrier<A>`) and knows
//! how to build and combine carrier values. Nothing in the contract says
//! how, or when, a carrier is eventually run; that is the strategy's own
//! business, exposed through an inherent run method on the carrier type.
//!
//! # Higher-kinded emulation
//!
//! Rust has no native higher-kinded types, so the carrier family is a
//! generic associated type on the strategy. Program code names effects as
//! `F::Carrier<A>` for some `F: MonadDefer`, which keeps every intermediate
//! type in a chain uniformly nameable — the property that makes generic
//! monadic code tractable without true HKT.
//!
//! # Laws
//!
//! Every implementation must satisfy the standard sequencing laws:
//!
//! 1. **Left Identity**: `and_then(succeed(a), f)` behaves as `f(a)`
//! 2. **Right Identity**: `and_then(m, succeed)` behaves as `m`
//! 3. **Associativity**: `and_then(and_then(m, f), g)` behaves as
//!    `and_then(m, |x| and_then(f(x), g))`
//!
//! Failure propagation is total: once a step fails, no subsequent step
//! executes and the chain's overall result is that failure.
//!
//! # Examples
//!
//! ```rust
//! use gallows::effect::{Blocking, MonadDefer};
//!
//! let effect = Blocking::and_then(Blocking::succeed(20), |n| Blocking::succeed(n + 1));
//! assert_eq!(effect.run_unsafe().unwrap(), 21);
//! ```

use std::ops::ControlFlow;

use crate::error::GameError;

/// The capability set a deferred-computation carrier must provide.
///
/// Implementors are zero-sized strategy markers ([`Blocking`], and with the
/// corresponding features [`Asynchronous`] and [`Streaming`]); the carrier
/// values themselves live in `Self::Carrier<A>`.
///
/// All carriers and the values flowing through them are `Send + 'static` so
/// the same program composition type-checks under thread-hopping executors.
///
/// [`Blocking`]: crate::effect::Blocking
/// [`Asynchronous`]: crate::effect::Asynchronous
/// [`Streaming`]: crate::effect::Streaming
pub trait MonadDefer: 'static {
    /// The carrier family: a deferred computation yielding `A` or failing
    /// with [`GameError`].
    type Carrier<A: Send + 'static>: Send + 'static;

    /// An effect that yields `value` without performing any visible action.
    fn succeed<A>(value: A) -> Self::Carrier<A>
    where
        A: Send + 'static;

    /// An effect that invokes `thunk` exactly once at execution time.
    ///
    /// The thunk must not run at construction time — laziness is the whole
    /// point: the same description can be built once and executed later, or
    /// never, without side effects leaking.
    fn delay<A, F>(thunk: F) -> Self::Carrier<A>
    where
        A: Send + 'static,
        F: FnOnce() -> A + Send + 'static;

    /// An effect that signals failure with `error` when executed.
    fn fail<A>(error: GameError) -> Self::Carrier<A>
    where
        A: Send + 'static;

    /// Sequencing: execute `effect`; on success feed its result to `next`
    /// and execute the effect it returns; on failure short-circuit without
    /// invoking `next`.
    fn and_then<A, B, F>(effect: Self::Carrier<A>, next: F) -> Self::Carrier<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> Self::Carrier<B> + Send + 'static;

    /// Transform a successful result without introducing a new effectful
    /// step.
    ///
    /// Defined in terms of [`and_then`](Self::and_then) and
    /// [`succeed`](Self::succeed).
    fn map<A, B, F>(effect: Self::Carrier<A>, function: F) -> Self::Carrier<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Self::and_then(effect, move |value| Self::succeed(function(value)))
    }

    /// Stack-safe iteration: run `step` repeatedly, feeding each
    /// `ControlFlow::Continue` value back in, until it yields
    /// `ControlFlow::Break`.
    ///
    /// Rust does not guarantee tail-call optimisation, so a game loop built
    /// from structurally recursive `and_then` chains would deepen the stack
    /// on every turn. Strategies override this default with a constant-stack
    /// loop that runs one iteration's chain at a time; the recursive default
    /// exists to state the semantics.
    fn tail_rec<A, B, S>(initial: A, step: S) -> Self::Carrier<B>
    where
        A: Send + 'static,
        B: Send + 'static,
        S: Fn(A) -> Self::Carrier<ControlFlow<B, A>> + Send + 'static,
    {
        Self::and_then(step(initial), move |flow| match flow {
            ControlFlow::Continue(next) => Self::tail_rec(next, step),
            ControlFlow::Break(value) => Self::succeed(value),
        })
    }
}

//! `eff!` macro for do-notation style syntax over a strategy.
//!
//! The macro chains [`MonadDefer`](crate::effect::MonadDefer) operations in
//! a readable, imperative-looking style similar to Haskell's do-notation.
//! Because program code is generic over the carrier family, the first
//! argument names the strategy type whose `and_then` the binds expand to.
//!
//! # Syntax
//!
//! - `pattern <= expression;` — bind: sequence the effect and name its value
//! - `let pattern = expression;` — pure let binding
//! - `expression` — final expression (must already be a carrier)
//!
//! # Operator Choice: `<=`
//!
//! `<-` is not valid in Rust's macro patterns; `<=` is visually similar and
//! suggests "bind from".
//!
//! # Examples
//!
//! ```rust
//! use gallows::eff;
//! use gallows::effect::{Blocking, MonadDefer};
//!
//! let effect = eff!(Blocking;
//!     x <= Blocking::succeed(5);
//!     y <= Blocking::succeed(10);
//!     let z = x + y;
//!     Blocking::succeed(z * 2)
//! );
//! assert_eq!(effect.run_unsafe().unwrap(), 30);
//! ```

/// Chains deferred-effect operations over an explicit strategy.
///
/// `eff!(F; pattern <= effect; ...; final_effect)` expands to nested
/// `F::and_then` calls, so a failure at any step short-circuits the rest.
///
/// # Examples
///
/// ```rust
/// use gallows::eff;
/// use gallows::effect::{Blocking, MonadDefer};
///
/// // Short-circuit on failure: the second step never runs.
/// use gallows::GameError;
/// let effect = eff!(Blocking;
///     _ <= Blocking::fail::<i32>(GameError::InputExhausted);
///     Blocking::succeed(42)
/// );
/// assert!(effect.run_unsafe().is_err());
/// ```
#[macro_export]
macro_rules! eff {
    // ==========================================================================
    // Terminal case: a single expression, already a carrier
    // ==========================================================================

    ($strategy:ty; $result:expr) => {
        $result
    };

    // ==========================================================================
    // Bind operation: pattern <= effect; rest
    // ==========================================================================

    ($strategy:ty; $pattern:ident <= $effect:expr ; $($rest:tt)+) => {
        <$strategy>::and_then($effect, move |$pattern| {
            $crate::eff!($strategy; $($rest)+)
        })
    };

    ($strategy:ty; ($($pattern:tt)*) <= $effect:expr ; $($rest:tt)+) => {
        <$strategy>::and_then($effect, move |($($pattern)*)| {
            $crate::eff!($strategy; $($rest)+)
        })
    };

    ($strategy:ty; _ <= $effect:expr ; $($rest:tt)+) => {
        <$strategy>::and_then($effect, move |_| {
            $crate::eff!($strategy; $($rest)+)
        })
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    ($strategy:ty; let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::eff!($strategy; $($rest)+)
    }};

    ($strategy:ty; let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::eff!($strategy; $($rest)+)
    }};
}

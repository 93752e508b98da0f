//! Property-based tests for the deferred-effect contract under the blocking
//! strategy.
//!
//! Verifies the sequencing laws every execution strategy must satisfy:
//! - Left Identity: and_then(succeed(a), f) == f(a)
//! - Right Identity: and_then(m, succeed) == m
//! - Associativity: and_then(and_then(m, f), g) == and_then(m, |x| and_then(f(x), g))
//! plus total failure short-circuit, delay laziness, and tail_rec depth
//! independence.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use gallows::GameError;
use gallows::effect::{Blocking, IO, MonadDefer};
use proptest::prelude::*;

// =============================================================================
// Sequencing Laws
// =============================================================================

proptest! {
    /// Left Identity Law: and_then(succeed(a), f) == f(a)
    #[test]
    fn prop_left_identity(value: i32) {
        let function = |n: i32| Blocking::succeed(n.wrapping_mul(2));

        let left = Blocking::and_then(Blocking::succeed(value), function)
            .run_unsafe()
            .unwrap();
        let right = function(value).run_unsafe().unwrap();

        prop_assert_eq!(left, right);
    }

    /// Right Identity Law: and_then(m, succeed) == m
    #[test]
    fn prop_right_identity(value: i32) {
        let left = Blocking::and_then(Blocking::succeed(value), Blocking::succeed)
            .run_unsafe()
            .unwrap();

        prop_assert_eq!(left, value);
    }

    /// Associativity Law: regrouping and_then chains does not change the
    /// result.
    #[test]
    fn prop_associativity(value: i32) {
        let function1 = |n: i32| Blocking::succeed(n.wrapping_add(1));
        let function2 = |n: i32| Blocking::succeed(n.wrapping_mul(2));

        let left = Blocking::and_then(
            Blocking::and_then(Blocking::succeed(value), function1),
            function2,
        )
        .run_unsafe()
        .unwrap();
        let right = Blocking::and_then(Blocking::succeed(value), move |x| {
            Blocking::and_then(function1(x), function2)
        })
        .run_unsafe()
        .unwrap();

        prop_assert_eq!(left, right);
    }

    /// map is and_then + succeed.
    #[test]
    fn prop_map_consistency(value: i32) {
        let left = Blocking::map(Blocking::succeed(value), |n| n.wrapping_add(10))
            .run_unsafe()
            .unwrap();
        let right = Blocking::and_then(Blocking::succeed(value), |n| {
            Blocking::succeed(n.wrapping_add(10))
        })
        .run_unsafe()
        .unwrap();

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Failure Short-Circuit
// =============================================================================

#[test]
fn failure_never_invokes_continuation() {
    let invoked = Arc::new(AtomicBool::new(false));
    let invoked_clone = invoked.clone();

    let effect = Blocking::and_then(Blocking::fail::<i32>(GameError::InputExhausted), move |n| {
        invoked_clone.store(true, Ordering::SeqCst);
        Blocking::succeed(n + 1)
    });

    assert!(matches!(
        effect.run_unsafe(),
        Err(GameError::InputExhausted)
    ));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[test]
fn failure_propagates_through_every_pending_step() {
    let effect = Blocking::map(
        Blocking::and_then(Blocking::fail::<i32>(GameError::InputExhausted), |n| {
            Blocking::succeed(n * 2)
        }),
        |n| n + 1,
    );

    assert!(matches!(
        effect.run_unsafe(),
        Err(GameError::InputExhausted)
    ));
}

// =============================================================================
// Delay Laziness
// =============================================================================

#[test]
fn delay_does_not_run_at_construction() {
    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = executed.clone();

    let effect = Blocking::delay(move || {
        executed_clone.store(true, Ordering::SeqCst);
        42
    });

    assert!(
        !executed.load(Ordering::SeqCst),
        "delay must not execute on construction"
    );

    assert_eq!(effect.run_unsafe().unwrap(), 42);
    assert!(executed.load(Ordering::SeqCst));
}

#[test]
fn composition_does_not_run_anything() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let effect = Blocking::map(
        Blocking::and_then(
            Blocking::delay(move || {
                counter_clone.fetch_add(1, Ordering::SeqCst);
                1
            }),
            |n| Blocking::succeed(n + 1),
        ),
        |n| n + 1,
    );

    assert_eq!(counter.load(Ordering::SeqCst), 0);
    assert_eq!(effect.run_unsafe().unwrap(), 3);
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn delay_runs_exactly_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = counter.clone();

    let effect = Blocking::delay(move || counter_clone.fetch_add(1, Ordering::SeqCst));
    effect.run_unsafe().unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Stack-Safe Iteration
// =============================================================================

#[test]
fn tail_rec_survives_deep_iteration() {
    let effect = Blocking::tail_rec(0_u64, |n| {
        IO::delay(move || {
            if n < 100_000 {
                ControlFlow::Continue(n + 1)
            } else {
                ControlFlow::Break(n)
            }
        })
    });

    assert_eq!(effect.run_unsafe().unwrap(), 100_000);
}

#[test]
fn tail_rec_propagates_step_failure() {
    let effect: IO<u32> = Blocking::tail_rec(0_u32, |n| {
        if n < 3 {
            Blocking::succeed(ControlFlow::Continue(n + 1))
        } else {
            Blocking::fail(GameError::InputExhausted)
        }
    });

    assert!(matches!(
        effect.run_unsafe(),
        Err(GameError::InputExhausted)
    ));
}

#[test]
fn tail_rec_breaks_immediately_without_iterating() {
    let effect = Blocking::tail_rec(7_u32, |n| Blocking::succeed(ControlFlow::Break(n * 2)));
    assert_eq!(effect.run_unsafe().unwrap(), 14);
}

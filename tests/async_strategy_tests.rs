#![cfg(feature = "async")]
//! The contract law surface under the single-value asynchronous strategy.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gallows::GameError;
use gallows::console::ScriptedConsole;
use gallows::effect::{AsyncIO, Asynchronous, MonadDefer};
use gallows::game::{Dictionary, FixedPicker, Hangman};

#[tokio::test]
async fn left_identity() {
    let function = |n: i32| Asynchronous::succeed(n * 2);

    let left = Asynchronous::and_then(Asynchronous::succeed(21), function)
        .run_async()
        .await
        .unwrap();
    let right = function(21).run_async().await.unwrap();

    assert_eq!(left, right);
}

#[tokio::test]
async fn associativity() {
    let function1 = |n: i32| Asynchronous::succeed(n + 1);
    let function2 = |n: i32| Asynchronous::succeed(n * 2);

    let left = Asynchronous::and_then(
        Asynchronous::and_then(Asynchronous::succeed(10), function1),
        function2,
    )
    .run_async()
    .await
    .unwrap();
    let right = Asynchronous::and_then(Asynchronous::succeed(10), move |x| {
        Asynchronous::and_then(function1(x), function2)
    })
    .run_async()
    .await
    .unwrap();

    assert_eq!(left, right);
}

#[tokio::test]
async fn failure_never_invokes_continuation() {
    let invoked = Arc::new(AtomicBool::new(false));
    let invoked_clone = invoked.clone();

    let effect = Asynchronous::and_then(
        Asynchronous::fail::<i32>(GameError::InputExhausted),
        move |n| {
            invoked_clone.store(true, Ordering::SeqCst);
            Asynchronous::succeed(n + 1)
        },
    );

    assert!(matches!(
        effect.run_async().await,
        Err(GameError::InputExhausted)
    ));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn delay_does_not_run_at_construction() {
    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = executed.clone();

    let effect = Asynchronous::delay(move || {
        executed_clone.store(true, Ordering::SeqCst);
        42
    });

    assert!(!executed.load(Ordering::SeqCst));
    assert_eq!(effect.run_async().await.unwrap(), 42);
    assert!(executed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn from_future_defers_polling() {
    let effect = AsyncIO::from_future(async { Ok(7) });
    assert_eq!(effect.run_async().await.unwrap(), 7);
}

#[tokio::test]
async fn tail_rec_survives_deep_iteration() {
    let effect = Asynchronous::tail_rec(0_u64, |n| {
        AsyncIO::delay(move || {
            if n < 100_000 {
                ControlFlow::Continue(n + 1)
            } else {
                ControlFlow::Break(n)
            }
        })
    });

    assert_eq!(effect.run_async().await.unwrap(), 100_000);
}

#[tokio::test]
async fn whole_game_replays_under_the_async_strategy() {
    let console = ScriptedConsole::new(["Ann", "g", "o"]);
    let dictionary = Dictionary::from_lines(["go"]).unwrap();
    let game: Hangman<Asynchronous, _, _> =
        Hangman::new(console.clone(), FixedPicker::new(0), dictionary);

    let state = game.play().run_async().await.unwrap();

    assert!(state.player_won());
    let transcript = console.transcript();
    assert_eq!(
        transcript.last().map(String::as_str),
        Some("Congratulations Ann you won the game")
    );
}

#![cfg(feature = "stream")]
//! The contract law surface under the streaming strategy.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::StreamExt;
use gallows::GameError;
use gallows::console::ScriptedConsole;
use gallows::effect::{MonadDefer, StreamIO, Streaming};
use gallows::game::{Dictionary, FixedPicker, Hangman};

#[tokio::test]
async fn left_identity() {
    let function = |n: i32| Streaming::succeed(n * 2);

    let left = Streaming::and_then(Streaming::succeed(21), function)
        .run_stream()
        .await
        .unwrap();
    let right = function(21).run_stream().await.unwrap();

    assert_eq!(left, right);
}

#[tokio::test]
async fn associativity() {
    let function1 = |n: i32| Streaming::succeed(n + 1);
    let function2 = |n: i32| Streaming::succeed(n * 2);

    let left = Streaming::and_then(
        Streaming::and_then(Streaming::succeed(10), function1),
        function2,
    )
    .run_stream()
    .await
    .unwrap();
    let right = Streaming::and_then(Streaming::succeed(10), move |x| {
        Streaming::and_then(function1(x), function2)
    })
    .run_stream()
    .await
    .unwrap();

    assert_eq!(left, right);
}

#[tokio::test]
async fn failure_never_invokes_continuation() {
    let invoked = Arc::new(AtomicBool::new(false));
    let invoked_clone = invoked.clone();

    let effect = Streaming::and_then(
        Streaming::fail::<i32>(GameError::InputExhausted),
        move |n| {
            invoked_clone.store(true, Ordering::SeqCst);
            Streaming::succeed(n + 1)
        },
    );

    assert!(matches!(
        effect.run_stream().await,
        Err(GameError::InputExhausted)
    ));
    assert!(!invoked.load(Ordering::SeqCst));
}

#[tokio::test]
async fn delay_does_not_run_at_construction() {
    let executed = Arc::new(AtomicBool::new(false));
    let executed_clone = executed.clone();

    let effect = Streaming::delay(move || {
        executed_clone.store(true, Ordering::SeqCst);
        42
    });

    assert!(!executed.load(Ordering::SeqCst));
    assert_eq!(effect.run_stream().await.unwrap(), 42);
    assert!(executed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn carriers_yield_exactly_one_item() {
    let mut stream = Streaming::map(Streaming::succeed(5), |n| n + 1).into_stream();

    assert_eq!(stream.next().await.transpose().unwrap(), Some(6));
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn hand_built_empty_stream_is_a_protocol_violation() {
    let effect: StreamIO<i32> = StreamIO::new(futures::stream::empty());

    assert!(matches!(
        effect.run_stream().await,
        Err(GameError::StreamExhausted)
    ));
}

#[tokio::test]
async fn tail_rec_survives_deep_iteration() {
    let effect = Streaming::tail_rec(0_u64, |n| {
        StreamIO::delay(move || {
            if n < 100_000 {
                ControlFlow::Continue(n + 1)
            } else {
                ControlFlow::Break(n)
            }
        })
    });

    assert_eq!(effect.run_stream().await.unwrap(), 100_000);
}

#[tokio::test]
async fn whole_game_replays_under_the_streaming_strategy() {
    let console = ScriptedConsole::new(["Ann", "g", "o"]);
    let dictionary = Dictionary::from_lines(["go"]).unwrap();
    let game: Hangman<Streaming, _, _> =
        Hangman::new(console.clone(), FixedPicker::new(0), dictionary);

    let state = game.play().run_stream().await.unwrap();

    assert!(state.player_won());
    let transcript = console.transcript();
    assert_eq!(
        transcript.last().map(String::as_str),
        Some("Congratulations Ann you won the game")
    );
}

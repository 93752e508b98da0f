//! Entry point: selects an execution strategy, builds the game engine
//! against it, and runs the resulting effect to completion.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use gallows::console::StdConsole;
use gallows::effect::Blocking;
use gallows::game::{Dictionary, GameState, Hangman, RandomPicker};

/// A purely functional console hangman game.
#[derive(Parser, Debug)]
#[command(name = "gallows")]
#[command(about = "A purely functional console hangman game", long_about = None)]
#[command(version)]
struct Cli {
    /// Execution strategy used to discharge the game effect
    #[arg(long, value_enum, default_value = "blocking")]
    runner: Runner,

    /// Path to a newline-separated word list (defaults to the bundled list)
    #[arg(long, value_name = "PATH")]
    words: Option<PathBuf>,
}

/// Available execution strategies.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum Runner {
    /// Run synchronously on the calling thread
    Blocking,
    /// Run as a single-value future on a tokio runtime
    #[cfg(feature = "async")]
    Asynchronous,
    /// Run as a one-shot stream
    #[cfg(feature = "stream")]
    Streaming,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dictionary = match &cli.words {
        Some(path) => Dictionary::from_path(path)
            .with_context(|| format!("loading word list from {}", path.display()))?,
        None => Dictionary::bundled().context("loading the bundled word list")?,
    };

    let state = match cli.runner {
        Runner::Blocking => {
            let game: Hangman<Blocking> = Hangman::new(StdConsole, RandomPicker, dictionary);
            game.play().run_unsafe()?
        }
        #[cfg(feature = "async")]
        Runner::Asynchronous => {
            let game: Hangman<gallows::effect::Asynchronous> =
                Hangman::new(StdConsole, RandomPicker, dictionary);
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("building the tokio runtime")?
                .block_on(game.play().run_async())?
        }
        #[cfg(feature = "stream")]
        Runner::Streaming => {
            let game: Hangman<gallows::effect::Streaming> =
                Hangman::new(StdConsole, RandomPicker, dictionary);
            futures::executor::block_on(game.play().run_stream())?
        }
    };

    report(&state);
    Ok(())
}

fn report(state: &GameState) {
    if state.player_won() {
        tracing::info!(player = state.name(), "session ended in a win");
    } else {
        tracing::info!(
            player = state.name(),
            word = state.word(),
            "session ended in a loss"
        );
    }
}

//! Console port and adapters.
//!
//! The engine never touches stdin/stdout directly: it goes through the
//! [`Console`] port, wrapped in `delay`-constructed effects, so a scripted
//! adapter can drive a whole game deterministically in tests.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// Line-oriented terminal I/O.
///
/// Implementations must be cheap to clone; the engine clones the console
/// into every deferred step it builds.
pub trait Console: Clone + Send + 'static {
    /// Writes one line of text, followed by a line terminator.
    fn write_line(&self, line: &str);

    /// Reads one line of text with the trailing newline stripped.
    ///
    /// Returns `None` when no further input is available (end-of-input);
    /// absence of input is a failure condition for the caller, not an empty
    /// string.
    fn read_line(&self) -> Option<String>;
}

/// The production console: stdout and stdin of the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }

    fn read_line(&self) -> Option<String> {
        let mut buffer = String::new();
        match std::io::stdin().read_line(&mut buffer) {
            Ok(0) => None,
            Ok(_) => {
                if buffer.ends_with('\n') {
                    buffer.pop();
                    if buffer.ends_with('\r') {
                        buffer.pop();
                    }
                }
                Some(buffer)
            }
            Err(error) => {
                tracing::warn!(%error, "failed to read from stdin");
                None
            }
        }
    }
}

/// A deterministic console: scripted input, recorded output.
///
/// Input lines are served in order; once the script is exhausted every read
/// reports end-of-input. Every written line is appended to a transcript that
/// tests inspect afterwards.
///
/// # Examples
///
/// ```rust
/// use gallows::console::{Console, ScriptedConsole};
///
/// let console = ScriptedConsole::new(["Ann"]);
/// console.write_line("hello");
/// assert_eq!(console.read_line().as_deref(), Some("Ann"));
/// assert_eq!(console.read_line(), None);
/// assert_eq!(console.transcript(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: Arc<Mutex<VecDeque<String>>>,
    transcript: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConsole {
    /// Creates a console that will serve `lines` in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Arc::new(Mutex::new(lines.into_iter().map(Into::into).collect())),
            transcript: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Everything written so far, one entry per `write_line` call.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.lock().clone()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&self, line: &str) {
        self.transcript.lock().push(line.to_string());
    }

    fn read_line(&self) -> Option<String> {
        self.input.lock().pop_front()
    }
}

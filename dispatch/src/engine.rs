//! Command dispatch.
//!
//! The [`Engine`] owns the command registry and the handler map and performs
//! one parse-and-dispatch cycle per [`execute`](Engine::execute) call. It is
//! an explicit value owned by the host (typically constructed in `main`);
//! there is no process-wide singleton. Single-threaded by contract: no
//! locking discipline is defined for the handler map.

use std::collections::HashMap;

use cli_engine_core::{CommandRegistry, ParsedInput};
use tracing::{debug, warn};

use crate::parser::parse_command;

/// Callback invoked with the parsed input of one command invocation.
///
/// Handlers are synchronous and infallible from the engine's point of view:
/// the engine does not catch panics raised inside a handler. A handler that
/// must report failure does so through its own side channel.
pub type Handler = Box<dyn FnMut(&ParsedInput)>;

/// Receives human-readable diagnostics on dispatch failure.
///
/// The engine only needs a write-a-line capability; hosts inject their own
/// sink to capture or redirect diagnostics.
pub trait DiagnosticsSink {
    /// Writes one line of diagnostic text.
    fn write_line(&mut self, line: &str);
}

/// Default sink: one line per diagnostic on standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticsSink for StderrSink {
    fn write_line(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

/// Parses process arguments and routes execution to registered handlers.
///
/// # Examples
///
/// ```
/// use cli_engine_core::{ArgumentDef, ArgumentType, CommandDef, CommandRegistry, Value};
/// use cli_engine_dispatch::Engine;
///
/// let registry = CommandRegistry::from_defs(vec![
///     CommandDef::new("play", "Play a media file")
///         .with_arg(ArgumentDef::required("file", ArgumentType::String)),
/// ]);
///
/// let mut engine = Engine::new(registry);
/// engine.register_callback("play", |input| {
///     assert_eq!(input.arg(0).and_then(Value::as_str), Some("song.mp3"));
/// });
///
/// assert!(engine.execute(["play", "song.mp3"]));
/// assert!(!engine.execute(["burn", "song.mp3"]));
/// ```
pub struct Engine {
    registry: CommandRegistry,
    callbacks: HashMap<String, Handler>,
    sink: Box<dyn DiagnosticsSink>,
}

impl Engine {
    /// Creates an engine over a populated registry, reporting diagnostics
    /// to standard error.
    pub fn new(registry: CommandRegistry) -> Self {
        Self::with_sink(registry, Box::new(StderrSink))
    }

    /// Creates an engine with an injected diagnostics sink.
    pub fn with_sink(registry: CommandRegistry, sink: Box<dyn DiagnosticsSink>) -> Self {
        Self {
            registry,
            callbacks: HashMap::new(),
            sink,
        }
    }

    /// Registers a handler for a command.
    ///
    /// When `command` is not present in the registry the call is a silent
    /// no-op: registration-order mistakes must not crash the host. A second
    /// registration for the same command overwrites the first.
    pub fn register_callback<F>(&mut self, command: &str, callback: F)
    where
        F: FnMut(&ParsedInput) + 'static,
    {
        if !self.registry.contains(command) {
            debug!(command, "ignoring callback for unknown command");
            return;
        }
        self.callbacks.insert(command.to_string(), Box::new(callback));
    }

    /// Parses raw arguments and dispatches to the matching handler.
    ///
    /// `raw_args` excludes the program name (pass `std::env::args().skip(1)`
    /// from a binary). The first token selects the command; the rest are
    /// parsed against its definition.
    ///
    /// Returns `true` when nothing was requested (empty input), when the
    /// command is known but has no registered handler, or when parsing
    /// succeeded and the handler ran. Returns `false` when the command is
    /// unknown or its input failed to parse; a parse failure additionally
    /// writes one diagnostic line to the sink. No error escapes to the
    /// caller from the parse step.
    pub fn execute<I, S>(&mut self, raw_args: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = raw_args.into_iter().map(Into::into).collect();
        let Some((command, rest)) = tokens.split_first() else {
            return true;
        };

        let Some(def) = self.registry.get(command) else {
            debug!(command = %command, "unknown command");
            return false;
        };

        let Some(callback) = self.callbacks.get_mut(command) else {
            debug!(command = %command, "no handler registered, skipping");
            return true;
        };

        match parse_command(def, rest) {
            Ok(input) => {
                callback(&input);
                true
            }
            Err(err) => {
                warn!(command = %command, %err, "dispatch failed");
                self.sink.write_line(&format!("{command}: {err}"));
                false
            }
        }
    }
}

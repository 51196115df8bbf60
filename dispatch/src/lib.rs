//! Argument tokenization, typed parsing, and command dispatch.
//!
//! This crate turns a raw process argument vector into a typed
//! [`ParsedInput`](cli_engine_core::ParsedInput) and routes it to a
//! registered handler:
//!
//! 1. [`split_tokens`] separates raw tokens into flags and positionals
//!    (never fails).
//! 2. [`parse_value`] coerces one raw string into a typed value.
//! 3. [`parse_command`] resolves the split against a
//!    [`CommandDef`](cli_engine_core::CommandDef), failing fast on the
//!    first bad field.
//! 4. [`Engine`] selects the definition by command name, parses, and
//!    invokes the handler, reporting failures to a [`DiagnosticsSink`].
//!
//! # Example
//!
//! ```
//! use cli_engine_core::*;
//! use cli_engine_dispatch::Engine;
//!
//! let registry = CommandRegistry::from_defs(vec![
//!     CommandDef::new("play", "Play a media file")
//!         .with_arg(ArgumentDef::required("file", ArgumentType::String))
//!         .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer)),
//! ]);
//!
//! let mut engine = Engine::new(registry);
//! engine.register_callback("play", |input| {
//!     println!("playing {:?} at {:?}", input.arg(0), input.flag("--volume"));
//! });
//!
//! assert!(engine.execute(["play", "song.mp3", "--volume", "7"]));
//! ```

mod engine;
mod parser;
mod token;
mod value;

pub use engine::{DiagnosticsSink, Engine, Handler, StderrSink};
pub use parser::{ParseError, parse_command};
pub use token::{RawTokenSplit, is_flag_token, split_tokens};
pub use value::{ValueError, parse_value};

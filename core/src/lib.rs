//! Core types, registry, and validation for CLI command definitions.
//!
//! This crate defines the data model shared by the dispatch engine and its
//! hosts:
//!
//! - [`Value`] — the closed typed value domain for parsed arguments and
//!   flags (absent, string, integer, float, boolean).
//! - [`ArgumentType`] / [`ArgumentDef`] — the expected shape of one
//!   positional argument or named flag.
//! - [`CommandDef`] — the declarative schema of one command.
//! - [`ParsedInput`] — the schema-complete, fully typed record handed to a
//!   command handler.
//! - [`CommandRegistry`] / [`CommandPackage`] — command lookup and the JSON
//!   bundle format registries load from.
//!
//! Validation ([`validate_command`], [`validate_package`]) catches
//! structural errors such as duplicate flags and flag names the tokenizer
//! would not recognize.
//!
//! # Example
//!
//! ```
//! use cli_engine_core::*;
//!
//! let registry = CommandRegistry::from_defs(vec![
//!     CommandDef::new("play", "Play a media file")
//!         .with_arg(ArgumentDef::required("file", ArgumentType::String))
//!         .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer)),
//! ]);
//!
//! let play = registry.get("play").unwrap();
//! assert_eq!(play.args[0].name, "file");
//! assert!(validate_command(play).is_empty());
//! ```

mod registry;
mod types;
mod validate;

pub use registry::{CommandPackage, CommandRegistry, RegistryError};
pub use types::{ArgumentDef, ArgumentType, CommandDef, ParsedInput, Value};
pub use validate::{ValidationError, validate_command, validate_package};

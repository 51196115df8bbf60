//! Schema-driven command parsing.
//!
//! Combines the token splitter and value parser to resolve a raw token
//! stream against a [`CommandDef`], producing a schema-complete
//! [`ParsedInput`] or a [`ParseError`] naming the first field that failed.

use std::collections::HashMap;

use cli_engine_core::{CommandDef, ParsedInput, Value};
use thiserror::Error;

use crate::token::split_tokens;
use crate::value::{ValueError, parse_value};

/// A command's input failed schema resolution.
///
/// The parser aborts on the first failure (positionals in declaration
/// order, then flags); it does not collect multiple errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A required positional argument was not supplied.
    #[error("missing required positional argument: {0}")]
    MissingRequiredArgument(String),

    /// A required flag was not supplied.
    #[error("missing required flag: {0}")]
    MissingRequiredFlag(String),

    /// A positional argument's raw value failed type coercion.
    #[error("failed to parse positional argument {name}: {source}")]
    InvalidArgument {
        /// Name of the positional argument.
        name: String,
        /// The underlying coercion failure.
        source: ValueError,
    },

    /// A flag's raw value failed type coercion.
    #[error("failed to parse flag {name}: {source}")]
    InvalidFlag {
        /// Name of the flag.
        name: String,
        /// The underlying coercion failure.
        source: ValueError,
    },
}

/// Resolves raw tokens against a command definition.
///
/// `tokens` is the argument stream after the command name itself. Positional
/// definitions are walked by index: a missing entry yields
/// [`Value::Absent`] when optional and [`ParseError::MissingRequiredArgument`]
/// when required. Flags are looked up by exact name the same way. Extra
/// positionals and flags not declared in the schema are silently ignored.
///
/// The returned [`ParsedInput`] is always schema-complete: its `args` align
/// 1:1 with `def.args` and its `flags` map covers every declared flag. The
/// command name is taken from `def`, not from the raw input.
///
/// # Examples
///
/// ```
/// use cli_engine_core::{ArgumentDef, ArgumentType, CommandDef, Value};
/// use cli_engine_dispatch::parse_command;
///
/// let def = CommandDef::new("play", "Play a media file")
///     .with_arg(ArgumentDef::required("file", ArgumentType::String))
///     .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer));
///
/// let tokens = ["song.mp3", "--volume", "7"].map(String::from);
/// let input = parse_command(&def, &tokens).unwrap();
///
/// assert_eq!(input.command, "play");
/// assert_eq!(input.args, vec![Value::String("song.mp3".into())]);
/// assert_eq!(input.flag("--volume"), Some(&Value::Integer(7)));
/// ```
pub fn parse_command(def: &CommandDef, tokens: &[String]) -> Result<ParsedInput, ParseError> {
    let raw = split_tokens(tokens);

    let mut args = Vec::with_capacity(def.args.len());
    for (i, arg_def) in def.args.iter().enumerate() {
        let Some(raw_value) = raw.positionals.get(i) else {
            if arg_def.required {
                return Err(ParseError::MissingRequiredArgument(arg_def.name.clone()));
            }
            args.push(Value::Absent);
            continue;
        };

        let value =
            parse_value(raw_value, arg_def.value_type).map_err(|source| ParseError::InvalidArgument {
                name: arg_def.name.clone(),
                source,
            })?;
        args.push(value);
    }

    let mut flags = HashMap::with_capacity(def.flags.len());
    for flag_def in &def.flags {
        let Some(raw_value) = raw.flags.get(&flag_def.name) else {
            if flag_def.required {
                return Err(ParseError::MissingRequiredFlag(flag_def.name.clone()));
            }
            flags.insert(flag_def.name.clone(), Value::Absent);
            continue;
        };

        let value =
            parse_value(raw_value, flag_def.value_type).map_err(|source| ParseError::InvalidFlag {
                name: flag_def.name.clone(),
                source,
            })?;
        flags.insert(flag_def.name.clone(), value);
    }

    Ok(ParsedInput {
        command: def.name.clone(),
        args,
        flags,
    })
}

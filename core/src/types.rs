//! Type definitions for command declarations and parsed input.
//!
//! This module defines the core data model: the typed value domain
//! ([`Value`]), the declarative command shape ([`CommandDef`],
//! [`ArgumentDef`], [`ArgumentType`]), and the fully resolved per-invocation
//! record ([`ParsedInput`]). Definition types serialize with [`serde`] so
//! registries can round-trip through JSON bundles; `Value` and
//! `ParsedInput` are runtime-only and constructed fresh per invocation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Expected shape of a raw token before parsing.
///
/// `None` means presence-only: the argument or flag carries no value and
/// resolves to [`Value::Absent`] when present with an empty raw string.
///
/// # Examples
///
/// ```
/// use cli_engine_core::ArgumentType;
///
/// let ty = ArgumentType::default();
/// assert_eq!(ty, ArgumentType::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ArgumentType {
    /// A verbatim, non-empty string.
    String,
    /// A base-10 integer (parsed through a float and truncated toward zero).
    Integer,
    /// A base-10 floating-point number.
    Float,
    /// A case-sensitive boolean literal: `true`/`True`/`false`/`False`.
    Boolean,
    /// Presence-only: no value expected (the default).
    #[default]
    None,
}

/// A typed value produced by parsing one raw token.
///
/// Exactly one variant is active; values are immutable once constructed.
/// Optional fields that were not supplied resolve to [`Value::Absent`], so a
/// [`ParsedInput`] is always schema-complete.
///
/// # Examples
///
/// ```
/// use cli_engine_core::Value;
///
/// let v = Value::Integer(7);
/// assert_eq!(v.as_integer(), Some(7));
/// assert_eq!(v.as_str(), None);
/// assert!(!v.is_absent());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value: an unsupplied optional field or a presence-only flag.
    Absent,
    /// A verbatim string.
    String(String),
    /// An integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A boolean.
    Boolean(bool),
}

impl Value {
    /// Returns the string contents, or `None` for any other variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer, or `None` for any other variant.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float, or `None` for any other variant.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean, or `None` for any other variant.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }
}

/// Declaration of one positional argument or named flag.
///
/// The same shape describes both: positionals are matched by order,
/// flags by exact name (including the `--` prefix, e.g. `"--volume"`).
///
/// # Examples
///
/// ```
/// use cli_engine_core::{ArgumentDef, ArgumentType};
///
/// let file = ArgumentDef::required("file", ArgumentType::String);
/// assert!(file.required);
///
/// let volume = ArgumentDef::optional("--volume", ArgumentType::Integer);
/// assert!(!volume.required);
/// assert_eq!(volume.value_type, ArgumentType::Integer);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDef {
    /// Name of the argument or flag (e.g. `"file"`, `"--verbose"`).
    pub name: String,
    /// Type of value this field expects.
    #[serde(rename = "type", default)]
    pub value_type: ArgumentType,
    /// Whether the field must be present in the input.
    #[serde(default)]
    pub required: bool,
}

impl ArgumentDef {
    /// Creates a required field.
    ///
    /// A required field with [`ArgumentType::None`] is valid but unusual:
    /// the flag must appear yet carries no value.
    pub fn required(name: &str, value_type: ArgumentType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            required: true,
        }
    }

    /// Creates an optional field, resolving to [`Value::Absent`] when
    /// unsupplied.
    pub fn optional(name: &str, value_type: ArgumentType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            required: false,
        }
    }
}

/// Declarative description of one command.
///
/// The order of `args` is semantically significant: it defines positional
/// matching order. The order of `flags` is not.
///
/// # Examples
///
/// ```
/// use cli_engine_core::{ArgumentDef, ArgumentType, CommandDef};
///
/// let play = CommandDef::new("play", "Play a media file")
///     .with_arg(ArgumentDef::required("file", ArgumentType::String))
///     .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer));
///
/// assert_eq!(play.name, "play");
/// assert_eq!(play.args.len(), 1);
/// assert!(play.find_flag("--volume").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandDef {
    /// Command name (unique within a registry).
    pub name: String,
    /// Short description of what the command does.
    #[serde(default)]
    pub description: String,
    /// Ordered positional argument definitions.
    #[serde(default)]
    pub args: Vec<ArgumentDef>,
    /// Named flag definitions (names unique within the command).
    #[serde(default)]
    pub flags: Vec<ArgumentDef>,
}

impl CommandDef {
    /// Creates a command definition with the given name and description.
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            ..Default::default()
        }
    }

    /// Appends a positional argument definition.
    pub fn with_arg(mut self, arg: ArgumentDef) -> Self {
        self.args.push(arg);
        self
    }

    /// Appends a flag definition.
    pub fn with_flag(mut self, flag: ArgumentDef) -> Self {
        self.flags.push(flag);
        self
    }

    /// Finds a flag definition by exact name.
    pub fn find_flag(&self, name: &str) -> Option<&ArgumentDef> {
        self.flags.iter().find(|f| f.name == name)
    }
}

/// Fully typed, validated input for one command invocation.
///
/// Always schema-complete: `args` is aligned 1:1 with the matching
/// [`CommandDef::args`], and `flags` has an entry for every declared flag
/// (possibly [`Value::Absent`]). Constructed fresh per invocation and handed
/// to exactly one handler, then discarded.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use cli_engine_core::{ParsedInput, Value};
///
/// let input = ParsedInput {
///     command: "play".into(),
///     args: vec![Value::String("song.mp3".into())],
///     flags: HashMap::from([("--volume".to_string(), Value::Integer(7))]),
/// };
///
/// assert_eq!(input.arg(0).and_then(Value::as_str), Some("song.mp3"));
/// assert_eq!(input.flag("--volume").and_then(Value::as_integer), Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// Name of the matched command, taken from the [`CommandDef`].
    pub command: String,
    /// Positional values in declaration order.
    pub args: Vec<Value>,
    /// Flag values keyed by declared flag name.
    pub flags: HashMap<String, Value>,
}

impl ParsedInput {
    /// Returns the positional value at `index`, if declared.
    pub fn arg(&self, index: usize) -> Option<&Value> {
        self.args.get(index)
    }

    /// Returns the value of a declared flag by exact name.
    pub fn flag(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }
}

//! Command definition and package validation.
//!
//! Validates structural invariants of command definitions before they are
//! loaded into a registry: empty names, duplicate fields, flag names the
//! tokenizer would never classify as flags, and duplicate commands within a
//! package.
//!
//! # Examples
//!
//! ```
//! use cli_engine_core::*;
//!
//! let def = CommandDef::new("play", "Play a file")
//!     .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer));
//! assert!(validate_command(&def).is_empty());
//!
//! // Invalid: flag missing the double-dash prefix
//! let bad = CommandDef::new("play", "Play a file")
//!     .with_flag(ArgumentDef::optional("volume", ArgumentType::Integer));
//! assert!(!validate_command(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{ArgumentDef, CommandDef, CommandPackage};

/// Definition/package validation errors.
///
/// Each variant describes a specific structural problem. The `Display` impl
/// provides a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Package version string is empty.
    #[error("package version cannot be empty")]
    EmptyPackageVersion,
    /// Command name is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
    /// Two commands in the same package share a name.
    #[error("duplicate command in package: {0}")]
    DuplicateCommand(String),
    /// An argument or flag has an empty name.
    #[error("field name cannot be empty in command: {0}")]
    EmptyFieldName(String),
    /// Two positional arguments in the same command share a name.
    #[error("duplicate positional argument: {0}")]
    DuplicateArgument(String),
    /// Two flags in the same command share a name.
    #[error("duplicate flag: {0}")]
    DuplicateFlag(String),
    /// Flag name would not be recognized as a flag token (`--` prefix,
    /// length greater than two).
    #[error("invalid flag name format: {0}")]
    InvalidFlagName(String),
}

/// Validates a full command package.
///
/// Checks for an empty version string and duplicate command names, then
/// validates each command individually. Returns on the first error found.
///
/// # Examples
///
/// ```
/// use cli_engine_core::*;
///
/// let mut package = CommandPackage::new("1.0.0", "2024-01-01T00:00:00Z");
/// package.commands.push(CommandDef::new("play", "Play a file"));
/// assert!(validate_package(&package).is_empty());
///
/// package.commands.push(CommandDef::new("play", "Play a file"));
/// let errors = validate_package(&package);
/// assert!(errors.iter().any(|e| matches!(e, ValidationError::DuplicateCommand(_))));
/// ```
pub fn validate_package(package: &CommandPackage) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if package.version.trim().is_empty() {
        errors.push(ValidationError::EmptyPackageVersion);
        return errors;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for def in &package.commands {
        if !seen.insert(def.name.as_str()) {
            errors.push(ValidationError::DuplicateCommand(def.name.clone()));
            return errors;
        }
        errors.extend(validate_command(def));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

/// Validates a single command definition.
///
/// Checks for an empty command name, empty field names, duplicate
/// positionals, duplicate flags, and flag names that the tokenizer would
/// treat as positional tokens. Returns on the first error found.
pub fn validate_command(def: &CommandDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if def.name.trim().is_empty() {
        errors.push(ValidationError::EmptyCommandName);
        return errors;
    }

    let mut seen_args: HashSet<&str> = HashSet::new();
    for arg in &def.args {
        if arg.name.trim().is_empty() {
            errors.push(ValidationError::EmptyFieldName(def.name.clone()));
            return errors;
        }
        if !seen_args.insert(arg.name.as_str()) {
            errors.push(ValidationError::DuplicateArgument(arg.name.clone()));
            return errors;
        }
    }

    let mut seen_flags: HashSet<&str> = HashSet::new();
    for flag in &def.flags {
        if flag.name.trim().is_empty() {
            errors.push(ValidationError::EmptyFieldName(def.name.clone()));
            return errors;
        }
        if !is_flag_name(flag) {
            errors.push(ValidationError::InvalidFlagName(flag.name.clone()));
            return errors;
        }
        if !seen_flags.insert(flag.name.as_str()) {
            errors.push(ValidationError::DuplicateFlag(flag.name.clone()));
            return errors;
        }
    }

    errors
}

// Same classification rule the tokenizer applies to raw tokens.
fn is_flag_name(flag: &ArgumentDef) -> bool {
    flag.name.len() > 2 && flag.name.starts_with("--")
}

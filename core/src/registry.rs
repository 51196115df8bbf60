//! Command registry and serializable command bundles.
//!
//! The registry is the read-side contract the dispatch engine depends on: an
//! in-memory map from command name to [`CommandDef`] with O(1) lookup,
//! populated once before any dispatch. How the definitions are produced is
//! the host's choice; this module provides the common paths — an in-code
//! list of definitions, or a [`CommandPackage`] JSON bundle loaded from a
//! string or file.
//!
//! # Loading patterns
//!
//! ```no_run
//! use cli_engine_core::CommandRegistry;
//!
//! // Load from a bundle JSON file
//! let registry = CommandRegistry::from_bundle("commands.json").unwrap();
//! assert!(registry.contains("play"));
//! ```
//!
//! Embedded bundles go through [`CommandRegistry::from_json`], typically
//! with `include_str!`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CommandDef, validate_package};

/// Errors that can occur while loading a registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// File I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bundle failed definition validation.
    #[error("invalid command bundle: {0}")]
    Invalid(String),
}

/// Serializable bundle of command definitions.
///
/// A package groups multiple [`CommandDef`] values with version metadata,
/// making it suitable for distributing as a single JSON file or embedding
/// at build time.
///
/// # Examples
///
/// ```
/// use cli_engine_core::{CommandDef, CommandPackage};
///
/// let mut package = CommandPackage::new("1.0.0", "2024-01-15T10:30:00Z");
/// package.name = Some("media-commands".into());
/// package.commands.push(CommandDef::new("play", "Play a media file"));
///
/// assert_eq!(package.command_count(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandPackage {
    /// Package format version (semver string).
    pub version: String,
    /// Optional package name.
    pub name: Option<String>,
    /// Optional package description.
    pub description: Option<String>,
    /// ISO-8601 timestamp for package creation.
    pub generated_at: String,
    /// Command definitions included in this package.
    pub commands: Vec<CommandDef>,
}

impl CommandPackage {
    /// Creates a package with required fields and no commands.
    pub fn new(version: impl Into<String>, generated_at: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            name: None,
            description: None,
            generated_at: generated_at.into(),
            commands: Vec::new(),
        }
    }

    /// Returns the number of command definitions in this package.
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}

/// In-memory collection of command definitions with O(1) lookup by name.
///
/// Populated once before dispatch begins and immutable afterwards. Not
/// synchronized: concurrent population and lookup from multiple threads is
/// out of contract.
///
/// # Examples
///
/// ```
/// use cli_engine_core::{ArgumentDef, ArgumentType, CommandDef, CommandRegistry};
///
/// let registry = CommandRegistry::from_defs(vec![
///     CommandDef::new("play", "Play a media file")
///         .with_arg(ArgumentDef::required("file", ArgumentType::String)),
/// ]);
///
/// assert_eq!(registry.len(), 1);
/// assert!(registry.get("play").is_some());
/// assert!(registry.get("stop").is_none());
/// ```
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandDef>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from in-code definitions.
    ///
    /// Definitions are indexed by name; when two share a name, the later
    /// one wins. Use [`from_package`](Self::from_package) to reject
    /// duplicates instead.
    pub fn from_defs(defs: Vec<CommandDef>) -> Self {
        let mut commands = HashMap::new();
        for def in defs {
            commands.insert(def.name.clone(), def);
        }
        Self { commands }
    }

    /// Builds a registry from a validated [`CommandPackage`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Invalid`] if the package fails
    /// [`validate_package`].
    pub fn from_package(package: CommandPackage) -> Result<Self, RegistryError> {
        let errors = validate_package(&package);
        if let Some(error) = errors.first() {
            return Err(RegistryError::Invalid(error.to_string()));
        }
        Ok(Self::from_defs(package.commands))
    }

    /// Builds a registry from a [`CommandPackage`] JSON string, such as an
    /// `include_str!`-embedded bundle.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Json`] on malformed JSON or
    /// [`RegistryError::Invalid`] if the bundle fails validation.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let package: CommandPackage = serde_json::from_str(json)?;
        Self::from_package(package)
    }

    /// Loads a registry from a [`CommandPackage`] JSON bundle file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Io`] if the file cannot be read,
    /// [`RegistryError::Json`] on malformed JSON, or
    /// [`RegistryError::Invalid`] if the bundle fails validation.
    pub fn from_bundle(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let file = std::fs::File::open(path.as_ref())?;
        let reader = std::io::BufReader::new(file);
        let package: CommandPackage = serde_json::from_reader(reader)?;
        Self::from_package(package)
    }

    /// Looks up a command definition by name.
    pub fn get(&self, name: &str) -> Option<&CommandDef> {
        self.commands.get(name)
    }

    /// Returns `true` if a command with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Iterates over all registered command names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::{ArgumentDef, ArgumentType};

    use super::*;

    fn sample_package() -> CommandPackage {
        let mut package = CommandPackage::new("1.0.0", "2026-02-07T00:00:00Z");
        package.commands.push(
            CommandDef::new("play", "Play a media file")
                .with_arg(ArgumentDef::required("file", ArgumentType::String))
                .with_flag(ArgumentDef::optional("--volume", ArgumentType::Integer)),
        );
        package
            .commands
            .push(CommandDef::new("stop", "Stop playback"));
        package
    }

    #[test]
    fn test_from_defs_last_definition_wins() {
        let registry = CommandRegistry::from_defs(vec![
            CommandDef::new("play", "first"),
            CommandDef::new("play", "second"),
        ]);

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("play").unwrap().description, "second");
    }

    #[test]
    fn test_from_package_rejects_invalid_bundle() {
        let mut package = sample_package();
        package.commands.push(CommandDef::new("play", "duplicate"));

        let err = CommandRegistry::from_package(package).unwrap_err();
        assert!(matches!(err, RegistryError::Invalid(_)));
    }

    #[test]
    fn test_from_json_round_trip() {
        let json = serde_json::to_string(&sample_package()).unwrap();
        let registry = CommandRegistry::from_json(&json).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("play"));
        assert!(registry.contains("stop"));
        assert!(!registry.contains("pause"));
    }

    #[test]
    fn test_from_bundle_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer(&mut file, &sample_package()).unwrap();
        file.flush().unwrap();

        let registry = CommandRegistry::from_bundle(file.path()).unwrap();
        assert_eq!(registry.len(), 2);
        let play = registry.get("play").unwrap();
        assert_eq!(play.args[0].name, "file");
        assert_eq!(play.flags[0].value_type, ArgumentType::Integer);
    }

    #[test]
    fn test_from_bundle_missing_file_is_io_error() {
        let err = CommandRegistry::from_bundle("/nonexistent/commands.json").unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }

    #[test]
    fn test_from_json_malformed_is_json_error() {
        let err = CommandRegistry::from_json("{not json").unwrap_err();
        assert!(matches!(err, RegistryError::Json(_)));
    }
}

//! Error types for alias registration and queries.

use thiserror::Error;

/// Errors surfaced by the alias registry.
///
/// Lookups and removals of absent names, and additions of names that are
/// already registered, are not errors: they resolve to "no result" or a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AliasError {
	/// Malformed input to an operation (empty name, missing type, conflicting filters).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// A name filter could not be compiled.
	#[error(transparent)]
	InvalidPattern(#[from] PatternError),
}

/// Errors produced while compiling a wildcard pattern.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
	/// A `[` was opened but never closed.
	#[error("unterminated character class in pattern '{pattern}'")]
	UnterminatedClass {
		/// The pattern as supplied.
		pattern: String,
	},
	/// A `[]` class with no members.
	#[error("empty character class in pattern '{pattern}'")]
	EmptyClass {
		/// The pattern as supplied.
		pattern: String,
	},
	/// The translated pattern was rejected by the regex engine (e.g. `[z-a]`).
	#[error("invalid pattern '{pattern}': {reason}")]
	Invalid {
		/// The pattern as supplied.
		pattern: String,
		/// Engine diagnostic.
		reason: String,
	},
}

/// Result type for alias operations.
pub type Result<T> = std::result::Result<T, AliasError>;

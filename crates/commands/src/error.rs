use thiserror::Error;
use tyalias_invocation::ParseError;
use tyalias_registry::AliasError;

/// Errors that can occur during command execution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
	/// Command name was not found in the command table.
	#[error("command not found: {0}")]
	NotFound(String),
	/// An argument was provided but invalid.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	/// Arguments did not match the command's signature.
	#[error("{0}")]
	Usage(String),
	/// Help text requested with `--help`.
	#[error("{0}")]
	Help(String),
	/// The command line could not be split.
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// The registry rejected the operation.
	#[error(transparent)]
	Alias(#[from] AliasError),
}

impl From<clap::Error> for CommandError {
	fn from(e: clap::Error) -> Self {
		use clap::error::ErrorKind;

		let rendered = e.render().to_string();
		match e.kind() {
			ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Self::Help(rendered),
			_ => Self::Usage(rendered.trim_end().to_string()),
		}
	}
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

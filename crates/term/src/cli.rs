use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tyalias")]
#[command(about = "Shell for registering and querying type aliases")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Script with one command line per line (interactive prompt if omitted)
	pub script: Option<PathBuf>,

	/// Command line to run before the script (repeatable)
	#[arg(long = "command", short = 'c', value_name = "LINE")]
	pub commands: Vec<String>,

	/// Configuration file (defaults to $TYALIAS_CONFIG or the platform config directory)
	#[arg(long, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Do not seed the builtin aliases
	#[arg(long)]
	pub no_builtins: bool,

	/// Answer yes to every confirmation prompt
	#[arg(long, short = 'y')]
	pub yes: bool,

	/// Print records as JSON lines
	#[arg(long)]
	pub json: bool,

	/// Verbose logging
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

/// Where command lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
	/// Only the `-c` lines.
	CommandsOnly,
	/// `-c` lines, then the script file.
	Script(PathBuf),
	/// `-c` lines, then an interactive prompt on stdin.
	Interactive,
}

impl Cli {
	/// Resolves the input source.
	pub fn input(&self) -> Input {
		match (&self.script, self.commands.is_empty()) {
			(Some(path), _) if path.as_os_str() == "-" => Input::Interactive,
			(Some(path), _) => Input::Script(path.clone()),
			(None, false) => Input::CommandsOnly,
			(None, true) => Input::Interactive,
		}
	}
}

#[cfg(test)]
mod tests;

//! Canonical invocation types for alias command dispatch.
//!
//! Every entry point (script file, `-c` argument, interactive prompt) splits its
//! input into [`Pipeline`]s of [`Invocation`]s before dispatch.

mod parse;

pub use parse::{ParseError, parse_line};
use serde::{Deserialize, Serialize};

/// One command call: a command name and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Invocation {
	/// Command name (looked up in the command table).
	pub name: String,
	/// Arguments as written, quotes removed.
	pub args: Vec<String>,
}

impl Invocation {
	/// Creates an invocation with arguments.
	pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
		Self { name: name.into(), args }
	}

	/// Creates an invocation with no arguments.
	pub fn bare(name: impl Into<String>) -> Self {
		Self::new(name, Vec::new())
	}

	/// Name followed by arguments, the shape argument parsers expect.
	pub fn argv(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self.name.as_str()).chain(self.args.iter().map(String::as_str))
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		if self.args.is_empty() {
			format!("cmd:{}", self.name)
		} else {
			format!("cmd:{} {}", self.name, self.args.join(" "))
		}
	}
}

/// Invocations connected by `|`; each stage receives the previous stage's output.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pipeline {
	/// Stages in execution order. Never empty when produced by [`parse_line`].
	pub stages: Vec<Invocation>,
}

impl Pipeline {
	/// Creates a pipeline from its stages.
	pub fn new(stages: Vec<Invocation>) -> Self {
		Self { stages }
	}

	/// Short description for tracing/logging.
	pub fn describe(&self) -> String {
		self.stages.iter().map(Invocation::describe).collect::<Vec<_>>().join(" | ")
	}
}

#[cfg(test)]
mod tests;

//! Command table and pipeline execution.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};
use tyalias_invocation::{Pipeline, parse_line};
use tyalias_registry::{AliasRegistry, Confirm, TypeName};

use crate::{Command, CommandContext, CommandError, Record, Result, builtins};

/// Records and notices produced by one executed line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellOutput {
	/// Records emitted by the final stage of each pipeline.
	pub records: Vec<Record>,
	/// Informational lines (e.g. what-if output).
	pub notices: Vec<String>,
}

impl ShellOutput {
	fn extend(&mut self, other: ShellOutput) {
		self.records.extend(other.records);
		self.notices.extend(other.notices);
	}
}

/// A line that stopped at a failing pipeline.
///
/// Pipelines before the failing one have already run and their mutations are
/// committed; their output is kept in `completed`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct LineError {
	/// Output of the pipelines that finished before the failure.
	pub completed: ShellOutput,
	/// Why the line stopped.
	pub error: CommandError,
}

impl From<CommandError> for LineError {
	fn from(error: CommandError) -> Self {
		Self {
			completed: ShellOutput::default(),
			error,
		}
	}
}

/// Executes command lines against a shared registry.
///
/// Thread-safe; several threads may execute lines on one shell concurrently.
pub struct Shell {
	registry: Arc<AliasRegistry<TypeName>>,
	commands: Vec<Box<dyn Command>>,
}

impl Shell {
	/// Creates a shell with the builtin commands.
	pub fn new(registry: Arc<AliasRegistry<TypeName>>) -> Self {
		Self {
			registry,
			commands: builtins::all(),
		}
	}

	/// Adds a command. A command whose name is already taken is ignored.
	pub fn register(&mut self, command: Box<dyn Command>) -> bool {
		if self.find(command.name()).is_some() {
			warn!(command = command.name(), "command already registered");
			return false;
		}
		self.commands.push(command);
		true
	}

	/// The registry commands operate on.
	pub fn registry(&self) -> &Arc<AliasRegistry<TypeName>> {
		&self.registry
	}

	/// Looks up a command by case-insensitive name.
	pub fn find(&self, name: &str) -> Option<&dyn Command> {
		self.commands.iter().find(|c| c.name().eq_ignore_ascii_case(name)).map(|c| c.as_ref())
	}

	/// Every command in registration order.
	pub fn commands(&self) -> impl Iterator<Item = &dyn Command> {
		self.commands.iter().map(|c| c.as_ref())
	}

	/// Parses and executes `line`.
	///
	/// Pipelines run in order; the first failing stage stops the line. A parse
	/// error stops it before anything runs.
	pub fn execute(&self, line: &str, confirm: &mut dyn Confirm<TypeName>) -> std::result::Result<ShellOutput, LineError> {
		let pipelines = parse_line(line).map_err(CommandError::from)?;

		let mut output = ShellOutput::default();
		for pipeline in pipelines {
			match self.run_pipeline(&pipeline, confirm) {
				Ok(part) => output.extend(part),
				Err(error) => {
					return Err(LineError {
						completed: output,
						error,
					});
				}
			}
		}
		Ok(output)
	}

	/// Executes one pipeline, feeding each stage's records to the next.
	pub fn run_pipeline(&self, pipeline: &Pipeline, confirm: &mut dyn Confirm<TypeName>) -> Result<ShellOutput> {
		debug!(pipeline = %pipeline.describe(), "running pipeline");

		let mut ctx = CommandContext::new(&self.registry, confirm);
		let mut records = Vec::new();
		for invocation in &pipeline.stages {
			let command = self
				.find(&invocation.name)
				.ok_or_else(|| CommandError::NotFound(invocation.name.clone()))?;
			records = command.run(&mut ctx, invocation, records)?;
		}

		Ok(ShellOutput {
			records,
			notices: ctx.notices,
		})
	}
}

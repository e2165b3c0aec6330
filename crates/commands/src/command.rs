use tyalias_invocation::Invocation;
use tyalias_registry::{AliasEntry, AliasRegistry, Confirm, TypeName};

use crate::error::Result;

/// Value flowing between pipeline stages: one `(name, type)` pair.
pub type Record = AliasEntry<TypeName>;

/// Per-invocation state handed to a command.
pub struct CommandContext<'a> {
	/// Shared alias registry.
	pub registry: &'a AliasRegistry<TypeName>,
	/// Confirmation collaborator for destructive operations.
	pub confirm: &'a mut dyn Confirm<TypeName>,
	/// Informational lines for the host to display (e.g. what-if output).
	pub notices: Vec<String>,
}

impl<'a> CommandContext<'a> {
	/// Creates a context.
	pub fn new(registry: &'a AliasRegistry<TypeName>, confirm: &'a mut dyn Confirm<TypeName>) -> Self {
		Self {
			registry,
			confirm,
			notices: Vec::new(),
		}
	}
}

/// A named command runnable as a pipeline stage.
pub trait Command: Send + Sync {
	/// Name used to invoke the command. Matched case-insensitively.
	fn name(&self) -> &str;

	/// One-line description for listings.
	fn description(&self) -> &str;

	/// Runs the command with the previous stage's records as `input`.
	fn run(&self, ctx: &mut CommandContext<'_>, invocation: &Invocation, input: Vec<Record>) -> Result<Vec<Record>>;
}

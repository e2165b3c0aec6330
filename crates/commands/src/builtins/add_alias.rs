use clap::Parser;
use tyalias_invocation::Invocation;
use tyalias_registry::TypeName;

use crate::{Command, CommandContext, Record, Result};

/// Register a new alias. Existing names are left untouched.
#[derive(Parser, Debug)]
#[command(name = "add-alias")]
struct Args {
	/// Alias name
	#[arg(value_name = "NAME")]
	name: Option<String>,

	/// Fully-qualified target type
	#[arg(value_name = "TYPE")]
	ty: Option<String>,

	/// Emit the alias when it was added
	#[arg(long, visible_alias = "passthru")]
	pass_thru: bool,
}

/// `add-alias NAME TYPE [--pass-thru]`
///
/// With no positional arguments, every piped record is added by its name and type.
#[derive(Clone, Copy, Debug)]
pub struct AddAlias;

impl Command for AddAlias {
	fn name(&self) -> &str {
		"add-alias"
	}

	fn description(&self) -> &str {
		"Adds an alias for a type unless the name is already registered."
	}

	fn run(&self, ctx: &mut CommandContext<'_>, invocation: &Invocation, input: Vec<Record>) -> Result<Vec<Record>> {
		let args = Args::try_parse_from(invocation.argv())?;

		if args.name.is_none() && !input.is_empty() {
			let mut emitted = Vec::new();
			for record in input {
				emitted.extend(ctx.registry.add(&record.name, Some(record.ty), args.pass_thru)?);
			}
			return Ok(emitted);
		}

		let name = args.name.unwrap_or_default();
		let ty = args.ty.as_deref().map(TypeName::parse).transpose()?;
		Ok(ctx.registry.add(&name, ty, args.pass_thru)?.into_iter().collect())
	}
}

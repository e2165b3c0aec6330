use clap::Parser;
use tyalias_invocation::Invocation;
use tyalias_registry::{AliasQuery, TypeName};

use crate::{Command, CommandContext, Record, Result};

/// List aliases by name, wildcard pattern, or target type.
#[derive(Parser, Debug)]
#[command(name = "get-alias")]
struct Args {
	/// Alias names or wildcard patterns (`*`, `?`, `[a-z]`)
	#[arg(value_name = "NAME", conflicts_with = "types")]
	names: Vec<String>,

	/// Target types to reverse-lookup
	#[arg(long = "type", short = 't', value_name = "TYPE", num_args = 1..)]
	types: Vec<TypeName>,
}

/// `get-alias [NAME...] [--type TYPE...]`
#[derive(Clone, Copy, Debug)]
pub struct GetAlias;

impl Command for GetAlias {
	fn name(&self) -> &str {
		"get-alias"
	}

	fn description(&self) -> &str {
		"Lists aliases, optionally filtered by name pattern or target type."
	}

	fn run(&self, ctx: &mut CommandContext<'_>, invocation: &Invocation, _input: Vec<Record>) -> Result<Vec<Record>> {
		let args = Args::try_parse_from(invocation.argv())?;

		let names = (!args.names.is_empty()).then_some(args.names);
		let types = (!args.types.is_empty()).then_some(args.types);
		let query = AliasQuery::from_filters(names, types)?;

		Ok(ctx.registry.query(query)?.collect())
	}
}

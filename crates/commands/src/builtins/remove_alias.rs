use clap::Parser;
use tracing::info;
use tyalias_invocation::Invocation;
use tyalias_registry::{AliasQuery, AlwaysConfirm, WhatIf};

use crate::{Command, CommandContext, Record, Result};

/// Remove aliases, asking for confirmation before each one.
#[derive(Parser, Debug)]
#[command(name = "remove-alias")]
struct Args {
	/// Alias names or wildcard patterns; piped aliases are used when omitted
	#[arg(value_name = "NAME")]
	names: Vec<String>,

	/// Remove without asking
	#[arg(long, short = 'y', conflicts_with = "what_if")]
	yes: bool,

	/// Show what would be removed without removing anything
	#[arg(long, visible_alias = "whatif")]
	what_if: bool,
}

/// `remove-alias [NAME...] [--yes | --what-if]`
#[derive(Clone, Copy, Debug)]
pub struct RemoveAlias;

impl Command for RemoveAlias {
	fn name(&self) -> &str {
		"remove-alias"
	}

	fn description(&self) -> &str {
		"Removes aliases after per-entry confirmation."
	}

	fn run(&self, ctx: &mut CommandContext<'_>, invocation: &Invocation, input: Vec<Record>) -> Result<Vec<Record>> {
		let args = Args::try_parse_from(invocation.argv())?;

		let mut targets = input;
		if !args.names.is_empty() {
			targets.extend(ctx.registry.query(AliasQuery::Names(args.names))?);
		}

		let report = if args.what_if {
			let mut what_if = WhatIf::default();
			let report = ctx.registry.remove(targets, &mut what_if);
			ctx.notices.extend(what_if.messages.into_iter().map(|m| format!("What if: {m}")));
			report
		} else if args.yes {
			ctx.registry.remove(targets, &mut AlwaysConfirm)
		} else {
			ctx.registry.remove(targets, &mut *ctx.confirm)
		};

		if report.aborted {
			info!(confirmed = report.confirmed, unprocessed = report.unprocessed, "alias removal aborted");
		}
		Ok(Vec::new())
	}
}

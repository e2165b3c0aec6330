//! Terminal host for the tyalias command shell.

mod cli;
mod logging;
mod prompt;
mod session;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tyalias_commands::Shell;
use tyalias_config::{Config, ConfirmMode};
use tyalias_registry::AliasRegistry;

use crate::cli::{Cli, Input};
use crate::prompt::Terminal;
use crate::session::Session;

fn main() -> Result<ExitCode> {
	let cli = Cli::parse();
	logging::setup_tracing(cli.verbose);

	let config = load_config(&cli)?;
	let registry = Arc::new(AliasRegistry::with_seed(config.seed()));
	info!(aliases = registry.len(), builtins = config.builtins, "alias registry ready");

	let mode = if cli.yes { ConfirmMode::Yes } else { config.confirm.default };
	let terminal = Terminal::new(io::stdin().lock(), io::stderr(), mode);
	let mut session = Session::new(Shell::new(registry), terminal, io::stdout().lock(), cli.json);

	for (index, line) in cli.commands.iter().enumerate() {
		session.run_line(line, &format!("-c #{}", index + 1))?;
	}

	let input = cli.input();
	match &input {
		Input::CommandsOnly => {}
		Input::Script(path) => {
			let script = std::fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
			session.run_script(&path.display().to_string(), &script)?;
		}
		Input::Interactive => session.interactive()?,
	}

	if session.failures() > 0 && input != Input::Interactive {
		return Ok(ExitCode::FAILURE);
	}
	Ok(ExitCode::SUCCESS)
}

fn load_config(cli: &Cli) -> Result<Config> {
	let mut config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => match Config::load_default()? {
			Some((path, config)) => {
				info!(path = %path.display(), "loaded config");
				config
			}
			None => Config::default(),
		},
	};
	if cli.no_builtins {
		config.builtins = false;
	}
	Ok(config)
}

use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn no_arguments_is_interactive() {
	let cli = Cli::try_parse_from(["tyalias"]).unwrap();
	assert_eq!(cli.input(), Input::Interactive);
	assert!(!cli.yes && !cli.json && !cli.no_builtins);
}

#[test]
fn commands_without_script_run_alone() {
	let cli = Cli::try_parse_from(["tyalias", "-c", "get-alias int", "-c", "get-alias long"]).unwrap();
	assert_eq!(cli.commands, vec!["get-alias int", "get-alias long"]);
	assert_eq!(cli.input(), Input::CommandsOnly);
}

#[test]
fn script_path_is_positional() {
	let cli = Cli::try_parse_from(["tyalias", "--yes", "aliases.tya"]).unwrap();
	assert_eq!(cli.input(), Input::Script(PathBuf::from("aliases.tya")));
	assert!(cli.yes);
}

#[test]
fn dash_reads_stdin() {
	let cli = Cli::try_parse_from(["tyalias", "-c", "get-alias", "-"]).unwrap();
	assert_eq!(cli.input(), Input::Interactive);
}

#[test]
fn config_and_flags() {
	let cli = Cli::try_parse_from(["tyalias", "--config", "/tmp/t.toml", "--no-builtins", "--json", "-v"]).unwrap();
	assert_eq!(cli.config, Some(PathBuf::from("/tmp/t.toml")));
	assert!(cli.no_builtins && cli.json && cli.verbose);
}

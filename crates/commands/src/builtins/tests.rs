use pretty_assertions::assert_eq;
use rstest::rstest;
use tyalias_invocation::Invocation;
use tyalias_registry::{AliasEntry, AliasError, AliasRegistry, AlwaysConfirm, Confirmation, TypeName};

use super::*;
use crate::{CommandContext, CommandError, Record};

fn ty(name: &str) -> TypeName {
	TypeName::parse(name).unwrap()
}

fn record(name: &str, target: &str) -> Record {
	AliasEntry::new(name, ty(target))
}

fn invocation(line: &str) -> Invocation {
	let mut words = line.split_whitespace().map(str::to_string);
	let name = words.next().unwrap();
	Invocation::new(name, words.collect())
}

fn sample() -> AliasRegistry<TypeName> {
	AliasRegistry::with_seed([
		record("Int32Alias", "T1"),
		record("Int64Alias", "T2"),
		record("String", "T3"),
		record("Text", "T3"),
	])
}

fn run(registry: &AliasRegistry<TypeName>, command: &dyn Command, line: &str, input: Vec<Record>) -> crate::Result<Vec<Record>> {
	let mut confirm = AlwaysConfirm;
	let mut ctx = CommandContext::new(registry, &mut confirm);
	command.run(&mut ctx, &invocation(line), input)
}

fn names(records: Vec<Record>) -> Vec<String> {
	records.into_iter().map(|r| r.name).collect()
}

#[rstest]
#[case("get-alias", &["Int32Alias", "Int64Alias", "String", "Text"])]
#[case("get-alias Int*", &["Int32Alias", "Int64Alias"])]
#[case("get-alias string", &["String"])]
#[case("get-alias missing", &[])]
#[case("get-alias --type T3", &["String", "Text"])]
#[case("get-alias -t T1 T2", &["Int32Alias", "Int64Alias"])]
fn get_alias_modes(#[case] line: &str, #[case] expected: &[&str]) {
	let registry = sample();
	assert_eq!(names(run(&registry, &GetAlias, line, Vec::new()).unwrap()), expected);
}

#[test]
fn get_alias_rejects_mixed_filters() {
	let registry = sample();
	let err = run(&registry, &GetAlias, "get-alias Int* --type T1", Vec::new()).unwrap_err();
	assert!(matches!(err, CommandError::Usage(_)), "{err}");
}

#[test]
fn get_alias_reports_bad_pattern() {
	let registry = sample();
	let err = run(&registry, &GetAlias, "get-alias Int*[", Vec::new()).unwrap_err();
	assert!(matches!(err, CommandError::Alias(AliasError::InvalidPattern(_))), "{err}");
}

#[test]
fn get_alias_help_is_reported_as_help() {
	let registry = sample();
	let err = run(&registry, &GetAlias, "get-alias --help", Vec::new()).unwrap_err();
	match err {
		CommandError::Help(text) => assert!(text.contains("get-alias")),
		other => panic!("expected help, got {other:?}"),
	}
}

#[test]
fn add_alias_emits_only_with_pass_thru() {
	let registry = sample();
	assert!(run(&registry, &AddAlias, "add-alias Foo TypeA", Vec::new()).unwrap().is_empty());
	assert_eq!(run(&registry, &AddAlias, "add-alias Bar TypeB --passthru", Vec::new()).unwrap(), vec![
		record("Bar", "TypeB")
	]);
	assert_eq!(registry.lookup("foo"), Some(ty("TypeA")));
}

#[test]
fn add_alias_existing_name_is_silent() {
	let registry = sample();
	let out = run(&registry, &AddAlias, "add-alias string Other --pass-thru", Vec::new()).unwrap();
	assert!(out.is_empty());
	assert_eq!(registry.lookup("String"), Some(ty("T3")));
}

#[test]
fn add_alias_requires_name_and_type() {
	let registry = sample();
	let missing_type = run(&registry, &AddAlias, "add-alias Foo", Vec::new()).unwrap_err();
	assert!(matches!(missing_type, CommandError::Alias(AliasError::InvalidArgument(_))));

	let missing_name = run(&registry, &AddAlias, "add-alias", Vec::new()).unwrap_err();
	assert!(matches!(missing_name, CommandError::Alias(AliasError::InvalidArgument(_))));
}

#[test]
fn add_alias_takes_piped_records() {
	let registry = AliasRegistry::new();
	let out = run(&registry, &AddAlias, "add-alias --passthru", vec![record("a", "A"), record("b", "B")]).unwrap();
	assert_eq!(names(out), vec!["a", "b"]);
	assert_eq!(registry.len(), 2);
}

#[test]
fn remove_alias_uses_piped_records() {
	let registry = sample();
	let out = run(&registry, &RemoveAlias, "remove-alias", vec![record("Text", "T3")]).unwrap();
	assert!(out.is_empty());
	assert!(!registry.contains("Text"));
	assert_eq!(registry.len(), 3);
}

#[test]
fn remove_alias_resolves_names() {
	let registry = sample();
	run(&registry, &RemoveAlias, "remove-alias Int* missing", Vec::new()).unwrap();
	assert_eq!(names(registry.snapshot().iter().cloned().collect()), vec!["String", "Text"]);
}

#[test]
fn remove_alias_takes_bracketed_names_literally() {
	let registry = sample();
	run(&registry, &AddAlias, "add-alias List[int] T7", Vec::new()).unwrap();
	run(&registry, &RemoveAlias, "remove-alias list[int]", Vec::new()).unwrap();
	assert!(!registry.contains("List[int]"));
	assert_eq!(registry.len(), 4);
}

#[test]
fn remove_alias_consults_context_confirmer() {
	let registry = sample();
	let mut decline = |_: &Record| Confirmation::No;
	let mut ctx = CommandContext::new(&registry, &mut decline);
	RemoveAlias.run(&mut ctx, &invocation("remove-alias String"), Vec::new()).unwrap();
	assert!(registry.contains("String"));

	let mut ctx = CommandContext::new(&registry, &mut decline);
	RemoveAlias.run(&mut ctx, &invocation("remove-alias String --yes"), Vec::new()).unwrap();
	assert!(!registry.contains("String"));
}

#[test]
fn remove_alias_what_if_only_reports() {
	let registry = sample();
	let mut confirm = AlwaysConfirm;
	let mut ctx = CommandContext::new(&registry, &mut confirm);
	RemoveAlias.run(&mut ctx, &invocation("remove-alias Int32Alias --whatif"), Vec::new()).unwrap();

	assert_eq!(ctx.notices, vec!["What if: Remove alias: Int32Alias => T1"]);
	assert!(registry.contains("Int32Alias"));
}

#[test]
fn builtin_table_lists_every_command() {
	let names: Vec<_> = all().iter().map(|c| c.name().to_string()).collect();
	assert_eq!(names, vec!["get-alias", "add-alias", "remove-alias"]);
}

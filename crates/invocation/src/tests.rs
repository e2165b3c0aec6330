use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn inv(name: &str, args: &[&str]) -> Invocation {
	Invocation::new(name, args.iter().map(|a| a.to_string()).collect())
}

#[test]
fn single_command() {
	let parsed = parse_line("get-alias Int*").unwrap();
	assert_eq!(parsed, vec![Pipeline::new(vec![inv("get-alias", &["Int*"])])]);
}

#[test]
fn pipeline_stages() {
	let parsed = parse_line("get-alias Foo | remove-alias --confirm").unwrap();
	assert_eq!(parsed, vec![Pipeline::new(vec![
		inv("get-alias", &["Foo"]),
		inv("remove-alias", &["--confirm"]),
	])]);
}

#[test]
fn separators_split_pipelines() {
	let parsed = parse_line("add-alias Foo System.Int32;get-alias Foo ; ; get-alias").unwrap();
	assert_eq!(parsed, vec![
		Pipeline::new(vec![inv("add-alias", &["Foo", "System.Int32"])]),
		Pipeline::new(vec![inv("get-alias", &["Foo"])]),
		Pipeline::new(vec![inv("get-alias", &[])]),
	]);
}

#[test]
fn quotes_group_and_are_removed() {
	let parsed = parse_line(r#"add-alias 'my alias' "System.Collections.Generic.List`1[System.String]""#).unwrap();
	assert_eq!(parsed[0].stages[0].args, vec![
		"my alias".to_string(),
		"System.Collections.Generic.List`1[System.String]".to_string(),
	]);
}

#[test]
fn empty_quotes_produce_empty_argument() {
	let parsed = parse_line("add-alias '' System.Int32").unwrap();
	assert_eq!(parsed[0].stages[0].args, vec!["".to_string(), "System.Int32".to_string()]);
}

#[test]
fn quoted_metacharacters_are_literal() {
	let parsed = parse_line("get-alias 'a|b;c#d'").unwrap();
	assert_eq!(parsed[0].stages[0].args, vec!["a|b;c#d".to_string()]);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("# just a comment")]
#[case(" ;; ")]
fn blank_lines_yield_nothing(#[case] line: &str) {
	assert!(parse_line(line).unwrap().is_empty());
}

#[test]
fn trailing_comment_is_dropped() {
	let parsed = parse_line("get-alias int # list ints").unwrap();
	assert_eq!(parsed, vec![Pipeline::new(vec![inv("get-alias", &["int"])])]);
}

#[test]
fn hash_inside_word_is_kept() {
	let parsed = parse_line("add-alias c# Lang.CSharp").unwrap();
	assert_eq!(parsed[0].stages[0].args[0], "c#");
}

#[rstest]
#[case("| get-alias", 1)]
#[case("get-alias |", 11)]
#[case("get-alias | | remove-alias", 13)]
#[case("get-alias | ; get-alias", 11)]
fn empty_stage_is_an_error(#[case] line: &str, #[case] column: usize) {
	assert_eq!(parse_line(line).unwrap_err(), ParseError::EmptyStage { column });
}

#[test]
fn unterminated_quote_is_an_error() {
	assert_eq!(parse_line("get-alias 'int").unwrap_err(), ParseError::UnterminatedQuote {
		quote: '\'',
		column: 11
	});
}

#[test]
fn describe_and_argv() {
	let invocation = inv("add-alias", &["Foo", "System.Int32"]);
	assert_eq!(invocation.describe(), "cmd:add-alias Foo System.Int32");
	assert_eq!(invocation.argv().collect::<Vec<_>>(), vec!["add-alias", "Foo", "System.Int32"]);
	assert_eq!(Invocation::bare("get-alias").describe(), "cmd:get-alias");

	let pipeline = Pipeline::new(vec![inv("get-alias", &["Foo"]), Invocation::bare("remove-alias")]);
	assert_eq!(pipeline.describe(), "cmd:get-alias Foo | cmd:remove-alias");
}

#[test]
fn invocation_serializes_as_record() {
	let json = serde_json::to_value(inv("get-alias", &["int"])).unwrap();
	assert_eq!(json, serde_json::json!({ "name": "get-alias", "args": ["int"] }));
}

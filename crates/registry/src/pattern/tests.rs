use rstest::rstest;

use super::*;

#[rstest]
#[case("Int*", true)]
#[case("Int?2", true)]
#[case("[ab]c", false)]
#[case("List[int]", false)]
#[case("a`b", false)]
#[case("Int32", false)]
#[case("", false)]
#[case("Int`*", true)]
#[case("[ab]*", true)]
fn detects_wildcards(#[case] name: &str, #[case] expected: bool) {
	assert_eq!(has_wildcards(name), expected);
}

#[rstest]
#[case("Int*", "Int32Alias", true)]
#[case("Int*", "int64alias", true)]
#[case("Int*", "String", false)]
#[case("*alias", "INT32ALIAS", true)]
#[case("Int??Alias", "Int32Alias", true)]
#[case("Int??Alias", "Int128Alias", false)]
#[case("?", "x", true)]
#[case("?", "", false)]
#[case("*", "", true)]
#[case("[ab]*", "Bool", true)]
#[case("[ab]*", "char", false)]
#[case("[a-c]har", "Char", true)]
#[case("[a-c]har", "dhar", false)]
#[case("[x-]y", "-y", true)]
#[case("a.b*", "aXb", false)]
#[case("a.b*", "a.bc", true)]
#[case("100`%*", "100%", true)]
#[case("what`?*", "what?now", true)]
#[case("what`?*", "whatXnow", false)]
fn matches_case_insensitively(#[case] pattern: &str, #[case] candidate: &str, #[case] expected: bool) {
	let compiled = WildcardPattern::new(pattern).unwrap();
	assert_eq!(compiled.is_match(candidate), expected, "{pattern} vs {candidate}");
}

#[test]
fn unterminated_class_is_rejected() {
	assert_eq!(
		WildcardPattern::new("Int[32").unwrap_err(),
		PatternError::UnterminatedClass {
			pattern: "Int[32".into()
		}
	);
}

#[test]
fn empty_class_is_rejected() {
	assert!(matches!(WildcardPattern::new("a[]"), Err(PatternError::EmptyClass { .. })));
}

#[test]
fn reversed_range_is_rejected() {
	assert!(matches!(WildcardPattern::new("[z-a]"), Err(PatternError::Invalid { .. })));
}

#[test]
fn filter_classifies_once() {
	assert!(matches!(NameFilter::parse("Int*").unwrap(), NameFilter::Pattern(_)));
	assert_eq!(NameFilter::parse("Int32").unwrap(), NameFilter::Literal("Int32".into()));
	assert!(matches!(NameFilter::parse("Star`*").unwrap(), NameFilter::Pattern(_)));
}

#[rstest]
#[case("List[int]")]
#[case("a`b")]
#[case("a[b")]
#[case("x[]")]
fn names_without_star_or_question_mark_stay_literal(#[case] name: &str) {
	let filter = NameFilter::parse(name).unwrap();
	assert_eq!(filter, NameFilter::Literal(name.into()));
	assert!(filter.matches(&name.to_uppercase()));
}

#[test]
fn escaped_star_matches_only_a_literal_star() {
	let filter = NameFilter::parse("Star`*").unwrap();
	assert!(filter.matches("star*"));
	assert!(!filter.matches("starlight"));
}

#[test]
fn unterminated_class_in_a_pattern_is_rejected() {
	assert!(matches!(
		NameFilter::parse("Int*[32"),
		Err(PatternError::UnterminatedClass { .. })
	));
}

#[test]
fn literal_filter_ignores_case() {
	let filter = NameFilter::parse("HashTable").unwrap();
	assert!(filter.matches("hashtable"));
	assert!(!filter.matches("hashtables"));
}

#[test]
fn matching_is_pure() {
	let pattern = WildcardPattern::new("Int*").unwrap();
	for _ in 0..3 {
		assert!(pattern.is_match("Int32"));
		assert!(!pattern.is_match("UInt32"));
	}
	assert_eq!(pattern.as_str(), "Int*");
}

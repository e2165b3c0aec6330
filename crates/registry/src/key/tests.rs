use super::*;

#[test]
fn keys_fold_case() {
	assert_eq!(AliasKey::new("Int32"), AliasKey::new("INT32"));
	assert_eq!(AliasKey::new("Int32").as_str(), "int32");
}

#[test]
fn non_ascii_names_fold() {
	assert_eq!(AliasKey::new("Ärger"), AliasKey::new("äRGER"));
	assert!(eq_ignore_case("Ärger", "äRGER"));
}

#[test]
fn distinct_names_stay_distinct() {
	assert_ne!(AliasKey::new("int"), AliasKey::new("int32"));
	assert!(!eq_ignore_case("int", "int32"));
}

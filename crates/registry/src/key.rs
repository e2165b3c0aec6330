use std::fmt;

/// Case-folded identity of an alias name.
///
/// Two names that differ only by case produce the same key. The registered
/// spelling lives on [`crate::AliasEntry`]; the key is only used for identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AliasKey(Box<str>);

impl AliasKey {
	/// Folds `name` into its lookup key.
	pub fn new(name: &str) -> Self {
		Self(fold(name).into_boxed_str())
	}

	/// Returns the folded text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for AliasKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for AliasKey {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

/// Case folding shared by keys and literal name filters.
pub(crate) fn fold(name: &str) -> String {
	name.to_lowercase()
}

/// Compares two names the way the registry does.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
	a.eq_ignore_ascii_case(b) || fold(a) == fold(b)
}

#[cfg(test)]
mod tests;

//! Alias entries and the type identifiers they point at.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::AliasError;

/// Marker trait for type identifiers that can be stored in an [`crate::AliasRegistry`].
///
/// The registry only clones, compares, and prints targets. Hosts with their own
/// type descriptors implement nothing extra; the blanket impl covers them.
pub trait AliasTarget: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {}
impl<T> AliasTarget for T where T: Clone + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static {}

/// One `(name, type)` binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliasEntry<T> {
	/// Name as first registered.
	pub name: String,
	/// Target type identifier.
	#[serde(rename = "type")]
	pub ty: T,
}

impl<T> AliasEntry<T> {
	/// Creates an entry.
	pub fn new(name: impl Into<String>, ty: T) -> Self {
		Self { name: name.into(), ty }
	}

	/// Returns the registered spelling of the name.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Returns the target type.
	pub fn ty(&self) -> &T {
		&self.ty
	}
}

impl<T: fmt::Display> fmt::Display for AliasEntry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} => {}", self.name, self.ty)
	}
}

/// Fully-qualified type identifier used by the shipped host.
///
/// The text is opaque: it is trimmed and must be non-empty, nothing else is
/// checked. Resolving it against a real type system is the host's concern.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(Arc<str>);

impl TypeName {
	/// Parses a type identifier.
	pub fn parse(text: &str) -> Result<Self, AliasError> {
		let text = text.trim();
		if text.is_empty() {
			return Err(AliasError::InvalidArgument("type name must not be empty".into()));
		}
		Ok(Self(Arc::from(text)))
	}

	/// Returns the identifier text.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeName({})", self.0)
	}
}

impl fmt::Display for TypeName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for TypeName {
	type Err = AliasError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<String> for TypeName {
	type Error = AliasError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<TypeName> for String {
	fn from(value: TypeName) -> Self {
		value.0.to_string()
	}
}

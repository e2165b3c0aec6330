//! Wildcard name filters.
//!
//! A name is a pattern if and only if it contains `*` or `?`; any other name is
//! a literal and is matched exactly, brackets and backquotes included.
//!
//! Within a pattern, `*` matches any run of characters, `?` exactly one, and
//! `[abc]` / `[a-z]` one character from the class. A backquote escapes the
//! character that follows it. Matching is case-insensitive.

use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;
use crate::key::eq_ignore_case;

/// Escape character for wildcard metacharacters inside a pattern.
pub const ESCAPE: char = '`';

/// Returns true if `name` is a wildcard pattern.
pub fn has_wildcards(name: &str) -> bool {
	name.contains(['*', '?'])
}

/// Compiled, case-insensitive wildcard matcher.
#[derive(Clone)]
pub struct WildcardPattern {
	source: String,
	regex: Regex,
}

impl fmt::Debug for WildcardPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("WildcardPattern").field(&self.source).finish()
	}
}

impl PartialEq for WildcardPattern {
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source
	}
}

impl WildcardPattern {
	/// Compiles `pattern`.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		let mut re = String::with_capacity(pattern.len() + 8);
		re.push('^');

		let mut chars = pattern.chars().peekable();
		while let Some(c) = chars.next() {
			match c {
				ESCAPE => push_literal(&mut re, chars.next().unwrap_or(ESCAPE)),
				'*' => re.push_str(".*"),
				'?' => re.push('.'),
				'[' => push_class(&mut re, &mut chars, pattern)?,
				other => push_literal(&mut re, other),
			}
		}
		re.push('$');

		let regex = RegexBuilder::new(&re)
			.case_insensitive(true)
			.dot_matches_new_line(true)
			.build()
			.map_err(|e| PatternError::Invalid {
				pattern: pattern.to_string(),
				reason: e.to_string(),
			})?;

		Ok(Self {
			source: pattern.to_string(),
			regex,
		})
	}

	/// Returns true if `candidate` matches the whole pattern.
	pub fn is_match(&self, candidate: &str) -> bool {
		self.regex.is_match(candidate)
	}

	/// The pattern as supplied.
	pub fn as_str(&self) -> &str {
		&self.source
	}
}

fn push_literal(re: &mut String, c: char) {
	let mut buf = [0u8; 4];
	re.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Translates a bracket class; the opening `[` is already consumed.
fn push_class(re: &mut String, chars: &mut Peekable<Chars<'_>>, pattern: &str) -> Result<(), PatternError> {
	let mut members = String::new();
	loop {
		let Some(c) = chars.next() else {
			return Err(PatternError::UnterminatedClass {
				pattern: pattern.to_string(),
			});
		};
		match c {
			']' => break,
			ESCAPE => {
				let Some(escaped) = chars.next() else {
					return Err(PatternError::UnterminatedClass {
						pattern: pattern.to_string(),
					});
				};
				push_literal(&mut members, escaped);
			}
			'-' if !members.is_empty() && chars.peek().is_some_and(|n| *n != ']') => members.push('-'),
			other => push_literal(&mut members, other),
		}
	}

	if members.is_empty() {
		return Err(PatternError::EmptyClass {
			pattern: pattern.to_string(),
		});
	}
	re.push('[');
	re.push_str(&members);
	re.push(']');
	Ok(())
}

/// One requested name, classified once as a literal or a compiled pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum NameFilter {
	/// Exact, case-insensitive name.
	Literal(String),
	/// Wildcard pattern.
	Pattern(WildcardPattern),
}

impl NameFilter {
	/// Classifies and, for patterns, compiles `name`.
	pub fn parse(name: &str) -> Result<Self, PatternError> {
		if has_wildcards(name) {
			WildcardPattern::new(name).map(Self::Pattern)
		} else {
			Ok(Self::Literal(name.to_string()))
		}
	}

	/// Returns true if `candidate` satisfies the filter.
	pub fn matches(&self, candidate: &str) -> bool {
		match self {
			Self::Literal(name) => eq_ignore_case(name, candidate),
			Self::Pattern(pattern) => pattern.is_match(candidate),
		}
	}
}

#[cfg(test)]
mod tests;

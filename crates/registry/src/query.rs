//! Enumeration of registry contents.
//!
//! Three modes, picked by which filters the caller supplies:
//!
//! - no filters: every entry of one snapshot taken up front
//! - names: each filter evaluated against that same kind of snapshot
//! - types: each requested type scanned against the live table
//!
//! Results are not deduplicated; repeating a request repeats its output.

use std::vec;

use tracing::trace;

use crate::entry::{AliasEntry, AliasTarget};
use crate::error::{AliasError, Result};
use crate::pattern::NameFilter;
use crate::table::{AliasRegistry, AliasSnapshot};

/// What to enumerate.
#[derive(Debug, Clone, PartialEq)]
pub enum AliasQuery<T> {
	/// Every entry.
	All,
	/// Entries matching any of the given names or wildcard patterns.
	Names(Vec<String>),
	/// Entries bound to any of the given types.
	Types(Vec<T>),
}

impl<T> AliasQuery<T> {
	/// Builds a query from the optional filter groups of a command invocation.
	///
	/// The groups are mutually exclusive; omitting both selects everything.
	pub fn from_filters(names: Option<Vec<String>>, types: Option<Vec<T>>) -> Result<Self> {
		match (names, types) {
			(None, None) => Ok(Self::All),
			(Some(names), None) => Ok(Self::Names(names)),
			(None, Some(types)) => Ok(Self::Types(types)),
			(Some(_), Some(_)) => Err(AliasError::InvalidArgument(
				"name and type filters cannot be combined".into(),
			)),
		}
	}
}

impl<T: AliasTarget> AliasRegistry<T> {
	/// Runs `query` and returns a lazy result stream.
	///
	/// Name filters are compiled before any output is produced, so a malformed
	/// pattern fails the whole call.
	pub fn query(&self, query: AliasQuery<T>) -> Result<QueryResults<'_, T>> {
		let state = match query {
			AliasQuery::All => State::Snapshot {
				snap: self.snapshot(),
				selectors: vec![Selector::Everything].into_iter(),
				active: None,
			},
			AliasQuery::Names(names) => {
				let selectors = names
					.iter()
					.map(|name| NameFilter::parse(name).map(Selector::Filter))
					.collect::<std::result::Result<Vec<_>, _>>()?;
				State::Snapshot {
					snap: self.snapshot(),
					selectors: selectors.into_iter(),
					active: None,
				}
			}
			AliasQuery::Types(types) => State::Live {
				registry: self,
				types: types.into_iter(),
				pending: Vec::new().into_iter(),
			},
		};
		Ok(QueryResults { state })
	}
}

enum Selector {
	Everything,
	Filter(NameFilter),
}

/// Scan position within the snapshot for the selector being evaluated.
struct Active {
	selector: Selector,
	next_index: usize,
}

enum State<'a, T: AliasTarget> {
	Snapshot {
		snap: AliasSnapshot<T>,
		selectors: vec::IntoIter<Selector>,
		active: Option<Active>,
	},
	Live {
		registry: &'a AliasRegistry<T>,
		types: vec::IntoIter<T>,
		pending: vec::IntoIter<AliasEntry<T>>,
	},
}

/// Lazy stream of query results returned by [`AliasRegistry::query`].
///
/// Name and no-filter queries hold the snapshot captured when the stream was
/// created; mutations made while consuming it are not observed.
pub struct QueryResults<'a, T: AliasTarget> {
	state: State<'a, T>,
}

impl<T: AliasTarget> Iterator for QueryResults<'_, T> {
	type Item = AliasEntry<T>;

	fn next(&mut self) -> Option<Self::Item> {
		match &mut self.state {
			State::Snapshot { snap, selectors, active } => loop {
				if let Some(current) = active {
					if let Some(hit) = advance(snap, current) {
						return Some(hit);
					}
					*active = None;
				}
				*active = Some(Active {
					selector: selectors.next()?,
					next_index: 0,
				});
			},
			State::Live {
				registry,
				types,
				pending,
			} => loop {
				if let Some(hit) = pending.next() {
					return Some(hit);
				}
				let ty = types.next()?;
				let hits = registry.entries_of_type(&ty);
				trace!(ty = %ty, hits = hits.len(), "reverse alias lookup");
				*pending = hits.into_iter();
			},
		}
	}
}

/// Produces the next hit for `current`, or `None` once it is exhausted.
fn advance<T: Clone>(snap: &AliasSnapshot<T>, current: &mut Active) -> Option<AliasEntry<T>> {
	match &current.selector {
		Selector::Filter(NameFilter::Literal(name)) => {
			if current.next_index > 0 {
				return None;
			}
			current.next_index = 1;
			snap.get(name).cloned()
		}
		Selector::Everything | Selector::Filter(NameFilter::Pattern(_)) => {
			while let Some(entry) = snap.get_index(current.next_index) {
				current.next_index += 1;
				let accepted = match &current.selector {
					Selector::Filter(filter) => filter.matches(&entry.name),
					Selector::Everything => true,
				};
				if accepted {
					return Some(entry.clone());
				}
			}
			None
		}
	}
}

//! Shared alias table with reader-writer locking.
//!
//! # Invariants
//!
//! - At most one entry per case-folded name.
//! - Insertion never replaces an existing entry.
//! - Snapshot capture holds the read lock, so it never observes a half-applied mutation.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use tracing::{debug, trace};

use crate::entry::{AliasEntry, AliasTarget};
use crate::key::AliasKey;

type Entries<T> = IndexMap<AliasKey, AliasEntry<T>>;

struct Table<T> {
	entries: Entries<T>,
	/// Bumped on every successful insert or delete.
	generation: u64,
}

/// Process-wide alias registry.
///
/// Thread-safe; share it across command invocations via `Arc<AliasRegistry<T>>`.
pub struct AliasRegistry<T: AliasTarget> {
	table: RwLock<Table<T>>,
	/// Last captured snapshot, reused until the generation moves.
	cached: Mutex<Option<AliasSnapshot<T>>>,
}

impl<T: AliasTarget> Default for AliasRegistry<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T: AliasTarget> fmt::Debug for AliasRegistry<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let table = self.table.read();
		f.debug_struct("AliasRegistry")
			.field("len", &table.entries.len())
			.field("generation", &table.generation)
			.finish()
	}
}

impl<T: AliasTarget> AliasRegistry<T> {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self {
			table: RwLock::new(Table {
				entries: IndexMap::new(),
				generation: 0,
			}),
			cached: Mutex::new(None),
		}
	}

	/// Creates a registry pre-populated with `seed`.
	///
	/// Seeding follows insert-if-absent: the first binding for a name wins.
	pub fn with_seed<I>(seed: I) -> Self
	where
		I: IntoIterator<Item = AliasEntry<T>>,
	{
		let registry = Self::new();
		for entry in seed {
			if !registry.try_insert(&entry.name, entry.ty.clone()) {
				debug!(alias = %entry.name, "duplicate seed alias ignored");
			}
		}
		registry
	}

	/// Case-insensitive exact lookup.
	pub fn lookup(&self, name: &str) -> Option<T> {
		let key = AliasKey::new(name);
		self.table.read().entries.get(&key).map(|e| e.ty.clone())
	}

	/// Case-insensitive exact lookup returning the full entry.
	pub fn get(&self, name: &str) -> Option<AliasEntry<T>> {
		let key = AliasKey::new(name);
		self.table.read().entries.get(&key).cloned()
	}

	/// Returns true if `name` is registered.
	pub fn contains(&self, name: &str) -> bool {
		let key = AliasKey::new(name);
		self.table.read().entries.contains_key(&key)
	}

	/// Inserts `name => ty` only if `name` is absent.
	///
	/// Returns whether the insertion happened. An existing entry is never touched.
	pub fn try_insert(&self, name: &str, ty: T) -> bool {
		let key = AliasKey::new(name);
		let mut table = self.table.write();
		if table.entries.contains_key(&key) {
			trace!(alias = %name, "alias already registered");
			return false;
		}
		debug!(alias = %name, ty = %ty, "alias registered");
		table.entries.insert(key, AliasEntry::new(name, ty));
		table.generation += 1;
		true
	}

	/// Removes `name` if present. Absent names are a no-op.
	pub fn delete(&self, name: &str) {
		let key = AliasKey::new(name);
		let mut table = self.table.write();
		match table.entries.shift_remove(&key) {
			Some(entry) => {
				debug!(alias = %entry.name, ty = %entry.ty, "alias removed");
				table.generation += 1;
			}
			None => trace!(alias = %name, "alias not registered; nothing to remove"),
		}
	}

	/// Returns a point-in-time copy of every entry.
	///
	/// The copy is immune to later mutation. Consecutive calls without an
	/// intervening mutation share the same underlying table.
	pub fn snapshot(&self) -> AliasSnapshot<T> {
		let table = self.table.read();
		let mut cached = self.cached.lock();
		if let Some(snap) = cached.as_ref()
			&& snap.generation == table.generation
		{
			return snap.clone();
		}

		trace!(generation = table.generation, len = table.entries.len(), "capturing alias snapshot");
		let snap = AliasSnapshot {
			entries: Arc::new(table.entries.clone()),
			generation: table.generation,
		};
		*cached = Some(snap.clone());
		snap
	}

	/// Returns a live, read-locked view of the table.
	///
	/// Mutations block until the view is dropped; keep it short-lived.
	pub fn live(&self) -> LiveEntries<'_, T> {
		LiveEntries {
			guard: self.table.read(),
		}
	}

	/// Scans the live table for every entry whose type equals `ty`.
	pub fn entries_of_type(&self, ty: &T) -> Vec<AliasEntry<T>> {
		self.live().iter().filter(|e| &e.ty == ty).cloned().collect()
	}

	/// Number of registered aliases.
	pub fn len(&self) -> usize {
		self.table.read().entries.len()
	}

	/// Returns true if no alias is registered.
	pub fn is_empty(&self) -> bool {
		self.table.read().entries.is_empty()
	}
}

/// Immutable point-in-time copy of the registry.
pub struct AliasSnapshot<T> {
	entries: Arc<Entries<T>>,
	generation: u64,
}

impl<T> Clone for AliasSnapshot<T> {
	fn clone(&self) -> Self {
		Self {
			entries: self.entries.clone(),
			generation: self.generation,
		}
	}
}

impl<T: fmt::Debug> fmt::Debug for AliasSnapshot<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AliasSnapshot")
			.field("generation", &self.generation)
			.field("entries", &self.entries.values().collect::<Vec<_>>())
			.finish()
	}
}

impl<T> AliasSnapshot<T> {
	/// Case-insensitive exact lookup within the snapshot.
	pub fn get(&self, name: &str) -> Option<&AliasEntry<T>> {
		self.entries.get(&AliasKey::new(name))
	}

	/// Entry at `index` in registration order.
	pub fn get_index(&self, index: usize) -> Option<&AliasEntry<T>> {
		self.entries.get_index(index).map(|(_, e)| e)
	}

	/// Iterates entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &AliasEntry<T>> {
		self.entries.values()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the snapshot holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Registry generation the snapshot was taken at.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns true if both handles share one captured table.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.entries, &other.entries)
	}
}

/// Read-locked live view returned by [`AliasRegistry::live`].
pub struct LiveEntries<'a, T> {
	guard: RwLockReadGuard<'a, Table<T>>,
}

impl<T> LiveEntries<'_, T> {
	/// Iterates the current entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &AliasEntry<T>> {
		self.guard.entries.values()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.guard.entries.len()
	}

	/// Returns true if the table is empty.
	pub fn is_empty(&self) -> bool {
		self.guard.entries.is_empty()
	}
}

impl<'v, T> IntoIterator for &'v LiveEntries<'_, T> {
	type Item = &'v AliasEntry<T>;
	type IntoIter = indexmap::map::Values<'v, AliasKey, AliasEntry<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.guard.entries.values()
	}
}

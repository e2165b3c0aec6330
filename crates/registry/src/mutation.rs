//! Add-if-absent and confirmed removal.

use tracing::debug;

use crate::entry::{AliasEntry, AliasTarget};
use crate::error::{AliasError, Result};
use crate::table::AliasRegistry;

/// Answer to a per-entry removal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confirmation {
	/// Remove this entry.
	Yes,
	/// Remove this entry and every remaining one without asking again.
	YesToAll,
	/// Skip this entry only.
	No,
	/// Skip this entry and every remaining one.
	NoToAll,
	/// Stop processing; remaining entries are left untouched.
	Abort,
}

/// Confirmation collaborator consulted once per entry during [`AliasRegistry::remove`].
pub trait Confirm<T> {
	/// Decides what to do with `entry`.
	fn confirm(&mut self, entry: &AliasEntry<T>) -> Confirmation;
}

impl<T, F> Confirm<T> for F
where
	F: FnMut(&AliasEntry<T>) -> Confirmation,
{
	fn confirm(&mut self, entry: &AliasEntry<T>) -> Confirmation {
		self(entry)
	}
}

/// Confirms every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl<T> Confirm<T> for AlwaysConfirm {
	fn confirm(&mut self, _entry: &AliasEntry<T>) -> Confirmation {
		Confirmation::Yes
	}
}

/// Declines every entry, recording what would have been removed.
#[derive(Debug, Clone, Default)]
pub struct WhatIf {
	/// One message per entry that would have been removed.
	pub messages: Vec<String>,
}

impl<T: std::fmt::Display> Confirm<T> for WhatIf {
	fn confirm(&mut self, entry: &AliasEntry<T>) -> Confirmation {
		self.messages.push(format!("Remove alias: {entry}"));
		Confirmation::No
	}
}

/// Outcome of a removal pass.
///
/// A partial pass (some entries removed, others skipped or never reached) is a
/// normal result, not a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveReport {
	/// Entries whose deletion was confirmed. Confirmed names that were already
	/// absent still count here.
	pub confirmed: usize,
	/// Entries declined with [`Confirmation::No`] or [`Confirmation::NoToAll`].
	pub skipped: usize,
	/// Entries never reached because of [`Confirmation::Abort`].
	pub unprocessed: usize,
	/// Whether the pass was aborted.
	pub aborted: bool,
}

impl<T: AliasTarget> AliasRegistry<T> {
	/// Registers `name => ty` unless `name` is already bound.
	///
	/// Returns the new entry when it was inserted and `pass_thru` is set. An
	/// existing binding is left untouched and yields `Ok(None)`.
	///
	/// # Errors
	///
	/// [`AliasError::InvalidArgument`] if `name` is blank or `ty` is missing.
	pub fn add(&self, name: &str, ty: Option<T>, pass_thru: bool) -> Result<Option<AliasEntry<T>>> {
		let name = name.trim();
		if name.is_empty() {
			return Err(AliasError::InvalidArgument("alias name must not be empty".into()));
		}
		let Some(ty) = ty else {
			return Err(AliasError::InvalidArgument(format!("alias '{name}' requires a type")));
		};

		let inserted = self.try_insert(name, ty.clone());
		Ok((inserted && pass_thru).then(|| AliasEntry::new(name, ty)))
	}

	/// Removes previously obtained entries, asking `confirm` before each one.
	///
	/// Only the name of each entry is used for deletion; its type is passed to
	/// the collaborator for display.
	pub fn remove<I, C>(&self, entries: I, confirm: &mut C) -> RemoveReport
	where
		I: IntoIterator<Item = AliasEntry<T>>,
		C: Confirm<T> + ?Sized,
	{
		let mut report = RemoveReport::default();
		let mut yes_to_all = false;
		let mut no_to_all = false;
		let mut entries = entries.into_iter();

		while let Some(entry) = entries.next() {
			if no_to_all {
				report.skipped += 1;
				continue;
			}

			let answer = if yes_to_all {
				Confirmation::Yes
			} else {
				confirm.confirm(&entry)
			};

			match answer {
				Confirmation::Yes | Confirmation::YesToAll => {
					yes_to_all |= answer == Confirmation::YesToAll;
					self.delete(&entry.name);
					report.confirmed += 1;
				}
				Confirmation::No => {
					debug!(alias = %entry.name, "alias removal declined");
					report.skipped += 1;
				}
				Confirmation::NoToAll => {
					debug!(alias = %entry.name, "alias removal declined for remaining entries");
					no_to_all = true;
					report.skipped += 1;
				}
				Confirmation::Abort => {
					report.aborted = true;
					report.unprocessed = 1 + entries.by_ref().count();
					debug!(remaining = report.unprocessed, "alias removal aborted");
					break;
				}
			}
		}

		report
	}
}

//! Process-wide registry of type aliases.
//!
//! An alias binds a short, case-insensitive name to an opaque type identifier
//! owned by the host. The registry never interprets the identifier; it only
//! stores it and compares it for equality.
//!
//! # Layout
//!
//! - [`AliasRegistry`] - the shared table and its locking discipline
//! - [`pattern`] - wildcard compilation for name filters
//! - [`query`] - enumeration by snapshot, name filter, or type
//! - [`mutation`] - add-if-absent and confirmed removal
//! - [`builtins`] - the default seed set for the shipped host
//!
//! The host constructs one registry at startup, shares it through an `Arc`,
//! and hands that reference to every command invocation.

pub mod builtins;
pub mod entry;
pub mod error;
pub mod key;
pub mod mutation;
pub mod pattern;
pub mod query;
mod table;

pub use builtins::builtin_aliases;
pub use entry::{AliasEntry, AliasTarget, TypeName};
pub use error::{AliasError, PatternError, Result};
pub use key::AliasKey;
pub use mutation::{AlwaysConfirm, Confirm, Confirmation, RemoveReport, WhatIf};
pub use pattern::{NameFilter, WildcardPattern, has_wildcards};
pub use query::{AliasQuery, QueryResults};
pub use table::{AliasRegistry, AliasSnapshot, LiveEntries};

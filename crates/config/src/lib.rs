//! Configuration system for tyalias.
//!
//! Configuration is written in TOML:
//!
//! ```toml
//! # Seed the builtin alias set (default: true)
//! builtins = true
//!
//! [[alias]]
//! name = "list"
//! type = "System.Collections.Generic.List`1"
//!
//! [confirm]
//! default = "prompt"   # "prompt" | "yes" | "no"
//! ```
//!
//! # Configuration Files
//!
//! 1. `$TYALIAS_CONFIG` if set (must exist)
//! 2. `$XDG_CONFIG_HOME/tyalias/config.toml` (or the platform equivalent), if present
//!
//! Aliases listed in configuration are seeded after the builtins, so a builtin
//! name cannot be rebound from configuration: the first registration wins.

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tyalias_registry::{AliasEntry, TypeName, builtin_aliases};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TYALIAS_CONFIG";

/// Parsed configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Whether the builtin alias set is seeded.
	pub builtins: bool,
	/// Additional seed aliases, in file order.
	#[serde(rename = "alias")]
	pub aliases: Vec<AliasSpec>,
	/// Confirmation defaults for destructive commands.
	pub confirm: ConfirmConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			builtins: true,
			aliases: Vec::new(),
			confirm: ConfirmConfig::default(),
		}
	}
}

/// One `[[alias]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasSpec {
	/// Alias name.
	pub name: String,
	/// Fully-qualified target type identifier.
	#[serde(rename = "type")]
	pub ty: String,
}

/// `[confirm]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfirmConfig {
	/// Answer used when a command needs confirmation.
	pub default: ConfirmMode,
}

/// How removal prompts are answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmMode {
	/// Ask interactively.
	#[default]
	Prompt,
	/// Confirm everything.
	Yes,
	/// Decline everything.
	No,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		debug!(path = %path.display(), "loading config");
		Self::parse(&content)
	}

	/// Loads the default configuration file, if any.
	///
	/// A missing file at the platform location is not an error; a missing file
	/// named by [`CONFIG_ENV`] is.
	pub fn load_default() -> Result<Option<(PathBuf, Self)>> {
		let Some((path, explicit)) = default_path() else {
			return Ok(None);
		};
		if !explicit && !path.exists() {
			debug!(path = %path.display(), "no config file");
			return Ok(None);
		}
		let config = Self::load(&path)?;
		Ok(Some((path, config)))
	}

	/// Merge another config into this one.
	///
	/// Scalars from `other` override; aliases from `other` are appended.
	pub fn merge(&mut self, other: Config) {
		self.builtins = other.builtins;
		self.confirm = other.confirm;
		self.aliases.extend(other.aliases);
	}

	/// Seed entries in registration order: builtins first, then configured aliases.
	pub fn seed(&self) -> Vec<AliasEntry<TypeName>> {
		let mut seed: Vec<_> = if self.builtins { builtin_aliases().collect() } else { Vec::new() };
		seed.extend(self.aliases.iter().filter_map(|spec| {
			let ty = TypeName::parse(&spec.ty).ok()?;
			Some(AliasEntry::new(spec.name.trim(), ty))
		}));
		seed
	}

	fn validate(&self) -> Result<()> {
		for (i, spec) in self.aliases.iter().enumerate() {
			let invalid = |reason: &str| ConfigError::InvalidAlias {
				index: i + 1,
				reason: reason.to_string(),
			};
			if spec.name.trim().is_empty() {
				return Err(invalid("name must not be empty"));
			}
			if spec.ty.trim().is_empty() {
				return Err(invalid(&format!("alias '{}' has an empty type", spec.name.trim())));
			}
		}
		Ok(())
	}
}

/// Returns the config path to try and whether it was named explicitly.
fn default_path() -> Option<(PathBuf, bool)> {
	if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
		return Some((PathBuf::from(path), true));
	}
	dirs::config_dir().map(|dir| (dir.join("tyalias").join("config.toml"), false))
}

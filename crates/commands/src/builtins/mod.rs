//! Builtin alias commands.

mod add_alias;
mod get_alias;
mod remove_alias;

pub use add_alias::AddAlias;
pub use get_alias::GetAlias;
pub use remove_alias::RemoveAlias;

use crate::Command;

/// Every builtin command, in listing order.
pub fn all() -> Vec<Box<dyn Command>> {
	vec![Box::new(GetAlias), Box::new(AddAlias), Box::new(RemoveAlias)]
}

#[cfg(test)]
mod tests;

//! Command surface over the alias registry.
//!
//! Commands are thin: they bind arguments, call into [`tyalias_registry`], and
//! emit [`Record`]s to the next pipeline stage. Destructive commands consult the
//! [`Confirm`] collaborator supplied by the host.

pub mod builtins;
mod command;
mod error;
mod shell;

pub use command::{Command, CommandContext, Record};
pub use error::{CommandError, Result};
pub use shell::{LineError, Shell, ShellOutput};
pub use tyalias_registry::{Confirm, Confirmation};

//! Terminal input: command lines and removal confirmation.

use std::io::{self, BufRead, Write};

use tyalias_config::ConfirmMode;
use tyalias_registry::{AliasEntry, Confirm, Confirmation, TypeName};

const CHOICES: &str = "[Y] Yes  [A] Yes to All  [N] No  [L] No to All  [S] Stop";

/// Maps a typed answer to a confirmation. An empty answer means yes.
pub fn parse_answer(answer: &str) -> Option<Confirmation> {
	match answer.trim().to_ascii_lowercase().as_str() {
		"" | "y" | "yes" => Some(Confirmation::Yes),
		"a" | "all" => Some(Confirmation::YesToAll),
		"n" | "no" => Some(Confirmation::No),
		"l" | "none" => Some(Confirmation::NoToAll),
		"s" | "stop" => Some(Confirmation::Abort),
		_ => None,
	}
}

/// Line-oriented terminal shared by the interactive loop and confirmation prompts.
pub struct Terminal<R, W> {
	input: R,
	output: W,
	mode: ConfirmMode,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
	pub fn new(input: R, output: W, mode: ConfirmMode) -> Self {
		Self { input, output, mode }
	}

	/// Shows `prompt` (if any) and reads one line. `None` at end of input.
	pub fn read_line(&mut self, prompt: Option<&str>) -> io::Result<Option<String>> {
		if let Some(prompt) = prompt {
			write!(self.output, "{prompt}")?;
			self.output.flush()?;
		}
		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
	}

	fn ask(&mut self, entry: &AliasEntry<TypeName>) -> io::Result<Confirmation> {
		writeln!(self.output, "Confirm")?;
		writeln!(self.output, "Remove alias: {entry}")?;
		loop {
			let prompt = format!("{CHOICES} (default is \"Y\"): ");
			let Some(answer) = self.read_line(Some(&prompt))? else {
				return Ok(Confirmation::Abort);
			};
			if let Some(confirmation) = parse_answer(&answer) {
				return Ok(confirmation);
			}
			writeln!(self.output, "unrecognized answer '{}'", answer.trim())?;
		}
	}

	#[cfg(test)]
	pub fn into_output(self) -> W {
		self.output
	}
}

impl<R: BufRead, W: Write> Confirm<TypeName> for Terminal<R, W> {
	fn confirm(&mut self, entry: &AliasEntry<TypeName>) -> Confirmation {
		match self.mode {
			ConfirmMode::Yes => Confirmation::Yes,
			ConfirmMode::No => Confirmation::No,
			ConfirmMode::Prompt => self.ask(entry).unwrap_or_else(|e| {
				tracing::warn!(error = %e, "confirmation prompt failed; stopping");
				Confirmation::Abort
			}),
		}
	}
}

//! Line execution and output rendering for the terminal host.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Result;
use tracing::{debug, warn};
use tyalias_commands::{CommandError, LineError, Record, Shell};

use crate::prompt::Terminal;

const PROMPT: &str = "tyalias> ";

/// Formats one record for display.
pub fn render(record: &Record, json: bool) -> Result<String> {
	if json {
		Ok(serde_json::to_string(record)?)
	} else {
		Ok(record.to_string())
	}
}

/// A shell bound to a terminal and an output stream.
pub struct Session<R, W, O> {
	shell: Shell,
	terminal: Terminal<R, W>,
	out: O,
	json: bool,
	failures: usize,
}

impl<R: BufRead, W: Write, O: Write> Session<R, W, O> {
	pub fn new(shell: Shell, terminal: Terminal<R, W>, out: O, json: bool) -> Self {
		Self {
			shell,
			terminal,
			out,
			json,
			failures: 0,
		}
	}

	/// Number of lines that failed so far.
	pub fn failures(&self) -> usize {
		self.failures
	}

	/// Runs one command line. Command errors are reported and counted;
	/// only output failures are returned.
	///
	/// Output of pipelines that finished before a failure is still shown.
	pub fn run_line(&mut self, line: &str, origin: &str) -> Result<bool> {
		let (output, failure) = match self.shell.execute(line, &mut self.terminal) {
			Ok(output) => (output, None),
			Err(LineError { completed, error }) => (completed, Some(error)),
		};

		for notice in &output.notices {
			eprintln!("{notice}");
		}
		for record in &output.records {
			writeln!(self.out, "{}", render(record, self.json)?)?;
		}

		let succeeded = match failure {
			None => true,
			Some(CommandError::Help(text)) => {
				write!(self.out, "{text}")?;
				true
			}
			Some(e) => {
				debug!(origin, error = %e, "command line failed");
				eprintln!("error: {origin}: {e}");
				self.failures += 1;
				false
			}
		};
		self.out.flush()?;
		Ok(succeeded)
	}

	/// Runs every line of `script`, reporting failures with their line number.
	pub fn run_script(&mut self, name: &str, script: &str) -> Result<()> {
		for (index, line) in script.lines().enumerate() {
			self.run_line(line, &format!("{name}:{}", index + 1))?;
		}
		Ok(())
	}

	/// Reads and runs lines until end of input or `exit`.
	pub fn interactive(&mut self) -> Result<()> {
		let show_prompt = std::io::stdin().is_terminal();
		let mut line_no = 0usize;
		loop {
			let Some(line) = self.terminal.read_line(show_prompt.then_some(PROMPT))? else {
				break;
			};
			line_no += 1;
			match line.trim() {
				"exit" | "quit" => break,
				"help" => self.list_commands()?,
				_ => {
					self.run_line(&line, &format!("<stdin>:{line_no}"))?;
				}
			}
		}
		if self.failures > 0 {
			warn!(failures = self.failures, "interactive session had failing lines");
		}
		Ok(())
	}

	fn list_commands(&mut self) -> Result<()> {
		let rows: Vec<_> = self.shell.commands().map(|c| (c.name(), c.description())).collect();
		let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
		for (name, description) in rows {
			writeln!(self.out, "{name:width$}  {description}")?;
		}
		Ok(())
	}

	#[cfg(test)]
	pub fn into_output(self) -> O {
		self.out
	}
}

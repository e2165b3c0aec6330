//! Splitting a command line into pipelines.
//!
//! Words are separated by whitespace. Single or double quotes group a word and
//! are removed. `|` separates pipeline stages, `;` separates pipelines, and `#`
//! outside quotes starts a comment. Backquotes are kept verbatim so wildcard
//! escapes reach the commands untouched.

use thiserror::Error;

use crate::{Invocation, Pipeline};

/// Errors produced while splitting a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
	/// A quote was opened but never closed.
	#[error("unterminated {quote} quote starting at column {column}")]
	UnterminatedQuote {
		/// The opening quote character.
		quote: char,
		/// 1-based column of the opening quote.
		column: usize,
	},
	/// A `|` with no command on one side.
	#[error("empty pipeline stage at column {column}")]
	EmptyStage {
		/// 1-based column of the offending `|`.
		column: usize,
	},
}

enum Token {
	Word(String),
	Pipe(usize),
	Separator,
}

fn tokenize(line: &str) -> Result<Vec<Token>, ParseError> {
	let mut tokens = Vec::new();
	let mut word = String::new();
	let mut in_word = false;
	let mut chars = line.char_indices();

	while let Some((idx, c)) = chars.next() {
		match c {
			'\'' | '"' => {
				in_word = true;
				let mut closed = false;
				for (_, q) in chars.by_ref() {
					if q == c {
						closed = true;
						break;
					}
					word.push(q);
				}
				if !closed {
					return Err(ParseError::UnterminatedQuote {
						quote: c,
						column: line[..idx].chars().count() + 1,
					});
				}
			}
			'#' if !in_word => break,
			'|' | ';' => {
				if in_word {
					tokens.push(Token::Word(std::mem::take(&mut word)));
					in_word = false;
				}
				tokens.push(if c == '|' {
					Token::Pipe(line[..idx].chars().count() + 1)
				} else {
					Token::Separator
				});
			}
			c if c.is_whitespace() => {
				if in_word {
					tokens.push(Token::Word(std::mem::take(&mut word)));
					in_word = false;
				}
			}
			other => {
				in_word = true;
				word.push(other);
			}
		}
	}
	if in_word {
		tokens.push(Token::Word(word));
	}
	Ok(tokens)
}

/// Splits `line` into pipelines. Blank lines and comments yield no pipelines.
pub fn parse_line(line: &str) -> Result<Vec<Pipeline>, ParseError> {
	let mut pipelines = Vec::new();
	let mut stages: Vec<Invocation> = Vec::new();
	let mut words: Vec<String> = Vec::new();
	let mut pending_pipe: Option<usize> = None;

	for token in tokenize(line)? {
		match token {
			Token::Word(w) => words.push(w),
			Token::Pipe(column) => {
				let Some(stage) = stage_from(&mut words) else {
					return Err(ParseError::EmptyStage { column });
				};
				stages.push(stage);
				pending_pipe = Some(column);
			}
			Token::Separator => {
				finish(&mut pipelines, &mut stages, &mut words, pending_pipe.take())?;
			}
		}
	}
	finish(&mut pipelines, &mut stages, &mut words, pending_pipe)?;
	Ok(pipelines)
}

fn stage_from(words: &mut Vec<String>) -> Option<Invocation> {
	if words.is_empty() {
		return None;
	}
	let mut args = std::mem::take(words);
	let name = args.remove(0);
	Some(Invocation::new(name, args))
}

fn finish(
	pipelines: &mut Vec<Pipeline>,
	stages: &mut Vec<Invocation>,
	words: &mut Vec<String>,
	pending_pipe: Option<usize>,
) -> Result<(), ParseError> {
	match stage_from(words) {
		Some(stage) => stages.push(stage),
		None => {
			if let Some(column) = pending_pipe {
				return Err(ParseError::EmptyStage { column });
			}
		}
	}
	if !stages.is_empty() {
		pipelines.push(Pipeline::new(std::mem::take(stages)));
	}
	Ok(())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{iter::Peekable, str::CharIndices};

use thiserror::Error;

use crate::token::{Span, Token, TokenKind};

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
	#[error("unexpected character '{ch}' at {line}:{column}")]
	UnexpectedChar {
		ch: char,
		line: u32,
		column: u32,
	},

	#[error("unterminated {what} at {line}:{column}")]
	Unterminated {
		what: &'static str,
		line: u32,
		column: u32,
	},
}

/// Lexer for source database DDL.
///
/// Keywords are not resolved here, MySQL treats most of them as contextual,
/// so every bare word is emitted as [`TokenKind::Word`] and the parser decides.
pub struct Lexer<'a> {
	source: &'a str,
	chars: Peekable<CharIndices<'a>>,
	position: usize,
	line: u32,
	column: u32,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			chars: source.char_indices().peekable(),
			position: 0,
			line: 1,
			column: 1,
		}
	}

	/// Tokenize the entire source. The last token is always [`TokenKind::Eof`].
	pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
		let mut tokens = Vec::new();

		loop {
			let token = self.next_token()?;
			let is_eof = token.is_eof();
			tokens.push(token);

			if is_eof {
				break;
			}
		}

		Ok(tokens)
	}

	fn next_token(&mut self) -> Result<Token, LexError> {
		self.skip_trivia()?;

		let Some(&(start, ch)) = self.chars.peek() else {
			return Ok(self.make_token(TokenKind::Eof, self.position, self.line, self.column));
		};

		let line = self.line;
		let column = self.column;

		match ch {
			c if c.is_alphabetic() || c == '_' || c == '$' => Ok(self.scan_word()),

			'0'..='9' => Ok(self.scan_number(start, line, column)),

			'-' | '+' => {
				self.advance();
				if let Some(&(_, c)) = self.chars.peek() {
					if c.is_ascii_digit() {
						return Ok(self.scan_number(start, line, column));
					}
				}
				Ok(self.make_token(TokenKind::Operator, start, line, column))
			}

			'`' => {
				let value = self.scan_quoted('`', "quoted identifier")?;
				Ok(self.make_token(TokenKind::QuotedIdent(value), start, line, column))
			}

			'\'' => {
				let value = self.scan_quoted('\'', "string literal")?;
				Ok(self.make_token(TokenKind::String(value), start, line, column))
			}

			'"' => {
				let value = self.scan_quoted('"', "string literal")?;
				Ok(self.make_token(TokenKind::DoubleQuoted(value), start, line, column))
			}

			'(' => Ok(self.single(TokenKind::OpenParen, start, line, column)),
			')' => Ok(self.single(TokenKind::CloseParen, start, line, column)),
			',' => Ok(self.single(TokenKind::Comma, start, line, column)),
			'.' => Ok(self.single(TokenKind::Dot, start, line, column)),
			';' => Ok(self.single(TokenKind::Semicolon, start, line, column)),
			'=' => Ok(self.single(TokenKind::Eq, start, line, column)),

			'<' | '>' | '!' | ':' => {
				self.advance();
				// <= >= <> != :=
				if !self.match_char('=') && ch == '<' {
					self.match_char('>');
				}
				Ok(self.make_token(TokenKind::Operator, start, line, column))
			}

			'*' | '/' | '%' | '&' | '|' | '^' | '~' | '@' | '?' => {
				Ok(self.single(TokenKind::Operator, start, line, column))
			}

			_ => Err(LexError::UnexpectedChar {
				ch,
				line,
				column,
			}),
		}
	}

	/// Skip whitespace and `--`, `#` and `/* */` comments.
	fn skip_trivia(&mut self) -> Result<(), LexError> {
		while let Some(&(pos, ch)) = self.chars.peek() {
			if ch.is_whitespace() {
				self.advance();
				continue;
			}

			let rest = &self.source[pos..];
			if ch == '#' || rest.starts_with("--") {
				while let Some(&(_, c)) = self.chars.peek() {
					if c == '\n' {
						break;
					}
					self.advance();
				}
				continue;
			}

			if rest.starts_with("/*") {
				let line = self.line;
				let column = self.column;
				self.advance();
				self.advance();
				loop {
					match self.advance() {
						None => {
							return Err(LexError::Unterminated {
								what: "block comment",
								line,
								column,
							});
						}
						Some('*') => {
							if self.match_char('/') {
								break;
							}
						}
						Some(_) => {}
					}
				}
				continue;
			}

			break;
		}
		Ok(())
	}

	fn scan_word(&mut self) -> Token {
		let start = self.position;
		let line = self.line;
		let column = self.column;

		while let Some(&(_, ch)) = self.chars.peek() {
			if ch.is_alphanumeric() || ch == '_' || ch == '$' {
				self.advance();
			} else {
				break;
			}
		}

		self.make_token(TokenKind::Word, start, line, column)
	}

	/// Scan digits with an optional fraction; any sign has already been consumed.
	fn scan_number(&mut self, start: usize, line: u32, column: u32) -> Token {
		self.consume_digits();

		if let Some(&(pos, '.')) = self.chars.peek() {
			let fraction = self.source[pos + 1..].chars().next().is_some_and(|c| c.is_ascii_digit());
			if fraction {
				self.advance();
				self.consume_digits();
			}
		}

		self.make_token(TokenKind::Number, start, line, column)
	}

	fn consume_digits(&mut self) {
		while let Some(&(_, ch)) = self.chars.peek() {
			if ch.is_ascii_digit() {
				self.advance();
			} else {
				break;
			}
		}
	}

	/// Scan a quoted run. A doubled quote and a backslash escape both yield the quote itself.
	fn scan_quoted(&mut self, quote: char, what: &'static str) -> Result<String, LexError> {
		let line = self.line;
		let column = self.column;

		self.advance(); // consume opening quote

		let mut value = String::new();
		loop {
			match self.advance() {
				None => {
					return Err(LexError::Unterminated {
						what,
						line,
						column,
					});
				}
				Some(ch) if ch == quote => {
					if self.match_char(quote) {
						value.push(quote);
					} else {
						break;
					}
				}
				Some('\\') if quote != '`' => match self.advance() {
					Some('n') => value.push('\n'),
					Some('t') => value.push('\t'),
					Some('r') => value.push('\r'),
					Some('0') => value.push('\0'),
					Some(c) => value.push(c),
					None => {
						return Err(LexError::Unterminated {
							what,
							line,
							column,
						});
					}
				},
				Some(ch) => value.push(ch),
			}
		}

		Ok(value)
	}

	fn single(&mut self, kind: TokenKind, start: usize, line: u32, column: u32) -> Token {
		self.advance();
		self.make_token(kind, start, line, column)
	}

	fn advance(&mut self) -> Option<char> {
		let (pos, ch) = self.chars.next()?;
		self.position = pos + ch.len_utf8();
		if ch == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(ch)
	}

	fn match_char(&mut self, expected: char) -> bool {
		if let Some(&(_, ch)) = self.chars.peek() {
			if ch == expected {
				self.advance();
				return true;
			}
		}
		false
	}

	fn make_token(&self, kind: TokenKind, start: usize, line: u32, column: u32) -> Token {
		Token::new(
			kind,
			Span::new(start, self.position, line, column),
			self.source.get(start..self.position).unwrap_or("").to_string(),
		)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

/// Location of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
	pub start: usize,
	pub end: usize,
	pub line: u32,
	pub column: u32,
}

impl Span {
	pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
		Self {
			start,
			end,
			line,
			column,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	// Bare identifiers and keywords, keywords are contextual
	Word,
	// Literals, unescaped content
	QuotedIdent(String), // `name`
	String(String),      // 'text'
	DoubleQuoted(String), // "text"
	Number,
	// Operators & punctuation
	OpenParen,  // (
	CloseParen, // )
	Comma,      // ,
	Dot,        // .
	Semicolon,  // ;
	Eq,         // =
	Operator,   // anything else, e.g. + - * / < >
	Eof,
}

/// A lexed token. `text` always holds the raw source slice, quotes included.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub span: Span,
	pub text: String,
}

impl Token {
	pub fn new(kind: TokenKind, span: Span, text: String) -> Self {
		Self {
			kind,
			span,
			text,
		}
	}

	pub fn keyword(&self) -> Option<Keyword> {
		match self.kind {
			TokenKind::Word => Keyword::from_word(&self.text),
			_ => None,
		}
	}

	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.keyword() == Some(keyword)
	}

	pub fn is_eof(&self) -> bool {
		self.kind == TokenKind::Eof
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.kind {
			TokenKind::Eof => f.write_str("end of input"),
			_ => write!(f, "'{}'", self.text),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
	Alter,
	Table,
	If,
	Exists,
	Add,
	Drop,
	Change,
	Rename,
	Modify,
	Column,
	To,
	As,
	Index,
	Key,
	Primary,
	Unique,
	Fulltext,
	Spatial,
	Constraint,
	Foreign,
	Check,
	Partition,
	Character,
	Charset,
	Set,
	// Type modifiers
	Unsigned,
	Signed,
	Zerofill,
	Precision,
	Varying,
}

impl Keyword {
	pub fn from_word(word: &str) -> Option<Keyword> {
		let upper = word.to_ascii_uppercase();
		let keyword = match upper.as_str() {
			"ALTER" => Keyword::Alter,
			"TABLE" => Keyword::Table,
			"IF" => Keyword::If,
			"EXISTS" => Keyword::Exists,
			"ADD" => Keyword::Add,
			"DROP" => Keyword::Drop,
			"CHANGE" => Keyword::Change,
			"RENAME" => Keyword::Rename,
			"MODIFY" => Keyword::Modify,
			"COLUMN" => Keyword::Column,
			"TO" => Keyword::To,
			"AS" => Keyword::As,
			"INDEX" => Keyword::Index,
			"KEY" => Keyword::Key,
			"PRIMARY" => Keyword::Primary,
			"UNIQUE" => Keyword::Unique,
			"FULLTEXT" => Keyword::Fulltext,
			"SPATIAL" => Keyword::Spatial,
			"CONSTRAINT" => Keyword::Constraint,
			"FOREIGN" => Keyword::Foreign,
			"CHECK" => Keyword::Check,
			"PARTITION" => Keyword::Partition,
			"CHARACTER" => Keyword::Character,
			"CHARSET" => Keyword::Charset,
			"SET" => Keyword::Set,
			"UNSIGNED" => Keyword::Unsigned,
			"SIGNED" => Keyword::Signed,
			"ZEROFILL" => Keyword::Zerofill,
			"PRECISION" => Keyword::Precision,
			"VARYING" => Keyword::Varying,
			_ => return None,
		};
		Some(keyword)
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Source database DDL parsing.
//!
//! The translation engine consumes statements through [`StatementParser`];
//! [`SqlParser`] is the shipped MySQL-flavoured implementation.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{AlterExpression, AlterOperation, AlterStatement, ColumnDefinition, DataType, ObjectName, Statement};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, Parser};

/// Capability to turn one DDL statement into a [`Statement`].
pub trait StatementParser: Send + Sync {
	fn parse(&self, sql: &str) -> Result<Statement, ParseError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SqlParser;

impl StatementParser for SqlParser {
	fn parse(&self, sql: &str) -> Result<Statement, ParseError> {
		parse(sql)
	}
}

/// Lex and parse a single statement.
pub fn parse(sql: &str) -> Result<Statement, ParseError> {
	let tokens = Lexer::new(sql).tokenize()?;
	Parser::new(tokens).parse()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_sql_parser_parses_alter() {
		let statement = SqlParser.parse("ALTER TABLE users DROP COLUMN a").unwrap();
		let alter = statement.as_alter().unwrap();
		assert_eq!(alter.table.to_string(), "users");
		assert_eq!(alter.expressions[0].operation, AlterOperation::Drop);
	}

	#[test]
	fn test_sql_parser_is_object_safe() {
		let parser: Box<dyn StatementParser> = Box::new(SqlParser);
		assert!(parser.parse("SELECT 1").unwrap().as_alter().is_none());
	}

	#[test]
	fn test_parse_reports_syntax_errors() {
		assert!(parse("ALTER TABLE").is_err());
	}
}

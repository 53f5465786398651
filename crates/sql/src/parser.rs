// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! ALTER TABLE statement parsing.
//!
//! Accepted syntax (MySQL flavoured, with the PostgreSQL column rename form):
//! - `ALTER TABLE [IF EXISTS] [db.]table expr [, expr]*`
//! - `ADD [COLUMN] name type [specs]` and `ADD [COLUMN] (name type [specs], ...)`
//! - `DROP [COLUMN] [IF EXISTS] name [CASCADE | RESTRICT]`
//! - `CHANGE [COLUMN] old new type [specs]`
//! - `RENAME COLUMN old TO new`, `RENAME old TO new`, `RENAME [TO | AS] table`
//! - `MODIFY [COLUMN] name type [specs]`, `ALTER [COLUMN] name ...`
//!
//! Index, key, constraint and partition clauses are recognised and skipped.
//! Any other clause becomes [`AlterOperation::Other`].

use thiserror::Error;

use crate::{
	ast::{AlterExpression, AlterOperation, AlterStatement, ColumnDefinition, DataType, ObjectName, Statement},
	lexer::LexError,
	token::{Keyword, Span, Token, TokenKind},
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
	#[error("lexer error: {0}")]
	Lex(#[from] LexError),

	#[error("unexpected {found} at {line}:{column}, expected {expected}")]
	UnexpectedToken {
		found: String,
		expected: &'static str,
		line: u32,
		column: u32,
	},

	#[error("unexpected end of input, expected {expected}")]
	UnexpectedEof {
		expected: &'static str,
	},

	#[error("empty statement")]
	Empty,
}

pub struct Parser {
	tokens: Vec<Token>,
	position: usize,
}

impl Parser {
	pub fn new(mut tokens: Vec<Token>) -> Self {
		if !tokens.last().is_some_and(Token::is_eof) {
			let end = tokens.last().map(|t| t.span).unwrap_or_default();
			tokens.push(Token::new(
				TokenKind::Eof,
				Span::new(end.end, end.end, end.line, end.column),
				String::new(),
			));
		}
		Self {
			tokens,
			position: 0,
		}
	}

	pub fn parse(mut self) -> Result<Statement, ParseError> {
		while self.check(&TokenKind::Semicolon) {
			self.advance();
		}

		let first = self.peek();
		if first.is_eof() {
			return Err(ParseError::Empty);
		}

		if first.is_keyword(Keyword::Alter) && self.peek_nth(1).is_keyword(Keyword::Table) {
			return self.parse_alter_table().map(Statement::Alter);
		}

		Ok(Statement::Other {
			keyword: first.text.to_ascii_uppercase(),
		})
	}

	fn parse_alter_table(&mut self) -> Result<AlterStatement, ParseError> {
		self.expect_keyword(Keyword::Alter, "ALTER")?;
		self.expect_keyword(Keyword::Table, "TABLE")?;
		let if_exists = self.parse_if_exists();
		let table = self.parse_object_name()?;

		let mut expressions = vec![self.parse_alter_expression()?];
		while self.check(&TokenKind::Comma) {
			self.advance();
			expressions.push(self.parse_alter_expression()?);
		}

		while self.check(&TokenKind::Semicolon) {
			self.advance();
		}
		if !self.peek().is_eof() {
			return Err(self.error("',' or end of statement"));
		}

		Ok(AlterStatement {
			table,
			if_exists,
			expressions,
		})
	}

	fn parse_alter_expression(&mut self) -> Result<AlterExpression, ParseError> {
		let token = self.peek().clone();
		match token.keyword() {
			Some(Keyword::Add) => {
				self.advance();
				self.parse_add()
			}
			Some(Keyword::Drop) => {
				self.advance();
				self.parse_drop()
			}
			Some(Keyword::Change) => {
				self.advance();
				self.parse_change()
			}
			Some(Keyword::Rename) => {
				self.advance();
				self.parse_rename()
			}
			Some(Keyword::Modify) => {
				self.advance();
				self.try_consume_keyword(Keyword::Column);
				let definition = self.parse_column_definition(false)?;
				let mut expression = AlterExpression::new(AlterOperation::Modify);
				expression.column_name = Some(definition.name.clone());
				expression.column_definitions.push(definition);
				Ok(expression)
			}
			Some(Keyword::Alter) => {
				self.advance();
				self.try_consume_keyword(Keyword::Column);
				let mut expression = AlterExpression::new(AlterOperation::AlterColumn);
				expression.column_name = Some(self.parse_identifier("column name")?);
				self.skip_expression()?;
				Ok(expression)
			}
			_ if token.kind == TokenKind::Word => {
				self.advance();
				self.skip_expression()?;
				Ok(AlterExpression::new(AlterOperation::Other(token.text.to_ascii_uppercase())))
			}
			_ => Err(self.error("alter operation")),
		}
	}

	fn parse_add(&mut self) -> Result<AlterExpression, ParseError> {
		if !self.try_consume_keyword(Keyword::Column) {
			let operation = match self.peek().keyword() {
				Some(Keyword::Index | Keyword::Key | Keyword::Fulltext | Keyword::Spatial) => {
					Some(AlterOperation::AddIndex)
				}
				Some(
					Keyword::Primary
					| Keyword::Unique
					| Keyword::Constraint
					| Keyword::Foreign
					| Keyword::Check,
				) => Some(AlterOperation::AddConstraint),
				Some(Keyword::Partition) => Some(AlterOperation::Other("ADD PARTITION".to_string())),
				_ => None,
			};
			if let Some(operation) = operation {
				self.skip_expression()?;
				return Ok(AlterExpression::new(operation));
			}
		}

		let mut expression = AlterExpression::new(AlterOperation::Add);
		if self.check(&TokenKind::OpenParen) {
			self.advance();
			loop {
				expression.column_definitions.push(self.parse_column_definition(true)?);
				if self.check(&TokenKind::Comma) {
					self.advance();
					continue;
				}
				self.expect(TokenKind::CloseParen, "',' or ')'")?;
				break;
			}
		} else {
			expression.column_definitions.push(self.parse_column_definition(false)?);
		}
		expression.column_name = expression.column_definitions.first().map(|d| d.name.clone());
		Ok(expression)
	}

	fn parse_drop(&mut self) -> Result<AlterExpression, ParseError> {
		if !self.try_consume_keyword(Keyword::Column) {
			let operation = match self.peek().keyword() {
				Some(Keyword::Index | Keyword::Key) => Some(AlterOperation::DropIndex),
				Some(Keyword::Primary) => Some(AlterOperation::DropPrimaryKey),
				Some(Keyword::Foreign | Keyword::Constraint | Keyword::Check) => {
					Some(AlterOperation::DropConstraint)
				}
				Some(Keyword::Partition) => Some(AlterOperation::Other("DROP PARTITION".to_string())),
				_ => None,
			};
			if let Some(operation) = operation {
				self.skip_expression()?;
				return Ok(AlterExpression::new(operation));
			}
		}

		self.parse_if_exists();
		let mut expression = AlterExpression::new(AlterOperation::Drop);
		expression.column_name = Some(self.parse_identifier("column name")?);

		let token = self.peek();
		if token.kind == TokenKind::Word
			&& (token.text.eq_ignore_ascii_case("CASCADE") || token.text.eq_ignore_ascii_case("RESTRICT"))
		{
			self.advance();
		}
		Ok(expression)
	}

	fn parse_change(&mut self) -> Result<AlterExpression, ParseError> {
		self.try_consume_keyword(Keyword::Column);
		let old_name = self.parse_identifier("column name")?;
		let definition = self.parse_column_definition(false)?;

		let mut expression = AlterExpression::new(AlterOperation::Change);
		expression.old_column_name = Some(old_name);
		expression.column_name = Some(definition.name.clone());
		expression.column_definitions.push(definition);
		Ok(expression)
	}

	fn parse_rename(&mut self) -> Result<AlterExpression, ParseError> {
		if self.try_consume_keyword(Keyword::Column) {
			let old_name = self.parse_identifier("column name")?;
			self.expect_keyword(Keyword::To, "TO")?;
			return self.rename_column(old_name);
		}

		if matches!(self.peek().keyword(), Some(Keyword::Index | Keyword::Key)) {
			self.skip_expression()?;
			return Ok(AlterExpression::new(AlterOperation::Other("RENAME INDEX".to_string())));
		}

		if !self.try_consume_keyword(Keyword::To) {
			self.try_consume_keyword(Keyword::As);
		}
		let name = self.parse_object_name()?;

		// PostgreSQL allows `RENAME old TO new` without the COLUMN keyword
		if self.try_consume_keyword(Keyword::To) {
			return self.rename_column(name.to_string());
		}

		Ok(AlterExpression::new(AlterOperation::RenameTable))
	}

	fn rename_column(&mut self, old_name: String) -> Result<AlterExpression, ParseError> {
		let mut expression = AlterExpression::new(AlterOperation::Rename);
		expression.old_column_name = Some(old_name);
		expression.column_name = Some(self.parse_identifier("column name")?);
		Ok(expression)
	}

	fn parse_column_definition(&mut self, in_parens: bool) -> Result<ColumnDefinition, ParseError> {
		let name = self.parse_identifier("column name")?;
		let data_type = self.parse_data_type()?;
		let specs = self.take_until_boundary(in_parens)?;
		Ok(ColumnDefinition {
			name,
			data_type,
			specs,
		})
	}

	fn parse_data_type(&mut self) -> Result<DataType, ParseError> {
		if self.peek().kind != TokenKind::Word {
			return Err(self.error("data type"));
		}
		let mut data_type = DataType::new(self.advance().text);

		self.parse_type_modifiers(&mut data_type);
		if self.check(&TokenKind::OpenParen) {
			data_type.arguments = self.parse_type_arguments()?;
			self.parse_type_modifiers(&mut data_type);
		}

		if self.check_keyword(Keyword::Character) && self.peek_nth(1).is_keyword(Keyword::Set) {
			self.advance();
			self.advance();
			data_type.character_set = Some(self.parse_identifier("character set")?);
		} else if self.try_consume_keyword(Keyword::Charset) {
			data_type.character_set = Some(self.parse_identifier("character set")?);
		}

		Ok(data_type)
	}

	fn parse_type_modifiers(&mut self, data_type: &mut DataType) {
		while matches!(
			self.peek().keyword(),
			Some(Keyword::Unsigned
				| Keyword::Signed | Keyword::Zerofill
				| Keyword::Precision | Keyword::Varying)
		) {
			let modifier = self.advance();
			data_type.name.push(' ');
			data_type.name.push_str(&modifier.text);
		}
	}

	fn parse_type_arguments(&mut self) -> Result<Vec<String>, ParseError> {
		self.expect(TokenKind::OpenParen, "'('")?;

		let mut arguments = Vec::new();
		let mut current: Vec<String> = Vec::new();
		loop {
			match self.peek().kind {
				TokenKind::Eof => return Err(self.error("')'")),
				TokenKind::OpenParen => return Err(self.error("type argument")),
				TokenKind::CloseParen => {
					self.advance();
					if !current.is_empty() {
						arguments.push(current.join(" "));
					}
					break;
				}
				TokenKind::Comma => {
					self.advance();
					arguments.push(current.join(" "));
					current.clear();
				}
				_ => current.push(self.advance().text),
			}
		}

		Ok(arguments)
	}

	fn parse_if_exists(&mut self) -> bool {
		if self.check_keyword(Keyword::If) && self.peek_nth(1).is_keyword(Keyword::Exists) {
			self.advance();
			self.advance();
			return true;
		}
		false
	}

	fn parse_object_name(&mut self) -> Result<ObjectName, ParseError> {
		let mut parts = vec![self.parse_identifier("table name")?];
		while self.check(&TokenKind::Dot) {
			self.advance();
			parts.push(self.parse_identifier("table name")?);
		}
		Ok(ObjectName(parts))
	}

	fn parse_identifier(&mut self, expected: &'static str) -> Result<String, ParseError> {
		let token = self.peek();
		let name = match &token.kind {
			TokenKind::Word => token.text.clone(),
			TokenKind::QuotedIdent(name) | TokenKind::DoubleQuoted(name) => name.clone(),
			_ => return Err(self.error(expected)),
		};
		self.advance();
		Ok(name)
	}

	fn skip_expression(&mut self) -> Result<(), ParseError> {
		self.take_until_boundary(false).map(|_| ())
	}

	/// Consume tokens up to the next top-level `,`, `;` or end of input and return their raw text.
	/// With `in_parens` an unmatched `)` also ends the run.
	fn take_until_boundary(&mut self, in_parens: bool) -> Result<Vec<String>, ParseError> {
		let mut taken = Vec::new();
		let mut depth = 0usize;
		loop {
			match self.peek().kind {
				TokenKind::Eof | TokenKind::Semicolon => break,
				TokenKind::Comma if depth == 0 => break,
				TokenKind::CloseParen if depth == 0 => {
					if in_parens {
						break;
					}
					return Err(self.error("',' or end of statement"));
				}
				TokenKind::OpenParen => depth += 1,
				TokenKind::CloseParen => depth -= 1,
				_ => {}
			}
			taken.push(self.advance().text);
		}

		if depth > 0 {
			return Err(self.error("')'"));
		}
		Ok(taken)
	}

	fn peek(&self) -> &Token {
		self.peek_nth(0)
	}

	fn peek_nth(&self, n: usize) -> &Token {
		let index = (self.position + n).min(self.tokens.len() - 1);
		&self.tokens[index]
	}

	fn advance(&mut self) -> Token {
		let token = self.peek().clone();
		if !token.is_eof() {
			self.position += 1;
		}
		token
	}

	fn check(&self, kind: &TokenKind) -> bool {
		&self.peek().kind == kind
	}

	fn check_keyword(&self, keyword: Keyword) -> bool {
		self.peek().is_keyword(keyword)
	}

	fn try_consume_keyword(&mut self, keyword: Keyword) -> bool {
		if self.check_keyword(keyword) {
			self.advance();
			return true;
		}
		false
	}

	fn expect_keyword(&mut self, keyword: Keyword, expected: &'static str) -> Result<Token, ParseError> {
		if self.check_keyword(keyword) {
			return Ok(self.advance());
		}
		Err(self.error(expected))
	}

	fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
		if self.check(&kind) {
			return Ok(self.advance());
		}
		Err(self.error(expected))
	}

	fn error(&self, expected: &'static str) -> ParseError {
		let token = self.peek();
		if token.is_eof() {
			return ParseError::UnexpectedEof {
				expected,
			};
		}
		ParseError::UnexpectedToken {
			found: token.to_string(),
			expected,
			line: token.span.line,
			column: token.span.column,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::lexer::Lexer;

	fn parse(sql: &str) -> Result<Statement, ParseError> {
		let tokens = Lexer::new(sql).tokenize()?;
		Parser::new(tokens).parse()
	}

	fn parse_alter(sql: &str) -> AlterStatement {
		match parse(sql).unwrap() {
			Statement::Alter(alter) => alter,
			other => panic!("expected ALTER statement, got {other:?}"),
		}
	}

	#[test]
	fn test_add_column() {
		let alter = parse_alter("ALTER TABLE t ADD COLUMN age INT(4) DEFAULT '18' COMMENT 'user age'");
		assert_eq!(alter.table, ObjectName(vec!["t".into()]));
		assert_eq!(alter.expressions.len(), 1);

		let expr = &alter.expressions[0];
		assert_eq!(expr.operation, AlterOperation::Add);
		assert_eq!(expr.column_name.as_deref(), Some("age"));
		let def = &expr.column_definitions[0];
		assert_eq!(def.data_type.name, "INT");
		assert_eq!(def.data_type.arguments, vec!["4"]);
		assert_eq!(def.specs, vec!["DEFAULT", "'18'", "COMMENT", "'user age'"]);
	}

	#[test]
	fn test_add_without_column_keyword() {
		let alter = parse_alter("alter table db.t add c1 decimal(10, 2) unsigned not null");
		assert_eq!(alter.table.to_string(), "db.t");
		let def = &alter.expressions[0].column_definitions[0];
		assert_eq!(def.name, "c1");
		assert_eq!(def.data_type.name, "decimal unsigned");
		assert_eq!(def.data_type.arguments, vec!["10", "2"]);
		assert_eq!(def.specs, vec!["not", "null"]);
	}

	#[test]
	fn test_add_parenthesised_definitions() {
		let alter = parse_alter("ALTER TABLE t ADD (a INT DEFAULT 1, b VARCHAR(10))");
		let expr = &alter.expressions[0];
		assert_eq!(expr.operation, AlterOperation::Add);
		assert_eq!(expr.column_definitions.len(), 2);
		assert_eq!(expr.column_definitions[0].specs, vec!["DEFAULT", "1"]);
		assert_eq!(expr.column_definitions[1].name, "b");
		assert!(expr.column_definitions[1].specs.is_empty());
	}

	#[test]
	fn test_quoted_identifiers_are_unquoted() {
		let alter = parse_alter("ALTER TABLE `db`.`t` ADD COLUMN `full name` TEXT");
		assert_eq!(alter.table, ObjectName(vec!["db".into(), "t".into()]));
		assert_eq!(alter.expressions[0].column_name.as_deref(), Some("full name"));
	}

	#[test]
	fn test_character_set_is_not_a_spec() {
		let alter = parse_alter("ALTER TABLE t ADD name VARCHAR(32) CHARACTER SET utf8mb4 COMMENT 'n'");
		let def = &alter.expressions[0].column_definitions[0];
		assert_eq!(def.data_type.character_set.as_deref(), Some("utf8mb4"));
		assert_eq!(def.specs, vec!["COMMENT", "'n'"]);
	}

	#[test]
	fn test_nested_parens_in_specs() {
		let alter = parse_alter("ALTER TABLE t ADD ts DATETIME(3) DEFAULT CURRENT_TIMESTAMP(3), DROP x");
		assert_eq!(alter.expressions.len(), 2);
		assert_eq!(alter.expressions[0].column_definitions[0].specs, vec!["DEFAULT", "CURRENT_TIMESTAMP", "(", "3", ")"]);
		assert_eq!(alter.expressions[1].operation, AlterOperation::Drop);
	}

	#[test]
	fn test_drop_column() {
		let alter = parse_alter("ALTER TABLE t DROP COLUMN legacy_flag");
		let expr = &alter.expressions[0];
		assert_eq!(expr.operation, AlterOperation::Drop);
		assert_eq!(expr.column_name.as_deref(), Some("legacy_flag"));
	}

	#[test]
	fn test_drop_index_and_keys() {
		let alter = parse_alter("ALTER TABLE t DROP INDEX idx_a, DROP PRIMARY KEY, DROP FOREIGN KEY fk_b");
		let ops: Vec<_> = alter.expressions.iter().map(|e| e.operation.clone()).collect();
		assert_eq!(
			ops,
			vec![AlterOperation::DropIndex, AlterOperation::DropPrimaryKey, AlterOperation::DropConstraint]
		);
	}

	#[test]
	fn test_change_column() {
		let alter = parse_alter("ALTER TABLE t CHANGE COLUMN a b BIGINT NOT NULL");
		let expr = &alter.expressions[0];
		assert_eq!(expr.operation, AlterOperation::Change);
		assert_eq!(expr.old_column_name.as_deref(), Some("a"));
		assert_eq!(expr.column_name.as_deref(), Some("b"));
		assert_eq!(expr.column_definitions[0].data_type.name, "BIGINT");
	}

	#[test]
	fn test_rename_column() {
		let alter = parse_alter("ALTER TABLE t RENAME COLUMN a TO b");
		let expr = &alter.expressions[0];
		assert_eq!(expr.operation, AlterOperation::Rename);
		assert_eq!(expr.old_column_name.as_deref(), Some("a"));
		assert_eq!(expr.column_name.as_deref(), Some("b"));
	}

	#[test]
	fn test_rename_without_column_keyword() {
		let alter = parse_alter("ALTER TABLE t RENAME a TO b");
		assert_eq!(alter.expressions[0].operation, AlterOperation::Rename);
		assert_eq!(alter.expressions[0].old_column_name.as_deref(), Some("a"));
	}

	#[test]
	fn test_rename_table() {
		let alter = parse_alter("ALTER TABLE t RENAME TO t2");
		assert_eq!(alter.expressions[0].operation, AlterOperation::RenameTable);
	}

	#[test]
	fn test_modify_and_other_operations() {
		let alter = parse_alter("ALTER TABLE t MODIFY COLUMN a INT, ENGINE = InnoDB, ADD INDEX idx (a, b)");
		let ops: Vec<_> = alter.expressions.iter().map(|e| e.operation.clone()).collect();
		assert_eq!(
			ops,
			vec![AlterOperation::Modify, AlterOperation::Other("ENGINE".into()), AlterOperation::AddIndex]
		);
	}

	#[test]
	fn test_other_statement() {
		assert_eq!(
			parse("create table t (id int)").unwrap(),
			Statement::Other {
				keyword: "CREATE".into()
			}
		);
	}

	#[test]
	fn test_trailing_semicolon() {
		let alter = parse_alter("ALTER TABLE t DROP COLUMN a;");
		assert_eq!(alter.expressions.len(), 1);
	}

	#[test]
	fn test_error_truncated_add() {
		assert_eq!(
			parse("ALTER TABLE t ADD COLUMN"),
			Err(ParseError::UnexpectedEof {
				expected: "column name"
			})
		);
	}

	#[test]
	fn test_error_missing_type() {
		assert_eq!(
			parse("ALTER TABLE t ADD COLUMN age"),
			Err(ParseError::UnexpectedEof {
				expected: "data type"
			})
		);
	}

	#[test]
	fn test_error_unclosed_type_arguments() {
		assert!(parse("ALTER TABLE t ADD c VARCHAR(10").is_err());
	}

	#[test]
	fn test_error_garbage_after_drop() {
		assert!(matches!(
			parse("ALTER TABLE t DROP COLUMN a b"),
			Err(ParseError::UnexpectedToken {
				line: 1,
				column: 29,
				..
			})
		));
	}

	#[test]
	fn test_error_empty() {
		assert_eq!(parse("  ;  "), Err(ParseError::Empty));
	}

	#[test]
	fn test_lex_error_is_parse_error() {
		assert!(matches!(parse("ALTER TABLE t ADD c INT COMMENT 'x"), Err(ParseError::Lex(_))));
	}
}

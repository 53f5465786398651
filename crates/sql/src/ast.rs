// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	Alter(AlterStatement),
	/// Any statement other than `ALTER TABLE`; only its leading keyword is kept.
	Other {
		keyword: String,
	},
}

impl Statement {
	pub fn as_alter(&self) -> Option<&AlterStatement> {
		match self {
			Statement::Alter(alter) => Some(alter),
			Statement::Other {
				..
			} => None,
		}
	}
}

/// A possibly qualified object name, e.g. `db.users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectName(pub Vec<String>);

impl fmt::Display for ObjectName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.join("."))
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlterStatement {
	pub table: ObjectName,
	pub if_exists: bool,
	pub expressions: Vec<AlterExpression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterOperation {
	Add,
	Drop,
	Change,
	Rename,
	Modify,
	AlterColumn,
	RenameTable,
	AddIndex,
	DropIndex,
	AddConstraint,
	DropConstraint,
	DropPrimaryKey,
	Other(String),
}

impl fmt::Display for AlterOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AlterOperation::Add => f.write_str("ADD"),
			AlterOperation::Drop => f.write_str("DROP"),
			AlterOperation::Change => f.write_str("CHANGE"),
			AlterOperation::Rename => f.write_str("RENAME"),
			AlterOperation::Modify => f.write_str("MODIFY"),
			AlterOperation::AlterColumn => f.write_str("ALTER"),
			AlterOperation::RenameTable => f.write_str("RENAME_TABLE"),
			AlterOperation::AddIndex => f.write_str("ADD_INDEX"),
			AlterOperation::DropIndex => f.write_str("DROP_INDEX"),
			AlterOperation::AddConstraint => f.write_str("ADD_CONSTRAINT"),
			AlterOperation::DropConstraint => f.write_str("DROP_CONSTRAINT"),
			AlterOperation::DropPrimaryKey => f.write_str("DROP_PRIMARY_KEY"),
			AlterOperation::Other(keyword) => f.write_str(keyword),
		}
	}
}

/// One alteration of an `ALTER TABLE` statement.
///
/// Field usage depends on the operation:
/// - `ADD`: `column_name` is the first defined column, `column_definitions` holds every definition.
/// - `DROP`: `column_name` is the dropped column.
/// - `CHANGE`: `old_column_name` is renamed to `column_name`, which also names the single definition.
/// - `RENAME`: `old_column_name` is renamed to `column_name`.
/// - `MODIFY`: `column_name` plus its new definition.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterExpression {
	pub operation: AlterOperation,
	pub column_name: Option<String>,
	pub old_column_name: Option<String>,
	pub column_definitions: Vec<ColumnDefinition>,
}

impl AlterExpression {
	pub fn new(operation: AlterOperation) -> Self {
		Self {
			operation,
			column_name: None,
			old_column_name: None,
			column_definitions: Vec::new(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
	pub name: String,
	pub data_type: DataType,
	/// Raw text of every token following the type, e.g. `["NOT", "NULL", "DEFAULT", "'0'"]`.
	pub specs: Vec<String>,
}

impl fmt::Display for ColumnDefinition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.name, self.data_type)?;
		for spec in &self.specs {
			write!(f, " {spec}")?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType {
	/// Type name including modifiers, e.g. `INT UNSIGNED` or `DOUBLE PRECISION`.
	pub name: String,
	/// Raw text of each parenthesised argument.
	pub arguments: Vec<String>,
	pub character_set: Option<String>,
}

impl DataType {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			arguments: Vec::new(),
			character_set: None,
		}
	}
}

impl fmt::Display for DataType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)?;
		if !self.arguments.is_empty() {
			write!(f, "({})", self.arguments.join(", "))?;
		}
		if let Some(charset) = &self.character_set {
			write!(f, " CHARACTER SET {charset}")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_data_type_display() {
		let mut ty = DataType::new("DECIMAL");
		ty.arguments = vec!["10".into(), "2".into()];
		assert_eq!(ty.to_string(), "DECIMAL(10, 2)");
	}

	#[test]
	fn test_column_definition_display() {
		let def = ColumnDefinition {
			name: "age".into(),
			data_type: DataType::new("INT"),
			specs: vec!["DEFAULT".into(), "'18'".into()],
		};
		assert_eq!(def.to_string(), "age INT DEFAULT '18'");
	}

	#[test]
	fn test_object_name_display() {
		assert_eq!(ObjectName(vec!["db".into(), "users".into()]).to_string(), "db.users");
	}
}

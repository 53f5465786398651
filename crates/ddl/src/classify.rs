// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use schemaflow_sql::{AlterExpression, AlterOperation, ColumnDefinition};

use crate::{Error, Result};

/// An alter expression sorted by what Doris can do with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnAlteration<'a> {
	Add {
		/// The first declared column.
		definition: &'a ColumnDefinition,
		declarations: usize,
	},
	Drop {
		column: &'a str,
	},
	Change {
		old_name: &'a str,
		new_name: &'a str,
		definition: &'a ColumnDefinition,
	},
	Rename {
		old_name: &'a str,
		new_name: &'a str,
	},
	Unsupported {
		operation: &'a AlterOperation,
	},
}

pub fn classify(expression: &AlterExpression) -> Result<ColumnAlteration<'_>> {
	let operation = &expression.operation;
	let alteration = match operation {
		AlterOperation::Add => ColumnAlteration::Add {
			definition: first_definition(expression)?,
			declarations: expression.column_definitions.len(),
		},
		AlterOperation::Drop => ColumnAlteration::Drop {
			column: column_name(expression)?,
		},
		AlterOperation::Change => ColumnAlteration::Change {
			old_name: old_column_name(expression)?,
			new_name: column_name(expression)?,
			definition: first_definition(expression)?,
		},
		AlterOperation::Rename => ColumnAlteration::Rename {
			old_name: old_column_name(expression)?,
			new_name: column_name(expression)?,
		},
		AlterOperation::Modify
		| AlterOperation::AlterColumn
		| AlterOperation::RenameTable
		| AlterOperation::AddIndex
		| AlterOperation::DropIndex
		| AlterOperation::AddConstraint
		| AlterOperation::DropConstraint
		| AlterOperation::DropPrimaryKey
		| AlterOperation::Other(_) => ColumnAlteration::Unsupported {
			operation,
		},
	};
	Ok(alteration)
}

fn first_definition(expression: &AlterExpression) -> Result<&ColumnDefinition> {
	expression.column_definitions.first().ok_or_else(|| Error::MissingColumnDefinition {
		operation: expression.operation.to_string(),
	})
}

fn column_name(expression: &AlterExpression) -> Result<&str> {
	expression.column_name.as_deref().ok_or_else(|| Error::IncompleteExpression {
		operation: expression.operation.to_string(),
		missing: "column name",
	})
}

fn old_column_name(expression: &AlterExpression) -> Result<&str> {
	expression.old_column_name.as_deref().ok_or_else(|| Error::IncompleteExpression {
		operation: expression.operation.to_string(),
		missing: "old column name",
	})
}

#[cfg(test)]
mod tests {
	use schemaflow_sql::DataType;

	use super::*;

	fn definition(name: &str) -> ColumnDefinition {
		ColumnDefinition {
			name: name.into(),
			data_type: DataType::new("INT"),
			specs: vec![],
		}
	}

	#[test]
	fn test_add() {
		let mut expression = AlterExpression::new(AlterOperation::Add);
		expression.column_definitions = vec![definition("a"), definition("b")];

		let ColumnAlteration::Add {
			definition,
			declarations,
		} = classify(&expression).unwrap()
		else {
			panic!("expected ADD");
		};
		assert_eq!(definition.name, "a");
		assert_eq!(declarations, 2);
	}

	#[test]
	fn test_add_without_definition() {
		let expression = AlterExpression::new(AlterOperation::Add);
		assert!(matches!(classify(&expression), Err(Error::MissingColumnDefinition { .. })));
	}

	#[test]
	fn test_change() {
		let mut expression = AlterExpression::new(AlterOperation::Change);
		expression.old_column_name = Some("a".into());
		expression.column_name = Some("b".into());
		expression.column_definitions = vec![definition("b")];

		assert!(matches!(
			classify(&expression).unwrap(),
			ColumnAlteration::Change {
				old_name: "a",
				new_name: "b",
				..
			}
		));
	}

	#[test]
	fn test_rename_without_old_name() {
		let mut expression = AlterExpression::new(AlterOperation::Rename);
		expression.column_name = Some("b".into());
		assert!(matches!(
			classify(&expression),
			Err(Error::IncompleteExpression {
				missing: "old column name",
				..
			})
		));
	}

	#[test]
	fn test_everything_else_is_unsupported() {
		for operation in [
			AlterOperation::Modify,
			AlterOperation::AlterColumn,
			AlterOperation::RenameTable,
			AlterOperation::AddIndex,
			AlterOperation::DropPrimaryKey,
			AlterOperation::Other("ENGINE".into()),
		] {
			let expression = AlterExpression::new(operation.clone());
			assert_eq!(
				classify(&expression).unwrap(),
				ColumnAlteration::Unsupported {
					operation: &operation
				}
			);
		}
	}
}

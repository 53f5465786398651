// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Doris schema change statements.

/// A column to be added, with its Doris type already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
	pub name: String,
	pub target_type: String,
	pub default_value: Option<String>,
	pub comment: Option<String>,
}

impl FieldSchema {
	pub fn new(name: impl Into<String>, target_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			target_type: target_type.into(),
			default_value: None,
			comment: None,
		}
	}

	pub fn with_default_value(mut self, default_value: impl Into<String>) -> Self {
		self.default_value = Some(default_value.into());
		self
	}

	pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
		self.comment = Some(comment.into());
		self
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdlBuilder {
	quote_identifiers: bool,
}

impl Default for DdlBuilder {
	fn default() -> Self {
		Self::new(true)
	}
}

impl DdlBuilder {
	pub fn new(quote_identifiers: bool) -> Self {
		Self {
			quote_identifiers,
		}
	}

	pub fn add_column(&self, table: &str, field: &FieldSchema) -> String {
		let mut ddl = format!(
			"ALTER TABLE {} ADD COLUMN {} {}",
			self.table(table),
			self.identifier(&field.name),
			field.target_type
		);
		if let Some(default_value) = &field.default_value {
			ddl.push_str(" DEFAULT ");
			ddl.push_str(&quote_default_value(default_value));
		}
		if let Some(comment) = field.comment.as_deref().filter(|c| !c.trim().is_empty()) {
			ddl.push_str(" COMMENT ");
			ddl.push_str(&quote_literal(comment));
		}
		ddl
	}

	pub fn drop_column(&self, table: &str, column: &str) -> String {
		format!("ALTER TABLE {} DROP COLUMN {}", self.table(table), self.identifier(column))
	}

	pub fn rename_column(&self, table: &str, old_name: &str, new_name: &str) -> String {
		format!(
			"ALTER TABLE {} RENAME COLUMN {} {}",
			self.table(table),
			self.identifier(old_name),
			self.identifier(new_name)
		)
	}

	/// `db.tbl` is quoted per part. Parts that are already back-quoted are kept.
	fn table(&self, table: &str) -> String {
		if !self.quote_identifiers {
			return table.to_string();
		}
		table.split('.')
			.map(|part| {
				if part.len() > 1 && part.starts_with('`') && part.ends_with('`') {
					part.to_string()
				} else {
					quote_identifier(part)
				}
			})
			.collect::<Vec<_>>()
			.join(".")
	}

	fn identifier(&self, name: &str) -> String {
		if self.quote_identifiers {
			quote_identifier(name)
		} else {
			name.to_string()
		}
	}
}

pub fn build_add_column_ddl(table: &str, field: &FieldSchema) -> String {
	DdlBuilder::default().add_column(table, field)
}

pub fn build_drop_column_ddl(table: &str, column: &str) -> String {
	DdlBuilder::default().drop_column(table, column)
}

pub fn build_rename_column_ddl(table: &str, old_name: &str, new_name: &str) -> String {
	DdlBuilder::default().rename_column(table, old_name, new_name)
}

fn quote_identifier(name: &str) -> String {
	format!("`{}`", name.replace('`', "``"))
}

fn quote_default_value(value: &str) -> String {
	if value.eq_ignore_ascii_case("current_timestamp") || value.eq_ignore_ascii_case("null") {
		return value.to_string();
	}
	quote_literal(value)
}

/// Backslash escapes `\` and `'` inside single quotes.
fn quote_literal(value: &str) -> String {
	format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

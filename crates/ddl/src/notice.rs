// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

/// A recoverable condition met while translating a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
	/// The statement could not be parsed; nothing was produced.
	SyntaxError {
		message: String,
	},
	/// The statement is not an `ALTER TABLE`.
	UnsupportedStatement {
		keyword: String,
	},
	/// The alteration has no Doris counterpart and was skipped.
	UnsupportedOperation {
		operation: String,
	},
	/// An ADD declared several columns; only the first was translated.
	AmbiguousTypeDeclaration {
		column: String,
		declarations: usize,
	},
	/// A CHANGE was applied as a plain rename, its type change was dropped.
	TypeChangeIgnored {
		old_name: String,
		new_name: String,
		data_type: String,
	},
	/// A DEFAULT or COMMENT keyword ended the column definition.
	MissingSpecValue {
		column: String,
		keyword: &'static str,
	},
}

impl Display for Notice {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Notice::SyntaxError {
				message,
			} => write!(f, "failed to parse DDL: {message}"),
			Notice::UnsupportedStatement {
				keyword,
			} => write!(f, "unsupported DDL statement '{keyword}'"),
			Notice::UnsupportedOperation {
				operation,
			} => write!(f, "unsupported alter operation '{operation}'"),
			Notice::AmbiguousTypeDeclaration {
				column,
				declarations,
			} => write!(f, "ADD declares {declarations} columns, only '{column}' is translated"),
			Notice::TypeChangeIgnored {
				old_name,
				new_name,
				data_type,
			} => write!(f, "CHANGE of '{old_name}' applied as rename to '{new_name}', type {data_type} ignored"),
			Notice::MissingSpecValue {
				column,
				keyword,
			} => write!(f, "{keyword} of column '{column}' has no value"),
		}
	}
}

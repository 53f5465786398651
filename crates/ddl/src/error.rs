// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use schemaflow_type::TypeError;
use thiserror::Error;

/// Failures that abort the translation of a whole statement.
///
/// Recoverable conditions (syntax errors, unsupported operations) are not errors,
/// they are reported as [`crate::Notice`]s next to the produced DDL.
#[derive(Debug, Error)]
pub enum Error {
	#[error("malformed numeric argument '{argument}' in the type of column '{column}'")]
	MalformedNumericArgument {
		column: String,
		argument: String,
	},

	#[error("cannot resolve the type of column '{column}': {source}")]
	TypeResolution {
		column: String,
		#[source]
		source: TypeError,
	},

	#[error("{operation} expression carries no column definition")]
	MissingColumnDefinition {
		operation: String,
	},

	#[error("{operation} expression has no {missing}")]
	IncompleteExpression {
		operation: String,
		missing: &'static str,
	},

	#[error("invalid translator configuration: {0}")]
	Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

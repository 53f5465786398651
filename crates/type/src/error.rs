// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use thiserror::Error;

use crate::connector::SourceConnector;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
	#[error("no type mapping for connector '{0}'")]
	UnsupportedConnector(SourceConnector),

	#[error("unsupported {connector} type '{type_name}'")]
	UnsupportedType {
		connector: SourceConnector,
		type_name: String,
	},

	#[error("{connector} type '{type_name}' requires a length")]
	MissingLength {
		connector: SourceConnector,
		type_name: String,
	},

	#[error("unknown source connector '{0}'")]
	UnknownConnector(String),
}

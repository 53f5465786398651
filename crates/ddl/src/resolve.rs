// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use schemaflow_sql::ColumnDefinition;
use schemaflow_type::{SourceConnector, TypeResolver};

use crate::{Error, Result};

/// Length and scale of a declared type.
///
/// The first argument is the length, the second is the scale only when there are exactly two.
pub fn numeric_arguments(definition: &ColumnDefinition) -> Result<(Option<u32>, Option<u32>)> {
	let arguments = &definition.data_type.arguments;
	let Some(first) = arguments.first() else {
		return Ok((None, None));
	};

	let length = parse_argument(definition, first)?;
	let scale = match arguments.as_slice() {
		[_, scale] => Some(parse_argument(definition, scale)?),
		_ => None,
	};
	Ok((Some(length), scale))
}

fn parse_argument(definition: &ColumnDefinition, argument: &str) -> Result<u32> {
	argument.trim().parse::<u32>().map_err(|_| Error::MalformedNumericArgument {
		column: definition.name.clone(),
		argument: argument.to_string(),
	})
}

pub fn resolve_target_type(
	resolver: &dyn TypeResolver,
	connector: SourceConnector,
	definition: &ColumnDefinition,
) -> Result<String> {
	let (length, scale) = numeric_arguments(definition)?;
	resolver.resolve(connector, &definition.data_type.name, length, scale).map_err(|source| {
		Error::TypeResolution {
			column: definition.name.clone(),
			source,
		}
	})
}

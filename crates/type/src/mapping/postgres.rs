// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::SourceType;
use crate::{SourceConnector, TypeError, doris};

const CONNECTOR: SourceConnector = SourceConnector::Postgres;

const DEFAULT_TIMESTAMP_PRECISION: u32 = 6;

pub(crate) fn to_doris(ty: &SourceType) -> Result<String, TypeError> {
	let mapped = match ty.base.as_str() {
		"BOOL" | "BOOLEAN" => doris::BOOLEAN.to_string(),
		"INT2" | "SMALLINT" | "SMALLSERIAL" | "SERIAL2" => doris::SMALLINT.to_string(),
		"INT4" | "INT" | "INTEGER" | "SERIAL" | "SERIAL4" => doris::INT.to_string(),
		"INT8" | "BIGINT" | "BIGSERIAL" | "SERIAL8" => doris::BIGINT.to_string(),
		"FLOAT4" | "REAL" => doris::FLOAT.to_string(),
		"FLOAT8" | "DOUBLE PRECISION" | "FLOAT" => doris::DOUBLE.to_string(),

		// numeric without a precision is unbounded
		"NUMERIC" | "DECIMAL" => match ty.length {
			Some(precision) => doris::decimal(precision, ty.scale.unwrap_or(0)),
			None => doris::STRING.to_string(),
		},

		"DATE" => doris::DATEV2.to_string(),
		"TIMESTAMP" | "TIMESTAMPTZ" => doris::datetime(ty.length.unwrap_or(DEFAULT_TIMESTAMP_PRECISION)),

		"BPCHAR" | "CHAR" | "CHARACTER" => doris::char_type(ty.length.unwrap_or(1)),
		"VARCHAR" | "CHARACTER VARYING" => match ty.length {
			Some(length) => doris::varchar(length),
			None => doris::STRING.to_string(),
		},

		"JSON" | "JSONB" => doris::JSONB.to_string(),

		"TEXT" | "UUID" | "BYTEA" | "TIME" | "TIMETZ" | "INTERVAL" | "INET" | "CIDR" | "MACADDR" | "XML"
		| "POINT" | "MONEY" | "BIT" | "VARBIT" => doris::STRING.to_string(),

		_ => return Err(ty.unsupported(CONNECTOR)),
	};
	Ok(mapped)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn map(type_name: &str, length: Option<u32>, scale: Option<u32>) -> Result<String, TypeError> {
		to_doris(&SourceType::new(type_name, length, scale))
	}

	#[test]
	fn test_integer_aliases() {
		assert_eq!(map("int2", None, None).unwrap(), "SMALLINT");
		assert_eq!(map("integer", None, None).unwrap(), "INT");
		assert_eq!(map("bigserial", None, None).unwrap(), "BIGINT");
	}

	#[test]
	fn test_numeric() {
		assert_eq!(map("numeric", Some(12), Some(4)).unwrap(), "DECIMALV3(12,4)");
		assert_eq!(map("numeric", None, None).unwrap(), "STRING");
	}

	#[test]
	fn test_character() {
		assert_eq!(map("character varying", Some(20), None).unwrap(), "VARCHAR(60)");
		assert_eq!(map("varchar", None, None).unwrap(), "STRING");
		assert_eq!(map("bpchar", Some(3), None).unwrap(), "CHAR(9)");
	}

	#[test]
	fn test_misc() {
		assert_eq!(map("timestamptz", None, None).unwrap(), "DATETIMEV2(6)");
		assert_eq!(map("jsonb", None, None).unwrap(), "JSONB");
		assert_eq!(map("uuid", None, None).unwrap(), "STRING");
		assert_eq!(map("double precision", None, None).unwrap(), "DOUBLE");
	}

	#[test]
	fn test_unknown_type() {
		assert!(matches!(map("tsvector", None, None), Err(TypeError::UnsupportedType { .. })));
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::SourceType;
use crate::{SourceConnector, TypeError, doris};

const CONNECTOR: SourceConnector = SourceConnector::Mysql;

const DEFAULT_DECIMAL_PRECISION: u32 = 10;

pub(crate) fn to_doris(ty: &SourceType) -> Result<String, TypeError> {
	let mapped = match ty.base.as_str() {
		"BIT" | "BOOL" | "BOOLEAN" => doris::BOOLEAN.to_string(),
		"TINYINT" if ty.length == Some(1) && !ty.unsigned => doris::BOOLEAN.to_string(),

		// Unsigned integers widen one step
		"TINYINT" if ty.unsigned => doris::SMALLINT.to_string(),
		"TINYINT" => doris::TINYINT.to_string(),
		"SMALLINT" if ty.unsigned => doris::INT.to_string(),
		"SMALLINT" => doris::SMALLINT.to_string(),
		"MEDIUMINT" | "YEAR" => doris::INT.to_string(),
		"INT" | "INTEGER" if ty.unsigned => doris::BIGINT.to_string(),
		"INT" | "INTEGER" => doris::INT.to_string(),
		"BIGINT" if ty.unsigned => doris::LARGEINT.to_string(),
		"BIGINT" => doris::BIGINT.to_string(),

		"FLOAT" => doris::FLOAT.to_string(),
		"DOUBLE" | "DOUBLE PRECISION" | "REAL" => doris::DOUBLE.to_string(),
		"DECIMAL" | "DEC" | "NUMERIC" | "FIXED" => {
			doris::decimal(ty.length.unwrap_or(DEFAULT_DECIMAL_PRECISION), ty.scale.unwrap_or(0))
		}

		"DATE" => doris::DATEV2.to_string(),
		"DATETIME" | "TIMESTAMP" => doris::datetime(ty.length.unwrap_or(0)),

		"CHAR" | "CHARACTER" => doris::char_type(ty.length.unwrap_or(1)),
		"VARCHAR" | "CHARACTER VARYING" => doris::varchar(ty.require_length(CONNECTOR)?),

		"TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB"
		| "LONGBLOB" | "BINARY" | "VARBINARY" | "ENUM" | "SET" | "TIME" | "GEOMETRY" | "POINT"
		| "LINESTRING" | "POLYGON" => doris::STRING.to_string(),

		"JSON" => doris::JSONB.to_string(),

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
	fn test_integers() {
		assert_eq!(map("INT", Some(4), None).unwrap(), "INT");
		assert_eq!(map("int", None, None).unwrap(), "INT");
		assert_eq!(map("INT UNSIGNED", None, None).unwrap(), "BIGINT");
		assert_eq!(map("BIGINT UNSIGNED", Some(20), None).unwrap(), "LARGEINT");
		assert_eq!(map("TINYINT UNSIGNED", None, None).unwrap(), "SMALLINT");
		assert_eq!(map("MEDIUMINT", None, None).unwrap(), "INT");
	}

	#[test]
	fn test_tinyint_one_is_boolean() {
		assert_eq!(map("TINYINT", Some(1), None).unwrap(), "BOOLEAN");
		assert_eq!(map("TINYINT", Some(4), None).unwrap(), "TINYINT");
		assert_eq!(map("BIT", None, None).unwrap(), "BOOLEAN");
	}

	#[test]
	fn test_decimal() {
		assert_eq!(map("DECIMAL", Some(10), Some(2)).unwrap(), "DECIMALV3(10,2)");
		assert_eq!(map("DECIMAL", None, None).unwrap(), "DECIMALV3(10,0)");
		assert_eq!(map("DECIMAL", Some(65), Some(30)).unwrap(), "STRING");
	}

	#[test]
	fn test_temporal() {
		assert_eq!(map("DATE", None, None).unwrap(), "DATEV2");
		assert_eq!(map("DATETIME", None, None).unwrap(), "DATETIMEV2(0)");
		assert_eq!(map("TIMESTAMP", Some(3), None).unwrap(), "DATETIMEV2(3)");
		assert_eq!(map("TIME", None, None).unwrap(), "STRING");
	}

	#[test]
	fn test_character() {
		assert_eq!(map("CHAR", Some(10), None).unwrap(), "CHAR(30)");
		assert_eq!(map("VARCHAR", Some(255), None).unwrap(), "VARCHAR(765)");
		assert_eq!(map("LONGTEXT", None, None).unwrap(), "STRING");
		assert_eq!(map("JSON", None, None).unwrap(), "JSONB");
	}

	#[test]
	fn test_varchar_requires_length() {
		assert!(matches!(map("VARCHAR", None, None), Err(TypeError::MissingLength { .. })));
	}

	#[test]
	fn test_unknown_type() {
		assert_eq!(
			map("HYPERLOGLOG", None, None),
			Err(TypeError::UnsupportedType {
				connector: SourceConnector::Mysql,
				type_name: "HYPERLOGLOG".into()
			})
		);
	}
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::SourceType;
use crate::{SourceConnector, TypeError, doris};

const CONNECTOR: SourceConnector = SourceConnector::Oracle;

const DEFAULT_TIMESTAMP_PRECISION: u32 = 6;

pub(crate) fn to_doris(ty: &SourceType) -> Result<String, TypeError> {
	let mapped = match ty.base.as_str() {
		"NUMBER" => number(ty.length, ty.scale),
		"INTEGER" | "INT" | "SMALLINT" => doris::LARGEINT.to_string(),
		"BINARY_FLOAT" => doris::FLOAT.to_string(),
		"BINARY_DOUBLE" | "FLOAT" | "DOUBLE PRECISION" | "REAL" => doris::DOUBLE.to_string(),
		"DECIMAL" | "NUMERIC" => doris::decimal(ty.length.unwrap_or(doris::MAX_DECIMAL_PRECISION), ty.scale.unwrap_or(0)),

		// DATE carries a time of day
		"DATE" => doris::datetime(0),
		"TIMESTAMP" => doris::datetime(ty.length.unwrap_or(DEFAULT_TIMESTAMP_PRECISION)),

		"CHAR" | "NCHAR" | "CHARACTER" => doris::char_type(ty.length.unwrap_or(1)),
		"VARCHAR" | "VARCHAR2" | "NVARCHAR2" => doris::varchar(ty.require_length(CONNECTOR)?),

		"CLOB" | "NCLOB" | "BLOB" | "LONG" | "RAW" | "INTERVAL" | "XMLTYPE" | "ROWID" | "UROWID" | "BFILE" => {
			doris::STRING.to_string()
		}

		_ => return Err(ty.unsupported(CONNECTOR)),
	};
	Ok(mapped)
}

/// `NUMBER(p, s)` without a fraction picks the narrowest integer that holds `p` digits.
fn number(precision: Option<u32>, scale: Option<u32>) -> String {
	let Some(precision) = precision else {
		// unbounded NUMBER
		return doris::STRING.to_string();
	};
	let scale = scale.unwrap_or(0);
	if scale > 0 {
		return doris::decimal(precision, scale);
	}
	match precision {
		0..3 => doris::TINYINT,
		3..5 => doris::SMALLINT,
		5..10 => doris::INT,
		10..19 => doris::BIGINT,
		19..=38 => doris::LARGEINT,
		_ => doris::STRING,
	}
	.to_string()
}

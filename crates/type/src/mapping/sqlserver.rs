// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use super::SourceType;
use crate::{SourceConnector, TypeError, doris};

const CONNECTOR: SourceConnector = SourceConnector::SqlServer;

const DEFAULT_DECIMAL_PRECISION: u32 = 18;
const DEFAULT_DATETIME2_PRECISION: u32 = 7;

pub(crate) fn to_doris(ty: &SourceType) -> Result<String, TypeError> {
	let mapped = match ty.base.as_str() {
		"BIT" => doris::BOOLEAN.to_string(),
		// tinyint is unsigned
		"TINYINT" | "SMALLINT" => doris::SMALLINT.to_string(),
		"INT" => doris::INT.to_string(),
		"BIGINT" => doris::BIGINT.to_string(),
		"REAL" => doris::FLOAT.to_string(),
		"FLOAT" => doris::DOUBLE.to_string(),
		"DECIMAL" | "NUMERIC" => {
			doris::decimal(ty.length.unwrap_or(DEFAULT_DECIMAL_PRECISION), ty.scale.unwrap_or(0))
		}
		"MONEY" => doris::decimal(19, 4),
		"SMALLMONEY" => doris::decimal(10, 4),

		"DATE" => doris::DATEV2.to_string(),
		"SMALLDATETIME" => doris::datetime(0),
		"DATETIME" => doris::datetime(3),
		"DATETIME2" | "DATETIMEOFFSET" => doris::datetime(ty.length.unwrap_or(DEFAULT_DATETIME2_PRECISION)),

		"CHAR" | "NCHAR" => doris::char_type(ty.length.unwrap_or(1)),
		"VARCHAR" | "NVARCHAR" => doris::varchar(ty.length.unwrap_or(1)),

		"TEXT" | "NTEXT" | "XML" | "UNIQUEIDENTIFIER" | "TIME" | "BINARY" | "VARBINARY" | "IMAGE" => {
			doris::STRING.to_string()
		}

		_ => return Err(ty.unsupported(CONNECTOR)),
	};
	Ok(mapped)
}

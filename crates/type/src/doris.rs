// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Doris column type names and the sizing rules shared by every source mapping.

pub const BOOLEAN: &str = "BOOLEAN";
pub const TINYINT: &str = "TINYINT";
pub const SMALLINT: &str = "SMALLINT";
pub const INT: &str = "INT";
pub const BIGINT: &str = "BIGINT";
pub const LARGEINT: &str = "LARGEINT";
pub const FLOAT: &str = "FLOAT";
pub const DOUBLE: &str = "DOUBLE";
pub const DECIMALV3: &str = "DECIMALV3";
pub const DATEV2: &str = "DATEV2";
pub const DATETIMEV2: &str = "DATETIMEV2";
pub const CHAR: &str = "CHAR";
pub const VARCHAR: &str = "VARCHAR";
pub const STRING: &str = "STRING";
pub const JSONB: &str = "JSONB";

pub const MAX_CHAR_SIZE: u32 = 255;
pub const MAX_VARCHAR_SIZE: u32 = 65533;
pub const MAX_DECIMAL_PRECISION: u32 = 38;
pub const MAX_DATETIME_PRECISION: u32 = 6;

/// Source lengths count characters, Doris lengths count UTF-8 bytes.
const BYTES_PER_CHAR: u32 = 3;

/// `CHAR(3n)`, or the varchar mapping once the byte length exceeds the CHAR limit.
pub fn char_type(length: u32) -> String {
	let bytes = length.saturating_mul(BYTES_PER_CHAR);
	if bytes <= MAX_CHAR_SIZE {
		format!("{CHAR}({bytes})")
	} else {
		varchar(length)
	}
}

/// `VARCHAR(3n)`, or `STRING` once the byte length exceeds the VARCHAR limit.
pub fn varchar(length: u32) -> String {
	let bytes = length.saturating_mul(BYTES_PER_CHAR);
	if bytes <= MAX_VARCHAR_SIZE {
		format!("{VARCHAR}({bytes})")
	} else {
		STRING.to_string()
	}
}

pub fn decimal(precision: u32, scale: u32) -> String {
	if precision > 0 && precision <= MAX_DECIMAL_PRECISION {
		format!("{DECIMALV3}({precision},{scale})")
	} else {
		STRING.to_string()
	}
}

pub fn datetime(precision: u32) -> String {
	format!("{DATETIMEV2}({})", precision.min(MAX_DATETIME_PRECISION))
}

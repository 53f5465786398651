// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

pub(crate) mod mysql;
pub(crate) mod oracle;
pub(crate) mod postgres;
pub(crate) mod sqlserver;

use crate::{SourceConnector, TypeError};

/// A declared source type with modifiers split off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceType {
	/// Uppercase with single spaces, e.g. `DOUBLE PRECISION`.
	pub base: String,
	/// `UNSIGNED` or `ZEROFILL` was present.
	pub unsigned: bool,
	pub length: Option<u32>,
	pub scale: Option<u32>,
}

impl SourceType {
	pub fn new(type_name: &str, length: Option<u32>, scale: Option<u32>) -> Self {
		let upper = type_name.to_ascii_uppercase();
		let mut unsigned = false;
		let mut words = Vec::new();
		for word in upper.split_whitespace() {
			match word {
				"UNSIGNED" | "ZEROFILL" => unsigned = true,
				"SIGNED" => {}
				_ => words.push(word),
			}
		}
		Self {
			base: words.join(" "),
			unsigned,
			length,
			scale,
		}
	}

	pub fn unsupported(&self, connector: SourceConnector) -> TypeError {
		TypeError::UnsupportedType {
			connector,
			type_name: self.base.clone(),
		}
	}

	pub fn require_length(&self, connector: SourceConnector) -> Result<u32, TypeError> {
		self.length.ok_or_else(|| TypeError::MissingLength {
			connector,
			type_name: self.base.clone(),
		})
	}
}

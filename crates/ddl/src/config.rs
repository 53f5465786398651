// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::Result;

/// Translation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
	/// Back-quote table and column identifiers in the produced DDL.
	pub quote_identifiers: bool,
	/// Apply `CHANGE` as a rename. When disabled `CHANGE` is skipped as unsupported.
	pub translate_change_as_rename: bool,
}

impl Default for TranslatorConfig {
	fn default() -> Self {
		Self {
			quote_identifiers: true,
			translate_change_as_rename: true,
		}
	}
}

impl TranslatorConfig {
	pub fn from_json(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}
}

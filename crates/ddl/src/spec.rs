// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Default value and comment lookup in the raw spec tokens of a column definition.
//!
//! A keyword matches its exact lowercase or uppercase spelling. When both are
//! present the uppercase one wins. Any other spelling (`Default`) is only
//! consulted when neither exact spelling is present.

pub const DEFAULT: &str = "DEFAULT";
pub const COMMENT: &str = "COMMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecValue<'a> {
	Absent,
	/// The keyword is the last token.
	Dangling,
	/// The raw token following the keyword, quotes included.
	Present(&'a str),
}

impl SpecValue<'_> {
	/// The unquoted and unescaped value, `None` unless present.
	pub fn value(self) -> Option<String> {
		match self {
			SpecValue::Present(raw) => Some(decode(raw)),
			SpecValue::Absent | SpecValue::Dangling => None,
		}
	}
}

pub fn lookup<'a>(specs: &'a [String], keyword: &str) -> SpecValue<'a> {
	let upper = keyword.to_ascii_uppercase();
	let lower = keyword.to_ascii_lowercase();

	let index = position(specs, |spec| spec == upper)
		.or_else(|| position(specs, |spec| spec == lower))
		.or_else(|| position(specs, |spec| spec.eq_ignore_ascii_case(keyword)));

	match index {
		None => SpecValue::Absent,
		Some(index) => match specs.get(index + 1) {
			Some(value) => SpecValue::Present(value),
			None => SpecValue::Dangling,
		},
	}
}

fn position(specs: &[String], matches: impl Fn(&str) -> bool) -> Option<usize> {
	specs.iter().position(|spec| matches(spec))
}

pub fn extract_default_value(specs: &[String]) -> SpecValue<'_> {
	lookup(specs, DEFAULT)
}

pub fn extract_comment(specs: &[String]) -> SpecValue<'_> {
	lookup(specs, COMMENT)
}

/// Strip one pair of matching `'` or `"` quotes from a value longer than one character.
pub fn remove_quotes(content: &str) -> &str {
	if content.len() > 1 {
		for quote in ['\'', '"'] {
			if content.starts_with(quote) && content.ends_with(quote) {
				return &content[1..content.len() - 1];
			}
		}
	}
	content
}

/// Unquote a literal and resolve its escapes the way the lexer reads them:
/// a doubled quote or a backslash escape yields the escaped character.
fn decode(raw: &str) -> String {
	let content = remove_quotes(raw);
	let Some(quote) = raw.chars().next().filter(|_| content.len() != raw.len()) else {
		return content.to_string();
	};

	let mut value = String::with_capacity(content.len());
	let mut chars = content.chars().peekable();
	while let Some(ch) = chars.next() {
		match ch {
			'\\' => match chars.next() {
				Some('n') => value.push('\n'),
				Some('t') => value.push('\t'),
				Some('r') => value.push('\r'),
				Some('0') => value.push('\0'),
				Some(c) => value.push(c),
				None => value.push('\\'),
			},
			c if c == quote && chars.peek() == Some(&quote) => {
				chars.next();
				value.push(quote);
			}
			c => value.push(c),
		}
	}
	value
}

#[cfg(test)]
mod tests {
	use super::*;

	fn specs(tokens: &[&str]) -> Vec<String> {
		tokens.iter().map(|t| t.to_string()).collect()
	}

	#[test]
	fn test_remove_quotes() {
		assert_eq!(remove_quotes("'abc'"), "abc");
		assert_eq!(remove_quotes("\"abc\""), "abc");
		assert_eq!(remove_quotes("''"), "");
		assert_eq!(remove_quotes("'"), "'");
		assert_eq!(remove_quotes("\""), "\"");
		assert_eq!(remove_quotes("'abc\""), "'abc\"");
		assert_eq!(remove_quotes("18"), "18");
	}

	#[test]
	fn test_remove_quotes_is_idempotent_on_unquoted() {
		let once = remove_quotes("'abc'");
		assert_eq!(remove_quotes(once), once);
	}

	#[test]
	fn test_lookup_value_follows_keyword() {
		let specs = specs(&["NOT", "NULL", "DEFAULT", "'18'", "COMMENT", "'user age'"]);
		assert_eq!(extract_default_value(&specs), SpecValue::Present("'18'"));
		assert_eq!(extract_comment(&specs).value().as_deref(), Some("user age"));
	}

	#[test]
	fn test_lookup_lowercase() {
		let specs = specs(&["default", "0", "comment", "\"c\""]);
		assert_eq!(extract_default_value(&specs).value().as_deref(), Some("0"));
		assert_eq!(extract_comment(&specs).value().as_deref(), Some("c"));
	}

	#[test]
	fn test_uppercase_overrides_lowercase() {
		let specs = specs(&["comment", "'lower'", "COMMENT", "'upper'"]);
		assert_eq!(extract_comment(&specs).value().as_deref(), Some("upper"));

		let specs = self::specs(&["DEFAULT", "1", "default", "2"]);
		assert_eq!(extract_default_value(&specs).value().as_deref(), Some("1"));
	}

	#[test]
	fn test_mixed_case_fallback() {
		let specs = specs(&["Default", "'x'"]);
		assert_eq!(extract_default_value(&specs).value().as_deref(), Some("x"));
	}

	#[test]
	fn test_absent_is_distinct_from_empty() {
		assert_eq!(extract_comment(&specs(&["NOT", "NULL"])).value(), None);
		assert_eq!(extract_comment(&specs(&["COMMENT", "''"])).value(), Some(String::new()));
	}

	#[test]
	fn test_dangling_keyword() {
		let specs = specs(&["NOT", "NULL", "DEFAULT"]);
		assert_eq!(extract_default_value(&specs), SpecValue::Dangling);
		assert_eq!(extract_default_value(&specs).value(), None);
	}

	#[test]
	fn test_value_resolves_escapes() {
		assert_eq!(extract_comment(&specs(&["COMMENT", r"'a\'b'"])).value().as_deref(), Some("a'b"));
		assert_eq!(extract_comment(&specs(&["COMMENT", "'it''s'"])).value().as_deref(), Some("it's"));
		assert_eq!(extract_default_value(&specs(&["DEFAULT", "\"it's\""])).value().as_deref(), Some("it's"));
		assert_eq!(extract_default_value(&specs(&["DEFAULT", r#"'C:\\tmp'"#])).value().as_deref(), Some(r"C:\tmp"));
	}

	#[test]
	fn test_unquoted_value_is_kept_verbatim() {
		assert_eq!(extract_default_value(&specs(&["DEFAULT", r"a\b"])).value().as_deref(), Some(r"a\b"));
	}

	#[test]
	fn test_quoted_keyword_is_a_value_not_a_keyword() {
		let specs = specs(&["COMMENT", "'DEFAULT'"]);
		assert_eq!(extract_default_value(&specs), SpecValue::Absent);
	}
}

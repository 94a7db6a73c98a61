//! Suggestion values offered by prompts, and the filters that narrow them.

/// One entry in a prompt's suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
	/// Text shown to the user.
	pub label: String,
	/// Text inserted into the prompt when the suggestion is picked.
	pub value: String,
}

impl Suggestion {
	/// A suggestion whose label and value are the same text.
	pub fn same(text: String) -> Self {
		Self {
			label: text.clone(),
			value: text,
		}
	}
}

/// Matcher settings for prompt filters: no typos, so every char of the query
/// has to show up in the candidate, in order.
fn matcher_config() -> frizbee::Config {
	frizbee::Config {
		max_typos: Some(0),
		..frizbee::Config::default()
	}
}

/// Case-insensitive fuzzy match of `needle` against `haystack`.
///
/// Scores are ignored; callers keep their own ordering.
pub fn fuzzy_match(needle: &str, haystack: &str) -> bool {
	needle.is_empty() || frizbee::match_indices(needle, haystack, &matcher_config()).is_some()
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(&needle.to_lowercase())
}

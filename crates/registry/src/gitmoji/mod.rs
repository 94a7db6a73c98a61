//! Gitmoji catalog.
//!
//! A fixed, ordered table mapping a label to the glyph that prefixes a commit
//! summary. Lookups are exact; an unknown label or glyph is simply "no match".

use kommit_primitives::first_cluster_scalar_count;

use crate::suggest::{Suggestion, contains_ignore_case, fuzzy_match};

mod table;

pub use table::GITMOJIS;

/// A single catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gitmoji {
	/// The decorative grapheme cluster, e.g. `"🐛"`.
	pub glyph: &'static str,
	/// Human readable description, e.g. `"Fix a bug"`.
	pub label: &'static str,
}

impl Gitmoji {
	pub const fn new(glyph: &'static str, label: &'static str) -> Self {
		Self { glyph, label }
	}

	/// Whether the glyph is a single scalar value, and therefore safe for
	/// terminals that mis-measure compound sequences.
	pub fn is_single_scalar(&self) -> bool {
		first_cluster_scalar_count(self.glyph) <= 1
	}

	/// Text shown in suggestion lists: glyph, space, label.
	pub fn display(&self) -> String {
		format!("{} {}", self.glyph, self.label)
	}
}

/// Catalog entries in table order.
///
/// With `include_multi_cluster_glyphs` unset, entries whose glyph is built
/// from more than one scalar (variation selectors, ZWJ sequences) are skipped.
fn entries(include_multi_cluster_glyphs: bool) -> impl Iterator<Item = &'static Gitmoji> {
	GITMOJIS
		.iter()
		.filter(move |g| include_multi_cluster_glyphs || g.is_single_scalar())
}

/// Returns catalog labels in table order, compound glyphs included only on
/// request.
pub fn labels(include_multi_cluster_glyphs: bool) -> Vec<&'static str> {
	entries(include_multi_cluster_glyphs).map(|g| g.label).collect()
}

/// Returns the glyph registered under exactly `label`.
pub fn glyph_for_label(label: &str) -> Option<&'static str> {
	GITMOJIS.iter().find(|g| g.label == label).map(|g| g.glyph)
}

/// Returns the entry whose glyph equals `glyph`.
pub fn find_by_glyph(glyph: &str) -> Option<&'static Gitmoji> {
	GITMOJIS.iter().find(|g| g.glyph == glyph)
}

/// Whether `cluster` is exactly one of the catalog glyphs.
pub fn is_known_glyph(cluster: &str) -> bool {
	find_by_glyph(cluster).is_some()
}

/// Suggestions for the gitmoji prompt.
///
/// An empty filter yields the whole catalog. Otherwise entries whose display
/// text contains `filter` (ignoring case) are returned; when there are none,
/// entries that match it fuzzily. Catalog order is preserved in every case.
/// Compound glyphs are left out unless `include_multi_cluster_glyphs` is set.
pub fn suggestions(filter: &str, include_multi_cluster_glyphs: bool) -> Vec<Suggestion> {
	let displayed = entries(include_multi_cluster_glyphs).map(Gitmoji::display);
	if filter.is_empty() {
		return displayed.map(Suggestion::same).collect();
	}

	let (exact, fuzzy): (Vec<String>, Vec<String>) = displayed
		.filter(|text| fuzzy_match(filter, text))
		.partition(|text| contains_ignore_case(text, filter));
	let matches = if exact.is_empty() { fuzzy } else { exact };
	matches.into_iter().map(Suggestion::same).collect()
}

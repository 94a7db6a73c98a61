//! Structured decorations applied to the message while the panel is open.

use kommit_primitives::split_first_grapheme;
use kommit_registry::{Suggestion, gitmoji, is_replaceable_decoration};

use super::CommitMessageSession;
use crate::git::add_co_author_to_description;

impl CommitMessageSession {
	/// Appends a `Co-authored-by` trailer for `identity` to the description.
	///
	/// Works on the unwrapped text so soft breaks never end up in front of the
	/// trailer.
	pub fn add_co_author(&mut self, identity: &str) {
		let description = add_co_author_to_description(self.state.description().unwrapped(), identity);
		self.state.set_description(description);
		tracing::debug!("co-author trailer added");
	}

	/// Suggestions for the gitmoji prompt, honouring `show-compound-gitmojis`.
	pub fn gitmoji_suggestions(&self, filter: &str) -> Vec<Suggestion> {
		gitmoji::suggestions(filter, self.config.show_compound_gitmojis)
	}

	/// Puts a gitmoji in front of the summary.
	///
	/// `value` is either a picked suggestion (glyph first) or free text, in
	/// which case the glyph of the best suggestion for it is used. A leading
	/// catalog glyph or pictograph already on the summary is replaced, anything
	/// else, accented or combining letters included, is kept after the new
	/// glyph. Nothing changes when no glyph can be found.
	pub fn insert_gitmoji(&mut self, value: &str) {
		if value.is_empty() {
			return;
		}

		let Some(glyph) = self.resolve_gitmoji(value) else {
			tracing::debug!(value, "no gitmoji matches");
			return;
		};

		let summary = self.state.summary();
		let (first, rest) = split_first_grapheme(summary);
		let updated = if is_replaceable_decoration(first) {
			format!("{glyph}{rest}")
		} else {
			format!("{glyph}{summary}")
		};
		self.state.set_summary(&updated);
	}

	fn resolve_gitmoji(&self, value: &str) -> Option<String> {
		let (first, _) = split_first_grapheme(value);
		if is_replaceable_decoration(first) {
			return Some(first.to_string());
		}
		let top = self.gitmoji_suggestions(value).into_iter().next()?;
		let (glyph, _) = split_first_grapheme(&top.value);
		Some(glyph.to_string())
	}
}

use unicode_segmentation::UnicodeSegmentation;

/// Splits `text` into its first extended grapheme cluster and the remainder.
///
/// Returns `("", "")` for empty input.
pub fn split_first_grapheme(text: &str) -> (&str, &str) {
	match text.grapheme_indices(true).nth(1) {
		Some((idx, _)) => text.split_at(idx),
		None => (text, ""),
	}
}

/// Returns the number of extended grapheme clusters in `text`.
pub fn grapheme_count(text: &str) -> usize {
	text.graphemes(true).count()
}

/// Returns how many scalar values make up the first grapheme cluster of `text`.
///
/// A plain pictograph is one scalar; a pictograph followed by a variation
/// selector or joined with ZWJ sequences is more.
pub fn first_cluster_scalar_count(text: &str) -> usize {
	split_first_grapheme(text).0.chars().count()
}

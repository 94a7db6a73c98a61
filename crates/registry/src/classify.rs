//! Decoration glyph classification.
//!
//! Catalog membership is authoritative. For glyphs typed or pasted by the user
//! that are not in the catalog, [`is_pictograph_heuristic`] gives a
//! best-effort answer based on a fixed table of Unicode blocks. The table does
//! not cover every pictographic block; anything outside it is reported as not
//! a decoration.

use std::ops::RangeInclusive;

use kommit_primitives::grapheme_count;

use crate::gitmoji;

/// Unicode blocks whose leading scalar marks a pictograph.
pub const PICTOGRAPH_BLOCKS: &[(&str, RangeInclusive<u32>)] = &[
	("Emoticons", 0x1F600..=0x1F64F),
	("Miscellaneous Symbols and Pictographs", 0x1F300..=0x1F5FF),
	("Transport and Map Symbols", 0x1F680..=0x1F6FF),
	("Supplemental Symbols and Pictographs", 0x1F900..=0x1F9FF),
	("Miscellaneous Symbols", 0x2600..=0x26FF),
	("Dingbats", 0x2700..=0x27BF),
	("Regional Indicator Symbols", 0x1F1E6..=0x1F1FF),
	("Variation Selectors", 0xFE00..=0xFE0F),
];

/// Whether `text` should be treated as a decoration glyph.
pub fn is_decoration_glyph(text: &str) -> bool {
	gitmoji::is_known_glyph(text) || is_pictograph_heuristic(text)
}

/// Best-effort pictograph test.
///
/// A single grapheme cluster made of several scalars counts as a pictograph
/// (emoji with variation selectors, ZWJ sequences, flags). Otherwise the
/// leading scalar is looked up in [`PICTOGRAPH_BLOCKS`].
pub fn is_pictograph_heuristic(text: &str) -> bool {
	let mut chars = text.chars();
	let Some(first) = chars.next() else {
		return false;
	};
	if chars.next().is_some() && grapheme_count(text) == 1 {
		return true;
	}
	in_pictograph_block(first)
}

/// Whether a leading cluster may be swapped out for another decoration.
///
/// Stricter than [`is_decoration_glyph`]: the multi-scalar rule is skipped,
/// since combining marks and Indic vowel signs also build multi-scalar
/// clusters and those are letters of the summary.
pub fn is_replaceable_decoration(cluster: &str) -> bool {
	gitmoji::is_known_glyph(cluster) || cluster.chars().next().is_some_and(in_pictograph_block)
}

fn in_pictograph_block(c: char) -> bool {
	let scalar = u32::from(c);
	PICTOGRAPH_BLOCKS.iter().any(|(_, range)| range.contains(&scalar))
}

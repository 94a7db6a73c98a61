//! Reconciliation of hard line breaks with soft (auto-wrapped) ones.
//!
//! A message typed into an auto-wrapping text area and committed ends up
//! with hard breaks wherever the wrap happened to fall. When such a message
//! is loaded back into the text area, those breaks would stick even if the
//! wrap width changed. [`try_remove_hard_line_breaks`] turns every hard break
//! that the wrap would have produced anyway back into a space.

use crate::wrap::auto_wrap_content;

/// Demotes hard line breaks that wrapping at `auto_wrap_width` would have
/// inserted at the same position.
///
/// Works on chars, left to right, using the already rewritten text for later
/// decisions. Blank lines and trailing breaks always survive. A width of zero
/// returns the message unchanged.
pub fn try_remove_hard_line_breaks(message: &str, auto_wrap_width: usize) -> String {
	if auto_wrap_width == 0 {
		return message.to_string();
	}

	let mut chars: Vec<char> = message.chars().collect();
	let mut last_hard_line_start = 0usize;

	for i in 0..chars.len() {
		if chars[i] != '\n' {
			continue;
		}

		chars[i] = ' ';
		let (_, mappings) = auto_wrap_content(&chars[last_hard_line_start..], auto_wrap_width);
		let rewraps_here = mappings
			.first()
			.is_some_and(|m| m.orig == i - last_hard_line_start + 1);
		if !rewraps_here {
			chars[i] = '\n';
		}
		last_hard_line_start = i + 1;
	}

	chars.into_iter().collect()
}

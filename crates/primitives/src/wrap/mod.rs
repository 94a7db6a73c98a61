//! Word-wrap simulation for the commit description.
//!
//! Mirrors the soft wrapping a fixed-width text area applies while typing:
//! a line is broken after the last space that precedes the first char that no
//! longer fits. Words longer than the width are never split.

use unicode_width::UnicodeWidthChar;

/// Maps a synthesized soft break back to the unwrapped input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorMapping {
	/// Offset in the input (in chars) right after the break.
	pub orig: usize,
	/// Offset in the wrapped output (in chars) right after the inserted `\n`.
	pub wrapped: usize,
}

/// Returns the number of cells `ch` occupies, never less than one.
pub fn char_cells(ch: char) -> usize {
	ch.width().unwrap_or(0).max(1)
}

/// Wraps `content` at `width` cells.
///
/// Existing `\n` chars end a line. A soft break is only synthesized at a
/// space, and never when everything before it on the line is whitespace, so
/// wrapping cannot produce an empty line. A `width` of zero disables wrapping.
///
/// Returns the wrapped text and one [`CursorMapping`] per synthesized break,
/// in order.
pub fn auto_wrap_content(content: &[char], width: usize) -> (Vec<char>, Vec<CursorMapping>) {
	if width == 0 {
		return (content.to_vec(), Vec::new());
	}

	let mut wrapped = Vec::with_capacity(content.len() + content.len() / width);
	let mut mappings = Vec::new();
	let mut line_start = 0usize;
	let mut line_cells = 0usize;
	let mut break_after: Option<usize> = None;

	for (pos, &ch) in content.iter().enumerate() {
		if ch == '\n' {
			wrapped.extend_from_slice(&content[line_start..=pos]);
			line_start = pos + 1;
			line_cells = 0;
			break_after = None;
			continue;
		}

		let cells = char_cells(ch);
		if ch == ' ' {
			break_after = Some(pos + 1);
		} else if line_cells + cells > width
			&& let Some(wrap_at) = break_after
			&& !content[line_start..wrap_at].iter().all(|c| c.is_whitespace())
		{
			wrapped.extend_from_slice(&content[line_start..wrap_at]);
			wrapped.push('\n');
			mappings.push(CursorMapping {
				orig: wrap_at,
				wrapped: wrapped.len(),
			});
			line_cells = content[wrap_at..pos].iter().map(|&c| char_cells(c)).sum();
			line_start = wrap_at;
			break_after = None;
		}
		line_cells += cells;
	}

	wrapped.extend_from_slice(&content[line_start..]);
	(wrapped, mappings)
}

/// Convenience wrapper over [`auto_wrap_content`] for string input.
pub fn wrap_str(text: &str, width: usize) -> String {
	let chars: Vec<char> = text.chars().collect();
	auto_wrap_content(&chars, width).0.into_iter().collect()
}

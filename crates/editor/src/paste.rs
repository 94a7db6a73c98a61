//! Clipboard access for the commit panel.

use std::io;

/// System clipboard, or whatever stands in for it.
pub trait Clipboard {
	/// Returns the current clipboard text.
	fn paste(&mut self) -> io::Result<String>;
}

/// Fixed clipboard contents, for embedders without a system clipboard.
impl Clipboard for String {
	fn paste(&mut self) -> io::Result<String> {
		Ok(self.clone())
	}
}

/// Reads a commit message off the clipboard.
///
/// Messages copied from Windows tools (CRLF) or old Mac ones (CR) come back
/// with LF endings, so the summary/description split sees real line breaks.
pub fn read_clipboard(clipboard: &mut dyn Clipboard) -> io::Result<String> {
	clipboard.paste().map(|text| unify_line_endings(&text))
}

fn unify_line_endings(text: &str) -> String {
	text.replace("\r\n", "\n").replace('\r', "\n")
}

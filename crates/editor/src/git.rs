//! Commit trailer formatting.

/// Trailer key used for co-authors.
pub const CO_AUTHOR_TRAILER: &str = "Co-authored-by:";

/// Appends a `Co-authored-by` trailer for `author` to `description`.
///
/// The first trailer is separated from the body by a blank line; consecutive
/// co-author trailers are kept on adjacent lines.
pub fn add_co_author_to_description(description: &str, author: &str) -> String {
	let mut out = String::with_capacity(description.len() + CO_AUTHOR_TRAILER.len() + author.len() + 3);
	out.push_str(description);
	if !description.is_empty() {
		let last_line = description.rsplit('\n').next().unwrap_or_default();
		out.push_str(if last_line.starts_with(CO_AUTHOR_TRAILER) { "\n" } else { "\n\n" });
	}
	out.push_str(CO_AUTHOR_TRAILER);
	out.push(' ');
	out.push_str(author);
	out
}

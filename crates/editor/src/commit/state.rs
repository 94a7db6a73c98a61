use kommit_primitives::{try_remove_hard_line_breaks, wrap_str};

/// Splits a full commit message at its first line break.
///
/// Everything after the first `\n` is the description, trimmed of surrounding
/// whitespace. A message without a line break is all summary.
pub fn split_message_and_description(message: &str) -> (&str, &str) {
	match message.split_once('\n') {
		Some((summary, description)) => (summary, description.trim()),
		None => (message, ""),
	}
}

/// Description text as held by an auto-wrapping text area.
///
/// The buffer stores the *unwrapped* text: only the breaks the author meant.
/// [`Self::wrapped`] renders the soft breaks the text area would display at
/// the configured width; that rendering is what gets committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionBuffer {
	content: String,
	wrap_width: Option<usize>,
}

impl DescriptionBuffer {
	pub fn new(wrap_width: Option<usize>) -> Self {
		Self {
			content: String::new(),
			wrap_width,
		}
	}

	/// Loads text that may carry breaks produced by an earlier wrap.
	///
	/// Hard breaks the current width would reproduce on its own become soft.
	pub fn load(&mut self, text: &str) {
		self.content = match self.wrap_width {
			Some(width) => try_remove_hard_line_breaks(text, width),
			None => text.to_string(),
		};
	}

	/// Replaces the content with text exactly as typed.
	pub fn set(&mut self, text: impl Into<String>) {
		self.content = text.into();
	}

	/// Text without soft breaks.
	pub fn unwrapped(&self) -> &str {
		&self.content
	}

	/// Text with soft breaks materialized at the wrap width.
	pub fn wrapped(&self) -> String {
		match self.wrap_width {
			Some(width) => wrap_str(&self.content, width),
			None => self.content.clone(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.content.is_empty()
	}

	pub fn clear(&mut self) {
		self.content.clear();
	}

	pub fn wrap_width(&self) -> Option<usize> {
		self.wrap_width
	}
}

/// Text state of the commit message panel.
#[derive(Debug, Clone, Default)]
pub struct CommitMessageState {
	summary: String,
	description: DescriptionBuffer,
	/// Joined message right after the panel was seeded.
	initial_message: String,
	/// Scratch value while browsing earlier messages.
	history_message: String,
}

impl CommitMessageState {
	pub fn new(wrap_width: Option<usize>) -> Self {
		Self {
			description: DescriptionBuffer::new(wrap_width),
			..Self::default()
		}
	}

	pub fn summary(&self) -> &str {
		&self.summary
	}

	/// Sets the summary; anything from the first line break on is dropped.
	pub fn set_summary(&mut self, summary: &str) {
		let line = summary.split('\n').next().unwrap_or_default();
		self.summary.clear();
		self.summary.push_str(line);
	}

	pub fn description(&self) -> &DescriptionBuffer {
		&self.description
	}

	/// Sets the description exactly as typed.
	pub fn set_description(&mut self, description: impl Into<String>) {
		self.description.set(description);
	}

	/// Splits `message` and loads both halves.
	pub fn set_message_and_description(&mut self, message: &str) {
		let (summary, description) = split_message_and_description(message);
		self.set_summary(summary);
		self.description.load(description);
	}

	/// Summary and unwrapped description joined by a single line break, or just
	/// the summary when there is no description.
	pub fn join_for_preservation(&self) -> String {
		if self.description.is_empty() {
			return self.summary.clone();
		}
		format!("{}\n{}", self.summary, self.description.unwrapped())
	}

	/// Message as written for an external editor: summary, blank line,
	/// wrapped description.
	pub fn compose_for_editor(&self) -> String {
		if self.description.is_empty() {
			return self.summary.clone();
		}
		format!("{}\n\n{}", self.summary, self.description.wrapped())
	}

	pub fn initial_message(&self) -> &str {
		&self.initial_message
	}

	pub(crate) fn snapshot_initial(&mut self) {
		self.initial_message = self.join_for_preservation();
	}

	pub fn history_message(&self) -> &str {
		&self.history_message
	}

	pub fn set_history_message(&mut self, message: impl Into<String>) {
		self.history_message = message.into();
	}

	pub(crate) fn clear_text(&mut self) {
		self.summary.clear();
		self.description.clear();
	}

	pub(crate) fn clear_history(&mut self) {
		self.history_message.clear();
	}
}

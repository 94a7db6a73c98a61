//! Replacing the message with clipboard contents.

use super::CommitMessageSession;
use crate::error::CommitError;
use crate::paste::{Clipboard, read_clipboard};

/// Clipboard text waiting for the user to accept overwriting their message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPaste {
	message: String,
}

impl PendingPaste {
	/// The clipboard text that would replace the message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Result of [`CommitMessageSession::paste_from_clipboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
	/// The clipboard was empty; nothing changed.
	Ignored,
	/// The message was empty and now holds the clipboard text.
	Applied,
	/// The message is not empty. Ask before passing this to
	/// [`CommitMessageSession::apply_paste`].
	NeedsConfirmation(PendingPaste),
}

impl CommitMessageSession {
	/// Loads the clipboard into the summary and description.
	///
	/// An in-progress message is never overwritten here; the caller gets the
	/// clipboard text back to confirm first.
	pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn Clipboard) -> Result<PasteOutcome, CommitError> {
		let message = read_clipboard(clipboard).map_err(CommitError::Clipboard)?;
		if message.is_empty() {
			return Ok(PasteOutcome::Ignored);
		}

		if self.state.join_for_preservation().is_empty() {
			self.state.set_message_and_description(&message);
			return Ok(PasteOutcome::Applied);
		}

		Ok(PasteOutcome::NeedsConfirmation(PendingPaste { message }))
	}

	/// Replaces the message with a paste the user agreed to.
	pub fn apply_paste(&mut self, paste: PendingPaste) {
		self.state.set_message_and_description(&paste.message);
	}
}

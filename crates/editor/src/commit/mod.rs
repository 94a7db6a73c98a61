//! Commit message panel.
//!
//! [`CommitMessageSession`] owns the summary/description text and the
//! metadata of the currently open panel. Its lifecycle is
//!
//! ```text
//! Closed ─open─> Open ─┬─confirm──────────┐
//!                      ├─cancel───────────┼─> Closed
//!                      └─switch_to_editor─┘
//! ```
//!
//! Every transition to `Closed` goes through the same close path: preserve or
//! clear the text, clear the history scratch value, hide the inputs and pop
//! the view stack. With preservation enabled, a message that differs from the
//! one the panel opened with is written to the [`DraftStore`].

mod clipboard;
mod decorate;
mod draft;
mod handoff;
mod menu;
mod request;
mod state;

use std::path::PathBuf;

pub use clipboard::{PasteOutcome, PendingPaste};
pub use draft::{DraftStore, FileDraftStore, MemoryDraftStore};
pub use handoff::{EditorHandoff, MESSAGE_FILE_TIMESTAMP};
use kommit_config::CommitConfig;
pub use menu::{CommitMenuAction, CommitMenuItem};
pub use request::{CommitTarget, OnConfirm, OnSwitchToEditor, OpenCommitMessagePanel};
use request::OpenPanel;
pub use state::{CommitMessageState, DescriptionBuffer, split_message_and_description};

use crate::error::CommitError;
use crate::host::{ContextKey, ViewKind, ViewStack};

/// The commit message panel and its preserved draft.
pub struct CommitMessageSession {
	state: CommitMessageState,
	panel: Option<OpenPanel>,
	drafts: Box<dyn DraftStore>,
	config: CommitConfig,
}

impl CommitMessageSession {
	pub fn new(config: CommitConfig, drafts: impl DraftStore + 'static) -> Self {
		Self {
			state: CommitMessageState::new(config.wrap_width()),
			panel: None,
			drafts: Box::new(drafts),
			config,
		}
	}

	pub fn state(&self) -> &CommitMessageState {
		&self.state
	}

	pub fn config(&self) -> &CommitConfig {
		&self.config
	}

	pub fn is_open(&self) -> bool {
		self.panel.is_some()
	}

	pub fn target(&self) -> Option<CommitTarget> {
		self.panel.as_ref().map(|p| p.target)
	}

	/// `(summary title, description title)` of the open panel.
	pub fn titles(&self) -> Option<(&str, &str)> {
		self.panel
			.as_ref()
			.map(|p| (p.summary_title.as_str(), p.description_title.as_str()))
	}

	pub fn preserves_message(&self) -> bool {
		self.panel.as_ref().is_some_and(|p| p.preserve_message)
	}

	pub fn can_switch_to_editor(&self) -> bool {
		self.panel.as_ref().is_some_and(|p| p.on_switch_to_editor.is_some())
	}

	pub fn summary(&self) -> &str {
		self.state.summary()
	}

	pub fn set_summary(&mut self, summary: &str) {
		self.state.set_summary(summary);
	}

	/// Description as it will be committed, soft breaks included.
	pub fn description(&self) -> String {
		self.state.description().wrapped()
	}

	/// Description as typed, without soft breaks.
	pub fn unwrapped_description(&self) -> &str {
		self.state.description().unwrapped()
	}

	pub fn set_description(&mut self, description: impl Into<String>) {
		self.state.set_description(description);
	}

	/// Replaces both fields from a full message.
	pub fn set_message_and_description(&mut self, message: &str) {
		self.state.set_message_and_description(message);
	}

	pub fn join_for_preservation(&self) -> String {
		self.state.join_for_preservation()
	}

	pub fn history_message(&self) -> &str {
		self.state.history_message()
	}

	pub fn set_history_message(&mut self, message: impl Into<String>) {
		self.state.set_history_message(message);
	}

	/// Currently preserved draft; read failures count as no draft.
	pub fn preserved_draft(&self) -> String {
		self.drafts.load().unwrap_or_else(|e| {
			tracing::warn!(error = %e, "failed to read preserved commit message");
			String::new()
		})
	}

	fn set_preserved_draft(&mut self, message: &str) {
		if let Err(e) = self.drafts.save(message) {
			tracing::warn!(error = %e, "failed to save preserved commit message");
		}
	}

	/// Opens the panel.
	///
	/// The text is seeded from the request's initial message when non-empty,
	/// else from the preserved draft when the request preserves messages, else
	/// left empty.
	pub fn open(&mut self, request: OpenCommitMessagePanel, views: &mut dyn ViewStack) -> Result<(), CommitError> {
		if self.panel.is_some() {
			return Err(CommitError::AlreadyOpen);
		}

		let seed = if !request.initial_message.is_empty() {
			request.initial_message.clone()
		} else if request.preserve_message {
			self.preserved_draft()
		} else {
			String::new()
		};
		self.state.set_message_and_description(&seed);
		self.state.snapshot_initial();

		tracing::debug!(target = ?request.target, preserve = request.preserve_message, "opening commit message panel");
		self.panel = Some(request.into());

		views.set_visible(ViewKind::CommitMessage, true);
		views.set_visible(ViewKind::CommitDescription, true);
		views.push(ContextKey::CommitMessage);
		Ok(())
	}

	/// Confirms the message.
	///
	/// An empty summary fails with [`CommitError::MissingMessage`] and leaves
	/// everything as is. Otherwise the panel closes first and then the confirm
	/// callback runs; its error is returned as is and does not reopen the panel.
	/// A successful confirm consumes the preserved draft.
	pub fn confirm(&mut self, views: &mut dyn ViewStack) -> Result<(), CommitError> {
		if self.panel.is_none() {
			return Err(CommitError::NotOpen);
		}
		if self.state.summary().is_empty() {
			return Err(CommitError::MissingMessage);
		}
		let Some(mut panel) = self.panel.take() else {
			return Err(CommitError::NotOpen);
		};

		let summary = self.state.summary().to_string();
		let description = self.state.description().wrapped();
		self.close(&panel, views);

		(panel.on_confirm)(&summary, &description).map_err(CommitError::Callback)?;
		if panel.preserve_message {
			self.set_preserved_draft("");
		}
		tracing::debug!("commit message confirmed");
		Ok(())
	}

	/// Closes the panel without committing.
	pub fn cancel(&mut self, views: &mut dyn ViewStack) -> Result<(), CommitError> {
		let panel = self.panel.take().ok_or(CommitError::NotOpen)?;
		self.close(&panel, views);
		tracing::debug!("commit message panel cancelled");
		Ok(())
	}

	/// Writes the message to a fresh file, closes the panel, and hands the
	/// file to the opener's editor callback.
	///
	/// Failing to write the file leaves the panel open and untouched.
	pub fn switch_to_editor(&mut self, handoff: &EditorHandoff, views: &mut dyn ViewStack) -> Result<PathBuf, CommitError> {
		let panel = self.panel.as_ref().ok_or(CommitError::NotOpen)?;
		if panel.on_switch_to_editor.is_none() {
			return Err(CommitError::EditorUnsupported);
		}

		let path = handoff.write_message(&self.state.compose_for_editor())?;

		let Some(mut panel) = self.panel.take() else {
			return Err(CommitError::NotOpen);
		};
		self.close(&panel, views);
		tracing::debug!(path = %path.display(), "switching commit message to editor");

		if let Some(on_switch) = panel.on_switch_to_editor.as_mut() {
			on_switch(&path).map_err(CommitError::Callback)?;
		}
		Ok(path)
	}

	fn close(&mut self, panel: &OpenPanel, views: &mut dyn ViewStack) {
		if panel.preserve_message {
			let message = self.state.join_for_preservation();
			if message != self.state.initial_message() {
				self.set_preserved_draft(&message);
			}
		} else {
			self.state.clear_text();
		}

		self.state.clear_history();

		views.set_visible(ViewKind::CommitMessage, false);
		views.set_visible(ViewKind::CommitDescription, false);
		views.pop();
	}
}

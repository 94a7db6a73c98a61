//! Error types for the commit panel and credential bridge.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`crate::CommitMessageSession`] operations.
#[derive(Debug, Error)]
pub enum CommitError {
	/// The operation needs an open panel.
	#[error("commit message panel is not open")]
	NotOpen,

	/// `open` was called while the panel was already open.
	#[error("commit message panel is already open")]
	AlreadyOpen,

	/// Confirm was requested with an empty summary.
	#[error("cannot commit without a commit message")]
	MissingMessage,

	/// The opener did not provide an editor handoff.
	#[error("this command doesn't support switching to the editor")]
	EditorUnsupported,

	/// Writing the message file for the external editor failed.
	#[error("failed to write commit message to {path}: {source}")]
	TempFile {
		/// File that could not be written.
		path: PathBuf,
		/// The underlying I/O error.
		source: std::io::Error,
	},

	/// Reading the clipboard failed.
	#[error("failed to read clipboard: {0}")]
	Clipboard(#[source] std::io::Error),

	/// Error returned by the opener's confirm or editor callback.
	#[error(transparent)]
	Callback(anyhow::Error),
}

/// Errors from a [`crate::DraftStore`].
#[derive(Debug, Error)]
pub enum DraftError {
	/// Reading or writing the draft file failed.
	#[error("I/O error on draft {path}: {source}")]
	Io {
		/// Draft file path.
		path: PathBuf,
		/// The underlying I/O error.
		source: std::io::Error,
	},
}

/// Errors from [`crate::CredentialBridge::request_credential`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialError {
	/// Another request is still waiting for an answer.
	#[error("a credential request is already waiting for an answer")]
	RequestInFlight,

	/// The foreground loop no longer receives prompts.
	#[error("credential prompt could not be shown: interface is closed")]
	UiClosed,

	/// The reply slot was dropped without an answer.
	#[error("credential request was abandoned before it was answered")]
	Abandoned,
}

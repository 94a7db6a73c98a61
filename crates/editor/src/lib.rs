#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Commit message composition and credential prompting.
//!
//! # Main Types
//!
//! - [`CommitMessageSession`] - the commit message panel: open, edit, confirm,
//!   cancel, hand off to an external editor, decorate
//! - [`CredentialBridge`] / [`CredentialsPanel`] - lets a blocking background
//!   operation ask the foreground for a username, password or passphrase
//!
//! # Architecture
//!
//! ```text
//! foreground (UI loop)                      background (git process)
//! ├── CommitMessageSession                  │
//! │   ├── CommitMessageState                │
//! │   ├── Box<dyn DraftStore>               │
//! │   └── &mut dyn ViewStack (per call)     │
//! └── CredentialsPanel  <── CredentialMsg ──┤ CredentialBridge::request_credential
//!                       ─── oneshot reply ──> (blocks until answered)
//! ```
//!
//! Rendering, keybindings and dialog widgets live outside this crate; the
//! [`host`] traits describe what the panel needs from them.

/// Commit message panel.
pub mod commit;
/// Credential prompt bridge.
pub mod credentials;
/// Error types.
pub mod error;
/// Commit trailer helpers.
pub mod git;
/// View stack and visibility contract consumed by the panels.
pub mod host;
/// Clipboard access and paste normalization.
pub mod paste;

pub use commit::{
	CommitMenuAction, CommitMenuItem, CommitMessageSession, CommitMessageState, CommitTarget,
	DescriptionBuffer, DraftStore, EditorHandoff, FileDraftStore, MemoryDraftStore,
	OpenCommitMessagePanel, PasteOutcome, PendingPaste, split_message_and_description,
};
pub use credentials::{CredentialBridge, CredentialKind, CredentialMsg, CredentialsPanel};
pub use error::{CommitError, CredentialError, DraftError};
pub use host::{ContextKey, ContextStack, ViewKind, ViewStack};
pub use paste::Clipboard;

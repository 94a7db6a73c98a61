//! The commit menu shown from the message panel.

use super::CommitMessageSession;

/// What a commit menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMenuAction {
	/// [`CommitMessageSession::switch_to_editor`].
	OpenInEditor,
	/// Prompt for an identity, then [`CommitMessageSession::add_co_author`].
	AddCoAuthor,
	/// Prompt with [`CommitMessageSession::gitmoji_suggestions`], then
	/// [`CommitMessageSession::insert_gitmoji`].
	AddGitmoji,
	/// [`CommitMessageSession::paste_from_clipboard`].
	PasteFromClipboard,
}

/// Definition of a commit menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMenuItem {
	pub action: CommitMenuAction,
	/// Display label.
	pub label: &'static str,
	/// Key that picks the entry while the menu is open.
	pub key: char,
	/// Set when the entry is shown but cannot be picked.
	pub disabled_reason: Option<&'static str>,
}

const MENU: &[(CommitMenuAction, &str, char)] = &[
	(CommitMenuAction::OpenInEditor, "Open in editor", 'e'),
	(CommitMenuAction::AddCoAuthor, "Add co-author", 'c'),
	(CommitMenuAction::AddGitmoji, "Add gitmoji", 'g'),
	(CommitMenuAction::PasteFromClipboard, "Paste commit message from clipboard", 'p'),
];

const EDITOR_UNSUPPORTED: &str = "This command doesn't support switching to the editor";

impl CommitMessageSession {
	/// Entries of the commit menu for the open panel, in display order.
	pub fn menu_items(&self) -> Vec<CommitMenuItem> {
		let can_switch = self.can_switch_to_editor();
		MENU.iter()
			.map(|&(action, label, key)| CommitMenuItem {
				action,
				label,
				key,
				disabled_reason: (action == CommitMenuAction::OpenInEditor && !can_switch).then_some(EDITOR_UNSUPPORTED),
			})
			.collect()
	}
}

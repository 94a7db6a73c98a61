use std::fmt;
use std::path::Path;

/// Callback run with `(summary, description)` once the user confirms.
pub type OnConfirm = Box<dyn FnMut(&str, &str) -> anyhow::Result<()>>;

/// Callback run with the message file path when the user switches to an
/// external editor.
pub type OnSwitchToEditor = Box<dyn FnMut(&Path) -> anyhow::Result<()>>;

/// Commit the panel's message will be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitTarget {
	/// A new commit on top of HEAD.
	#[default]
	New,
	/// Rewording an existing commit, by index in the commit list.
	Amend { index: usize },
}

/// Everything needed to open the commit message panel.
pub struct OpenCommitMessagePanel {
	pub target: CommitTarget,
	pub summary_title: String,
	pub description_title: String,
	/// Keep an unsent message as a draft when the panel closes.
	pub preserve_message: bool,
	pub on_confirm: OnConfirm,
	pub on_switch_to_editor: Option<OnSwitchToEditor>,
	pub initial_message: String,
}

impl OpenCommitMessagePanel {
	/// Request for a new commit with default titles.
	pub fn new(on_confirm: impl FnMut(&str, &str) -> anyhow::Result<()> + 'static) -> Self {
		Self {
			target: CommitTarget::New,
			summary_title: "Commit summary".to_string(),
			description_title: "Commit description".to_string(),
			preserve_message: false,
			on_confirm: Box::new(on_confirm),
			on_switch_to_editor: None,
			initial_message: String::new(),
		}
	}

	pub fn target(mut self, target: CommitTarget) -> Self {
		self.target = target;
		self
	}

	pub fn titles(mut self, summary: impl Into<String>, description: impl Into<String>) -> Self {
		self.summary_title = summary.into();
		self.description_title = description.into();
		self
	}

	pub fn preserve_message(mut self, preserve: bool) -> Self {
		self.preserve_message = preserve;
		self
	}

	pub fn initial_message(mut self, message: impl Into<String>) -> Self {
		self.initial_message = message.into();
		self
	}

	pub fn on_switch_to_editor(mut self, callback: impl FnMut(&Path) -> anyhow::Result<()> + 'static) -> Self {
		self.on_switch_to_editor = Some(Box::new(callback));
		self
	}
}

impl fmt::Debug for OpenCommitMessagePanel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OpenCommitMessagePanel")
			.field("target", &self.target)
			.field("summary_title", &self.summary_title)
			.field("description_title", &self.description_title)
			.field("preserve_message", &self.preserve_message)
			.field("can_switch_to_editor", &self.on_switch_to_editor.is_some())
			.field("initial_message", &self.initial_message)
			.finish_non_exhaustive()
	}
}

/// Metadata kept while the panel is open.
pub(crate) struct OpenPanel {
	pub target: CommitTarget,
	pub summary_title: String,
	pub description_title: String,
	pub preserve_message: bool,
	pub on_confirm: OnConfirm,
	pub on_switch_to_editor: Option<OnSwitchToEditor>,
}

impl From<OpenCommitMessagePanel> for OpenPanel {
	fn from(req: OpenCommitMessagePanel) -> Self {
		Self {
			target: req.target,
			summary_title: req.summary_title,
			description_title: req.description_title,
			preserve_message: req.preserve_message,
			on_confirm: req.on_confirm,
			on_switch_to_editor: req.on_switch_to_editor,
		}
	}
}

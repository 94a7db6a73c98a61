use tokio::sync::mpsc;

use super::{CredentialBridge, CredentialKind, CredentialMsg};
use crate::host::{ContextKey, ViewKind, ViewStack};

/// Foreground side of the credential prompt.
#[derive(Debug)]
pub struct CredentialsPanel {
	bridge: CredentialBridge,
	input: String,
	active: Option<CredentialKind>,
}

impl CredentialsPanel {
	pub fn new(bridge: CredentialBridge) -> Self {
		Self {
			bridge,
			input: String::new(),
			active: None,
		}
	}

	/// Kind of the prompt being shown.
	pub fn active(&self) -> Option<CredentialKind> {
		self.active
	}

	pub fn title(&self) -> Option<&'static str> {
		self.active.map(CredentialKind::title)
	}

	pub fn mask(&self) -> Option<char> {
		self.active.and_then(CredentialKind::mask)
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn set_input(&mut self, text: impl Into<String>) {
		self.input = text.into();
	}

	/// Input as drawn: every char replaced by the mask, if any.
	pub fn masked_input(&self) -> String {
		match self.mask() {
			Some(mask) => self.input.chars().map(|_| mask).collect(),
			None => self.input.clone(),
		}
	}

	/// Handles every message queued by the bridge. Returns how many there were.
	pub fn drain(&mut self, rx: &mut mpsc::UnboundedReceiver<CredentialMsg>, views: &mut dyn ViewStack) -> usize {
		let mut handled = 0;
		while let Ok(msg) = rx.try_recv() {
			self.handle(msg, views);
			handled += 1;
		}
		handled
	}

	pub fn handle(&mut self, msg: CredentialMsg, views: &mut dyn ViewStack) {
		match msg {
			CredentialMsg::Prompt { kind } => self.show(kind, views),
		}
	}

	/// Shows the prompt for `kind`.
	///
	/// A prompt that is already up is retitled in place.
	pub fn show(&mut self, kind: CredentialKind, views: &mut dyn ViewStack) {
		let was_active = self.active.replace(kind).is_some();
		self.input.clear();
		if was_active {
			return;
		}
		tracing::debug!(?kind, "showing credential prompt");
		views.set_visible(ViewKind::Credentials, true);
		views.push(ContextKey::Credentials);
	}

	/// Sends the trimmed input, line-terminated, to the waiting request.
	pub fn submit(&mut self, views: &mut dyn ViewStack) {
		if self.active.is_none() {
			tracing::warn!("credential submit without an open prompt");
			return;
		}
		let secret = format!("{}\n", self.input.trim());
		self.close(views);
		self.bridge.reply(secret);
	}

	/// Answers the waiting request with an empty string.
	pub fn dismiss(&mut self, views: &mut dyn ViewStack) {
		if self.active.is_none() {
			tracing::warn!("credential dismiss without an open prompt");
			return;
		}
		self.close(views);
		self.bridge.reply(String::new());
	}

	fn close(&mut self, views: &mut dyn ViewStack) {
		self.input.clear();
		self.active = None;
		views.set_visible(ViewKind::Credentials, false);
		views.pop();
	}
}

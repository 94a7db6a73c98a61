//! What the panels need from the surrounding UI.

use std::collections::HashSet;

/// Focusable contexts that can sit on the view stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
	CommitMessage,
	Credentials,
}

/// Drawable surfaces whose visibility the panels toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
	/// Single line summary input.
	CommitMessage,
	/// Multi-line description input.
	CommitDescription,
	/// Credential entry input.
	Credentials,
}

/// LIFO stack of focused contexts plus view visibility.
///
/// Every push made by a panel is balanced by exactly one pop when it closes.
pub trait ViewStack {
	fn push(&mut self, context: ContextKey);
	fn pop(&mut self);
	fn set_visible(&mut self, view: ViewKind, visible: bool);
}

/// Plain in-memory [`ViewStack`].
#[derive(Debug, Default)]
pub struct ContextStack {
	stack: Vec<ContextKey>,
	visible: HashSet<ViewKind>,
}

impl ContextStack {
	pub fn new() -> Self {
		Self::default()
	}

	/// Context currently holding focus.
	pub fn current(&self) -> Option<ContextKey> {
		self.stack.last().copied()
	}

	pub fn depth(&self) -> usize {
		self.stack.len()
	}

	pub fn is_visible(&self, view: ViewKind) -> bool {
		self.visible.contains(&view)
	}
}

impl ViewStack for ContextStack {
	fn push(&mut self, context: ContextKey) {
		self.stack.push(context);
	}

	fn pop(&mut self) {
		if self.stack.pop().is_none() {
			tracing::warn!("pop on empty context stack");
		}
	}

	fn set_visible(&mut self, view: ViewKind, visible: bool) {
		if visible {
			self.visible.insert(view);
		} else {
			self.visible.remove(&view);
		}
	}
}

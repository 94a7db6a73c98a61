//! Shared fakes for the integration tests.

use kommit_editor::{ContextKey, ContextStack, ViewKind, ViewStack};

/// Installs a test-writer subscriber once per process.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// One call made against the view stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOp {
	Push(ContextKey),
	Pop,
	Show(ViewKind),
	Hide(ViewKind),
}

/// [`ViewStack`] that records every call on top of a [`ContextStack`].
#[derive(Debug, Default)]
pub struct RecordingViews {
	pub stack: ContextStack,
	pub ops: Vec<ViewOp>,
}

impl RecordingViews {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn pushes(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, ViewOp::Push(_))).count()
	}

	pub fn pops(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, ViewOp::Pop)).count()
	}
}

impl ViewStack for RecordingViews {
	fn push(&mut self, context: ContextKey) {
		self.ops.push(ViewOp::Push(context));
		self.stack.push(context);
	}

	fn pop(&mut self) {
		self.ops.push(ViewOp::Pop);
		self.stack.pop();
	}

	fn set_visible(&mut self, view: ViewKind, visible: bool) {
		self.ops.push(if visible { ViewOp::Show(view) } else { ViewOp::Hide(view) });
		self.stack.set_visible(view, visible);
	}
}

/// Trailing whitespace stripped from every line, as git does on commit.
pub fn strip_like_git(message: &str) -> String {
	message.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

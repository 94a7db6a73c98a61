use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, oneshot};

use super::{CredentialKind, CredentialMsg};
use crate::error::CredentialError;

/// Handle shared by the background callers and the foreground panel.
///
/// Clones refer to the same reply slot.
#[derive(Debug, Clone)]
pub struct CredentialBridge {
	inner: Arc<BridgeInner>,
}

#[derive(Debug)]
struct BridgeInner {
	/// Reply slot of the request currently waiting, if any.
	pending: Mutex<Option<oneshot::Sender<String>>>,
	ui_tx: mpsc::UnboundedSender<CredentialMsg>,
}

impl CredentialBridge {
	/// Creates a bridge and the receiver the UI loop drains.
	pub fn new() -> (Self, mpsc::UnboundedReceiver<CredentialMsg>) {
		let (ui_tx, ui_rx) = mpsc::unbounded_channel();
		let bridge = Self {
			inner: Arc::new(BridgeInner {
				pending: Mutex::new(None),
				ui_tx,
			}),
		};
		(bridge, ui_rx)
	}

	/// Asks the UI for a credential and blocks until it answers.
	///
	/// Returns the submitted text followed by `\n`, or `""` when the prompt
	/// was dismissed.
	///
	/// # Panics
	///
	/// Blocks the current thread, so it panics when called from within an
	/// async execution context. Call it from a plain or blocking thread.
	pub fn request_credential(&self, kind: CredentialKind) -> Result<String, CredentialError> {
		let reply = {
			let mut pending = self.inner.pending.lock();
			if pending.as_ref().is_some_and(|tx| !tx.is_closed()) {
				tracing::debug!(?kind, "credential request rejected, another is in flight");
				return Err(CredentialError::RequestInFlight);
			}

			let (tx, rx) = oneshot::channel();
			*pending = Some(tx);
			if self.inner.ui_tx.send(CredentialMsg::Prompt { kind }).is_err() {
				*pending = None;
				return Err(CredentialError::UiClosed);
			}
			rx
		};

		tracing::debug!(?kind, "waiting for credential");
		reply.blocking_recv().map_err(|_| CredentialError::Abandoned)
	}

	/// Whether a request is waiting for an answer.
	pub fn is_pending(&self) -> bool {
		self.inner.pending.lock().as_ref().is_some_and(|tx| !tx.is_closed())
	}

	/// Drops the waiting request's reply slot; the caller gets
	/// [`CredentialError::Abandoned`].
	pub fn abandon(&self) {
		if self.inner.pending.lock().take().is_some() {
			tracing::debug!("credential request abandoned");
		}
	}

	/// Answers the waiting request. Returns whether anybody received it.
	pub(crate) fn reply(&self, value: String) -> bool {
		let Some(tx) = self.inner.pending.lock().take() else {
			tracing::warn!("credential answer without a pending request");
			return false;
		};
		if tx.send(value).is_err() {
			tracing::debug!("credential requester went away before the answer");
			return false;
		}
		true
	}
}

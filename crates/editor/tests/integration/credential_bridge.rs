//! Credential prompts answered across real threads.

use std::thread;
use std::time::Duration;

use kommit_editor::{
	ContextKey, CredentialBridge, CredentialError, CredentialKind, CredentialMsg, CredentialsPanel, ViewKind, ViewStack,
};
use pretty_assertions::assert_eq;

use crate::common::{RecordingViews, ViewOp, init_tracing};

/// Plays the UI loop until the next prompt shows up.
fn next_prompt(
	rx: &mut tokio::sync::mpsc::UnboundedReceiver<CredentialMsg>,
	panel: &mut CredentialsPanel,
	views: &mut RecordingViews,
) -> CredentialKind {
	let msg = rx.blocking_recv().unwrap();
	panel.handle(msg, views);
	panel.active().unwrap()
}

#[test]
fn username_then_password_like_git_over_https() {
	init_tracing();
	let (bridge, mut rx) = CredentialBridge::new();
	let background = bridge.clone();
	let git = thread::spawn(move || -> Result<(String, String), CredentialError> {
		let user = background.request_credential(CredentialKind::Username)?;
		let pass = background.request_credential(CredentialKind::Password)?;
		Ok((user, pass))
	});

	let mut panel = CredentialsPanel::new(bridge);
	let mut views = RecordingViews::new();
	views.push(ContextKey::CommitMessage);

	assert_eq!(next_prompt(&mut rx, &mut panel, &mut views), CredentialKind::Username);
	assert_eq!(panel.mask(), None);
	assert_eq!(views.stack.current(), Some(ContextKey::Credentials));
	panel.set_input("jo\n");
	panel.submit(&mut views);
	assert_eq!(views.stack.current(), Some(ContextKey::CommitMessage));

	assert_eq!(next_prompt(&mut rx, &mut panel, &mut views), CredentialKind::Password);
	assert_eq!(panel.title(), Some("Password"));
	panel.set_input("s3cret");
	assert_eq!(panel.masked_input(), "******");
	panel.submit(&mut views);

	assert_eq!(git.join().unwrap(), Ok(("jo\n".to_string(), "s3cret\n".to_string())));
	assert_eq!(views.stack.depth(), 1);
	assert!(!views.stack.is_visible(ViewKind::Credentials));
	assert_eq!(
		&views.ops[1..5],
		&[
			ViewOp::Show(ViewKind::Credentials),
			ViewOp::Push(ContextKey::Credentials),
			ViewOp::Hide(ViewKind::Credentials),
			ViewOp::Pop,
		]
	);
}

#[test]
fn dismissed_passphrase_lets_caller_retry() {
	init_tracing();
	let (bridge, mut rx) = CredentialBridge::new();
	let background = bridge.clone();
	let ssh = thread::spawn(move || {
		let mut attempts = 0;
		loop {
			attempts += 1;
			let answer = background.request_credential(CredentialKind::Passphrase).unwrap();
			if !answer.is_empty() {
				return (attempts, answer);
			}
		}
	});

	let mut panel = CredentialsPanel::new(bridge);
	let mut views = RecordingViews::new();

	next_prompt(&mut rx, &mut panel, &mut views);
	panel.set_input("wrong");
	panel.dismiss(&mut views);

	next_prompt(&mut rx, &mut panel, &mut views);
	panel.set_input("  correct horse  ");
	panel.submit(&mut views);

	assert_eq!(ssh.join().unwrap(), (2, "correct horse\n".to_string()));
	assert_eq!(views.pushes(), views.pops());
}

#[test]
fn concurrent_request_does_not_disturb_the_first() {
	init_tracing();
	let (bridge, mut rx) = CredentialBridge::new();
	let first_bridge = bridge.clone();
	let first = thread::spawn(move || first_bridge.request_credential(CredentialKind::Username));

	let mut panel = CredentialsPanel::new(bridge.clone());
	let mut views = RecordingViews::new();
	next_prompt(&mut rx, &mut panel, &mut views);

	let second_bridge = bridge.clone();
	let second = thread::spawn(move || second_bridge.request_credential(CredentialKind::Password));
	assert_eq!(second.join().unwrap(), Err(CredentialError::RequestInFlight));
	assert!(rx.try_recv().is_err());

	panel.set_input("jo");
	panel.submit(&mut views);
	assert_eq!(first.join().unwrap(), Ok("jo\n".to_string()));
	assert!(!bridge.is_pending());
}

#[test]
fn requester_gone_before_answer_is_harmless() {
	init_tracing();
	let (bridge, mut rx) = CredentialBridge::new();
	let background = bridge.clone();
	let waiting = thread::spawn(move || background.request_credential(CredentialKind::Password));

	let mut panel = CredentialsPanel::new(bridge.clone());
	let mut views = RecordingViews::new();
	next_prompt(&mut rx, &mut panel, &mut views);

	bridge.abandon();
	assert_eq!(waiting.join().unwrap(), Err(CredentialError::Abandoned));

	// The prompt is still up; answering it goes nowhere.
	panel.set_input("late");
	panel.submit(&mut views);
	assert_eq!(views.stack.depth(), 0);

	// A new request goes through normally.
	let background = bridge.clone();
	let retry = thread::spawn(move || background.request_credential(CredentialKind::Password));
	next_prompt(&mut rx, &mut panel, &mut views);
	panel.set_input("on time");
	panel.submit(&mut views);
	assert_eq!(retry.join().unwrap(), Ok("on time\n".to_string()));
}

#[test]
fn shut_down_ui_never_blocks_the_caller() {
	init_tracing();
	let (bridge, rx) = CredentialBridge::new();
	drop(rx);

	let background = bridge.clone();
	let caller = thread::spawn(move || background.request_credential(CredentialKind::Username));
	let started = std::time::Instant::now();
	assert_eq!(caller.join().unwrap(), Err(CredentialError::UiClosed));
	assert!(started.elapsed() < Duration::from_secs(5));
}

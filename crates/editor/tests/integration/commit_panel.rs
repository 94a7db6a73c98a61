//! Commit message panel driven the way a UI loop drives it.

use std::cell::RefCell;
use std::rc::Rc;

use kommit_config::{CommitConfig, Config};
use kommit_editor::{
	CommitError, CommitMessageSession, ContextKey, DraftStore, EditorHandoff, FileDraftStore, MemoryDraftStore,
	OpenCommitMessagePanel, PasteOutcome, ViewKind,
};
use pretty_assertions::assert_eq;

use crate::common::{RecordingViews, ViewOp, init_tracing, strip_like_git};

type Commits = Rc<RefCell<Vec<String>>>;

/// Request whose confirm callback records `summary\n\ndescription`.
fn committing_request() -> (OpenCommitMessagePanel, Commits) {
	let commits: Commits = Rc::default();
	let sink = commits.clone();
	let request = OpenCommitMessagePanel::new(move |summary, description| {
		let message = if description.is_empty() {
			summary.to_string()
		} else {
			format!("{summary}\n\n{description}")
		};
		sink.borrow_mut().push(message);
		Ok(())
	})
	.preserve_message(true);
	(request, commits)
}

#[test]
fn open_and_close_balance_the_view_stack() {
	init_tracing();
	let mut session = CommitMessageSession::new(CommitConfig::default(), MemoryDraftStore::new());
	let mut views = RecordingViews::new();

	session.open(committing_request().0, &mut views).unwrap();
	session.cancel(&mut views).unwrap();
	session.open(committing_request().0, &mut views).unwrap();
	session.set_summary("feat: thing");
	session.confirm(&mut views).unwrap();

	assert_eq!(views.pushes(), 2);
	assert_eq!(views.pops(), 2);
	assert_eq!(views.stack.depth(), 0);
	assert_eq!(
		&views.ops[..3],
		&[
			ViewOp::Show(ViewKind::CommitMessage),
			ViewOp::Show(ViewKind::CommitDescription),
			ViewOp::Push(ContextKey::CommitMessage),
		]
	);
}

#[test]
fn draft_survives_cancel_and_is_consumed_by_commit() {
	init_tracing();
	let dir = tempfile::tempdir().unwrap();
	let draft_path = dir.path().join(".git").join("KOMMIT_PENDING_COMMIT");
	let mut session = CommitMessageSession::new(CommitConfig::default(), FileDraftStore::new(&draft_path));
	let mut views = RecordingViews::new();

	let (request, commits) = committing_request();
	session.open(request, &mut views).unwrap();
	session.set_summary("feat: half done");
	session.set_description("still typing");
	session.cancel(&mut views).unwrap();
	assert_eq!(std::fs::read_to_string(&draft_path).unwrap(), "feat: half done\nstill typing");

	let (request, resumed) = committing_request();
	session.open(request, &mut views).unwrap();
	assert_eq!(session.summary(), "feat: half done");
	assert_eq!(session.unwrapped_description(), "still typing");
	session.confirm(&mut views).unwrap();

	assert!(commits.borrow().is_empty());
	assert_eq!(resumed.borrow().as_slice(), ["feat: half done\n\nstill typing"]);
	assert!(!draft_path.exists());
}

#[test]
fn edited_message_replaces_draft_on_cancel() {
	let drafts = MemoryDraftStore::new();
	let mut session = CommitMessageSession::new(CommitConfig::default(), drafts.clone());
	let mut views = RecordingViews::new();

	let (request, _) = committing_request();
	session.open(request.initial_message("A"), &mut views).unwrap();
	session.set_summary("B");
	session.cancel(&mut views).unwrap();
	assert_eq!(drafts.get(), "B");

	let (request, _) = committing_request();
	session.open(request.initial_message("A"), &mut views).unwrap();
	session.cancel(&mut views).unwrap();
	assert_eq!(drafts.get(), "B");
}

#[test]
fn wrapped_description_round_trips_through_git() {
	init_tracing();
	let config = Config::parse("[commit]\nauto-wrap-width = 20\n").unwrap();
	let mut session = CommitMessageSession::new(config.commit, MemoryDraftStore::new());
	let mut views = RecordingViews::new();
	let typed = "the quick brown fox jumps over the lazy dog\n\nsecond paragraph";

	let (request, commits) = committing_request();
	session.open(request, &mut views).unwrap();
	session.set_summary("docs: fox");
	session.set_description(typed);
	session.confirm(&mut views).unwrap();

	let committed = strip_like_git(&commits.borrow()[0]);
	assert_eq!(
		committed,
		"docs: fox\n\nthe quick brown fox\njumps over the lazy\ndog\n\nsecond paragraph"
	);

	// Rewording the commit loads the stored message back.
	let (request, _) = committing_request();
	session.open(request.initial_message(committed), &mut views).unwrap();
	assert_eq!(session.unwrapped_description(), typed);
}

#[test]
fn confirm_error_is_reported_and_panel_stays_closed() {
	let drafts = MemoryDraftStore::new();
	let mut session = CommitMessageSession::new(CommitConfig::default(), drafts.clone());
	let mut views = RecordingViews::new();
	let request = OpenCommitMessagePanel::new(|_, _| Err(anyhow::anyhow!("pre-commit hook failed"))).preserve_message(true);

	session.open(request, &mut views).unwrap();
	session.set_summary("fix: lint");
	let err = session.confirm(&mut views).unwrap_err();

	assert!(matches!(err, CommitError::Callback(_)));
	assert_eq!(err.to_string(), "pre-commit hook failed");
	assert!(!session.is_open());
	assert_eq!(views.stack.depth(), 0);
	assert_eq!(drafts.load().unwrap(), "fix: lint");
}

#[test]
fn clipboard_paste_flow() {
	let mut session = CommitMessageSession::new(CommitConfig::default(), MemoryDraftStore::new());
	let mut views = RecordingViews::new();
	session.open(committing_request().0, &mut views).unwrap();

	let mut clipboard = "feat: from clipboard\n\nbody".to_string();
	assert_eq!(session.paste_from_clipboard(&mut clipboard).unwrap(), PasteOutcome::Applied);
	assert_eq!(session.summary(), "feat: from clipboard");

	let mut clipboard = "fix: replacement".to_string();
	match session.paste_from_clipboard(&mut clipboard).unwrap() {
		PasteOutcome::NeedsConfirmation(pending) => {
			assert_eq!(session.summary(), "feat: from clipboard");
			session.apply_paste(pending);
		}
		other => panic!("expected confirmation, got {other:?}"),
	}
	assert_eq!(session.summary(), "fix: replacement");
	assert_eq!(session.unwrapped_description(), "");
}

#[test]
fn decorations_from_the_menu() {
	let mut session = CommitMessageSession::new(CommitConfig::default(), MemoryDraftStore::new());
	let mut views = RecordingViews::new();
	session.open(committing_request().0, &mut views).unwrap();
	session.set_summary("fix crash on empty repo");

	let picked = session.gitmoji_suggestions("bug").remove(0);
	session.insert_gitmoji(&picked.value);
	assert_eq!(session.summary(), "🐛fix crash on empty repo");

	session.insert_gitmoji("🚑️");
	assert_eq!(session.summary(), "🚑️fix crash on empty repo");

	session.add_co_author("Jo <jo@example.com>");
	session.add_co_author("Sam <sam@example.com>");
	assert_eq!(
		session.unwrapped_description(),
		"Co-authored-by: Jo <jo@example.com>\nCo-authored-by: Sam <sam@example.com>"
	);
}

#[test]
fn editor_handoff_closes_panel_and_keeps_draft() {
	init_tracing();
	let dir = tempfile::tempdir().unwrap();
	let drafts = MemoryDraftStore::new();
	let mut session = CommitMessageSession::new(CommitConfig::default(), drafts.clone());
	let mut views = RecordingViews::new();
	let opened: Rc<RefCell<Vec<String>>> = Rc::default();
	let sink = opened.clone();

	let (request, commits) = committing_request();
	let request = request.on_switch_to_editor(move |path| {
		sink.borrow_mut().push(std::fs::read_to_string(path)?);
		Ok(())
	});
	session.open(request, &mut views).unwrap();
	session.set_summary("feat: long one");
	session.set_description("needs a real editor");

	let handoff = EditorHandoff::new(dir.path(), "kommit");
	session.switch_to_editor(&handoff, &mut views).unwrap();

	assert_eq!(opened.borrow().as_slice(), ["feat: long one\n\nneeds a real editor"]);
	assert!(commits.borrow().is_empty());
	assert!(!session.is_open());
	assert_eq!(drafts.get(), "feat: long one\nneeds a real editor");
	assert_eq!(views.pushes(), views.pops());
}

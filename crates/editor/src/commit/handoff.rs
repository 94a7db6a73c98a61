use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::CommitError;

/// `strftime` pattern for message file names, e.g. `Jan  2 15.04.05.000000000`.
pub const MESSAGE_FILE_TIMESTAMP: &str = "%b %e %H.%M.%S.%9f";

/// Where message files for an external editor are written.
#[derive(Debug, Clone)]
pub struct EditorHandoff {
	pub temp_dir: PathBuf,
	pub repo_name: String,
}

impl EditorHandoff {
	pub fn new(temp_dir: impl Into<PathBuf>, repo_name: impl Into<String>) -> Self {
		Self {
			temp_dir: temp_dir.into(),
			repo_name: repo_name.into(),
		}
	}

	/// Handoff under the system temp directory.
	pub fn in_system_temp(repo_name: impl Into<String>) -> Self {
		Self::new(std::env::temp_dir(), repo_name)
	}

	/// `{temp_dir}/{repo_name}/{timestamp}.msg` for the given instant.
	pub fn message_path(&self, at: DateTime<Local>) -> PathBuf {
		self.temp_dir
			.join(&self.repo_name)
			.join(format!("{}.msg", at.format(MESSAGE_FILE_TIMESTAMP)))
	}

	/// Writes `message` to a fresh file and returns its path.
	pub fn write_message(&self, message: &str) -> Result<PathBuf, CommitError> {
		let path = self.message_path(Local::now());
		write_file(&path, message)?;
		Ok(path)
	}
}

fn write_file(path: &Path, content: &str) -> Result<(), CommitError> {
	let to_err = |source: std::io::Error| CommitError::TempFile {
		path: path.to_path_buf(),
		source,
	};
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).map_err(to_err)?;
	}
	std::fs::write(path, content).map_err(to_err)
}

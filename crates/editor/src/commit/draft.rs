//! Storage for the one unsent commit message that survives panel close.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::DraftError;

/// Single-slot store for the preserved commit message.
///
/// An empty string means "no draft".
pub trait DraftStore {
	fn load(&self) -> Result<String, DraftError>;
	fn save(&mut self, message: &str) -> Result<(), DraftError>;
}

/// Draft kept in memory. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryDraftStore {
	slot: Arc<Mutex<String>>,
}

impl MemoryDraftStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_draft(message: impl Into<String>) -> Self {
		Self {
			slot: Arc::new(Mutex::new(message.into())),
		}
	}

	/// Current draft contents.
	pub fn get(&self) -> String {
		self.slot.lock().clone()
	}
}

impl DraftStore for MemoryDraftStore {
	fn load(&self) -> Result<String, DraftError> {
		Ok(self.get())
	}

	fn save(&mut self, message: &str) -> Result<(), DraftError> {
		*self.slot.lock() = message.to_string();
		Ok(())
	}
}

/// Draft kept in a single file, typically inside the repository's git dir.
///
/// A missing file reads as no draft; saving an empty draft removes the file.
#[derive(Debug, Clone)]
pub struct FileDraftStore {
	path: PathBuf,
}

impl FileDraftStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_err(&self, source: io::Error) -> DraftError {
		DraftError::Io {
			path: self.path.clone(),
			source,
		}
	}
}

impl DraftStore for FileDraftStore {
	fn load(&self) -> Result<String, DraftError> {
		match std::fs::read_to_string(&self.path) {
			Ok(content) => Ok(content),
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
			Err(e) => Err(self.io_err(e)),
		}
	}

	fn save(&mut self, message: &str) -> Result<(), DraftError> {
		if message.is_empty() {
			return match std::fs::remove_file(&self.path) {
				Ok(()) => Ok(()),
				Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
				Err(e) => Err(self.io_err(e)),
			};
		}
		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
		}
		std::fs::write(&self.path, message).map_err(|e| self.io_err(e))
	}
}

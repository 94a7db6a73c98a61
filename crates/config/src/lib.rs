//! Configuration for kommit.
//!
//! Configuration is written in TOML. Only the `[commit]` table is read; every
//! key is optional and falls back to its default.
//!
//! ```toml
//! [commit]
//! auto-wrap = true
//! auto-wrap-width = 72
//! show-compound-gitmojis = true
//! ```
//!
//! The default location is `$XDG_CONFIG_HOME/kommit/config.toml` (or the
//! platform equivalent). A missing file is not an error.

pub mod error;

use std::path::{Path, PathBuf};

pub use error::{ConfigError, Result};
use serde::Deserialize;

/// Default column at which commit descriptions are wrapped.
pub const DEFAULT_AUTO_WRAP_WIDTH: usize = 72;

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Commit message panel settings.
	pub commit: CommitConfig,
}

/// Settings for the commit message panel.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct CommitConfig {
	/// Soft-wrap the description and reconcile hard breaks when loading text.
	pub auto_wrap: bool,
	/// Wrap width in terminal cells.
	pub auto_wrap_width: usize,
	/// Offer gitmojis whose glyph is a compound sequence.
	pub show_compound_gitmojis: bool,
}

impl Default for CommitConfig {
	fn default() -> Self {
		Self {
			auto_wrap: true,
			auto_wrap_width: DEFAULT_AUTO_WRAP_WIDTH,
			show_compound_gitmojis: true,
		}
	}
}

impl CommitConfig {
	/// Effective wrap width, `None` when wrapping is disabled.
	pub fn wrap_width(&self) -> Option<usize> {
		(self.auto_wrap && self.auto_wrap_width > 0).then_some(self.auto_wrap_width)
	}
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		if config.commit.auto_wrap && config.commit.auto_wrap_width == 0 {
			return Err(ConfigError::InvalidWrapWidth);
		}
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load from `path` if it exists, defaults otherwise.
	pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		if !path.exists() {
			tracing::debug!(path = %path.display(), "no config file, using defaults");
			return Ok(Self::default());
		}
		Self::load(path)
	}

	/// Load from the default location.
	pub fn load_default() -> Result<Self> {
		match default_path() {
			Some(path) => Self::load_or_default(path),
			None => Ok(Self::default()),
		}
	}
}

/// Default config file path, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("kommit").join("config.toml"))
}

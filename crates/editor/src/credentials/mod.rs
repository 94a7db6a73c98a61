//! Credential prompting for background git operations.
//!
//! A background thread that needs a username, password or passphrase calls
//! [`CredentialBridge::request_credential`] and blocks. The request arrives in
//! the UI loop as a [`CredentialMsg`], which [`CredentialsPanel`] turns into a
//! prompt. Submitting or dismissing the prompt answers the blocked thread
//! exactly once.
//!
//! Each request gets a fresh reply slot. Only one request can wait at a time;
//! a second one fails fast with [`CredentialError::RequestInFlight`].
//!
//! [`CredentialError::RequestInFlight`]: crate::CredentialError::RequestInFlight

mod bridge;
mod panel;

pub use bridge::CredentialBridge;
pub use panel::CredentialsPanel;

/// Kind of secret being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredentialKind {
	Username,
	Password,
	Passphrase,
}

impl CredentialKind {
	/// Prompt title.
	pub fn title(self) -> &'static str {
		match self {
			Self::Username => "Username",
			Self::Password => "Password",
			Self::Passphrase => "Passphrase",
		}
	}

	/// Char drawn instead of each typed char, if the input is masked.
	pub fn mask(self) -> Option<char> {
		match self {
			Self::Username => None,
			Self::Password | Self::Passphrase => Some('*'),
		}
	}
}

/// Message from the bridge to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMsg {
	/// Show the credential prompt for `kind`.
	Prompt { kind: CredentialKind },
}

//! The gitmoji table, in the order it is offered to the user.

use super::Gitmoji;

/// All known gitmojis.
pub static GITMOJIS: &[Gitmoji] = &[
	Gitmoji::new("➕", "Add a dependency"),
	Gitmoji::new("🧪", "Add a failing test"),
	Gitmoji::new("👷", "Add or update CI build system"),
	Gitmoji::new("🙈", "Add or update a .gitignore file"),
	Gitmoji::new("🥚", "Add or update an easter egg"),
	Gitmoji::new("📈", "Add or update analytics or track code"),
	Gitmoji::new("💫", "Add or update animations and transitions"),
	Gitmoji::new("🍱", "Add or update assets"),
	Gitmoji::new("👔", "Add or update business logic"),
	Gitmoji::new("🧵", "Add or update code related to multithreading or concurrency"),
	Gitmoji::new("🦺", "Add or update code related to validation"),
	Gitmoji::new("💡", "Add or update comments in source code"),
	Gitmoji::new("📦️", "Add or update compiled files or packages"),
	Gitmoji::new("🔧", "Add or update configuration files"),
	Gitmoji::new("👥", "Add or update contributor(s)"),
	Gitmoji::new("🔨", "Add or update development scripts"),
	Gitmoji::new("📝", "Add or update documentation"),
	Gitmoji::new("🩺", "Add or update healthcheck"),
	Gitmoji::new("📄", "Add or update license"),
	Gitmoji::new("🔊", "Add or update logs"),
	Gitmoji::new("🔐", "Add or update secrets"),
	Gitmoji::new("🌱", "Add or update seed files"),
	Gitmoji::new("📸", "Add or update snapshots"),
	Gitmoji::new("💬", "Add or update text and literals"),
	Gitmoji::new("💄", "Add or update the UI and style files"),
	Gitmoji::new("🏷️", "Add or update types"),
	Gitmoji::new("💸", "Add sponsorships or money related infrastructure"),
	Gitmoji::new("✅", "Add, update, or pass tests"),
	Gitmoji::new("🚩", "Add, update, or remove feature flags"),
	Gitmoji::new("🎉", "Begin a project"),
	Gitmoji::new("🥅", "Catch errors"),
	Gitmoji::new("🚑️", "Critical hotfix"),
	Gitmoji::new("🧐", "Data exploration/inspection"),
	Gitmoji::new("🚀", "Deploy stuff"),
	Gitmoji::new("🗑️", "Deprecate code that needs to be cleaned up"),
	Gitmoji::new("⬇️", "Downgrade dependencies"),
	Gitmoji::new("💚", "Fix CI Build"),
	Gitmoji::new("🐛", "Fix a bug"),
	Gitmoji::new("🚨", "Fix compiler / linter warnings"),
	Gitmoji::new("🔒️", "Fix security or privacy issues"),
	Gitmoji::new("✏️", "Fix typos"),
	Gitmoji::new("🔍️", "Improve SEO"),
	Gitmoji::new("♿️", "Improve accessibility"),
	Gitmoji::new("🧑‍💻", "Improve developer experience"),
	Gitmoji::new("⚡️", "Improve performance"),
	Gitmoji::new("🎨", "Improve structure / format of the code"),
	Gitmoji::new("🚸", "Improve user experience / usability"),
	Gitmoji::new("🧱", "Infrastructure related changes"),
	Gitmoji::new("🌐", "Internationalization and localization"),
	Gitmoji::new("💥", "Introduce breaking changes"),
	Gitmoji::new("✨", "Introduce new features"),
	Gitmoji::new("🏗️", "Make architectural changes"),
	Gitmoji::new("🔀", "Merge branches"),
	Gitmoji::new("🤡", "Mock things"),
	Gitmoji::new("🚚", "Move or rename resources (e.g.: files, paths, routes)"),
	Gitmoji::new("🗃️", "Perform database related changes"),
	Gitmoji::new("⚗️", "Perform experiments"),
	Gitmoji::new("📌", "Pin dependencies to specific versions"),
	Gitmoji::new("♻️", "Refactor code"),
	Gitmoji::new("🔖", "Release / Version tags"),
	Gitmoji::new("➖", "Remove a dependency"),
	Gitmoji::new("🔥", "Remove code or files"),
	Gitmoji::new("⚰️", "Remove dead code"),
	Gitmoji::new("🔇", "Remove logs"),
	Gitmoji::new("⏪️", "Revert changes"),
	Gitmoji::new("🩹", "Simple fix for a non-critical issue"),
	Gitmoji::new("👽️", "Update code due to external API changes"),
	Gitmoji::new("⬆️", "Upgrade dependencies"),
	Gitmoji::new("🚧", "Work in progress"),
	Gitmoji::new("🛂", "Work on code related to authorization, roles and permissions"),
	Gitmoji::new("📱", "Work on responsive design"),
	Gitmoji::new("💩", "Write bad code that needs to be improved"),
	Gitmoji::new("🍻", "Write code drunkenly"),
];

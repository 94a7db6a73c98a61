//! Static catalogs used by the commit message panel.
//!
//! - [`gitmoji`] - the gitmoji table and its lookups
//! - [`classify`] - deciding whether a grapheme is a decoration glyph
//! - [`suggest`] - suggestion values and fuzzy filtering for prompts

pub mod classify;
pub mod gitmoji;
pub mod suggest;

pub use classify::{is_decoration_glyph, is_pictograph_heuristic, is_replaceable_decoration};
pub use gitmoji::{GITMOJIS, Gitmoji};
pub use suggest::{Suggestion, fuzzy_match};

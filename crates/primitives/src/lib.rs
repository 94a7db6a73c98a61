//! Text primitives shared by the commit message panel.

/// Grapheme cluster helpers.
pub mod graphemes;
/// Hard/soft line break reconciliation.
pub mod linebreak;
/// Word-wrap simulation with cursor mappings.
pub mod wrap;

pub use graphemes::{first_cluster_scalar_count, grapheme_count, split_first_grapheme};
pub use linebreak::try_remove_hard_line_breaks;
pub use wrap::{CursorMapping, auto_wrap_content, char_cells, wrap_str};

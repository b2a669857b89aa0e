//! Pure markdown generation from rendered blocks.
//!
//! - [`escape`]: Pure string transformation utilities for Markdown escaping
//! - [`slugify`]: GitHub-style slug generation for heading anchors
//! - [`render`]: Rendered blocks → Markdown
//!
//! The export layer ([`crate::export`]) handles I/O, calling these pure
//! functions to generate content.
//!
//! ## Design Notes
//!
//! - **Text escaping**: Special Markdown characters (`*`, `_`, `[`, `` ` ``, etc.)
//!   are escaped so CMS text never turns into accidental formatting
//! - **Block starts**: A paragraph or list item whose text begins like a
//!   list marker or rule (`1.`, `-`, `---`) has that marker escaped
//! - **Emphasis edges**: Whitespace at either edge of a strong or emphasis
//!   run is moved outside the delimiters, which CommonMark requires
//! - **Underline**: Markdown has no underline syntax, so it is written as
//!   inline `<u>` HTML
//! - **Inline code**: Uses the minimum backtick run that doesn't conflict
//!   with content

mod escape;
mod render;
mod slugify;

pub use escape::{calculate_inline_code_ticks, escape_block_start, escape_markdown};
pub use render::{MarkdownConfig, render_markdown};
pub use slugify::{SlugRegistry, slugify};

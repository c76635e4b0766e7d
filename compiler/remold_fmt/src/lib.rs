//! Remold Formatter
//!
//! Restores consistent whitespace to trees after a rewrite has added,
//! removed or moved nodes.
//!
//! # Architecture
//!
//! Every pass is a [`JavaVisitor`](remold_visit::JavaVisitor) that only
//! rewrites [`Space`](remold_tree::Space) values; the structure of the tree
//! never changes, so printing a formatted tree differs from printing the
//! original in whitespace alone. [`AutoFormatVisitor`] chains the passes,
//! each on a fresh fork of the cursor:
//!
//! 1. **Normalize**: declaration formatting moved back to the declaration
//! 2. **Minimum spacing**: one space between words that would otherwise fuse
//! 3. **Trailing whitespace**: spaces at line ends removed
//! 4. **Blank lines**: runs clamped, required separations added
//! 5. **Spaces**: same-line spacing per [`SpacesStyle`]
//! 6. **Wrapping**: one statement per line, one annotation per line
//! 7. **Tabs or spaces**: indentation characters per [`TabsAndIndentsStyle`]
//! 8. **Tabs and indents**: indentation columns
//! 9. **Line breaks**: `\n` or `\r\n` per [`GeneralFormatStyle`]
//!
//! Every pass takes an optional stop-after node: once that node has been
//! visited, the rest of the tree comes back untouched.
//!
//! # Modules
//!
//! - [`style`]: style configuration, IntelliJ defaults
//! - [`tabs_and_indents`]: the indentation engine
//! - [`spaces`]: same-line spacing
//! - [`auto_format`](mod@auto_format): the pipeline

pub mod auto_format;
pub mod blank_lines;
mod error;
pub mod line_breaks;
pub mod minimum_spacing;
pub mod normalize;
pub mod spaces;
pub mod style;
pub mod tabs_and_indents;
pub mod tabs_or_spaces;
pub mod trailing_whitespace;
pub mod wrapping;

pub use auto_format::{auto_format, auto_format_at, AutoFormatVisitor};
pub use blank_lines::BlankLinesVisitor;
pub use error::{FormatError, FormatResult};
pub use line_breaks::NormalizeLineBreaksVisitor;
pub use minimum_spacing::MinimumViableSpacingVisitor;
pub use normalize::NormalizeFormatVisitor;
pub use spaces::SpacesVisitor;
pub use style::{
    BlankLinesStyle, EmptyForInitializerPadStyle, EmptyForIteratorPadStyle, GeneralFormatStyle,
    SpacesStyle, Styles, TabsAndIndentsStyle,
};
pub use tabs_and_indents::TabsAndIndentsVisitor;
pub use tabs_or_spaces::NormalizeTabsOrSpacesVisitor;
pub use trailing_whitespace::RemoveTrailingWhitespaceVisitor;
pub use wrapping::WrappingAndBracesVisitor;

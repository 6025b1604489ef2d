//! steambb - Markdown to Steam BBCode conversion.
//!
//! # Quick Start
//!
//! ```rust
//! let bbcode = steambb::convert("# Patch notes\n\n>! the cake is a lie");
//! assert_eq!(bbcode, "[h1]Patch notes[/h1]\n\n[spoiler]the cake is a lie[/spoiler]");
//! ```
//!
//! # Architecture
//!
//! Conversion is two pure steps: the markdown reader builds an mdast-shaped
//! [`Node`] tree, and the BBCode writer renders that tree to a string. Trees
//! produced elsewhere (for instance decoded from mdast JSON with the `json`
//! feature) can be rendered directly with [`bbcode::render`].
//!
//! # Features
//!
//! - `markdown` - Markdown reader and [`convert`] (default)
//! - `json` - serde support for [`Node`] in mdast JSON form (default)

// Re-export core types
pub use steambb_core::*;

/// Markdown reader.
#[cfg(feature = "markdown")]
pub mod markdown {
    pub use steambb_read_markdown::{
        parse, parse_bytes, parse_bytes_with_options, parse_with_options,
    };
}

/// Steam BBCode writer.
pub mod bbcode {
    pub use steambb_write_bbcode::{emit, render};
}

/// Convert markdown text to Steam BBCode.
#[cfg(feature = "markdown")]
pub fn convert(text: &str) -> String {
    convert_with_options(text, &ParseOptions::default())
}

/// Convert markdown text to Steam BBCode with custom reader options.
#[cfg(feature = "markdown")]
pub fn convert_with_options(text: &str, options: &ParseOptions) -> String {
    bbcode::render(&markdown::parse_with_options(text, options))
}

/// Commonly used items.
pub mod prelude {
    pub use crate::bbcode;
    #[cfg(feature = "markdown")]
    pub use crate::{convert, convert_with_options, markdown};
    pub use steambb_core::{ConversionResult, FidelityWarning, Node, ParseOptions};
}

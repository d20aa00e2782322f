//! Markup color renderer and interactive segment parser for chat text.
//!
//! This crate interprets a small markup language embedded in plain strings
//! and turns it into renderer-native color sequences and structured
//! interactive segments:
//!
//! - `&x` - single legacy color/style code, `x` in `[0-9a-fk-or]`
//! - `{#RRGGBB}` / `<#RRGGBB>` / `&#RRGGBB` / `#RRGGBB` - solid RGB literal
//! - `<G:RRGGBB>text</G:RRGGBB>` - gradient span
//! - `<R:NN>text</R>` - rainbow span, `NN` = saturation percent
//! - `<hover=[...]>text</hover>`, `<run=[...]>`, `<suggest=[...]>`,
//!   `<url=[...]>` - interactive segments, optionally chained with a second
//!   `|ACTION=[...]`
//!
//! Rendering never fails: malformed markup passes through as literal text
//! and malformed numerics fall back to defaults.
//!
//! # Usage
//!
//! ```
//! use chroma::{parse_segments, render};
//!
//! let line = render("&cwarning <#55ff55>ok", true);
//! assert!(line.starts_with("§c"));
//!
//! let segments = parse_segments("<run=[/help]>help</run>", true);
//! assert!(segments[0].click.is_some());
//! ```

pub mod color;
pub mod error;
pub mod parser;
pub mod render;
pub mod segment;

// Re-export main types at crate root
pub use color::{ALT_MARKER, Format, LegacyColor, MARKER, Rgb, nearest};
pub use error::ColorError;
pub use parser::{parse_segments, single_segment, strip_tags};
pub use render::{
    parse_unicode, render, strip_all, strip_formats, strip_legacy, strip_rgb, translate_codes,
};
pub use segment::{ActionKind, ClickAction, Segment};

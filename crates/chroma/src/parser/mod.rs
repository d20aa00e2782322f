//! Parser for interactive event tags.
//!
//! This module contains the tag lexer, the action resolver, and the segment
//! assembler.

mod lexer;
mod segments;
mod tag;

pub use lexer::{Lexer, RawTag, Token};
pub use segments::{parse_segments, single_segment, strip_tags};
pub use tag::ResolvedAction;

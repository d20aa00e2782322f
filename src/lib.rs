//! Facade over the chroma-chat workspace.
//!
//! Re-exports the markup core (`chroma`) and the delivery layer
//! (`courier`) so hosts can depend on one crate:
//!
//! ```
//! use chroma_chat::{parse_segments, render};
//!
//! let rendered = render("&7hey <#55ff55>you", true);
//! let segments = parse_segments("<run=[/help]>help</run>", true);
//! assert_eq!(segments.len(), 1);
//! ```

pub use chroma;
pub use courier;

pub use chroma::{
    ActionKind, ClickAction, Format, LegacyColor, Rgb, Segment, nearest, parse_segments, render,
    strip_all,
};
pub use courier::{
    BarColor, BarRequest, BarStyle, BossbarManager, ChannelRequest, CharTable, Messenger,
    MessengerOptions, RecipientId, TitleTiming, classify,
};

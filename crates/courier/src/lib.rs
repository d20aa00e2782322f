//! Channel routing, layout and delivery seams for chat markup.
//!
//! Where the `chroma` crate turns markup into colors and segments, this
//! crate decides *where* a line goes and *how* it is laid out:
//!
//! - [`router`] classifies a leading `[keyword]` token into a channel:
//!   chat, title, action bar, floating bar, or raw payload.
//! - [`center`] balances a line against a pixel budget using the mutable
//!   [`width::CharTable`] registry.
//! - [`bossbar`] owns per-recipient floating-bar state and its decay
//!   animation, driven by [`timer`].
//! - [`sink`] and [`hooks`] are the seams to the host: delivery transports
//!   and placeholder/identity collaborators are opaque implementations the
//!   host selects at startup.
//! - [`messenger::Messenger`] ties the pipeline together.
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use courier::{Messenger, RecipientId};
//! use courier::router::TitleTiming;
//! use courier::sink::{BarSink, MessageSink};
//! # use courier::router::{BarColor, BarStyle};
//! # struct Host;
//! # impl MessageSink for Host {
//! #     fn send_chat(&self, _: RecipientId, _: Vec<chroma::Segment>) {}
//! #     fn send_title(&self, _: RecipientId, _: &str, _: &str, _: TitleTiming) {}
//! #     fn send_action_bar(&self, _: RecipientId, _: &str) {}
//! #     fn send_raw(&self, _: RecipientId, _: &str) {}
//! # }
//! # struct Bars;
//! # impl BarSink for Bars {
//! #     fn show(&self, _: RecipientId, _: &str, _: BarColor, _: BarStyle) {}
//! #     fn set_progress(&self, _: RecipientId, _: f64) {}
//! #     fn remove(&self, _: RecipientId) {}
//! # }
//!
//! let messenger = Messenger::new(Arc::new(Host), Arc::new(Bars));
//! messenger.send(1, 1, "[title:5]&6Welcome\n&7glad you made it");
//! messenger.send(1, 1, "<center>&aA centered line");
//! ```

pub mod bossbar;
pub mod center;
pub mod hooks;
pub mod messenger;
pub mod router;
pub mod sink;
pub mod timer;
pub mod width;

/// Opaque host-assigned recipient key.
pub type RecipientId = u64;

pub use bossbar::{BarState, BossbarManager};
pub use center::center_line;
pub use hooks::{HookError, IdentityMarker, NoHooks, Placeholders};
pub use messenger::{Messenger, MessengerOptions, replace_each_ignore_case};
pub use router::{BarColor, BarRequest, BarStyle, ChannelRequest, TitleTiming, classify};
pub use sink::{BarSink, MessageSink};
pub use width::CharTable;

// Re-export the log crate so hosts can use courier::log::info!, etc.
pub use log;

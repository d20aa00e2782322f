//! Capability traits implemented by the host's delivery collaborators.
//!
//! The core never touches a transport: the host selects one implementation
//! of each trait at startup and every channel send goes through it.

use chroma::Segment;

use crate::RecipientId;
use crate::router::{BarColor, BarStyle, TitleTiming};

/// Delivery surface for rendered messages.
pub trait MessageSink: Send + Sync {
    /// Deliver an ordered run of chat segments.
    fn send_chat(&self, recipient: RecipientId, segments: Vec<Segment>);

    /// Show a title overlay; `subtitle` is empty when absent.
    fn send_title(&self, recipient: RecipientId, title: &str, subtitle: &str, timing: TitleTiming);

    /// Flash text on the action bar.
    fn send_action_bar(&self, recipient: RecipientId, text: &str);

    /// Hand a raw structured payload to the host verbatim.
    fn send_raw(&self, recipient: RecipientId, payload: &str);
}

/// Delivery surface for floating bars.
pub trait BarSink: Send + Sync + 'static {
    /// Display a bar at full progress.
    fn show(&self, recipient: RecipientId, text: &str, color: BarColor, style: BarStyle);

    /// Update the progress of a displayed bar, `0.0..=1.0`.
    fn set_progress(&self, recipient: RecipientId, progress: f64);

    /// Remove the bar, if still displayed.
    fn remove(&self, recipient: RecipientId);
}

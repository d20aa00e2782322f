//! Interactive text segments.
//!
//! A [`Segment`] is a contiguous run of text sharing one optional click
//! action and one optional hover payload. Segments are ordered; concatenated
//! they reproduce the line's reading order.

/// A click action attached to a segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    /// Run a command on click.
    Run(String),
    /// Put text into the recipient's input on click.
    Suggest(String),
    /// Open a URL on click.
    OpenUrl(String),
}

impl ClickAction {
    /// The literal argument carried by this action.
    pub fn payload(&self) -> &str {
        match self {
            ClickAction::Run(arg) | ClickAction::Suggest(arg) | ClickAction::OpenUrl(arg) => arg,
        }
    }
}

/// An event-tag keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Hover,
    Run,
    Suggest,
    Url,
}

impl ActionKind {
    /// Case-insensitive keyword lookup; unknown keywords resolve to `None`.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "hover" => Some(ActionKind::Hover),
            "run" => Some(ActionKind::Run),
            "suggest" => Some(ActionKind::Suggest),
            "url" => Some(ActionKind::Url),
            _ => None,
        }
    }

    /// The canonical keyword spelling.
    pub const fn keyword(self) -> &'static str {
        match self {
            ActionKind::Hover => "hover",
            ActionKind::Run => "run",
            ActionKind::Suggest => "suggest",
            ActionKind::Url => "url",
        }
    }
}

/// A contiguous run of text with optional click and hover events.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Segment {
    /// The visible text of this segment.
    pub text: String,
    /// Click action, if any.
    pub click: Option<ClickAction>,
    /// Hover payload lines, already color-rendered, if any.
    pub hover: Option<Vec<String>>,
}

impl Segment {
    /// A segment with no events.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            click: None,
            hover: None,
        }
    }

    /// Join the hover lines into one payload, line breaks between lines and
    /// none after the last.
    pub fn hover_text(&self) -> Option<String> {
        self.hover.as_ref().map(|lines| lines.join("\n"))
    }

    /// Returns true if this segment carries a click or hover event.
    pub fn has_events(&self) -> bool {
        self.click.is_some() || self.hover.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_keywords() {
        assert_eq!(ActionKind::from_keyword("hover"), Some(ActionKind::Hover));
        assert_eq!(ActionKind::from_keyword("RUN"), Some(ActionKind::Run));
        assert_eq!(ActionKind::from_keyword("Suggest"), Some(ActionKind::Suggest));
        assert_eq!(ActionKind::from_keyword("url"), Some(ActionKind::Url));
        assert_eq!(ActionKind::from_keyword("text"), None);
    }

    #[test]
    fn click_payload() {
        assert_eq!(ClickAction::Run("/help".into()).payload(), "/help");
        assert_eq!(ClickAction::OpenUrl("https://a.b".into()).payload(), "https://a.b");
    }

    #[test]
    fn hover_join() {
        let segment = Segment {
            text: "hi".into(),
            click: None,
            hover: Some(vec!["A".into(), "B".into()]),
        };
        assert_eq!(segment.hover_text().as_deref(), Some("A\nB"));
        assert!(segment.has_events());
        assert!(!Segment::plain("x").has_events());
    }
}

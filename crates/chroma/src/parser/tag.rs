//! Resolving raw tags into segment actions.

use crate::render;
use crate::segment::{ActionKind, ClickAction};

use super::lexer::RawTag;

/// A resolved event-tag action.
#[derive(Clone, Debug, PartialEq)]
pub enum ResolvedAction {
    /// Hover payload lines, each independently color-rendered.
    Hover(Vec<String>),
    /// A click action carrying its literal argument.
    Click(ClickAction),
}

impl ResolvedAction {
    /// Resolve a raw tag.
    ///
    /// Unknown keywords resolve to `None`; the caller consumes the tag
    /// boundaries either way, so unrecognized markup never leaks into
    /// rendered output.
    pub fn resolve(tag: &RawTag<'_>, true_color: bool) -> Option<Self> {
        match ActionKind::from_keyword(tag.keyword)? {
            ActionKind::Hover => Some(ResolvedAction::Hover(
                tag.arg
                    .split('\n')
                    .map(|line| render::render(line, true_color))
                    .collect(),
            )),
            ActionKind::Run => Some(ResolvedAction::Click(ClickAction::Run(tag.arg.to_string()))),
            ActionKind::Suggest => Some(ResolvedAction::Click(ClickAction::Suggest(
                tag.arg.to_string(),
            ))),
            ActionKind::Url => Some(ResolvedAction::Click(ClickAction::OpenUrl(
                tag.arg.to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_click_kinds() {
        let tag = RawTag {
            keyword: "run",
            arg: "/help",
        };
        assert_eq!(
            ResolvedAction::resolve(&tag, true),
            Some(ResolvedAction::Click(ClickAction::Run("/help".into())))
        );

        let tag = RawTag {
            keyword: "URL",
            arg: "https://x.y",
        };
        assert_eq!(
            ResolvedAction::resolve(&tag, true),
            Some(ResolvedAction::Click(ClickAction::OpenUrl(
                "https://x.y".into()
            )))
        );
    }

    #[test]
    fn resolve_hover_renders_lines() {
        let tag = RawTag {
            keyword: "hover",
            arg: "&cA\nB",
        };
        assert_eq!(
            ResolvedAction::resolve(&tag, true),
            Some(ResolvedAction::Hover(vec!["§cA".into(), "B".into()]))
        );
    }

    #[test]
    fn resolve_unknown_keyword() {
        let tag = RawTag {
            keyword: "foo",
            arg: "x",
        };
        assert_eq!(ResolvedAction::resolve(&tag, true), None);
    }
}

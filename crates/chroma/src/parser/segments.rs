//! Segment assembly from event-tag tokens.

use crate::render;
use crate::segment::{ActionKind, ClickAction, Segment};

use super::lexer::{Lexer, RawTag, Token, raw_tag_at};
use super::tag::ResolvedAction;

/// Parse event-tag markup into an ordered run of segments.
///
/// Text outside tags becomes plain segments, split only on line breaks.
/// A tagged span becomes one segment carrying the resolved action(s); a tag
/// with an unrecognized action keyword is still consumed, it just attaches
/// nothing, so markup syntax never leaks into the output.
///
/// # Examples
///
/// ```
/// use chroma::parse_segments;
///
/// let segments = parse_segments("<run=[/help]>help</run>", true);
/// assert_eq!(segments.len(), 1);
/// assert!(segments[0].click.is_some());
/// ```
pub fn parse_segments(text: &str, true_color: bool) -> Vec<Segment> {
    let mut segments = Vec::new();
    for token in Lexer::new(text) {
        match token {
            Token::Text(part) => push_plain(&mut segments, part),
            Token::Tagged {
                primary,
                secondary,
                content,
            } => {
                let mut segment = Segment::plain(content);
                apply(&mut segment, &primary, true_color);
                if let Some(secondary) = secondary {
                    apply(&mut segment, &secondary, true_color);
                }
                segments.push(segment);
            }
        }
    }
    segments
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    for line in text.split('\n') {
        if !line.is_empty() {
            segments.push(Segment::plain(line));
        }
    }
}

fn apply(segment: &mut Segment, tag: &RawTag<'_>, true_color: bool) {
    match ResolvedAction::resolve(tag, true_color) {
        Some(ResolvedAction::Hover(lines)) => segment.hover = Some(lines),
        Some(ResolvedAction::Click(click)) => segment.click = Some(click),
        None => {}
    }
}

/// Simplified single-segment path for an externally supplied click/hover
/// request.
///
/// Residual tag markup inside `text` is stripped rather than parsed, so a
/// line never gets both treatments. Hover lines are color-rendered here the
/// same way parsed hover arguments are.
pub fn single_segment(
    text: &str,
    click: Option<ClickAction>,
    hover: Vec<String>,
    true_color: bool,
) -> Segment {
    let hover = if hover.is_empty() {
        None
    } else {
        Some(
            hover
                .iter()
                .map(|line| render::render(line, true_color))
                .collect(),
        )
    };
    Segment {
        text: strip_tags(text),
        click,
        hover,
    }
}

/// Remove event-tag markup without parsing it.
///
/// Matches `</?ACTION>` and `<ACTION=[ARG]>` forms (with an optional
/// chained `|ACTION2=[ARG2]`) for the known action keywords; idempotent.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        if let Some(len) = tag_form_len(text, i) {
            i += len;
            continue;
        }
        let Some(c) = text[i..].chars().next() else {
            break;
        };
        out.push(c);
        i += c.len_utf8();
    }
    out
}

fn tag_form_len(text: &str, i: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes[i] != b'<' {
        return None;
    }
    let mut j = i + 1;
    if bytes.get(j) == Some(&b'/') {
        j += 1;
    }
    let word_start = j;
    while j < bytes.len() && bytes[j].is_ascii_alphabetic() {
        j += 1;
    }
    ActionKind::from_keyword(&text[word_start..j])?;
    match bytes.get(j) {
        Some(&b'>') => Some(j + 1 - i),
        Some(&b'=') => {
            let rest = &text[i..];
            let (tag, mut cursor) = raw_tag_at(rest, word_start - i)?;
            ActionKind::from_keyword(tag.keyword)?;
            if rest.as_bytes().get(cursor) == Some(&b'|') {
                let (chained, next) = raw_tag_at(rest, cursor + 1)?;
                ActionKind::from_keyword(chained.keyword)?;
                cursor = next;
            }
            if rest.as_bytes().get(cursor) == Some(&b'>') {
                Some(cursor + 1)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_line() {
        let segments = parse_segments("hello world", true);
        assert_eq!(segments, vec![Segment::plain("hello world")]);
    }

    #[test]
    fn parse_splits_plain_text_on_line_breaks() {
        let segments = parse_segments("one\ntwo", true);
        assert_eq!(
            segments,
            vec![Segment::plain("one"), Segment::plain("two")]
        );
    }

    #[test]
    fn parse_run_tag() {
        let segments = parse_segments("<run=[/help]>help</run>", true);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "help");
        assert_eq!(segments[0].click, Some(ClickAction::Run("/help".into())));
        assert!(segments[0].hover.is_none());
    }

    #[test]
    fn parse_hover_splits_lines() {
        let segments = parse_segments("<hover=[A\nB]>click me</hover>", true);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "click me");
        assert_eq!(
            segments[0].hover,
            Some(vec!["A".to_string(), "B".to_string()])
        );
        assert!(segments[0].click.is_none());
    }

    #[test]
    fn parse_chained_actions() {
        let segments = parse_segments("<hover=[tip]|suggest=[/warp]>go</hover>", true);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].hover, Some(vec!["tip".to_string()]));
        assert_eq!(
            segments[0].click,
            Some(ClickAction::Suggest("/warp".into()))
        );
    }

    #[test]
    fn parse_unknown_action_consumes_tag() {
        let segments = parse_segments("<foo=[x]>bar</foo>", true);
        assert_eq!(segments, vec![Segment::plain("bar")]);
    }

    #[test]
    fn parse_surrounding_text() {
        let segments = parse_segments("a <run=[/x]>b</run> c", true);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::plain("a "));
        assert_eq!(segments[1].text, "b");
        assert_eq!(segments[2], Segment::plain(" c"));
    }

    #[test]
    fn single_segment_strips_markup() {
        let segment = single_segment(
            "pre <run=[/x]>mid</run> post",
            Some(ClickAction::Run("/warp".into())),
            vec!["&ctip".into()],
            true,
        );
        assert_eq!(segment.text, "pre mid post");
        assert_eq!(segment.click, Some(ClickAction::Run("/warp".into())));
        assert_eq!(segment.hover, Some(vec!["§ctip".to_string()]));
    }

    #[test]
    fn strip_tags_forms() {
        assert_eq!(strip_tags("<hover=[x]>y</hover>"), "y");
        assert_eq!(strip_tags("<hover=[a]|run=[/b]>y</hover>"), "y");
        assert_eq!(strip_tags("<run>bare</run>"), "bare");
        assert_eq!(strip_tags("<foo=[x]>kept</foo>"), "<foo=[x]>kept</foo>");
        let stripped = strip_tags("<url=[u]>v</url>");
        assert_eq!(strip_tags(&stripped), stripped);
    }
}

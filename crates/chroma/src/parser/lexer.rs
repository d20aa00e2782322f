//! Lexer for event-tag markup.
//!
//! Converts input text into a stream of plain-text and tagged-span tokens.
//! The grammar per tag is `<ACTION=[ARG]>content</ACTION>`, optionally
//! chained with a second `|ACTION2=[ARG2]` before the `>`.

/// A raw `ACTION=[ARG]` pair, not yet resolved to an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawTag<'a> {
    pub keyword: &'a str,
    pub arg: &'a str,
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    /// Plain text between tagged spans.
    Text(&'a str),
    /// A tagged span with its raw content.
    Tagged {
        primary: RawTag<'a>,
        secondary: Option<RawTag<'a>>,
        content: &'a str,
    },
}

/// Lexer for event-tag markup.
///
/// Anything that does not parse as a complete tagged span is passed through
/// as plain text, so malformed markup never breaks a line.
///
/// # Examples
///
/// ```
/// use chroma::parser::{Lexer, Token};
///
/// let tokens: Vec<_> = Lexer::new("a <run=[/help]>help</run> b").collect();
/// assert_eq!(tokens.len(), 3);
/// assert!(matches!(tokens[1], Token::Tagged { .. }));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.pos..];
        if let Some((token, len)) = tag_at(rest) {
            self.pos += len;
            return Some(token);
        }
        let bytes = rest.as_bytes();
        for (i, &b) in bytes.iter().enumerate().skip(1) {
            if b == b'<' && tag_at(&rest[i..]).is_some() {
                self.pos += i;
                return Some(Token::Text(&rest[..i]));
            }
        }
        self.pos = self.input.len();
        Some(Token::Text(rest))
    }
}

/// Match a complete tagged span at the start of `rest`.
fn tag_at(rest: &str) -> Option<(Token<'_>, usize)> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'<') {
        return None;
    }
    let (primary, mut cursor) = raw_tag_at(rest, 1)?;
    let secondary = if bytes.get(cursor) == Some(&b'|') {
        let (tag, next) = raw_tag_at(rest, cursor + 1)?;
        cursor = next;
        Some(tag)
    } else {
        None
    };
    if bytes.get(cursor) != Some(&b'>') {
        return None;
    }
    cursor += 1;
    let content_end = find_close(rest, cursor, primary.keyword)?;
    if content_end == cursor {
        return None;
    }
    let content = &rest[cursor..content_end];
    let total = content_end + primary.keyword.len() + 3;
    Some((
        Token::Tagged {
            primary,
            secondary,
            content,
        },
        total,
    ))
}

/// Parse `KEYWORD=[ARG]` starting at byte `start`; returns the tag and the
/// byte position just past the closing `]`.
///
/// The argument runs to the first `]` whose follower is `>` or `|`, so a
/// `]` inside the argument does not end it early.
pub(super) fn raw_tag_at(rest: &str, start: usize) -> Option<(RawTag<'_>, usize)> {
    let bytes = rest.as_bytes();
    let mut i = start;
    while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
    }
    if i == start || bytes.get(i) != Some(&b'=') || bytes.get(i + 1) != Some(&b'[') {
        return None;
    }
    let keyword = &rest[start..i];
    let arg_start = i + 2;
    let mut j = arg_start;
    while j < bytes.len() {
        if bytes[j] == b']' && matches!(bytes.get(j + 1), Some(&b'>') | Some(&b'|')) {
            if j == arg_start {
                return None;
            }
            return Some((
                RawTag {
                    keyword,
                    arg: &rest[arg_start..j],
                },
                j + 1,
            ));
        }
        j += 1;
    }
    None
}

/// Find the `</KEYWORD>` closing tag (case-insensitive) at or after `from`.
fn find_close(rest: &str, from: usize, keyword: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let close_len = keyword.len() + 3;
    let mut i = from;
    while i + close_len <= rest.len() {
        if bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && rest[i + 2..i + 2 + keyword.len()].eq_ignore_ascii_case(keyword)
            && bytes[i + 2 + keyword.len()] == b'>'
        {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect()
    }

    #[test]
    fn lex_plain_text() {
        assert_eq!(lex("Hello World"), vec![Token::Text("Hello World")]);
    }

    #[test]
    fn lex_tagged_span() {
        assert_eq!(
            lex("<run=[/help]>help</run>"),
            vec![Token::Tagged {
                primary: RawTag {
                    keyword: "run",
                    arg: "/help"
                },
                secondary: None,
                content: "help",
            }]
        );
    }

    #[test]
    fn lex_mixed_content() {
        assert_eq!(
            lex("a <url=[https://x.y]>x</url> b"),
            vec![
                Token::Text("a "),
                Token::Tagged {
                    primary: RawTag {
                        keyword: "url",
                        arg: "https://x.y"
                    },
                    secondary: None,
                    content: "x",
                },
                Token::Text(" b"),
            ]
        );
    }

    #[test]
    fn lex_chained_secondary() {
        assert_eq!(
            lex("<hover=[hi]|run=[/help]>click</hover>"),
            vec![Token::Tagged {
                primary: RawTag {
                    keyword: "hover",
                    arg: "hi"
                },
                secondary: Some(RawTag {
                    keyword: "run",
                    arg: "/help"
                }),
                content: "click",
            }]
        );
    }

    #[test]
    fn lex_case_insensitive_close() {
        assert_eq!(
            lex("<HOVER=[x]>y</hover>"),
            vec![Token::Tagged {
                primary: RawTag {
                    keyword: "HOVER",
                    arg: "x"
                },
                secondary: None,
                content: "y",
            }]
        );
    }

    #[test]
    fn lex_bracket_inside_arg() {
        assert_eq!(
            lex("<hover=[a]b]>x</hover>"),
            vec![Token::Tagged {
                primary: RawTag {
                    keyword: "hover",
                    arg: "a]b"
                },
                secondary: None,
                content: "x",
            }]
        );
    }

    #[test]
    fn lex_newline_inside_arg() {
        assert_eq!(
            lex("<hover=[A\nB]>click me</hover>"),
            vec![Token::Tagged {
                primary: RawTag {
                    keyword: "hover",
                    arg: "A\nB"
                },
                secondary: None,
                content: "click me",
            }]
        );
    }

    #[test]
    fn lex_unclosed_tag_is_text() {
        assert_eq!(
            lex("<run=[/help]>help"),
            vec![Token::Text("<run=[/help]>help")]
        );
    }

    #[test]
    fn lex_bare_angle_is_text() {
        assert_eq!(lex("a < b"), vec![Token::Text("a < b")]);
    }

    #[test]
    fn lex_empty_arg_is_text() {
        assert_eq!(lex("<run=[]>x</run>"), vec![Token::Text("<run=[]>x</run>")]);
    }

    #[test]
    fn lex_unknown_keyword_still_tokenizes() {
        // Keyword resolution happens later; the lexer only cares about shape.
        assert_eq!(
            lex("<foo=[x]>bar</foo>"),
            vec![Token::Tagged {
                primary: RawTag {
                    keyword: "foo",
                    arg: "x"
                },
                secondary: None,
                content: "bar",
            }]
        );
    }
}

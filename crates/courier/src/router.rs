//! Prefix-based channel routing.
//!
//! A line may start with a bracketed token selecting its destination
//! channel: `[title]` / `[title:SECONDS]`, `[json]`, `[actionbar]` or
//! `[bossbar:ARGS]`. Everything after the token is the message body.
//! Lines without a recognized token are ordinary chat.

use phf::phf_map;

/// Scheduling ticks per second for duration arguments.
pub const TICKS_PER_SECOND: i32 = 20;

/// Title animation timing, in ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TitleTiming {
    pub fade_in: i32,
    pub stay: i32,
    pub fade_out: i32,
}

impl Default for TitleTiming {
    fn default() -> Self {
        Self {
            fade_in: 10,
            stay: 50,
            fade_out: 10,
        }
    }
}

/// Floating-bar color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    Pink,
    Blue,
    Red,
    Green,
    Yellow,
    Purple,
    White,
}

static BAR_COLORS: phf::Map<&'static str, BarColor> = phf_map! {
    "pink" => BarColor::Pink,
    "blue" => BarColor::Blue,
    "red" => BarColor::Red,
    "green" => BarColor::Green,
    "yellow" => BarColor::Yellow,
    "purple" => BarColor::Purple,
    "white" => BarColor::White,
};

impl BarColor {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        BAR_COLORS.get(keyword.to_ascii_lowercase().as_str()).copied()
    }
}

/// Floating-bar style. The bare `segmented` keyword resolves to ten
/// divisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarStyle {
    Solid,
    Segmented6,
    Segmented10,
    Segmented12,
    Segmented20,
}

static BAR_STYLES: phf::Map<&'static str, BarStyle> = phf_map! {
    "solid" => BarStyle::Solid,
    "segmented" => BarStyle::Segmented10,
    "segmented_6" => BarStyle::Segmented6,
    "segmented_10" => BarStyle::Segmented10,
    "segmented_12" => BarStyle::Segmented12,
    "segmented_20" => BarStyle::Segmented20,
};

impl BarStyle {
    /// Case-insensitive keyword lookup.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        BAR_STYLES.get(keyword.to_ascii_lowercase().as_str()).copied()
    }
}

/// Parameters for a floating-bar display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarRequest {
    pub color: BarColor,
    pub style: BarStyle,
    /// Display duration in ticks.
    pub duration: i32,
    /// Decrease progress over the duration instead of holding full.
    pub decaying: bool,
}

impl Default for BarRequest {
    fn default() -> Self {
        Self {
            color: BarColor::White,
            style: BarStyle::Solid,
            duration: 3 * TICKS_PER_SECOND,
            decaying: false,
        }
    }
}

/// The destination channel for one input line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelRequest {
    /// Ordinary chat message.
    Chat,
    /// Title + optional subtitle overlay.
    Title(TitleTiming),
    /// Raw structured payload handed to the host verbatim.
    RawPayload,
    /// Action-bar flash.
    ActionBar,
    /// Floating boss-bar display.
    FloatingBar(BarRequest),
}

/// Split a leading `[keyword]` / `[keyword:args]` token off `line` and
/// classify the destination channel.
///
/// The keyword is case-insensitive. An unrecognized keyword is consumed and
/// the body routes to chat; a line without any leading token routes to chat
/// whole.
///
/// # Examples
///
/// ```
/// use courier::router::{ChannelRequest, TitleTiming, classify};
///
/// let (request, body) = classify("[actionbar]&chi", TitleTiming::default());
/// assert_eq!(request, ChannelRequest::ActionBar);
/// assert_eq!(body, "&chi");
/// ```
pub fn classify(line: &str, defaults: TitleTiming) -> (ChannelRequest, String) {
    let Some((keyword, args, body)) = leading_token(line) else {
        return (ChannelRequest::Chat, line.to_string());
    };
    let request = match keyword.to_ascii_lowercase().as_str() {
        "title" => ChannelRequest::Title(title_timing(args, defaults)),
        "json" => ChannelRequest::RawPayload,
        "actionbar" => ChannelRequest::ActionBar,
        "bossbar" => ChannelRequest::FloatingBar(bar_request(args)),
        _ => ChannelRequest::Chat,
    };
    (request, body.to_string())
}

/// Split `[keyword]` or `[keyword:args]` off the start of `line`.
fn leading_token(line: &str) -> Option<(&str, Option<&str>, &str)> {
    let rest = line.strip_prefix('[')?;
    let close = rest.find(']')?;
    let token = &rest[..close];
    let body = &rest[close + 1..];
    let (keyword, args) = match token.split_once(':') {
        Some((keyword, args)) => (keyword, Some(args)),
        None => (token, None),
    };
    if keyword.is_empty()
        || !keyword.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return None;
    }
    Some((keyword, args, body))
}

/// Title stay time from the optional seconds argument; malformed or absent
/// arguments keep the configured default.
fn title_timing(args: Option<&str>, defaults: TitleTiming) -> TitleTiming {
    let stay = args
        .and_then(|arg| arg.trim().parse::<i32>().ok())
        .filter(|&seconds| seconds >= 0)
        .map(|seconds| seconds * TICKS_PER_SECOND)
        .unwrap_or(defaults.stay);
    TitleTiming { stay, ..defaults }
}

/// Classify colon-separated boss-bar arguments by shape: boolean literal,
/// color keyword, style keyword or digit run (seconds). Order and presence
/// are free; unrecognized arguments are ignored. More than four arguments
/// discards them all.
fn bar_request(args: Option<&str>) -> BarRequest {
    let mut request = BarRequest::default();
    let Some(args) = args else {
        return request;
    };
    let parts: Vec<&str> = args.split(':').collect();
    if parts.is_empty() || parts.len() > 4 {
        return request;
    }
    for part in parts {
        if part.eq_ignore_ascii_case("true") || part.eq_ignore_ascii_case("false") {
            request.decaying = part.eq_ignore_ascii_case("true");
        } else if let Some(color) = BarColor::from_keyword(part) {
            request.color = color;
        } else if let Some(style) = BarStyle::from_keyword(part) {
            request.style = style;
        } else if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(seconds) = part.parse::<i32>() {
                request.duration = seconds * TICKS_PER_SECOND;
            }
        } else {
            log::debug!("ignoring boss-bar argument {part:?}");
        }
    }
    request
}

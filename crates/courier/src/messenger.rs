//! The message orchestrator.
//!
//! Ties the pipeline together: classify the raw line, expand unicode escapes
//! and placeholders, render colors, then center or segment-parse and hand
//! the result to the channel sink. Every step degrades to a safe default; a
//! bad line renders worse, it never fails delivery.

use std::sync::Arc;

use chroma::{ClickAction, parse_segments, render, single_segment, strip_all, strip_tags};

use crate::RecipientId;
use crate::bossbar::BossbarManager;
use crate::center::{DEFAULT_HALF_WIDTH, center_line};
use crate::hooks::{IdentityMarker, NoHooks, Placeholders};
use crate::router::{ChannelRequest, TitleTiming, classify};
use crate::sink::{BarSink, MessageSink};
use crate::width::CharTable;

/// Tunables for the rendering pipeline.
#[derive(Clone, Debug)]
pub struct MessengerOptions {
    /// Emit 24-bit color sequences; when false every RGB is quantized to
    /// the legacy palette.
    pub true_color: bool,
    /// Lines starting with this marker are centered; the marker is stripped
    /// before rendering.
    pub center_marker: String,
    /// Half of the pixel budget a centered line is balanced against.
    pub center_width: i32,
    /// Default title animation timing.
    pub title_timing: TitleTiming,
    /// Strip spaces between a channel token and the message body.
    pub hard_spacing: bool,
    /// Placeholder in authored lines that [`Messenger::send_lines`] replaces
    /// with `prefix`.
    pub prefix_marker: String,
    /// Replacement for `prefix_marker`.
    pub prefix: String,
    /// Render colors on the console log path; strip them when false.
    pub colored_console: bool,
}

impl Default for MessengerOptions {
    fn default() -> Self {
        Self {
            true_color: true,
            center_marker: "<center>".to_string(),
            center_width: DEFAULT_HALF_WIDTH,
            title_timing: TitleTiming::default(),
            hard_spacing: false,
            prefix_marker: "<P>".to_string(),
            prefix: String::new(),
            colored_console: true,
        }
    }
}

/// Routes authored lines through the rendering pipeline to the host's
/// delivery sinks.
pub struct Messenger<S: MessageSink, B: BarSink> {
    options: MessengerOptions,
    widths: CharTable,
    sink: Arc<S>,
    bars: BossbarManager<B>,
    placeholders: Box<dyn Placeholders>,
    identity: Box<dyn IdentityMarker>,
}

impl<S: MessageSink, B: BarSink> Messenger<S, B> {
    /// A messenger with default options and no hooks.
    pub fn new(sink: Arc<S>, bar_sink: Arc<B>) -> Self {
        Self {
            options: MessengerOptions::default(),
            widths: CharTable::new(),
            sink,
            bars: BossbarManager::new(bar_sink),
            placeholders: Box::new(NoHooks),
            identity: Box::new(NoHooks),
        }
    }

    /// Replace the options.
    pub fn with_options(mut self, options: MessengerOptions) -> Self {
        self.options = options;
        self
    }

    /// Install a placeholder-substitution hook.
    pub fn with_placeholders(mut self, hook: impl Placeholders + 'static) -> Self {
        self.placeholders = Box::new(hook);
        self
    }

    /// Install an identity-marking hook.
    pub fn with_identity_marker(mut self, hook: impl IdentityMarker + 'static) -> Self {
        self.identity = Box::new(hook);
        self
    }

    /// The active options.
    pub fn options(&self) -> &MessengerOptions {
        &self.options
    }

    /// The width registry used for centering.
    pub fn widths(&self) -> &CharTable {
        &self.widths
    }

    /// The floating-bar state, for host-side queries and unregistering.
    pub fn bars(&self) -> &BossbarManager<B> {
        &self.bars
    }

    /// Register a character width, returning the previous value.
    pub fn add_char(&self, c: char, width: u8) -> Option<u8> {
        self.widths.insert(c, width)
    }

    /// Remove a character width, returning the removed value.
    pub fn remove_char(&self, c: char) -> Option<u8> {
        self.widths.remove(c)
    }

    fn substitute(&self, recipient: Option<RecipientId>, text: &str) -> String {
        match self.placeholders.substitute(recipient, text) {
            Ok(substituted) => substituted,
            Err(error) => {
                log::warn!("placeholder hook failed, keeping original text: {error}");
                text.to_string()
            }
        }
    }

    fn mark_identity(&self, recipient: RecipientId, text: &str) -> String {
        match self.identity.mark(recipient, text) {
            Ok(marked) => marked,
            Err(error) => {
                log::warn!("identity hook failed, keeping original text: {error}");
                text.to_string()
            }
        }
    }

    /// Full text pipeline: unicode escapes, placeholder substitution, color
    /// rendering.
    pub fn colorize(&self, recipient: Option<RecipientId>, text: &str) -> String {
        let text = chroma::parse_unicode(text);
        let text = self.substitute(recipient, &text);
        render(&text, self.options.true_color)
    }

    /// Center lines carrying the center marker; plain-render the rest.
    pub fn centered_text(&self, recipient: Option<RecipientId>, line: &str) -> String {
        match line.strip_prefix(self.options.center_marker.as_str()) {
            Some(rest) => center_line(
                &self.colorize(recipient, rest),
                &self.widths,
                self.options.center_width,
            ),
            None => self.colorize(recipient, line),
        }
    }

    /// Route one authored line to its destination channel.
    ///
    /// `sender` drives placeholder and identity formatting; `target`
    /// receives the result.
    pub fn send(&self, target: RecipientId, sender: RecipientId, line: &str) {
        let (request, body) = classify(line, self.options.title_timing);
        let body = if self.options.hard_spacing {
            body.trim_start_matches(' ').to_string()
        } else {
            body
        };
        match request {
            ChannelRequest::Chat => self.send_chat(target, sender, &body),
            ChannelRequest::Title(timing) => {
                let rendered = self.colorize(Some(sender), &body);
                let lines: Vec<&str> = rendered.split('\n').collect();
                if lines.len() > 2 {
                    log::debug!("skipping title with {} lines", lines.len());
                    return;
                }
                let subtitle = lines.get(1).copied().unwrap_or("");
                self.sink.send_title(target, lines[0], subtitle, timing);
            }
            ChannelRequest::RawPayload => {
                let rendered = self.colorize(Some(sender), &body);
                self.sink.send_raw(target, &rendered);
            }
            ChannelRequest::ActionBar => {
                let rendered = self.colorize(Some(sender), &body);
                self.sink.send_action_bar(target, &rendered);
            }
            ChannelRequest::FloatingBar(bar) => {
                let rendered = self.colorize(Some(sender), &body);
                self.bars.display(target, &rendered, &bar);
            }
        }
    }

    fn send_chat(&self, target: RecipientId, sender: RecipientId, body: &str) {
        let marked = self.mark_identity(sender, body);
        let rendered = self.centered_text(Some(sender), &marked);
        let segments = parse_segments(&rendered, self.options.true_color);
        self.sink.send_chat(target, segments);
    }

    /// Explicit click/hover path: exactly one segment, residual tag markup
    /// stripped rather than parsed.
    pub fn send_complex(
        &self,
        target: RecipientId,
        sender: RecipientId,
        line: &str,
        click: Option<ClickAction>,
        hover: Vec<String>,
    ) {
        let marked = self.mark_identity(sender, line);
        let rendered = self.centered_text(Some(sender), &marked);
        let segment = single_segment(&rendered, click, hover, self.options.true_color);
        self.sink.send_chat(target, vec![segment]);
    }

    /// Send a list of authored lines.
    ///
    /// Empty lines are skipped; the language-prefix marker is expanded and
    /// `keys` are replaced with `values` case-insensitively before routing.
    pub fn send_lines(
        &self,
        target: RecipientId,
        sender: RecipientId,
        lines: &[impl AsRef<str>],
        keys: &[&str],
        values: &[&str],
    ) {
        for line in lines {
            let line = line.as_ref();
            if line.is_empty() {
                continue;
            }
            let line = if !self.options.prefix_marker.is_empty()
                && line.starts_with(self.options.prefix_marker.as_str())
            {
                line.replace(self.options.prefix_marker.as_str(), &self.options.prefix)
            } else {
                line.to_string()
            };
            let line = replace_each_ignore_case(&line, keys, values);
            self.send(target, sender, &line);
        }
    }

    /// Console path: interactive markup is stripped and colors rendered or
    /// stripped per the options, then the line goes to the host logger.
    pub fn log_line(&self, line: &str) {
        let line = strip_tags(line);
        let line = if self.options.colored_console {
            render(&line, self.options.true_color)
        } else {
            strip_all(&line)
        };
        log::info!("{line}");
    }
}

/// Replace each key with its value, ASCII case-insensitively.
///
/// A keys array longer than the values array leaves the line unchanged;
/// individual empty keys are skipped.
pub fn replace_each_ignore_case(line: &str, keys: &[&str], values: &[&str]) -> String {
    if keys.len() > values.len() {
        return line.to_string();
    }
    let mut line = line.to_string();
    for (key, value) in keys.iter().zip(values) {
        if key.is_empty() {
            continue;
        }
        line = replace_ignore_case(&line, key, value);
    }
    line
}

fn replace_ignore_case(line: &str, key: &str, value: &str) -> String {
    let lower_line = line.to_ascii_lowercase();
    let lower_key = key.to_ascii_lowercase();
    let mut out = String::with_capacity(line.len());
    let mut cursor = 0;
    while let Some(found) = lower_line[cursor..].find(&lower_key) {
        let at = cursor + found;
        out.push_str(&line[cursor..at]);
        out.push_str(value);
        cursor = at + lower_key.len();
    }
    out.push_str(&line[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_ignores_case() {
        assert_eq!(
            replace_each_ignore_case("Hello {NAME}!", &["{name}"], &["Ada"]),
            "Hello Ada!"
        );
        assert_eq!(
            replace_each_ignore_case("{k} and {K}", &["{k}"], &["v"]),
            "v and v"
        );
    }

    #[test]
    fn replace_with_mismatched_arrays() {
        assert_eq!(
            replace_each_ignore_case("{a}{b}", &["{a}", "{b}"], &["1"]),
            "{a}{b}"
        );
    }

    #[test]
    fn replace_with_empty_key() {
        assert_eq!(replace_each_ignore_case("text", &[""], &["x"]), "text");
    }
}

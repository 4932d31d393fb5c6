use regex::Regex;
use std::sync::OnceLock;

/// One styled run within a paragraph or list item.
///
/// Spans never cross block boundaries and code block content is never run
/// through this formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Code(String),
    Strong(String),
    Emphasis(String),
    /// Visible text and target are the same URL.
    Link(String),
}

impl InlineSpan {
    /// The span's source form with its original delimiters reinstated.
    /// Concatenating the source forms of `format_inline(text)` yields `text`.
    pub fn source(&self) -> String {
        match self {
            InlineSpan::Text(t) => t.clone(),
            InlineSpan::Code(c) => format!("`{c}`"),
            InlineSpan::Strong(s) => format!("**{s}**"),
            InlineSpan::Emphasis(e) => format!("*{e}*"),
            InlineSpan::Link(url) => url.clone(),
        }
    }
}

fn inline_code_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`([^`]+)`").expect("inline code pattern"))
}

fn strong_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*([^*]+)\*\*").expect("strong emphasis pattern"))
}

fn emphasis_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*([^*]+)\*").expect("emphasis pattern"))
}

fn url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"https?://\S+").expect("url pattern"))
}

/// Split plain text into typed inline spans.
///
/// Substitutions run in a fixed order: inline code, bold, italic, URLs. Each
/// pass rewrites only `Text` segments, so markup produced by an earlier rule
/// is never re-matched by a later one. There is no escape syntax for literal
/// backticks or asterisks.
pub fn format_inline(text: &str) -> Vec<InlineSpan> {
    let mut spans = vec![InlineSpan::Text(text.to_string())];
    spans = apply_rule(spans, inline_code_re(), |inner| {
        InlineSpan::Code(inner.to_string())
    });
    spans = apply_rule(spans, strong_re(), |inner| {
        InlineSpan::Strong(inner.to_string())
    });
    spans = apply_rule(spans, emphasis_re(), |inner| {
        InlineSpan::Emphasis(inner.to_string())
    });
    spans = apply_rule(spans, url_re(), |matched| {
        InlineSpan::Link(matched.to_string())
    });
    spans
}

/// Rewrite every `Text` segment, replacing each regex match with the span the
/// constructor builds from its first capture group (or, with no group, the
/// whole match). Non-text segments pass through untouched.
fn apply_rule(
    spans: Vec<InlineSpan>,
    re: &Regex,
    make: impl Fn(&str) -> InlineSpan,
) -> Vec<InlineSpan> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let InlineSpan::Text(text) = span else {
            out.push(span);
            continue;
        };
        let mut last = 0;
        for caps in re.captures_iter(&text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                out.push(InlineSpan::Text(text[last..whole.start()].to_string()));
            }
            let inner = caps.get(1).map_or(whole.as_str(), |group| group.as_str());
            out.push(make(inner));
            last = whole.end();
        }
        if last < text.len() {
            out.push(InlineSpan::Text(text[last..].to_string()));
        }
    }
    out
}

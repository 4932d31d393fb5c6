use crate::ui::markdown::Language;
use crate::ui::theme::Theme;
use ratatui::style::Color as TuiColor;
use ratatui::text::{Line, Span};
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, OnceLock};

// Blocks are re-highlighted on every render pass, so completed results are
// kept in a small bounded FIFO cache keyed by (language, content, theme).

const CACHE_CAP: usize = 64;

struct HighlightCache {
    map: HashMap<u64, Vec<Line<'static>>>,
    order: VecDeque<u64>,
}

impl HighlightCache {
    fn new() -> Self {
        Self {
            map: HashMap::new(),
            order: VecDeque::new(),
        }
    }

    fn get(&self, key: u64) -> Option<Vec<Line<'static>>> {
        self.map.get(&key).cloned()
    }

    fn put(&mut self, key: u64, lines: Vec<Line<'static>>) {
        if !self.map.contains_key(&key) {
            self.order.push_back(key);
        }
        self.map.insert(key, lines);
        while self.map.len() > CACHE_CAP {
            match self.order.pop_front() {
                Some(old) => {
                    self.map.remove(&old);
                }
                None => break,
            }
        }
    }
}

fn cache() -> &'static Mutex<HighlightCache> {
    static CACHE: OnceLock<Mutex<HighlightCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(HighlightCache::new()))
}

fn cache_key(language: Language, code: &str, syntect_theme: &str, bg: Option<TuiColor>) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    language.hash(&mut hasher);
    code.hash(&mut hasher);
    syntect_theme.hash(&mut hasher);
    format!("{bg:?}").hash(&mut hasher);
    hasher.finish()
}

fn is_dark_background(c: &TuiColor) -> bool {
    match c {
        TuiColor::Rgb(r, g, b) => {
            let brightness = 0.2126 * (*r as f32) + 0.7152 * (*g as f32) + 0.0722 * (*b as f32);
            brightness < 128.0
        }
        TuiColor::White => false,
        _ => true,
    }
}

// Pure so tests can pin the mapping without loading syntect assets.
pub(crate) fn pick_syntect_theme_name(theme: &Theme) -> &'static str {
    if is_dark_background(&theme.background_color) {
        "base16-ocean.dark"
    } else {
        "InspiredGitHub"
    }
}

/// Color a code block with syntect. Returns `None` when no usable syntect
/// theme or highlight state is available; callers fall back to rendering the
/// raw code text unstyled.
pub fn highlight_code(language: Language, code: &str, theme: &Theme) -> Option<Vec<Line<'static>>> {
    static SYNTAX_SET: OnceLock<syntect::parsing::SyntaxSet> = OnceLock::new();
    static THEME_SET: OnceLock<syntect::highlighting::ThemeSet> = OnceLock::new();
    let ps = SYNTAX_SET.get_or_init(syntect::parsing::SyntaxSet::load_defaults_newlines);
    let ts = THEME_SET.get_or_init(syntect::highlighting::ThemeSet::load_defaults);

    let theme_name = pick_syntect_theme_name(theme);
    let syn_theme = ts
        .themes
        .get(theme_name)
        .or_else(|| ts.themes.values().next())?;

    let bg = theme.code_block_bg;
    let key = cache_key(language, code, theme_name, bg);
    if let Ok(guard) = cache().lock() {
        if let Some(lines) = guard.get(key) {
            return Some(lines);
        }
    }

    let syntax = ps
        .find_syntax_by_token(language.as_str())
        .unwrap_or_else(|| ps.find_syntax_plain_text());
    let mut highlighter = syntect::easy::HighlightLines::new(syntax, syn_theme);

    let mut out: Vec<Line<'static>> = Vec::new();
    for line in syntect::util::LinesWithEndings::from(code) {
        let ranges = highlighter.highlight_line(line, ps).ok()?;
        let mut spans: Vec<Span<'static>> = Vec::new();
        for (style, text) in ranges {
            let fragment = text.strip_suffix('\n').unwrap_or(text);
            let fg = style.foreground;
            let mut st = ratatui::style::Style::default().fg(TuiColor::Rgb(fg.r, fg.g, fg.b));
            if let Some(bg_color) = bg {
                st = st.bg(bg_color);
            }
            spans.push(Span::styled(fragment.to_string(), st));
        }
        if spans.is_empty() {
            out.push(Line::from(""));
        } else {
            out.push(Line::from(spans));
        }
    }

    if let Ok(mut guard) = cache().lock() {
        guard.put(key, out.clone());
    }
    Some(out)
}

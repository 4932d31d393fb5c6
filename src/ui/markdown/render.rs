use super::{format_inline, parse_blocks, strip_list_marker, Block, InlineSpan};
use crate::core::message::{Message, Role};
use crate::ui::theme::Theme;
use crate::utils::syntax;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Build display lines for one transcript entry. User input renders as plain
/// prefixed text; assistant replies run through the block parser. Every
/// non-empty message ends with one blank spacer line.
pub fn render_message(msg: &Message, theme: &Theme) -> Vec<Line<'static>> {
    match msg.role {
        Role::User => render_user(msg, theme),
        Role::Assistant => render_assistant(msg, theme),
    }
}

fn render_user(msg: &Message, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, content_line) in msg.content.lines().enumerate() {
        if idx == 0 {
            lines.push(Line::from(vec![
                Span::styled("You: ", theme.user_prefix_style),
                Span::styled(content_line.to_string(), theme.user_text_style),
            ]));
        } else {
            lines.push(Line::from(Span::styled(
                format!("     {content_line}"),
                theme.user_text_style,
            )));
        }
    }
    if !lines.is_empty() {
        lines.push(Line::from(""));
    }
    lines
}

fn render_assistant(msg: &Message, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for block in parse_blocks(&msg.content) {
        match block {
            Block::Heading { level, content } => {
                let style = if level == 1 {
                    theme.heading_style
                } else {
                    theme.subheading_style
                };
                lines.push(Line::from(Span::styled(content, style)));
            }
            Block::ListItem { content } => {
                let mut spans = vec![Span::styled("  • ", theme.list_bullet_style)];
                spans.extend(inline_spans(
                    strip_list_marker(&content),
                    theme.assistant_text_style,
                    theme,
                ));
                lines.push(Line::from(spans));
            }
            Block::Code { content, language } => {
                lines.push(Line::from(Span::styled(
                    language.label(),
                    theme.code_language_style,
                )));
                lines.extend(code_lines(&content, language, theme));
            }
            Block::Paragraph { content } => {
                lines.push(Line::from(inline_spans(
                    &content,
                    theme.assistant_text_style,
                    theme,
                )));
            }
        }
        lines.push(Line::from(""));
    }

    if !msg.suggestions.is_empty() {
        for suggestion in &msg.suggestions {
            lines.push(Line::from(Span::styled(
                format!("→ {suggestion}"),
                theme.suggestion_style,
            )));
        }
        lines.push(Line::from(""));
    }

    lines
}

fn code_lines(
    content: &str,
    language: super::Language,
    theme: &Theme,
) -> Vec<Line<'static>> {
    if let Some(highlighted) = syntax::highlight_code(language, content, theme) {
        return highlighted;
    }
    // Highlighting unavailable: show the raw code text.
    let mut style = theme.code_text_style;
    if let Some(bg) = theme.code_block_bg {
        style = style.bg(bg);
    }
    content
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), style)))
        .collect()
}

fn inline_spans(content: &str, base: Style, theme: &Theme) -> Vec<Span<'static>> {
    format_inline(content)
        .into_iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::styled(text, base),
            InlineSpan::Code(code) => Span::styled(code, theme.inline_code_style),
            InlineSpan::Strong(text) => Span::styled(text, base.add_modifier(Modifier::BOLD)),
            InlineSpan::Emphasis(text) => Span::styled(text, base.add_modifier(Modifier::ITALIC)),
            InlineSpan::Link(url) => Span::styled(url, theme.link_style),
        })
        .collect()
}

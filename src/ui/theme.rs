use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_text_style: Style,
    pub status_text_style: Style,

    // Markdown block styles
    pub heading_style: Style,
    pub subheading_style: Style,
    pub list_bullet_style: Style,
    pub inline_code_style: Style,
    pub link_style: Style,
    pub code_language_style: Style,
    pub code_text_style: Style,
    pub code_block_bg: Option<Color>,
    pub suggestion_style: Style,

    // Chrome
    pub title_style: Style,
    pub waiting_indicator_style: Style,
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,
            user_prefix_style: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Cyan),
            assistant_text_style: Style::default().fg(Color::White),
            status_text_style: Style::default().fg(Color::DarkGray),

            heading_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            subheading_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            list_bullet_style: Style::default().fg(Color::Cyan),
            inline_code_style: Style::default().fg(Color::Yellow),
            link_style: Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::UNDERLINED),
            code_language_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            code_text_style: Style::default().fg(Color::Gray),
            code_block_bg: Some(Color::Rgb(24, 24, 24)),
            suggestion_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),

            title_style: Style::default().fg(Color::Gray),
            waiting_indicator_style: Style::default().fg(Color::DarkGray),
            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,
            user_prefix_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(Color::Blue),
            assistant_text_style: Style::default().fg(Color::Black),
            status_text_style: Style::default().fg(Color::Gray),

            heading_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            subheading_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            list_bullet_style: Style::default().fg(Color::Blue),
            inline_code_style: Style::default().fg(Color::Rgb(160, 90, 0)),
            link_style: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            code_language_style: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            code_text_style: Style::default().fg(Color::DarkGray),
            code_block_bg: Some(Color::Rgb(235, 235, 235)),
            suggestion_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),

            title_style: Style::default().fg(Color::DarkGray),
            waiting_indicator_style: Style::default().fg(Color::Gray),
            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
        }
    }

    /// Look up a theme by its config/CLI name. Unknown names fall back to
    /// the dark theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_is_case_insensitive() {
        let light = Theme::by_name("LIGHT");
        assert_eq!(light.background_color, Color::White);
    }

    #[test]
    fn unknown_names_fall_back_to_dark() {
        let theme = Theme::by_name("solarized");
        assert_eq!(theme.background_color, Color::Black);
    }
}

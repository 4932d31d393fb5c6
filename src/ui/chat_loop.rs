use std::error::Error;
use std::io;
use std::time::Duration;

use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tracing::warn;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::api::{ChatClient, ChatReply};
use crate::core::transcript::Transcript;
use crate::ui::markdown::{latest_code_block, render_message};
use crate::ui::theme::Theme;
use crate::utils::{clipboard, editor, voice};

/// Fixed assistant-role reply shown for any connectivity failure.
pub const CONNECTIVITY_FALLBACK: &str =
    "I'm sorry, I'm having trouble connecting to my services right now. Please try again later.";

const WELCOME_EXAMPLES: [&str; 3] = [
    "What's the weather like in New York?",
    "Tell me about artificial intelligence",
    "How can you help me today?",
];

const INPUT_HINT: &str =
    "Enter send · Tab example · ^E editor · ^R voice · ^Y copy code · ^L clear · ^C quit";

/// Outcome of one fetch, delivered over the channel from the spawned task.
enum FetchOutcome {
    Reply(ChatReply),
    Failed,
}

pub struct ChatLoopParams {
    pub client: ChatClient,
    pub theme: Theme,
    pub voice_command: Option<String>,
}

struct ChatApp {
    transcript: Transcript,
    input: String,
    pending: bool,
    status: Option<String>,
    scroll_offset: u16,
    auto_scroll: bool,
    example_cursor: usize,
    theme: Theme,
    client: ChatClient,
    voice_command: Option<String>,
}

impl ChatApp {
    fn new(params: ChatLoopParams) -> Self {
        Self {
            transcript: Transcript::new(),
            input: String::new(),
            pending: false,
            status: None,
            scroll_offset: 0,
            auto_scroll: true,
            example_cursor: 0,
            theme: params.theme,
            client: params.client,
            voice_command: params.voice_command,
        }
    }

    fn build_display_lines(&self) -> Vec<Line<'static>> {
        if self.transcript.is_empty() && !self.pending {
            return self.welcome_lines();
        }

        let mut lines = Vec::new();
        for msg in self.transcript.iter() {
            lines.extend(render_message(msg, &self.theme));
        }
        if self.pending {
            lines.push(Line::from(Span::styled(
                "Thinking…",
                self.theme.waiting_indicator_style,
            )));
        }
        lines
    }

    fn welcome_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled("InfoAgent", self.theme.heading_style)),
            Line::from(""),
            Line::from(Span::styled(
                "I'm your InfoAgent, ready to assist you with information and answer your \
                 questions. How can I help you today?",
                self.theme.assistant_text_style,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Try one of these (press Tab to fill the input):",
                self.theme.status_text_style,
            )),
        ];
        for example in WELCOME_EXAMPLES {
            lines.push(Line::from(vec![
                Span::styled("  • ", self.theme.list_bullet_style),
                Span::styled(example, self.theme.assistant_text_style),
            ]));
        }
        lines
    }

    fn max_scroll_offset(&self, available_height: u16) -> u16 {
        let total_lines = self.build_display_lines().len() as u16;
        total_lines.saturating_sub(available_height)
    }

    /// Start a request for the current input. Does nothing while a request
    /// is pending or when the input is blank.
    fn submit(&mut self, tx: &mpsc::UnboundedSender<FetchOutcome>) {
        if self.pending || self.input.trim().is_empty() {
            return;
        }
        let text = self.input.trim().to_string();
        self.input.clear();
        self.status = None;
        self.transcript.push_user(&text);
        self.pending = true;
        self.auto_scroll = true;

        let client = self.client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = match client.send_message(&text).await {
                Ok(reply) => FetchOutcome::Reply(reply),
                Err(err) => {
                    warn!(error = %err, "chat request failed");
                    FetchOutcome::Failed
                }
            };
            let _ = tx.send(outcome);
        });
    }

    fn apply_outcome(&mut self, outcome: FetchOutcome) {
        self.pending = false;
        match outcome {
            FetchOutcome::Reply(reply) => {
                self.transcript.push_assistant(reply.text, reply.suggestions);
            }
            FetchOutcome::Failed => {
                self.transcript
                    .push_assistant(CONNECTIVITY_FALLBACK, Vec::new());
            }
        }
    }

    fn insert_next_example(&mut self) {
        if !self.transcript.is_empty() || self.pending {
            return;
        }
        self.input = WELCOME_EXAMPLES[self.example_cursor % WELCOME_EXAMPLES.len()].to_string();
        self.example_cursor += 1;
    }

    fn copy_latest_code_block(&mut self) {
        let code = self
            .transcript
            .iter()
            .rev()
            .filter(|msg| msg.is_assistant())
            .find_map(|msg| latest_code_block(&msg.content));
        self.status = Some(match code {
            Some(code) => match clipboard::copy_to_clipboard(&code) {
                Ok(()) => "Code copied to clipboard".to_string(),
                Err(err) => err,
            },
            None => "No code block to copy".to_string(),
        });
    }

    fn capture_voice_input(&mut self) {
        match voice::capture(self.voice_command.as_deref()) {
            Ok(transcript) => {
                self.input.push_str(&transcript);
                self.status = None;
            }
            Err(err) => self.status = Some(err),
        }
    }

    fn compose_in_editor(&mut self, tx: &mpsc::UnboundedSender<FetchOutcome>) {
        match editor::compose_in_editor(&self.input) {
            Ok(Some(message)) => {
                self.input = message;
                self.submit(tx);
            }
            Ok(None) => {
                self.status = Some("Editor file was empty - no message sent".to_string());
            }
            Err(err) => self.status = Some(err),
        }
    }

    fn reset_session(&mut self) {
        self.transcript.clear();
        self.input.clear();
        self.status = None;
        self.scroll_offset = 0;
        self.auto_scroll = true;
        self.example_cursor = 0;
    }

    fn pop_input_grapheme(&mut self) {
        if let Some((idx, _)) = self.input.grapheme_indices(true).next_back() {
            self.input.truncate(idx);
        }
    }

    fn scroll_up(&mut self, amount: u16, max: u16) {
        if self.auto_scroll {
            self.scroll_offset = max;
        }
        self.auto_scroll = false;
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    fn scroll_down(&mut self, amount: u16, max: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(amount).min(max);
        if self.scroll_offset >= max {
            self.auto_scroll = true;
        }
    }
}

/// Run the interactive chat session until the user quits.
pub async fn run(params: ChatLoopParams) -> Result<(), Box<dyn Error>> {
    let mut app = ChatApp::new(params);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let result = event_loop(&mut terminal, &mut app, tx, rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut ChatApp,
    tx: mpsc::UnboundedSender<FetchOutcome>,
    mut rx: mpsc::UnboundedReceiver<FetchOutcome>,
) -> Result<(), Box<dyn Error>> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let available_height = {
            let height = terminal.size()?.height;
            // Input box is 3 rows, transcript title is 1.
            height.saturating_sub(3).saturating_sub(1)
        };

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                    match key.code {
                        KeyCode::Char('c') if ctrl => return Ok(()),
                        KeyCode::Char('y') if ctrl => app.copy_latest_code_block(),
                        KeyCode::Char('l') if ctrl => app.reset_session(),
                        KeyCode::Char('e') if ctrl && !app.pending => {
                            app.compose_in_editor(&tx);
                            // The editor clobbered the screen; force a full redraw.
                            terminal.clear()?;
                        }
                        KeyCode::Char('r') if ctrl && !app.pending => app.capture_voice_input(),
                        KeyCode::Enter if !app.pending => app.submit(&tx),
                        KeyCode::Tab => app.insert_next_example(),
                        KeyCode::Backspace if !app.pending => app.pop_input_grapheme(),
                        KeyCode::Char(c) if !ctrl && !app.pending => app.input.push(c),
                        KeyCode::Up => {
                            let max = app.max_scroll_offset(available_height);
                            app.scroll_up(1, max);
                        }
                        KeyCode::Down => {
                            let max = app.max_scroll_offset(available_height);
                            app.scroll_down(1, max);
                        }
                        _ => {}
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => {
                        let max = app.max_scroll_offset(available_height);
                        app.scroll_up(3, max);
                    }
                    MouseEventKind::ScrollDown => {
                        let max = app.max_scroll_offset(available_height);
                        app.scroll_down(3, max);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
        }
    }
}

fn ui(f: &mut Frame, app: &ChatApp) {
    let background = Block::default().style(Style::default().bg(app.theme.background_color));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let lines = app.build_display_lines();
    let available_height = chunks[0].height.saturating_sub(1);
    let max_offset = (lines.len() as u16).saturating_sub(available_height);
    let scroll_offset = if app.auto_scroll {
        max_offset
    } else {
        app.scroll_offset.min(max_offset)
    };

    let transcript = Paragraph::new(lines)
        .block(Block::default().title(Span::styled("InfoAgent", app.theme.title_style)))
        .wrap(Wrap { trim: false })
        .scroll((scroll_offset, 0));
    f.render_widget(transcript, chunks[0]);

    let input_title = match (&app.status, app.pending) {
        (Some(status), _) => status.clone(),
        (None, true) => "Waiting for reply…".to_string(),
        (None, false) => INPUT_HINT.to_string(),
    };
    let input = Paragraph::new(app.input.as_str())
        .style(app.theme.input_text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.input_border_style)
                .title(Span::styled(input_title, app.theme.input_title_style)),
        );
    f.render_widget(input, chunks[1]);

    if !app.pending {
        let cursor_x = chunks[1].x + 1 + UnicodeWidthStr::width(app.input.as_str()) as u16;
        let cursor_x = cursor_x.min(chunks[1].right().saturating_sub(2));
        f.set_cursor_position((cursor_x, chunks[1].y + 1));
    }
}

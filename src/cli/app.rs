use super::autocomplete::Autocompleter;
use super::ui;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use garagedb::GarageHandler;
use garagedb::shell::{Outcome, Shell};
use log::debug;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::io;
use tui_textarea::{Input, Key, TextArea};

pub struct App<'a> {
    pub textarea: TextArea<'a>,
    pub messages: Vec<Line<'static>>,
    pub shell: Shell,
    pub exit: bool,

    // Autocomplete State
    pub autocompleter: Autocompleter,
    pub suggestions: Vec<String>,
    pub suggestion_index: usize,
    pub popup_open: bool,
}

impl<'a> App<'a> {
    pub fn new(handler: GarageHandler) -> Self {
        let textarea = Self::new_textarea();

        Self {
            textarea,
            messages: vec![
                Line::from(vec![Span::styled(
                    "garagedb command shell",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from("Type a command and press Enter. 'help' lists commands."),
                Line::from("--------------------------------------------------"),
            ],
            shell: Shell::new(handler),
            exit: false,
            autocompleter: Autocompleter::new(),
            suggestions: Vec::new(),
            suggestion_index: 0,
            popup_open: false,
        }
    }

    fn new_textarea() -> TextArea<'static> {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(
            "Enter command ('Enter' to run, 'Tab' for autocomplete, 'Esc' to quit)",
        );
        textarea.set_block(
            ratatui::widgets::Block::default()
                .borders(ratatui::widgets::Borders::ALL)
                .title(" Command "),
        );
        textarea
    }

    fn reset_textarea(&mut self) {
        self.textarea = Self::new_textarea();
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                // Navigation inside Popup
                if self.popup_open {
                    match key.code {
                        KeyCode::Down => {
                            if !self.suggestions.is_empty() {
                                self.suggestion_index =
                                    (self.suggestion_index + 1) % self.suggestions.len();
                            }
                            continue;
                        }
                        KeyCode::Up => {
                            if !self.suggestions.is_empty() {
                                self.suggestion_index = (self.suggestion_index
                                    + self.suggestions.len()
                                    - 1)
                                    % self.suggestions.len();
                            }
                            continue;
                        }
                        KeyCode::Enter | KeyCode::Tab => {
                            self.accept_suggestion();
                            continue;
                        }
                        KeyCode::Esc => {
                            self.popup_open = false;
                            continue;
                        }
                        _ => {
                            self.popup_open = false;
                        }
                    }
                }

                match key.code {
                    KeyCode::Esc => {
                        self.exit = true;
                    }
                    KeyCode::Enter => {
                        self.execute_command();
                    }
                    KeyCode::Tab => {
                        self.update_suggestions();
                        if !self.suggestions.is_empty() {
                            self.popup_open = true;
                            self.suggestion_index = 0;
                        }
                    }
                    _ => {
                        self.textarea.input(key);
                        if let KeyCode::Char(c) = key.code
                            && c.is_alphanumeric()
                        {
                            self.update_suggestions();
                            self.popup_open = !self.suggestions.is_empty();
                        } else {
                            self.popup_open = false;
                        }
                    }
                }
            }
            if self.exit {
                return Ok(());
            }
        }
    }

    fn update_suggestions(&mut self) {
        let word = self.current_word();
        if word.is_empty() {
            self.suggestions.clear();
            self.popup_open = false;
            return;
        }

        self.suggestions = self
            .autocompleter
            .get_suggestions(&word, self.shell.handler());
        self.suggestion_index = 0;
    }

    fn accept_suggestion(&mut self) {
        let Some(suggestion) = self.suggestions.get(self.suggestion_index).cloned() else {
            return;
        };
        let word = self.current_word();

        for _ in 0..word.chars().count() {
            self.textarea.input(Input {
                key: Key::Backspace,
                ctrl: false,
                alt: false,
                shift: false,
            });
        }

        self.textarea.insert_str(&suggestion);
        self.popup_open = false;
    }

    /// Word left of the cursor. `=` separates query keys from values.
    fn current_word(&self) -> String {
        let (row, col) = self.textarea.cursor();
        let Some(line) = self.textarea.lines().get(row) else {
            return String::new();
        };

        let prefix: Vec<char> = line.chars().take(col).collect();
        let start = prefix
            .iter()
            .rposition(|c| c.is_whitespace() || *c == '=')
            .map_or(0, |separator| separator + 1);
        prefix[start..].iter().collect()
    }

    fn execute_command(&mut self) {
        let input = self.textarea.lines().join(" ");
        if input.trim().is_empty() {
            return;
        }

        self.messages.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(input.clone()),
        ]));
        self.reset_textarea();

        match self.shell.run_line(&input) {
            Ok(Outcome::Output(lines)) => {
                for line in lines {
                    self.messages
                        .push(Line::from(Span::styled(line, Style::default().fg(Color::Green))));
                }
            }
            Ok(Outcome::Quit) => {
                self.exit = true;
            }
            Err(e) => {
                debug!("Command failed: {}", e);
                self.messages.push(Line::from(Span::styled(
                    format!("Error: {}", e),
                    Style::default().fg(Color::Red),
                )));
            }
        }
        self.messages.push(Line::from(Span::styled(
            "-".repeat(50),
            Style::default().fg(Color::DarkGray),
        )));
    }
}

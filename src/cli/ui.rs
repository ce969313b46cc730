use super::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
};

const POPUP_WIDTH: u16 = 24;
const POPUP_MAX_HEIGHT: u16 = 7;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)].as_ref())
        .split(f.area());

    // Keep the newest lines visible
    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    let skip_count = app.messages.len().saturating_sub(inner_height);

    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .skip(skip_count)
        .map(|line| ListItem::new(line.clone()))
        .collect();

    let title = format!(
        " Garages: {}  Vehicles: {} ",
        app.shell.handler().garage_count(),
        app.shell.handler().vehicle_count()
    );
    let messages_panel = List::new(messages)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(Style::default().fg(Color::White));

    f.render_widget(messages_panel, chunks[0]);

    let textarea_rect = chunks[1];
    f.render_widget(&app.textarea, textarea_rect);

    if app.popup_open && !app.suggestions.is_empty() {
        draw_suggestions(f, app, textarea_rect);
    }
}

fn draw_suggestions(f: &mut Frame, app: &App, textarea_rect: Rect) {
    let (_, col) = app.textarea.cursor();
    let screen = f.area();

    let width = POPUP_WIDTH.min(screen.width);
    let height = POPUP_MAX_HEIGHT
        .min(app.suggestions.len() as u16 + 2)
        .min(screen.height);

    // The input box sits at the bottom, so the popup opens upwards
    let popup_x = (textarea_rect.x + col as u16 + 1).min(screen.width - width);
    let popup_y = textarea_rect.y.saturating_sub(height);

    let area = Rect::new(popup_x, popup_y, width, height);
    f.render_widget(Clear, area);

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|s| ListItem::new(s.as_str()))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.suggestion_index));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Suggestions"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, &mut state);
}

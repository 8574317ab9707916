/*
[INPUT]:  Title/content inputs, form mode, focus
[OUTPUT]: Input form with Add/Update button and terminal cursor placement
[POS]:    TUI UI form rendering
[UPDATE]: When changing form fields or button labels
*/

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use crate::tui::app::{AppState, Focus};

const LABEL_WIDTH: u16 = 9;

pub(super) fn draw_form(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let state = app.store.state();
    let editing = state.is_editing();
    let focused = matches!(app.focus, Focus::Title | Focus::Content);

    // named after the task as it was when the edit began
    let title = match state.editing_original() {
        Some(original) => format!("Edit task: {}", original.title),
        None => "New task".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            super::focused_border_style()
        } else {
            super::border_style()
        })
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(1); 3]).split(inner);
    draw_input(frame, rows[0], "Title", &app.title_input, app.focus == Focus::Title);
    draw_input(
        frame,
        rows[1],
        "Content",
        &app.content_input,
        app.focus == Focus::Content,
    );

    let label = if editing { "[ Update ]" } else { "[ Add ]" };
    let style = if state.draft.is_complete() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), rows[2]);
}

fn draw_input(frame: &mut ratatui::Frame, area: Rect, label: &str, input: &Input, focused: bool) {
    let [label_area, value_area] =
        Layout::horizontal([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)]).areas(area);

    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!("{label}:"), label_style)),
        label_area,
    );

    // keep one column free so the cursor can sit after the last character
    let scroll = input.visual_scroll(value_area.width.saturating_sub(1) as usize);
    frame.render_widget(
        Paragraph::new(input.value()).scroll((0, scroll as u16)),
        value_area,
    );

    if focused {
        let cursor = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((value_area.x + cursor, value_area.y));
    }
}

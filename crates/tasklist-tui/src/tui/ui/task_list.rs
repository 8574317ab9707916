/*
[INPUT]:  Task list from the store snapshot and list selection
[OUTPUT]: Task list rendered into Ratatui frame
[POS]:    TUI UI task list rendering
[UPDATE]: When changing how a task row is displayed
*/

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use tasklist_store::Task;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::app::{AppState, Focus};

const MAX_TITLE_WIDTH: usize = 32;

pub(super) fn draw_task_list(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    app: &mut AppState,
) {
    let state = app.store.state();
    let editing = state.editing_id();
    let title_width = state
        .tasks
        .iter()
        .map(|task| task.title.width())
        .max()
        .unwrap_or(0)
        .min(MAX_TITLE_WIDTH);

    let items = if state.tasks.is_empty() {
        vec![ListItem::new("No tasks yet. Fill in the form above to add one.")]
    } else {
        state
            .tasks
            .iter()
            .map(|task| task_row(task, title_width, editing == Some(task.id)))
            .collect()
    };

    let border_style = if app.focus == Focus::List {
        super::focused_border_style()
    } else {
        super::border_style()
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("Tasks ({})", state.tasks.len())),
        )
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn task_row(task: &Task, title_width: usize, editing: bool) -> ListItem<'static> {
    let (marker, title_style) = if task.is_complete() {
        (
            "[x] ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default().fg(Color::Red))
    };

    let mut spans = vec![
        Span::raw(marker),
        Span::styled(fit_width(&task.title, title_width), title_style),
        Span::raw("  "),
        Span::styled(task.content.clone(), Style::default().fg(Color::Gray)),
    ];
    if editing {
        spans.push(Span::styled(" (editing)", Style::default().fg(Color::Yellow)));
    }
    ListItem::new(Line::from(spans))
}

/// Pad or cut `text` to exactly `width` terminal columns.
fn fit_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

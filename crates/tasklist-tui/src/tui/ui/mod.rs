/*
[INPUT]:  TUI app state with the current store snapshot
[OUTPUT]: Full-screen frame: counter, form, task list, logs, footer
[POS]:    TUI UI module root
[UPDATE]: When changing screen layout or adding panels
*/

mod counter;
mod form;
mod logs;
mod task_list;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{AppState, Focus};

pub(in crate::tui) fn draw_ui(frame: &mut ratatui::Frame, app: &mut AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    counter::draw_counter(frame, layout[0], app.store.counts());
    form::draw_form(frame, layout[1], app);

    if app.log_buffer.is_some() {
        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(layout[2]);
        task_list::draw_task_list(frame, middle[0], app);
        if let Some(buffer) = app.log_buffer.as_ref() {
            logs::draw_logs(frame, middle[1], buffer);
        }
    } else {
        task_list::draw_task_list(frame, layout[2], app);
    }

    draw_footer(frame, layout[3], app);
}

fn draw_footer(frame: &mut ratatui::Frame, area: ratatui::layout::Rect, app: &AppState) {
    let hotkeys = match app.focus {
        Focus::Title | Focus::Content => "[Tab] Next field  [Enter] Submit  [Esc] Cancel/List",
        Focus::List => {
            "[Up/Down] Select  [Space] Toggle  [e] Edit  [d] Delete  [n] New  [q] Quit"
        }
    };
    let footer = Paragraph::new(format!("{hotkeys}  |  Status: {}", app.status_message))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title("Hotkeys"),
        );
    frame.render_widget(footer, area);
}

pub(super) fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

pub(super) fn focused_border_style() -> Style {
    Style::default().fg(Color::Yellow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use tasklist_store::{Action, TaskStore};

    use crate::logging::LogBuffer;

    fn render(app: &mut AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).expect("test terminal");
        terminal
            .draw(|frame| draw_ui(frame, app))
            .expect("draw frame");
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_store_renders_counts_and_placeholder() {
        let mut app = AppState::new(TaskStore::new(), None);
        let screen = render(&mut app);
        assert!(screen.contains("Completed: 0 / Incomplete: 0"));
        assert!(screen.contains("No tasks yet"));
        assert!(screen.contains("[ Add ]"));
    }

    #[test]
    fn test_tasks_and_edit_mode_render() {
        let mut app = AppState::new(TaskStore::new(), None);
        app.dispatch(Action::SetDraftTitle("Buy milk".to_string()));
        app.dispatch(Action::SetDraftContent("2 liters".to_string()));
        app.submit_form();
        app.toggle_selected();
        app.begin_edit_selected();

        let screen = render(&mut app);
        assert!(screen.contains("Completed: 1 / Incomplete: 0"));
        assert!(screen.contains("Buy milk"));
        assert!(screen.contains("2 liters"));
        assert!(screen.contains("[ Update ]"));
        assert!(screen.contains("Edit task: Buy milk"));
    }

    #[test]
    fn test_edit_heading_keeps_original_title_while_typing() {
        let mut app = AppState::new(TaskStore::new(), None);
        app.dispatch(Action::SetDraftTitle("Buy milk".to_string()));
        app.dispatch(Action::SetDraftContent("2 liters".to_string()));
        app.submit_form();
        app.begin_edit_selected();
        app.dispatch(Action::SetDraftTitle("Buy oat milk".to_string()));

        let screen = render(&mut app);
        assert!(screen.contains("Edit task: Buy milk"));
        assert!(screen.contains("Buy oat milk"));
    }

    #[test]
    fn test_log_panel_shows_buffer_tail() {
        let buffer = LogBuffer::handle(10);
        buffer
            .lock()
            .expect("lock")
            .push_line("INFO task list changed".to_string());
        let mut app = AppState::new(TaskStore::new(), Some(buffer));
        let screen = render(&mut app);
        assert!(screen.contains("Logs"));
        assert!(screen.contains("task list changed"));
    }
}

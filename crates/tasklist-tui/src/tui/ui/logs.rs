/*
[INPUT]:  Shared log buffer fed by the tracing subscriber
[OUTPUT]: Tail of recent log lines rendered into Ratatui frame
[POS]:    TUI UI log panel rendering
*/

use std::sync::PoisonError;

use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::logging::LogBufferHandle;

pub(super) fn draw_logs(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    buffer: &LogBufferHandle,
) {
    let available = area.height.saturating_sub(2) as usize;
    let lines = {
        let guard = buffer.lock().unwrap_or_else(PoisonError::into_inner);
        guard.tail(available)
    };

    let text = lines
        .into_iter()
        .map(|line| Line::from(Span::raw(line)))
        .collect::<Vec<_>>();
    let log_widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(super::border_style())
            .title("Logs"),
    );
    frame.render_widget(log_widget, area);
}

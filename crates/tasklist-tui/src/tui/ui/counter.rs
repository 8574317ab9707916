/*
[INPUT]:  Derived TaskCounts
[OUTPUT]: Completed/incomplete counter bar
[POS]:    TUI UI counter rendering
*/

use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tasklist_store::TaskCounts;

const COUNTER_BG: Color = Color::Rgb(139, 69, 19);

pub(super) fn draw_counter(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    counts: TaskCounts,
) {
    let counter = Paragraph::new(counts.to_string())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(COUNTER_BG)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).border_style(super::border_style()));
    frame.render_widget(counter, area);
}

//! Lecture list view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::LecturesState;
use crate::common::{sanitize_for_display, truncate_with_ellipsis};

/// Renders one row per lecture in the order held by the state.
pub fn render_lecture_list(frame: &mut Frame, lectures: &LecturesState, area: Rect) {
    if !lectures.visible || area.height == 0 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Palestras ");
    let inner_width = usize::from(area.width.saturating_sub(2));

    let lines: Vec<Line> = if lectures.items.is_empty() {
        vec![Line::styled(
            "Nenhuma palestra carregada.",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        lectures
            .items
            .iter()
            .map(|lecture| {
                let row = format!(
                    "id: {} | Título: {}",
                    lecture.id,
                    sanitize_for_display(&lecture.title)
                );
                Line::from(truncate_with_ellipsis(&row, inner_width))
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

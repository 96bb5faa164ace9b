//! Home route view shown to unauthorized sessions.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub fn home_notice_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Acesso restrito.",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Faça login com `giveaway login` para acessar o sorteio."),
    ]
}

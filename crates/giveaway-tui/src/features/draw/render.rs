//! Draw feature view.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::{DrawResult, FormField, FormState, INVALID_ID_MESSAGE};
use crate::common::{sanitize_for_display, truncate_start_with_ellipsis, truncate_with_ellipsis};

/// Visible width of the lecture id input.
const INPUT_WIDTH: usize = 24;

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Result heading: the placeholder, or the winner in the emphasis style.
pub fn result_line(result: &DrawResult, width: usize) -> Line<'static> {
    match result {
        DrawResult::Placeholder => Line::from(Span::styled(
            result.display_text().to_string(),
            Style::default().fg(Color::Gray),
        )),
        DrawResult::Winner(name) => {
            let name = truncate_with_ellipsis(&sanitize_for_display(name), width);
            Line::from(Span::styled(
                name,
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ))
        }
    }
}

/// Shown in place of the result and form while a draw is running.
pub fn loading_lines(spinner_frame: usize) -> Vec<Line<'static>> {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::LightMagenta)),
            Span::raw(" Sorteando..."),
        ]),
    ]
}

pub fn form_lines(form: &FormState, result: &DrawResult, list_visible: bool) -> Vec<Line<'static>> {
    let focused = |field: FormField| form.focus == field;

    let mut lines = vec![Line::from(""), Line::from("Id da palestra:")];
    lines.push(input_line(form, focused(FormField::LectureId)));
    if form.error.is_some() {
        lines.push(Line::from(Span::styled(
            INVALID_ID_MESSAGE,
            Style::default().fg(Color::Red),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let mark = if form.presencial_only { "[x]" } else { "[ ]" };
    lines.push(Line::from(Span::styled(
        format!("{mark} Apenas Presencial?"),
        focus_style(focused(FormField::PresencialOnly)),
    )));
    lines.push(Line::from(""));

    let action = if result.is_winner() {
        "Limpar Vencedor"
    } else {
        "Sortear"
    };
    lines.push(button_line(action, focused(FormField::Action)));

    let toggle = if list_visible {
        "Esconder palestras"
    } else {
        "Mostrar palestras"
    };
    lines.push(button_line(toggle, focused(FormField::ListToggle)));
    lines
}

fn input_line(form: &FormState, focused: bool) -> Line<'static> {
    let border = if form.error.is_some() {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let value = truncate_start_with_ellipsis(&form.lecture_id, INPUT_WIDTH - 1);
    let cursor = if focused { "█" } else { " " };
    let padding = " ".repeat((INPUT_WIDTH - 1).saturating_sub(value.width()));
    Line::from(vec![
        Span::styled("▕ ", Style::default().fg(border)),
        Span::raw(value),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
        Span::raw(padding),
        Span::styled(" ▏", Style::default().fg(border)),
    ])
}

fn button_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Line::from(Span::styled(format!("[ {label} ]"), style))
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

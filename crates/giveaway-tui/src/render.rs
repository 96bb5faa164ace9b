//! Page rendering.
//!
//! Pure functions of `AppState`; nothing here mutates state.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::truncate_with_ellipsis;
use crate::features::{auth, draw, lectures};
use crate::state::{AppState, Route};

/// Maximum width of the centered page column.
const COLUMN_WIDTH: u16 = 64;

pub fn render(app: &AppState, frame: &mut Frame) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(app, frame, header);
    render_body(app, frame, centered_column(body));
    render_hints(app, frame, footer);
}

fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(COLUMN_WIDTH);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, area.height)
}

fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let title = truncate_with_ellipsis(&app.page.title, usize::from(area.width));
    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightMagenta)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::LightMagenta)),
        area,
    );
}

fn render_body(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Sorteio",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    match app.route {
        Route::Home => {
            lines.extend(auth::home_notice_lines());
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
            return;
        }
        // Gate has not run yet.
        Route::Giveaway if !app.auth.authorized => {
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
            return;
        }
        Route::Giveaway => {}
    }

    if app.is_loading() {
        lines.extend(draw::loading_lines(app.spinner_frame));
    } else {
        lines.push(draw::result_line(&app.draw.result, usize::from(area.width)));
        lines.extend(draw::form_lines(
            &app.form,
            &app.draw.result,
            app.lectures.visible,
        ));
    }
    lines.push(Line::from(""));

    let page_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let [page_area, list_area] =
        Layout::vertical([Constraint::Length(page_height), Constraint::Min(0)]).areas(area);

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        page_area,
    );
    lectures::render_lecture_list(frame, &app.lectures, list_area);
}

fn render_hints(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints = match app.route {
        Route::Home => "q sair",
        Route::Giveaway if app.is_loading() => "Esc sair",
        Route::Giveaway => "Tab navegar · Espaço marcar · Enter confirmar · Esc sair",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        area,
    );
}

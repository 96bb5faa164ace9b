//! Reducer.
//!
//! `update` is the single entry point for state changes. It mutates
//! `AppState` and returns the effects the runtime should execute.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::draw::FormField;
use crate::features::{auth, draw, lectures};
use crate::state::{AppState, Route};

pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Mount => handle_mount(app),
        UiEvent::Tick => {
            if app.is_loading() {
                app.spinner_frame = app.spinner_frame.wrapping_add(1);
            }
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
            handle_key(app, key)
        }
        UiEvent::Terminal(_) => vec![],
        UiEvent::LecturesLoaded { task, result } => {
            lectures::handle_lectures_loaded(&mut app.lectures, &mut app.tasks, task, result);
            vec![]
        }
        UiEvent::DrawCompleted { task, result } => {
            draw::handle_draw_completed(
                &mut app.draw,
                &mut app.form,
                &mut app.tasks,
                task,
                result,
            );
            vec![]
        }
    }
}

fn handle_mount(app: &mut AppState) -> Vec<UiEffect> {
    app.route = auth::handle_mount(&mut app.auth);
    match app.route {
        Route::Giveaway => vec![lectures::start_load(&mut app.tasks, &mut app.task_seq)],
        Route::Home => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return vec![UiEffect::Quit];
    }

    if app.route == Route::Home {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Enter => vec![UiEffect::Quit],
            _ => vec![],
        };
    }

    // The form is hidden until the gate passes and while a draw runs.
    if !app.auth.authorized || app.is_loading() {
        return vec![];
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.form.focus_next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.form.focus_prev();
            vec![]
        }
        _ => handle_focused_key(app, key.code, ctrl),
    }
}

fn handle_focused_key(app: &mut AppState, code: KeyCode, ctrl: bool) -> Vec<UiEffect> {
    match (app.form.focus, code) {
        (FormField::LectureId | FormField::PresencialOnly, KeyCode::Enter) => submit(app),
        (FormField::LectureId, KeyCode::Backspace) => {
            app.form.pop_char();
            vec![]
        }
        (FormField::LectureId, KeyCode::Char(c)) if !ctrl => {
            app.form.push_char(c);
            vec![]
        }
        (FormField::PresencialOnly, KeyCode::Char(' ')) => {
            app.form.toggle_presencial_only();
            vec![]
        }
        (FormField::Action, KeyCode::Enter | KeyCode::Char(' ')) => {
            if app.draw.result.is_winner() {
                draw::clear_result(&mut app.draw);
                vec![]
            } else {
                submit(app)
            }
        }
        (FormField::ListToggle, KeyCode::Enter | KeyCode::Char(' ')) => {
            app.lectures.toggle_visible();
            vec![]
        }
        _ => vec![],
    }
}

fn submit(app: &mut AppState) -> Vec<UiEffect> {
    draw::submit(
        &mut app.form,
        &mut app.tasks,
        &mut app.task_seq,
        app.page.draw_delay,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use giveaway_core::auth::{Access, Session};
    use giveaway_core::saphira::{
        DrawMode, DrawRequest, Lecture, SaphiraError, SaphiraErrorKind,
    };

    use super::*;
    use crate::common::TaskId;
    use crate::features::draw::{DrawResult, FieldError};
    use crate::state::PageConfig;

    const DELAY: Duration = Duration::from_millis(2000);

    fn page() -> PageConfig {
        PageConfig {
            title: "CO SSI 2022 | Sorteio".to_string(),
            draw_delay: DELAY,
        }
    }

    fn authorized_app() -> AppState {
        let access = Access::evaluate(Some(&Session::for_key("k")));
        let mut app = AppState::new(page(), access);
        let effects = update(&mut app, UiEvent::Mount);
        assert!(matches!(effects.as_slice(), [UiEffect::LoadLectures { .. }]));
        app
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            update(app, key(KeyCode::Char(c)));
        }
    }

    fn lecture(id: i64, title: &str) -> Lecture {
        Lecture {
            id,
            title: title.to_string(),
        }
    }

    fn lecture_task(effects: &[UiEffect]) -> TaskId {
        match effects {
            [UiEffect::LoadLectures { task }] => *task,
            other => panic!("expected LoadLectures, got {other:?}"),
        }
    }

    fn draw_task(effects: &[UiEffect]) -> (TaskId, DrawRequest) {
        match effects {
            [UiEffect::StartDraw { task, request, delay }] => {
                assert_eq!(*delay, DELAY);
                (*task, request.clone())
            }
            other => panic!("expected StartDraw, got {other:?}"),
        }
    }

    fn server_error() -> SaphiraError {
        SaphiraError::new(SaphiraErrorKind::HttpStatus, "HTTP 500")
    }

    #[test]
    fn test_unauthorized_mount_redirects_without_requests() {
        let mut app = AppState::new(page(), Access::evaluate(None));
        let effects = update(&mut app, UiEvent::Mount);
        assert!(effects.is_empty());
        assert_eq!(app.route, Route::Home);
        assert!(!app.auth.authorized);
    }

    #[test]
    fn test_home_ignores_form_keys_and_quits_on_q() {
        let mut app = AppState::new(page(), Access::evaluate(None));
        update(&mut app, UiEvent::Mount);
        assert!(update(&mut app, key(KeyCode::Char('1'))).is_empty());
        assert!(app.form.lecture_id.is_empty());
        assert_eq!(update(&mut app, key(KeyCode::Char('q'))), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_lectures_loaded_sorted_descending() {
        let access = Access::evaluate(Some(&Session::for_key("k")));
        let mut app = AppState::new(page(), access);
        let task = lecture_task(&update(&mut app, UiEvent::Mount));

        update(
            &mut app,
            UiEvent::LecturesLoaded {
                task,
                result: Ok(vec![lecture(1, "A"), lecture(2, "B")]),
            },
        );
        let ids: Vec<i64> = app.lectures.items.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(!app.tasks.lecture_list.is_running());
    }

    #[test]
    fn test_second_mount_accumulates_lectures() {
        let access = Access::evaluate(Some(&Session::for_key("k")));
        let mut app = AppState::new(page(), access);
        for _ in 0..2 {
            let task = lecture_task(&update(&mut app, UiEvent::Mount));
            update(
                &mut app,
                UiEvent::LecturesLoaded {
                    task,
                    result: Ok(vec![lecture(1, "A")]),
                },
            );
        }
        assert_eq!(app.lectures.items.len(), 2);
    }

    #[test]
    fn test_failed_lecture_load_leaves_list_empty() {
        let access = Access::evaluate(Some(&Session::for_key("k")));
        let mut app = AppState::new(page(), access);
        let task = lecture_task(&update(&mut app, UiEvent::Mount));
        update(
            &mut app,
            UiEvent::LecturesLoaded {
                task,
                result: Err(server_error()),
            },
        );
        assert!(app.lectures.items.is_empty());
        assert_eq!(app.draw.result, DrawResult::Placeholder);
    }

    #[test]
    fn test_stale_lecture_result_is_dropped() {
        let mut app = authorized_app();
        update(
            &mut app,
            UiEvent::LecturesLoaded {
                task: TaskId(999),
                result: Ok(vec![lecture(5, "late")]),
            },
        );
        assert!(app.lectures.items.is_empty());
    }

    #[test]
    fn test_blank_id_flags_field_without_request() {
        let mut app = authorized_app();
        type_text(&mut app, " ");
        update(&mut app, key(KeyCode::Tab));
        assert_eq!(app.form.focus, FormField::PresencialOnly);

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(app.form.error, Some(FieldError::Required));
        assert_eq!(app.form.focus, FormField::LectureId);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_submit_general_draw() {
        let mut app = authorized_app();
        type_text(&mut app, "7");
        let (_, request) = draw_task(&update(&mut app, key(KeyCode::Enter)));
        assert_eq!(request.lecture_id, "7");
        assert_eq!(request.mode, DrawMode::General);
        assert!(app.is_loading());
    }

    #[test]
    fn test_submit_presencial_draw() {
        let mut app = authorized_app();
        type_text(&mut app, "7");
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Char(' ')));
        assert!(app.form.presencial_only);

        let (_, request) = draw_task(&update(&mut app, key(KeyCode::Enter)));
        assert_eq!(request.mode, DrawMode::PresencialOnly);
    }

    #[test]
    fn test_input_ignored_while_loading() {
        let mut app = authorized_app();
        type_text(&mut app, "7");
        draw_task(&update(&mut app, key(KeyCode::Enter)));

        assert!(update(&mut app, key(KeyCode::Enter)).is_empty());
        type_text(&mut app, "8");
        assert_eq!(app.form.lecture_id, "7");
    }

    #[test]
    fn test_successful_draw_shows_winner_and_resets_form() {
        let mut app = authorized_app();
        type_text(&mut app, "7");
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Char(' ')));
        let (task, _) = draw_task(&update(&mut app, key(KeyCode::Enter)));

        update(
            &mut app,
            UiEvent::DrawCompleted {
                task,
                result: Ok("Maria".to_string()),
            },
        );
        assert_eq!(app.draw.result, DrawResult::Winner("Maria".to_string()));
        assert!(app.form.lecture_id.is_empty());
        assert!(!app.form.presencial_only);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_failed_draw_keeps_previous_winner() {
        let mut app = authorized_app();
        type_text(&mut app, "7");
        let (task, _) = draw_task(&update(&mut app, key(KeyCode::Enter)));
        update(
            &mut app,
            UiEvent::DrawCompleted {
                task,
                result: Ok("Maria".to_string()),
            },
        );

        type_text(&mut app, "99");
        let (task, _) = draw_task(&update(&mut app, key(KeyCode::Enter)));
        update(
            &mut app,
            UiEvent::DrawCompleted {
                task,
                result: Err(server_error()),
            },
        );

        assert_eq!(app.draw.result, DrawResult::Winner("Maria".to_string()));
        assert_eq!(app.form.error, Some(FieldError::DrawFailed));
        assert_eq!(app.form.focus, FormField::LectureId);
        assert_eq!(app.form.lecture_id, "99");
        assert!(!app.is_loading());
    }

    #[test]
    fn test_clear_winner_restores_placeholder() {
        let mut app = authorized_app();
        app.draw.result = DrawResult::Winner("Maria".to_string());
        app.form.focus = FormField::Action;

        let effects = update(&mut app, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert_eq!(app.draw.result, DrawResult::Placeholder);
    }

    #[test]
    fn test_action_button_submits_without_winner() {
        let mut app = authorized_app();
        type_text(&mut app, "3");
        app.form.focus = FormField::Action;
        draw_task(&update(&mut app, key(KeyCode::Enter)));
    }

    #[test]
    fn test_list_toggle() {
        let mut app = authorized_app();
        assert!(app.lectures.visible);
        update(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.form.focus, FormField::ListToggle);
        update(&mut app, key(KeyCode::Enter));
        assert!(!app.lectures.visible);
        update(&mut app, key(KeyCode::Enter));
        assert!(app.lectures.visible);
    }

    #[test]
    fn test_backspace_edits_id() {
        let mut app = authorized_app();
        type_text(&mut app, "12");
        update(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.form.lecture_id, "1");
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut app = authorized_app();
        assert_eq!(update(&mut app, key(KeyCode::Esc)), vec![UiEffect::Quit]);
        let ctrl_c = UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(update(&mut app, ctrl_c), vec![UiEffect::Quit]);
        assert!(app.form.lecture_id.is_empty());
    }
}

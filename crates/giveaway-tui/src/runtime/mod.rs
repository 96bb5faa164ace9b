//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and returns
//! effects; handlers run on tokio and report back through the inbox.

mod handlers;
mod inbox;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use giveaway_core::saphira::SaphiraClient;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while a request is in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

pub struct TuiRuntime {
    /// `None` only for the headless runtime used in tests.
    terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
    pub state: AppState,
    client: SaphiraClient,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Enters the alternate screen and prepares the runtime.
    ///
    /// Must be called from within a multi-threaded tokio runtime context:
    /// the event loop blocks the calling thread while handlers run on the
    /// runtime's worker threads.
    pub fn new(state: AppState, client: SaphiraClient) -> Result<Self> {
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        Ok(Self::with_terminal(Some(terminal), state, client))
    }

    /// Runtime without a terminal. Effects still run; nothing is drawn.
    #[cfg(test)]
    fn headless(state: AppState, client: SaphiraClient) -> Self {
        Self::with_terminal(None, state, client)
    }

    fn with_terminal(
        terminal: Option<Terminal<CrosstermBackend<Stdout>>>,
        state: AppState,
        client: SaphiraClient,
    ) -> Self {
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        }
    }

    /// Mounts the page and runs until the user quits.
    pub fn run(&mut self) -> Result<()> {
        self.dispatch_event(UiEvent::Mount);
        self.event_loop()
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            if dirty && let Some(terminal) = self.terminal.as_mut() {
                terminal.draw(|frame| render::render(&self.state, frame))?;
            }

            let events = self.collect_events()?;
            dirty = !events.is_empty();
            for event in events {
                self.dispatch_event(event);
            }
        }

        Ok(())
    }

    /// Drains the inbox, then polls the terminal until input arrives or the
    /// next tick is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.tasks.is_any_running() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        self.collect_inbox_events(&mut events);

        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    /// Drains every result handlers have sent so far.
    fn collect_inbox_events(&mut self, events: &mut Vec<UiEvent>) {
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns a handler and routes its result event into the inbox. A send
    /// after the runtime is gone is dropped.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::LoadLectures { task } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::load_lectures(client, task));
            }
            UiEffect::StartDraw {
                task,
                request,
                delay,
            } => {
                let client = self.client.clone();
                self.spawn_effect(move || handlers::draw(client, task, request, delay));
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        if self.terminal.is_some() {
            let _ = terminal::restore_terminal();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use giveaway_core::auth::{Access, Session};
    use giveaway_core::saphira::{DrawRequest, SaphiraConfig};
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::features::draw::DrawResult;
    use crate::state::PageConfig;

    fn runtime_for(server: &MockServer) -> TuiRuntime {
        let access = Access::evaluate(Some(&Session::for_key("k")));
        let client = SaphiraClient::new(SaphiraConfig {
            base_url: Url::parse(&server.uri()).unwrap(),
            auth_key: access.key().cloned(),
            timeout: None,
        })
        .unwrap();
        let page = PageConfig {
            title: "Sorteio".to_string(),
            draw_delay: Duration::ZERO,
        };
        TuiRuntime::headless(AppState::new(page, access), client)
    }

    /// Blocks the calling thread the way the event loop does, polling the
    /// inbox until `count` events arrived.
    fn wait_for_inbox(runtime: &mut TuiRuntime, count: usize) -> Vec<UiEvent> {
        let deadline = Instant::now() + Duration::from_secs(5);
        let mut events = Vec::new();
        while events.len() < count && Instant::now() < deadline {
            runtime.collect_inbox_events(&mut events);
            thread::sleep(Duration::from_millis(10));
        }
        events
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_draw_effect_reaches_inbox_and_updates_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lectures"))
            .and(header("authorization", "Bearer k"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/giveaway/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nome": "Maria"})))
            .expect(1)
            .mount(&server)
            .await;

        let mut runtime = runtime_for(&server);
        runtime.dispatch_event(UiEvent::Mount);
        for event in wait_for_inbox(&mut runtime, 1) {
            runtime.dispatch_event(event);
        }
        assert!(!runtime.state.tasks.lecture_list.is_running());

        let task = runtime.state.task_seq.next_id();
        runtime.state.tasks.draw.start(task);
        runtime.execute_effect(UiEffect::StartDraw {
            task,
            request: DrawRequest::new("7", false).unwrap(),
            delay: Duration::ZERO,
        });

        let events = wait_for_inbox(&mut runtime, 1);
        assert!(matches!(
            events.as_slice(),
            [UiEvent::DrawCompleted { result: Ok(name), .. }] if name == "Maria"
        ));
        for event in events {
            runtime.dispatch_event(event);
        }
        assert_eq!(
            runtime.state.draw.result,
            DrawResult::Winner("Maria".to_string())
        );
        assert!(!runtime.state.is_loading());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_quit_effect_stops_loop() {
        let server = MockServer::start().await;
        let mut runtime = runtime_for(&server);
        runtime.execute_effect(UiEffect::Quit);
        assert!(runtime.state.should_quit);
    }
}

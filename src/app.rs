//! Global state container, action dispatch and the generation pipeline.

use std::sync::{Arc, Mutex};

use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, warn};

use crate::actions::Action;
use crate::backend::{generate_palette, PaletteSource};
use crate::commands::{registry, update_palette_filter};
use crate::config::FailurePolicy;
use crate::error::PaletteError;
use crate::export::{css_variables, tailwind_config};
use crate::palette::{is_hex_color, ColorRole, Palette, ValidatedPalette};
use crate::services::{parse_command, Command, CopyTarget};
use crate::state::{AppState, Notice};

const HELP_TEXT: &str = "Type a vibe + Enter to generate · Tab role · /set /edit /reset /copy · q quit";

/// Result of one generation request, delivered back to the UI loop.
#[derive(Debug)]
pub struct GenerationOutcome {
    pub description: String,
    pub result: Result<ValidatedPalette, PaletteError>,
}

/// Export snippets kept in sync with the palette by a store listener.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportSnippets {
    pub tailwind: String,
    pub css: String,
}

impl ExportSnippets {
    fn render(palette: &Palette) -> Self {
        Self { tailwind: tailwind_config(palette), css: css_variables(palette) }
    }
}

pub struct App {
    pub state: AppState,
    source: Arc<dyn PaletteSource>,
    runtime: Handle,
    results_tx: UnboundedSender<GenerationOutcome>,
    results_rx: UnboundedReceiver<GenerationOutcome>,
    on_failure: FailurePolicy,
    exports: Arc<Mutex<ExportSnippets>>,
    pub should_quit: bool,
    /// For spinner animation (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(source: Arc<dyn PaletteSource>, on_failure: FailurePolicy, runtime: Handle) -> Self {
        let (results_tx, results_rx) = unbounded_channel();
        Self {
            state: AppState::default(),
            source,
            runtime,
            results_tx,
            results_rx,
            on_failure,
            exports: Arc::new(Mutex::new(ExportSnippets::default())),
            should_quit: false,
            tick: 0,
        }
    }

    pub fn bootstrap(&mut self) {
        self.state.command_palette.commands = registry();
        update_palette_filter(&mut self.state.command_palette);

        if let Ok(mut exports) = self.exports.lock() {
            *exports = ExportSnippets::render(self.state.palette.current());
        }
        let exports = Arc::clone(&self.exports);
        self.state.palette.subscribe(move |palette| {
            if let Ok(mut guard) = exports.lock() {
                *guard = ExportSnippets::render(palette);
            }
        });

        self.state.notice = Some(Notice::info(HELP_TEXT));
        info!(source = self.source.name(), "palette designer ready");
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub fn exports(&self) -> ExportSnippets {
        self.exports.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Starts a generation request unless one is already pending.
    pub fn generate(&mut self, description: String) -> Result<(), PaletteError> {
        if description.trim().is_empty() {
            return Err(PaletteError::EmptyInput);
        }
        let guard = self
            .state
            .in_flight
            .try_acquire()
            .ok_or(PaletteError::AlreadyGenerating)?;
        let source = Arc::clone(&self.source);
        let tx = self.results_tx.clone();
        info!(%description, "generating palette");
        let request = description.clone();
        let worker = self
            .runtime
            .spawn(async move { generate_palette(source.as_ref(), &request).await });
        // The guard lives in the supervising task so a panicking worker still
        // produces an outcome before the flag clears.
        self.runtime.spawn(async move {
            let result = worker.await.unwrap_or_else(|err| {
                error!(error = %err, "generation task aborted");
                Err(PaletteError::WorkerFailed(err.to_string()))
            });
            let _ = tx.send(GenerationOutcome { description, result });
            drop(guard);
        });
        Ok(())
    }

    /// Applies any finished generation results. Called once per tick.
    pub fn poll_results(&mut self) {
        while let Ok(outcome) = self.results_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: GenerationOutcome) {
        match outcome.result {
            Ok(palette) => {
                info!(description = %outcome.description, "palette generated");
                self.state.palette.replace(palette);
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
                self.state.notice =
                    Some(Notice::info(format!("Generated palette for \"{}\"", outcome.description)));
            }
            Err(err) => {
                error!(error = %err, description = %outcome.description, "palette generation failed");
                match self.on_failure {
                    FailurePolicy::Surface => {
                        self.state.notice = Some(Notice::error(err.to_string()));
                    }
                    FailurePolicy::FallbackToDefault => {
                        warn!("falling back to the default palette");
                        self.state.palette.replace(ValidatedPalette::default());
                        self.state.notice =
                            Some(Notice::error(format!("{err} (reverted to default palette)")));
                    }
                }
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        let loading = self.state.loading();
        match action {
            Action::Quit => self.should_quit = true,

            // The input is disabled while a request is pending.
            Action::Char(_) | Action::Backspace | Action::ClearInput | Action::HistoryUp
            | Action::HistoryDown | Action::PaletteShow
                if loading => {}

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
                if self.state.command_palette.visible {
                    self.sync_palette_query();
                }
            }
            Action::Backspace => self.backspace(),
            Action::ClearInput => {
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
                self.state.command_palette.visible = false;
            }
            Action::Submit => self.submit_input(),
            Action::DismissNotice => self.state.notice = None,

            Action::NextRole => self.state.selected_role = self.state.selected_role.next(),
            Action::PrevRole => self.state.selected_role = self.state.selected_role.prev(),

            Action::HistoryUp => self.history_up(),
            Action::HistoryDown => self.history_down(),

            Action::PaletteShow => {
                let menu = &mut self.state.command_palette;
                menu.visible = true;
                menu.query.clear();
                self.state.input_buffer = "/".to_string();
                self.state.input_cursor = 1;
                update_palette_filter(&mut self.state.command_palette);
            }
            Action::PaletteHide => {
                self.state.command_palette.visible = false;
            }
            Action::PaletteUp => {
                let menu = &mut self.state.command_palette;
                if !menu.filtered.is_empty() {
                    let len = menu.filtered.len();
                    menu.selected_index = (menu.selected_index + len - 1) % len;
                }
            }
            Action::PaletteDown => {
                let menu = &mut self.state.command_palette;
                if !menu.filtered.is_empty() {
                    let len = menu.filtered.len();
                    menu.selected_index = (menu.selected_index + 1) % len;
                }
            }
            Action::PaletteSelect => self.accept_palette_selection(),
        }
    }

    fn backspace(&mut self) {
        let cursor = self.state.input_cursor.min(self.state.input_buffer.len());
        if cursor == 0 {
            return;
        }
        let prev = self.state.input_buffer[..cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.state.input_buffer.replace_range(prev..cursor, "");
        self.state.input_cursor = prev;
        if self.state.command_palette.visible {
            if self.state.input_buffer.is_empty() {
                self.state.command_palette.visible = false;
            } else {
                self.sync_palette_query();
            }
        }
    }

    fn sync_palette_query(&mut self) {
        self.state.command_palette.query =
            self.state.input_buffer.get(1..).unwrap_or("").to_string();
        update_palette_filter(&mut self.state.command_palette);
    }

    fn accept_palette_selection(&mut self) {
        if let Some(cmd) = self.state.command_palette.selected_command() {
            self.state.input_buffer = format!("{} ", cmd.name);
            self.state.input_cursor = self.state.input_buffer.len();
        }
        self.state.command_palette.visible = false;
    }

    fn submit_input(&mut self) {
        let raw = self.state.input_buffer.trim().to_string();
        if raw.is_empty() {
            return;
        }

        // An incomplete command with the palette open picks the highlighted entry.
        let menu = &self.state.command_palette;
        if menu.visible && !menu.filtered.is_empty() && parse_command(&raw).is_err() {
            self.accept_palette_selection();
            return;
        }
        self.state.command_palette.visible = false;

        if self.state.history.last() != Some(&raw) {
            self.state.history.push(raw.clone());
        }
        self.state.history_index = self.state.history.len();

        match parse_command(&raw) {
            Ok(command) => {
                // A description stays in the input until its palette arrives.
                if !matches!(command, Command::Generate(_)) {
                    self.state.input_buffer.clear();
                    self.state.input_cursor = 0;
                }
                self.run_command(command);
            }
            Err(message) => self.state.notice = Some(Notice::error(message)),
        }
    }

    fn run_command(&mut self, command: Command) {
        match command {
            Command::Generate(description) => {
                if let Err(err) = self.generate(description) {
                    self.state.notice = Some(Notice::error(err.to_string()));
                }
            }
            Command::Set { role, value } => self.set_color(role, value),
            Command::Edit(value) => self.set_color(self.state.selected_role, value),
            Command::Reset => {
                self.state.palette.replace(ValidatedPalette::default());
                self.state.notice = Some(Notice::info("Restored the default palette"));
            }
            Command::Copy(target) => {
                let exports = self.exports();
                let (label, text) = match target {
                    CopyTarget::Tailwind => ("Tailwind config", exports.tailwind),
                    CopyTarget::Css => ("CSS variables", exports.css),
                };
                self.state.notice = Some(match copy_to_clipboard(&text) {
                    Ok(()) => Notice::info(format!("Copied {label} to clipboard")),
                    Err(err) => {
                        warn!(error = %err, "clipboard unavailable");
                        Notice::error(format!("Clipboard unavailable: {err}"))
                    }
                });
            }
            Command::Help => self.state.notice = Some(Notice::info(HELP_TEXT)),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Manual edits are stored verbatim; previews fall back for unparseable values.
    fn set_color(&mut self, role: ColorRole, value: String) {
        self.state.selected_role = role;
        let valid = is_hex_color(&value);
        self.state.palette.set_field(role, value.clone());
        self.state.notice = Some(if valid {
            Notice::info(format!("{} set to {value}", role.label()))
        } else {
            Notice::error(format!("{} set to {value}, which is not a hex color", role.label()))
        });
    }

    fn history_up(&mut self) {
        if self.state.command_palette.visible {
            return;
        }
        if !self.state.history.is_empty() && self.state.history_index > 0 {
            self.state.history_index -= 1;
            self.state.input_buffer = self.state.history[self.state.history_index].clone();
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }

    fn history_down(&mut self) {
        if self.state.command_palette.visible {
            return;
        }
        if self.state.history_index < self.state.history.len() {
            self.state.history_index += 1;
            self.state.input_buffer = if self.state.history_index >= self.state.history.len() {
                String::new()
            } else {
                self.state.history[self.state.history_index].clone()
            };
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NoticeKind;
    use async_trait::async_trait;
    use std::time::Duration;
    use tokio::sync::Notify;

    const GOOD: &str = r##"{"primary":"#111111","secondary":"#222222","accent":"#333333","background":"#444444","surface":"#555555"}"##;

    /// Replies once `release` is notified.
    struct Gated {
        reply: Result<String, PaletteError>,
        release: Arc<Notify>,
    }

    #[async_trait]
    impl PaletteSource for Gated {
        fn name(&self) -> &str {
            "gated"
        }

        async fn send(&self, _description: &str) -> Result<String, PaletteError> {
            self.release.notified().await;
            self.reply.clone()
        }
    }

    fn app(reply: Result<String, PaletteError>, policy: FailurePolicy) -> (App, Arc<Notify>) {
        let release = Arc::new(Notify::new());
        let source = Arc::new(Gated { reply, release: Arc::clone(&release) });
        let mut app = App::new(source, policy, Handle::current());
        app.bootstrap();
        (app, release)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.dispatch(Action::Char(c));
        }
    }

    async fn settle(app: &mut App) {
        for _ in 0..200 {
            app.poll_results();
            if !app.state.loading() {
                app.poll_results();
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("generation never finished");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn second_request_rejected_while_first_in_flight() {
        let (mut app, release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        assert!(app.generate("first".to_string()).is_ok());
        assert_eq!(app.generate("second".to_string()), Err(PaletteError::AlreadyGenerating));
        release.notify_one();
        settle(&mut app).await;
        assert_eq!(app.state.palette.current().primary, "#111111");
        assert!(app.generate("third".to_string()).is_ok());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn success_replaces_palette_and_clears_input() {
        let (mut app, release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        type_text(&mut app, "Nordic night");
        app.dispatch(Action::Submit);
        assert!(app.state.loading());

        // Typing is ignored while pending; a resubmit is rejected and keeps the text.
        app.dispatch(Action::Char('x'));
        assert_eq!(app.state.input_buffer, "Nordic night");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.input_buffer, "Nordic night");
        assert!(app
            .state
            .notice
            .as_ref()
            .is_some_and(|n| n.text == PaletteError::AlreadyGenerating.to_string()));

        release.notify_one();
        settle(&mut app).await;
        assert_eq!(app.state.palette.current().surface, "#555555");
        assert!(app.state.input_buffer.is_empty());
        assert!(app.exports().css.contains("--color-surface: #555555;"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn failure_keeps_palette_and_input() {
        let (mut app, release) = app(Ok("not json".to_string()), FailurePolicy::Surface);
        type_text(&mut app, "coffee shop");
        app.dispatch(Action::Submit);
        release.notify_one();
        settle(&mut app).await;

        assert_eq!(app.state.palette.current(), &Palette::default());
        assert_eq!(app.state.input_buffer, "coffee shop");
        let notice = app.state.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("not valid JSON"));
        assert!(!app.state.loading());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn fallback_policy_restores_default() {
        let (mut app, release) =
            app(Err(PaletteError::EmptyResponse), FailurePolicy::FallbackToDefault);
        type_text(&mut app, "/primary #ABC");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.palette.current().primary, "#ABC");

        type_text(&mut app, "brutalist");
        app.dispatch(Action::Submit);
        release.notify_one();
        settle(&mut app).await;
        assert_eq!(app.state.palette.current(), &Palette::default());
        assert!(app.state.notice.as_ref().is_some_and(|n| n.text.contains("reverted")));
    }

    struct Exploding;

    #[async_trait]
    impl PaletteSource for Exploding {
        fn name(&self) -> &str {
            "exploding"
        }

        async fn send(&self, _description: &str) -> Result<String, PaletteError> {
            panic!("worker blew up")
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn panicking_worker_reports_failure() {
        let mut app = App::new(Arc::new(Exploding), FailurePolicy::Surface, Handle::current());
        app.bootstrap();
        type_text(&mut app, "volcano");
        app.dispatch(Action::Submit);
        settle(&mut app).await;

        assert!(!app.state.loading());
        assert_eq!(app.state.palette.current(), &Palette::default());
        assert_eq!(app.state.input_buffer, "volcano");
        let notice = app.state.notice.clone().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.text.contains("stopped unexpectedly"));
        assert!(app.generate("again".to_string()).is_ok());
    }

    #[tokio::test]
    async fn manual_edit_commands() {
        let (mut app, _release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        app.dispatch(Action::NextRole);
        assert_eq!(app.state.selected_role, ColorRole::Secondary);
        type_text(&mut app, "/edit #0F0");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.palette.current().secondary, "#0F0");
        assert_eq!(app.state.palette.current().primary, "#36454F");
        assert!(app.exports().tailwind.contains("secondary: '#0F0'"));

        type_text(&mut app, "/set accent oops");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.palette.current().accent, "oops");
        assert_eq!(app.state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));

        type_text(&mut app, "/reset");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.palette.current(), &Palette::default());
    }

    #[tokio::test]
    async fn blank_submit_does_nothing() {
        let (mut app, _release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        type_text(&mut app, "   ");
        app.dispatch(Action::Submit);
        assert!(!app.state.loading());
        assert_eq!(app.generate("  ".to_string()), Err(PaletteError::EmptyInput));
    }

    #[tokio::test]
    async fn unknown_command_keeps_input() {
        let (mut app, _release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        type_text(&mut app, "/frobnicate");
        app.dispatch(Action::Submit);
        assert_eq!(app.state.input_buffer, "/frobnicate");
        assert_eq!(app.state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
    }

    #[tokio::test]
    async fn palette_select_fills_input() {
        let (mut app, _release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        app.dispatch(Action::PaletteShow);
        type_text(&mut app, "reset");
        app.dispatch(Action::PaletteSelect);
        assert_eq!(app.state.input_buffer, "/reset ");
        assert!(!app.state.command_palette.visible);
    }

    #[tokio::test]
    async fn history_recalls_previous_lines() {
        let (mut app, _release) = app(Ok(GOOD.to_string()), FailurePolicy::Surface);
        type_text(&mut app, "/help");
        app.dispatch(Action::Submit);
        app.dispatch(Action::HistoryUp);
        assert_eq!(app.state.input_buffer, "/help");
        app.dispatch(Action::HistoryDown);
        assert!(app.state.input_buffer.is_empty());
    }
}

//! App state: the palette store, input, command palette, in-flight flag.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::palette::{ColorRole, Palette, ValidatedPalette};

/// Called synchronously after every palette mutation.
pub type Listener = Box<dyn Fn(&Palette) + Send>;

/// Sole owner of the live palette.
pub struct PaletteStore {
    palette: Palette,
    revision: u64,
    listeners: Vec<Listener>,
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self {
            palette: ValidatedPalette::default().into_inner(),
            revision: 0,
            listeners: Vec::new(),
        }
    }
}

impl fmt::Debug for PaletteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteStore")
            .field("palette", &self.palette)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PaletteStore {
    pub fn current(&self) -> &Palette {
        &self.palette
    }

    /// Bumped once per mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&Palette) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Manual edit: overwrites one role without validation.
    pub fn set_field(&mut self, role: ColorRole, value: impl Into<String>) {
        *self.palette.get_mut(role) = value.into();
        debug!(%role, value = %self.palette.get(role), "palette field set");
        self.notify();
    }

    /// Wholesale replacement with a palette that already passed validation.
    pub fn replace(&mut self, palette: ValidatedPalette) {
        self.palette = palette.into_inner();
        debug!(palette = ?self.palette, "palette replaced");
        self.notify();
    }

    fn notify(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        for listener in &self.listeners {
            listener(&self.palette);
        }
    }
}

/// At-most-one-in-flight flag shared with the generation worker.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Arc<AtomicBool>);

impl InFlight {
    /// Claims the flag, or returns `None` if a request is already pending.
    pub fn try_acquire(&self) -> Option<InFlightGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(Arc::clone(&self.0)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag when dropped, whichever way the worker exits.
#[derive(Debug)]
pub struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown in the status bar until dismissed or replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }
    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }
}

/// One command in the slash-command registry.
#[derive(Clone, Debug)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
}

/// Command palette: visible, query after "/", filtered list, selection index.
#[derive(Clone, Debug, Default)]
pub struct CommandPaletteState {
    pub visible: bool,
    pub query: String,
    pub commands: Vec<CommandEntry>,
    /// Indices into commands that match current query (fuzzy).
    pub filtered: Vec<usize>,
    pub selected_index: usize,
}

impl CommandPaletteState {
    pub fn selected_command(&self) -> Option<&CommandEntry> {
        self.filtered.get(self.selected_index).and_then(|&i| self.commands.get(i))
    }
}

#[derive(Debug)]
pub struct AppState {
    pub palette: PaletteStore,
    /// Role targeted by `/edit` and highlighted in the editor.
    pub selected_role: ColorRole,
    pub input_buffer: String,
    pub input_cursor: usize,
    pub history: Vec<String>,
    pub history_index: usize,
    pub command_palette: CommandPaletteState,
    pub in_flight: InFlight,
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            palette: PaletteStore::default(),
            selected_role: ColorRole::Primary,
            input_buffer: String::new(),
            input_cursor: 0,
            history: Vec::new(),
            history_index: 0,
            command_palette: CommandPaletteState::default(),
            in_flight: InFlight::default(),
            notice: None,
        }
    }
}

impl AppState {
    pub fn input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }
    pub fn loading(&self) -> bool {
        self.in_flight.is_active()
    }
}

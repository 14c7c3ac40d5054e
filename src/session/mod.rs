//! Edit session
//!
//! The [`EditSession`] owns the live buffer, the history log and the two
//! debouncers that turn edits into preview renders and history snapshots.
//!
//! ## Flow
//!
//! ```text
//! edit ──> on_change ──┬─> render debouncer  ──(tick)──> render
//!                      └─> history debouncer ──(tick)──> record
//! undo/redo ──> buffer restored ──┬─> both debouncers cancelled
//!                                 └─> immediate render
//! ```
//!
//! The session never blocks or spawns timers. The host asks for
//! [`EditSession::next_deadline`], wakes up at that time and calls
//! [`EditSession::tick`].

use serde::{Deserialize, Serialize};

use crate::commands::{CommandAction, EditorCommand};
use crate::config::EditorConfig;
use crate::render::{PreviewSurface, Renderer};
use crate::schedule::{Clock, Debouncer};
use crate::text::{BufferState, Selection, TextBuffer};
use crate::undo::HistoryManager;

/// Deferred work; resolved against the live buffer when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    Render,
    SaveHistory,
}

/// Pending-work state of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum SessionState {
    Idle,
    Pending { render: bool, save: bool },
}

/// What a call to [`EditSession::tick`] ran
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fired {
    pub rendered: bool,
    pub saved: bool,
}

impl Fired {
    pub fn any(&self) -> bool {
        self.rendered || self.saved
    }
}

#[derive(Debug, Clone, Copy)]
enum HistoryStep {
    Undo,
    Redo,
}

pub struct EditSession {
    buffer: TextBuffer,
    history: HistoryManager,
    render_debounce: Debouncer<Deferred>,
    history_debounce: Debouncer<Deferred>,
    config: EditorConfig,
    renderer: Box<dyn Renderer>,
    surface: Box<dyn PreviewSurface>,
    clock: Box<dyn Clock>,
}

impl EditSession {
    /// Start a session on `config.initial_text`
    ///
    /// The initial content is recorded and rendered synchronously.
    pub fn new(
        config: EditorConfig,
        renderer: Box<dyn Renderer>,
        surface: Box<dyn PreviewSurface>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let mut session = Self {
            buffer: TextBuffer::from_text(config.initial_text.as_str()),
            history: HistoryManager::new(config.history_limit),
            render_debounce: Debouncer::new(),
            history_debounce: Debouncer::new(),
            config,
            renderer,
            surface,
            clock,
        };
        session.render_now();
        session.history.record(session.buffer.snapshot());
        log::info!(
            "edit session started ({} bytes, render delay {}ms, history delay {}ms)",
            session.buffer.len(),
            session.config.render_delay_ms,
            session.config.history_delay_ms
        );
        session
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn selection(&self) -> Selection {
        self.buffer.selection()
    }

    pub fn snapshot(&self) -> BufferState {
        self.buffer.snapshot()
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        let render = self.render_debounce.is_pending();
        let save = self.history_debounce.is_pending();
        if render || save {
            SessionState::Pending { render, save }
        } else {
            SessionState::Idle
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Surround the selection with `before`/`after`
    pub fn wrap_selection(&mut self, before: &str, after: &str) {
        let cursor = self.buffer.wrap_selection(before, after);
        log::debug!("wrap_selection {:?}..{:?}, cursor -> {}", before, after, cursor);
        self.on_change();
    }

    /// Prefix the current line with `prefix`
    pub fn insert_line_prefix(&mut self, prefix: &str) {
        let cursor = self.buffer.insert_line_prefix(prefix);
        log::debug!("insert_line_prefix {:?}, cursor -> {}", prefix, cursor);
        self.on_change();
    }

    /// Replace the whole buffer (file open, external input)
    pub fn replace_all(&mut self, text: impl Into<String>, cursor: usize) {
        self.buffer.replace_all(text, cursor);
        log::debug!("replace_all: {} bytes, cursor -> {}", self.buffer.len(), cursor);
        self.on_change();
    }

    /// The user typed in the editor: new text and selection from the host
    pub fn input(&mut self, text: impl Into<String>, selection: Selection) {
        self.buffer.replace_all(text, selection.start());
        self.buffer.set_selection(selection);
        self.on_change();
    }

    /// Cursor movement only; nothing is scheduled
    pub fn set_selection(&mut self, selection: Selection) {
        self.buffer.set_selection(selection);
    }

    pub fn request_undo(&mut self) -> bool {
        self.step(HistoryStep::Undo)
    }

    pub fn request_redo(&mut self) -> bool {
        self.step(HistoryStep::Redo)
    }

    /// Run a toolbar/keyboard command
    ///
    /// Returns `false` only for an undo/redo at a history boundary.
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        match command.action() {
            CommandAction::Wrap { before, after } => {
                self.wrap_selection(before, after);
                true
            }
            CommandAction::LinePrefix(prefix) => {
                self.insert_line_prefix(prefix);
                true
            }
            CommandAction::Undo => self.request_undo(),
            CommandAction::Redo => self.request_redo(),
        }
    }

    // ========================================================================
    // Scheduling
    // ========================================================================

    /// Run whatever debounced work is due
    pub fn tick(&mut self) -> Fired {
        let now = self.clock.now_ms();
        let mut fired = Fired::default();

        let due = [self.render_debounce.poll(now), self.history_debounce.poll(now)];
        for task in due.into_iter().flatten() {
            match task {
                Deferred::Render => {
                    self.render_now();
                    fired.rendered = true;
                }
                Deferred::SaveHistory => {
                    self.history.record(self.buffer.snapshot());
                    fired.saved = true;
                }
            }
        }
        fired
    }

    /// Earliest time at which `tick` has work to do
    pub fn next_deadline(&self) -> Option<f64> {
        match (self.render_debounce.deadline(), self.history_debounce.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Milliseconds from now until `next_deadline`
    pub fn next_delay_ms(&self) -> Option<u32> {
        let now = self.clock.now_ms();
        self.next_deadline()
            .map(|deadline| (deadline - now).max(0.0).ceil() as u32)
    }

    /// Render the current text straight to the surface
    pub fn render_now(&mut self) {
        let html = self.renderer.render(self.buffer.text());
        self.surface.show(&html);
    }

    fn on_change(&mut self) {
        let now = self.clock.now_ms();
        self.render_debounce
            .schedule(Deferred::Render, self.config.render_delay_ms, now);
        self.history_debounce
            .schedule(Deferred::SaveHistory, self.config.history_delay_ms, now);
    }

    /// Restore a history snapshot without going through `on_change`,
    /// otherwise the restored text would be recorded as a new edit.
    fn step(&mut self, step: HistoryStep) -> bool {
        let snapshot = match step {
            HistoryStep::Undo => self.history.undo(),
            HistoryStep::Redo => self.history.redo(),
        };
        let Some(snapshot) = snapshot else {
            log::debug!("{:?}: nothing to restore", step);
            return false;
        };
        self.buffer.restore(snapshot);

        self.render_debounce.cancel();
        self.history_debounce.cancel();
        self.render_now();

        log::debug!(
            "{:?}: restored snapshot {:?}/{}",
            step,
            self.history.current_index(),
            self.history.len()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;
    use crate::schedule::ManualClock;

    fn session(text: &str) -> (EditSession, ManualClock, RecordingSurface) {
        let clock = ManualClock::new();
        let surface = RecordingSurface::new();
        let session = EditSession::new(
            EditorConfig::default().with_initial_text(text),
            Box::new(|text: &str| format!("<p>{}</p>", text)),
            Box::new(surface.clone()),
            Box::new(clock.clone()),
        );
        (session, clock, surface)
    }

    #[test]
    fn test_new_session_records_and_renders() {
        let (session, _, surface) = session("start");
        assert_eq!(session.history().len(), 1);
        assert_eq!(surface.last().as_deref(), Some("<p>start</p>"));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_edit_arms_both_debouncers() {
        let (mut session, clock, surface) = session("hello");
        session.set_selection(Selection::new(1, 4));
        session.wrap_selection("**", "**");

        assert_eq!(session.text(), "h**ell**o");
        assert_eq!(session.cursor(), 7);
        assert_eq!(session.state(), SessionState::Pending { render: true, save: true });
        assert_eq!(session.next_delay_ms(), Some(100));

        clock.advance(100.0);
        assert_eq!(session.tick(), Fired { rendered: false, saved: true });
        assert_eq!(session.state(), SessionState::Pending { render: true, save: false });
        assert_eq!(session.history().len(), 2);

        clock.advance(50.0);
        assert_eq!(session.tick(), Fired { rendered: true, saved: false });
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(surface.last().as_deref(), Some("<p>h**ell**o</p>"));
        assert_eq!(session.next_deadline(), None);
    }

    #[test]
    fn test_selection_change_schedules_nothing() {
        let (mut session, _, _) = session("abc");
        session.set_selection(Selection::collapsed(2));
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn test_undo_at_boundary_has_no_effect() {
        let (mut session, _, surface) = session("abc");
        let renders = surface.count();
        assert!(!session.request_undo());
        assert!(!session.request_redo());
        assert_eq!(session.text(), "abc");
        assert_eq!(surface.count(), renders);
    }

    #[test]
    fn test_undo_cancels_pending_work_and_renders_immediately() {
        let (mut session, clock, surface) = session("a");
        session.replace_all("ab", 2);
        clock.advance(200.0);
        session.tick();

        session.replace_all("abc", 3);
        assert!(session.request_undo());

        assert_eq!(session.text(), "a");
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(surface.last().as_deref(), Some("<p>a</p>"));

        clock.advance(1000.0);
        assert!(!session.tick().any());
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_apply_commands() {
        let (mut session, _, _) = session("foo\nbar");
        session.set_selection(Selection::collapsed(5));
        assert!(session.apply(EditorCommand::List));
        assert_eq!(session.text(), "foo\n- bar");

        session.set_selection(Selection::new(6, 9));
        assert!(session.apply(EditorCommand::Bold));
        assert_eq!(session.text(), "foo\n- **bar**");
        assert_eq!(session.cursor(), 11);
    }

    #[test]
    fn test_input_keeps_selection() {
        let (mut session, _, _) = session("");
        session.input("typed", Selection::new(1, 3));
        assert_eq!(session.text(), "typed");
        assert_eq!(session.selection(), Selection::new(1, 3));
        assert!(matches!(session.state(), SessionState::Pending { .. }));
    }
}

//! The interactive terminal host: one single-threaded loop that feeds
//! input to the navigation controller and form, plays out scroll
//! effects (including the deferred corrective scroll), runs the
//! viewport observer, and redraws.

use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lenslight_core::form::{ContactForm, NotificationSink, SinkConfig, SinkError, Submission};
use lenslight_core::layout::DocumentLayout;
use lenslight_core::model::{SectionRegistry, Site};
use lenslight_core::nav::{DocumentScroll, NavController, ObserverConfig, ViewportObserver};
use lenslight_core::views;
use lenslight_protocol::{
    DeferredTask, NAV_HEIGHT, NavEffect, Point, ScrollCommand, Viewport,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect as CellRect,
    style::{Color, Style},
    widgets::Block,
};

use crate::renderer::{self, HitRegion, PX_PER_COL, PX_PER_ROW};

/// Keyboard/wheel scroll step, three rows' worth of pixels.
const SCROLL_STEP: f64 = 3.0 * PX_PER_ROW;
/// Fraction of the remaining distance covered per animation tick.
const SCROLL_EASE: f64 = 0.25;
/// Simulated delivery latency for the contact form sink.
const SEND_LATENCY_MS: u64 = 400;

const FIELD_LABELS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Email Address",
    "Service Interest",
    "Your Message",
];

/// Local stand-in for the delivery service: accepts anything with a
/// plausible email address.
struct StubSink;

impl NotificationSink for StubSink {
    fn send(&mut self, _: &SinkConfig, submission: &Submission) -> Result<(), SinkError> {
        if submission.email.contains('@') {
            Ok(())
        } else {
            Err(SinkError::Rejected("invalid email address".into()))
        }
    }
}

pub fn run(site: Site) -> Result<()> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, site);

    // Restore the terminal on every exit path before surfacing errors.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, site: Site) -> Result<()> {
    let mut app = App::new(site);

    loop {
        let size = terminal.size()?;
        app.sync_viewport(
            f64::from(size.width) * PX_PER_COL,
            f64::from(size.height.saturating_sub(1)) * PX_PER_ROW,
        );
        app.tick();
        terminal.draw(|frame| app.draw(frame))?;

        if event::poll(Duration::from_millis(16))? && app.handle_event(event::read()?) {
            return Ok(());
        }
    }
}

struct App {
    site: Site,
    document: DocumentScroll,
    controller: NavController,
    observer: ViewportObserver,
    form: ContactForm,
    sink: StubSink,
    sink_config: SinkConfig,
    layout: DocumentLayout,
    viewport: Viewport,
    /// Offset a smooth scroll is easing toward.
    scroll_target: Option<f64>,
    /// Fire-and-forget timers; every entry fires, none are cancelled.
    deferred: Vec<(Instant, DeferredTask)>,
    /// An in-flight form send, completed once its deadline passes.
    pending_send: Option<(Instant, Submission)>,
    /// Form field receiving keystrokes, if any.
    focus: Option<usize>,
    hits: Vec<HitRegion>,
}

impl App {
    fn new(site: Site) -> Self {
        let document = DocumentScroll::new();
        let controller = NavController::new(SectionRegistry::builtin(), document.clone());
        let viewport = Viewport::new(0.0, 1024.0, 768.0);
        let layout = DocumentLayout::compute(&site, &viewport);
        Self {
            site,
            document,
            controller,
            observer: ViewportObserver::new(ObserverConfig::default()),
            form: ContactForm::new(),
            sink: StubSink,
            sink_config: SinkConfig {
                service_id: "local".into(),
                template_id: "contact".into(),
                public_key: "stub".into(),
            },
            layout,
            viewport,
            scroll_target: None,
            deferred: Vec::new(),
            pending_send: None,
            focus: None,
            hits: Vec::new(),
        }
    }

    /// Adopt the terminal's current size, recomputing layout and
    /// notifying the controller when the width changes.
    fn sync_viewport(&mut self, width: f64, height: f64) {
        if width == self.viewport.width && height == self.viewport.height {
            return;
        }
        let width_changed = width != self.viewport.width;
        self.viewport.width = width;
        self.viewport.height = height;
        self.layout = DocumentLayout::compute(&self.site, &self.viewport);
        self.viewport.scroll_y = self
            .viewport
            .scroll_y
            .min(self.layout.max_scroll(self.viewport.height));
        if width_changed {
            self.controller.handle_resize(width);
        }
    }

    /// One frame's worth of time-driven work: ease the scroll, fire due
    /// timers, complete the in-flight send, run the observer.
    fn tick(&mut self) {
        if let Some(target) = self.scroll_target {
            let delta = target - self.viewport.scroll_y;
            if delta.abs() <= PX_PER_ROW / 2.0 {
                self.viewport.scroll_y = target;
                self.scroll_target = None;
            } else {
                self.viewport.scroll_y += delta * SCROLL_EASE;
            }
        }

        let now = Instant::now();
        let due: Vec<DeferredTask> = {
            let mut fired = Vec::new();
            self.deferred.retain(|(deadline, task)| {
                if *deadline <= now {
                    fired.push(task.clone());
                    false
                } else {
                    true
                }
            });
            fired
        };
        for task in due {
            match task {
                DeferredTask::CorrectiveScroll { section } => {
                    // The absolute offset is resolved against the layout
                    // now, not at issue time.
                    let top = self
                        .layout
                        .extent_of(&section)
                        .map(|e| e.top - NAV_HEIGHT);
                    if let Some(top) = top {
                        self.apply_scroll(ScrollCommand::ToOffset { top, smooth: true });
                    }
                }
            }
        }

        let send_due = self
            .pending_send
            .as_ref()
            .is_some_and(|(deadline, _)| *deadline <= now);
        if send_due && let Some((_, submission)) = self.pending_send.take() {
            let outcome = self.sink.send(&self.sink_config, &submission);
            self.form.complete_submit(outcome);
        }

        let extents = self.layout.nav_extents(self.controller.registry());
        if let Some(batch) = self.observer.observe(&extents, &self.viewport) {
            self.controller.handle_observations(&batch);
        }
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let commands = views::render_page(
            &self.site,
            &self.layout,
            &self.viewport,
            &self.controller,
            &self.form,
        );
        self.hits = renderer::draw_commands(frame, &commands);

        let area = frame.area();
        if area.height == 0 {
            return;
        }
        let hint = match self.focus {
            Some(i) => format!(
                " editing {} — type to fill | tab next field | enter send | esc done ",
                FIELD_LABELS[i.min(FIELD_LABELS.len() - 1)]
            ),
            None => {
                " lenslight — 1-5 jump to section | m menu | ↑/↓ scroll | tab form | q quit "
                    .to_string()
            }
        };
        let footer = Block::default()
            .title(hint)
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        frame.render_widget(
            footer,
            CellRect::new(0, area.height - 1, area.width, 1),
        );
    }

    /// Returns `true` when the app should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key.code),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, code: KeyCode) -> bool {
        if let Some(field) = self.focus {
            match code {
                KeyCode::Esc => self.focus = None,
                KeyCode::Tab => self.focus = Some((field + 1) % FIELD_LABELS.len()),
                KeyCode::Enter => self.submit(),
                KeyCode::Backspace => {
                    let _ = self.field_mut(field).pop();
                }
                KeyCode::Char(c) => self.field_mut(field).push(c),
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                if self.controller.is_menu_expanded() {
                    self.controller.backdrop_pressed();
                } else {
                    return true;
                }
            }
            KeyCode::Char('m') => self.controller.toggle_menu(),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                let id = self
                    .controller
                    .registry()
                    .iter()
                    .nth(index)
                    .map(|s| s.id.to_string());
                if let Some(id) = id {
                    self.navigate(&id);
                }
            }
            KeyCode::Tab => {
                self.navigate("contact");
                self.focus = Some(0);
            }
            KeyCode::Up => self.scroll_by(-SCROLL_STEP),
            KeyCode::Down => self.scroll_by(SCROLL_STEP),
            KeyCode::PageUp => self.scroll_by(-self.viewport.height),
            KeyCode::PageDown => self.scroll_by(self.viewport.height),
            KeyCode::Home => self.scroll_to(0.0),
            KeyCode::End => self.scroll_to(self.layout.max_scroll(self.viewport.height)),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-SCROLL_STEP),
            MouseEventKind::ScrollDown => self.scroll_by(SCROLL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                let point = Point::new(
                    f64::from(mouse.column) * PX_PER_COL + PX_PER_COL / 2.0,
                    f64::from(mouse.row) * PX_PER_ROW + PX_PER_ROW / 2.0,
                );
                // Last drawn wins: overlays sit above what they cover.
                let id = self
                    .hits
                    .iter()
                    .rev()
                    .find(|h| h.rect.contains(point))
                    .map(|h| h.id.to_string());
                if let Some(id) = id {
                    self.press(&id);
                }
            }
            _ => {}
        }
    }

    /// Dispatch a click by its hit identifier.
    fn press(&mut self, id: &str) {
        match id {
            "nav:menu-toggle" => self.controller.toggle_menu(),
            "nav:backdrop" => self.controller.backdrop_pressed(),
            "form:submit" => self.submit(),
            _ => {
                if let Some(section) = id.strip_prefix("nav:").or_else(|| id.strip_prefix("cta:")) {
                    let section = section.to_string();
                    self.navigate(&section);
                }
            }
        }
    }

    fn navigate(&mut self, id: &str) {
        let effects = self.controller.navigate_to(id);
        for effect in effects {
            match effect {
                NavEffect::Scroll(cmd) => self.apply_scroll(cmd),
                NavEffect::Defer { delay_ms, task } => self
                    .deferred
                    .push((Instant::now() + Duration::from_millis(delay_ms), task)),
            }
        }
    }

    fn apply_scroll(&mut self, cmd: ScrollCommand) {
        let max = self.layout.max_scroll(self.viewport.height);
        let target = match cmd {
            ScrollCommand::IntoView { section, .. } => self
                .layout
                .extent_of(&section)
                .map(|e| (e.top - NAV_HEIGHT).clamp(0.0, max)),
            ScrollCommand::ToOffset { top, .. } => Some(top.clamp(0.0, max)),
        };
        if let Some(target) = target {
            self.scroll_target = Some(target);
        }
    }

    /// Manual scrolling; suppressed while the expanded menu holds the
    /// document's scroll lock.
    fn scroll_by(&mut self, delta: f64) {
        if self.document.is_locked() {
            return;
        }
        self.scroll_to(self.viewport.scroll_y + delta);
    }

    fn scroll_to(&mut self, offset: f64) {
        if self.document.is_locked() {
            return;
        }
        self.scroll_target = None;
        let max = self.layout.max_scroll(self.viewport.height);
        self.viewport.scroll_y = offset.clamp(0.0, max);
    }

    fn submit(&mut self) {
        if let Some(submission) = self.form.begin_submit() {
            self.pending_send = Some((
                Instant::now() + Duration::from_millis(SEND_LATENCY_MS),
                submission,
            ));
        }
    }

    fn field_mut(&mut self, index: usize) -> &mut String {
        match index {
            0 => &mut self.form.fields.first_name,
            1 => &mut self.form.fields.last_name,
            2 => &mut self.form.fields.email,
            3 => &mut self.form.fields.service,
            _ => &mut self.form.fields.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_corrective_scroll_resolves_an_absolute_offset() {
        let mut app = App::new(Site::builtin());
        app.deferred.push((
            Instant::now(),
            DeferredTask::CorrectiveScroll {
                section: "services".into(),
            },
        ));
        app.tick();
        let expected = app
            .layout
            .extent_of("services")
            .map(|e| e.top - NAV_HEIGHT);
        assert!(expected.is_some());
        assert_eq!(app.scroll_target, expected);
        assert!(app.deferred.is_empty());
    }

    #[test]
    fn corrective_scroll_for_an_unmounted_section_is_dropped() {
        let mut app = App::new(Site::builtin());
        app.deferred.push((
            Instant::now(),
            DeferredTask::CorrectiveScroll {
                section: "blog".into(),
            },
        ));
        app.tick();
        assert_eq!(app.scroll_target, None);
        assert!(app.deferred.is_empty());
    }

    #[test]
    fn navigation_queues_the_deferred_correction() {
        let mut app = App::new(Site::builtin());
        app.navigate("about");
        assert!(app.scroll_target.is_some());
        assert_eq!(app.deferred.len(), 1);
    }
}

//! TUI effects boundary: event loop, terminal lifecycle, input mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and interprets the effects the reducer asks for against the viewport
//! and the animator.
//!
//! Architecture: one reader thread forwards crossterm events over an
//! mpsc channel. The loop blocks on the channel while nothing moves and
//! polls at frame rate while a smooth scroll or a transition runs.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use chrono::Datelike;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use log::{debug, info, warn};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};

use crate::anim::{Animator, Element, Pose};
use crate::config::Config;
use crate::document::Document;
use crate::types::{Portfolio, SectionId};
use crate::viewport::{DocumentViewport, ScrollEdge, Viewport};

use super::layout::{self, Hit};
use super::state::{Action, App, AppEvent, Effect, LinkTarget, NavigationState, Transition};
use super::update::{update, UpdateContext};
use super::view::{render, Scene};

/// Poll interval while something is moving.
const FRAME: Duration = Duration::from_millis(16);

/// Menu and overlay enter/exit.
pub const MENU_TRANSITION_MS: u64 = 300;
/// Menu rows still rolled up when the menu starts entering.
const MENU_SLIDE_ROWS: f32 = -6.0;
/// Fade-in of a content block when it first scrolls into view.
pub const REVEAL_MS: u64 = 600;

/// Opens a URL outside the terminal.
pub type Opener = Box<dyn FnMut(&str) -> io::Result<()>>;

// ============================================================================
// INPUT MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Sections
        KeyCode::Char(c @ '1'..='6') => {
            SectionId::nth((c as u8 - b'1') as usize).map(Action::SelectSection)
        }
        KeyCode::Tab => Some(Action::NextSection),
        KeyCode::BackTab => Some(Action::PrevSection),

        // Scrolling
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ScrollLines(1)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::ScrollLines(-1)),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(Action::ScrollPages(1)),
        KeyCode::PageUp => Some(Action::ScrollPages(-1)),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::ScrollEdge(ScrollEdge::Top)),
        KeyCode::End | KeyCode::Char('G') => Some(Action::ScrollEdge(ScrollEdge::Bottom)),

        // Menu
        KeyCode::Char('m') => Some(Action::ToggleMenu),
        KeyCode::Esc => Some(Action::DismissOverlay),

        // Hero buttons
        KeyCode::Char('p') => Some(Action::FollowAnchor(SectionId::Projects.as_str())),
        KeyCode::Char('c') => Some(Action::FollowAnchor(SectionId::Contact.as_str())),

        // Links
        KeyCode::Char('e') => Some(Action::OpenLink(LinkTarget::Email)),
        KeyCode::Char('h') => Some(Action::OpenLink(LinkTarget::GitHub)),
        KeyCode::Char('l') => Some(Action::OpenLink(LinkTarget::LinkedIn)),
        KeyCode::Char('r') => Some(Action::OpenLink(LinkTarget::ProjectRepo)),

        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

/// Map a mouse event to an Action, hit-testing clicks against `layout`.
pub fn map_mouse(mouse: MouseEvent, layout: &layout::PageLayout, menu_open: bool) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::ScrollLines(1)),
        MouseEventKind::ScrollUp => Some(Action::ScrollLines(-1)),
        MouseEventKind::Down(MouseButton::Left) => {
            match layout::hit_test(layout, mouse.column, mouse.row, menu_open)? {
                Hit::NavEntry(id) | Hit::MenuItem(id) => Some(Action::SelectSection(id)),
                Hit::MenuButton => Some(Action::ToggleMenu),
                Hit::Overlay => Some(Action::DismissOverlay),
            }
        }
        _ => None,
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// The running viewer: app state plus the collaborators it drives.
///
/// Owns the only mutable copies of the navigation state, the viewport
/// and the animator. Every change goes through [`Session::dispatch`].
pub struct Session {
    app: App,
    document: Document,
    viewport: DocumentViewport,
    animator: Animator,
    area: Rect,
    breakpoint: u16,
    scroll_step: i32,
    year: i32,
    opener: Opener,
}

impl Session {
    pub fn new(
        portfolio: Portfolio,
        config: &Config,
        width: u16,
        height: u16,
        year: i32,
        opener: Opener,
    ) -> Self {
        let narrow = layout::is_narrow(width, config.mobile_breakpoint);
        let mut session = Session {
            app: App::new(portfolio, narrow),
            document: Document::default(),
            viewport: DocumentViewport::new(config.smooth_scroll_ms),
            animator: Animator::new(config.animations),
            area: Rect::new(0, 0, width, height),
            breakpoint: config.mobile_breakpoint,
            scroll_step: i32::from(config.scroll_step),
            year,
            opener,
        };
        session.relayout();
        session
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn viewport(&self) -> &DocumentViewport {
        &self.viewport
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Whether the loop should keep drawing without waiting for input.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.viewport.is_scrolling() || self.animator.is_animating(now_ms)
    }

    /// Draw one frame.
    pub fn render(&self, frame: &mut Frame, now_ms: u64) {
        let scene = Scene {
            document: &self.document,
            viewport: &self.viewport,
            animator: &self.animator,
            now_ms,
        };
        render(&self.app, &scene, frame);
    }

    /// Route a terminal event.
    pub fn handle_event(&mut self, event: AppEvent, now_ms: u64) {
        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    self.dispatch(action, now_ms);
                }
            }
            AppEvent::Mouse(mouse) => {
                let page = layout::compute(self.area, self.app.narrow);
                if let Some(action) = map_mouse(mouse, &page, self.app.nav.is_menu_open()) {
                    self.dispatch(action, now_ms);
                }
            }
            AppEvent::Resize(width, height) => self.resize(width, height, now_ms),
        }
    }

    /// Run `action` through the reducer and carry out its effect.
    pub fn dispatch(&mut self, action: Action, now_ms: u64) {
        let before = self.app.nav;
        let ctx = UpdateContext {
            portfolio: &self.app.portfolio,
            narrow: self.app.narrow,
        };

        match update(before, &action, &ctx) {
            Transition::State(nav) => self.app.nav = nav,
            Transition::Effect(nav, effect) => {
                self.app.nav = nav;
                self.run_effect(effect, now_ms);
            }
            Transition::Quit => {
                info!("event=quit");
                self.app.should_quit = true;
            }
        }

        self.log_change(&action, before);
        self.sync_menu(before, now_ms);
        self.follow_viewport(now_ms);
    }

    /// Advance smooth scrolling and transitions to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        self.viewport.tick(now_ms);
        self.follow_viewport(now_ms);
        self.animator.prune(now_ms);
    }

    /// The terminal changed size: lay out again and re-evaluate the
    /// breakpoint.
    pub fn resize(&mut self, width: u16, height: u16, now_ms: u64) {
        self.area = Rect::new(0, 0, width, height);
        let narrow = layout::is_narrow(width, self.breakpoint);
        if narrow != self.app.narrow {
            debug!("event=layout_changed narrow={narrow} width={width}");
        }
        self.app.narrow = narrow;
        self.relayout();
        self.dispatch(Action::Resized { narrow }, now_ms);
    }

    fn relayout(&mut self) {
        self.document = Document::build(&self.app.portfolio, self.area.width, self.year);
        let body = layout::compute(self.area, self.app.narrow).body;
        self.viewport.set_page_height(body.height);
        self.viewport.set_document(&self.document);
    }

    fn run_effect(&mut self, effect: Effect, now_ms: u64) {
        match effect {
            Effect::ScrollIntoView(id) => self.viewport.scroll_into_view(id, now_ms),
            Effect::ScrollLines(n) => self.viewport.scroll_by(n.saturating_mul(self.scroll_step)),
            Effect::ScrollPages(n) => self.viewport.scroll_pages(n),
            Effect::ScrollEdge(edge) => self.viewport.scroll_edge(edge),
            Effect::OpenUrl(url) => match (self.opener)(&url) {
                Ok(()) => info!("event=link_opened url={url}"),
                Err(e) => warn!("event=link_open_failed url={url} error={e}"),
            },
        }
    }

    /// Mirror the viewport offset into the state, and start reveals for
    /// blocks that just scrolled in.
    fn follow_viewport(&mut self, now_ms: u64) {
        let y = self.viewport.scroll_y();
        if y != self.app.nav.scroll_offset_y {
            self.dispatch(Action::Scrolled(y), now_ms);
        }
        for index in self.viewport.update_reveal() {
            if let Some(block) = self.document.blocks().get(index) {
                debug!("event=block_revealed anchor={}", block.anchor);
            }
            self.animator
                .animate_enter(Element::Block(index), Pose::HIDDEN, Pose::SHOWN, REVEAL_MS, now_ms);
        }
    }

    /// Start menu and overlay transitions when the menu changed state.
    fn sync_menu(&mut self, before: NavigationState, now_ms: u64) {
        let after = self.app.nav;
        if before.menu == after.menu {
            return;
        }
        let slid = Pose::faded(MENU_SLIDE_ROWS);
        let overlay_now = self.current_pose(Element::Overlay, now_ms);
        let menu_now = self.current_pose(Element::MobileMenu, now_ms);

        if after.is_menu_open() {
            self.animator.animate_enter(
                Element::Overlay,
                overlay_now.unwrap_or(Pose::HIDDEN),
                Pose::SHOWN,
                MENU_TRANSITION_MS,
                now_ms,
            );
            self.animator.animate_enter(
                Element::MobileMenu,
                menu_now.unwrap_or(slid),
                Pose::SHOWN,
                MENU_TRANSITION_MS,
                now_ms,
            );
        } else {
            self.animator.animate_exit(
                Element::Overlay,
                overlay_now.unwrap_or(Pose::SHOWN),
                Pose::HIDDEN,
                MENU_TRANSITION_MS,
                now_ms,
            );
            self.animator.animate_exit(
                Element::MobileMenu,
                menu_now.unwrap_or(Pose::SHOWN),
                slid,
                MENU_TRANSITION_MS,
                now_ms,
            );
        }
    }

    fn current_pose(&self, element: Element, now_ms: u64) -> Option<Pose> {
        self.animator.pose(element, now_ms)
    }

    fn log_change(&self, action: &Action, before: NavigationState) {
        let after = self.app.nav;
        if matches!(
            action,
            Action::SelectSection(_) | Action::NextSection | Action::PrevSection
        ) {
            info!("event=section_selected id={}", after.active_section);
        }
        if before.menu != after.menu {
            debug!("event=menu_changed open={}", after.is_menu_open());
        }
        if before.header_variant() != after.header_variant() {
            debug!("event=header_changed variant={:?}", after.header_variant());
        }
    }
}

// ============================================================================
// PLATFORM
// ============================================================================

/// Open `url` with the desktop's default handler.
pub fn open_url(url: &str) -> io::Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        std::process::Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = std::process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else {
        std::process::Command::new("xdg-open")
    };
    command
        .arg(url)
        .stdin(std::process::Stdio::null())
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .map(|_| ())
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    io::stdout().execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    io::stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREAD
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key, mouse
/// and resize events to the channel.
fn spawn_event_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            let forwarded = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
                Ok(_) => continue, // releases, focus, paste
                Err(_) => break,
            };
            if tx.send(forwarded).is_err() {
                break; // receiver dropped, TUI is shutting down
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

fn elapsed_ms(clock: Instant) -> u64 {
    clock.elapsed().as_millis().min(u128::from(u64::MAX)) as u64
}

/// Run the interactive viewer until the user quits.
pub fn run(portfolio: Portfolio, config: &Config) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let size = terminal.size()?;
    let year = chrono::Local::now().year();

    let mut session = Session::new(
        portfolio,
        config,
        size.width,
        size.height,
        year,
        Box::new(open_url),
    );
    info!(
        "event=viewer_started width={} height={} narrow={}",
        size.width,
        size.height,
        session.app().narrow
    );

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_event_reader(tx);

    let clock = Instant::now();
    loop {
        let now = elapsed_ms(clock);
        session.tick(now);
        terminal.draw(|frame| session.render(frame, now))?;

        if session.app().should_quit {
            break;
        }

        // Block when idle; poll at frame rate while something moves.
        let event = if session.is_animating(now) {
            match rx.recv_timeout(FRAME) {
                Ok(e) => Some(e),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match rx.recv() {
                Ok(e) => Some(e),
                Err(_) => break, // reader thread gone
            }
        };

        if let Some(event) = event {
            session.handle_event(event, elapsed_ms(clock));
        }
    }

    restore_terminal()?;
    info!("event=viewer_stopped");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;
    use crate::tui::state::{HeaderVariant, MenuState};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn instant_config() -> Config {
        Config {
            smooth_scroll_ms: 0,
            ..Config::default()
        }
    }

    fn session(config: &Config, width: u16) -> Session {
        Session::new(builtin(), config, width, 30, 2026, Box::new(|_| Ok(())))
    }

    // -- key mapping --

    #[test]
    fn ctrl_c_maps_to_quit() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn plain_c_follows_contact_anchor() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::FollowAnchor("contact")));
    }

    #[test]
    fn number_keys_select_sections_in_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            let key = KeyEvent::new(KeyCode::Char((b'1' + i as u8) as char), KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::SelectSection(*id)));
        }
        let seven = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
        assert_eq!(map_key(seven), None);
    }

    #[test]
    fn vim_and_arrow_keys_scroll() {
        for (code, n) in [
            (KeyCode::Char('j'), 1),
            (KeyCode::Down, 1),
            (KeyCode::Char('k'), -1),
            (KeyCode::Up, -1),
        ] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            assert_eq!(map_key(key), Some(Action::ScrollLines(n)));
        }
    }

    #[test]
    fn tab_and_backtab_cycle() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(map_key(tab), Some(Action::NextSection));
        assert_eq!(map_key(back), Some(Action::PrevSection));
    }

    #[test]
    fn esc_dismisses_overlay() {
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(map_key(key), Some(Action::DismissOverlay));
    }

    #[test]
    fn unmapped_key_returns_none() {
        let key = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE);
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn wheel_scrolls() {
        let page = layout::compute(Rect::new(0, 0, 120, 30), false);
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(map_mouse(wheel, &page, false), Some(Action::ScrollLines(1)));
    }

    // -- session --

    #[test]
    fn number_key_selects_and_scrolls() {
        let config = instant_config();
        let mut s = session(&config, 120);
        s.handle_event(key('3'), 0);

        let app = s.app();
        assert_eq!(app.nav.active_section, SectionId::Skills);
        let target = s.document().anchor("skills").unwrap() as u16;
        assert_eq!(s.viewport().scroll_y(), target.min(s.viewport().max_offset()));
        assert_eq!(app.nav.scroll_offset_y, s.viewport().scroll_y());
    }

    #[test]
    fn smooth_scroll_is_mirrored_on_each_tick() {
        let config = Config::default();
        let mut s = session(&config, 120);
        s.handle_event(key('6'), 0);
        assert_eq!(s.app().nav.active_section, SectionId::Contact);
        assert_eq!(s.app().nav.scroll_offset_y, 0);
        assert!(s.is_animating(0));

        s.tick(200);
        let mid = s.app().nav.scroll_offset_y;
        assert!(mid > 0);
        assert_eq!(mid, s.viewport().scroll_y());

        s.tick(config.smooth_scroll_ms);
        assert!(!s.viewport().is_scrolling());
        assert_eq!(s.app().nav.scroll_offset_y, s.viewport().scroll_y());
        assert_eq!(s.app().nav.header_variant(), HeaderVariant::Scrolled);
    }

    #[test]
    fn hero_anchor_keeps_active_section() {
        let config = instant_config();
        let mut s = session(&config, 120);
        s.handle_event(key('2'), 0);
        s.handle_event(key('p'), 10);
        assert_eq!(s.app().nav.active_section, SectionId::Education);
        let projects = s.document().anchor("projects").unwrap() as u16;
        assert_eq!(s.viewport().scroll_y(), projects.min(s.viewport().max_offset()));
    }

    #[test]
    fn line_scroll_uses_step_and_flips_header() {
        let config = instant_config();
        let mut s = session(&config, 120);
        for _ in 0..3 {
            s.handle_event(key('j'), 0);
        }
        assert_eq!(s.app().nav.scroll_offset_y, 9);
        assert_eq!(s.app().nav.header_variant(), HeaderVariant::Top);

        s.handle_event(key('j'), 0);
        assert_eq!(s.app().nav.scroll_offset_y, 12);
        assert_eq!(s.app().nav.header_variant(), HeaderVariant::Scrolled);
    }

    #[test]
    fn menu_key_is_ignored_when_wide() {
        let config = instant_config();
        let mut s = session(&config, 120);
        s.handle_event(key('m'), 0);
        assert_eq!(s.app().nav.menu, MenuState::Closed);
    }

    #[test]
    fn hamburger_click_opens_menu_and_item_click_selects() {
        let config = instant_config();
        let mut s = session(&config, 60);
        let page = layout::compute(Rect::new(0, 0, 60, 30), true);
        let button = page.menu_button.unwrap();

        s.handle_event(click(button.x, button.y), 0);
        assert!(s.app().nav.is_menu_open());
        assert!(s.animator().is_present(Element::MobileMenu, 0));

        let (id, row) = page.menu_items[3];
        s.handle_event(click(row.x, row.y), 400);
        assert!(!s.app().nav.is_menu_open());
        assert_eq!(s.app().nav.active_section, id);
        assert!(!s.animator().is_present(Element::MobileMenu, 400 + MENU_TRANSITION_MS));
    }

    #[test]
    fn overlay_click_dismisses_menu() {
        let config = instant_config();
        let mut s = session(&config, 60);
        s.handle_event(key('m'), 0);
        assert!(s.app().nav.is_menu_open());

        s.handle_event(click(5, 25), 0);
        assert!(!s.app().nav.is_menu_open());
        assert_eq!(s.app().nav.active_section, SectionId::About);
    }

    #[test]
    fn resizing_wide_closes_menu() {
        let config = instant_config();
        let mut s = session(&config, 60);
        s.handle_event(key('m'), 0);
        assert!(s.app().nav.is_menu_open());

        s.handle_event(AppEvent::Resize(140, 30), 0);
        assert!(!s.app().narrow);
        assert!(!s.app().nav.is_menu_open());
    }

    #[test]
    fn link_keys_call_opener() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let config = instant_config();
        let mut s = Session::new(
            builtin(),
            &config,
            120,
            30,
            2026,
            Box::new(move |url| {
                sink.borrow_mut().push(url.to_string());
                Ok(())
            }),
        );

        s.handle_event(key('e'), 0);
        s.handle_event(key('r'), 0);
        let portfolio = builtin();
        assert_eq!(
            *opened.borrow(),
            vec![portfolio.contact.mailto(), portfolio.projects[0].repo_url.clone()]
        );
    }

    #[test]
    fn failing_opener_is_not_fatal() {
        let config = instant_config();
        let mut s = Session::new(
            builtin(),
            &config,
            120,
            30,
            2026,
            Box::new(|_| Err(io::Error::new(io::ErrorKind::NotFound, "no opener"))),
        );
        s.handle_event(key('h'), 0);
        assert!(!s.app().should_quit);
    }

    #[test]
    fn first_tick_reveals_visible_blocks() {
        let config = instant_config();
        let mut s = session(&config, 120);
        assert!(!s.viewport().has_entered(0));
        s.tick(0);
        assert!(s.viewport().has_entered(0));
        assert!(s.animator().is_animating(0));
        assert!(!s.animator().is_animating(REVEAL_MS));
    }

    #[test]
    fn quit_sets_flag() {
        let config = instant_config();
        let mut s = session(&config, 120);
        s.handle_event(key('q'), 0);
        assert!(s.app().should_quit);
    }
}

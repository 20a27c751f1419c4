//! End-to-end navigation: reducer, viewport and renderer together.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use folio::config::Config;
use folio::content::builtin;
use folio::tui::state::{AppEvent, HeaderVariant, MenuState};
use folio::tui::run::Session;
use folio::types::SectionId;
use folio::viewport::Viewport;

fn key(c: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn session(width: u16) -> Session {
    let config = Config {
        smooth_scroll_ms: 0,
        animations: false,
        ..Config::default()
    };
    Session::new(builtin(), &config, width, 30, 2026, Box::new(|_| Ok(())))
}

fn screen_text(session: &Session, width: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, 30)).unwrap();
    terminal.draw(|frame| session.render(frame, 0)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol().to_string())
        .collect()
}

#[test]
fn walking_every_section_keeps_one_active_and_menu_closed() {
    let mut s = session(120);
    for (i, id) in SectionId::ALL.iter().enumerate() {
        s.handle_event(key((b'1' + i as u8) as char), i as u64);
        let nav = s.app().nav;
        assert_eq!(nav.active_section, *id);
        assert_eq!(nav.menu, MenuState::Closed);
        assert_eq!(nav.scroll_offset_y, s.viewport().scroll_y());
    }
}

#[test]
fn scrolling_never_moves_the_active_indicator() {
    let mut s = session(120);
    s.handle_event(key('2'), 0);
    s.handle_event(key('G'), 1);
    assert_eq!(s.app().nav.active_section, SectionId::Education);
    assert_eq!(s.viewport().scroll_y(), s.viewport().max_offset());
    assert_eq!(s.app().nav.header_variant(), HeaderVariant::Scrolled);

    s.handle_event(key('g'), 2);
    assert_eq!(s.app().nav.scroll_offset_y, 0);
    assert_eq!(s.app().nav.header_variant(), HeaderVariant::Top);
    assert_eq!(s.app().nav.active_section, SectionId::Education);
}

#[test]
fn mobile_flow_open_select_close() {
    let mut s = session(60);
    assert!(s.app().narrow);

    s.handle_event(key('m'), 0);
    assert!(s.app().nav.is_menu_open());
    assert!(screen_text(&s, 60).contains("Certifications"));

    s.handle_event(key('5'), 1);
    assert!(!s.app().nav.is_menu_open());
    assert_eq!(s.app().nav.active_section, SectionId::Certifications);

    s.handle_event(key('m'), 2);
    s.handle_event(AppEvent::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), 3);
    assert!(!s.app().nav.is_menu_open());
    assert_eq!(s.app().nav.active_section, SectionId::Certifications);
}

#[test]
fn growing_past_breakpoint_swaps_layouts() {
    let mut s = session(60);
    s.handle_event(key('m'), 0);
    s.handle_event(AppEvent::Resize(120, 30), 1);
    assert!(!s.app().narrow);
    assert!(!s.app().nav.is_menu_open());

    let text = screen_text(&s, 120);
    for id in SectionId::ALL {
        assert!(text.contains(id.title()));
    }
}

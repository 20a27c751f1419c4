//! TUI state algebra: pure types, zero effects.
//!
//! The navigation state is three fields: the active section, whether
//! the mobile menu is open, and the mirrored scroll offset. Everything
//! else the screen shows is either static content or derived from these
//! at render time.
//!
//! Design principle: the active nav indicator is never stored. It is
//! recomputed from `active_section` on every render, so it cannot drift.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::types::{Portfolio, SectionId};
use crate::viewport::ScrollEdge;

/// Header switches to its scrolled variant past this many rows.
pub const SCROLLED_THRESHOLD: u16 = 10;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the reader thread.
    Key(KeyEvent),
    /// Click or wheel.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
}

// ============================================================================
// NAVIGATION STATE
// ============================================================================

/// Mobile menu state machine. `Closed` is initial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    fn flipped(self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Visual variant of the fixed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// At (or near) the top of the page.
    Top,
    /// Scrolled past [`SCROLLED_THRESHOLD`].
    Scrolled,
}

/// Interactive state of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Section whose nav entry is highlighted.
    pub active_section: SectionId,
    pub menu: MenuState,
    /// Mirror of the viewport's offset; written only from its readout.
    pub scroll_offset_y: u16,
}

impl Default for NavigationState {
    /// First declared section, closed menu, top of page.
    fn default() -> Self {
        NavigationState {
            active_section: SectionId::ALL[0],
            menu: MenuState::Closed,
            scroll_offset_y: 0,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the viewport's current offset.
    pub fn on_scroll(self, scroll_y: u16) -> Self {
        NavigationState {
            scroll_offset_y: scroll_y,
            ..self
        }
    }

    /// Make `id` active and close the menu, whatever its state. The
    /// scroll request that goes with this is issued by the reducer.
    pub fn select_section(self, id: SectionId) -> Self {
        NavigationState {
            active_section: id,
            menu: MenuState::Closed,
            ..self
        }
    }

    /// Flip the menu.
    pub fn toggle_menu(self) -> Self {
        NavigationState {
            menu: self.menu.flipped(),
            ..self
        }
    }

    /// Overlay click: close the menu if it is open.
    pub fn dismiss_overlay(self) -> Self {
        NavigationState {
            menu: MenuState::Closed,
            ..self
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu == MenuState::Open
    }

    /// Whether the nav entry for `id` is highlighted.
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active_section == id
    }

    pub fn header_variant(&self) -> HeaderVariant {
        if self.scroll_offset_y > SCROLLED_THRESHOLD {
            HeaderVariant::Scrolled
        } else {
            HeaderVariant::Top
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the page content and the navigation state. The effects layer
/// hands an immutable reference to the view on every frame.
#[derive(Debug)]
pub struct App {
    pub nav: NavigationState,

    pub portfolio: Portfolio,

    /// Terminal is below the mobile breakpoint: nav collapses into the
    /// hamburger menu.
    pub narrow: bool,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(portfolio: Portfolio, narrow: bool) -> Self {
        App {
            nav: NavigationState::new(),
            portfolio,
            narrow,
            should_quit: false,
        }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Links reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Email,
    GitHub,
    LinkedIn,
    /// Repository of the first project.
    ProjectRepo,
}

/// Semantic user action, decoupled from raw terminal events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The viewport moved; carries its new offset.
    Scrolled(u16),
    /// Nav entry or menu item chosen.
    SelectSection(SectionId),
    /// Select the section after the active one.
    NextSection,
    /// Select the section before the active one.
    PrevSection,
    /// Hamburger button.
    ToggleMenu,
    /// Click on the dimming overlay, or Esc.
    DismissOverlay,
    /// Terminal crossed (or stayed on one side of) the breakpoint.
    Resized { narrow: bool },
    /// In-page link to an anchor; does not touch the active section.
    FollowAnchor(&'static str),
    /// Scroll by this many steps (negative is up).
    ScrollLines(i32),
    /// Scroll by this many pages (negative is up).
    ScrollPages(i32),
    ScrollEdge(ScrollEdge),
    OpenLink(LinkTarget),
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to store and which side effects to execute.
/// Follows the Elm/TEA pattern: pure code describes WHAT should happen,
/// effectful code decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Store this state.
    State(NavigationState),
    /// Store this state, then execute the effect.
    Effect(NavigationState, Effect),
    /// Quit the application.
    Quit,
}

/// Side effect requested by a pure transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the viewport to bring this anchor into view.
    ScrollIntoView(&'static str),
    /// Scroll by `n * scroll_step` rows.
    ScrollLines(i32),
    ScrollPages(i32),
    ScrollEdge(ScrollEdge),
    /// Open a URL with the platform opener.
    OpenUrl(String),
}

// ============================================================================
// TESTS
// ============================================================================

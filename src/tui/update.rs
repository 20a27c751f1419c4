//! Pure state transitions: (NavigationState, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Actions that make no sense in the current layout return the state
//! unchanged (no-op).

use crate::types::{Portfolio, SectionId, HERO_ANCHOR};

use super::state::{Action, Effect, LinkTarget, NavigationState, Transition};

/// Read-only context the reducer needs besides the state itself.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext<'a> {
    pub portfolio: &'a Portfolio,
    /// Narrow layout: the hamburger button exists.
    pub narrow: bool,
}

/// Pure state transition function.
///
/// Given the current navigation state, an action, and the layout
/// context, produces the next transition. The effects boundary
/// interprets the result.
pub fn update(nav: NavigationState, action: &Action, ctx: &UpdateContext<'_>) -> Transition {
    match action {
        Action::Scrolled(y) => Transition::State(nav.on_scroll(*y)),

        Action::SelectSection(id) => select(nav, *id),
        Action::NextSection => select(nav, nav.active_section.next()),
        Action::PrevSection => select(nav, nav.active_section.prev()),

        // The button only exists in the narrow layout
        Action::ToggleMenu if ctx.narrow => Transition::State(nav.toggle_menu()),
        Action::ToggleMenu => Transition::State(nav),

        Action::DismissOverlay => Transition::State(nav.dismiss_overlay()),

        // Crossing into the wide layout hides the menu for good
        Action::Resized { narrow: false } => Transition::State(nav.dismiss_overlay()),
        Action::Resized { narrow: true } => Transition::State(nav),

        Action::FollowAnchor(anchor) => follow_anchor(nav, anchor),

        Action::ScrollLines(n) => Transition::Effect(nav, Effect::ScrollLines(*n)),
        Action::ScrollPages(n) => Transition::Effect(nav, Effect::ScrollPages(*n)),
        Action::ScrollEdge(edge) => Transition::Effect(nav, Effect::ScrollEdge(*edge)),

        Action::OpenLink(target) => match link_url(ctx.portfolio, *target) {
            Some(url) => Transition::Effect(nav, Effect::OpenUrl(url)),
            None => Transition::State(nav),
        },

        Action::Quit => Transition::Quit,
    }
}

// ============================================================================
// HANDLERS
// ============================================================================

/// Activate `id`, close the menu, and ask the viewport to scroll there.
fn select(nav: NavigationState, id: SectionId) -> Transition {
    Transition::Effect(nav.select_section(id), Effect::ScrollIntoView(id.as_str()))
}

/// In-page link: scrolls, but the active nav entry stays where it is.
fn follow_anchor(nav: NavigationState, anchor: &str) -> Transition {
    let target = SectionId::ALL
        .iter()
        .map(|id| id.as_str())
        .chain(std::iter::once(HERO_ANCHOR))
        .find(|known| *known == anchor);

    match target {
        Some(known) => Transition::Effect(nav, Effect::ScrollIntoView(known)),
        None => Transition::State(nav),
    }
}

/// URL behind a keyboard link shortcut. `None` when the content has no
/// such link (no projects).
fn link_url(portfolio: &Portfolio, target: LinkTarget) -> Option<String> {
    match target {
        LinkTarget::Email => Some(portfolio.contact.mailto()),
        LinkTarget::GitHub => Some(portfolio.contact.github_url.clone()),
        LinkTarget::LinkedIn => Some(portfolio.contact.linkedin_url.clone()),
        LinkTarget::ProjectRepo => portfolio.projects.first().map(|p| p.repo_url.clone()),
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Pure rendering: map App state to ratatui widget trees.
//!
//! `render()` draws the fixed header, the scrolled document body, the
//! dimming overlay and the mobile menu, in that order. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.
//!
//! The active nav entry is derived here from `NavigationState` on every
//! frame. Transitions only change how things look: an element with no
//! running animation is drawn in its resting pose.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::anim::{Animator, Element, Pose};
use crate::document::Document;
use crate::types::SECTIONS;
use crate::viewport::Viewport;

use super::layout::{self, PageLayout};
use super::state::{App, HeaderVariant};
use super::theme;

/// Everything besides the app state that a frame depends on.
pub struct Scene<'a> {
    pub document: &'a Document,
    pub viewport: &'a dyn Viewport,
    pub animator: &'a Animator,
    /// Milliseconds on the animation clock.
    pub now_ms: u64,
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render one frame.
pub fn render(app: &App, scene: &Scene<'_>, frame: &mut Frame) {
    let layout = layout::compute(frame.area(), app.narrow);

    render_body(scene, frame, layout.body);
    render_header(app, frame, &layout);

    if app.narrow {
        let open = app.nav.is_menu_open();
        if let Some(pose) = resting_or_animated(scene, Element::Overlay, open) {
            if pose.opacity > 0.0 {
                frame.buffer_mut().set_style(layout.body, theme::STYLE_OVERLAY);
            }
        }
        if let Some(pose) = resting_or_animated(scene, Element::MobileMenu, open) {
            render_menu(app, pose, frame, &layout);
        }
    }

    frame.render_widget(render_help(app), layout.help);
}

/// Pose from the animator, or the resting pose of an element that
/// should be showing but has no track.
fn resting_or_animated(scene: &Scene<'_>, element: Element, showing: bool) -> Option<Pose> {
    scene
        .animator
        .pose(element, scene.now_ms)
        .or(showing.then_some(Pose::SHOWN))
}

// ============================================================================
// HEADER
// ============================================================================

fn render_header(app: &App, frame: &mut Frame, layout: &PageLayout) {
    let variant = app.nav.header_variant();
    let mut header = Block::new().style(theme::header_style(variant));
    if variant == HeaderVariant::Scrolled {
        header = header
            .borders(Borders::BOTTOM)
            .border_style(theme::STYLE_HEADER_RULE);
    }
    frame.render_widget(header, layout.header);

    let logo = Paragraph::new(Span::styled(app.portfolio.brand.clone(), theme::STYLE_LOGO));
    frame.render_widget(logo, layout.logo);

    for (id, rect) in &layout.nav_entries {
        let style = if app.nav.is_active(*id) {
            theme::STYLE_NAV_ACTIVE
        } else {
            theme::STYLE_NAV
        };
        frame.render_widget(Paragraph::new(Span::styled(id.title(), style)), *rect);
    }

    if let Some(button) = layout.menu_button {
        let icon = if app.nav.is_menu_open() {
            theme::ICON_MENU_OPEN
        } else {
            theme::ICON_MENU_CLOSED
        };
        let widget = Paragraph::new(Span::styled(icon, theme::STYLE_MENU_BUTTON))
            .alignment(Alignment::Center);
        frame.render_widget(widget, button);
    }
}

// ============================================================================
// BODY
// ============================================================================

fn render_body(scene: &Scene<'_>, frame: &mut Frame, area: Rect) {
    let document = scene.document;
    let top = scene.viewport.scroll_y() as usize;

    let lines: Vec<Line<'static>> = document
        .lines()
        .iter()
        .enumerate()
        .skip(top)
        .take(area.height as usize)
        .map(|(index, line)| {
            if is_fading(scene, index) {
                line.clone().patch_style(theme::STYLE_FADING)
            } else {
                line.clone()
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// A line is faded while its block has not entered the viewport or is
/// still running its reveal.
fn is_fading(scene: &Scene<'_>, line: usize) -> bool {
    let Some(block) = scene.document.block_at(line) else {
        return false;
    };
    if !scene.viewport.has_entered(block) {
        return true;
    }
    scene
        .animator
        .pose(Element::Block(block), scene.now_ms)
        .is_some_and(|pose| pose.opacity < 1.0)
}

// ============================================================================
// MOBILE MENU
// ============================================================================

fn render_menu(app: &App, pose: Pose, frame: &mut Frame, layout: &PageLayout) {
    let Some(panel) = layout.menu else {
        return;
    };

    // Slide down: the panel hangs from the header and unrolls by the
    // pose offset. Both borders stay drawn.
    let rolled_up = (-pose.offset_y).max(0.0).round() as u16;
    let height = panel
        .height
        .saturating_sub(rolled_up)
        .max(panel.height.min(2));
    let area = Rect { height, ..panel };
    if area.is_empty() {
        return;
    }

    let inner_width = panel.width.saturating_sub(2) as usize;
    let items: Vec<Line<'static>> = SECTIONS
        .iter()
        .map(|section| {
            let style = if app.nav.is_active(section.id) {
                theme::STYLE_MENU_ACTIVE
            } else {
                theme::STYLE_MENU
            };
            let label = format!(" {}", section.title);
            Line::from(Span::styled(format!("{label:<inner_width$}"), style))
        })
        .collect();

    let block = Block::bordered()
        .border_style(theme::STYLE_MENU_BORDER)
        .style(theme::STYLE_MENU);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(items).block(block), area);

    if pose.opacity < 0.5 {
        frame
            .buffer_mut()
            .set_style(area, Style::new().add_modifier(Modifier::DIM));
    }
}

// ============================================================================
// HELP LINE
// ============================================================================

fn render_help(app: &App) -> Paragraph<'static> {
    let help_text = if app.nav.is_menu_open() {
        "[1-6] select  [m/Esc] close menu  [q] quit"
    } else if app.narrow {
        "[m] menu  [1-6] section  [j/k] scroll  [p/c] projects/contact  [q] quit"
    } else {
        "[1-6] section  [Tab] next  [j/k] scroll  [g/G] top/bottom  [p/c] projects/contact  [e/h/l/r] links  [q] quit"
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// TESTS
// ============================================================================

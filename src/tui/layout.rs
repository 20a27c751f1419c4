//! Screen geometry: where the header, nav, menu and body sit.
//!
//! Shared by the view (to draw) and the effects layer (to hit-test
//! mouse clicks), so a click always lands on what was drawn.

use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::types::{SectionId, SECTIONS};

/// Rows taken by the fixed header.
pub const HEADER_HEIGHT: u16 = 3;
/// Horizontal padding inside the header.
pub const HEADER_MARGIN: u16 = 2;
/// Columns between desktop nav entries.
pub const NAV_GAP: u16 = 3;
/// Width of the hamburger button.
pub const MENU_BUTTON_WIDTH: u16 = 3;

/// True when the terminal is below the mobile breakpoint.
pub fn is_narrow(width: u16, breakpoint: u16) -> bool {
    width < breakpoint
}

/// Computed regions for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    /// Row inside the header that carries the logo and nav.
    pub logo: Rect,
    /// Desktop nav entries, in section order. Empty when narrow.
    pub nav_entries: Vec<(SectionId, Rect)>,
    /// Hamburger button. `None` when wide.
    pub menu_button: Option<Rect>,
    /// Mobile menu panel, border included. `None` when wide.
    pub menu: Option<Rect>,
    /// One row per section inside the menu panel.
    pub menu_items: Vec<(SectionId, Rect)>,
    pub body: Rect,
    pub help: Rect,
}

/// Lay out a frame of `area` in the narrow or wide variant.
pub fn compute(area: Rect, narrow: bool) -> PageLayout {
    let header_height = HEADER_HEIGHT.min(area.height);
    let header = Rect::new(area.x, area.y, area.width, header_height);
    let bar_y = area.y + header_height.min(1);
    let inner_x = area.x + HEADER_MARGIN.min(area.width);
    let inner_right = area.right().saturating_sub(HEADER_MARGIN).max(inner_x);

    let help_height = u16::from(area.height > header_height);
    let help = Rect::new(area.x, area.bottom().saturating_sub(help_height), area.width, help_height);
    let body = Rect::new(
        area.x,
        area.y + header_height,
        area.width,
        area.height.saturating_sub(header_height + help_height),
    );

    let mut layout = PageLayout {
        header,
        logo: Rect::new(inner_x, bar_y, inner_right - inner_x, header_height.min(1)),
        nav_entries: Vec::new(),
        menu_button: None,
        menu: None,
        menu_items: Vec::new(),
        body,
        help,
    };

    if narrow {
        let button_x = inner_right.saturating_sub(MENU_BUTTON_WIDTH).max(inner_x);
        layout.menu_button = Some(Rect::new(
            button_x,
            bar_y,
            inner_right - button_x,
            header_height.min(1),
        ));

        let panel_height = (SECTIONS.len() as u16 + 2).min(body.height);
        let panel = Rect::new(
            area.x + 1u16.min(area.width),
            body.y,
            area.width.saturating_sub(2),
            panel_height,
        );
        layout.menu = Some(panel);
        let rows = panel_height.saturating_sub(2);
        layout.menu_items = SECTIONS
            .iter()
            .take(rows as usize)
            .enumerate()
            .map(|(i, section)| {
                let row = Rect::new(
                    panel.x + 1,
                    panel.y + 1 + i as u16,
                    panel.width.saturating_sub(2),
                    1,
                );
                (section.id, row)
            })
            .collect();
    } else {
        let total: u16 = SECTIONS
            .iter()
            .map(|s| s.title.width() as u16)
            .sum::<u16>()
            + NAV_GAP * (SECTIONS.len() as u16 - 1);
        let mut x = inner_right.saturating_sub(total).max(inner_x);
        for section in SECTIONS {
            let width = (section.title.width() as u16).min(inner_right.saturating_sub(x));
            layout
                .nav_entries
                .push((section.id, Rect::new(x, bar_y, width, header_height.min(1))));
            x = (x + width + NAV_GAP).min(inner_right);
        }
    }

    layout
}

// ============================================================================
// HIT TESTING
// ============================================================================

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    NavEntry(SectionId),
    MenuButton,
    MenuItem(SectionId),
    /// The dimmed area around the open menu.
    Overlay,
}

/// Resolve a click at (`column`, `row`).
pub fn hit_test(layout: &PageLayout, column: u16, row: u16, menu_open: bool) -> Option<Hit> {
    let at = Position::new(column, row);

    if let Some(button) = layout.menu_button {
        if button.contains(at) {
            return Some(Hit::MenuButton);
        }
    }

    if menu_open {
        if let Some(panel) = layout.menu {
            if panel.contains(at) {
                return layout
                    .menu_items
                    .iter()
                    .find(|(_, rect)| rect.contains(at))
                    .map(|(id, _)| Hit::MenuItem(*id));
            }
        }
        // The overlay sits under the header
        if layout.header.contains(at) {
            return None;
        }
        return Some(Hit::Overlay);
    }

    layout
        .nav_entries
        .iter()
        .find(|(_, rect)| rect.contains(at))
        .map(|(id, _)| Hit::NavEntry(*id))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_narrow(99, 100));
        assert!(!is_narrow(100, 100));
    }

    #[test]
    fn wide_layout_has_nav_and_no_button() {
        let layout = compute(Rect::new(0, 0, 120, 40), false);
        assert_eq!(layout.nav_entries.len(), SECTIONS.len());
        assert!(layout.menu_button.is_none());
        assert!(layout.menu.is_none());
        assert_eq!(layout.body, Rect::new(0, 3, 120, 36));
        assert_eq!(layout.help, Rect::new(0, 39, 120, 1));
    }

    #[test]
    fn nav_entries_are_ordered_and_disjoint() {
        let layout = compute(Rect::new(0, 0, 120, 40), false);
        for pair in layout.nav_entries.windows(2) {
            assert!(pair[0].1.right() < pair[1].1.x);
        }
        let last = layout.nav_entries.last().unwrap().1;
        assert_eq!(last.right(), 120 - HEADER_MARGIN);
    }

    #[test]
    fn narrow_layout_has_button_and_menu() {
        let layout = compute(Rect::new(0, 0, 60, 30), true);
        assert!(layout.nav_entries.is_empty());
        let button = layout.menu_button.unwrap();
        assert_eq!(button.right(), 60 - HEADER_MARGIN);
        assert_eq!(layout.menu_items.len(), SECTIONS.len());
        assert_eq!(layout.menu.unwrap().y, HEADER_HEIGHT);
    }

    #[test]
    fn clicking_nav_entry_hits_its_section() {
        let layout = compute(Rect::new(0, 0, 120, 40), false);
        let (id, rect) = layout.nav_entries[2];
        assert_eq!(hit_test(&layout, rect.x, rect.y, false), Some(Hit::NavEntry(id)));
        assert_eq!(hit_test(&layout, 0, 20, false), None);
    }

    #[test]
    fn clicks_with_open_menu() {
        let layout = compute(Rect::new(0, 0, 60, 30), true);
        let (id, row) = layout.menu_items[4];
        assert_eq!(hit_test(&layout, row.x + 1, row.y, true), Some(Hit::MenuItem(id)));

        let button = layout.menu_button.unwrap();
        assert_eq!(hit_test(&layout, button.x, button.y, true), Some(Hit::MenuButton));

        assert_eq!(hit_test(&layout, 5, 25, true), Some(Hit::Overlay));
        assert_eq!(hit_test(&layout, 2, 1, true), None, "logo is above the overlay");
    }

    #[test]
    fn closed_menu_items_are_not_clickable() {
        let layout = compute(Rect::new(0, 0, 60, 30), true);
        let (_, row) = layout.menu_items[0];
        assert_eq!(hit_test(&layout, row.x, row.y, false), None);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let layout = compute(Rect::new(0, 0, 4, 2), true);
        assert_eq!(layout.body.height, 0);
        let layout = compute(Rect::new(0, 0, 10, 5), false);
        assert!(layout.nav_entries.iter().all(|(_, r)| r.right() <= 10));
    }
}

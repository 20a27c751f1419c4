//! Styling table and icon glyphs.
//!
//! Pure data, consumed by the document builder and the view. Colors
//! follow the page's dark palette:
//! - Accent blue: active nav entry, highlights, bullets, tags
//! - Near-white: headings and body text
//! - Muted gray: subtitles, footer, metadata
//! - Card gray: card borders and chips

use ratatui::style::{Color, Modifier, Style};

use super::state::HeaderVariant;

// ============================================================================
// PALETTE
// ============================================================================

pub const ACCENT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe7, 0xeb);
pub const HEADING: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SUBTLE: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const BACKGROUND: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const SURFACE: Color = Color::Rgb(0x11, 0x18, 0x27);
pub const RAISED: Color = Color::Rgb(0x1f, 0x29, 0x37);
pub const BORDER: Color = Color::Rgb(0x37, 0x41, 0x51);
pub const BUTTON: Color = Color::Rgb(0x25, 0x63, 0xeb);

// ============================================================================
// ICONS
// ============================================================================

pub const ICON_ARROW_RIGHT: &str = "→";
pub const ICON_MAIL: &str = "✉";
pub const ICON_GITHUB: &str = "⌥";
pub const ICON_LINKEDIN: &str = "in";
pub const ICON_BULLET: &str = "▹";
pub const ICON_SECTION: &str = "•";
pub const ICON_MENU_CLOSED: &str = "≡";
pub const ICON_MENU_OPEN: &str = "✕";

// ============================================================================
// COMPONENT STYLES
// ============================================================================

/// Header at the top of the page.
pub const STYLE_HEADER: Style = Style::new().bg(BACKGROUND);

/// Header once the page has scrolled: raised background and a rule.
pub const STYLE_HEADER_SCROLLED: Style = Style::new().bg(Color::Rgb(0x0a, 0x0a, 0x0a));

/// Bottom rule of the scrolled header.
pub const STYLE_HEADER_RULE: Style = Style::new().fg(RAISED);

pub const STYLE_LOGO: Style = Style::new().fg(HEADING).add_modifier(Modifier::BOLD);

pub const STYLE_NAV: Style = Style::new().fg(TEXT);

/// Active desktop nav entry: accent, underlined.
pub const STYLE_NAV_ACTIVE: Style = Style::new()
    .fg(ACCENT)
    .add_modifier(Modifier::UNDERLINED);

pub const STYLE_MENU_BUTTON: Style = Style::new().fg(HEADING).add_modifier(Modifier::BOLD);

pub const STYLE_MENU: Style = Style::new().fg(TEXT).bg(SURFACE);

pub const STYLE_MENU_BORDER: Style = Style::new().fg(BORDER).bg(SURFACE);

/// Active mobile menu item: accent on a raised background.
pub const STYLE_MENU_ACTIVE: Style = Style::new().fg(ACCENT).bg(RAISED);

/// Dimming applied to the page under an open menu.
pub const STYLE_OVERLAY: Style = Style::new().fg(Color::DarkGray).add_modifier(Modifier::DIM);

pub const STYLE_TITLE: Style = Style::new().fg(HEADING).add_modifier(Modifier::BOLD);

pub const STYLE_HIGHLIGHT: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

pub const STYLE_SUBTITLE: Style = Style::new().fg(SUBTLE);

pub const STYLE_TEXT: Style = Style::new().fg(TEXT);

pub const STYLE_SECTION_MARK: Style = Style::new().fg(ACCENT);

pub const STYLE_BULLET: Style = Style::new().fg(ACCENT);

pub const STYLE_CARD_BORDER: Style = Style::new().fg(RAISED);

/// Pill-shaped tag (education badges, tech stack).
pub const STYLE_TAG: Style = Style::new().fg(ACCENT).bg(BORDER);

/// Soft-skill chip.
pub const STYLE_CHIP: Style = Style::new().fg(HEADING).bg(BORDER);

pub const STYLE_BUTTON_PRIMARY: Style = Style::new().fg(HEADING).bg(BUTTON);

pub const STYLE_BUTTON_SECONDARY: Style = Style::new().fg(HEADING);

/// Key hint inside a button label.
pub const STYLE_KEY: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

pub const STYLE_DIM: Style = Style::new().fg(MUTED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Content that is still fading in.
pub const STYLE_FADING: Style = Style::new().add_modifier(Modifier::DIM);

/// Header style for the given scroll variant.
pub fn header_style(variant: HeaderVariant) -> Style {
    match variant {
        HeaderVariant::Top => STYLE_HEADER,
        HeaderVariant::Scrolled => STYLE_HEADER_SCROLLED,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_styles_use_accent() {
        assert_eq!(STYLE_NAV_ACTIVE.fg, Some(ACCENT));
        assert_eq!(STYLE_MENU_ACTIVE.fg, Some(ACCENT));
        assert_ne!(STYLE_NAV.fg, Some(ACCENT));
    }

    #[test]
    fn active_nav_entry_is_underlined() {
        assert!(STYLE_NAV_ACTIVE.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn header_variants_differ() {
        assert_ne!(
            header_style(HeaderVariant::Top),
            header_style(HeaderVariant::Scrolled)
        );
    }

    #[test]
    fn title_style_is_bold() {
        assert!(STYLE_TITLE.add_modifier.contains(Modifier::BOLD));
    }
}

//! Non-interactive output of the page.
//!
//! Pure functions: (Portfolio, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::document::Document;
use crate::types::{OutputFormat, Portfolio, Section, SECTIONS};

/// Width used by `folio print` when none is given.
pub const DEFAULT_PRINT_WIDTH: u16 = 80;

/// JSON envelope: the fixed nav table alongside the content.
#[derive(Serialize)]
struct Export<'a> {
    sections: &'a [Section],
    content: &'a Portfolio,
}

/// Format the page for stdout.
pub fn format_portfolio(
    portfolio: &Portfolio,
    format: OutputFormat,
    width: u16,
    year: i32,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Human => Ok(format_human(portfolio, width, year)),
        OutputFormat::Json => format_json(portfolio),
    }
}

/// The section table, one per line: number key, anchor id, title.
pub fn format_sections() -> String {
    let mut out = String::new();
    for (i, section) in SECTIONS.iter().enumerate() {
        out.push_str(&format!(
            "{}  {:<16}{}\n",
            i + 1,
            section.id.as_str(),
            section.title
        ));
    }
    out
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(portfolio: &Portfolio, width: u16, year: i32) -> String {
    Document::build(portfolio, width, year).to_plain_text()
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(portfolio: &Portfolio) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Export {
        sections: &SECTIONS,
        content: portfolio,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    #[test]
    fn human_format_has_every_heading() {
        let output = format_portfolio(&builtin(), OutputFormat::Human, 80, 2026).unwrap();
        for heading in [
            "About Me",
            "Education",
            "Skills",
            "Projects",
            "Certifications",
            "Get In Touch",
        ] {
            assert!(output.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn human_format_has_footer_year() {
        let output = format_portfolio(&builtin(), OutputFormat::Human, 80, 2031).unwrap();
        assert!(output.contains("© 2031 All rights reserved"));
    }

    #[test]
    fn human_format_respects_width() {
        let output = format_portfolio(&builtin(), OutputFormat::Human, 60, 2026).unwrap();
        for line in output.lines() {
            assert!(unicode_width::UnicodeWidthStr::width(line) <= 60, "too wide: {line}");
        }
    }

    #[test]
    fn json_format_is_valid_json() {
        let output = format_portfolio(&builtin(), OutputFormat::Json, 80, 2026).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");
        assert!(parsed.is_object());
    }

    #[test]
    fn json_format_has_sections_and_content() {
        let output = format_portfolio(&builtin(), OutputFormat::Json, 80, 2026).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let sections = parsed["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0]["id"], "about");
        assert_eq!(sections[5]["title"], "Contact");
        assert_eq!(parsed["content"]["brand"], builtin().brand);
    }

    #[test]
    fn json_content_loads_back() {
        let output = format_portfolio(&builtin(), OutputFormat::Json, 80, 2026).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let content: Portfolio = serde_json::from_value(parsed["content"].clone()).unwrap();
        assert_eq!(content, builtin());
    }

    #[test]
    fn sections_listing_is_numbered() {
        let listing = format_sections();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("1  about"));
        assert!(lines[5].starts_with("6  contact"));
        assert!(lines[4].ends_with("Certifications"));
    }
}

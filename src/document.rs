//! Document layout: the page as a column of styled terminal lines.
//!
//! Pure function of (content, width, year). Wrapping is done here rather
//! than by the paragraph widget so that every anchor and content block
//! has a known line number; the viewport scrolls by those numbers.

use ratatui::text::{Line, Span};
use ratatui::style::Style;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::theme;
use crate::types::{Portfolio, SectionId, HERO_ANCHOR};

/// Widest the content column grows, in columns.
pub const MAX_CONTENT_WIDTH: usize = 88;

/// Content never lays out narrower than this; the terminal clips instead.
const MIN_CONTENT_WIDTH: usize = 16;

/// Blank columns left of the content column.
const MARGIN: usize = 2;

/// Columns taken by a card's frame: "│ " and " │".
const CARD_CHROME: usize = 4;

/// A named position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub id: &'static str,
    pub line: usize,
}

/// Lines covered by one content block, `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSpan {
    pub anchor: &'static str,
    pub start: usize,
    pub end: usize,
}

impl BlockSpan {
    pub fn contains(&self, line: usize) -> bool {
        (self.start..self.end).contains(&line)
    }
}

/// The laid-out page.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    anchors: Vec<Anchor>,
    blocks: Vec<BlockSpan>,
}

impl Document {
    /// Lay out `portfolio` for a terminal `width` columns wide.
    pub fn build(portfolio: &Portfolio, width: u16, year: i32) -> Document {
        let mut builder = Builder::new(width as usize);
        builder.hero(portfolio);
        for section in SectionId::ALL {
            builder.section(section, portfolio);
        }
        builder.footer(portfolio, year);
        builder.finish()
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    /// First line of the element with this anchor id.
    pub fn anchor(&self, id: &str) -> Option<usize> {
        self.anchors.iter().find(|a| a.id == id).map(|a| a.line)
    }

    pub fn blocks(&self) -> &[BlockSpan] {
        &self.blocks
    }

    /// Index of the block containing `line`.
    pub fn block_at(&self, line: usize) -> Option<usize> {
        self.blocks.iter().position(|b| b.contains(line))
    }

    /// Unstyled rendering, trailing whitespace trimmed.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

// ============================================================================
// BUILDER
// ============================================================================

struct Builder {
    lines: Vec<Line<'static>>,
    anchors: Vec<Anchor>,
    blocks: Vec<BlockSpan>,
    content_width: usize,
}

impl Builder {
    fn new(width: usize) -> Self {
        let content_width = width
            .saturating_sub(MARGIN * 2)
            .clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH);
        Builder {
            lines: Vec::new(),
            anchors: Vec::new(),
            blocks: Vec::new(),
            content_width,
        }
    }

    fn card_inner(&self) -> usize {
        self.content_width - CARD_CHROME
    }

    fn push(&mut self, line: Line<'static>) {
        let mut spans = vec![Span::raw(" ".repeat(MARGIN))];
        spans.extend(line.spans);
        self.lines.push(Line::from(spans));
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn begin_block(&mut self, anchor: &'static str) -> usize {
        self.anchors.push(Anchor { id: anchor, line: self.lines.len() });
        self.lines.len()
    }

    fn end_block(&mut self, anchor: &'static str, start: usize) {
        self.blocks.push(BlockSpan { anchor, start, end: self.lines.len() });
    }

    fn finish(self) -> Document {
        Document {
            lines: self.lines,
            anchors: self.anchors,
            blocks: self.blocks,
        }
    }

    // -- blocks --

    fn hero(&mut self, p: &Portfolio) {
        let start = self.begin_block(HERO_ANCHOR);
        let width = self.content_width;
        let hero = &p.hero;

        self.blank();
        for line in wrapped(&hero.headline, width, theme::STYLE_TITLE) {
            self.push(line);
        }
        for line in wrapped(&hero.highlight, width, theme::STYLE_HIGHLIGHT) {
            self.push(line);
        }
        self.blank();
        for line in wrapped(&hero.subtitle, width, theme::STYLE_SUBTITLE) {
            self.push(line);
        }
        self.blank();

        let primary = button(
            &format!("{} {}", hero.primary_cta, theme::ICON_ARROW_RIGHT),
            theme::STYLE_BUTTON_PRIMARY,
            Some('p'),
        );
        let secondary = button(&hero.secondary_cta, theme::STYLE_BUTTON_SECONDARY, Some('c'));
        for line in flow(vec![primary, secondary], width) {
            self.push(line);
        }
        self.blank();
        self.end_block(HERO_ANCHOR, start);
        self.blank();
    }

    fn section(&mut self, id: SectionId, p: &Portfolio) {
        let inner = self.card_inner();
        let (heading, body) = match id {
            SectionId::About => ("About Me", about_body(p, inner)),
            SectionId::Education => ("Education", education_body(p, inner)),
            SectionId::Skills => ("Skills", skills_body(p, inner)),
            SectionId::Projects => ("Projects", projects_body(p, inner)),
            SectionId::Certifications => ("Certifications", certifications_body(p, inner)),
            SectionId::Contact => ("Get In Touch", contact_body(p, inner)),
        };

        let start = self.begin_block(id.as_str());
        let mark = Span::styled(format!("{} ", theme::ICON_SECTION), theme::STYLE_SECTION_MARK);
        let mut card = hanging(mark, heading, theme::STYLE_TITLE, inner);
        card.push(Line::from(""));
        card.extend(body);
        for line in framed(card, inner) {
            self.push(line);
        }
        self.end_block(id.as_str(), start);
        self.blank();
    }

    fn footer(&mut self, p: &Portfolio, year: i32) {
        let width = self.content_width;
        self.push(Line::from(Span::styled("─".repeat(width), theme::STYLE_CARD_BORDER)));
        self.blank();
        let copyright = format!("© {year} All rights reserved");
        for text in [p.footer.credit.as_str(), copyright.as_str()] {
            for line in centered(text, width, theme::STYLE_DIM) {
                self.push(line);
            }
        }
        self.blank();
    }
}

// ============================================================================
// SECTION BODIES
// ============================================================================

fn about_body(p: &Portfolio, inner: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, paragraph) in p.about.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(wrapped(paragraph, inner, theme::STYLE_TEXT));
    }
    lines
}

fn education_body(p: &Portfolio, inner: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, edu) in p.education.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(wrapped(&edu.institution, inner, theme::STYLE_TITLE));
        lines.extend(wrapped(&edu.program_title, inner, theme::STYLE_TEXT));
        if !edu.tags.is_empty() {
            lines.push(Line::from(""));
            lines.extend(chips(&edu.tags, inner, theme::STYLE_TAG));
        }
    }
    lines
}

fn skills_body(p: &Portfolio, inner: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.extend(wrapped("Technical Skills", inner, theme::STYLE_TITLE));
    for skill in &p.skills.technical {
        lines.extend(bulleted(skill, inner));
    }
    lines.push(Line::from(""));
    lines.extend(wrapped("Soft Skills", inner, theme::STYLE_TITLE));
    lines.extend(chips(&p.skills.soft, inner, theme::STYLE_CHIP));
    lines
}

fn projects_body(p: &Portfolio, inner: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, project) in p.projects.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(wrapped(&project.title, inner, theme::STYLE_TITLE));
        lines.extend(wrapped(&project.subtitle, inner, theme::STYLE_SECTION_MARK));
        lines.push(Line::from(""));

        // Only the first repository has a key binding.
        let key = (i == 0).then_some('r');
        let repo = button(
            &format!("{} View on GitHub", theme::ICON_GITHUB),
            theme::STYLE_BUTTON_PRIMARY,
            key,
        );
        lines.extend(flow(vec![repo], inner));
        lines.push(Line::from(""));

        if !project.tech_stack.is_empty() {
            lines.extend(chips(&project.tech_stack, inner, theme::STYLE_TAG));
            lines.push(Line::from(""));
        }
        for bullet in &project.bullets {
            lines.extend(bulleted(bullet, inner));
        }
    }
    lines
}

fn certifications_body(p: &Portfolio, inner: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, cert) in p.certifications.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(wrapped(&cert.title, inner, theme::STYLE_TITLE));

        // Issuer, year and link share the last issuer line when they fit.
        let mut issuer = wrap(&cert.issuer, inner);
        let last = issuer.pop().unwrap_or_default();
        for line in issuer {
            lines.push(Line::from(Span::styled(line, theme::STYLE_TEXT)));
        }
        let mut meta = vec![
            vec![Span::styled(last, theme::STYLE_TEXT)],
            vec![Span::styled(cert.year.to_string(), theme::STYLE_DIM)],
        ];
        if cert.url.is_some() {
            meta.push(vec![Span::styled(" View ", theme::STYLE_CHIP)]);
        }
        lines.extend(flow(meta, inner));
    }
    lines
}

fn contact_body(p: &Portfolio, inner: usize) -> Vec<Line<'static>> {
    let mut lines = wrapped(&p.contact.blurb, inner, theme::STYLE_TEXT);
    lines.push(Line::from(""));
    let buttons = vec![
        button(
            &format!("{} Email Me", theme::ICON_MAIL),
            theme::STYLE_BUTTON_PRIMARY,
            Some('e'),
        ),
        button(theme::ICON_GITHUB, theme::STYLE_CHIP, Some('h')),
        button(theme::ICON_LINKEDIN, theme::STYLE_CHIP, Some('l')),
    ];
    lines.extend(flow(buttons, inner));
    lines
}

// ============================================================================
// LINE HELPERS
// ============================================================================

/// Greedy word wrap to `width` display columns. Words wider than the
/// line are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_width = word.width();
        let current_width = current.width();

        if current.is_empty() && word_width <= width {
            current.push_str(word);
        } else if !current.is_empty() && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            if word_width <= width {
                current.push_str(word);
            } else {
                for ch in word.chars() {
                    if current.width() + ch.to_string().width() > width {
                        out.push(std::mem::take(&mut current));
                    }
                    current.push(ch);
                }
            }
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn wrapped(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|l| Line::from(Span::styled(l, style)))
        .collect()
}

/// Bullet with a hanging indent.
fn bulleted(text: &str, width: usize) -> Vec<Line<'static>> {
    let lead = Span::styled(format!("{} ", theme::ICON_BULLET), theme::STYLE_BULLET);
    hanging(lead, text, theme::STYLE_TEXT, width)
}

/// `text` wrapped after `lead`; continuation lines are indented to match.
fn hanging(lead: Span<'static>, text: &str, style: Style, width: usize) -> Vec<Line<'static>> {
    let indent = lead.width();
    let mut lead = Some(lead);
    wrap(text, width.saturating_sub(indent))
        .into_iter()
        .map(|l| {
            let first = lead.take().unwrap_or_else(|| Span::raw(" ".repeat(indent)));
            Line::from(vec![first, Span::styled(l, style)])
        })
        .collect()
}

/// Padded pills, flowed onto as many lines as needed.
fn chips(items: &[String], width: usize, style: Style) -> Vec<Line<'static>> {
    let groups = items
        .iter()
        .map(|item| vec![Span::styled(format!(" {item} "), style)])
        .collect();
    flow(groups, width)
}

/// A labelled button, optionally followed by its key hint.
fn button(label: &str, style: Style, key: Option<char>) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(format!(" {label} "), style)];
    if let Some(key) = key {
        spans.push(Span::styled(format!(" {key}"), theme::STYLE_KEY));
    }
    spans
}

/// Lay span groups left to right, two columns apart, wrapping between
/// groups when the next one would overflow `width`. A group wider than
/// the whole line is cut to fit.
fn flow(groups: Vec<Vec<Span<'static>>>, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for group in groups {
        let group = fit_group(group, width);
        let group_width: usize = group.iter().map(|s| s.width()).sum();
        if !current.is_empty() && used + 2 + group_width > width {
            lines.push(Line::from(std::mem::take(&mut current)));
            used = 0;
        }
        if !current.is_empty() {
            current.push(Span::raw("  "));
            used += 2;
        }
        current.extend(group);
        used += group_width;
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    lines
}

/// Shrink a span group to `width` columns. The first span (a label) is
/// cut before any trailing key hint is dropped.
fn fit_group(mut group: Vec<Span<'static>>, width: usize) -> Vec<Span<'static>> {
    let total: usize = group.iter().map(|s| s.width()).sum();
    if total <= width || group.is_empty() {
        return group;
    }
    let mut rest: usize = group[1..].iter().map(|s| s.width()).sum();
    if rest >= width {
        group.truncate(1);
        rest = 0;
    }
    let label = truncate(&group[0].content, width - rest);
    group[0].content = label.into();
    group
}

/// Cut `text` to at most `width` columns, ending in an ellipsis when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

/// Each wrapped line of `text`, centred in `width`.
fn centered(text: &str, width: usize, style: Style) -> Vec<Line<'static>> {
    wrap(text, width)
        .into_iter()
        .map(|line| {
            let pad = width.saturating_sub(line.width()) / 2;
            Line::from(vec![Span::raw(" ".repeat(pad)), Span::styled(line, style)])
        })
        .collect()
}

/// Frame `body` in a rounded card whose interior is `inner` columns.
fn framed(body: Vec<Line<'static>>, inner: usize) -> Vec<Line<'static>> {
    let border = theme::STYLE_CARD_BORDER;
    let mut out = Vec::with_capacity(body.len() + 4);
    let rule = "─".repeat(inner + 2);

    out.push(Line::from(Span::styled(format!("╭{rule}╮"), border)));
    out.push(framed_row(Line::from(""), inner));
    for line in body {
        out.push(framed_row(line, inner));
    }
    out.push(framed_row(Line::from(""), inner));
    out.push(Line::from(Span::styled(format!("╰{rule}╯"), border)));
    out
}

fn framed_row(line: Line<'static>, inner: usize) -> Line<'static> {
    let border = theme::STYLE_CARD_BORDER;
    let pad = inner.saturating_sub(line.width());
    let mut spans = vec![Span::styled("│ ", border)];
    spans.extend(line.spans);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(" │", border));
    Line::from(spans)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::builtin;

    fn doc(width: u16) -> Document {
        Document::build(&builtin(), width, 2026)
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert!(lines.iter().all(|l| l.width() <= 10));
        assert_eq!(lines.join(" "), "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn wrap_splits_overlong_words() {
        let lines = wrap("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_empty_text_has_no_lines() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn every_section_and_hero_has_an_anchor() {
        let document = doc(100);
        assert_eq!(document.anchor(HERO_ANCHOR), Some(0));
        for id in SectionId::ALL {
            assert!(document.anchor(id.as_str()).is_some(), "missing anchor {id}");
        }
        assert_eq!(document.anchor("nowhere"), None);
    }

    #[test]
    fn anchors_follow_section_order() {
        let document = doc(100);
        let lines: Vec<usize> = SectionId::ALL
            .iter()
            .filter_map(|id| document.anchor(id.as_str()))
            .collect();
        assert!(lines.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn section_anchor_is_card_top() {
        let document = doc(100);
        let line = document.anchor("skills").unwrap();
        let text: String = document.lines()[line]
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert!(text.trim_start().starts_with('╭'));
    }

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn lines_fit_the_terminal() {
        for width in (20u16..=40).chain([60, 80, 120]) {
            let document = doc(width);
            for line in document.lines() {
                assert!(
                    line.width() <= width as usize,
                    "line too wide at {width}: {:?}",
                    plain(line)
                );
            }
        }
    }

    #[test]
    fn card_borders_line_up_at_every_width() {
        for width in 20u16..=40 {
            let document = doc(width);
            let top = document.anchor("skills").unwrap();
            let block = document.blocks()[document.block_at(top).unwrap()];
            let rows: Vec<&Line> = document.lines()[block.start..block.end].iter().collect();
            let edge = rows[0].width();
            for row in rows {
                assert_eq!(row.width(), edge, "ragged card at {width}: {:?}", plain(row));
            }
        }
    }

    #[test]
    fn narrow_footer_wraps_and_centres() {
        let text = doc(20).to_plain_text();
        assert!(text.contains("Designed & Built"));
        assert!(text.contains("by Antronic A"));
        assert!(text.contains("© 2026 All"));
        assert!(text.contains("rights reserved"));
        assert!(text.lines().all(|l| !l.contains("Designed & Built by")));
    }

    #[test]
    fn narrow_certificate_meta_keeps_issuer_and_year() {
        let mut portfolio = builtin();
        portfolio.certifications[0].url = Some("https://example.com/cert".into());
        let text = Document::build(&portfolio, 20, 2026).to_plain_text();
        assert!(text.contains("MindLuster"));
        assert!(text.contains(&portfolio.certifications[0].year.to_string()));
        assert!(text.contains("View"));
    }

    #[test]
    fn oversized_button_keeps_its_key_hint() {
        let lines = flow(
            vec![button("View on GitHub", theme::STYLE_BUTTON_PRIMARY, Some('r'))],
            10,
        );
        assert_eq!(lines.len(), 1);
        let text = plain(&lines[0]);
        assert_eq!(text.width(), 10);
        assert!(text.ends_with("… r"), "{text:?}");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("Time Management", 8), "Time Ma…");
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn blocks_are_named_by_their_anchor() {
        let document = doc(100);
        let names: Vec<&str> = document.blocks().iter().map(|b| b.anchor).collect();
        let mut expected = vec![HERO_ANCHOR];
        expected.extend(SectionId::ALL.iter().map(|id| id.as_str()));
        assert_eq!(names, expected);
    }

    #[test]
    fn narrow_layout_is_taller() {
        assert!(doc(40).height() > doc(120).height());
    }

    #[test]
    fn blocks_cover_hero_and_sections() {
        let document = doc(100);
        assert_eq!(document.blocks().len(), 7);
        let about = document.anchor("about").unwrap();
        assert_eq!(document.block_at(about), Some(1));
        assert_eq!(document.block_at(0), Some(0));
    }

    #[test]
    fn plain_text_contains_content() {
        let text = doc(100).to_plain_text();
        assert!(text.contains("MERN Stack Developer"));
        assert!(text.contains("About Me"));
        assert!(text.contains("Rajalakshmi Institute of Technology"));
        assert!(text.contains("▹ React.js & Next.js"));
        assert!(text.contains("Exam Seating Arrangement Web Application"));
        assert!(text.contains("Get In Touch"));
        assert!(text.contains("© 2026 All rights reserved"));
    }

    fn issuer_lines(text: &str) -> Vec<&str> {
        text.lines().filter(|l| l.contains("MindLuster")).collect()
    }

    #[test]
    fn certifications_without_url_have_no_view_button() {
        let text = doc(100).to_plain_text();
        let lines = issuer_lines(&text);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| !l.contains("View")));
    }

    #[test]
    fn certification_with_url_shows_view_button() {
        let mut portfolio = builtin();
        portfolio.certifications[0].url = Some("https://example.com/cert".into());
        let text = Document::build(&portfolio, 100, 2026).to_plain_text();
        let lines = issuer_lines(&text);
        assert!(lines[0].contains("View"));
        assert!(!lines[1].contains("View"));
    }
}

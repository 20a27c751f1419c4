//! The scrollable window onto the document.
//!
//! This is the collaborator the navigation state reads its scroll
//! offset from. It owns the true scroll position; the navigation state
//! only ever mirrors it. It also answers, per content block, whether
//! that block has entered the window at least once.

use std::collections::BTreeSet;

use crate::anim::Tween;
use crate::document::{BlockSpan, Document};

/// Viewport capabilities the controller relies on.
pub trait Viewport {
    /// Current vertical offset in rows.
    fn scroll_y(&self) -> u16;

    /// Bring the element with anchor `id` to the top of the window,
    /// smoothly if configured. Unknown ids are ignored.
    fn scroll_into_view(&mut self, id: &str, now_ms: u64);

    /// Scroll by `delta` rows (negative is up), clamped to the document.
    fn scroll_by(&mut self, delta: i32);

    /// Jump to an absolute offset, clamped to the document.
    fn scroll_to(&mut self, y: u16);

    /// Whether block `index` has ever been inside the window.
    fn has_entered(&self, index: usize) -> bool;
}

/// Which end of the document to jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEdge {
    Top,
    Bottom,
}

/// Viewport over a laid-out [`Document`].
#[derive(Debug, Default)]
pub struct DocumentViewport {
    offset: u16,
    page_height: u16,
    document_height: usize,
    anchors: Vec<(&'static str, usize)>,
    blocks: Vec<BlockSpan>,
    entered: BTreeSet<usize>,
    smooth_scroll_ms: u64,
    scroll_tween: Option<Tween>,
}

impl DocumentViewport {
    pub fn new(smooth_scroll_ms: u64) -> Self {
        DocumentViewport {
            smooth_scroll_ms,
            ..Default::default()
        }
    }

    /// Adopt a (re)laid-out document. Keeps the offset, clamped.
    pub fn set_document(&mut self, document: &Document) {
        self.document_height = document.height();
        self.anchors = document.anchors().iter().map(|a| (a.id, a.line)).collect();
        self.blocks = document.blocks().to_vec();
        self.scroll_tween = None;
        self.offset = self.clamp(self.offset as i64);
    }

    /// Rows visible at once.
    pub fn set_page_height(&mut self, rows: u16) {
        self.page_height = rows;
        self.offset = self.clamp(self.offset as i64);
    }

    /// Largest offset that still fills the window.
    pub fn max_offset(&self) -> u16 {
        let max = self
            .document_height
            .saturating_sub(self.page_height as usize);
        max.min(u16::MAX as usize) as u16
    }

    pub fn scroll_edge(&mut self, edge: ScrollEdge) {
        match edge {
            ScrollEdge::Top => self.scroll_to(0),
            ScrollEdge::Bottom => self.scroll_to(self.max_offset()),
        }
    }

    /// Scroll by whole pages; `pages` may be negative.
    pub fn scroll_pages(&mut self, pages: i32) {
        let step = (self.page_height as i32 - 1).max(1);
        self.scroll_by(pages * step);
    }

    /// Advance a smooth scroll. Returns true if the offset moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(tween) = self.scroll_tween else {
            return false;
        };
        let before = self.offset;
        self.offset = self.clamp(tween.value_at(now_ms).round() as i64);
        if tween.finished(now_ms) {
            self.scroll_tween = None;
        }
        self.offset != before
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll_tween.is_some()
    }

    /// Record blocks now inside the window. Returns the ones seen for
    /// the first time.
    pub fn update_reveal(&mut self) -> Vec<usize> {
        let top = self.offset as usize;
        let bottom = top + self.page_height as usize;
        let mut fresh = Vec::new();
        for (index, block) in self.blocks.iter().enumerate() {
            let visible = block.start < bottom && block.end > top;
            if visible && self.entered.insert(index) {
                fresh.push(index);
            }
        }
        fresh
    }

    fn clamp(&self, y: i64) -> u16 {
        y.clamp(0, self.max_offset() as i64) as u16
    }

    fn anchor_line(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(anchor, _)| *anchor == id)
            .map(|(_, line)| *line)
    }
}

impl Viewport for DocumentViewport {
    fn scroll_y(&self) -> u16 {
        self.offset
    }

    fn scroll_into_view(&mut self, id: &str, now_ms: u64) {
        let Some(line) = self.anchor_line(id) else {
            return;
        };
        let target = self.clamp(line as i64);
        if self.smooth_scroll_ms == 0 {
            self.scroll_tween = None;
            self.offset = target;
            return;
        }
        // Retarget from wherever an in-flight scroll has got to.
        self.scroll_tween = Some(Tween::new(
            self.offset as f32,
            target as f32,
            now_ms,
            self.smooth_scroll_ms,
        ));
    }

    fn scroll_by(&mut self, delta: i32) {
        self.scroll_tween = None;
        self.offset = self.clamp(self.offset as i64 + delta as i64);
    }

    fn scroll_to(&mut self, y: u16) {
        self.scroll_tween = None;
        self.offset = self.clamp(y as i64);
    }

    fn has_entered(&self, index: usize) -> bool {
        self.entered.contains(&index)
    }
}

// ============================================================================
// TESTS
// ============================================================================

//! Enter/exit transitions.
//!
//! A small tweening engine behind a narrow contract: the caller says
//! "this element enters (or exits) from pose A to pose B over N ms" and
//! later asks for the element's pose at a given time. Nothing in the
//! navigation state machine reads from here; a transition that is cut
//! short or never rendered changes nothing but pixels.
//!
//! Time is passed in as milliseconds since an arbitrary epoch so every
//! function stays pure and testable.

use std::collections::HashMap;

/// Animated elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    /// Dimming layer behind the open mobile menu.
    Overlay,
    /// The mobile menu panel.
    MobileMenu,
    /// Content block by index, revealed as it scrolls into view.
    Block(usize),
}

/// Visual properties an animation interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// 0.0 transparent .. 1.0 opaque.
    pub opacity: f32,
    /// Vertical displacement in rows; negative is up.
    pub offset_y: f32,
}

impl Pose {
    pub const SHOWN: Pose = Pose { opacity: 1.0, offset_y: 0.0 };
    pub const HIDDEN: Pose = Pose { opacity: 0.0, offset_y: 0.0 };

    pub const fn faded(offset_y: f32) -> Pose {
        Pose { opacity: 0.0, offset_y }
    }

    fn lerp(self, to: Pose, t: f32) -> Pose {
        Pose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            offset_y: self.offset_y + (to.offset_y - self.offset_y) * t,
        }
    }
}

/// Ease-out cubic on `t` in 0..=1.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// A scalar tween with ease-out timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub start_ms: u64,
    pub duration_ms: u64,
}

impl Tween {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Tween { from, to, start_ms, duration_ms }
    }

    /// Eased progress in 0..=1 at `now_ms`.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        ease_out(elapsed / self.duration_ms as f32)
    }

    pub fn value_at(&self, now_ms: u64) -> f32 {
        self.from + (self.to - self.from) * self.progress(now_ms)
    }

    pub fn finished(&self, now_ms: u64) -> bool {
        now_ms >= self.start_ms.saturating_add(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering,
    Exiting,
}

#[derive(Debug, Clone, Copy)]
struct Track {
    from: Pose,
    to: Pose,
    clock: Tween,
    phase: Phase,
}

impl Track {
    fn pose_at(&self, now_ms: u64) -> Pose {
        self.from.lerp(self.to, self.clock.value_at(now_ms))
    }
}

/// Tracks the transitions of every animated element.
#[derive(Debug, Default)]
pub struct Animator {
    disabled: bool,
    tracks: HashMap<Element, Track>,
}

impl Animator {
    pub fn new(enabled: bool) -> Self {
        Animator {
            disabled: !enabled,
            tracks: HashMap::new(),
        }
    }

    /// Bring `element` in, moving from `from` to `to`.
    ///
    /// An element that is mid-exit restarts from `from`. With animations
    /// disabled the element lands on `to` immediately.
    pub fn animate_enter(
        &mut self,
        element: Element,
        from: Pose,
        to: Pose,
        duration_ms: u64,
        now_ms: u64,
    ) {
        let duration_ms = if self.disabled { 0 } else { duration_ms };
        self.tracks.insert(
            element,
            Track {
                from,
                to,
                clock: Tween::new(0.0, 1.0, now_ms, duration_ms),
                phase: Phase::Entering,
            },
        );
    }

    /// Take `element` out, moving from `from` to `to`. Once the exit
    /// finishes the element is no longer present.
    pub fn animate_exit(
        &mut self,
        element: Element,
        from: Pose,
        to: Pose,
        duration_ms: u64,
        now_ms: u64,
    ) {
        if self.disabled {
            self.tracks.remove(&element);
            return;
        }
        self.tracks.insert(
            element,
            Track {
                from,
                to,
                clock: Tween::new(0.0, 1.0, now_ms, duration_ms),
                phase: Phase::Exiting,
            },
        );
    }

    /// Pose of `element` at `now_ms`, or `None` if it is not present.
    pub fn pose(&self, element: Element, now_ms: u64) -> Option<Pose> {
        let track = self.tracks.get(&element)?;
        if track.phase == Phase::Exiting && track.clock.finished(now_ms) {
            return None;
        }
        Some(track.pose_at(now_ms))
    }

    /// Whether `element` has an entry (possibly finished) or a running exit.
    pub fn is_present(&self, element: Element, now_ms: u64) -> bool {
        self.pose(element, now_ms).is_some()
    }

    /// Whether any transition is still running at `now_ms`.
    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.tracks.values().any(|t| !t.clock.finished(now_ms))
    }

    /// Drop finished exits.
    pub fn prune(&mut self, now_ms: u64) {
        self.tracks
            .retain(|_, t| !(t.phase == Phase::Exiting && t.clock.finished(now_ms)));
    }
}

// ============================================================================
// TESTS
// ============================================================================

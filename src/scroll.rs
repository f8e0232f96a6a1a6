//! Scroll-loop engine for the infinite marquee.
//!
//! The visible tutorials are rendered twice end-to-end. Each display
//! refresh advances the horizontal offset by a fixed step; once the offset
//! reaches half of the total scroll width (the end of the first copy) it
//! snaps back to zero, and since the second copy looks exactly like the
//! first, the strip appears to scroll forever.
//!
//! The engine is pure state. Something else has to call [`ScrollLoopEngine::tick`]
//! once per frame: a [`TickLoop`] over a [`FrameScheduler`], which holds
//! the scheduled-repeat handle and releases it on stop or drop.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use tracing::{debug, trace};

use crate::tutorial::Tutorial;

/// Pixels advanced per refresh tick.
pub const DEFAULT_SCROLL_STEP: f64 = 0.8;

/// Below this many source items the loop is disabled and the strip is static.
pub const MIN_LOOP_ITEMS: usize = 2;

/// One card in the doubled strip.
#[derive(Debug, Clone, PartialEq)]
pub struct StripItem<'a> {
    /// Render key, unique across both copies: `"<id>-<strip index>"`.
    pub key: String,
    /// Position in the doubled strip (0..2N).
    pub strip_index: usize,
    /// Position in the visible list (0..N).
    pub source_index: usize,
    pub tutorial: &'a Tutorial,
}

/// Build the strip: `visible` followed by `visible` again.
pub fn build_strip(visible: &[Tutorial]) -> Vec<StripItem<'_>> {
    visible
        .iter()
        .chain(visible.iter())
        .enumerate()
        .map(|(strip_index, tutorial)| StripItem {
            key: format!("{}-{}", tutorial.id, strip_index),
            strip_index,
            source_index: strip_index % visible.len(),
            tutorial,
        })
        .collect()
}

/// Pointer and touch events that toggle the pause flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseSignal {
    PointerEnter,
    PointerLeave,
    TouchStart,
    TouchEnd,
}

impl PauseSignal {
    /// Whether this signal pauses (true) or resumes (false) the strip.
    pub fn pauses(&self) -> bool {
        matches!(self, PauseSignal::PointerEnter | PauseSignal::TouchStart)
    }
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Fewer than [`MIN_LOOP_ITEMS`] items; nothing moves.
    Disabled,
    /// Paused; the loop keeps ticking but the offset is held.
    Paused,
    /// Offset advanced to the contained value.
    Advanced(f64),
    /// Offset reached the loop point and snapped back to zero.
    Wrapped,
}

/// Per-instance scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLoopEngine {
    offset: f64,
    paused: bool,
    item_count: usize,
    step: f64,
}

impl Default for ScrollLoopEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_STEP)
    }
}

impl ScrollLoopEngine {
    pub fn new(step: f64) -> Self {
        Self {
            offset: 0.0,
            paused: false,
            item_count: 0,
            step,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Whether ticks can move the strip at all.
    pub fn is_enabled(&self) -> bool {
        self.item_count >= MIN_LOOP_ITEMS
    }

    /// Offset at which one logical cycle ends.
    pub fn loop_point(scroll_width: f64) -> f64 {
        scroll_width / 2.0
    }

    /// Update the number of source items.
    ///
    /// Returns true when the count changed, which is the host's cue to
    /// restart its tick loop. Dropping below the loop threshold parks the
    /// strip at zero.
    pub fn set_item_count(&mut self, count: usize) -> bool {
        if count == self.item_count {
            return false;
        }
        let was_enabled = self.is_enabled();
        self.item_count = count;
        if !self.is_enabled() {
            self.offset = 0.0;
        }
        if was_enabled != self.is_enabled() {
            debug!(count, enabled = self.is_enabled(), "scroll loop enablement changed");
        }
        true
    }

    /// Set the pause flag directly. Returns true when it changed.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        let changed = self.paused != paused;
        self.paused = paused;
        changed
    }

    /// Apply a pointer/touch signal. Returns true when the flag changed.
    pub fn apply(&mut self, signal: PauseSignal) -> bool {
        self.set_paused(signal.pauses())
    }

    /// Advance one display refresh against a strip `scroll_width` pixels wide.
    pub fn tick(&mut self, scroll_width: f64) -> TickOutcome {
        if !self.is_enabled() {
            return TickOutcome::Disabled;
        }
        if self.paused {
            return TickOutcome::Paused;
        }
        self.offset += self.step;
        if self.offset >= Self::loop_point(scroll_width) {
            trace!(scroll_width, "scroll loop wrapped");
            self.offset = 0.0;
            TickOutcome::Wrapped
        } else {
            TickOutcome::Advanced(self.offset)
        }
    }
}

/// Platform primitive that calls a callback once per display refresh until
/// the returned handle is released.
pub trait FrameScheduler {
    /// Keeps the repeat alive; dropping it must stop further callbacks.
    type Handle;

    /// Begin calling `tick` on every refresh.
    fn start(&self, tick: Box<dyn FnMut()>) -> Self::Handle;

    /// Release a handle. The default simply drops it.
    fn cancel(&self, handle: Self::Handle) {
        drop(handle);
    }
}

/// Owner of at most one running scheduled repeat.
///
/// Starting while running cancels the previous repeat first, and dropping
/// the loop cancels whatever is still scheduled.
pub struct TickLoop<S: FrameScheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
}

impl<S: FrameScheduler> TickLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    pub fn start(&mut self, tick: impl FnMut() + 'static) {
        self.stop();
        self.handle = Some(self.scheduler.start(Box::new(tick)));
        debug!("tick loop started");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
            debug!("tick loop stopped");
        }
    }
}

impl<S: FrameScheduler> Drop for TickLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Default)]
struct ManualInner {
    next_id: u64,
    live: BTreeSet<u64>,
    callbacks: BTreeMap<u64, Box<dyn FnMut()>>,
}

/// Deterministic scheduler: callbacks run only when [`ManualScheduler::fire`]
/// is called. Used by the CLI simulator and tests.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualInner>>,
}

/// Registration in a [`ManualScheduler`]; unregisters on drop.
pub struct ManualHandle {
    id: u64,
    inner: Weak<RefCell<ManualInner>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.live.remove(&self.id);
            inner.callbacks.remove(&self.id);
        }
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of repeats currently registered.
    pub fn active(&self) -> usize {
        self.inner.borrow().live.len()
    }

    /// Simulate one display refresh.
    pub fn fire(&self) {
        let ids: Vec<u64> = self.inner.borrow().live.iter().copied().collect();
        for id in ids {
            let callback = self.inner.borrow_mut().callbacks.remove(&id);
            if let Some(mut callback) = callback {
                callback();
                let mut inner = self.inner.borrow_mut();
                if inner.live.contains(&id) {
                    inner.callbacks.insert(id, callback);
                }
            }
        }
    }

    pub fn fire_n(&self, frames: usize) {
        for _ in 0..frames {
            self.fire();
        }
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn start(&self, tick: Box<dyn FnMut()>) -> ManualHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.live.insert(id);
        inner.callbacks.insert(id, tick);
        ManualHandle {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}

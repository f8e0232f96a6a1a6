//! `requestAnimationFrame`-backed frame scheduler.
//!
//! The browser only offers one-shot frame callbacks, so each frame
//! re-requests the next one and parks its [`AnimationFrame`] in a shared
//! slot. The handle owns the slot; dropping it drops the pending
//! `AnimationFrame`, which cancels it, and a frame that still fires finds
//! the slot gone and stops.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::render::{AnimationFrame, request_animation_frame};
use tutorials_showcase::FrameScheduler;

type Slot = RefCell<Option<AnimationFrame>>;
type Tick = Rc<RefCell<Box<dyn FnMut()>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RafScheduler;

/// Keeps the repeat alive until dropped.
pub struct RafHandle {
    slot: Rc<Slot>,
}

impl RafHandle {
    pub fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl Drop for RafHandle {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

fn schedule(slot: Weak<Slot>, tick: Tick) {
    let Some(strong) = slot.upgrade() else {
        return;
    };
    let frame = request_animation_frame(move |_timestamp| {
        let Some(current) = slot.upgrade() else {
            return;
        };
        current.borrow_mut().take();
        drop(current);
        (tick.borrow_mut())();
        schedule(slot, tick);
    });
    *strong.borrow_mut() = Some(frame);
}

impl FrameScheduler for RafScheduler {
    type Handle = RafHandle;

    fn start(&self, tick: Box<dyn FnMut()>) -> RafHandle {
        let slot: Rc<Slot> = Rc::new(RefCell::new(None));
        schedule(Rc::downgrade(&slot), Rc::new(RefCell::new(tick)));
        RafHandle { slot }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutorials_showcase::TickLoop;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_start_requests_a_frame() {
        let handle = RafScheduler.start(Box::new(|| {}));
        assert!(handle.is_pending());
    }

    #[wasm_bindgen_test]
    fn test_stop_cancels_before_first_frame() {
        let count = Rc::new(RefCell::new(0));
        let mut tick_loop = TickLoop::new(RafScheduler);
        let c = count.clone();
        tick_loop.start(move || *c.borrow_mut() += 1);
        assert!(tick_loop.is_running());
        tick_loop.stop();
        assert!(!tick_loop.is_running());
        assert_eq!(*count.borrow(), 0);
    }
}

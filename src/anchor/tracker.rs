use std::{cell::Cell, rc::Rc};

use crate::{
    anchor::view::{AnchorView, LayoutListener},
    foundation::core::{Point, Rect},
};

/// Anchor position and visible frame captured at one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSample {
    /// Anchor origin in screen coordinates.
    pub location: Point,
    /// Visible display frame in screen coordinates.
    pub visible_frame: Rect,
}

/// Keeps the latest [`ScreenSample`] of the anchors it is subscribed to.
///
/// The tracker is itself the [`LayoutListener`]: anchors hold an `Rc` to it and every
/// notification overwrites the sample synchronously.
#[derive(Debug, Default)]
pub struct ScreenLocationTracker {
    sample: Cell<Option<ScreenSample>>,
    samples_taken: Cell<u64>,
}

impl ScreenLocationTracker {
    /// Tracker with no sample yet.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Latest sample; `None` until an anchor was attached.
    pub fn sample(&self) -> Option<ScreenSample> {
        self.sample.get()
    }

    /// Number of samples taken so far.
    pub fn samples_taken(&self) -> u64 {
        self.samples_taken.get()
    }

    /// Read location and visible frame from `anchor`.
    pub fn update_from(&self, anchor: &dyn AnchorView) {
        let sample = ScreenSample {
            location: anchor.location_on_screen(),
            visible_frame: anchor.visible_display_frame(),
        };
        tracing::trace!(?sample, "re-sampled anchor");
        self.sample.set(Some(sample));
        self.samples_taken.set(self.samples_taken.get() + 1);
    }

    /// Sample `anchor` now and follow its layout changes from here on.
    pub fn attach(self: &Rc<Self>, anchor: &mut dyn AnchorView) {
        self.update_from(anchor);
        anchor.add_layout_listener(self.as_listener());
    }

    /// Stop following `anchor`. Returns `false` when it was not followed.
    pub fn detach(self: &Rc<Self>, anchor: &mut dyn AnchorView) -> bool {
        anchor.remove_layout_listener(&self.as_listener())
    }

    fn as_listener(self: &Rc<Self>) -> Rc<dyn LayoutListener> {
        self.clone()
    }
}

impl LayoutListener for ScreenLocationTracker {
    fn on_layout_change(&self, anchor: &dyn AnchorView) {
        self.update_from(anchor);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/anchor/tracker.rs"]
mod tests;

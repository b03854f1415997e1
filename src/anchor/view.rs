use std::rc::Rc;

use crate::foundation::core::{Point, Rect};

/// Receives layout-change notifications from an [`AnchorView`].
pub trait LayoutListener {
    /// Called synchronously after `anchor` moved or resized.
    fn on_layout_change(&self, anchor: &dyn AnchorView);
}

/// An on-screen element a bubble points at.
pub trait AnchorView {
    /// Absolute screen position of the element's origin.
    fn location_on_screen(&self) -> Point;

    /// Region of the screen not covered by system chrome, in screen coordinates.
    fn visible_display_frame(&self) -> Rect;

    /// Subscribe `listener`; subscribing the same listener twice has no extra effect.
    fn add_layout_listener(&mut self, listener: Rc<dyn LayoutListener>);

    /// Unsubscribe `listener`. Returns `false` when it was not subscribed.
    fn remove_layout_listener(&mut self, listener: &Rc<dyn LayoutListener>) -> bool;
}

fn same_listener(a: &Rc<dyn LayoutListener>, b: &Rc<dyn LayoutListener>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// In-memory [`AnchorView`] driven by explicit [`LayoutAnchor::relayout`] calls.
#[derive(Default)]
pub struct LayoutAnchor {
    location: Point,
    visible_frame: Rect,
    listeners: Vec<Rc<dyn LayoutListener>>,
}

impl std::fmt::Debug for LayoutAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutAnchor")
            .field("location", &self.location)
            .field("visible_frame", &self.visible_frame)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl LayoutAnchor {
    /// Anchor at `location` inside `visible_frame`.
    pub fn new(location: Point, visible_frame: Rect) -> Self {
        Self {
            location,
            visible_frame,
            listeners: Vec::new(),
        }
    }

    /// Move the anchor and notify every subscribed listener.
    pub fn relayout(&mut self, location: Point, visible_frame: Rect) {
        self.location = location;
        self.visible_frame = visible_frame;
        for listener in &self.listeners {
            listener.on_layout_change(self);
        }
    }

    /// Number of subscribed listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl AnchorView for LayoutAnchor {
    fn location_on_screen(&self) -> Point {
        self.location
    }

    fn visible_display_frame(&self) -> Rect {
        self.visible_frame
    }

    fn add_layout_listener(&mut self, listener: Rc<dyn LayoutListener>) {
        if self.listeners.iter().any(|l| same_listener(l, &listener)) {
            return;
        }
        self.listeners.push(listener);
    }

    fn remove_layout_listener(&mut self, listener: &Rc<dyn LayoutListener>) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| !same_listener(l, listener));
        self.listeners.len() != before
    }
}

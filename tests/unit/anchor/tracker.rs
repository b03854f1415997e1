use super::*;
use crate::anchor::view::LayoutAnchor;

fn frame() -> Rect {
    Rect::new(0.0, 24.0, 1080.0, 1920.0)
}

#[test]
fn attach_samples_immediately() {
    let tracker = ScreenLocationTracker::new();
    assert_eq!(tracker.sample(), None);

    let mut anchor = LayoutAnchor::new(Point::new(300.0, 500.0), frame());
    tracker.attach(&mut anchor);

    assert_eq!(
        tracker.sample(),
        Some(ScreenSample {
            location: Point::new(300.0, 500.0),
            visible_frame: frame(),
        })
    );
    assert_eq!(tracker.samples_taken(), 1);
    assert_eq!(anchor.listener_count(), 1);
}

#[test]
fn layout_changes_resample_while_attached() {
    let tracker = ScreenLocationTracker::new();
    let mut anchor = LayoutAnchor::new(Point::new(300.0, 500.0), frame());
    tracker.attach(&mut anchor);

    let moved = Rect::new(0.0, 0.0, 720.0, 1280.0);
    anchor.relayout(Point::new(650.0, 40.0), moved);
    let sample = tracker.sample().unwrap();
    assert_eq!(sample.location, Point::new(650.0, 40.0));
    assert_eq!(sample.visible_frame, moved);
    assert_eq!(tracker.samples_taken(), 2);
}

#[test]
fn detached_tracker_ignores_layout_changes() {
    let tracker = ScreenLocationTracker::new();
    let mut anchor = LayoutAnchor::new(Point::new(300.0, 500.0), frame());
    tracker.attach(&mut anchor);
    assert!(tracker.detach(&mut anchor));

    let before = tracker.sample();
    anchor.relayout(Point::new(1.0, 2.0), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(tracker.sample(), before);
    assert_eq!(anchor.listener_count(), 0);
}

#[test]
fn detach_is_idempotent_and_safe_before_attach() {
    let tracker = ScreenLocationTracker::new();
    let mut anchor = LayoutAnchor::new(Point::ZERO, frame());
    assert!(!tracker.detach(&mut anchor));

    tracker.attach(&mut anchor);
    assert!(tracker.detach(&mut anchor));
    assert!(!tracker.detach(&mut anchor));
    assert_eq!(tracker.sample().unwrap().location, Point::ZERO);
}

#[test]
fn double_attach_subscribes_once() {
    let tracker = ScreenLocationTracker::new();
    let mut anchor = LayoutAnchor::new(Point::ZERO, frame());
    tracker.attach(&mut anchor);
    tracker.attach(&mut anchor);
    assert_eq!(anchor.listener_count(), 1);

    anchor.relayout(Point::new(5.0, 5.0), frame());
    assert_eq!(tracker.samples_taken(), 3);
}

#[test]
fn one_tracker_can_follow_several_anchors() {
    let tracker = ScreenLocationTracker::new();
    let mut a = LayoutAnchor::new(Point::new(10.0, 0.0), frame());
    let mut b = LayoutAnchor::new(Point::new(20.0, 0.0), frame());
    tracker.attach(&mut a);
    tracker.attach(&mut b);
    assert_eq!(tracker.sample().unwrap().location.x, 20.0);

    a.relayout(Point::new(11.0, 0.0), frame());
    assert_eq!(tracker.sample().unwrap().location.x, 11.0);

    tracker.detach(&mut a);
    a.relayout(Point::new(12.0, 0.0), frame());
    assert_eq!(tracker.sample().unwrap().location.x, 11.0);
}

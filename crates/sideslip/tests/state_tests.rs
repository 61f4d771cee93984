//! Lifecycle tests: programmatic open/close, events, and settle handling.

mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{count, fixture, fixture_with};
use sideslip::{EventKind, Handler, PanelFlags, PointerEvent};
use sideslip_core::{StyleProperty, StyleValue};

#[test]
fn starts_closed_and_at_rest() {
    let fx = fixture();
    assert_eq!(fx.widget.state(), PanelFlags::CLOSED);
    assert!(fx.widget.state().at_rest());
    assert_eq!(fx.widget.current_offset(), 0.0);
}

#[test]
fn open_settles_through_opening_to_opened() {
    let mut fx = fixture();
    let before_open = count(&mut fx.widget, EventKind::BeforeOpen);
    let opened = count(&mut fx.widget, EventKind::Opened);

    fx.widget.open();
    assert_eq!(fx.widget.state(), PanelFlags::OPENING);
    assert_eq!(before_open.get(), 1);
    assert_eq!(opened.get(), 0);

    fx.settle();
    assert_eq!(fx.widget.state(), PanelFlags::OPENED);
    assert!(fx.widget.state().at_rest());
    assert_eq!(opened.get(), 1);
    assert_eq!(fx.widget.current_offset(), 256.0);
}

#[test]
fn close_settles_through_closing_to_closed() {
    let mut fx = fixture();
    fx.widget.open();
    fx.settle();

    let before_close = count(&mut fx.widget, EventKind::BeforeClose);
    let closed = count(&mut fx.widget, EventKind::Closed);

    fx.widget.close();
    assert_eq!(fx.widget.state(), PanelFlags::CLOSING);
    assert_eq!(before_close.get(), 1);

    fx.settle();
    assert_eq!(fx.widget.state(), PanelFlags::CLOSED);
    assert_eq!(closed.get(), 1);
    assert_eq!(fx.widget.current_offset(), 0.0);
}

#[test]
fn open_while_opened_announces_but_stays_put() {
    let mut fx = fixture();
    fx.widget.open();
    fx.settle();

    let before_open = count(&mut fx.widget, EventKind::BeforeOpen);
    let opened = count(&mut fx.widget, EventKind::Opened);

    fx.widget.open();
    assert_eq!(fx.widget.state(), PanelFlags::OPENED);
    assert_eq!(before_open.get(), 1);
    assert_eq!(opened.get(), 0);

    // No settle is pending either.
    fx.settle();
    assert_eq!(opened.get(), 0);
}

#[test]
fn close_while_closed_announces_but_stays_put() {
    let mut fx = fixture();
    let before_close = count(&mut fx.widget, EventKind::BeforeClose);
    let closed = count(&mut fx.widget, EventKind::Closed);

    fx.widget.close();
    assert_eq!(fx.widget.state(), PanelFlags::CLOSED);
    assert_eq!(before_close.get(), 1);
    assert_eq!(closed.get(), 0);
}

#[test]
fn reissued_open_supersedes_the_pending_settle() {
    let mut fx = fixture();
    let opened = count(&mut fx.widget, EventKind::Opened);

    // The second open finds the open styles already in place, so it
    // completes synchronously and the first settle must never fire.
    fx.widget.open();
    fx.widget.open();
    assert_eq!(fx.widget.state(), PanelFlags::OPENED);
    assert_eq!(opened.get(), 1);

    fx.settle();
    assert_eq!(opened.get(), 1);
}

#[test]
fn close_during_opening_wins_the_settle() {
    let mut fx = fixture();
    let opened = count(&mut fx.widget, EventKind::Opened);
    let closed = count(&mut fx.widget, EventKind::Closed);

    fx.widget.open();
    fx.widget.close();
    assert_eq!(fx.widget.state(), PanelFlags::CLOSING);

    fx.settle();
    assert_eq!(fx.widget.state(), PanelFlags::CLOSED);
    assert_eq!(opened.get(), 0);
    assert_eq!(closed.get(), 1);
}

#[test]
fn foreign_transition_ends_are_ignored() {
    let mut fx = fixture();
    fx.widget.open();

    let other = fx.document.create_element("div");
    fx.widget.handle_transition_end(&other);
    assert_eq!(fx.widget.state(), PanelFlags::OPENING);

    fx.settle();
    assert_eq!(fx.widget.state(), PanelFlags::OPENED);
}

#[test]
fn toggle_infers_direction_from_state() {
    let mut fx = fixture();

    fx.widget.toggle(None);
    assert!(fx.widget.is_opening());
    fx.settle();

    fx.widget.toggle(None);
    assert!(fx.widget.is_closing());

    // Mid-close, another bare toggle reverses course.
    fx.widget.toggle(None);
    assert!(fx.widget.is_opening());

    fx.widget.toggle(Some(false));
    assert!(fx.widget.is_closing());
    fx.settle();
    assert!(fx.widget.is_closed());

    fx.widget.toggle(Some(true));
    assert!(fx.widget.is_opening());
}

#[test]
fn disabled_widget_emits_but_never_moves() {
    let mut fx = fixture();
    let before_open = count(&mut fx.widget, EventKind::BeforeOpen);
    fx.widget.disable();

    fx.widget.open();
    assert_eq!(before_open.get(), 1);
    assert_eq!(fx.widget.state(), PanelFlags::CLOSED);
    assert_eq!(fx.widget.current_offset(), 0.0);

    fx.widget.enable().open();
    assert!(fx.widget.is_opening());
}

#[test]
fn open_panel_class_tracks_the_lifecycle() {
    let mut fx = fixture_with(|options| options.open_panel_class("menu-open"));
    let root = fx.document.root().clone();
    assert!(!root.has_class("menu-open"));

    fx.widget.open();
    assert!(root.has_class("menu-open"));
    fx.settle();
    assert!(root.has_class("menu-open"));

    fx.widget.close();
    assert!(root.has_class("menu-open"));
    fx.settle();
    assert!(!root.has_class("menu-open"));
}

#[test]
fn settle_duration_scales_with_remaining_distance() {
    let mut fx = fixture();

    // Released 140px out of 256: opening only has to cover the rest.
    fx.widget
        .handle_touch_start(&PointerEvent::touch(10.0, 0.0, 0.0))
        .handle_touch_move(&PointerEvent::touch(150.0, 0.0, 100.0))
        .handle_touch_end(&PointerEvent::touch(150.0, 0.0, 100.0));

    // 200ms * (1 - 140/256)
    assert_eq!(
        fx.menu.style(StyleProperty::TransitionDuration),
        Some(StyleValue::Ms(90.625))
    );
}

#[test]
fn close_duration_scales_with_current_offset() {
    let mut fx = fixture();
    fx.widget.open();
    fx.settle();

    // Dragged in to 116px, then released with no real speed.
    fx.widget
        .handle_touch_start(&PointerEvent::touch(240.0, 0.0, 0.0))
        .handle_touch_move(&PointerEvent::touch(100.0, 0.0, 400.0))
        .handle_touch_end(&PointerEvent::touch(100.0, 0.0, 2000.0));

    assert!(fx.widget.is_closing());
    // 200ms * 116/256
    assert_eq!(
        fx.menu.style(StyleProperty::TransitionDuration),
        Some(StyleValue::Ms(90.625))
    );
}

#[test]
fn handlers_run_in_registration_order() {
    let mut fx = fixture();
    let order = Rc::new(RefCell::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let order = order.clone();
        fx.widget.on(
            EventKind::BeforeOpen,
            Handler::new(move |_, _| order.borrow_mut().push(label)),
        );
    }

    fx.widget.open();
    assert_eq!(*order.borrow(), ["first", "second", "third"]);
}

#[test]
fn handlers_receive_the_triggering_pointer_event() {
    let mut fx = fixture();
    let saw_event = Rc::new(RefCell::new(Vec::new()));
    let log = saw_event.clone();
    fx.widget.on(
        EventKind::BeforeOpen,
        Handler::new(move |_, event| log.borrow_mut().push(event.is_some())),
    );

    fx.widget
        .handle_touch_start(&PointerEvent::touch(10.0, 0.0, 0.0))
        .handle_touch_move(&PointerEvent::touch(150.0, 0.0, 100.0))
        .handle_touch_end(&PointerEvent::touch(150.0, 0.0, 100.0));
    fx.settle();
    fx.widget.close();
    fx.settle();
    fx.widget.open();

    // The drag commit and the release decision, then the programmatic open.
    assert_eq!(*saw_event.borrow(), [true, true, false]);
}

#[test]
fn handlers_can_read_widget_state_mid_emission() {
    let mut fx = fixture();
    let state_at_announce = Rc::new(RefCell::new(None));
    let slot = state_at_announce.clone();
    fx.widget.on(
        EventKind::BeforeOpen,
        Handler::new(move |menu, _| *slot.borrow_mut() = Some(menu.state())),
    );

    fx.widget.open();
    // The pre-event fires before the state flips.
    assert_eq!(*state_at_announce.borrow(), Some(PanelFlags::CLOSED));
}

#[test]
fn off_removes_by_identity_or_wholesale() {
    let mut fx = fixture();
    let kept = count(&mut fx.widget, EventKind::Opened);
    let removed = Rc::new(RefCell::new(0));
    let hits = removed.clone();
    let handler = Handler::new(move |_, _| *hits.borrow_mut() += 1);
    fx.widget.on(EventKind::Opened, handler.clone());

    fx.widget.off(EventKind::Opened, Some(&handler));
    fx.widget.open();
    fx.settle();
    assert_eq!(kept.get(), 1);
    assert_eq!(*removed.borrow(), 0);

    fx.widget.off(EventKind::Opened, None);
    fx.widget.close();
    fx.settle();
    fx.widget.open();
    fx.settle();
    assert_eq!(kept.get(), 1);
}

#[test]
fn calls_chain_through_the_facade() {
    let mut fx = fixture();
    fx.widget
        .disable()
        .enable()
        .ignore(".toolbar")
        .unignore(".toolbar")
        .disable_touch()
        .enable_touch()
        .toggle(None);
    assert!(fx.widget.is_opening());
    assert!(fx.widget.touch_enabled());
    assert!(!fx.widget.is_disabled());
}

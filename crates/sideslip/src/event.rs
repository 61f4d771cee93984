//! Lifecycle events and handler registration.
//!
//! Handlers run synchronously, in registration order, with the widget as
//! receiver and the triggering pointer event (if any) as argument. Handler
//! panics are not caught; they propagate to the caller.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use sideslip_core::PointerEvent;

use crate::menu::SideMenu;

/// The widget's lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    BeforeOpen,
    Opened,
    BeforeClose,
    Closed,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::BeforeOpen,
        EventKind::Opened,
        EventKind::BeforeClose,
        EventKind::Closed,
        EventKind::TouchStart,
        EventKind::TouchMove,
        EventKind::TouchEnd,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            EventKind::BeforeOpen => "beforeopen",
            EventKind::Opened => "opened",
            EventKind::BeforeClose => "beforeclose",
            EventKind::Closed => "closed",
            EventKind::TouchStart => "touchstart",
            EventKind::TouchMove => "touchmove",
            EventKind::TouchEnd => "touchend",
        }
    }

    const fn index(self) -> usize {
        match self {
            EventKind::BeforeOpen => 0,
            EventKind::Opened => 1,
            EventKind::BeforeClose => 2,
            EventKind::Closed => 3,
            EventKind::TouchStart => 4,
            EventKind::TouchMove => 5,
            EventKind::TouchEnd => 6,
        }
    }
}

type HandlerFn = dyn FnMut(&mut SideMenu, Option<&PointerEvent>);

/// A registered event handler.
///
/// Clones share identity, so the same [`Handler`] value can be passed to
/// both [`SideMenu::on`] and [`SideMenu::off`].
#[derive(Clone)]
pub struct Handler(Rc<RefCell<HandlerFn>>);

impl Handler {
    pub fn new(f: impl FnMut(&mut SideMenu, Option<&PointerEvent>) + 'static) -> Self {
        Self(Rc::new(RefCell::new(f)))
    }

    pub(crate) fn invoke(&self, menu: &mut SideMenu, event: Option<&PointerEvent>) {
        (self.0.borrow_mut())(menu, event);
    }

    pub(crate) fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Rc::as_ptr(&self.0))
    }
}

/// Per-event handler lists.
#[derive(Debug, Default)]
pub(crate) struct Handlers {
    lists: [Vec<Handler>; 7],
}

impl Handlers {
    pub fn add(&mut self, kind: EventKind, handler: Handler) {
        self.lists[kind.index()].push(handler);
    }

    /// Remove one handler by identity, or all handlers for the event.
    pub fn remove(&mut self, kind: EventKind, handler: Option<&Handler>) {
        let list = &mut self.lists[kind.index()];
        match handler {
            Some(handler) => list.retain(|h| !h.ptr_eq(handler)),
            None => list.clear(),
        }
    }

    /// Snapshot of the registration list, so handlers registered or removed
    /// during dispatch do not affect the current emission.
    pub fn snapshot(&self, kind: EventKind) -> Vec<Handler> {
        self.lists[kind.index()].clone()
    }
}

//! Shared fixtures for the widget test suites.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use sideslip::{Document, Element, EventKind, Handler, Options, SideMenu, create};

pub struct Fixture {
    pub document: Document,
    pub menu: Element,
    pub panel: Element,
    pub widget: SideMenu,
}

/// A 320px-wide viewport with default options.
pub fn fixture() -> Fixture {
    fixture_with(|options| options)
}

pub fn fixture_with(configure: impl FnOnce(Options) -> Options) -> Fixture {
    let document = Document::new(320.0);
    let menu = document.create_element("nav");
    let panel = document.create_element("main");
    document.root().append_child(&panel);

    let options = configure(Options::new(&document, &menu, &panel));
    let widget = create(options).expect("valid options");
    Fixture {
        document,
        menu,
        panel,
        widget,
    }
}

impl Fixture {
    /// Deliver the animated element's transition-end signal.
    pub fn settle(&mut self) {
        let animated = self.widget.animated_element().clone();
        self.widget.handle_transition_end(&animated);
    }
}

/// Register a counting handler and return the shared counter.
pub fn count(widget: &mut SideMenu, kind: EventKind) -> Rc<Cell<usize>> {
    let counter = Rc::new(Cell::new(0));
    let shared = counter.clone();
    widget.on(
        kind,
        Handler::new(move |_, _| shared.set(shared.get() + 1)),
    );
    counter
}

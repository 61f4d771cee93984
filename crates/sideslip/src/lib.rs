//! Swipe-able side menu widget.
//!
//! A [`SideMenu`] binds a menu element and a content panel and owns one
//! horizontal axis between them: touch gestures from the anchored edge drag
//! the pair continuously, and on release a velocity estimate decides whether
//! the menu settles open or closed. Two presentation modes are built in —
//! [`Mode::Drawer`] slides the menu over the panel, [`Mode::Reveal`] slides
//! the panel aside to uncover a fixed menu.
//!
//! Hosts embed the widget by forwarding pointer samples and transition-end
//! signals; see `sideslip-core` for the element substrate.
//!
//! # Quick start
//!
//! ```
//! use sideslip::{Document, EventKind, Handler, Options, PointerEvent, create};
//!
//! let document = Document::new(320.0);
//! let menu = document.create_element("nav");
//! let panel = document.create_element("main");
//! document.root().append_child(&panel);
//!
//! let mut widget = create(Options::new(&document, &menu, &panel)).unwrap();
//! widget.on(EventKind::Opened, Handler::new(|_, _| println!("opened")));
//!
//! // An edge swipe: 10px -> 150px over 100ms, then released.
//! widget
//!     .handle_touch_start(&PointerEvent::touch(10.0, 0.0, 0.0))
//!     .handle_touch_move(&PointerEvent::touch(150.0, 0.0, 100.0))
//!     .handle_touch_end(&PointerEvent::touch(150.0, 0.0, 100.0));
//!
//! // The flick decided "open"; completion arrives with the transition end.
//! let animated = widget.animated_element().clone();
//! widget.handle_transition_end(&animated);
//! assert!(widget.is_opened());
//! ```

pub mod config;
pub mod error;
pub mod event;
mod gesture;
pub mod menu;
mod mode;
mod transition;
mod velocity;

pub use config::{Mode, Options};
pub use error::Error;
pub use event::{EventKind, Handler};
pub use menu::{PanelFlags, SideMenu};
pub use sideslip_core::{Document, Element, PointerEvent, Side, TimingFunction};

/// Build a widget from validated options.
///
/// Fails with [`Error::InvalidArgument`] when a numeric option is outside
/// its domain; parse failures for named values surface as
/// [`Error::UnknownName`] before options are ever assembled.
pub fn create(options: Options) -> Result<SideMenu, Error> {
    SideMenu::create(options)
}

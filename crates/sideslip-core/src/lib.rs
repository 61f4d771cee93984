//! Headless element and style substrate for the sideslip side-menu widget.
//!
//! This crate provides the pieces the widget writes to and reads from:
//! - A retained element model ([`dom`]) with computed styles, class lists and
//!   a left-edge layout calculation
//! - Typed style properties, values and declaration tables ([`style`])
//! - Edge/side geometry ([`geometry`]) and pointer samples ([`pointer`])
//!
//! The element model stands in for a browser DOM: hosts create a [`Document`]
//! with a viewport width, attach menu/panel [`Element`]s to it, and forward
//! pointer samples and transition-end signals into the widget crate.

pub mod alloc;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod pointer;
pub mod style;

pub use dom::{Document, Element, ElementId};
pub use error::NameError;
pub use geometry::Side;
pub use pointer::PointerEvent;
pub use style::{Overflow, StyleProperty, StyleTable, StyleValue, TimingFunction, TransitionSpec};

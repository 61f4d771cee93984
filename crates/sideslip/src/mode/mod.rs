//! Presentation modes.
//!
//! A mode contributes two things: a [`GeometryStrategy`] measuring and
//! applying horizontal displacement, and the static style tables written to
//! the menu and panel at rest and at either end of the transition. The state
//! machines in the rest of the crate depend only on the strategy trait and
//! the tables, never on the mode tag itself.

pub(crate) mod drawer;
pub(crate) mod reveal;

use sideslip_core::{Element, StyleTable};

use crate::config::{Mode, Options};

/// Per-mode measurement and application of horizontal displacement.
pub(crate) trait GeometryStrategy {
    /// Live pull-out distance in pixels: 0 = fully closed, width = fully
    /// open. Reads layout, not stored state, so external movement of the
    /// panel is reflected.
    fn measure_offset(&self) -> f32;

    /// Write a direct displacement during a manual drag.
    fn apply_offset(&self, offset: f32);

    /// The element whose transition-end signal completes a settle.
    fn animated_element(&self) -> &Element;
}

/// Static style tables for one mode.
#[derive(Debug, Clone)]
pub(crate) struct ModeStyles {
    pub base_menu: StyleTable,
    pub base_panel: StyleTable,
    pub open_menu: StyleTable,
    pub open_panel: StyleTable,
    pub closed_menu: StyleTable,
    pub closed_panel: StyleTable,
}

pub(crate) struct ModeParts {
    pub geometry: Box<dyn GeometryStrategy>,
    pub styles: ModeStyles,
}

/// Compile-time mode table; the only place a mode tag is inspected.
pub(crate) fn build(mode: Mode, options: &Options) -> ModeParts {
    match mode {
        Mode::Drawer => drawer::build(options),
        Mode::Reveal => reveal::build(options),
    }
}

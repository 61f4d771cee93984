//! Widget configuration.

use std::str::FromStr;

use sideslip_core::{Document, Element, NameError, Side, TimingFunction};

use crate::error::Error;

/// Presentation mode: whether the menu slides over the panel (`Drawer`) or
/// the panel slides aside to reveal a fixed menu (`Reveal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Drawer,
    Reveal,
}

impl Mode {
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Drawer => "drawer",
            Mode::Reveal => "reveal",
        }
    }
}

impl FromStr for Mode {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drawer" => Ok(Mode::Drawer),
            "reveal" => Ok(Mode::Reveal),
            other => Err(NameError::new("mode", r#""drawer", "reveal""#, other)),
        }
    }
}

/// Construction options for [`crate::create`].
///
/// Immutable once the widget is built; only the disabled and touch guards
/// can be toggled afterwards. Defaults follow the builder methods' docs.
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) document: Document,
    pub(crate) menu: Element,
    pub(crate) panel: Element,
    pub(crate) side: Side,
    pub(crate) mode: Mode,
    pub(crate) margin: f32,
    pub(crate) timing: f32,
    pub(crate) timing_function: TimingFunction,
    pub(crate) width: f32,
    pub(crate) sensitivity: f32,
    pub(crate) slope: f32,
    pub(crate) touch: bool,
    pub(crate) ignore_scrollables: bool,
    pub(crate) open_panel_class: Option<String>,
}

impl Options {
    /// Options for a widget driving `menu` and `panel` inside `document`,
    /// with every other field at its default.
    pub fn new(document: &Document, menu: &Element, panel: &Element) -> Self {
        Self {
            document: document.clone(),
            menu: menu.clone(),
            panel: panel.clone(),
            side: Side::default(),
            mode: Mode::default(),
            margin: 25.0,
            timing: 200.0,
            timing_function: TimingFunction::default(),
            width: 256.0,
            sensitivity: 0.25,
            slope: 0.5,
            touch: true,
            ignore_scrollables: true,
            open_panel_class: None,
        }
    }

    /// Side the menu anchors to. Default: left.
    pub fn side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Presentation mode. Default: drawer.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Touch-activation zone in pixels from the anchored edge. Default: 25.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Base settle-transition duration in milliseconds. Default: 200.
    pub fn timing(mut self, timing: f32) -> Self {
        self.timing = timing;
        self
    }

    /// Settle-transition timing curve. Default: ease.
    pub fn timing_function(mut self, timing_function: TimingFunction) -> Self {
        self.timing_function = timing_function;
        self
    }

    /// Menu width in pixels; also the fully-open offset. Default: 256.
    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Minimum flick speed in px/ms treated as decisive intent. Default: 0.25.
    pub fn sensitivity(mut self, sensitivity: f32) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Maximum |verticalΔ / horizontalΔ| before a gesture is reclassified as
    /// a scroll. Default: 0.5.
    pub fn slope(mut self, slope: f32) -> Self {
        self.slope = slope;
        self
    }

    /// Whether pointer gestures are handled at all. Default: true.
    pub fn touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    /// Whether touches starting inside horizontally scrollable regions are
    /// ignored. Default: true.
    pub fn ignore_scrollables(mut self, ignore_scrollables: bool) -> Self {
        self.ignore_scrollables = ignore_scrollables;
        self
    }

    /// Class added to the document root while open or opening. Default: none.
    pub fn open_panel_class(mut self, class: impl Into<String>) -> Self {
        self.open_panel_class = Some(class.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        fn finite(field: &'static str, value: f32) -> Result<(), Error> {
            if value.is_finite() {
                Ok(())
            } else {
                Err(Error::InvalidArgument {
                    field,
                    expected: "a finite number",
                })
            }
        }

        finite("margin", self.margin)?;
        finite("timing", self.timing)?;
        finite("sensitivity", self.sensitivity)?;
        finite("slope", self.slope)?;
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidArgument {
                field: "width",
                expected: "a finite number greater than zero",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Options {
        let document = Document::new(320.0);
        let menu = document.create_element("nav");
        let panel = document.create_element("main");
        Options::new(&document, &menu, &panel)
    }

    #[test]
    fn defaults_match_documented_values() {
        let opts = options();
        assert_eq!(opts.side, Side::Left);
        assert_eq!(opts.mode, Mode::Drawer);
        assert_eq!(opts.margin, 25.0);
        assert_eq!(opts.timing, 200.0);
        assert_eq!(opts.timing_function, TimingFunction::Ease);
        assert_eq!(opts.width, 256.0);
        assert_eq!(opts.sensitivity, 0.25);
        assert_eq!(opts.slope, 0.5);
        assert!(opts.touch);
        assert!(opts.ignore_scrollables);
        assert_eq!(opts.open_panel_class, None);
    }

    #[test]
    fn validation_rejects_non_finite_numbers() {
        let err = options().margin(f32::NAN).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "margin", .. }));

        let err = options().timing(f32::INFINITY).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "timing", .. }));
    }

    #[test]
    fn validation_rejects_non_positive_width() {
        let err = options().width(0.0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { field: "width", .. }));
        assert!(err.to_string().contains("`width`"));
    }

    #[test]
    fn mode_parses_valid_names_only() {
        assert_eq!("drawer".parse::<Mode>().unwrap(), Mode::Drawer);
        assert_eq!("reveal".parse::<Mode>().unwrap(), Mode::Reveal);
        let err = "overlay".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains(r#""drawer", "reveal""#));
    }
}

//! Typed style declarations written to elements.
//!
//! The widget never produces free-form CSS text; it writes typed property /
//! value pairs collected in ordered [`StyleTable`]s. A table plays the role
//! of one of the per-mode style objects (base / open / closed) and is applied
//! declaration-by-declaration, later declarations overriding earlier ones.

use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// Style properties the widget writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Position,
    Top,
    Bottom,
    Left,
    Right,
    Width,
    ZIndex,
    OverflowX,
    OverflowY,
    Transform,
    Transition,
    TransitionDuration,
}

impl StyleProperty {
    pub const fn as_css(self) -> &'static str {
        match self {
            StyleProperty::Position => "position",
            StyleProperty::Top => "top",
            StyleProperty::Bottom => "bottom",
            StyleProperty::Left => "left",
            StyleProperty::Right => "right",
            StyleProperty::Width => "width",
            StyleProperty::ZIndex => "z-index",
            StyleProperty::OverflowX => "overflow-x",
            StyleProperty::OverflowY => "overflow-y",
            StyleProperty::Transform => "transform",
            StyleProperty::Transition => "transition",
            StyleProperty::TransitionDuration => "transition-duration",
        }
    }
}

/// Overflow behavior keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Auto,
    Scroll,
}

impl Overflow {
    pub const fn as_css(self) -> &'static str {
        match self {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Auto => "auto",
            Overflow::Scroll => "scroll",
        }
    }

    /// Whether content can be panned horizontally through this overflow mode.
    pub const fn scrolls(self) -> bool {
        matches!(self, Overflow::Auto | Overflow::Scroll)
    }
}

/// CSS transition timing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimingFunction {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    StepStart,
    StepEnd,
}

impl TimingFunction {
    pub const fn as_css(self) -> &'static str {
        match self {
            TimingFunction::Linear => "linear",
            TimingFunction::Ease => "ease",
            TimingFunction::EaseIn => "ease-in",
            TimingFunction::EaseOut => "ease-out",
            TimingFunction::EaseInOut => "ease-in-out",
            TimingFunction::StepStart => "step-start",
            TimingFunction::StepEnd => "step-end",
        }
    }
}

const TIMING_FUNCTION_NAMES: &str = r#""linear", "ease", "ease-in", "ease-out", "ease-in-out", "step-start", "step-end""#;

impl FromStr for TimingFunction {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(TimingFunction::Linear),
            "ease" => Ok(TimingFunction::Ease),
            "ease-in" => Ok(TimingFunction::EaseIn),
            "ease-out" => Ok(TimingFunction::EaseOut),
            "ease-in-out" => Ok(TimingFunction::EaseInOut),
            "step-start" => Ok(TimingFunction::StepStart),
            "step-end" => Ok(TimingFunction::StepEnd),
            other => Err(NameError::new("timingFunction", TIMING_FUNCTION_NAMES, other)),
        }
    }
}

/// A transition shorthand: animated property, duration and timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub property: StyleProperty,
    pub duration_ms: f32,
    pub timing: TimingFunction,
}

impl TransitionSpec {
    pub fn transform(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            property: StyleProperty::Transform,
            duration_ms,
            timing,
        }
    }
}

/// Style values the widget writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    /// Raw keyword, e.g. `fixed`.
    Keyword(&'static str),
    /// Pixel length.
    Px(f32),
    /// Duration in milliseconds.
    Ms(f32),
    /// Integer value (z-index).
    Int(i32),
    Overflow(Overflow),
    /// Horizontal translation in pixels.
    TranslateX(f32),
    Transition(TransitionSpec),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Keyword(kw) => f.write_str(kw),
            StyleValue::Px(px) => write!(f, "{px}px"),
            StyleValue::Ms(ms) => write!(f, "{ms}ms"),
            StyleValue::Int(v) => write!(f, "{v}"),
            StyleValue::Overflow(o) => f.write_str(o.as_css()),
            StyleValue::TranslateX(px) => write!(f, "translateX({px}px)"),
            StyleValue::Transition(t) => {
                write!(f, "{} {}ms {}", t.property.as_css(), t.duration_ms, t.timing.as_css())
            }
        }
    }
}

/// An ordered list of style declarations.
///
/// Applied in order, like assigning properties onto an element's inline
/// style. Empty tables are valid and apply nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleTable {
    decls: Vec<(StyleProperty, StyleValue)>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a declaration, builder-style.
    pub fn set(mut self, property: StyleProperty, value: StyleValue) -> Self {
        self.decls.push((property, value));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(StyleProperty, StyleValue)> {
        self.decls.iter()
    }

    /// Last declared value for a property, if any.
    pub fn get(&self, property: StyleProperty) -> Option<StyleValue> {
        self.decls
            .iter()
            .rev()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_declarations_override_earlier_ones() {
        let table = StyleTable::new()
            .set(StyleProperty::Width, StyleValue::Px(100.0))
            .set(StyleProperty::Width, StyleValue::Px(256.0));
        assert_eq!(table.get(StyleProperty::Width), Some(StyleValue::Px(256.0)));
    }

    #[test]
    fn timing_function_parses_all_css_names() {
        for name in [
            "linear",
            "ease",
            "ease-in",
            "ease-out",
            "ease-in-out",
            "step-start",
            "step-end",
        ] {
            let tf: TimingFunction = name.parse().unwrap();
            assert_eq!(tf.as_css(), name);
        }
        assert!("bounce".parse::<TimingFunction>().is_err());
    }

    #[test]
    fn transition_value_renders_shorthand() {
        let value = StyleValue::Transition(TransitionSpec::transform(200.0, TimingFunction::Ease));
        assert_eq!(value.to_string(), "transform 200ms ease");
    }

    #[test]
    fn translate_renders_pixels() {
        assert_eq!(StyleValue::TranslateX(-256.0).to_string(), "translateX(-256px)");
    }
}

//! Edge geometry for side-anchored panels.

use std::str::FromStr;

use crate::error::NameError;
use crate::style::StyleProperty;

/// The viewport edge a menu is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    /// Direction sign for horizontal deltas: dragging the menu out moves
    /// content in `+sign` direction along the x axis.
    pub const fn sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    /// Distance of an x coordinate from this side's viewport edge.
    pub fn edge_distance(self, x: f32, viewport_width: f32) -> f32 {
        match self {
            Side::Left => x,
            Side::Right => viewport_width - x,
        }
    }

    /// The inset style property anchored to this side.
    pub const fn inset_property(self) -> StyleProperty {
        match self {
            Side::Left => StyleProperty::Left,
            Side::Right => StyleProperty::Right,
        }
    }

    pub const fn as_css(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl FromStr for Side {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(NameError::new("side", r#""left", "right""#, other)),
        }
    }
}

//! Reveal mode: the panel slides aside to uncover a fixed menu.
//!
//! The menu is pinned under the panel (`side: 0`, negative z-index) and
//! never moves; the panel carries the transition and the open transform.
//! Offsets are measured from the panel's displacement.

use sideslip_core::{
    Element, Overflow, Side, StyleProperty, StyleTable, StyleValue, TransitionSpec,
};

use crate::config::Options;
use crate::mode::{GeometryStrategy, ModeParts, ModeStyles};

pub(crate) struct RevealGeometry {
    panel: Element,
    side: Side,
}

impl GeometryStrategy for RevealGeometry {
    fn measure_offset(&self) -> f32 {
        // The panel starts at 0 regardless of side; displacement is the offset.
        self.panel.bounding_left(0.0).abs()
    }

    fn apply_offset(&self, offset: f32) {
        self.panel.set_style(
            StyleProperty::Transform,
            StyleValue::TranslateX(offset * self.side.sign()),
        );
    }

    fn animated_element(&self) -> &Element {
        &self.panel
    }
}

pub(crate) fn build(options: &Options) -> ModeParts {
    let side = options.side;
    let width = options.width;

    let base_menu = StyleTable::new()
        .set(StyleProperty::OverflowX, StyleValue::Overflow(Overflow::Hidden))
        .set(StyleProperty::OverflowY, StyleValue::Overflow(Overflow::Auto))
        .set(StyleProperty::Position, StyleValue::Keyword("fixed"))
        .set(side.inset_property(), StyleValue::Px(0.0))
        .set(StyleProperty::Top, StyleValue::Px(0.0))
        .set(StyleProperty::Bottom, StyleValue::Px(0.0))
        .set(StyleProperty::Width, StyleValue::Px(width))
        .set(StyleProperty::ZIndex, StyleValue::Int(-1));

    let base_panel = StyleTable::new().set(
        StyleProperty::Transition,
        StyleValue::Transition(TransitionSpec::transform(
            options.timing,
            options.timing_function,
        )),
    );

    let styles = ModeStyles {
        base_menu,
        base_panel,
        open_menu: StyleTable::new(),
        open_panel: StyleTable::new().set(
            StyleProperty::Transform,
            StyleValue::TranslateX(width * side.sign()),
        ),
        closed_menu: StyleTable::new(),
        closed_panel: StyleTable::new().set(StyleProperty::Transform, StyleValue::TranslateX(0.0)),
    };

    ModeParts {
        geometry: Box::new(RevealGeometry {
            panel: options.panel.clone(),
            side,
        }),
        styles,
    }
}

//! Drawer mode: the menu slides over a stationary panel.
//!
//! The menu sits just beyond the anchored edge (`side: -width`) and the
//! open transform translates it into view; the panel is never styled. The
//! menu is the animated element, so offsets are measured from its left edge.

use sideslip_core::{
    Document, Element, Overflow, Side, StyleProperty, StyleTable, StyleValue, TransitionSpec,
};

use crate::config::Options;
use crate::mode::{GeometryStrategy, ModeParts, ModeStyles};

pub(crate) struct DrawerGeometry {
    document: Document,
    menu: Element,
    side: Side,
    width: f32,
}

impl GeometryStrategy for DrawerGeometry {
    fn measure_offset(&self) -> f32 {
        let left = self.menu.bounding_left(self.document.viewport_width());
        match self.side {
            Side::Left => left + self.width,
            Side::Right => self.document.viewport_width() - left,
        }
    }

    fn apply_offset(&self, offset: f32) {
        self.menu.set_style(
            StyleProperty::Transform,
            StyleValue::TranslateX(offset * self.side.sign()),
        );
    }

    fn animated_element(&self) -> &Element {
        &self.menu
    }
}

pub(crate) fn build(options: &Options) -> ModeParts {
    let side = options.side;
    let width = options.width;

    let base_menu = StyleTable::new()
        .set(
            StyleProperty::Transition,
            StyleValue::Transition(TransitionSpec::transform(
                options.timing,
                options.timing_function,
            )),
        )
        .set(StyleProperty::OverflowX, StyleValue::Overflow(Overflow::Hidden))
        .set(StyleProperty::OverflowY, StyleValue::Overflow(Overflow::Auto))
        .set(StyleProperty::Position, StyleValue::Keyword("fixed"))
        .set(side.inset_property(), StyleValue::Px(-width))
        .set(StyleProperty::Top, StyleValue::Px(0.0))
        .set(StyleProperty::Bottom, StyleValue::Px(0.0))
        .set(StyleProperty::Width, StyleValue::Px(width))
        .set(StyleProperty::ZIndex, StyleValue::Int(1));

    let styles = ModeStyles {
        base_menu,
        base_panel: StyleTable::new(),
        open_menu: StyleTable::new().set(
            StyleProperty::Transform,
            StyleValue::TranslateX(width * side.sign()),
        ),
        open_panel: StyleTable::new(),
        closed_menu: StyleTable::new().set(StyleProperty::Transform, StyleValue::TranslateX(0.0)),
        closed_panel: StyleTable::new(),
    };

    ModeParts {
        geometry: Box::new(DrawerGeometry {
            document: options.document.clone(),
            menu: options.menu.clone(),
            side,
            width,
        }),
        styles,
    }
}

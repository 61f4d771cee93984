//! The side-menu widget: panel lifecycle state machine and public façade.

use bitflags::bitflags;
use sideslip_core::{Document, Element, PointerEvent, Side, StyleProperty, StyleValue};

use crate::config::{Mode, Options};
use crate::error::Error;
use crate::event::{EventKind, Handler, Handlers};
use crate::gesture::DragSession;
use crate::mode::{self, GeometryStrategy, ModeStyles};
use crate::transition::TransitionRegistry;

bitflags! {
    /// Panel lifecycle flags.
    ///
    /// At rest exactly one of `OPENED`/`CLOSED` is set and neither
    /// transition flag is; during a settle or drag the rest flags clear and
    /// at most one of `OPENING`/`CLOSING` is set. `OPENED` and `CLOSED` are
    /// never set simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PanelFlags: u8 {
        const OPENED  = 0b0001;
        const OPENING = 0b0010;
        const CLOSED  = 0b0100;
        const CLOSING = 0b1000;
    }
}

impl PanelFlags {
    /// Whether no transition is in flight.
    pub const fn at_rest(self) -> bool {
        !self.intersects(PanelFlags::OPENING.union(PanelFlags::CLOSING))
    }
}

/// A swipe-able side menu bound to one menu/panel element pair.
///
/// Built through [`crate::create`]. Hosts drive it by forwarding pointer
/// samples to [`handle_touch_start`](Self::handle_touch_start) /
/// [`handle_touch_move`](Self::handle_touch_move) /
/// [`handle_touch_end`](Self::handle_touch_end) and transition completions
/// to [`handle_transition_end`](Self::handle_transition_end) for the
/// [`animated_element`](Self::animated_element).
pub struct SideMenu {
    pub(crate) document: Document,
    pub(crate) menu: Element,
    pub(crate) panel: Element,
    pub(crate) side: Side,
    mode: Mode,
    pub(crate) margin: f32,
    pub(crate) timing: f32,
    pub(crate) width: f32,
    pub(crate) sensitivity: f32,
    pub(crate) slope: f32,
    touch: bool,
    pub(crate) ignore_scrollables: bool,
    open_panel_class: Option<String>,
    pub(crate) ignores: Vec<String>,
    pub(crate) state: PanelFlags,
    disabled: bool,
    pub(crate) geometry: Box<dyn GeometryStrategy>,
    pub(crate) styles: ModeStyles,
    handlers: Handlers,
    pub(crate) transitions: TransitionRegistry,
    pub(crate) session: Option<DragSession>,
}

impl SideMenu {
    pub(crate) fn create(options: Options) -> Result<Self, Error> {
        options.validate()?;

        let parts = mode::build(options.mode, &options);
        let widget = Self {
            document: options.document,
            menu: options.menu,
            panel: options.panel,
            side: options.side,
            mode: options.mode,
            margin: options.margin,
            timing: options.timing,
            width: options.width,
            sensitivity: options.sensitivity,
            slope: options.slope,
            touch: options.touch,
            ignore_scrollables: options.ignore_scrollables,
            open_panel_class: options.open_panel_class,
            ignores: Vec::new(),
            state: PanelFlags::CLOSED,
            disabled: false,
            geometry: parts.geometry,
            styles: parts.styles,
            handlers: Handlers::default(),
            transitions: TransitionRegistry::default(),
            session: None,
        };

        widget.menu.apply(&widget.styles.base_menu);
        widget.menu.apply(&widget.styles.closed_menu);
        widget.panel.apply(&widget.styles.base_panel);
        widget.panel.apply(&widget.styles.closed_panel);

        tracing::debug!(mode = widget.mode.name(), side = widget.side.as_css(), "created side menu");
        Ok(widget)
    }

    /// Current lifecycle flags.
    pub fn state(&self) -> PanelFlags {
        self.state
    }

    pub fn is_opened(&self) -> bool {
        self.state.contains(PanelFlags::OPENED)
    }

    pub fn is_opening(&self) -> bool {
        self.state.contains(PanelFlags::OPENING)
    }

    pub fn is_closed(&self) -> bool {
        self.state.contains(PanelFlags::CLOSED)
    }

    pub fn is_closing(&self) -> bool {
        self.state.contains(PanelFlags::CLOSING)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn touch_enabled(&self) -> bool {
        self.touch
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Live pull-out distance in pixels, measured from layout.
    pub fn current_offset(&self) -> f32 {
        self.geometry.measure_offset()
    }

    /// The element whose transition-end signal hosts must forward to
    /// [`handle_transition_end`](Self::handle_transition_end).
    pub fn animated_element(&self) -> &Element {
        self.geometry.animated_element()
    }

    /// Open the menu.
    pub fn open(&mut self) -> &mut Self {
        self.open_from(None);
        self
    }

    pub(crate) fn open_from(&mut self, event: Option<&PointerEvent>) {
        self.emit(EventKind::BeforeOpen, event);
        if self.disabled || self.state.contains(PanelFlags::OPENED) {
            return;
        }

        tracing::debug!(side = self.side.as_css(), "opening");
        self.state = PanelFlags::OPENING;

        if let Some(class) = &self.open_panel_class {
            self.document.root().add_class(class.clone());
        }

        let offset = self.geometry.measure_offset();
        if offset > 0.0 {
            // A partially-open panel has less distance to travel; scale the
            // duration so perceived velocity stays constant.
            self.set_transition_duration(self.timing * (1.0 - offset / self.width));
        }

        self.menu.apply(&self.styles.open_menu);
        self.panel.apply(&self.styles.open_panel);

        let animated = self.geometry.animated_element().id();
        self.transitions.cancel(animated);
        if offset >= self.width {
            self.finish_open();
        } else {
            self.transitions.schedule(animated, Box::new(SideMenu::finish_open));
        }
    }

    /// Close the menu.
    pub fn close(&mut self) -> &mut Self {
        self.close_from(None);
        self
    }

    pub(crate) fn close_from(&mut self, event: Option<&PointerEvent>) {
        self.emit(EventKind::BeforeClose, event);
        if self.disabled {
            return;
        }
        if self.state.contains(PanelFlags::CLOSED) {
            self.state.remove(PanelFlags::CLOSING);
            return;
        }

        tracing::debug!(side = self.side.as_css(), "closing");
        self.state = PanelFlags::CLOSING;

        let offset = self.geometry.measure_offset();
        if offset > 0.0 {
            self.set_transition_duration(self.timing * offset / self.width);
        }

        self.menu.apply(&self.styles.closed_menu);
        self.panel.apply(&self.styles.closed_panel);

        let animated = self.geometry.animated_element().id();
        self.transitions.cancel(animated);
        if offset <= 0.0 {
            self.finish_close();
        } else {
            self.transitions.schedule(animated, Box::new(SideMenu::finish_close));
        }
    }

    /// Open or close explicitly, or flip based on the current state: a
    /// closed-or-closing menu opens, anything else closes.
    pub fn toggle(&mut self, condition: Option<bool>) -> &mut Self {
        match condition {
            Some(true) => self.open(),
            Some(false) => self.close(),
            None => {
                let should_open = self
                    .state
                    .intersects(PanelFlags::CLOSED | PanelFlags::CLOSING);
                self.toggle(Some(should_open))
            }
        }
    }

    /// Suppress open/close side effects (events still fire).
    pub fn disable(&mut self) -> &mut Self {
        self.disabled = true;
        self
    }

    pub fn enable(&mut self) -> &mut Self {
        self.disabled = false;
        self
    }

    /// Resume handling pointer samples.
    pub fn enable_touch(&mut self) -> &mut Self {
        self.touch = true;
        self
    }

    /// Stop handling pointer samples and drop any in-flight drag session.
    /// The headless analog of removing document touch listeners.
    pub fn disable_touch(&mut self) -> &mut Self {
        self.touch = false;
        self.session = None;
        self
    }

    /// Ignore touches starting on elements matching `selector`.
    pub fn ignore(&mut self, selector: impl Into<String>) -> &mut Self {
        self.ignores.push(selector.into());
        self
    }

    /// Remove a selector from the ignore list. Removes exact matches only.
    pub fn unignore(&mut self, selector: &str) -> &mut Self {
        self.ignores.retain(|s| s != selector);
        self
    }

    /// Register an event handler.
    pub fn on(&mut self, kind: EventKind, handler: Handler) -> &mut Self {
        self.handlers.add(kind, handler);
        self
    }

    /// Remove one handler by identity, or all handlers for the event when
    /// `handler` is `None`.
    pub fn off(&mut self, kind: EventKind, handler: Option<&Handler>) -> &mut Self {
        self.handlers.remove(kind, handler);
        self
    }

    /// Deliver a transition-end signal from the host. Runs the pending
    /// settle callback when `element` is the one it was scheduled for;
    /// anything else (stale or foreign completions) is ignored.
    pub fn handle_transition_end(&mut self, element: &Element) -> &mut Self {
        if let Some(callback) = self.transitions.take(element.id()) {
            callback(self);
        }
        self
    }

    pub(crate) fn emit(&mut self, kind: EventKind, event: Option<&PointerEvent>) {
        let handlers = self.handlers.snapshot(kind);
        if !handlers.is_empty() {
            tracing::trace!(event = kind.name(), handlers = handlers.len(), "emit");
        }
        for handler in handlers {
            handler.invoke(self, event);
        }
    }

    /// Remove transition styling so manual drag writes land instantly, and
    /// make sure no superseded settle can complete underneath the drag.
    pub(crate) fn suppress_transitions(&mut self) {
        for element in [&self.menu, &self.panel] {
            element.clear_style(StyleProperty::Transition);
            element.clear_style(StyleProperty::TransitionDuration);
        }
        self.transitions.cancel(self.geometry.animated_element().id());
    }

    /// Reinstate the base (transition-carrying) styles after a drag.
    pub(crate) fn restore_base_styles(&self) {
        self.panel.apply(&self.styles.base_panel);
        self.menu.apply(&self.styles.base_menu);
    }

    fn set_transition_duration(&self, duration_ms: f32) {
        self.menu
            .set_style(StyleProperty::TransitionDuration, StyleValue::Ms(duration_ms));
        self.panel
            .set_style(StyleProperty::TransitionDuration, StyleValue::Ms(duration_ms));
    }

    fn finish_open(&mut self) {
        self.state = PanelFlags::OPENED;

        // Reassert the open tables in case anything overrode them mid-settle.
        self.menu.apply(&self.styles.open_menu);
        self.panel.apply(&self.styles.open_panel);

        tracing::debug!(side = self.side.as_css(), "opened");
        self.emit(EventKind::Opened, None);
    }

    fn finish_close(&mut self) {
        self.state = PanelFlags::CLOSED;

        self.menu.apply(&self.styles.closed_menu);
        self.panel.apply(&self.styles.closed_panel);

        if let Some(class) = &self.open_panel_class {
            self.document.root().remove_class(class);
        }

        tracing::debug!(side = self.side.as_css(), "closed");
        self.emit(EventKind::Closed, None);
    }
}

impl std::fmt::Debug for SideMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SideMenu")
            .field("mode", &self.mode)
            .field("side", &self.side)
            .field("state", &self.state)
            .field("disabled", &self.disabled)
            .field("touch", &self.touch)
            .finish_non_exhaustive()
    }
}

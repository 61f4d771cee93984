//! The gesture state machine: pointer samples to drag offsets and intent.
//!
//! A gesture moves through three stages: idle (no session), armed (touch
//! landed in the activation region, swipe-vs-scroll undecided) and dragging
//! (committed horizontal swipe). Armed and dragging are one [`DragSession`];
//! the first-move flag distinguishes them.

use glam::Vec2;
use sideslip_core::{PointerEvent, dom};

use crate::event::EventKind;
use crate::menu::{PanelFlags, SideMenu};
use crate::velocity::{self, Sample};

/// Horizontal movement below this many pixels is jitter, not a swipe.
/// Matches the touch-slop conventions of mobile toolkits, slightly widened
/// because edge swipes start from a resting finger.
pub(crate) const DRAG_THRESHOLD: f32 = 10.0;

/// State for one touch gesture. Created when a touch lands inside the
/// activation region, dropped when the gesture ends or is rejected.
#[derive(Debug, Clone)]
pub(crate) struct DragSession {
    /// Touch-down point.
    start: Vec2,
    /// Offset measured at touch-down; drag offsets are relative to it.
    start_offset: f32,
    /// Most recent sample.
    last: Sample,
    /// Sample before `last`, for velocity fallback.
    prev: Sample,
    /// Set until the first qualifying move classifies swipe-vs-scroll.
    first_move: bool,
}

impl SideMenu {
    /// Feed a touch-start sample.
    pub fn handle_touch_start(&mut self, event: &PointerEvent) -> &mut Self {
        if !self.touch_enabled() {
            return self;
        }

        if let Some(target) = &event.target {
            if self.ignores.iter().any(|selector| target.matches(selector)) {
                tracing::trace!(%target, "touch ignored by selector");
                return self;
            }
            if self.ignore_scrollables
                && dom::within_horizontal_scrollable(target, self.document.root())
            {
                tracing::trace!(%target, "touch inside scrollable region");
                return self;
            }
        }

        self.emit(EventKind::TouchStart, Some(event));
        if self.is_disabled() {
            return self;
        }

        self.session = None;
        let Some(point) = event.single_touch() else {
            return self;
        };

        let offset = self.geometry.measure_offset();
        let region = self.margin + offset;
        let distance = self
            .side
            .edge_distance(point.x, self.document.viewport_width());
        if distance <= region {
            let sample = Sample {
                x: point.x,
                time_ms: event.time_ms,
            };
            self.session = Some(DragSession {
                start: point,
                start_offset: offset,
                last: sample,
                prev: sample,
                first_move: true,
            });
            tracing::trace!(x = point.x, offset, "gesture armed");
        }
        self
    }

    /// Feed a touch-move sample.
    pub fn handle_touch_move(&mut self, event: &PointerEvent) -> &mut Self {
        if !self.touch_enabled() {
            return self;
        }

        self.emit(EventKind::TouchMove, Some(event));
        if self.is_disabled() {
            return self;
        }
        // Re-borrowed after emit: a touchmove handler may have torn the
        // session down (e.g. via disable_touch).
        let Some(session) = self.session.as_ref() else {
            return self;
        };
        let (start, start_offset, first_move, last) = (
            session.start,
            session.start_offset,
            session.first_move,
            session.last,
        );
        let Some(point) = event.touches.first().copied() else {
            return self;
        };

        let sign = self.side.sign();
        let diff_x = (point.x - start.x) * sign;
        if diff_x.abs() < DRAG_THRESHOLD {
            return self;
        }

        if first_move {
            let diff_y = point.y - start.y;
            let ratio = (diff_y / diff_x).abs();
            if ratio > self.slope {
                tracing::trace!(ratio, slope = self.slope, "gesture rejected as scroll");
                self.session = None;
                return self;
            }

            if (self.state.contains(PanelFlags::CLOSED) && diff_x > 0.0)
                || self.state.contains(PanelFlags::OPENED)
            {
                self.emit(EventKind::BeforeOpen, Some(event));
            }

            self.suppress_transitions();
            tracing::trace!(diff_x, "gesture committed to drag");
        }

        // Dragging further out while opened (or further in while closed) is
        // a positional refresh: keep the sample fresh, leave state alone.
        if (self.state.contains(PanelFlags::OPENED) && diff_x > 0.0)
            || (self.state.contains(PanelFlags::CLOSED) && diff_x < 0.0)
        {
            if let Some(session) = self.session.as_mut() {
                session.last = Sample {
                    x: point.x,
                    time_ms: event.time_ms,
                };
            }
            return self;
        }

        // Transition flags follow the instantaneous direction, which may
        // flip frame to frame as the finger reverses.
        let dx = (point.x - last.x) * sign;
        self.state = if dx > 0.0 {
            PanelFlags::OPENING
        } else {
            PanelFlags::CLOSING
        };

        let offset = (start_offset + diff_x).clamp(0.0, self.width);
        self.geometry.apply_offset(offset);

        if let Some(session) = self.session.as_mut() {
            session.prev = session.last;
            session.last = Sample {
                x: point.x,
                time_ms: event.time_ms,
            };
            session.first_move = false;
        }
        self
    }

    /// Feed a touch-end sample and resolve intent.
    pub fn handle_touch_end(&mut self, event: &PointerEvent) -> &mut Self {
        if !self.touch_enabled() {
            return self;
        }

        let Some(session) = self.session.take() else {
            return self;
        };
        if session.first_move {
            // Never passed the drag threshold: a tap, not a swipe.
            return self;
        }

        self.emit(EventKind::TouchEnd, Some(event));
        self.restore_base_styles();

        let offset = self.geometry.measure_offset();
        let release_x = event
            .released_touch()
            .map(|point| point.x)
            .unwrap_or(session.last.x);
        let release = Sample {
            x: release_x,
            time_ms: event.time_ms,
        };
        let speed = velocity::release_velocity(release, session.last, session.prev, self.side.sign());
        tracing::trace!(offset, speed, "gesture released");

        // Open on a slow drag past the midpoint (unless flicked shut), or on
        // a decisive flick outward from anywhere.
        if (offset > self.width / 2.0 && speed > -self.sensitivity) || speed > self.sensitivity {
            self.open_from(Some(event));
        } else {
            self.close_from(Some(event));
        }
        self
    }
}

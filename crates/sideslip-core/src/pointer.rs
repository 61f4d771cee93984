//! Pointer samples delivered by the host.
//!
//! Hosts translate their native touch events into [`PointerEvent`]s and feed
//! them to the widget in delivery order. Timestamps ride along with the
//! event so gesture velocity stays deterministic and host-controlled.

use glam::Vec2;
use smallvec::SmallVec;

use crate::dom::Element;

/// One touch event as sampled by the host.
#[derive(Debug, Clone, Default)]
pub struct PointerEvent {
    /// Element the touch landed on, when known. Used for ignore-selector and
    /// scroll-guard checks on touch start.
    pub target: Option<Element>,
    /// Active touch points. Gestures require exactly one.
    pub touches: SmallVec<[Vec2; 2]>,
    /// Touch points lifted by this event (touch end).
    pub changed_touches: SmallVec<[Vec2; 2]>,
    /// Event timestamp in milliseconds. Any monotonic host clock works as
    /// long as it is consistent within one gesture.
    pub time_ms: f64,
}

impl PointerEvent {
    /// A single-point touch sample at `(x, y)`.
    pub fn touch(x: f32, y: f32, time_ms: f64) -> Self {
        let point = Vec2::new(x, y);
        Self {
            target: None,
            touches: SmallVec::from_slice(&[point]),
            changed_touches: SmallVec::from_slice(&[point]),
            time_ms,
        }
    }

    /// Builder: the element the touch landed on.
    pub fn with_target(mut self, target: &Element) -> Self {
        self.target = Some(target.clone());
        self
    }

    /// Builder: replace the active touch list (multi-touch events).
    pub fn with_touches(mut self, touches: &[Vec2]) -> Self {
        self.touches = SmallVec::from_slice(touches);
        self
    }

    /// The single active touch point, if there is exactly one.
    pub fn single_touch(&self) -> Option<Vec2> {
        match self.touches.as_slice() {
            [point] => Some(*point),
            _ => None,
        }
    }

    /// First lifted touch point of a touch-end event.
    pub fn released_touch(&self) -> Option<Vec2> {
        self.changed_touches.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_touch_requires_exactly_one_point() {
        let one = PointerEvent::touch(10.0, 20.0, 0.0);
        assert_eq!(one.single_touch(), Some(Vec2::new(10.0, 20.0)));

        let two = PointerEvent::touch(10.0, 20.0, 0.0)
            .with_touches(&[Vec2::new(10.0, 20.0), Vec2::new(50.0, 60.0)]);
        assert_eq!(two.single_touch(), None);

        let none = PointerEvent::touch(10.0, 20.0, 0.0).with_touches(&[]);
        assert_eq!(none.single_touch(), None);
    }
}

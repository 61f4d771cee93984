//! One-shot settle callbacks keyed by element.
//!
//! A settle-driven open/close registers a callback here to run when the
//! animated element reports transition completion. Scheduling while a
//! callback is still pending supersedes it: the superseded callback is
//! dropped and can never fire, which keeps an interrupted settle from
//! completing out of order.

use sideslip_core::ElementId;
use sideslip_core::alloc::HashMap;

use crate::menu::SideMenu;

pub(crate) type SettleFn = Box<dyn FnOnce(&mut SideMenu)>;

/// At most one live registration per element.
#[derive(Default)]
pub(crate) struct TransitionRegistry {
    pending: HashMap<ElementId, SettleFn>,
}

impl TransitionRegistry {
    /// Register `callback` for the element's next transition completion,
    /// superseding any pending registration.
    pub fn schedule(&mut self, element: ElementId, callback: SettleFn) {
        if self.pending.insert(element, callback).is_some() {
            tracing::trace!(?element, "superseded pending settle callback");
        }
    }

    /// Drop a pending registration without running it.
    pub fn cancel(&mut self, element: ElementId) {
        if self.pending.remove(&element).is_some() {
            tracing::trace!(?element, "cancelled pending settle callback");
        }
    }

    /// Take the pending callback for a completed transition, if any.
    pub fn take(&mut self, element: ElementId) -> Option<SettleFn> {
        self.pending.remove(&element)
    }
}

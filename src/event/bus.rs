use std::cell::RefCell;

use crate::event::{EditorEvent, EventHandler};

/// Fans editor notifications out to the subscribed handlers, in
/// subscription order.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.handlers.try_borrow() {
            Ok(handlers) => write!(f, "EventBus(<{} handlers>)", handlers.len()),
            Err(_) => f.write_str("EventBus(<dispatching>)"),
        }
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Deliver `event` to every handler.
    ///
    /// An emit from inside a handler is dropped with a warning and returns
    /// false, so a handler can never observe events out of order.
    pub fn emit(&self, event: EditorEvent) -> bool {
        let Ok(mut handlers) = self.handlers.try_borrow_mut() else {
            log::warn!("Dropping {:?} emitted while another event is being delivered", event);
            return false;
        };
        log::trace!("Delivering {:?} to {} handlers", event, handlers.len());
        for handler in handlers.iter_mut() {
            handler.handle_event(&event);
        }
        true
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.try_borrow().map_or(0, |handlers| handlers.len())
    }
}

//! Event listeners for interactive nodes.
//!
//! A built node is plain markup once serialised, so listeners travel next to
//! the node (see [`TextNode`](crate::element::TextNode)) and are invoked by
//! whatever host displays the scene.

use std::{fmt, sync::Arc};

use log::trace;

/// Callback invoked when an event fires on a node.
///
/// Handlers are `Send + Sync` so nodes carrying them can move between threads
/// like any other built node.
pub type Handler = Arc<dyn Fn() + Send + Sync>;

/// Events a node can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Pointer click
    Click,
}

impl Event {
    /// Returns the DOM name of this event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
        }
    }
}

/// Listeners registered on a single node, in registration order.
#[derive(Clone, Default)]
pub struct Listeners {
    entries: Vec<(Event, Handler)>,
}

impl Listeners {
    /// Creates an empty listener set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `event`.
    pub fn add(&mut self, event: Event, handler: Handler) {
        self.entries.push((event, handler));
    }

    /// Invokes every handler registered for `event` and returns how many ran.
    pub fn dispatch(&self, event: Event) -> usize {
        let mut invoked = 0;
        for (_, handler) in self.entries.iter().filter(|(e, _)| *e == event) {
            handler();
            invoked += 1;
        }
        trace!(event = event.name(), invoked; "Dispatched event");
        invoked
    }

    /// Returns `true` if at least one handler is registered for `event`.
    pub fn has(&self, event: Event) -> bool {
        self.entries.iter().any(|(e, _)| *e == event)
    }

    /// Returns `true` if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(event, _)| event))
            .finish()
    }
}

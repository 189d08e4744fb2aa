//! Change notifications
//!
//! One subscription interface for everything the manager announces.

use std::sync::Arc;

use crate::tab::Tab;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// The collection was replaced by a new value
    TabsChanged { tabs: Arc<Vec<Tab>> },
    /// The active selection moved
    ActiveChanged {
        previous: Option<String>,
        current: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&TabEvent)>;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Deliver to listeners in subscription order.
    pub(crate) fn emit(&mut self, event: &TabEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }
}

//! Tab Manager
//!
//! Owns the ordered page collection and the active selection. Operations
//! never fail: a reference to a missing tab or a blank name leaves state
//! untouched and is reported through the `bool`/`Option` return value.
//!
//! Every change is announced to subscribers and written through to the
//! attached [`TabPersistence`], in that order.

use std::sync::Arc;

use crate::event::{SubscriptionId, Subscribers, TabEvent};
use crate::page_type::PageType;
use crate::persistence::{TabPersistence, TabSnapshot};
use crate::reorder::{array_move, is_permutation, reorder_by_id};
use crate::tab::{default_tabs, Tab, TabUpdate};
use crate::Result;

pub struct TabManager {
    /// Current collection; replaced wholesale on every change
    tabs: Arc<Vec<Tab>>,
    /// `None` only while the collection is empty
    active_tab_id: Option<String>,
    subscribers: Subscribers,
    persistence: Option<TabPersistence>,
}

impl TabManager {
    /// Build a manager over `tabs`.
    ///
    /// An `active_tab_id` that is missing or names no tab falls back to the
    /// first tab.
    pub fn new(tabs: Vec<Tab>, active_tab_id: Option<&str>) -> Result<Self> {
        let snapshot = TabSnapshot::new(tabs, active_tab_id);
        snapshot.validate()?;
        Ok(Self::from_snapshot(snapshot))
    }

    /// Build from an already validated record.
    fn from_snapshot(snapshot: TabSnapshot) -> Self {
        let active_tab_id = snapshot
            .active_tab_id()
            .map(str::to_string)
            .or_else(|| snapshot.tabs.first().map(|t| t.id.clone()));

        Self {
            tabs: Arc::new(snapshot.tabs),
            active_tab_id,
            subscribers: Subscribers::default(),
            persistence: None,
        }
    }

    /// The default four-page collection with the first page active.
    pub fn with_defaults() -> Self {
        let tabs = default_tabs();
        let active_tab_id = tabs.first().map(|t| t.id.clone());

        Self {
            tabs: Arc::new(tabs),
            active_tab_id,
            subscribers: Subscribers::default(),
            persistence: None,
        }
    }

    /// Rehydrate from `persistence`, falling back to the defaults, and keep
    /// writing through to it afterwards.
    pub fn init(persistence: TabPersistence) -> Self {
        let mut manager = persistence
            .load()
            .map(Self::from_snapshot)
            .unwrap_or_else(Self::with_defaults);

        tracing::info!(
            key = %persistence.key(),
            tab_count = manager.len(),
            active_tab_id = manager.active_tab_id().unwrap_or_default(),
            "Initialized tab manager"
        );

        manager.persistence = Some(persistence);
        manager
    }

    /// Detach persistence, returning it.
    pub fn detach_persistence(&mut self) -> Option<TabPersistence> {
        self.persistence.take()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TabEvent) + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    // Accessors

    pub fn tabs(&self) -> Arc<Vec<Tab>> {
        Arc::clone(&self.tabs)
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_deref()
            .and_then(|id| self.get_tab(id))
    }

    pub fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    pub fn position(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn snapshot(&self) -> TabSnapshot {
        TabSnapshot::new(self.tabs.to_vec(), self.active_tab_id())
    }

    // Selection

    /// Select a tab. Missing and disabled tabs are ignored.
    pub fn set_active_tab(&mut self, tab_id: &str) -> bool {
        let Some(tab) = self.get_tab(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Ignoring selection of unknown tab");
            return false;
        };

        if tab.disabled {
            tracing::debug!(tab_id = %tab_id, "Ignoring selection of disabled tab");
            return false;
        }

        if self.active_tab_id.as_deref() == Some(tab_id) {
            return false;
        }

        let previous = self.active_tab_id.replace(tab_id.to_string());
        self.subscribers.emit(&TabEvent::ActiveChanged {
            previous,
            current: self.active_tab_id.clone(),
        });
        self.persist();
        true
    }

    // Creation

    /// Append a "Page N" tab. Returns its id.
    pub fn add_tab(&mut self) -> String {
        let tab = Tab::new_page(self.len());
        let index = self.len();
        self.insert(index, tab)
    }

    /// Insert a "New N" tab at `index`, clamped to the collection length.
    pub fn add_tab_at_index(&mut self, index: usize) -> String {
        let tab = Tab::new_insert(self.len());
        self.insert(index, tab)
    }

    /// Append a tab with a chosen type and name. `None` if the name is blank.
    pub fn add_tab_with_type(&mut self, page_type: PageType, name: &str) -> Option<String> {
        let index = self.len();
        self.add_tab_at_index_with_type(index, page_type, name)
    }

    /// Insert a tab with a chosen type and name at `index`. `None` if the
    /// name is blank.
    pub fn add_tab_at_index_with_type(
        &mut self,
        index: usize,
        page_type: PageType,
        name: &str,
    ) -> Option<String> {
        match Tab::named(page_type, name) {
            Ok(tab) => Some(self.insert(index, tab)),
            Err(e) => {
                tracing::debug!(page_type = %page_type, error = %e, "Refusing to add tab");
                None
            }
        }
    }

    /// Insert a copy right after the original. Returns the copy's id.
    pub fn duplicate_tab(&mut self, tab_id: &str) -> Option<String> {
        let index = self.position(tab_id)?;
        let copy = self.tabs[index].duplicate();
        Some(self.insert(index + 1, copy))
    }

    // Removal and updates

    /// Remove a tab. The last tab may be removed; guarding that is up to the
    /// caller.
    pub fn remove_tab(&mut self, tab_id: &str) -> bool {
        let Some(index) = self.position(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Ignoring removal of unknown tab");
            return false;
        };

        let mut tabs = self.tabs.to_vec();
        tabs.remove(index);
        self.replace_tabs(tabs);

        tracing::info!(tab_id = %tab_id, remaining = self.len(), "Removed tab");
        true
    }

    /// Merge `update` into a tab. The id cannot be changed.
    pub fn update_tab(&mut self, tab_id: &str, update: TabUpdate) -> bool {
        let Some(index) = self.position(tab_id) else {
            tracing::debug!(tab_id = %tab_id, "Ignoring update of unknown tab");
            return false;
        };

        let mut tabs = self.tabs.to_vec();
        if !tabs[index].apply(update) {
            return false;
        }

        self.replace_tabs(tabs);
        true
    }

    /// Rename a tab. Blank names are ignored.
    pub fn rename_tab(&mut self, tab_id: &str, name: &str) -> bool {
        if name.trim().is_empty() {
            tracing::debug!(tab_id = %tab_id, "Ignoring blank rename");
            return false;
        }
        self.update_tab(tab_id, TabUpdate::new().label(name))
    }

    // Ordering

    /// Replace the collection with a permutation of itself.
    ///
    /// Anything that adds, drops, or repeats an id is rejected.
    pub fn reorder_tabs(&mut self, new_tabs: Vec<Tab>) -> bool {
        if !is_permutation(&self.tabs, &new_tabs) {
            tracing::warn!(
                current = self.len(),
                proposed = new_tabs.len(),
                "Rejecting reorder that is not a permutation of the current tabs"
            );
            return false;
        }

        if new_tabs == *self.tabs {
            return false;
        }

        self.replace_tabs(new_tabs);
        true
    }

    /// Drop `from_id` onto the position of `to_id`.
    pub fn move_tab(&mut self, from_id: &str, to_id: &str) -> bool {
        if from_id == to_id {
            return false;
        }

        reorder_by_id(self.tabs.as_slice(), from_id, to_id)
            .is_some_and(|tabs| self.reorder_tabs(tabs))
    }

    /// Move a tab to the front of the collection.
    pub fn set_as_first_page(&mut self, tab_id: &str) -> bool {
        match self.position(tab_id) {
            Some(0) | None => false,
            Some(index) => {
                let reordered = array_move(self.tabs.as_slice(), index, 0);
                self.reorder_tabs(reordered)
            }
        }
    }

    // Lifecycle

    /// Restore the default collection and selection.
    pub fn reset(&mut self) {
        let tabs = default_tabs();
        let active_tab_id = tabs.first().map(|t| t.id.clone());
        let previous = std::mem::replace(&mut self.active_tab_id, active_tab_id);

        self.tabs = Arc::new(tabs);
        self.notify(previous);
        self.persist();

        tracing::info!("Reset tabs to defaults");
    }

    fn insert(&mut self, index: usize, tab: Tab) -> String {
        let index = index.min(self.len());
        let id = tab.id.clone();

        let mut tabs = self.tabs.to_vec();
        tabs.insert(index, tab);
        self.replace_tabs(tabs);

        tracing::info!(tab_id = %id, index, "Added tab");
        id
    }

    /// Install a new collection, repair the selection, then notify and
    /// persist.
    fn replace_tabs(&mut self, tabs: Vec<Tab>) {
        self.tabs = Arc::new(tabs);

        let still_present = self
            .active_tab_id
            .as_deref()
            .is_some_and(|id| self.tabs.iter().any(|t| t.id == id));

        let previous = if still_present {
            self.active_tab_id.clone()
        } else {
            let first = self.tabs.first().map(|t| t.id.clone());
            std::mem::replace(&mut self.active_tab_id, first)
        };

        self.notify(previous);
        self.persist();
    }

    fn notify(&mut self, previous_active: Option<String>) {
        self.subscribers.emit(&TabEvent::TabsChanged {
            tabs: Arc::clone(&self.tabs),
        });

        if previous_active != self.active_tab_id {
            self.subscribers.emit(&TabEvent::ActiveChanged {
                previous: previous_active,
                current: self.active_tab_id.clone(),
            });
        }
    }

    fn persist(&self) {
        if let Some(persistence) = &self.persistence {
            persistence.save(&self.snapshot());
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for TabManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabManager")
            .field("tabs", &self.tabs)
            .field("active_tab_id", &self.active_tab_id)
            .field("subscribers", &self.subscribers.len())
            .field("persistent", &self.persistence.is_some())
            .finish()
    }
}

//! Page tab workspace
//!
//! The caller-owned state container: one tab manager, the store it writes
//! through to, and the pending add-page flow. Nothing here is global; build
//! one per editor and drop it when the editor goes away.

use std::sync::Arc;

use folio_storage::{Database, KeyValueStore, MemoryStore};
use folio_tabs::{PageType, TabManager, TabPersistence};

use crate::config::Config;
use crate::flow::AddPageFlow;
use crate::menu::{self, MenuAction, MenuOutcome};
use crate::Result;

pub struct Workspace {
    config: Config,
    tabs: TabManager,
    add_page: AddPageFlow,
}

impl Workspace {
    /// Open the SQLite-backed workspace described by `config`.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;

        tracing::info!(
            database = %config.database_path.display(),
            key = %config.storage_key,
            "Opening workspace"
        );

        Ok(Self::with_store(config, Arc::new(db)))
    }

    /// Workspace over any key-value store.
    pub fn with_store(config: Config, store: Arc<dyn KeyValueStore>) -> Self {
        let persistence = TabPersistence::with_key(store, config.storage_key.clone());
        let tabs = TabManager::init(persistence);

        Self {
            config,
            tabs,
            add_page: AddPageFlow::default(),
        }
    }

    /// Volatile workspace, mostly for tests and previews.
    pub fn in_memory() -> Self {
        Self::with_store(Config::default(), Arc::new(MemoryStore::new()))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabManager {
        &mut self.tabs
    }

    /// Select a tab from the strip.
    pub fn select_tab(&mut self, tab_id: &str) -> bool {
        self.tabs.set_active_tab(tab_id)
    }

    /// Finish a drag of `from_id` over `to_id`.
    pub fn drop_tab(&mut self, from_id: &str, to_id: &str) -> bool {
        self.tabs.move_tab(from_id, to_id)
    }

    // Add-page flow

    pub fn add_page_flow(&self) -> &AddPageFlow {
        &self.add_page
    }

    pub fn open_add_page(&mut self) -> bool {
        self.add_page.open_trailing()
    }

    pub fn open_inline_add_page(&mut self, index: usize) -> bool {
        self.add_page.open_inline(index)
    }

    pub fn select_page_type(&mut self, page_type: PageType) -> bool {
        self.add_page.select_type(page_type)
    }

    pub fn close_page_type_chooser(&mut self) -> bool {
        self.add_page.close()
    }

    pub fn cancel_page_name(&mut self) -> bool {
        self.add_page.cancel()
    }

    pub fn submit_page_name(&mut self, name: &str) -> Option<String> {
        self.add_page.submit(name, &mut self.tabs)
    }

    // Context menu

    pub fn apply_menu_action(&mut self, tab_id: &str, action: MenuAction) -> Result<MenuOutcome> {
        menu::dispatch(&mut self.tabs, tab_id, action)
    }

    /// Back to the default pages, with any pending flow abandoned.
    pub fn reset(&mut self) {
        self.add_page = AddPageFlow::Idle;
        self.tabs.reset();
    }
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("config", &self.config)
            .field("tabs", &self.tabs)
            .field("add_page", &self.add_page)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(dir: &tempfile::TempDir) -> Config {
        Config::new(dir.path().join("nested"))
    }

    #[test]
    fn test_fresh_workspace_has_default_pages() {
        let workspace = Workspace::in_memory();
        let labels: Vec<String> = workspace.tabs().tabs().iter().map(|t| t.label.clone()).collect();
        assert_eq!(labels, vec!["Info", "Details", "Other", "Ending"]);
        assert_eq!(workspace.tabs().active_tab_id(), Some("info"));
        assert!(!workspace.add_page_flow().is_open());
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let added = {
            let mut workspace = Workspace::open(temp_config(&dir)).unwrap();
            workspace.open_inline_add_page(1);
            workspace.select_page_type(PageType::Login);
            let id = workspace.submit_page_name("Sign in").unwrap();
            workspace.select_tab(&id);
            workspace.drop_tab("ending", "info");
            id
        };

        let workspace = Workspace::open(temp_config(&dir)).unwrap();
        let ids: Vec<String> = workspace.tabs().tabs().iter().map(|t| t.id.clone()).collect();
        assert_eq!(
            ids,
            vec![
                "ending".to_string(),
                "info".to_string(),
                added.clone(),
                "details".to_string(),
                "other".to_string()
            ]
        );
        assert_eq!(workspace.tabs().active_tab_id(), Some(added.as_str()));
    }

    #[test]
    fn test_custom_storage_key_isolates_state() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());

        let mut config = Config::new(PathBuf::from("unused"));
        config.storage_key = "survey-tabs".to_string();
        let mut first = Workspace::with_store(config, store.clone());
        first.tabs_mut().remove_tab("info");

        let other = Workspace::with_store(Config::new(PathBuf::from("unused")), store.clone());
        assert_eq!(other.tabs().len(), 4);
        assert!(store.get("survey-tabs").unwrap().is_some());
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = temp_config(&dir);
        config.storage_key.clear();
        assert!(Workspace::open(config).is_err());
    }

    #[test]
    fn test_menu_and_reset() {
        let mut workspace = Workspace::in_memory();

        let outcome = workspace
            .apply_menu_action("other", MenuAction::SetAsFirstPage)
            .unwrap();
        assert_eq!(outcome, MenuOutcome::Applied);
        assert_eq!(workspace.tabs().position("other"), Some(0));

        workspace.open_add_page();
        workspace.reset();
        assert!(!workspace.add_page_flow().is_open());
        assert_eq!(workspace.tabs().position("info"), Some(0));
    }
}

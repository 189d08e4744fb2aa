//! Folio Core
//!
//! Wires a key-value store, the tab persistence adapter and a tab manager
//! into one caller-owned [`Workspace`], and adds the page-creation flow and
//! per-tab menu actions on top.

mod config;
mod error;
mod flow;
mod menu;
mod workspace;

pub use config::Config;
pub use error::CoreError;
pub use flow::AddPageFlow;
pub use menu::{MenuAction, MenuOutcome};
pub use workspace::Workspace;

pub use folio_storage::{Database, KeyValueStore, MemoryStore, StorageError};
pub use folio_tabs::{
    page_type_info, selectable_page_types, PageType, PageTypeInfo, SubscriptionId, Tab, TabError,
    TabEvent, TabManager, TabPersistence, TabSnapshot, TabUpdate,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

//! Folio Tab Management
//!
//! The ordered collection of form pages shown as a horizontal tab strip,
//! and the single active selection pointing into it.
//!
//! Every mutation replaces the collection with a new value, so observers can
//! detect changes with [`std::sync::Arc::ptr_eq`].

pub mod catalog;
mod error;
mod event;
mod manager;
mod page_type;
mod persistence;
pub mod reorder;
mod tab;

pub use catalog::{page_type_info, selectable_page_types, PageTypeInfo};
pub use error::TabError;
pub use event::{SubscriptionId, TabEvent};
pub use manager::TabManager;
pub use page_type::PageType;
pub use persistence::{TabPersistence, TabSnapshot};
pub use tab::{default_tabs, generate_tab_id, Tab, TabUpdate};

pub type Result<T> = std::result::Result<T, TabError>;

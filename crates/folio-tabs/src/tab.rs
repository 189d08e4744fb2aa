//! Tab data structure
//!
//! A tab is one page of a multi-step form. Its id is the only identity;
//! labels are cosmetic and may repeat.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TabError;
use crate::page_type::PageType;
use crate::Result;

const NEW_PAGE_PREFIX: &str = "Page";
const NEW_TAB_PREFIX: &str = "New";
const COPY_SUFFIX: &str = " (Copy)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier, fixed for the tab's lifetime
    pub id: String,
    /// Display name
    pub label: String,
    /// Descriptive page type; absent reads as `document`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    /// Disabled tabs cannot be selected
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

/// Partial update merged into an existing tab. The id is not part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabUpdate {
    pub label: Option<String>,
    pub page_type: Option<PageType>,
    pub disabled: Option<bool>,
}

impl TabUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn page_type(mut self, page_type: PageType) -> Self {
        self.page_type = Some(page_type);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

/// Generate a tab id of the form `{prefix}-{uuid}`.
///
/// UUIDv7 carries a millisecond timestamp followed by random bits.
pub fn generate_tab_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::now_v7().simple())
}

/// The collection a fresh workspace starts with.
pub fn default_tabs() -> Vec<Tab> {
    vec![
        Tab::new("info", "Info", Some(PageType::Info)),
        Tab::new("details", "Details", Some(PageType::Document)),
        Tab::new("other", "Other", Some(PageType::Document)),
        Tab::new("ending", "Ending", Some(PageType::Completed)),
    ]
}

impl Tab {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        page_type: Option<PageType>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            page_type,
            disabled: false,
        }
    }

    /// Trailing "add page" tab, numbered after the current collection size.
    pub fn new_page(existing: usize) -> Self {
        Self::new(
            generate_tab_id("page"),
            format!("{} {}", NEW_PAGE_PREFIX, existing + 1),
            Some(PageType::Document),
        )
    }

    /// Inline insertion tab, numbered after the current collection size.
    pub fn new_insert(existing: usize) -> Self {
        Self::new(
            generate_tab_id("new"),
            format!("{} {}", NEW_TAB_PREFIX, existing + 1),
            Some(PageType::Document),
        )
    }

    /// Tab created from the page-type chooser with a user supplied name.
    pub fn named(page_type: PageType, name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TabError::EmptyLabel);
        }

        Ok(Self::new(generate_tab_id("page"), name, Some(page_type)))
    }

    /// Copy with a fresh id and a "(Copy)" label. The copy is enabled.
    pub fn duplicate(&self) -> Self {
        Self::new(
            generate_tab_id("page"),
            format!("{}{}", self.label, COPY_SUFFIX),
            self.page_type,
        )
    }

    pub fn effective_type(&self) -> PageType {
        self.page_type.unwrap_or(PageType::Document)
    }

    /// Merge an update, returning whether anything changed.
    ///
    /// A label that is blank after trimming is ignored.
    pub fn apply(&mut self, update: TabUpdate) -> bool {
        let mut changed = false;

        if let Some(label) = update.label {
            let label = label.trim();
            if !label.is_empty() && label != self.label {
                self.label = label.to_string();
                changed = true;
            }
        }

        if let Some(page_type) = update.page_type {
            if self.page_type != Some(page_type) {
                self.page_type = Some(page_type);
                changed = true;
            }
        }

        if let Some(disabled) = update.disabled {
            if self.disabled != disabled {
                self.disabled = disabled;
                changed = true;
            }
        }

        changed
    }
}

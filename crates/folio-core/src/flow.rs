//! Add-page flow
//!
//! Adding a page takes two steps: pick a page type, then name the page.
//! Either step can be abandoned without touching the tab collection.
//!
//! ```text
//! Idle
//!   ↓ open_trailing / open_inline(index)
//! ChoosingType ── close ──→ Idle
//!   ↓ select_type
//! Naming ── cancel ──→ Idle
//!   ↓ submit(non-blank name)
//! Idle
//! ```

use folio_tabs::{PageType, TabManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddPageFlow {
    #[default]
    Idle,
    /// Page type chooser is open
    ChoosingType {
        /// Insertion point; `None` appends
        index: Option<usize>,
    },
    /// Page name entry is open
    Naming {
        index: Option<usize>,
        page_type: PageType,
    },
}

impl AddPageFlow {
    /// Start from the trailing "Add page" button.
    pub fn open_trailing(&mut self) -> bool {
        self.open(None)
    }

    /// Start from the inline add button in front of position `index`.
    pub fn open_inline(&mut self, index: usize) -> bool {
        self.open(Some(index))
    }

    fn open(&mut self, index: Option<usize>) -> bool {
        if !matches!(self, AddPageFlow::Idle) {
            return false;
        }
        *self = AddPageFlow::ChoosingType { index };
        true
    }

    pub fn select_type(&mut self, page_type: PageType) -> bool {
        let AddPageFlow::ChoosingType { index } = *self else {
            return false;
        };
        *self = AddPageFlow::Naming { index, page_type };
        true
    }

    /// Dismiss the type chooser.
    pub fn close(&mut self) -> bool {
        if !matches!(self, AddPageFlow::ChoosingType { .. }) {
            return false;
        }
        *self = AddPageFlow::Idle;
        true
    }

    /// Dismiss the name entry, discarding the chosen type.
    pub fn cancel(&mut self) -> bool {
        if !matches!(self, AddPageFlow::Naming { .. }) {
            return false;
        }
        *self = AddPageFlow::Idle;
        true
    }

    /// Commit the page. A blank name keeps the name entry open.
    pub fn submit(&mut self, name: &str, tabs: &mut TabManager) -> Option<String> {
        let AddPageFlow::Naming { index, page_type } = *self else {
            return None;
        };

        let id = match index {
            Some(index) => tabs.add_tab_at_index_with_type(index, page_type, name),
            None => tabs.add_tab_with_type(page_type, name),
        }?;

        *self = AddPageFlow::Idle;
        Some(id)
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, AddPageFlow::Idle)
    }

    pub fn insertion_index(&self) -> Option<usize> {
        match self {
            AddPageFlow::Idle => None,
            AddPageFlow::ChoosingType { index } | AddPageFlow::Naming { index, .. } => *index,
        }
    }

    pub fn page_type(&self) -> Option<PageType> {
        match self {
            AddPageFlow::Naming { page_type, .. } => Some(*page_type),
            _ => None,
        }
    }

    /// Separator kept highlighted while an inline insertion is pending.
    pub fn highlighted_separator(&self) -> Option<usize> {
        self.insertion_index()?.checked_sub(1)
    }
}

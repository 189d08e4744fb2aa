//! Per-tab context menu actions

use folio_tabs::TabManager;

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    SetAsFirstPage,
    Rename(String),
    /// Produce a clipboard payload for the tab
    Copy,
    Duplicate,
    /// Deleting the only remaining page needs `confirmed`
    Delete { confirmed: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    Applied,
    Duplicated(String),
    /// JSON encoding of the tab
    Copied(String),
    ConfirmationRequired,
    /// Unknown tab, or the action changed nothing
    Ignored,
}

impl MenuOutcome {
    fn from_applied(applied: bool) -> Self {
        if applied {
            MenuOutcome::Applied
        } else {
            MenuOutcome::Ignored
        }
    }
}

pub(crate) fn dispatch(tabs: &mut TabManager, tab_id: &str, action: MenuAction) -> Result<MenuOutcome> {
    let Some(tab) = tabs.get_tab(tab_id) else {
        tracing::debug!(tab_id = %tab_id, ?action, "Menu action on unknown tab");
        return Ok(MenuOutcome::Ignored);
    };

    let outcome = match action {
        MenuAction::SetAsFirstPage => MenuOutcome::from_applied(tabs.set_as_first_page(tab_id)),
        MenuAction::Rename(name) => MenuOutcome::from_applied(tabs.rename_tab(tab_id, &name)),
        MenuAction::Copy => MenuOutcome::Copied(serde_json::to_string(tab)?),
        MenuAction::Duplicate => match tabs.duplicate_tab(tab_id) {
            Some(id) => MenuOutcome::Duplicated(id),
            None => MenuOutcome::Ignored,
        },
        MenuAction::Delete { confirmed } => {
            if tabs.len() == 1 && !confirmed {
                MenuOutcome::ConfirmationRequired
            } else {
                MenuOutcome::from_applied(tabs.remove_tab(tab_id))
            }
        }
    };

    Ok(outcome)
}

//! Property-based tests for tab collection operations.
//!
//! Any sequence of operations must leave ids pairwise distinct and, while
//! the collection is non-empty, an active id that names a present tab.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use folio_tabs::{PageType, Tab, TabEvent, TabManager, TabUpdate};
use proptest::prelude::*;

/// Operations applied to the manager. Indices pick an existing tab modulo
/// the current length.
#[derive(Debug, Clone)]
enum TabOp {
    Add,
    AddAt(usize),
    AddNamed(usize, String),
    Remove(usize),
    Duplicate(usize),
    Select(usize),
    Disable(usize, bool),
    Rename(usize, String),
    Move(usize, usize),
    SetFirst(usize),
    Reset,
}

fn arb_page_name() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), Just("   ".to_string()), "[a-zA-Z ]{1,12}"]
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(TabOp::Add),
            2 => (0..20usize).prop_map(TabOp::AddAt),
            2 => (0..20usize, arb_page_name()).prop_map(|(i, n)| TabOp::AddNamed(i, n)),
            4 => (0..20usize).prop_map(TabOp::Remove),
            2 => (0..20usize).prop_map(TabOp::Duplicate),
            3 => (0..20usize).prop_map(TabOp::Select),
            1 => (0..20usize, any::<bool>()).prop_map(|(i, d)| TabOp::Disable(i, d)),
            1 => (0..20usize, arb_page_name()).prop_map(|(i, n)| TabOp::Rename(i, n)),
            2 => (0..20usize, 0..20usize).prop_map(|(a, b)| TabOp::Move(a, b)),
            1 => (0..20usize).prop_map(TabOp::SetFirst),
            1 => Just(TabOp::Reset),
        ],
        1..80,
    )
}

fn pick(manager: &TabManager, idx: usize) -> Option<String> {
    let tabs = manager.tabs();
    if tabs.is_empty() {
        return None;
    }
    Some(tabs[idx % tabs.len()].id.clone())
}

fn apply(manager: &mut TabManager, op: &TabOp) {
    match op {
        TabOp::Add => {
            manager.add_tab();
        }
        TabOp::AddAt(index) => {
            manager.add_tab_at_index(*index);
        }
        TabOp::AddNamed(index, name) => {
            manager.add_tab_at_index_with_type(*index, PageType::Form, name);
        }
        TabOp::Remove(idx) => {
            if let Some(id) = pick(manager, *idx) {
                manager.remove_tab(&id);
            }
        }
        TabOp::Duplicate(idx) => {
            if let Some(id) = pick(manager, *idx) {
                manager.duplicate_tab(&id);
            }
        }
        TabOp::Select(idx) => {
            if let Some(id) = pick(manager, *idx) {
                manager.set_active_tab(&id);
            }
        }
        TabOp::Disable(idx, disabled) => {
            if let Some(id) = pick(manager, *idx) {
                manager.update_tab(&id, TabUpdate::new().disabled(*disabled));
            }
        }
        TabOp::Rename(idx, name) => {
            if let Some(id) = pick(manager, *idx) {
                manager.rename_tab(&id, name);
            }
        }
        TabOp::Move(from, to) => {
            if let (Some(from), Some(to)) = (pick(manager, *from), pick(manager, *to)) {
                manager.move_tab(&from, &to);
            }
        }
        TabOp::SetFirst(idx) => {
            if let Some(id) = pick(manager, *idx) {
                manager.set_as_first_page(&id);
            }
        }
        TabOp::Reset => manager.reset(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ids_unique_and_active_valid(ops in arb_tab_ops()) {
        let mut manager = TabManager::default();

        for op in &ops {
            apply(&mut manager, op);

            let tabs = manager.tabs();
            let ids: HashSet<&str> = tabs.iter().map(|t| t.id.as_str()).collect();
            prop_assert_eq!(ids.len(), tabs.len(), "duplicate id after {:?}", op);

            match manager.active_tab_id() {
                Some(active) => prop_assert!(
                    ids.contains(active),
                    "active {} missing after {:?}",
                    active,
                    op
                ),
                None => prop_assert!(tabs.is_empty(), "selection unset after {:?}", op),
            }

            prop_assert!(
                tabs.iter().all(|t| !t.label.trim().is_empty()),
                "blank label after {:?}",
                op
            );
        }
    }

    #[test]
    fn removed_ids_never_come_back(ops in arb_tab_ops()) {
        let mut manager = TabManager::new(Vec::new(), None).unwrap();
        let mut retired: HashSet<String> = HashSet::new();

        for op in &ops {
            if matches!(op, TabOp::Reset) {
                continue;
            }

            let before: HashSet<String> = manager.tabs().iter().map(|t| t.id.clone()).collect();
            apply(&mut manager, op);
            let after: HashSet<String> = manager.tabs().iter().map(|t| t.id.clone()).collect();

            for id in after.difference(&before) {
                prop_assert!(!retired.contains(id), "id {} reused", id);
            }
            retired.extend(before.difference(&after).cloned());
        }
    }

    #[test]
    fn drag_move_preserves_relative_order(len in 2..12usize, from in 0..12usize, to in 0..12usize) {
        let tabs: Vec<Tab> = (0..len)
            .map(|i| Tab::new(format!("t{}", i), format!("T{}", i), None))
            .collect();
        let mut manager = TabManager::new(tabs.clone(), None).unwrap();

        let moved = tabs[from % len].id.clone();
        let target = tabs[to % len].id.clone();
        manager.move_tab(&moved, &target);

        let result = manager.tabs();
        prop_assert_eq!(result.len(), len);
        prop_assert_eq!(manager.position(&moved), Some(to % len));

        let rest_before: Vec<&str> = tabs.iter().map(|t| t.id.as_str()).filter(|id| *id != moved).collect();
        let rest_after: Vec<&str> = result.iter().map(|t| t.id.as_str()).filter(|id| *id != moved).collect();
        prop_assert_eq!(rest_before, rest_after);
    }

    #[test]
    fn repeated_selection_notifies_once(idx in 0..4usize) {
        let mut manager = TabManager::default();
        let target = manager.tabs()[idx].id.clone();
        let changes = Rc::new(RefCell::new(0usize));
        let sink = Rc::clone(&changes);
        manager.subscribe(move |event| {
            if matches!(event, TabEvent::ActiveChanged { .. }) {
                *sink.borrow_mut() += 1;
            }
        });

        manager.set_active_tab(&target);
        let once = manager.snapshot();
        manager.set_active_tab(&target);

        prop_assert_eq!(manager.snapshot(), once);
        let expected = if idx == 0 { 0 } else { 1 };
        prop_assert_eq!(*changes.borrow(), expected);
    }
}

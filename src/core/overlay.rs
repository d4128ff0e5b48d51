//! Requirement views — the two ingredient tables an overlay renders.
//!
//! The current view lists what the stage underway consumes, the future view
//! aggregates everything the remaining stages will ask for. Both keep rows
//! in stage order and sum quantities when the same item appears twice.

use indexmap::IndexMap;

use crate::core::items;
use crate::core::types::{Inventory, ItemId, StageNode};

/// One row of a requirement table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementEntry {
    pub name: &'static str,
    pub required: u32,
    pub held: u32,
}

/// An ordered item table. Insertion order is stage order, so earlier
/// needs render first.
#[derive(Debug, Clone, Default)]
pub struct RequirementView {
    entries: IndexMap<ItemId, RequirementEntry>,
}

impl RequirementView {
    fn add(&mut self, item: ItemId, quantity: u32, inventory: &Inventory) {
        let entry = self.entries.entry(item).or_insert_with(|| RequirementEntry {
            name: items::display_name(item),
            required: 0,
            held: inventory.count(item),
        });
        entry.required += quantity;
    }

    /// Re-read held counts from a fresh snapshot without touching the
    /// required totals or the row order.
    pub fn refresh_counts(&mut self, inventory: &Inventory) {
        for (item, entry) in &mut self.entries {
            entry.held = inventory.count(*item);
        }
    }

    pub fn get(&self, item: ItemId) -> Option<&RequirementEntry> {
        self.entries.get(&item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &RequirementEntry)> + '_ {
        self.entries.iter().map(|(item, entry)| (*item, entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build the current-stage and future-stage tables in one pass over the
/// plan from `current` to the end.
pub fn build_views(
    stages: &[StageNode],
    current: usize,
    inventory: &Inventory,
) -> (RequirementView, RequirementView) {
    let mut current_view = RequirementView::default();
    let mut future_view = RequirementView::default();
    for (index, node) in stages.iter().enumerate().skip(current) {
        if index == current {
            // The item that carried us into this stage is consumed by it,
            // so it still belongs in the table.
            if let Some(produced) = node.produced {
                current_view.add(produced, 1, inventory);
            }
            for requirement in &node.required {
                current_view.add(requirement.item, requirement.quantity, inventory);
            }
        } else {
            for requirement in &node.required {
                future_view.add(requirement.item, requirement.quantity, inventory);
            }
        }
    }
    (current_view, future_view)
}

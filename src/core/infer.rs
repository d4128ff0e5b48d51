//! Stage inference — deduce progress from an inventory snapshot.

use crate::core::types::{Inventory, StageNode};

/// Find the furthest stage past `current` whose entry item the inventory
/// holds. Scans backwards so late evidence beats early evidence, and never
/// looks at or before `current`, so a session cannot regress.
///
/// Evidence is possession, not provenance: an unrelated copy of a later
/// intermediate (a banked finished dish, say) advances the session early.
pub fn infer(stages: &[StageNode], inventory: &Inventory, current: usize) -> Option<usize> {
    for index in (current + 1..stages.len()).rev() {
        if let Some(produced) = stages[index].produced {
            if inventory.contains(produced) {
                return Some(index);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::items;
    use crate::core::stages::build_stages;
    use crate::core::types::ItemId;
    use proptest::prelude::*;

    fn stages_for(name: &str) -> Vec<StageNode> {
        let catalog = Catalog::standard().unwrap();
        build_stages(catalog.lookup(name).unwrap())
    }

    fn holding(items: &[(ItemId, u32)]) -> Inventory {
        items.iter().copied().collect()
    }

    #[test]
    fn test_no_evidence_returns_none() {
        let stages = stages_for("tangled toads legs");
        assert_eq!(infer(&stages, &Inventory::new(), 0), None);
    }

    #[test]
    fn test_final_item_jumps_to_deliver() {
        let stages = stages_for("tangled toads legs");
        let inventory = holding(&[(items::TANGLED_TOADS_LEGS, 1)]);
        assert_eq!(infer(&stages, &inventory, 0), Some(4));
    }

    #[test]
    fn test_intermediate_advances() {
        let stages = stages_for("tangled toads legs");
        let inventory = holding(&[(items::HALF_BAKED_BOWL, 1)]);
        assert_eq!(infer(&stages, &inventory, 0), Some(2));
    }

    #[test]
    fn test_latest_evidence_wins() {
        let stages = stages_for("tangled toads legs");
        let inventory = holding(&[
            (items::HALF_BAKED_BOWL, 1),
            (items::HALF_MADE_BOWL, 1),
        ]);
        assert_eq!(infer(&stages, &inventory, 0), Some(3));
    }

    #[test]
    fn test_never_regresses() {
        let stages = stages_for("tangled toads legs");
        let inventory = holding(&[(items::RAW_GNOMEBOWL, 1)]);
        assert_eq!(infer(&stages, &inventory, 2), None);
    }

    #[test]
    fn test_current_stage_evidence_is_not_progress() {
        let stages = stages_for("tangled toads legs");
        let inventory = holding(&[(items::HALF_BAKED_BOWL, 1)]);
        assert_eq!(infer(&stages, &inventory, 2), None);
    }

    #[test]
    fn test_at_deliver_returns_none() {
        let stages = stages_for("tangled toads legs");
        let inventory = holding(&[
            (items::RAW_GNOMEBOWL, 1),
            (items::HALF_BAKED_BOWL, 1),
            (items::HALF_MADE_BOWL, 1),
            (items::TANGLED_TOADS_LEGS, 1),
        ]);
        let last = stages.len() - 1;
        assert_eq!(infer(&stages, &inventory, last), None);
    }

    const DRAGON_ITEMS: [ItemId; 7] = [
        items::MIXED_DRAGON,
        items::MIXED_DRAGON_9575,
        items::MIXED_DRAGON_9576,
        items::DRUNK_DRAGON,
        items::VODKA,
        items::GIN,
        items::COCKTAIL_GLASS,
    ];

    proptest! {
        #[test]
        fn prop_inferred_stage_always_advances(
            counts in proptest::collection::vec(0u32..3, 7),
            start in 0usize..5,
        ) {
            let stages = stages_for("drunk dragon");
            let inventory: Inventory =
                DRAGON_ITEMS.iter().copied().zip(counts.iter().copied()).collect();
            if let Some(next) = infer(&stages, &inventory, start) {
                prop_assert!(next > start);
                prop_assert!(next < stages.len());
            }
        }

        #[test]
        fn prop_inference_reaches_a_fixpoint(
            counts in proptest::collection::vec(0u32..3, 7),
            start in 0usize..5,
        ) {
            let stages = stages_for("drunk dragon");
            let inventory: Inventory =
                DRAGON_ITEMS.iter().copied().zip(counts.iter().copied()).collect();
            let mut current = start;
            let mut hops = 0;
            while let Some(next) = infer(&stages, &inventory, current) {
                prop_assert!(next > current);
                current = next;
                hops += 1;
                prop_assert!(hops < stages.len());
            }
            // Once settled, the same snapshot reports nothing new.
            prop_assert_eq!(infer(&stages, &inventory, current), None);
        }
    }
}

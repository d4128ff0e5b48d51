//! Item ids and display names for everything the recipes touch.
//!
//! Ids mirror the game cache. Several intermediates share a display name
//! (every half-made bowl looks the same in-game), so name lookups resolve
//! to the first, unsuffixed variant; callers that need a specific variant
//! address it by id.

use crate::core::types::ItemId;

// ============================================================================
// Ingredients
// ============================================================================

pub const KING_WORM: ItemId = ItemId(2162);
pub const ONION: ItemId = ItemId(1957);
pub const GNOME_SPICE: ItemId = ItemId(2169);
pub const EQUA_LEAVES: ItemId = ItemId(2128);
pub const POTATO: ItemId = ItemId(1942);
pub const TOADS_LEGS: ItemId = ItemId(2152);
pub const CHEESE: ItemId = ItemId(1985);
pub const DWELLBERRIES: ItemId = ItemId(2126);
pub const CHOCOLATE_BAR: ItemId = ItemId(1973);
pub const CHOCOLATE_DUST: ItemId = ItemId(1975);
pub const POT_OF_CREAM: ItemId = ItemId(2130);
pub const TOMATO: ItemId = ItemId(1982);
pub const CABBAGE: ItemId = ItemId(1965);
pub const PINEAPPLE: ItemId = ItemId(2114);
pub const PINEAPPLE_CHUNKS: ItemId = ItemId(2116);
pub const LEMON: ItemId = ItemId(2102);
pub const LEMON_CHUNKS: ItemId = ItemId(2104);
pub const LEMON_SLICES: ItemId = ItemId(2106);
pub const ORANGE: ItemId = ItemId(2108);
pub const ORANGE_CHUNKS: ItemId = ItemId(2110);
pub const ORANGE_SLICES: ItemId = ItemId(2112);
pub const LIME: ItemId = ItemId(2120);
pub const LIME_CHUNKS: ItemId = ItemId(2122);
pub const LIME_SLICES: ItemId = ItemId(2124);
pub const VODKA: ItemId = ItemId(2015);
pub const WHISKY: ItemId = ItemId(2017);
pub const GIN: ItemId = ItemId(2019);
pub const BRANDY: ItemId = ItemId(2021);
pub const BUCKET_OF_MILK: ItemId = ItemId(1927);

// ============================================================================
// Tools and packaging
// ============================================================================

pub const GIANNE_DOUGH: ItemId = ItemId(2171);
pub const GNOMEBOWL_MOULD: ItemId = ItemId(2166);
pub const BATTA_TIN: ItemId = ItemId(2164);
pub const CRUNCHY_TRAY: ItemId = ItemId(2165);
pub const COCKTAIL_SHAKER: ItemId = ItemId(2025);
pub const COCKTAIL_GLASS: ItemId = ItemId(2026);
pub const ALUFT_ALOFT_BOX: ItemId = ItemId(4613);

// ============================================================================
// Bakeware line intermediates
// ============================================================================

pub const RAW_GNOMEBOWL: ItemId = ItemId(2178);
pub const HALF_BAKED_BOWL: ItemId = ItemId(2177);
pub const RAW_BATTA: ItemId = ItemId(2250);
pub const HALF_BAKED_BATTA: ItemId = ItemId(2249);
pub const RAW_CRUNCHIES: ItemId = ItemId(2202);
pub const HALF_BAKED_CRUNCHY: ItemId = ItemId(2201);

// ============================================================================
// Per-recipe intermediates
// ============================================================================

pub const HALF_MADE_BOWL: ItemId = ItemId(9558);
pub const HALF_MADE_BOWL_9559: ItemId = ItemId(9559);
pub const HALF_MADE_BOWL_9561: ItemId = ItemId(9561);
pub const HALF_MADE_BOWL_9563: ItemId = ItemId(9563);
pub const UNFINISHED_BOWL_9560: ItemId = ItemId(9560);
pub const UNFINISHED_BOWL_9562: ItemId = ItemId(9562);
pub const UNFINISHED_BOWL_9564: ItemId = ItemId(9564);

pub const HALF_MADE_BATTA: ItemId = ItemId(9478);
pub const HALF_MADE_BATTA_9480: ItemId = ItemId(9480);
pub const HALF_MADE_BATTA_9482: ItemId = ItemId(9482);
pub const HALF_MADE_BATTA_9483: ItemId = ItemId(9483);
pub const HALF_MADE_BATTA_9485: ItemId = ItemId(9485);
pub const UNFINISHED_BATTA_9479: ItemId = ItemId(9479);
pub const UNFINISHED_BATTA_9481: ItemId = ItemId(9481);
pub const UNFINISHED_BATTA_9484: ItemId = ItemId(9484);
pub const UNFINISHED_BATTA_9486: ItemId = ItemId(9486);

pub const HALF_MADE_CRUNCHY: ItemId = ItemId(9577);
pub const HALF_MADE_CRUNCHY_9579: ItemId = ItemId(9579);
pub const HALF_MADE_CRUNCHY_9581: ItemId = ItemId(9581);
pub const HALF_MADE_CRUNCHY_9583: ItemId = ItemId(9583);
pub const UNFINISHED_CRUNCHY_9578: ItemId = ItemId(9578);
pub const UNFINISHED_CRUNCHY_9580: ItemId = ItemId(9580);
pub const UNFINISHED_CRUNCHY_9582: ItemId = ItemId(9582);
pub const UNFINISHED_CRUNCHY_9584: ItemId = ItemId(9584);

pub const MIXED_BLAST: ItemId = ItemId(9514);
pub const MIXED_PUNCH: ItemId = ItemId(9512);
pub const MIXED_BLIZZARD: ItemId = ItemId(9508);
pub const MIXED_SGG: ItemId = ItemId(9510);
pub const MIXED_SPECIAL: ItemId = ItemId(9520);
pub const MIXED_DRAGON: ItemId = ItemId(9574);
pub const MIXED_DRAGON_9575: ItemId = ItemId(9575);
pub const MIXED_DRAGON_9576: ItemId = ItemId(9576);
pub const MIXED_SATURDAY: ItemId = ItemId(9571);
pub const MIXED_SATURDAY_9572: ItemId = ItemId(9572);
pub const MIXED_SATURDAY_9573: ItemId = ItemId(9573);

// ============================================================================
// Finished dishes and drinks
// ============================================================================

pub const WORM_HOLE: ItemId = ItemId(2191);
pub const VEG_BALL: ItemId = ItemId(2195);
pub const TANGLED_TOADS_LEGS: ItemId = ItemId(2187);
pub const CHOCOLATE_BOMB: ItemId = ItemId(2185);
pub const FRUIT_BATTA: ItemId = ItemId(2277);
pub const TOAD_BATTA: ItemId = ItemId(2255);
pub const WORM_BATTA: ItemId = ItemId(2253);
pub const VEGETABLE_BATTA: ItemId = ItemId(2281);
pub const CHEESETOM_BATTA: ItemId = ItemId(2259);
pub const CHOCCHIP_CRUNCHIES: ItemId = ItemId(2209);
pub const SPICY_CRUNCHIES: ItemId = ItemId(2213);
pub const TOAD_CRUNCHIES: ItemId = ItemId(2217);
pub const WORM_CRUNCHIES: ItemId = ItemId(2205);
pub const FRUIT_BLAST: ItemId = ItemId(2084);
pub const PINEAPPLE_PUNCH: ItemId = ItemId(2048);
pub const WIZARD_BLIZZARD: ItemId = ItemId(2054);
pub const SHORT_GREEN_GUY: ItemId = ItemId(2080);
pub const DRUNK_DRAGON: ItemId = ItemId(2092);
pub const CHOC_SATURDAY: ItemId = ItemId(2074);
pub const BLURBERRY_SPECIAL: ItemId = ItemId(2064);

// ============================================================================
// Display names
// ============================================================================

const NAMES: &[(ItemId, &str)] = &[
    // Ingredients
    (KING_WORM, "King worm"),
    (ONION, "Onion"),
    (GNOME_SPICE, "Gnome spice"),
    (EQUA_LEAVES, "Equa leaves"),
    (POTATO, "Potato"),
    (TOADS_LEGS, "Toad's legs"),
    (CHEESE, "Cheese"),
    (DWELLBERRIES, "Dwellberries"),
    (CHOCOLATE_BAR, "Chocolate bar"),
    (CHOCOLATE_DUST, "Chocolate dust"),
    (POT_OF_CREAM, "Pot of cream"),
    (TOMATO, "Tomato"),
    (CABBAGE, "Cabbage"),
    (PINEAPPLE, "Pineapple"),
    (PINEAPPLE_CHUNKS, "Pineapple chunks"),
    (LEMON, "Lemon"),
    (LEMON_CHUNKS, "Lemon chunks"),
    (LEMON_SLICES, "Lemon slices"),
    (ORANGE, "Orange"),
    (ORANGE_CHUNKS, "Orange chunks"),
    (ORANGE_SLICES, "Orange slices"),
    (LIME, "Lime"),
    (LIME_CHUNKS, "Lime chunks"),
    (LIME_SLICES, "Lime slices"),
    (VODKA, "Vodka"),
    (WHISKY, "Whisky"),
    (GIN, "Gin"),
    (BRANDY, "Brandy"),
    (BUCKET_OF_MILK, "Bucket of milk"),
    // Tools and packaging
    (GIANNE_DOUGH, "Gianne dough"),
    (GNOMEBOWL_MOULD, "Gnomebowl mould"),
    (BATTA_TIN, "Batta tin"),
    (CRUNCHY_TRAY, "Crunchy tray"),
    (COCKTAIL_SHAKER, "Cocktail shaker"),
    (COCKTAIL_GLASS, "Cocktail glass"),
    (ALUFT_ALOFT_BOX, "Aluft aloft box"),
    // Bakeware line intermediates
    (RAW_GNOMEBOWL, "Raw gnomebowl"),
    (HALF_BAKED_BOWL, "Half baked bowl"),
    (RAW_BATTA, "Raw batta"),
    (HALF_BAKED_BATTA, "Half baked batta"),
    (RAW_CRUNCHIES, "Raw crunchies"),
    (HALF_BAKED_CRUNCHY, "Half baked crunchy"),
    // Per-recipe intermediates (unsuffixed variants first)
    (HALF_MADE_BOWL, "Half made bowl"),
    (HALF_MADE_BOWL_9559, "Half made bowl"),
    (HALF_MADE_BOWL_9561, "Half made bowl"),
    (HALF_MADE_BOWL_9563, "Half made bowl"),
    (UNFINISHED_BOWL_9560, "Unfinished bowl"),
    (UNFINISHED_BOWL_9562, "Unfinished bowl"),
    (UNFINISHED_BOWL_9564, "Unfinished bowl"),
    (HALF_MADE_BATTA, "Half made batta"),
    (HALF_MADE_BATTA_9480, "Half made batta"),
    (HALF_MADE_BATTA_9482, "Half made batta"),
    (HALF_MADE_BATTA_9483, "Half made batta"),
    (HALF_MADE_BATTA_9485, "Half made batta"),
    (UNFINISHED_BATTA_9479, "Unfinished batta"),
    (UNFINISHED_BATTA_9481, "Unfinished batta"),
    (UNFINISHED_BATTA_9484, "Unfinished batta"),
    (UNFINISHED_BATTA_9486, "Unfinished batta"),
    (HALF_MADE_CRUNCHY, "Half made crunchy"),
    (HALF_MADE_CRUNCHY_9579, "Half made crunchy"),
    (HALF_MADE_CRUNCHY_9581, "Half made crunchy"),
    (HALF_MADE_CRUNCHY_9583, "Half made crunchy"),
    (UNFINISHED_CRUNCHY_9578, "Unfinished crunchy"),
    (UNFINISHED_CRUNCHY_9580, "Unfinished crunchy"),
    (UNFINISHED_CRUNCHY_9582, "Unfinished crunchy"),
    (UNFINISHED_CRUNCHY_9584, "Unfinished crunchy"),
    (MIXED_BLAST, "Mixed blast"),
    (MIXED_PUNCH, "Mixed punch"),
    (MIXED_BLIZZARD, "Mixed blizzard"),
    (MIXED_SGG, "Mixed sgg"),
    (MIXED_SPECIAL, "Mixed special"),
    (MIXED_DRAGON, "Mixed dragon"),
    (MIXED_DRAGON_9575, "Mixed dragon"),
    (MIXED_DRAGON_9576, "Mixed dragon"),
    (MIXED_SATURDAY, "Mixed saturday"),
    (MIXED_SATURDAY_9572, "Mixed saturday"),
    (MIXED_SATURDAY_9573, "Mixed saturday"),
    // Finished dishes and drinks
    (WORM_HOLE, "Worm hole"),
    (VEG_BALL, "Veg ball"),
    (TANGLED_TOADS_LEGS, "Tangled toads legs"),
    (CHOCOLATE_BOMB, "Chocolate bomb"),
    (FRUIT_BATTA, "Fruit batta"),
    (TOAD_BATTA, "Toad batta"),
    (WORM_BATTA, "Worm batta"),
    (VEGETABLE_BATTA, "Vegetable batta"),
    (CHEESETOM_BATTA, "Cheese+tom batta"),
    (CHOCCHIP_CRUNCHIES, "Chocchip crunchies"),
    (SPICY_CRUNCHIES, "Spicy crunchies"),
    (TOAD_CRUNCHIES, "Toad crunchies"),
    (WORM_CRUNCHIES, "Worm crunchies"),
    (FRUIT_BLAST, "Fruit blast"),
    (PINEAPPLE_PUNCH, "Pineapple punch"),
    (WIZARD_BLIZZARD, "Wizard blizzard"),
    (SHORT_GREEN_GUY, "Short green guy"),
    (DRUNK_DRAGON, "Drunk dragon"),
    (CHOC_SATURDAY, "Choc saturday"),
    (BLURBERRY_SPECIAL, "Blurberry special"),
];

/// Display name for a known item id.
pub fn name(item: ItemId) -> Option<&'static str> {
    NAMES
        .iter()
        .find(|(id, _)| *id == item)
        .map(|(_, name)| *name)
}

/// Display name with a placeholder for ids outside the table. Catalog
/// validation keeps recipe data inside the table, so the placeholder only
/// shows up for hand-built test data.
pub fn display_name(item: ItemId) -> &'static str {
    name(item).unwrap_or("Unknown item")
}

/// Reverse lookup by display name, case-insensitive. Returns the first
/// matching id, so shared names resolve to the unsuffixed variant.
pub fn by_name(name: &str) -> Option<ItemId> {
    NAMES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for (id, _) in NAMES {
            assert!(seen.insert(*id), "duplicate id {} in name table", id);
        }
    }

    #[test]
    fn test_name_lookup() {
        assert_eq!(name(KING_WORM), Some("King worm"));
        assert_eq!(name(ItemId(1)), None);
        assert_eq!(display_name(ItemId(1)), "Unknown item");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(by_name("gnome spice"), Some(GNOME_SPICE));
        assert_eq!(by_name("GNOME SPICE"), Some(GNOME_SPICE));
        assert_eq!(by_name("mud pie"), None);
    }

    #[test]
    fn test_by_name_prefers_unsuffixed_variant() {
        assert_eq!(by_name("Half made bowl"), Some(HALF_MADE_BOWL));
        assert_eq!(by_name("Half made batta"), Some(HALF_MADE_BATTA));
        assert_eq!(by_name("Mixed dragon"), Some(MIXED_DRAGON));
    }

    #[test]
    fn test_tools_named() {
        for id in [
            GIANNE_DOUGH,
            GNOMEBOWL_MOULD,
            BATTA_TIN,
            CRUNCHY_TRAY,
            COCKTAIL_SHAKER,
            COCKTAIL_GLASS,
            ALUFT_ALOFT_BOX,
        ] {
            assert!(name(id).is_some());
        }
    }
}

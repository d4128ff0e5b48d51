//! The fixed order catalog — every known recipe, validated once at load.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::core::error::Error;
use crate::core::items;
use crate::core::types::{Bakeware, Category, HeatTiming, Ingredient, ItemId, RecipeDef};

// ============================================================================
// Recipe table
// ============================================================================

static RECIPES: &[RecipeDef] = &[
    // Gnomebowls
    RecipeDef {
        name: "worm hole",
        final_item: items::WORM_HOLE,
        category: Category::BakedTopped {
            ware: Bakeware::Gnomebowl,
            half_made: items::HALF_MADE_BOWL_9559,
            unfinished: items::UNFINISHED_BOWL_9560,
        },
        ingredients: &[
            Ingredient::of(items::KING_WORM, 4),
            Ingredient::of(items::ONION, 2),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "vegetable ball",
        final_item: items::VEG_BALL,
        category: Category::BakedTopped {
            ware: Bakeware::Gnomebowl,
            half_made: items::HALF_MADE_BOWL_9561,
            unfinished: items::UNFINISHED_BOWL_9562,
        },
        ingredients: &[
            Ingredient::of(items::POTATO, 2),
            Ingredient::of(items::ONION, 2),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "tangled toads legs",
        final_item: items::TANGLED_TOADS_LEGS,
        category: Category::Baked {
            ware: Bakeware::Gnomebowl,
            half_made: items::HALF_MADE_BOWL,
        },
        ingredients: &[
            Ingredient::of(items::TOADS_LEGS, 4),
            Ingredient::of(items::GNOME_SPICE, 2),
            Ingredient::of(items::CHEESE, 1),
            Ingredient::of(items::DWELLBERRIES, 1),
            Ingredient::of(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "chocolate bomb",
        final_item: items::CHOCOLATE_BOMB,
        category: Category::BakedTopped {
            ware: Bakeware::Gnomebowl,
            half_made: items::HALF_MADE_BOWL_9563,
            unfinished: items::UNFINISHED_BOWL_9564,
        },
        ingredients: &[
            Ingredient::of(items::CHOCOLATE_BAR, 4),
            Ingredient::of(items::EQUA_LEAVES, 2),
            Ingredient::later(items::CHOCOLATE_DUST, 1),
            Ingredient::later(items::POT_OF_CREAM, 2),
        ],
    },
    // Battas
    RecipeDef {
        name: "fruit batta",
        final_item: items::FRUIT_BATTA,
        category: Category::BakedTopped {
            ware: Bakeware::Batta,
            half_made: items::HALF_MADE_BATTA,
            unfinished: items::UNFINISHED_BATTA_9479,
        },
        ingredients: &[
            Ingredient::of(items::EQUA_LEAVES, 4),
            Ingredient::of(items::LIME_CHUNKS, 1),
            Ingredient::of(items::ORANGE_CHUNKS, 1),
            Ingredient::of(items::PINEAPPLE_CHUNKS, 1),
            Ingredient::later(items::GNOME_SPICE, 1),
        ],
    },
    RecipeDef {
        name: "toad batta",
        final_item: items::TOAD_BATTA,
        category: Category::Baked {
            ware: Bakeware::Batta,
            half_made: items::HALF_MADE_BATTA_9482,
        },
        ingredients: &[
            Ingredient::of(items::EQUA_LEAVES, 4),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::of(items::CHEESE, 1),
            Ingredient::of(items::TOADS_LEGS, 1),
        ],
    },
    RecipeDef {
        name: "worm batta",
        final_item: items::WORM_BATTA,
        category: Category::BakedTopped {
            ware: Bakeware::Batta,
            half_made: items::HALF_MADE_BATTA_9480,
            unfinished: items::UNFINISHED_BATTA_9481,
        },
        ingredients: &[
            Ingredient::of(items::KING_WORM, 1),
            Ingredient::of(items::CHEESE, 1),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "vegetable batta",
        final_item: items::VEGETABLE_BATTA,
        category: Category::BakedTopped {
            ware: Bakeware::Batta,
            half_made: items::HALF_MADE_BATTA_9485,
            unfinished: items::UNFINISHED_BATTA_9486,
        },
        ingredients: &[
            Ingredient::of(items::TOMATO, 2),
            Ingredient::of(items::DWELLBERRIES, 1),
            Ingredient::of(items::ONION, 1),
            Ingredient::of(items::CHEESE, 1),
            Ingredient::of(items::CABBAGE, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "cheese and tomato batta",
        final_item: items::CHEESETOM_BATTA,
        category: Category::BakedTopped {
            ware: Bakeware::Batta,
            half_made: items::HALF_MADE_BATTA_9483,
            unfinished: items::UNFINISHED_BATTA_9484,
        },
        ingredients: &[
            Ingredient::of(items::CHEESE, 1),
            Ingredient::of(items::TOMATO, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    // Crunchies
    RecipeDef {
        name: "choc chip crunchies",
        final_item: items::CHOCCHIP_CRUNCHIES,
        category: Category::BakedTopped {
            ware: Bakeware::Crunchies,
            half_made: items::HALF_MADE_CRUNCHY,
            unfinished: items::UNFINISHED_CRUNCHY_9578,
        },
        ingredients: &[
            Ingredient::of(items::CHOCOLATE_BAR, 2),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::later(items::CHOCOLATE_DUST, 1),
        ],
    },
    RecipeDef {
        name: "spicy crunchies",
        final_item: items::SPICY_CRUNCHIES,
        category: Category::BakedTopped {
            ware: Bakeware::Crunchies,
            half_made: items::HALF_MADE_CRUNCHY_9579,
            unfinished: items::UNFINISHED_CRUNCHY_9580,
        },
        ingredients: &[
            Ingredient::of(items::EQUA_LEAVES, 2),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::later(items::GNOME_SPICE, 1),
        ],
    },
    RecipeDef {
        name: "toad crunchies",
        final_item: items::TOAD_CRUNCHIES,
        category: Category::BakedTopped {
            ware: Bakeware::Crunchies,
            half_made: items::HALF_MADE_CRUNCHY_9581,
            unfinished: items::UNFINISHED_CRUNCHY_9582,
        },
        ingredients: &[
            Ingredient::of(items::TOADS_LEGS, 2),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "worm crunchies",
        final_item: items::WORM_CRUNCHIES,
        category: Category::BakedTopped {
            ware: Bakeware::Crunchies,
            half_made: items::HALF_MADE_CRUNCHY_9583,
            unfinished: items::UNFINISHED_CRUNCHY_9584,
        },
        ingredients: &[
            Ingredient::of(items::KING_WORM, 2),
            Ingredient::of(items::GNOME_SPICE, 1),
            Ingredient::of(items::EQUA_LEAVES, 1),
            Ingredient::later(items::GNOME_SPICE, 1),
        ],
    },
    // Gnome cocktails
    RecipeDef {
        name: "fruit blast",
        final_item: items::FRUIT_BLAST,
        category: Category::Cocktail {
            shaker_mix: items::MIXED_BLAST,
        },
        ingredients: &[
            Ingredient::of(items::PINEAPPLE, 1),
            Ingredient::of(items::LEMON, 1),
            Ingredient::of(items::ORANGE, 1),
            Ingredient::later(items::LEMON_SLICES, 1),
        ],
    },
    RecipeDef {
        name: "pineapple punch",
        final_item: items::PINEAPPLE_PUNCH,
        category: Category::Cocktail {
            shaker_mix: items::MIXED_PUNCH,
        },
        ingredients: &[
            Ingredient::of(items::PINEAPPLE, 2),
            Ingredient::of(items::LEMON, 1),
            Ingredient::of(items::ORANGE, 1),
            Ingredient::later(items::LIME_CHUNKS, 1),
            Ingredient::later(items::PINEAPPLE_CHUNKS, 1),
            Ingredient::later(items::ORANGE_SLICES, 1),
        ],
    },
    RecipeDef {
        name: "wizard blizzard",
        final_item: items::WIZARD_BLIZZARD,
        category: Category::Cocktail {
            shaker_mix: items::MIXED_BLIZZARD,
        },
        ingredients: &[
            Ingredient::of(items::VODKA, 2),
            Ingredient::of(items::GIN, 1),
            Ingredient::of(items::LIME, 1),
            Ingredient::of(items::LEMON, 1),
            Ingredient::of(items::ORANGE, 1),
            Ingredient::later(items::PINEAPPLE_CHUNKS, 1),
            Ingredient::later(items::LIME_SLICES, 1),
        ],
    },
    RecipeDef {
        name: "short green guy",
        final_item: items::SHORT_GREEN_GUY,
        category: Category::Cocktail {
            shaker_mix: items::MIXED_SGG,
        },
        ingredients: &[
            Ingredient::of(items::VODKA, 1),
            Ingredient::of(items::LIME, 3),
            Ingredient::later(items::LIME_SLICES, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
        ],
    },
    RecipeDef {
        name: "drunk dragon",
        final_item: items::DRUNK_DRAGON,
        category: Category::HeatedCocktail {
            timing: HeatTiming::AfterAdding,
            shaker_mix: items::MIXED_DRAGON,
            poured_mix: items::MIXED_DRAGON_9575,
            second_poured_mix: items::MIXED_DRAGON_9576,
        },
        ingredients: &[
            Ingredient::of(items::VODKA, 1),
            Ingredient::of(items::GIN, 1),
            Ingredient::of(items::DWELLBERRIES, 1),
            Ingredient::later(items::PINEAPPLE_CHUNKS, 1),
            Ingredient::later(items::POT_OF_CREAM, 1),
        ],
    },
    RecipeDef {
        name: "choc saturday",
        final_item: items::CHOC_SATURDAY,
        category: Category::HeatedCocktail {
            timing: HeatTiming::BeforeAdding,
            shaker_mix: items::MIXED_SATURDAY,
            poured_mix: items::MIXED_SATURDAY_9572,
            second_poured_mix: items::MIXED_SATURDAY_9573,
        },
        ingredients: &[
            Ingredient::of(items::WHISKY, 1),
            Ingredient::of(items::CHOCOLATE_BAR, 1),
            Ingredient::of(items::EQUA_LEAVES, 1),
            Ingredient::of(items::BUCKET_OF_MILK, 1),
            Ingredient::later(items::CHOCOLATE_DUST, 1),
            Ingredient::later(items::POT_OF_CREAM, 1),
        ],
    },
    RecipeDef {
        name: "blurberry special",
        final_item: items::BLURBERRY_SPECIAL,
        category: Category::Cocktail {
            shaker_mix: items::MIXED_SPECIAL,
        },
        ingredients: &[
            Ingredient::of(items::VODKA, 1),
            Ingredient::of(items::BRANDY, 1),
            Ingredient::of(items::GIN, 1),
            Ingredient::of(items::LEMON, 2),
            Ingredient::of(items::ORANGE, 1),
            Ingredient::later(items::LEMON_CHUNKS, 1),
            Ingredient::later(items::ORANGE_CHUNKS, 1),
            Ingredient::later(items::EQUA_LEAVES, 1),
            Ingredient::later(items::LIME_SLICES, 1),
        ],
    },
];

// ============================================================================
// Catalog
// ============================================================================

/// Immutable index over the recipe table. Built once at startup and shared
/// by reference; lookups never mutate.
#[derive(Debug)]
pub struct Catalog {
    orders: IndexMap<&'static str, &'static RecipeDef>,
}

impl Catalog {
    /// Build the standard catalog, validating every entry.
    pub fn standard() -> Result<Self, Error> {
        let mut orders = IndexMap::with_capacity(RECIPES.len());
        for recipe in RECIPES {
            let findings = recipe_findings(recipe);
            if !findings.is_empty() {
                return Err(Error::InvalidRecipe {
                    name: recipe.name,
                    reason: findings.join("; "),
                });
            }
            if orders.insert(recipe.name, recipe).is_some() {
                return Err(Error::InvalidRecipe {
                    name: recipe.name,
                    reason: "duplicate order name".to_string(),
                });
            }
        }
        Ok(Self { orders })
    }

    /// Exact-match lookup by order name.
    pub fn lookup(&self, name: &str) -> Result<&'static RecipeDef, Error> {
        self.orders
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownOrder(name.to_string()))
    }

    /// Recipes in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static RecipeDef> + '_ {
        self.orders.values().copied()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Intermediate item ids a recipe's stages pass through, final item last.
fn intermediate_ids(recipe: &RecipeDef) -> Vec<ItemId> {
    let mut ids = match recipe.category {
        Category::Baked { ware, half_made } => {
            vec![ware.raw_mould(), ware.half_baked(), half_made]
        }
        Category::BakedTopped {
            ware,
            half_made,
            unfinished,
        } => vec![ware.raw_mould(), ware.half_baked(), half_made, unfinished],
        Category::Cocktail { shaker_mix } => vec![shaker_mix],
        Category::HeatedCocktail {
            shaker_mix,
            poured_mix,
            second_poured_mix,
            ..
        } => vec![shaker_mix, poured_mix, second_poured_mix],
    };
    ids.push(recipe.final_item);
    ids
}

/// Data problems in one recipe; empty means valid.
fn recipe_findings(recipe: &RecipeDef) -> Vec<String> {
    let mut findings = Vec::new();

    if recipe.ingredients.is_empty() {
        findings.push("ingredient list is empty".to_string());
    }
    for ingredient in recipe.ingredients {
        if ingredient.quantity == 0 {
            findings.push(format!("zero quantity for item {}", ingredient.item));
        }
        if items::name(ingredient.item).is_none() {
            findings.push(format!("no display name for item {}", ingredient.item));
        }
    }

    let mut seen = FxHashSet::default();
    for id in intermediate_ids(recipe) {
        if items::name(id).is_none() {
            findings.push(format!("no display name for item {}", id));
        }
        if !seen.insert(id) {
            findings.push(format!("duplicate intermediate item {}", id));
        }
    }

    findings
}

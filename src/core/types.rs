//! Core type definitions — items, ingredients, recipes, stage nodes,
//! inventory snapshots.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::core::items;

// ============================================================================
// Items and ingredients
// ============================================================================

/// Numeric item identifier, mirroring the game cache ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One ingredient line of a recipe.
///
/// `added_later` marks ingredients that go in during the topping/garnish
/// step rather than the initial combine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub item: ItemId,
    pub quantity: u32,
    pub added_later: bool,
}

impl Ingredient {
    /// An ingredient for the initial combine step.
    pub const fn of(item: ItemId, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            added_later: false,
        }
    }

    /// An ingredient for the topping/garnish step.
    pub const fn later(item: ItemId, quantity: u32) -> Self {
        Self {
            item,
            quantity,
            added_later: true,
        }
    }
}

/// An item stack a stage needs on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub item: ItemId,
    pub quantity: u32,
}

impl Requirement {
    pub const fn new(item: ItemId, quantity: u32) -> Self {
        Self { item, quantity }
    }
}

// ============================================================================
// Recipe definitions
// ============================================================================

/// The three oven lines. Each knows its shaping tool and the two
/// intermediates every dish of that line passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bakeware {
    Gnomebowl,
    Batta,
    Crunchies,
}

impl Bakeware {
    /// The mould, tin or tray the dough is shaped with.
    pub const fn tool(self) -> ItemId {
        match self {
            Bakeware::Gnomebowl => items::GNOMEBOWL_MOULD,
            Bakeware::Batta => items::BATTA_TIN,
            Bakeware::Crunchies => items::CRUNCHY_TRAY,
        }
    }

    /// Shaped but unbaked dough, the output of the mould step.
    pub const fn raw_mould(self) -> ItemId {
        match self {
            Bakeware::Gnomebowl => items::RAW_GNOMEBOWL,
            Bakeware::Batta => items::RAW_BATTA,
            Bakeware::Crunchies => items::RAW_CRUNCHIES,
        }
    }

    /// The empty baked shell, ready for ingredients.
    pub const fn half_baked(self) -> ItemId {
        match self {
            Bakeware::Gnomebowl => items::HALF_BAKED_BOWL,
            Bakeware::Batta => items::HALF_BAKED_BATTA,
            Bakeware::Crunchies => items::HALF_BAKED_CRUNCHY,
        }
    }
}

impl fmt::Display for Bakeware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bakeware::Gnomebowl => "gnomebowl",
            Bakeware::Batta => "batta",
            Bakeware::Crunchies => "crunchies",
        };
        f.write_str(label)
    }
}

/// Whether a heated cocktail is reheated before or after the added-later
/// ingredients go in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatTiming {
    BeforeAdding,
    AfterAdding,
}

/// Preparation style of an order, tagged with the category-specific
/// intermediate items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Oven dish finished by a single re-heat.
    Baked { ware: Bakeware, half_made: ItemId },
    /// Oven dish with a topping step after the re-heat.
    BakedTopped {
        ware: Bakeware,
        half_made: ItemId,
        unfinished: ItemId,
    },
    /// Shaken drink, poured and garnished in one go.
    Cocktail { shaker_mix: ItemId },
    /// Shaken drink that is reheated around its garnish step.
    HeatedCocktail {
        timing: HeatTiming,
        shaker_mix: ItemId,
        poured_mix: ItemId,
        second_poured_mix: ItemId,
    },
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Baked { .. } => "baked",
            Category::BakedTopped { .. } => "baked, topped",
            Category::Cocktail { .. } => "cocktail",
            Category::HeatedCocktail { .. } => "heated cocktail",
        };
        f.write_str(label)
    }
}

/// One entry of the order catalog. All fields reference static data; the
/// catalog validates every entry once at construction.
#[derive(Debug, Clone, Copy)]
pub struct RecipeDef {
    /// Order name as the minigame announces it (lookup key).
    pub name: &'static str,
    /// The item handed to the recipient.
    pub final_item: ItemId,
    pub category: Category,
    pub ingredients: &'static [Ingredient],
}

impl RecipeDef {
    /// Requirements for the combine step (`added_later = false`) or the
    /// topping/garnish step (`added_later = true`).
    pub fn requirements(&self, added_later: bool) -> Vec<Requirement> {
        self.ingredients
            .iter()
            .filter(|i| i.added_later == added_later)
            .map(|i| Requirement::new(i.item, i.quantity))
            .collect()
    }
}

// ============================================================================
// Stage nodes
// ============================================================================

/// The distinct preparation steps a stage can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    CreateMould,
    BakeMould,
    CombineIngredients,
    Pour,
    HeatAgain,
    TopWithIngredients,
    Deliver,
}

impl StageKind {
    /// Instruction line shown for a stage of this kind.
    pub const fn directions(self) -> &'static str {
        match self {
            StageKind::CreateMould => "Shape the Gianne dough in the mould, tin or tray",
            StageKind::BakeMould => "Bake the shaped dough on a cooking range",
            StageKind::CombineIngredients => "Combine the ingredients",
            StageKind::Pour => "Pour the mix into a cocktail glass",
            StageKind::HeatAgain => "Heat it once more on a cooking range",
            StageKind::TopWithIngredients => "Add the finishing ingredients",
            StageKind::Deliver => "Deliver the order in the Aluft aloft box",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageKind::CreateMould => "create mould",
            StageKind::BakeMould => "bake mould",
            StageKind::CombineIngredients => "combine ingredients",
            StageKind::Pour => "pour",
            StageKind::HeatAgain => "heat again",
            StageKind::TopWithIngredients => "top with ingredients",
            StageKind::Deliver => "deliver",
        };
        f.write_str(label)
    }
}

/// One step of a preparation sequence.
///
/// `produced` is the item whose presence in the inventory proves the player
/// has entered this stage, i.e. the output of completing the previous step.
/// Only the first node of a sequence carries `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageNode {
    pub kind: StageKind,
    /// Items needed on hand beyond the previous step's output.
    pub required: Vec<Requirement>,
    pub produced: Option<ItemId>,
}

impl StageNode {
    /// The opening node of a sequence; nothing has been produced yet.
    pub fn start(kind: StageKind, required: Vec<Requirement>) -> Self {
        Self {
            kind,
            required,
            produced: None,
        }
    }

    /// A node entered by holding `produced`.
    pub fn step(kind: StageKind, required: Vec<Requirement>, produced: ItemId) -> Self {
        Self {
            kind,
            required,
            produced: Some(produced),
        }
    }
}

// ============================================================================
// Inventory snapshots
// ============================================================================

/// Snapshot of the player's held items.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    counts: FxHashMap<ItemId, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a held quantity; zero clears the item.
    pub fn set(&mut self, item: ItemId, quantity: u32) {
        if quantity == 0 {
            self.counts.remove(&item);
        } else {
            self.counts.insert(item, quantity);
        }
    }

    pub fn count(&self, item: ItemId) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.count(item) > 0
    }
}

impl FromIterator<(ItemId, u32)> for Inventory {
    fn from_iter<T: IntoIterator<Item = (ItemId, u32)>>(iter: T) -> Self {
        let mut inventory = Inventory::new();
        for (item, quantity) in iter {
            inventory.set(item, quantity);
        }
        inventory
    }
}

// ============================================================================
// Delivery difficulty
// ============================================================================

/// Difficulty tier of a delivery target; fixes the delivery window the
/// countdown timer gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Hard,
}

impl Difficulty {
    pub const fn delivery_window(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(360),
            Difficulty::Hard => Duration::from_secs(660),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        };
        f.write_str(label)
    }
}

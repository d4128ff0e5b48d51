//! Stage graph construction — one linear plan per recipe.
//!
//! Every plan ends with a deliver node. A node's `produced` id is the item
//! that proves the previous step was completed, so the first node never
//! carries one and the deliver node carries the finished dish.

use crate::core::items;
use crate::core::types::{
    Bakeware, Category, HeatTiming, ItemId, RecipeDef, Requirement, StageKind, StageNode,
};

/// Build the ordered stage list for a recipe.
pub fn build_stages(recipe: &RecipeDef) -> Vec<StageNode> {
    let mut stages = Vec::with_capacity(6);
    match recipe.category {
        Category::Baked { ware, half_made } => {
            push_baked_prefix(&mut stages, recipe, ware);
            stages.push(StageNode::step(StageKind::HeatAgain, vec![], half_made));
        }
        Category::BakedTopped {
            ware,
            half_made,
            unfinished,
        } => {
            push_baked_prefix(&mut stages, recipe, ware);
            stages.push(StageNode::step(StageKind::HeatAgain, vec![], half_made));
            stages.push(StageNode::step(
                StageKind::TopWithIngredients,
                recipe.requirements(true),
                unfinished,
            ));
        }
        Category::Cocktail { shaker_mix } => {
            stages.push(StageNode::start(
                StageKind::CombineIngredients,
                with_tool(recipe.requirements(false), items::COCKTAIL_SHAKER),
            ));
            // Plain cocktails are garnished as they are poured, so the
            // finishing ingredients belong to the pour node.
            stages.push(StageNode::step(
                StageKind::Pour,
                with_tool(recipe.requirements(true), items::COCKTAIL_GLASS),
                shaker_mix,
            ));
        }
        Category::HeatedCocktail {
            timing,
            shaker_mix,
            poured_mix,
            second_poured_mix,
        } => {
            stages.push(StageNode::start(
                StageKind::CombineIngredients,
                with_tool(recipe.requirements(false), items::COCKTAIL_SHAKER),
            ));
            stages.push(StageNode::step(
                StageKind::Pour,
                vec![Requirement::new(items::COCKTAIL_GLASS, 1)],
                shaker_mix,
            ));
            match timing {
                HeatTiming::BeforeAdding => {
                    stages.push(StageNode::step(StageKind::HeatAgain, vec![], poured_mix));
                    stages.push(StageNode::step(
                        StageKind::TopWithIngredients,
                        recipe.requirements(true),
                        second_poured_mix,
                    ));
                }
                HeatTiming::AfterAdding => {
                    stages.push(StageNode::step(
                        StageKind::TopWithIngredients,
                        recipe.requirements(true),
                        poured_mix,
                    ));
                    stages.push(StageNode::step(
                        StageKind::HeatAgain,
                        vec![],
                        second_poured_mix,
                    ));
                }
            }
        }
    }
    stages.push(StageNode::step(
        StageKind::Deliver,
        vec![Requirement::new(items::ALUFT_ALOFT_BOX, 1)],
        recipe.final_item,
    ));
    stages
}

/// Mould, bake and combine open every baked line; only the bakeware differs.
fn push_baked_prefix(stages: &mut Vec<StageNode>, recipe: &RecipeDef, ware: Bakeware) {
    stages.push(StageNode::start(
        StageKind::CreateMould,
        vec![
            Requirement::new(items::GIANNE_DOUGH, 1),
            Requirement::new(ware.tool(), 1),
        ],
    ));
    stages.push(StageNode::step(
        StageKind::BakeMould,
        vec![],
        ware.raw_mould(),
    ));
    stages.push(StageNode::step(
        StageKind::CombineIngredients,
        recipe.requirements(false),
        ware.half_baked(),
    ));
}

fn with_tool(mut required: Vec<Requirement>, tool: ItemId) -> Vec<Requirement> {
    required.push(Requirement::new(tool, 1));
    required
}

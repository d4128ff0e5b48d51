//! CLI subcommands — recipes, recipients, plan, track.

use crate::core::catalog::Catalog;
use crate::core::items;
use crate::core::overlay::RequirementView;
use crate::core::recipients;
use crate::core::session::DeliveryTracker;
use crate::core::stages::build_stages;
use crate::core::types::{Difficulty, Inventory, ItemId, StageKind};
use clap::Subcommand;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every known order
    Recipes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List delivery recipients by difficulty
    Recipients,

    /// Show the cooking plan for an order
    Plan {
        /// Order name, e.g. "worm hole" or worm_hole
        order: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Track an order against recorded inventory snapshots
    Track {
        /// Order name, e.g. "worm hole" or worm_hole
        order: String,

        /// Recipient NPC; omit for an untimed practice run
        #[arg(short, long)]
        recipient: Option<String>,

        /// Snapshot files (JSON object of item name or id to count),
        /// applied in order
        snapshots: Vec<PathBuf>,
    },
}

/// Dispatch a CLI command.
pub fn dispatch(cmd: Commands) -> Result<(), String> {
    match cmd {
        Commands::Recipes { json } => cmd_recipes(json),
        Commands::Recipients => cmd_recipients(),
        Commands::Plan { order, json } => cmd_plan(&order, json),
        Commands::Track {
            order,
            recipient,
            snapshots,
        } => cmd_track(&order, recipient.as_deref(), &snapshots),
    }
}

#[derive(Serialize)]
struct RecipeRow {
    name: &'static str,
    category: String,
    final_item: ItemId,
    stages: usize,
}

#[derive(Serialize)]
struct StageRow {
    step: usize,
    kind: StageKind,
    directions: &'static str,
    needs: Vec<RequireRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    makes: Option<&'static str>,
}

#[derive(Serialize)]
struct RequireRow {
    id: ItemId,
    name: &'static str,
    quantity: u32,
}

fn cmd_recipes(json: bool) -> Result<(), String> {
    let catalog = Catalog::standard().map_err(|e| e.to_string())?;

    if json {
        let rows: Vec<RecipeRow> = catalog
            .iter()
            .map(|recipe| RecipeRow {
                name: recipe.name,
                category: recipe.category.to_string(),
                final_item: recipe.final_item,
                stages: build_stages(recipe).len(),
            })
            .collect();
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    for recipe in catalog.iter() {
        let category = recipe.category.to_string();
        println!(
            "{:<24} {:<16} {}",
            recipe.name,
            category,
            items::display_name(recipe.final_item)
        );
    }
    Ok(())
}

fn cmd_recipients() -> Result<(), String> {
    println!(
        "Easy ({}s to deliver):",
        Difficulty::Easy.delivery_window().as_secs()
    );
    for name in recipients::EASY {
        println!("  {}", name);
    }
    println!();
    println!(
        "Hard ({}s to deliver):",
        Difficulty::Hard.delivery_window().as_secs()
    );
    for name in recipients::HARD {
        println!("  {}", name);
    }
    Ok(())
}

fn cmd_plan(order: &str, json: bool) -> Result<(), String> {
    let catalog = Catalog::standard().map_err(|e| e.to_string())?;
    let order = canonical_order(order);
    let recipe = catalog.lookup(&order).map_err(|e| e.to_string())?;
    let stages = build_stages(recipe);

    if json {
        let rows: Vec<StageRow> = stages
            .iter()
            .enumerate()
            .map(|(index, node)| StageRow {
                step: index + 1,
                kind: node.kind,
                directions: node.kind.directions(),
                needs: node
                    .required
                    .iter()
                    .map(|r| RequireRow {
                        id: r.item,
                        name: items::display_name(r.item),
                        quantity: r.quantity,
                    })
                    .collect(),
                makes: stages
                    .get(index + 1)
                    .and_then(|n| n.produced)
                    .map(items::display_name),
            })
            .collect();
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{}", out);
        return Ok(());
    }

    println!(
        "{} ({}) -> {}",
        recipe.name,
        recipe.category,
        items::display_name(recipe.final_item)
    );
    for (index, node) in stages.iter().enumerate() {
        println!("{}. {}", index + 1, node.kind.directions());
        if !node.required.is_empty() {
            let needs: Vec<String> = node
                .required
                .iter()
                .map(|r| format!("{}x {}", r.quantity, items::display_name(r.item)))
                .collect();
            println!("   needs: {}", needs.join(", "));
        }
        // Each step makes the item the next stage expects in hand.
        if let Some(makes) = stages.get(index + 1).and_then(|n| n.produced) {
            println!("   makes: {}", items::display_name(makes));
        }
    }
    Ok(())
}

fn cmd_track(order: &str, recipient: Option<&str>, snapshots: &[PathBuf]) -> Result<(), String> {
    let catalog = Catalog::standard().map_err(|e| e.to_string())?;
    let mut tracker = DeliveryTracker::new(Arc::new(catalog));
    let order = canonical_order(order);

    match recipient {
        Some(name) => {
            tracker
                .on_order_detected(name, &order)
                .map_err(|e| e.to_string())?;
            if let Some(window) = tracker.delivery_window() {
                println!(
                    "Tracking {} for {} ({}s to deliver)",
                    order,
                    name,
                    window.as_secs()
                );
            }
        }
        None => {
            tracker.start_practice(&order).map_err(|e| e.to_string())?;
            println!("Practice run: {}", order);
        }
    }
    print_status(&tracker);

    for path in snapshots {
        let inventory = load_snapshot(path)?;
        println!();
        println!("After {}:", path.display());
        tracker.on_inventory_snapshot(inventory);
        if !tracker.is_tracking() {
            println!("Practice run complete.");
            return Ok(());
        }
        print_status(&tracker);
    }

    if tracker.deliver_stage_reached() {
        println!();
        println!("Ready to deliver.");
    }
    Ok(())
}

/// Dialogue order names are lowercase; accept underscores and stray case
/// from the command line.
fn canonical_order(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', " ")
}

/// Read a snapshot file: a JSON object of item name (or raw id) to count.
fn load_snapshot(path: &Path) -> Result<Inventory, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let counts: HashMap<String, u32> =
        serde_json::from_str(&data).map_err(|e| format!("{}: {}", path.display(), e))?;

    let mut inventory = Inventory::new();
    for (key, count) in counts {
        let item = match key.parse::<u32>() {
            Ok(id) => ItemId(id),
            Err(_) => items::by_name(&key)
                .ok_or_else(|| format!("{}: unknown item {:?}", path.display(), key))?,
        };
        inventory.set(item, count);
    }
    Ok(inventory)
}

/// Display the stage underway and both requirement tables to stdout.
fn print_status(tracker: &DeliveryTracker) {
    let Some(session) = tracker.session() else {
        return;
    };
    println!(
        "Stage {}/{}: {}",
        session.current_index() + 1,
        session.stage_count(),
        session.current_stage().kind.directions()
    );
    print_view("now", session.current_view());
    if !session.future_view().is_empty() {
        print_view("later", session.future_view());
    }
}

fn print_view(label: &str, view: &RequirementView) {
    println!("  {}:", label);
    for (_, entry) in view.iter() {
        println!("    {}/{} {}", entry.held, entry.required, entry.name);
    }
}

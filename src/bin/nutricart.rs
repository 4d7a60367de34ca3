// ABOUTME: NutriCart CLI - shopping list, pantry, and suggestion commands
// ABOUTME: Loads the saved household, applies one command, prints the result, and saves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCart Contributors
//!
//! Usage:
//! ```bash
//! # Add an item and tick it off once it is in the cart
//! nutricart add "Greek Yogurt" --category dairy
//! nutricart check <item-id>
//!
//! # Move checked items into the pantry
//! nutricart done
//!
//! # Review what needs attention
//! nutricart pantry
//! nutricart suggestions
//! nutricart accept rebuy-inv3
//!
//! # Ask for a healthier option and apply it to the list
//! nutricart swap <item-id> --apply
//!
//! # Predict what ran out and put it on the list
//! nutricart predict --add
//! ```

use anyhow::{bail, Error, Result};
use clap::{Parser, Subcommand};
use nutricart::config::{init_configs, AppConfig};
use nutricart::errors::AppError;
use nutricart::household::Household;
use nutricart::logging::LoggingConfig;
use nutricart::storage::FileStore;
use nutricart::utils::clock::{Clock, FixedClock, SystemClock};
use nutricart::utils::ids::UuidIdSupplier;
use nutricart_core::{Category, Timestamp};
use nutricart_intelligence::RulesEngine;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "nutricart",
    about = "NutriCart shopping list and pantry assistant",
    long_about = "Track a shopping list and pantry, and get suggestions for expiring items, rebuys, healthier swaps, and missing items."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the saved list and pantry
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Treat this instant (milliseconds since the Unix epoch) as now
    #[arg(long, global = true, hide = true)]
    now: Option<Timestamp>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the shopping list
    List,

    /// Add an item to the shopping list
    Add {
        /// Item name
        name: String,

        /// Store section (produce, dairy, bakery, meat, pantry, frozen, beverages, snacks, other)
        #[arg(long, short = 'c', default_value = "other")]
        category: String,
    },

    /// Check or uncheck a list item
    Check {
        /// List item id
        id: String,
    },

    /// Delete a list item
    Delete {
        /// List item id
        id: String,
    },

    /// Move checked items into the pantry
    Done,

    /// Show current stock, soonest expiry first
    Pantry,

    /// Mark a pantry item as used up
    Consume {
        /// Pantry item id
        id: String,
    },

    /// Remove a pantry item entirely
    Discard {
        /// Pantry item id
        id: String,
    },

    /// Show current suggestions
    Suggestions,

    /// Add a suggested item to the list
    ///
    /// Expiring and rebuy suggestions are recomputed on every run, so their ids
    /// stay valid across commands. Health swaps are not kept between runs; apply
    /// them with `swap --apply`.
    Accept {
        /// Suggestion id
        suggestion_id: String,
    },

    /// Look up a healthier alternative for a list item
    Swap {
        /// List item id
        item_id: String,

        /// Rename the list item to the alternative
        #[arg(long)]
        apply: bool,
    },

    /// Predict items missing from the pantry
    Predict {
        /// Add the predicted items to the shopping list
        #[arg(long)]
        add: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;
    init_configs();

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    info!(
        environment = %config.environment,
        data_dir = %config.data_dir.display(),
        "Using data directory"
    );

    let clock: Arc<dyn Clock> = match cli.now {
        Some(now) => Arc::new(FixedClock::new(now)),
        None => Arc::new(SystemClock),
    };

    let store = FileStore::new(config.data_dir.clone());
    let mut household = Household::load(
        &store,
        RulesEngine::default(),
        config.advisory,
        clock,
        Arc::new(UuidIdSupplier),
    )
    .await;

    run(cli.command, &mut household).await?;

    household.save(&store).await?;
    Ok(())
}

async fn run(command: Command, household: &mut Household) -> Result<()> {
    match command {
        Command::List => print_list(household),
        Command::Add { name, category } => {
            let Some(id) = household.add_item(&name, Category::from_str_lossy(&category)) else {
                return Err(AppError::invalid_input("Item name must not be blank").into());
            };
            println!("Added {} ({id})", name.trim());
        }
        Command::Check { id } => match household.toggle_item(&id) {
            Some(true) => println!("Checked {id}"),
            Some(false) => println!("Unchecked {id}"),
            None => return Err(missing("List item", &id)),
        },
        Command::Delete { id } => {
            if !household.delete_item(&id) {
                return Err(missing("List item", &id));
            }
            println!("Deleted {id}");
        }
        Command::Done => {
            let moved = household.finalize_checked();
            if moved.is_empty() {
                println!("Nothing is checked");
            } else {
                println!("Moved {} item(s) to the pantry", moved.len());
            }
        }
        Command::Pantry => print_pantry(household),
        Command::Consume { id } => {
            if !household.consume_item(&id) {
                return Err(missing("Stocked item", &id));
            }
            println!("Marked {id} as consumed");
        }
        Command::Discard { id } => {
            if !household.remove_inventory_item(&id) {
                return Err(missing("Pantry item", &id));
            }
            println!("Removed {id}");
        }
        Command::Suggestions => print_suggestions(household),
        Command::Accept { suggestion_id } => {
            let Some(id) = household.accept_suggestion(&suggestion_id) else {
                bail!("Suggestion {suggestion_id} has nothing to add");
            };
            println!("Added to list ({id})");
        }
        Command::Swap { item_id, apply } => swap(household, &item_id, apply).await?,
        Command::Predict { add } => {
            let predictions = household.predict_missing_items().await;
            if predictions.is_empty() {
                println!("Nothing seems to be missing");
            }
            for prediction in &predictions {
                println!("{:<20} {}", prediction.item, prediction.reason);
            }
            if add {
                let added = household.add_predictions(&predictions);
                println!("Added {} item(s) to the list", added.len());
            }
        }
    }
    Ok(())
}

async fn swap(household: &mut Household, item_id: &str, apply: bool) -> Result<()> {
    if !household
        .shopping_list()
        .iter()
        .any(|item| item.id == item_id)
    {
        return Err(missing("List item", item_id));
    }
    let Some(suggestion) = household.health_swap_for(item_id).await else {
        println!("No healthier alternative found");
        return Ok(());
    };
    println!("{}", suggestion.message);
    if apply {
        if let Some(alternative) = suggestion.suggested_item_name.as_deref() {
            household.swap_item(item_id, alternative);
            println!("Renamed {item_id} to {alternative}");
        }
    }
    Ok(())
}

fn missing(kind: &str, id: &str) -> Error {
    AppError::not_found(format!("{kind} {id}")).into()
}

fn print_list(household: &Household) {
    if household.shopping_list().is_empty() {
        println!("Shopping list is empty");
    }
    for item in household.shopping_list() {
        let mark = if item.is_checked { "x" } else { " " };
        println!(
            "[{mark}] {:<24} {} {:<8} {:<10} {}",
            item.name,
            item.quantity,
            item.unit,
            item.category.display_name(),
            item.id
        );
    }
}

fn print_pantry(household: &Household) {
    let stock = household.current_stock_by_expiry();
    if stock.is_empty() {
        println!("Pantry is empty");
    }
    for (item, status) in stock {
        println!(
            "{:<24} {} {:<8} {:<14} {}",
            item.name(),
            item.item.quantity,
            item.item.unit,
            status.label(),
            item.id()
        );
    }
}

fn print_suggestions(household: &Household) {
    if household.suggestions().is_empty() {
        println!("No suggestions right now");
    }
    for suggestion in household.suggestions() {
        println!("{:<22} {}", suggestion.id, suggestion.message);
    }
}

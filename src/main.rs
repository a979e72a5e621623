//! # Pantry CLI
//!
//! Turns an utterance into JSON item drafts.
//!
//! ```text
//! pantry "apples, milk, chicken breast" 2
//! ```
//!
//! Household settings come from `PANTRY_*` environment variables (a `.env`
//! file is loaded first).

use anyhow::{bail, Context, Result};
use chrono::Local;
use log::info;
use pantry::engine_config::HouseholdSettings;
use pantry::item_draft::ItemEngine;
use std::env;

const USAGE: &str = "usage: pantry <utterance> [base_quantity]";

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(utterance) = args.first() else {
        bail!(USAGE);
    };
    let base_quantity = match args.get(1) {
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .with_context(|| format!("'{raw}' is not a quantity; {USAGE}"))?,
        None => 1,
    };

    let settings = HouseholdSettings::from_env().context("Failed to load household settings")?;
    let engine = ItemEngine::builtin();
    let today = Local::now().date_naive();

    info!("Drafting items from '{}'", utterance);
    let drafts = engine.draft_items(utterance, base_quantity, &settings, today);

    println!("{}", serde_json::to_string_pretty(&drafts)?);
    Ok(())
}

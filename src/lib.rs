//! # Pantry
//!
//! Classifies household item names into Food / Household subcategories,
//! splits multi-item utterances into individual names, and scales purchase
//! quantities to the size of the household.

pub mod catalog_data;
pub mod catalog_model;
pub mod classifier;
pub mod engine_config;
pub mod engine_errors;
pub mod item_draft;
pub mod localization;
pub mod quantity_scaler;
pub mod segmenter;

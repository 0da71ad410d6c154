//! Database models and response documents for the clothing catalogue.

pub mod clothing_item;
pub mod hal;
pub mod pagination;

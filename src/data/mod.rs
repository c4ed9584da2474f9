//! Data loading and external game content
//!
//! Loads enchantment definitions from external RON files, allowing for
//! data-driven content and easy modding.

pub mod enchantments;

pub use enchantments::{default_enchantments, DataError, EnchantmentRegistry};

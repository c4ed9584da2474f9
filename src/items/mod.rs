//! Item metadata system

pub mod enchant;
pub mod metadata;

pub use enchant::{Enchantment, EnchantmentId};
pub use metadata::ItemMetadata;

//! Itemlore - auxiliary item-stack metadata
//!
//! Display names, lore lines, and enchantments attached to an item stack,
//! independent of the item's base type. The stack's owning inventory holds
//! one [`ItemMetadata`] per item that carries non-default data.

pub mod data;
pub mod items;
pub mod save;

// Re-export commonly used types
pub use data::{default_enchantments, DataError, EnchantmentRegistry};
pub use items::{Enchantment, EnchantmentId, ItemMetadata};
pub use save::SaveError;

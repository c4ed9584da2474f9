//! Item stack metadata
//!
//! Display name, lore lines, and enchantments attached to a single item
//! stack, independent of the item's base type. One instance per stack that
//! carries non-default data.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::enchant::{Enchantment, EnchantmentId};

/// Auxiliary metadata for one item stack
///
/// A plain mutable record: any operation may be called in any order. The
/// only rejected input is an invalid level in [`add_enchant`], signalled by
/// a `false` return rather than an error.
///
/// Lore distinguishes "no lore set" (`None`) from "lore set to zero lines"
/// (`Some` of an empty vec); both states round-trip through serialization.
///
/// [`add_enchant`]: ItemMetadata::add_enchant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Custom display name; absent means the item's default name is used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    /// Descriptive lines shown with the item, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lore: Option<Vec<String>>,
    /// Enchantment levels by id; present entries always have level >= 1
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "non_zero_levels"
    )]
    enchants: BTreeMap<EnchantmentId, u32>,
}

/// Reject persisted enchantment maps carrying a level-0 entry, a state the
/// mutation API can never produce
fn non_zero_levels<'de, D>(de: D) -> Result<BTreeMap<EnchantmentId, u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let map = BTreeMap::deserialize(de)?;
    if let Some((id, _)) = map.iter().find(|(_, level)| **level == 0) {
        return Err(serde::de::Error::custom(format!(
            "enchantment '{}' has level 0",
            id
        )));
    }
    Ok(map)
}

impl ItemMetadata {
    /// Create empty metadata (no name, no lore, no enchantments)
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a custom display name is set
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    /// Get the custom display name, if set
    ///
    /// An empty string is a valid set name and returns `Some("")`.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Set the custom display name (empty string counts as set)
    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    /// Clear the custom display name back to the item default
    pub fn clear_display_name(&mut self) {
        self.display_name = None;
    }

    /// Check if lore is set, even to zero lines
    pub fn has_lore(&self) -> bool {
        self.lore.is_some()
    }

    /// Get the lore lines, if set
    pub fn lore(&self) -> Option<&[String]> {
        self.lore.as_deref()
    }

    /// Replace the lore wholesale
    ///
    /// `Some(vec![])` sets lore to an explicit empty list (`has_lore()`
    /// becomes true); `None` clears it to absent.
    pub fn set_lore(&mut self, lore: Option<Vec<String>>) {
        self.lore = lore;
    }

    /// Check if any enchantment is present
    pub fn has_enchants(&self) -> bool {
        !self.enchants.is_empty()
    }

    /// Check for a specific enchantment
    pub fn has_enchant(&self, id: &EnchantmentId) -> bool {
        self.enchants.contains_key(id)
    }

    /// Get the stored level for an enchantment, or 0 if absent
    pub fn enchant_level(&self, id: &EnchantmentId) -> u32 {
        self.enchants.get(id).copied().unwrap_or(0)
    }

    /// Get a snapshot of all enchantments
    ///
    /// The returned map is a copy; mutating it does not affect this
    /// metadata.
    pub fn enchants(&self) -> BTreeMap<EnchantmentId, u32> {
        self.enchants.clone()
    }

    /// Add or upgrade an enchantment
    ///
    /// Rejects a level of 0, and a level above `ench.max_level` unless
    /// `ignore_level_restriction` is set. Returns true iff the mapping
    /// changed: re-adding the exact level already stored returns false.
    pub fn add_enchant(
        &mut self,
        ench: &Enchantment,
        level: u32,
        ignore_level_restriction: bool,
    ) -> bool {
        if level == 0 {
            return false;
        }
        if !ignore_level_restriction && level > ench.max_level {
            return false;
        }
        match self.enchants.insert(ench.id.clone(), level) {
            Some(previous) => previous != level,
            None => true,
        }
    }

    /// Remove an enchantment, returning true iff it was present
    pub fn remove_enchant(&mut self, id: &EnchantmentId) -> bool {
        self.enchants.remove(id).is_some()
    }

    /// Check if nothing is set (the state of freshly created metadata)
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.lore.is_none() && self.enchants.is_empty()
    }
}

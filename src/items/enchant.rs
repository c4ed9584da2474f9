//! Enchantment descriptors
//!
//! An enchantment is identified by a stable string id and carries the
//! maximum level the game normally allows for it.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier for an enchantment kind (e.g. "sharpness")
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnchantmentId(String);

impl EnchantmentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnchantmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnchantmentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EnchantmentId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Registry entry describing one enchantment kind
///
/// Immutable once registered. The `max_level` is the cap enforced by
/// [`ItemMetadata::add_enchant`](crate::items::ItemMetadata::add_enchant)
/// unless the caller overrides the restriction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enchantment {
    /// Unique enchantment id
    pub id: EnchantmentId,
    /// Display name
    pub name: String,
    /// Highest level normally obtainable (always >= 1)
    #[serde(deserialize_with = "at_least_one")]
    pub max_level: u32,
}

/// Clamp a persisted max level to 1, matching [`Enchantment::new`]
fn at_least_one<'de, D>(de: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(de)?.max(1))
}

impl Enchantment {
    /// Create a new descriptor. A `max_level` of 0 is clamped to 1.
    pub fn new(id: impl Into<EnchantmentId>, name: impl Into<String>, max_level: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_level: max_level.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = EnchantmentId::new("sharpness");
        assert_eq!(id.to_string(), "sharpness");
        assert_eq!(id.as_str(), "sharpness");
    }

    #[test]
    fn test_max_level_clamped() {
        let ench = Enchantment::new("curse", "Curse", 0);
        assert_eq!(ench.max_level, 1);
    }

    #[test]
    fn test_deserialize_clamps_max_level() {
        let ench: Enchantment =
            ron::from_str(r#"(id:"curse",name:"Curse",max_level:0)"#).expect("parse descriptor");
        assert_eq!(ench.max_level, 1);
    }

    #[test]
    fn test_id_ordering() {
        let a = EnchantmentId::new("aqua_affinity");
        let b = EnchantmentId::new("sharpness");
        assert!(a < b);
    }
}

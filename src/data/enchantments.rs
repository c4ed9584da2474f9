//! Enchantment registry
//!
//! The set of enchantment kinds known to the game, loaded from an external
//! RON file with fallback to hardcoded defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::{Enchantment, EnchantmentId};

/// Errors from writing data files
#[derive(Debug, Error)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Registry of enchantment descriptors keyed by id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnchantmentRegistry {
    entries: BTreeMap<EnchantmentId, Enchantment>,
}

impl EnchantmentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, replacing any previous entry with the same id
    pub fn register(&mut self, ench: Enchantment) {
        self.entries.insert(ench.id.clone(), ench);
    }

    /// Look up a descriptor by id
    pub fn get(&self, id: &EnchantmentId) -> Option<&Enchantment> {
        self.entries.get(id)
    }

    /// Look up the maximum allowed level for an enchantment
    pub fn max_level(&self, id: &EnchantmentId) -> Option<u32> {
        self.entries.get(id).map(|e| e.max_level)
    }

    /// Check whether an id is registered
    pub fn contains(&self, id: &EnchantmentId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered enchantments
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all descriptors in id order
    pub fn iter(&self) -> impl Iterator<Item = &Enchantment> {
        self.entries.values()
    }

    /// Load the registry from a RON file, falling back to defaults
    ///
    /// A missing, unreadable, or malformed file yields the default registry
    /// with a warning, so a broken data file never takes the game down.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match ron::from_str(&content) {
                    Ok(registry) => return registry,
                    Err(e) => log::warn!("Failed to parse {}: {}", path.display(), e),
                },
                Err(e) => log::warn!("Failed to read {}: {}", path.display(), e),
            }
        }
        default_enchantments()
    }

    /// Write this registry to a RON file for easy editing
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), DataError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Create the default enchantment registry
pub fn default_enchantments() -> EnchantmentRegistry {
    let mut registry = EnchantmentRegistry::new();

    registry.register(Enchantment::new("sharpness", "Sharpness", 5));
    registry.register(Enchantment::new("smite", "Smite", 5));
    registry.register(Enchantment::new("fire_aspect", "Fire Aspect", 2));
    registry.register(Enchantment::new("knockback", "Knockback", 2));
    registry.register(Enchantment::new("looting", "Looting", 3));
    registry.register(Enchantment::new("protection", "Protection", 4));
    registry.register(Enchantment::new("thorns", "Thorns", 3));
    registry.register(Enchantment::new("unbreaking", "Unbreaking", 3));
    registry.register(Enchantment::new("efficiency", "Efficiency", 5));
    registry.register(Enchantment::new("fortune", "Fortune", 3));
    registry.register(Enchantment::new("silk_touch", "Silk Touch", 1));
    registry.register(Enchantment::new("infinity", "Infinity", 1));

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_populated() {
        let registry = default_enchantments();
        assert!(!registry.is_empty());
        assert!(registry.contains(&EnchantmentId::new("sharpness")));
        assert_eq!(registry.max_level(&EnchantmentId::new("sharpness")), Some(5));
        assert_eq!(registry.max_level(&EnchantmentId::new("silk_touch")), Some(1));
        assert_eq!(registry.max_level(&EnchantmentId::new("nonexistent")), None);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = EnchantmentRegistry::new();
        registry.register(Enchantment::new("sharpness", "Sharpness", 5));
        registry.register(Enchantment::new("sharpness", "Sharpness", 7));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.max_level(&EnchantmentId::new("sharpness")), Some(7));
    }

    #[test]
    fn test_ron_round_trip() {
        let registry = default_enchantments();
        let content = ron::ser::to_string_pretty(&registry, ron::ser::PrettyConfig::default())
            .expect("serialize registry");
        let loaded: EnchantmentRegistry = ron::from_str(&content).expect("parse registry");
        assert_eq!(loaded.len(), registry.len());
        assert_eq!(
            loaded.get(&EnchantmentId::new("fortune")),
            registry.get(&EnchantmentId::new("fortune"))
        );
    }

    #[test]
    fn test_zero_max_level_clamped_on_load() {
        let content = r#"(entries:{"curse":(id:"curse",name:"Curse",max_level:0)})"#;
        let registry: EnchantmentRegistry = ron::from_str(content).expect("parse registry");
        assert_eq!(registry.max_level(&EnchantmentId::new("curse")), Some(1));
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let registry = EnchantmentRegistry::load_from(dir.path().join("enchantments.ron"));
        assert_eq!(registry.len(), default_enchantments().len());
    }

    #[test]
    fn test_export_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("enchantments.ron");

        let mut registry = EnchantmentRegistry::new();
        registry.register(Enchantment::new("thorns", "Thorns", 3));
        registry.export_to(&path).expect("export registry");

        let loaded = EnchantmentRegistry::load_from(&path);
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.max_level(&EnchantmentId::new("thorns")), Some(3));
    }
}

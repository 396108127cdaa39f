//! Constant table: name to canonical value.
//!
//! One table is owned by each translation session. It is populated
//! during the constants pass and only read during the configuration
//! pass; nothing here is shared between sessions.

use std::collections::HashMap;

/// Mapping from constant name to its canonical rendered value.
#[derive(Debug, Default)]
pub struct ConstantTable {
    entries: HashMap<String, String>,
}

impl ConstantTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a constant with this name is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up the canonical value of a constant.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Define a constant. Callers check for duplicates first.
    pub fn insert(&mut self, name: &str, value: String) {
        self.entries.insert(name.to_string(), value);
    }

    /// Number of defined constants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no constants are defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = ConstantTable::new();
        assert!(table.is_empty());
        table.insert("DEVICE_ID", "12345".to_string());
        assert_eq!(table.get("DEVICE_ID"), Some("12345"));
        assert!(table.contains("DEVICE_ID"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_missing_name() {
        let table = ConstantTable::new();
        assert_eq!(table.get("MISSING"), None);
        assert!(!table.contains("MISSING"));
    }
}

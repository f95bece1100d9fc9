//! Parameter Storage Types
//!
//! Fixed-capacity name/value store for controller configuration.

use super::error::ParameterError;
use bitflags::bitflags;
use heapless::index_map::FnvIndexMap;
use heapless::String;

/// Maximum parameter name length
pub const PARAM_NAME_LEN: usize = 16;

/// Maximum number of parameters (power of two for the index map)
pub const MAX_PARAMS: usize = 16;

bitflags! {
    /// Parameter flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ParamFlags: u8 {
        /// Parameter cannot be changed after registration
        const READ_ONLY = 0b00000001;
    }
}

/// Parameter value types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Boolean parameter
    Bool(bool),
    /// 32-bit signed integer
    Int(i32),
    /// 32-bit floating point
    Float(f32),
}

impl ParamValue {
    /// Numeric value as `f64`, if the parameter is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Int(v) => Some(f64::from(*v)),
            ParamValue::Float(v) => Some(f64::from(*v)),
            ParamValue::Bool(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
struct ParamEntry {
    value: ParamValue,
    flags: ParamFlags,
}

/// Parameter store for configuration management
///
/// Stores parameters as name/value pairs with flags, in registration order.
pub struct ParameterStore {
    parameters: FnvIndexMap<String<PARAM_NAME_LEN>, ParamEntry, MAX_PARAMS>,
    /// Dirty flag (host has changes to persist)
    dirty: bool,
}

impl ParameterStore {
    /// Create a new empty parameter store
    pub fn new() -> Self {
        Self {
            parameters: FnvIndexMap::new(),
            dirty: false,
        }
    }

    /// Get parameter value
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        let key = make_key(name).ok()?;
        self.parameters.get(&key).map(|entry| &entry.value)
    }

    /// Set parameter value
    ///
    /// Marks the store as dirty.
    pub fn set(&mut self, name: &str, value: ParamValue) -> Result<(), ParameterError> {
        let key = make_key(name)?;
        let entry = self
            .parameters
            .get_mut(&key)
            .ok_or(ParameterError::InvalidConfig)?;

        if entry.flags.contains(ParamFlags::READ_ONLY) {
            return Err(ParameterError::ReadOnly);
        }

        entry.value = value;
        self.dirty = true;
        Ok(())
    }

    /// Register a new parameter with default value and flags
    ///
    /// If the parameter already exists, this is a no-op (idempotent).
    pub fn register(
        &mut self,
        name: &str,
        default_value: ParamValue,
        flags: ParamFlags,
    ) -> Result<(), ParameterError> {
        let key = make_key(name)?;

        if self.parameters.contains_key(&key) {
            // Already exists, don't overwrite
            return Ok(());
        }

        self.parameters
            .insert(
                key,
                ParamEntry {
                    value: default_value,
                    flags,
                },
            )
            .map_err(|_| ParameterError::StoreFull)?;
        self.dirty = true;
        Ok(())
    }

    /// Check if parameter is read-only
    pub fn is_read_only(&self, name: &str) -> bool {
        make_key(name)
            .ok()
            .and_then(|key| self.parameters.get(&key))
            .is_some_and(|entry| entry.flags.contains(ParamFlags::READ_ONLY))
    }

    /// Iterate over all parameters as (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.parameters
            .iter()
            .map(|(name, entry)| (name.as_str(), &entry.value))
    }

    /// Check if store has unsaved changes
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear dirty flag (called after the host saved the store)
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Get parameter count
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

fn make_key(name: &str) -> Result<String<PARAM_NAME_LEN>, ParameterError> {
    let mut key = String::<PARAM_NAME_LEN>::new();
    key.push_str(name)
        .map_err(|_| ParameterError::InvalidConfig)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_store_new() {
        let store = ParameterStore::new();
        assert!(store.is_empty());
        assert!(!store.is_dirty());
    }

    #[test]
    fn test_parameter_store_register_and_get() {
        let mut store = ParameterStore::new();
        store
            .register("WP_RADIUS", ParamValue::Float(10.0), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("WP_RADIUS"), Some(&ParamValue::Float(10.0)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_parameter_store_set() {
        let mut store = ParameterStore::new();
        store
            .register("WP_RADIUS", ParamValue::Float(10.0), ParamFlags::empty())
            .unwrap();
        store.clear_dirty();
        store.set("WP_RADIUS", ParamValue::Float(5.0)).unwrap();
        assert_eq!(store.get("WP_RADIUS"), Some(&ParamValue::Float(5.0)));
        assert!(store.is_dirty());
    }

    #[test]
    fn test_parameter_store_set_unknown() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.set("UNKNOWN", ParamValue::Int(1)),
            Err(ParameterError::InvalidConfig)
        );
    }

    #[test]
    fn test_parameter_name_too_long() {
        let mut store = ParameterStore::new();
        assert_eq!(
            store.register(
                "A_VERY_LONG_PARAMETER_NAME",
                ParamValue::Int(1),
                ParamFlags::empty()
            ),
            Err(ParameterError::InvalidConfig)
        );
        assert!(store.get("A_VERY_LONG_PARAMETER_NAME").is_none());
    }

    #[test]
    fn test_parameter_store_register_idempotent() {
        let mut store = ParameterStore::new();
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        store.set("TEST", ParamValue::Int(100)).unwrap();
        // Re-register should not overwrite
        store
            .register("TEST", ParamValue::Int(42), ParamFlags::empty())
            .unwrap();
        assert_eq!(store.get("TEST"), Some(&ParamValue::Int(100)));
    }

    #[test]
    fn test_parameter_store_full() {
        let mut store = ParameterStore::new();
        let names = [
            "P0", "P1", "P2", "P3", "P4", "P5", "P6", "P7", "P8", "P9", "P10", "P11", "P12",
            "P13", "P14", "P15",
        ];
        for name in names {
            store
                .register(name, ParamValue::Int(0), ParamFlags::empty())
                .unwrap();
        }
        assert_eq!(
            store.register("P16", ParamValue::Int(0), ParamFlags::empty()),
            Err(ParameterError::StoreFull)
        );
    }

    #[test]
    fn test_parameter_read_only() {
        let mut store = ParameterStore::new();
        store
            .register("READONLY", ParamValue::Int(42), ParamFlags::READ_ONLY)
            .unwrap();
        assert!(store.is_read_only("READONLY"));
        assert_eq!(
            store.set("READONLY", ParamValue::Int(100)),
            Err(ParameterError::ReadOnly)
        );
        assert_eq!(store.get("READONLY"), Some(&ParamValue::Int(42)));
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut store = ParameterStore::new();
        store
            .register("B", ParamValue::Int(2), ParamFlags::empty())
            .unwrap();
        store
            .register("A", ParamValue::Bool(true), ParamFlags::empty())
            .unwrap();
        let names: heapless::Vec<&str, MAX_PARAMS> = store.iter().map(|(name, _)| name).collect();
        assert_eq!(names.as_slice(), &["B", "A"]);
    }

    #[test]
    fn test_param_value_as_f64() {
        assert_eq!(ParamValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(ParamValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(ParamValue::Bool(true).as_f64(), None);
    }
}

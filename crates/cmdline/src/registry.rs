//! # Flag Registry
//!
//! The name-keyed collection of declared flags. The registry exclusively owns
//! every slot; callers address a flag by name only.
//!
//! Passing an unregistered name to [`FlagRegistry::set_var`] or
//! [`FlagRegistry::get_var`] is a programming error and panics. The `is_*`
//! queries never panic.

use crate::error::FlagError;
use crate::kind::FlagKind;
use crate::slot::{Flag, new_slot};
use crate::value::{FlagValue, Scalar};
use fxhash::FxHashMap;
use tracing::debug;

/// Maps flag names to their typed slots.
#[derive(Debug, Default)]
pub struct FlagRegistry {
    flags: FxHashMap<String, Box<dyn Flag>>,
}

impl FlagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a flag of `kind` holding its zero value.
    ///
    /// Registering a name twice replaces the earlier flag, value and all.
    pub fn add_flag(&mut self, kind: FlagKind, name: impl Into<String>, required: bool) {
        let name = name.into();
        self.flags.insert(name.clone(), new_slot(kind, name, required));
    }

    /// Registers a flag whose kind is given by name (`"IntFlag"`, `"int"`, ...).
    ///
    /// Unknown kind names are ignored and no flag is created.
    /// Returns whether a flag was registered.
    pub fn declare(&mut self, kind: &str, name: impl Into<String>, required: bool) -> bool {
        let name = name.into();
        match kind.parse::<FlagKind>() {
            Ok(kind) => {
                self.add_flag(kind, name, required);
                true
            },
            Err(e) => {
                debug!(flag = %name, "{e}, flag not registered");
                false
            },
        }
    }

    /// Decodes `raw` into the named flag.
    ///
    /// # Errors
    /// Returns [`FlagError::Decode`] if `raw` is not valid for the flag's kind;
    /// the flag keeps its previous value and loaded state.
    ///
    /// # Panics
    /// Panics if `name` is not registered.
    #[track_caller]
    pub fn set_var(&mut self, name: &str, raw: &str) -> Result<(), FlagError> {
        match self.flags.get_mut(name) {
            Some(flag) => flag.set(raw),
            None => unknown_flag("set_var", name),
        }
    }

    /// Returns the current value of the named flag.
    ///
    /// Unloaded flags return their kind's zero value; use [`Self::is_loaded`]
    /// to tell "never set" apart from "set to zero".
    ///
    /// # Panics
    /// Panics if `name` is not registered.
    #[must_use]
    #[track_caller]
    pub fn get_var(&self, name: &str) -> FlagValue {
        self.flag(name, "get_var").get()
    }

    /// Returns the named flag's value as `T`.
    ///
    /// # Errors
    /// Returns [`FlagError::KindMismatch`] if the flag was declared with a kind
    /// other than `T`'s.
    ///
    /// # Panics
    /// Panics if `name` is not registered.
    #[track_caller]
    pub fn get<T: Scalar>(&self, name: &str) -> Result<T, FlagError> {
        let flag = self.flag(name, "get");
        let found = flag.kind();
        T::from_value(flag.get()).ok_or_else(|| FlagError::KindMismatch {
            name: name.to_owned(),
            expected: T::KIND,
            found,
        })
    }

    #[must_use]
    pub fn is_flag(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// `false` for unregistered names.
    #[must_use]
    pub fn is_loaded(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.loaded())
    }

    /// `false` for unregistered names.
    #[must_use]
    pub fn is_required(&self, name: &str) -> bool {
        self.flags.get(name).is_some_and(|f| f.required())
    }

    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<FlagKind> {
        self.flags.get(name).map(|f| f.kind())
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Required flags that are not loaded, dash-prefixed and sorted.
    pub(crate) fn missing_required(&self) -> Vec<String> {
        let mut missing: Vec<String> = self
            .flags
            .iter()
            .filter(|(_, f)| f.required() && !f.loaded())
            .map(|(name, _)| format!("-{name}"))
            .collect();
        missing.sort_unstable();
        missing
    }

    #[track_caller]
    fn flag(&self, name: &str, op: &str) -> &dyn Flag {
        match self.flags.get(name) {
            Some(flag) => flag.as_ref(),
            None => unknown_flag(op, name),
        }
    }
}

#[cold]
#[track_caller]
fn unknown_flag(op: &str, name: &str) -> ! {
    panic!("FlagRegistry::{op} given unrecognized flag name {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_is_sorted_and_prefixed() {
        let mut registry = FlagRegistry::new();
        registry.add_flag(FlagKind::Int, "zeta", true);
        registry.add_flag(FlagKind::String, "alpha", true);
        registry.add_flag(FlagKind::Bool, "quiet", false);

        assert_eq!(registry.missing_required(), vec!["-alpha", "-zeta"]);

        registry.set_var("alpha", "x").unwrap();
        assert_eq!(registry.missing_required(), vec!["-zeta"]);
    }

    #[test]
    fn declare_ignores_unknown_kinds() {
        let mut registry = FlagRegistry::new();
        assert!(registry.declare("Int64Flag", "seed", false));
        assert!(!registry.declare("None", "ghost", true));

        assert_eq!(registry.kind_of("seed"), Some(FlagKind::Int64));
        assert!(!registry.is_flag("ghost"));
        assert!(registry.missing_required().is_empty());
    }
}

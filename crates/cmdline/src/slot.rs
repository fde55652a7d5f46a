//! Typed storage cells backing declared flags.
//!
//! Every kind shares one implementation, [`Slot<T>`], parameterized over its
//! [`Scalar`] payload. The registry stores slots behind the object-safe
//! [`Flag`] trait so it can treat all kinds uniformly.

use crate::error::FlagError;
use crate::kind::FlagKind;
use crate::value::{FlagValue, Scalar};
use std::fmt::Debug;

/// Capability set shared by every slot kind.
pub trait Flag: Debug {
    fn kind(&self) -> FlagKind;

    fn name(&self) -> &str;

    /// Decodes `raw` and stores it, marking the flag loaded.
    ///
    /// # Errors
    /// Returns [`FlagError::Decode`] if `raw` is not a valid literal of the
    /// flag's kind. The stored value and the loaded marker are left untouched.
    fn set(&mut self, raw: &str) -> Result<(), FlagError>;

    fn get(&self) -> FlagValue;

    fn loaded(&self) -> bool;

    fn required(&self) -> bool;
}

/// A named cell holding one decoded value of type `T`.
#[derive(Debug, Clone)]
pub struct Slot<T: Scalar> {
    name: String,
    value: T,
    required: bool,
    loaded: bool,
}

pub type IntSlot = Slot<isize>;
pub type Int64Slot = Slot<i64>;
pub type FloatSlot = Slot<f64>;
pub type StringSlot = Slot<String>;
pub type BoolSlot = Slot<bool>;

impl<T: Scalar> Slot<T> {
    /// Creates an unloaded slot holding the zero value of `T`.
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self { name: name.into(), value: T::default(), required, loaded: false }
    }

    /// Borrows the stored value without going through [`FlagValue`].
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Scalar> Flag for Slot<T> {
    fn kind(&self) -> FlagKind {
        T::KIND
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set(&mut self, raw: &str) -> Result<(), FlagError> {
        let value = T::decode(raw).ok_or_else(|| FlagError::Decode {
            name: self.name.clone(),
            kind: T::KIND,
            raw: raw.to_owned(),
        })?;
        self.value = value;
        self.loaded = true;
        Ok(())
    }

    fn get(&self) -> FlagValue {
        self.value.clone().into_value()
    }

    fn loaded(&self) -> bool {
        self.loaded
    }

    fn required(&self) -> bool {
        self.required
    }
}

/// Builds a boxed slot for `kind`.
pub(crate) fn new_slot(kind: FlagKind, name: String, required: bool) -> Box<dyn Flag> {
    match kind {
        FlagKind::Int => Box::new(IntSlot::new(name, required)),
        FlagKind::Int64 => Box::new(Int64Slot::new(name, required)),
        FlagKind::Float => Box::new(FloatSlot::new(name, required)),
        FlagKind::String => Box::new(StringSlot::new(name, required)),
        FlagKind::Bool => Box::new(BoolSlot::new(name, required)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_unloaded_zero() {
        let slot = IntSlot::new("n", true);
        assert_eq!(slot.name(), "n");
        assert_eq!(slot.kind(), FlagKind::Int);
        assert!(slot.required());
        assert!(!slot.loaded());
        assert_eq!(slot.get(), FlagValue::Int(0));
    }

    #[test]
    fn failed_decode_keeps_previous_value() {
        let mut slot = FloatSlot::new("rate", false);
        slot.set("0.25").unwrap();

        let err = slot.set("fast").unwrap_err();
        assert!(matches!(err, FlagError::Decode { kind: FlagKind::Float, .. }));
        assert_eq!(*slot.value(), 0.25);
        assert!(slot.loaded());
    }

    #[test]
    fn failed_decode_on_fresh_slot_stays_unloaded() {
        let mut slot = Int64Slot::new("seed", false);
        assert!(slot.set("true").is_err());
        assert!(!slot.loaded());
        assert_eq!(slot.get(), FlagValue::Int64(0));
    }

    #[test]
    fn string_and_bool_always_load() {
        let mut name = StringSlot::new("name", false);
        name.set("").unwrap();
        assert!(name.loaded());

        let mut verbose = BoolSlot::new("verbose", false);
        verbose.set("nope").unwrap();
        assert!(verbose.loaded());
        assert_eq!(verbose.get(), FlagValue::Bool(false));
    }

    #[test]
    fn boxed_slots_report_their_kind() {
        for kind in FlagKind::ALL {
            let slot = new_slot(kind, "x".into(), false);
            assert_eq!(slot.kind(), kind);
            assert_eq!(slot.get(), FlagValue::zero(kind));
        }
    }
}

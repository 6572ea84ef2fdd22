//! The nullable container.
//!
//! Two states, present and absent, with one invariant: an absent container
//! holds `T::default()`. Mutators that clear the value reset the slot, so
//! nothing written earlier can leak through `as_raw` after `set_null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// A value of `T` that may be null.
///
/// Unlike `Option<T>`, a `Nullable<T>` always owns a `T`: when absent, the
/// slot holds `T::default()`. This makes `as_raw` total and gives absent
/// containers a canonical in-memory form.
///
/// Serializes to JSON `null` when absent; otherwise delegates to `T`.
/// `null` input deserializes to absent, anything else is parsed as `T`.
#[derive(Debug, Clone, Copy)]
pub struct Nullable<T> {
    value: T,
    present: bool,
}

impl<T> Nullable<T> {
    /// Creates a present container wrapping `value`.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        Self {
            value,
            present: true,
        }
    }

    /// Returns a reference to the value, or `None` if null.
    #[must_use]
    pub fn checked(&self) -> Option<&T> {
        if self.present { Some(&self.value) } else { None }
    }

    /// Consumes the container, returning the value if present.
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        if self.present { Some(self.value) } else { None }
    }

    /// Returns true if the container is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        !self.present
    }

    /// Borrows the internal slot regardless of presence.
    ///
    /// When null, this is `T::default()`, not garbage. Callers that need to
    /// distinguish a present default from null consult [`is_null`] first.
    ///
    /// [`is_null`]: Nullable::is_null
    #[must_use]
    pub fn as_raw(&self) -> &T {
        &self.value
    }

    /// Mutably borrows the internal slot regardless of presence.
    ///
    /// Writing through this borrow does not change presence.
    #[must_use]
    pub fn as_raw_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Sets the container to a present value, overwriting any prior state.
    pub fn set_value(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }
}

impl<T: Default> Nullable<T> {
    /// Creates a null container.
    #[must_use]
    pub fn null() -> Self {
        Self {
            value: T::default(),
            present: false,
        }
    }

    /// Creates a container that is present iff `opt` is `Some`.
    #[must_use]
    pub fn from_option(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Self::from_value(value),
            None => Self::null(),
        }
    }

    /// Clears the container. The slot is reset to `T::default()`.
    ///
    /// Idempotent.
    pub fn set_null(&mut self) {
        self.value = T::default();
        self.present = false;
    }

    /// Equivalent to [`set_value`] for `Some` and [`set_null`] for `None`.
    ///
    /// [`set_value`]: Nullable::set_value
    /// [`set_null`]: Nullable::set_null
    pub fn set_option(&mut self, opt: Option<T>) {
        match opt {
            Some(value) => self.set_value(value),
            None => self.set_null(),
        }
    }
}

impl<T: Clone> Nullable<T> {
    /// Returns the value if present, `T::default()` otherwise.
    #[must_use]
    pub fn value_or_zero(&self) -> T {
        self.value.clone()
    }
}

impl<T: Default> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(opt: Option<T>) -> Self {
        Self::from_option(opt)
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.present, other.present) {
            (true, true) => self.value == other.value,
            // Absence is a single equivalence class; residual slot contents
            // do not participate.
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.present.hash(state);
        if self.present {
            self.value.hash(state);
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.checked() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Deserialization builds a fresh value; a parse error propagates
        // before any container is produced, so callers never observe a
        // half-decoded state.
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

//! Unordered UUID set
//!
//! [`Set`] wraps a hash set in an `Option` so the uninitialized state can be
//! told apart from an empty set:
//!
//! - `Set::nil()` / `Set::default()` is uninitialized and encodes as NULL
//! - `Set::new()` is initialized and empty and encodes as `{}` / `[]`
//!
//! Iteration order is unspecified. Anything that has to be reproducible
//! (encoders, `Display`, [`Set::sorted_slice`]) sorts with [`crate::compare`]
//! first.

use crate::compare::compare;
use crate::slice::Slice;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Set of UUIDs with a distinguished nil state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Set(Option<FxHashSet<Uuid>>);

impl Set {
    /// Create an initialized, empty set
    pub fn new() -> Self {
        Set(Some(FxHashSet::default()))
    }

    /// Create the uninitialized set (SQL NULL / JSON null)
    pub fn nil() -> Self {
        Set(None)
    }

    /// Create an initialized set containing every id of `ids`
    ///
    /// Duplicates collapse.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuidcol_core::{Set, Uuid};
    ///
    /// let id = Uuid::nil();
    /// let set = Set::from_slice([id, id]);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn from_slice<S: AsRef<[Uuid]>>(ids: S) -> Self {
        let ids = ids.as_ref();
        let mut inner = FxHashSet::with_capacity_and_hasher(ids.len(), Default::default());
        inner.extend(ids.iter().copied());
        Set(Some(inner))
    }

    /// True for the uninitialized set
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Number of members (0 for nil)
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |s| s.len())
    }

    /// True if the set has no members, nil or not
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over members in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Uuid> + '_ {
        self.0.iter().flatten()
    }

    fn inner_mut(&mut self) -> &mut FxHashSet<Uuid> {
        self.0.get_or_insert_with(FxHashSet::default)
    }

    /// Returns an arbitrary member, or the nil UUID if the set is empty
    ///
    /// Most useful to get the only UUID in a set of size one.
    pub fn get_one(&self) -> Uuid {
        self.iter().next().copied().unwrap_or_else(Uuid::nil)
    }

    /// Add one id. Initializes a nil set.
    pub fn add(&mut self, id: Uuid) {
        self.inner_mut().insert(id);
    }

    /// Add every id of a slice. Initializes a nil set.
    pub fn add_slice<S: AsRef<[Uuid]>>(&mut self, ids: S) {
        self.inner_mut().extend(ids.as_ref().iter().copied());
    }

    /// Add every member of `other`. Initializes a nil set.
    pub fn add_set(&mut self, other: &Set) {
        self.inner_mut().extend(other.iter().copied());
    }

    /// Membership test
    pub fn contains(&self, id: &Uuid) -> bool {
        self.0.as_ref().map_or(false, |s| s.contains(id))
    }

    /// Remove one id
    pub fn delete(&mut self, id: &Uuid) {
        if let Some(inner) = self.0.as_mut() {
            inner.remove(id);
        }
    }

    /// Remove every member, keeping the set initialized
    pub fn delete_all(&mut self) {
        if let Some(inner) = self.0.as_mut() {
            inner.clear();
        }
    }

    /// Remove every id of a slice
    pub fn delete_slice<S: AsRef<[Uuid]>>(&mut self, ids: S) {
        if let Some(inner) = self.0.as_mut() {
            for id in ids.as_ref() {
                inner.remove(id);
            }
        }
    }

    /// Remove every member of `other`
    pub fn delete_set(&mut self, other: &Set) {
        if let Some(inner) = self.0.as_mut() {
            for id in other.iter() {
                inner.remove(id);
            }
        }
    }

    /// Symmetric difference: ids present in exactly one of the two sets
    ///
    /// The result is always initialized.
    pub fn diff(&self, other: &Set) -> Set {
        let mut diff = Set::new();
        for id in self.iter() {
            if !other.contains(id) {
                diff.add(*id);
            }
        }
        for id in other.iter() {
            if !self.contains(id) {
                diff.add(*id);
            }
        }
        diff
    }

    /// Members as a [`Slice`] in unspecified order
    pub fn to_slice(&self) -> Slice {
        Slice::from(self.iter().copied().collect::<Vec<_>>())
    }

    /// Members as a [`Slice`] in canonical order
    pub fn sorted_slice(&self) -> Slice {
        let mut s = self.to_slice();
        s.sort();
        s
    }

    /// Members formatted as strings, in canonical order
    pub fn sorted_strings(&self) -> Vec<String> {
        self.sorted_slice().strings()
    }

    /// Replace the contents with `ids`, initializing a nil set
    ///
    /// Used by decoders once the whole input has been validated.
    pub fn replace_with<S: AsRef<[Uuid]>>(&mut self, ids: S) {
        let inner = self.inner_mut();
        inner.clear();
        inner.extend(ids.as_ref().iter().copied());
    }

    /// Reset to the uninitialized state
    pub fn set_nil(&mut self) {
        self.0 = None;
    }
}

impl fmt::Display for Set {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set{}", self.sorted_slice())
    }
}

impl FromIterator<Uuid> for Set {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Set(Some(iter.into_iter().collect()))
    }
}

impl Extend<Uuid> for Set {
    fn extend<I: IntoIterator<Item = Uuid>>(&mut self, iter: I) {
        self.inner_mut().extend(iter);
    }
}

impl<'a> IntoIterator for &'a Set {
    type Item = &'a Uuid;
    type IntoIter = std::iter::Flatten<std::option::Iter<'a, FxHashSet<Uuid>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().flatten()
    }
}

impl Serialize for Set {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            None => serializer.serialize_none(),
            Some(inner) => {
                let mut sorted: Vec<&Uuid> = inner.iter().collect();
                sorted.sort_by(|a, b| compare(a, b));
                serializer.collect_seq(sorted)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Set {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ids = Option::<Vec<Uuid>>::deserialize(deserializer)?;
        Ok(match ids {
            None => Set::nil(),
            Some(ids) => Set::from_slice(ids),
        })
    }
}

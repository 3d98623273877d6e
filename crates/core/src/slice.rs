//! Ordered UUID sequence
//!
//! [`Slice`] keeps insertion order and duplicates. Like [`crate::Set`] it
//! distinguishes the uninitialized state (`None`, encoded as NULL / `null`)
//! from an initialized empty sequence (encoded as `{}` / `[]`).
//!
//! Membership queries are linear scans; no index is maintained.

use crate::compare::compare;
use crate::error::{Error, Result};
use crate::set::Set;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Ordered sequence of UUIDs with a distinguished nil state
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Slice(Option<Vec<Uuid>>);

impl Slice {
    /// Create an initialized, empty slice
    pub fn new() -> Self {
        Slice(Some(Vec::new()))
    }

    /// Create the uninitialized slice (SQL NULL / JSON null)
    pub fn nil() -> Self {
        Slice(None)
    }

    /// Parse every string as a UUID, keeping order
    ///
    /// `None` yields the nil slice. The first unparseable element fails the
    /// whole conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// use uuidcol_core::Slice;
    ///
    /// let s = Slice::from_strings(Some(&["6ba7b810-9dad-11d1-80b4-00c04fd430c8"][..])).unwrap();
    /// assert_eq!(s.len(), 1);
    ///
    /// let nil = Slice::from_strings::<&str>(None).unwrap();
    /// assert!(nil.is_nil());
    ///
    /// assert!(Slice::from_strings(Some(&["not-a-uuid"][..])).is_err());
    /// ```
    pub fn from_strings<S: AsRef<str>>(strs: Option<&[S]>) -> Result<Self> {
        let Some(strs) = strs else {
            return Ok(Slice::nil());
        };

        let mut ids = Vec::with_capacity(strs.len());
        for (index, s) in strs.iter().enumerate() {
            let s = s.as_ref();
            let id = Uuid::parse_str(s).map_err(|source| Error::ElementParse {
                index,
                element: s.to_string(),
                source,
            })?;
            ids.push(id);
        }
        Ok(Slice(Some(ids)))
    }

    /// Like [`Slice::from_strings`] for known-good literals
    ///
    /// # Panics
    ///
    /// Panics if any string is not a valid UUID.
    pub fn must_from_strings<S: AsRef<str>>(strs: &[S]) -> Self {
        match Self::from_strings(Some(strs)) {
            Ok(s) => s,
            Err(e) => panic!("Slice::must_from_strings: {}", e),
        }
    }

    /// True for the uninitialized slice
    pub fn is_nil(&self) -> bool {
        self.0.is_none()
    }

    /// Number of elements (0 for nil)
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True if there are no elements, nil or not
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Borrow the elements (empty for nil)
    pub fn as_slice(&self) -> &[Uuid] {
        self.0.as_deref().unwrap_or(&[])
    }

    /// Iterate in order
    pub fn iter(&self) -> std::slice::Iter<'_, Uuid> {
        self.as_slice().iter()
    }

    /// Append an id. Initializes a nil slice.
    pub fn push(&mut self, id: Uuid) {
        self.0.get_or_insert_with(Vec::new).push(id);
    }

    /// Take the elements out, `None` for nil
    pub fn into_inner(self) -> Option<Vec<Uuid>> {
        self.0
    }

    /// Collapse to a [`Set`], dropping order and duplicates
    pub fn to_set(&self) -> Set {
        Set::from_slice(self.as_slice())
    }

    /// Elements formatted as strings, in order
    pub fn strings(&self) -> Vec<String> {
        self.iter().map(|id| id.to_string()).collect()
    }

    /// Stable in-place sort by the canonical order
    pub fn sort(&mut self) {
        if let Some(ids) = self.0.as_mut() {
            ids.sort_by(compare);
        }
    }

    /// Sorted copy; `self` is left as is
    pub fn sorted_clone(&self) -> Slice {
        let mut clone = self.clone();
        clone.sort();
        clone
    }

    /// Linear membership test
    pub fn contains(&self, id: &Uuid) -> bool {
        self.as_slice().contains(id)
    }

    /// True if any element of `other` is also in `self`
    pub fn contains_any(&self, other: &Slice) -> bool {
        self.iter().any(|curr| other.contains(curr))
    }

    /// True if any element is a member of `set`
    pub fn contains_any_from_set(&self, set: &Set) -> bool {
        self.iter().any(|id| set.contains(id))
    }

    /// Encode as JSON: `null` for nil, otherwise an array of strings in order
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON bytes
    ///
    /// `null` and an empty payload both yield the nil slice.
    pub fn from_json(data: &[u8]) -> Result<Slice> {
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Slice::nil());
        }
        Ok(serde_json::from_slice(data)?)
    }

    /// Decode from JSON bytes into `self`
    ///
    /// On error `self` is left untouched.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        *self = Slice::from_json(data)?;
        Ok(())
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.strings().join(","))
    }
}

impl From<Vec<Uuid>> for Slice {
    fn from(ids: Vec<Uuid>) -> Self {
        Slice(Some(ids))
    }
}

impl From<Option<Vec<Uuid>>> for Slice {
    fn from(ids: Option<Vec<Uuid>>) -> Self {
        Slice(ids)
    }
}

impl AsRef<[Uuid]> for Slice {
    fn as_ref(&self) -> &[Uuid] {
        self.as_slice()
    }
}

impl FromIterator<Uuid> for Slice {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Slice(Some(iter.into_iter().collect()))
    }
}

impl<'a> IntoIterator for &'a Slice {
    type Item = &'a Uuid;
    type IntoIter = std::slice::Iter<'a, Uuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Slice {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            None => serializer.serialize_none(),
            Some(ids) => serializer.collect_seq(ids),
        }
    }
}

impl<'de> Deserialize<'de> for Slice {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Vec<Uuid>>::deserialize(deserializer).map(Slice)
    }
}

//! The three-way outcome of a cache read.
//!
//! "Key does not exist" must stay distinguishable from "an empty collection
//! was stored" and from a failed request, because the caller decides between
//! trusting the cache and querying the origin system based on which one it
//! got. This module models the non-error half of that split; failures travel
//! through `CacheError` as usual.

/// Result of a cache read that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheLookup<T> {
    /// The key existed and the payload decoded. The value may legitimately
    /// be an empty collection - that is still a hit.
    Found(T),
    /// The key does not exist in the store. This is the cache-miss signal,
    /// not an error and not an empty value.
    Absent,
}

impl<T> CacheLookup<T> {
    /// Returns true if the read hit a stored value.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns true if the key was missing.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Convert into an `Option`, discarding the found/absent distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Borrow the stored value, if any.
    pub fn as_found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::Absent => None,
        }
    }

    /// Map the stored value, keeping `Absent` as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CacheLookup<U> {
        match self {
            Self::Found(value) => CacheLookup::Found(f(value)),
            Self::Absent => CacheLookup::Absent,
        }
    }
}

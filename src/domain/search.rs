// SPDX-License-Identifier: MPL-2.0
//! Search lifecycle types.

use super::breed::Breed;

/// Sequence number tagging each image search.
///
/// Only the response carrying the most recent id may change what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestId(u64);

impl RequestId {
    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Coarse state of the breed search, as observed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No breed selected.
    Idle,
    /// A breed is selected but no search has completed or started for it.
    Selected,
    /// A search request is in flight.
    Loading,
    /// The last search returned images.
    Loaded,
    /// The last search failed.
    Failed,
}

/// Position of one image within a result set, 1-indexed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImagePosition {
    pub index: usize,
    pub total: usize,
}

/// Ordered image URLs returned for a breed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    breed: Breed,
    urls: Vec<String>,
}

impl ImageResult {
    #[must_use]
    pub fn new(breed: Breed, urls: Vec<String>) -> Self {
        Self { breed, urls }
    }

    #[must_use]
    pub fn breed(&self) -> &Breed {
        &self.breed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Iterates over `(position, url)` pairs in API order.
    pub fn entries(&self) -> impl Iterator<Item = (ImagePosition, &str)> + '_ {
        let total = self.urls.len();
        self.urls.iter().enumerate().map(move |(i, url)| {
            (
                ImagePosition {
                    index: i + 1,
                    total,
                },
                url.as_str(),
            )
        })
    }
}

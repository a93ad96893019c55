// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure types with no dependency on the UI toolkit or the network.
//!
//! # Modules
//!
//! - [`breed`]: [`Breed`](breed::Breed) identifiers and breed list normalization
//! - [`search`]: [`SearchState`](search::SearchState), [`RequestId`](search::RequestId)
//!   and [`ImageResult`](search::ImageResult)

pub mod breed;
pub mod search;

pub use breed::Breed;
pub use search::{ImagePosition, ImageResult, RequestId, SearchState};

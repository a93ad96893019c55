// SPDX-License-Identifier: MPL-2.0
//! Breed data port.
//!
//! [`BreedSource`] is the only way the application reaches the network.
//! The HTTP adapter lives in `infrastructure::dog_ceo`; tests install their
//! own implementation.

use crate::domain::Breed;
use crate::error::Result;
use futures_util::future::BoxFuture;
use std::sync::Arc;

/// Provides breed names, image URLs for a breed, and image bytes.
///
/// Futures are `'static` so callers can hand them straight to `Task::perform`.
pub trait BreedSource: Send + Sync {
    /// Fetches every known breed, sorted and de-duplicated.
    fn list_breeds(&self) -> BoxFuture<'static, Result<Vec<Breed>>>;

    /// Fetches the ordered image URLs for `breed`.
    fn search_images(&self, breed: &Breed) -> BoxFuture<'static, Result<Vec<String>>>;

    /// Downloads the encoded bytes of one image.
    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>>>;
}

/// Shared handle to the active breed source.
pub type SharedBreedSource = Arc<dyn BreedSource>;

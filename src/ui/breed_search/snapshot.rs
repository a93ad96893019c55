// SPDX-License-Identifier: MPL-2.0
//! Plain description of what the breed search view displays.
//!
//! Iced widgets cannot be queried after construction, so tests assert on a
//! [`Snapshot`] instead. [`super::view`] renders from the same label helpers,
//! which keeps the two in step.

use super::state::{BreedList, State, TileImage};
use crate::domain::{Breed, ImagePosition};
use crate::i18n::fluent::I18n;

/// Everything a user can read or act on in the breed search view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub heading: String,
    pub selector: Selector,
    pub search_button: SearchButton,
    /// Shown only while a search is in flight.
    pub loading_text: Option<String>,
    /// "<N> Results", shown once a search has completed.
    pub results_text: Option<String>,
    /// Message of the last failed search.
    pub error_text: Option<String>,
    pub images: Vec<ImageNode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Selected breed, or the placeholder text.
    pub display_value: String,
    pub options: Vec<String>,
    /// Loading or failure note about the breed list itself.
    pub status: Option<String>,
    pub can_retry: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchButton {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Placeholder,
    Result,
}

/// One image element with its accessible name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub kind: ImageKind,
    pub name: String,
    /// False until the pixels of a result image are available.
    pub loaded: bool,
}

impl Snapshot {
    /// Accessible names of every image, in display order.
    pub fn image_names(&self) -> Vec<&str> {
        self.images.iter().map(|image| image.name.as_str()).collect()
    }

    pub fn placeholder_count(&self) -> usize {
        self.images
            .iter()
            .filter(|image| image.kind == ImageKind::Placeholder)
            .count()
    }
}

/// Accessible name of a result image: "<breed> <index> of <total>".
pub fn image_label(i18n: &I18n, breed: &Breed, position: ImagePosition) -> String {
    let index = position.index.to_string();
    let total = position.total.to_string();
    i18n.tr_with_args(
        "result-image-label",
        &[
            ("breed", breed.as_str()),
            ("index", index.as_str()),
            ("total", total.as_str()),
        ],
    )
}

/// Text standing in for a result image whose pixels are not shown.
pub fn tile_status_label(i18n: &I18n, image: &TileImage) -> Option<String> {
    match image {
        TileImage::Pending => Some(i18n.tr("result-image-pending")),
        TileImage::Unavailable => Some(i18n.tr("result-image-unavailable")),
        TileImage::Ready(_) => None,
    }
}

/// Result summary: "<N> Results".
pub fn results_label(i18n: &I18n, count: usize) -> String {
    let count = count.to_string();
    i18n.tr_with_args("search-results", &[("count", count.as_str())])
}

/// Failure message for a search, followed by the error category.
pub fn error_label(i18n: &I18n, breed: &Breed, error: &crate::error::Error) -> String {
    format!(
        "{} {}",
        i18n.tr_with_args("search-error", &[("breed", breed.as_str())]),
        i18n.tr(error.i18n_key())
    )
}

pub fn snapshot(state: &State, i18n: &I18n) -> Snapshot {
    let (status, can_retry) = match state.breeds() {
        BreedList::Loading => (Some(i18n.tr("breed-list-loading")), false),
        BreedList::Ready(_) => (None, false),
        BreedList::Failed(error) => (
            Some(format!("{} {}", i18n.tr("breed-list-error"), i18n.tr(error.i18n_key()))),
            true,
        ),
    };

    let selector = Selector {
        display_value: state
            .selected()
            .map(Breed::to_string)
            .unwrap_or_else(|| i18n.tr("breed-select-placeholder")),
        options: state.breed_options().iter().map(Breed::to_string).collect(),
        status,
        can_retry,
    };

    let mut images = Vec::new();
    if state.shows_placeholder() {
        images.push(ImageNode {
            kind: ImageKind::Placeholder,
            name: i18n.tr("placeholder-image-label"),
            loaded: true,
        });
    }

    let results_text = state.results().map(|(breed, tiles)| {
        images.extend(tiles.iter().map(|tile| ImageNode {
            kind: ImageKind::Result,
            name: image_label(i18n, breed, tile.position),
            loaded: matches!(tile.image, TileImage::Ready(_)),
        }));
        results_label(i18n, tiles.len())
    });

    Snapshot {
        heading: i18n.tr("app-heading"),
        selector,
        search_button: SearchButton {
            label: i18n.tr("search-button"),
            enabled: state.can_search(),
        },
        loading_text: state.is_loading().then(|| i18n.tr("search-loading")),
        results_text,
        error_text: state
            .failure()
            .map(|(breed, error)| error_label(i18n, breed, error)),
        images,
    }
}

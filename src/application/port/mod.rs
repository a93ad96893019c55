// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`breeds`]: Breed list, image search and image download
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so one instance can be shared behind an `Arc`
//! - Methods return boxed `'static` futures; callers wrap them in Iced `Task`s

pub mod breeds;

pub use breeds::{BreedSource, SharedBreedSource};

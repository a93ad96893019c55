// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the UI and the outside world.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer holds ports as trait objects
//!
//! # Example
//!
//! ```ignore
//! use doggy_directory::application::port::{BreedSource, SharedBreedSource};
//! use doggy_directory::infrastructure::DogCeoClient;
//! use std::sync::Arc;
//!
//! let source: SharedBreedSource = Arc::new(DogCeoClient::new(&api_config)?);
//! let breeds = source.list_breeds().await?;
//! ```

pub mod port;

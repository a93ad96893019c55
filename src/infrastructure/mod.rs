// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in `application::port`.
//!
//! - [`dog_ceo`]: Breed data over HTTP (implements [`BreedSource`])
//! - [`unavailable`]: Always-failing source used when the HTTP client cannot start
//!
//! [`BreedSource`]: crate::application::port::BreedSource

pub mod dog_ceo;
pub mod unavailable;

pub use dog_ceo::DogCeoClient;
pub use unavailable::UnavailableSource;

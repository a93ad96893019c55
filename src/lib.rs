// SPDX-License-Identifier: MPL-2.0
//! `doggy_directory` lets you pick a dog breed and browse pictures of it,
//! built with the Iced GUI framework.
//!
//! Breed data comes from the Dog CEO API through the
//! [`BreedSource`](application::port::BreedSource) port, so the whole search
//! flow can be driven in tests with an in-memory source.

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

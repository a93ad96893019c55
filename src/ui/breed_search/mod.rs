// SPDX-License-Identifier: MPL-2.0
//! Breed search view: pick a breed, press Search, browse the pictures.
//!
//! - [`state`]: the selection/search state machine and its effects
//! - [`snapshot`]: a toolkit-free description of what is on screen
//! - [`view`]: the Iced widgets

pub mod snapshot;
pub mod state;
mod view;

pub use snapshot::{snapshot, ImageKind, ImageNode, Snapshot};
pub use state::{BreedList, Effect, Message, ResultTile, State, TileImage};
pub use view::{view, ViewContext};

// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod breed_search;
pub mod design_tokens;
pub mod styles;
pub mod theming;

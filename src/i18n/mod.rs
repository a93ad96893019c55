// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded from `assets/i18n/`. The
//! active locale is picked from the CLI, then the config file, then the OS,
//! falling back to `en-US`. Keys missing from the active locale fall back to
//! the `en-US` bundle.

pub mod fluent;

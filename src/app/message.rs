// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::breed_search;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    BreedSearch(breed_search::Message),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DOGGY_DIRECTORY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional API base URL, taking precedence over `[api] base_url`.
    pub api_base: Option<String>,
}

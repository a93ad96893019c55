// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, settings and the breed
//! search view, and turns the view's effects into network tasks through the
//! injected [`BreedSource`](crate::application::port::BreedSource).

mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedBreedSource;
use crate::config::{self, Config};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{DogCeoClient, UnavailableSource};
use crate::ui::breed_search;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    search: breed_search::State,
    source: SharedBreedSource,
    theme_mode: ThemeMode,
    download_concurrency: usize,
    /// i18n key of a warning raised while loading settings.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("search_state", &self.search.search_state())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

/// Builds the HTTP source for `config`, or a failing stand-in if the client
/// cannot be created.
fn build_source(config: &Config) -> SharedBreedSource {
    match DogCeoClient::new(&config.api) {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "using Dog CEO API");
            Arc::new(client)
        }
        Err(error) => {
            tracing::error!(%error, "failed to build HTTP client");
            Arc::new(UnavailableSource::new(error))
        }
    }
}

impl App {
    /// Loads settings, builds the HTTP source and starts fetching the breed list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (mut config, config_warning) = config::load();
        if flags.api_base.is_some() {
            config.api.base_url = flags.api_base;
        }

        let i18n = I18n::new(flags.lang, &config);
        let source = build_source(&config);
        Self::with_source(source, i18n, &config, config_warning)
    }

    /// Builds the app around an explicit source; the returned task loads the breed list.
    pub fn with_source(
        source: SharedBreedSource,
        i18n: I18n,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let (search, effect) = breed_search::State::new();
        let app = App {
            i18n,
            search,
            source,
            theme_mode: config.general.theme_mode,
            download_concurrency: config.api.download_concurrency(),
            config_warning,
        };
        let task = update::perform_effect(&app.source, app.download_concurrency, effect);
        (app, task)
    }

    /// What the breed search view currently displays.
    pub fn snapshot(&self) -> breed_search::Snapshot {
        breed_search::snapshot(&self.search, &self.i18n)
    }

    pub fn search(&self) -> &breed_search::State {
        &self.search
    }

    fn title(&self) -> String {
        match self.search.results() {
            Some((breed, _)) => format!("{breed} - {}", self.i18n.tr("window-title")),
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BreedSearch(msg) => {
                let mut ctx = update::UpdateContext {
                    search: &mut self.search,
                    source: &self.source,
                    download_concurrency: self.download_concurrency,
                };
                update::handle_breed_search_message(&mut ctx, msg)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            search: &self.search,
            warning: self.config_warning.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Breed, SearchState};
    use crate::error::Error;

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn offline_app() -> App {
        let source: SharedBreedSource =
            Arc::new(UnavailableSource::new(Error::Network("offline".into())));
        let (app, _task) = App::with_source(source, english(), &Config::default(), None);
        app
    }

    #[test]
    fn new_app_shows_landing_page() {
        let app = offline_app();
        let view = app.snapshot();
        assert_eq!(view.selector.display_value, "Select a breed");
        assert!(!view.search_button.enabled);
        assert_eq!(view.placeholder_count(), 1);
        assert_eq!(app.title(), "Doggy Directory");
    }

    #[test]
    fn update_routes_messages_to_search_view() {
        let mut app = offline_app();
        let husky = Breed::new("husky").unwrap();

        let _ = app.update(Message::BreedSearch(breed_search::Message::BreedsLoaded(Ok(
            vec![husky.clone()],
        ))));
        let _ = app.update(Message::BreedSearch(breed_search::Message::BreedSelected(
            husky,
        )));
        let _ = app.update(Message::BreedSearch(breed_search::Message::SearchPressed));

        assert_eq!(app.search().search_state(), SearchState::Loading);
        assert_eq!(app.snapshot().loading_text.as_deref(), Some("Loading..."));
    }

    #[test]
    fn title_names_the_displayed_breed() {
        let mut app = offline_app();
        let husky = Breed::new("husky").unwrap();
        let _ = app.update(Message::BreedSearch(breed_search::Message::BreedSelected(
            husky,
        )));
        let _ = app.update(Message::BreedSearch(breed_search::Message::SearchPressed));
        let request = crate::domain::RequestId::default().next();
        let _ = app.update(Message::BreedSearch(breed_search::Message::ImagesFetched {
            request,
            result: Ok(vec!["a.jpg".into()]),
        }));

        assert_eq!(app.title(), "husky - Doggy Directory");
    }

    #[test]
    fn config_warning_is_kept_for_display() {
        let source: SharedBreedSource =
            Arc::new(UnavailableSource::new(Error::Network("offline".into())));
        let (app, _task) = App::with_source(
            source,
            english(),
            &Config::default(),
            Some("warning-config-load".to_string()),
        );
        assert_eq!(app.config_warning.as_deref(), Some("warning-config-load"));
    }
}

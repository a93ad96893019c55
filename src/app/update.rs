// SPDX-License-Identifier: MPL-2.0
//! Turns component effects into asynchronous Iced tasks.

use super::Message;
use crate::application::port::SharedBreedSource;
use crate::ui::breed_search::{self, Effect};
use futures_util::StreamExt;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub search: &'a mut breed_search::State,
    pub source: &'a SharedBreedSource,
    pub download_concurrency: usize,
}

/// Handles breed search messages.
pub fn handle_breed_search_message(
    ctx: &mut UpdateContext<'_>,
    message: breed_search::Message,
) -> Task<Message> {
    let effect = ctx.search.update(message);
    perform_effect(ctx.source, ctx.download_concurrency, effect)
}

/// Starts the network work described by `effect`.
pub fn perform_effect(
    source: &SharedBreedSource,
    download_concurrency: usize,
    effect: Effect,
) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::FetchBreeds => Task::perform(source.list_breeds(), |result| {
            Message::BreedSearch(breed_search::Message::BreedsLoaded(result))
        }),
        Effect::FetchImages { request, breed } => {
            Task::perform(source.search_images(&breed), move |result| {
                Message::BreedSearch(breed_search::Message::ImagesFetched { request, result })
            })
        }
        Effect::DownloadImages { request, urls } => {
            let source = source.clone();
            let downloads = futures_util::stream::iter(urls)
                .map(move |(index, url)| {
                    let download = source.fetch_image(&url);
                    async move { (index, download.await) }
                })
                .buffer_unordered(download_concurrency.max(1));

            Task::run(downloads, move |(index, result)| {
                Message::BreedSearch(breed_search::Message::image_downloaded(
                    request, index, result,
                ))
            })
        }
    }
}

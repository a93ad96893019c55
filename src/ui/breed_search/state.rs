// SPDX-License-Identifier: MPL-2.0
//! State machine behind the breed search view.
//!
//! The component never touches the network itself: [`State::update`] returns
//! an [`Effect`] describing the request to make, and the application feeds the
//! outcome back as a [`Message`].

use crate::domain::{Breed, ImagePosition, ImageResult, RequestId, SearchState};
use crate::error::{Error, Result};
use iced::widget::image;

/// Availability of the breed list feeding the selector.
#[derive(Debug, Clone, Default)]
pub enum BreedList {
    #[default]
    Loading,
    Ready(Vec<Breed>),
    Failed(Error),
}

/// Download status of one result image.
#[derive(Debug, Clone)]
pub enum TileImage {
    Pending,
    Ready(image::Handle),
    Unavailable,
}

/// One rendered search result.
#[derive(Debug, Clone)]
pub struct ResultTile {
    pub url: String,
    pub position: ImagePosition,
    pub image: TileImage,
}

#[derive(Debug, Clone, Default)]
enum Phase {
    #[default]
    Idle,
    Loading {
        request: RequestId,
        breed: Breed,
    },
    Loaded {
        request: RequestId,
        breed: Breed,
        tiles: Vec<ResultTile>,
    },
    Failed {
        breed: Breed,
        error: Error,
    },
}

/// Messages handled by the breed search component.
#[derive(Debug, Clone)]
pub enum Message {
    /// The breed list request finished.
    BreedsLoaded(Result<Vec<Breed>>),
    /// The user asked to reload a failed breed list.
    RetryBreeds,
    /// The user picked a breed in the selector.
    BreedSelected(Breed),
    /// The user pressed the Search button.
    SearchPressed,
    /// An image search finished.
    ImagesFetched {
        request: RequestId,
        result: Result<Vec<String>>,
    },
    /// One result image finished downloading. `index` is 0-based.
    ImageDownloaded {
        request: RequestId,
        index: usize,
        result: Result<image::Handle>,
    },
}

impl Message {
    /// Wraps raw downloaded bytes into an [`Message::ImageDownloaded`].
    pub fn image_downloaded(request: RequestId, index: usize, result: Result<Vec<u8>>) -> Self {
        Message::ImageDownloaded {
            request,
            index,
            result: result.map(image::Handle::from_bytes),
        }
    }
}

/// Side effects requested by the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Load the breed list.
    FetchBreeds,
    /// Search images for `breed`, tagging the answer with `request`.
    FetchImages { request: RequestId, breed: Breed },
    /// Download each `(index, url)`, tagging every answer with `request`.
    DownloadImages {
        request: RequestId,
        urls: Vec<(usize, String)>,
    },
}

/// Breed search component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    breeds: BreedList,
    selected: Option<Breed>,
    phase: Phase,
    last_request: RequestId,
    has_completed_search: bool,
}

impl State {
    /// Creates the initial state and the effect loading the breed list.
    pub fn new() -> (Self, Effect) {
        (Self::default(), Effect::FetchBreeds)
    }

    pub fn breeds(&self) -> &BreedList {
        &self.breeds
    }

    /// Options offered by the selector; empty until the list is loaded.
    pub fn breed_options(&self) -> &[Breed] {
        match &self.breeds {
            BreedList::Ready(breeds) => breeds.as_slice(),
            BreedList::Loading | BreedList::Failed(_) => &[],
        }
    }

    pub fn selected(&self) -> Option<&Breed> {
        self.selected.as_ref()
    }

    pub fn search_state(&self) -> SearchState {
        match &self.phase {
            Phase::Loading { .. } => SearchState::Loading,
            Phase::Loaded { .. } => SearchState::Loaded,
            Phase::Failed { .. } => SearchState::Failed,
            Phase::Idle if self.selected.is_some() => SearchState::Selected,
            Phase::Idle => SearchState::Idle,
        }
    }

    /// The Search button is enabled when a breed is selected, unless that
    /// very breed is already being fetched.
    pub fn can_search(&self) -> bool {
        match (&self.selected, &self.phase) {
            (None, _) => false,
            (Some(selected), Phase::Loading { breed, .. }) => selected != breed,
            (Some(_), _) => true,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Breed and tiles of the displayed results, if any.
    pub fn results(&self) -> Option<(&Breed, &[ResultTile])> {
        match &self.phase {
            Phase::Loaded { breed, tiles, .. } => Some((breed, tiles)),
            _ => None,
        }
    }

    /// Breed and error of the last failed search, if any.
    pub fn failure(&self) -> Option<(&Breed, &Error)> {
        match &self.phase {
            Phase::Failed { breed, error } => Some((breed, error)),
            _ => None,
        }
    }

    /// The placeholder image stands in for results until a search has
    /// succeeded, and again after a failure.
    pub fn shows_placeholder(&self) -> bool {
        match self.phase {
            Phase::Idle | Phase::Failed { .. } => true,
            Phase::Loading { .. } => !self.has_completed_search,
            Phase::Loaded { .. } => false,
        }
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::BreedsLoaded(Ok(breeds)) => {
                tracing::info!(count = breeds.len(), "breed list loaded");
                self.breeds = BreedList::Ready(breeds);
                Effect::None
            }
            Message::BreedsLoaded(Err(error)) => {
                tracing::warn!(%error, "breed list request failed");
                self.breeds = BreedList::Failed(error);
                Effect::None
            }
            Message::RetryBreeds => {
                if matches!(self.breeds, BreedList::Failed(_)) {
                    self.breeds = BreedList::Loading;
                    Effect::FetchBreeds
                } else {
                    Effect::None
                }
            }
            Message::BreedSelected(breed) => {
                tracing::debug!(breed = %breed, "breed selected");
                self.selected = Some(breed);
                Effect::None
            }
            Message::SearchPressed => self.start_search(),
            Message::ImagesFetched { request, result } => self.finish_search(request, result),
            Message::ImageDownloaded {
                request,
                index,
                result,
            } => {
                self.store_image(request, index, result);
                Effect::None
            }
        }
    }

    fn start_search(&mut self) -> Effect {
        if !self.can_search() {
            return Effect::None;
        }
        let Some(breed) = self.selected.clone() else {
            return Effect::None;
        };

        let request = self.last_request.next();
        self.last_request = request;
        tracing::info!(breed = %breed, request = request.value(), "searching images");
        self.phase = Phase::Loading {
            request,
            breed: breed.clone(),
        };
        Effect::FetchImages { request, breed }
    }

    fn finish_search(&mut self, request: RequestId, result: Result<Vec<String>>) -> Effect {
        let breed = match &self.phase {
            Phase::Loading {
                request: current,
                breed,
            } if *current == request => breed.clone(),
            _ => {
                tracing::debug!(request = request.value(), "dropping stale search response");
                return Effect::None;
            }
        };

        match result {
            Ok(urls) => {
                let images = ImageResult::new(breed, urls);
                tracing::info!(breed = %images.breed(), count = images.len(), "search finished");
                let tiles: Vec<ResultTile> = images
                    .entries()
                    .map(|(position, url)| ResultTile {
                        url: url.to_string(),
                        position,
                        image: TileImage::Pending,
                    })
                    .collect();
                let urls: Vec<(usize, String)> = tiles
                    .iter()
                    .enumerate()
                    .map(|(index, tile)| (index, tile.url.clone()))
                    .collect();

                self.has_completed_search = true;
                self.phase = Phase::Loaded {
                    request,
                    breed: images.breed().clone(),
                    tiles,
                };

                if images.is_empty() {
                    Effect::None
                } else {
                    Effect::DownloadImages { request, urls }
                }
            }
            Err(error) => {
                tracing::warn!(breed = %breed, %error, "search failed");
                self.phase = Phase::Failed { breed, error };
                Effect::None
            }
        }
    }

    fn store_image(&mut self, request: RequestId, index: usize, result: Result<image::Handle>) {
        let Phase::Loaded {
            request: current,
            tiles,
            ..
        } = &mut self.phase
        else {
            return;
        };
        if *current != request {
            return;
        }
        let Some(tile) = tiles.get_mut(index) else {
            return;
        };

        tile.image = match result {
            Ok(handle) => TileImage::Ready(handle),
            Err(error) => {
                tracing::debug!(url = %tile.url, %error, "image download failed");
                TileImage::Unavailable
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breed(name: &str) -> Breed {
        Breed::new(name).unwrap()
    }

    fn loaded_state() -> State {
        let (mut state, _) = State::new();
        state.update(Message::BreedsLoaded(Ok(vec![breed("cattledog"), breed("husky")])));
        state
    }

    fn search(state: &mut State, name: &str) -> RequestId {
        state.update(Message::BreedSelected(breed(name)));
        match state.update(Message::SearchPressed) {
            Effect::FetchImages { request, .. } => request,
            other => panic!("expected FetchImages, got {:?}", other),
        }
    }

    #[test]
    fn new_requests_breed_list() {
        let (state, effect) = State::new();
        assert_eq!(effect, Effect::FetchBreeds);
        assert!(matches!(state.breeds(), BreedList::Loading));
        assert_eq!(state.search_state(), SearchState::Idle);
        assert!(!state.can_search());
        assert!(state.shows_placeholder());
    }

    #[test]
    fn selecting_breed_enables_search() {
        let mut state = loaded_state();
        state.update(Message::BreedSelected(breed("cattledog")));
        assert_eq!(state.search_state(), SearchState::Selected);
        assert!(state.can_search());
    }

    #[test]
    fn search_without_selection_does_nothing() {
        let mut state = loaded_state();
        assert_eq!(state.update(Message::SearchPressed), Effect::None);
        assert_eq!(state.search_state(), SearchState::Idle);
    }

    #[test]
    fn search_moves_to_loading_and_disables_repeat() {
        let mut state = loaded_state();
        search(&mut state, "cattledog");
        assert_eq!(state.search_state(), SearchState::Loading);
        assert!(!state.can_search());
        assert_eq!(state.update(Message::SearchPressed), Effect::None);
    }

    #[test]
    fn results_request_downloads_in_order() {
        let mut state = loaded_state();
        let request = search(&mut state, "cattledog");
        let effect = state.update(Message::ImagesFetched {
            request,
            result: Ok(vec!["a.jpg".into(), "b.jpg".into()]),
        });

        assert_eq!(
            effect,
            Effect::DownloadImages {
                request,
                urls: vec![(0, "a.jpg".into()), (1, "b.jpg".into())],
            }
        );
        let (shown, tiles) = state.results().expect("results");
        assert_eq!(shown.as_str(), "cattledog");
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].position, ImagePosition { index: 2, total: 2 });
        assert!(!state.shows_placeholder());
    }

    #[test]
    fn every_fetched_url_becomes_a_tile() {
        let mut state = loaded_state();
        let request = search(&mut state, "husky");
        let urls: Vec<String> = (0..150).map(|i| format!("{i}.jpg")).collect();
        let effect = state.update(Message::ImagesFetched {
            request,
            result: Ok(urls),
        });

        let (_, tiles) = state.results().expect("results");
        assert_eq!(tiles.len(), 150);
        assert_eq!(tiles[149].position, ImagePosition { index: 150, total: 150 });
        assert!(matches!(effect, Effect::DownloadImages { urls, .. } if urls.len() == 150));
    }

    #[test]
    fn empty_results_need_no_downloads() {
        let mut state = loaded_state();
        let request = search(&mut state, "husky");
        let effect = state.update(Message::ImagesFetched {
            request,
            result: Ok(Vec::new()),
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(state.search_state(), SearchState::Loaded);
        assert_eq!(state.results().map(|(_, tiles)| tiles.len()), Some(0));
    }

    #[test]
    fn newer_search_supersedes_older_response() {
        let mut state = loaded_state();
        let first = search(&mut state, "husky");
        let second = search(&mut state, "cattledog");
        assert!(second > first);

        state.update(Message::ImagesFetched {
            request: first,
            result: Ok(vec!["husky.jpg".into()]),
        });
        assert_eq!(state.search_state(), SearchState::Loading);

        state.update(Message::ImagesFetched {
            request: second,
            result: Ok(vec!["cattledog.jpg".into()]),
        });
        let (shown, tiles) = state.results().expect("results");
        assert_eq!(shown.as_str(), "cattledog");
        assert_eq!(tiles[0].url, "cattledog.jpg");
    }

    #[test]
    fn failed_search_is_visible_and_retryable() {
        let mut state = loaded_state();
        let request = search(&mut state, "husky");
        state.update(Message::ImagesFetched {
            request,
            result: Err(Error::Network("offline".into())),
        });

        assert_eq!(state.search_state(), SearchState::Failed);
        assert!(!state.is_loading());
        assert!(state.can_search());
        assert!(state.shows_placeholder());
        let (failed_breed, error) = state.failure().expect("failure");
        assert_eq!(failed_breed.as_str(), "husky");
        assert!(matches!(error, Error::Network(_)));
    }

    #[test]
    fn downloads_fill_tiles_and_ignore_stale_requests() {
        let mut state = loaded_state();
        let request = search(&mut state, "cattledog");
        state.update(Message::ImagesFetched {
            request,
            result: Ok(vec!["a.jpg".into(), "b.jpg".into()]),
        });

        state.update(Message::image_downloaded(request, 0, Ok(vec![1, 2, 3])));
        state.update(Message::image_downloaded(
            request,
            1,
            Err(Error::Http { status: 404 }),
        ));
        state.update(Message::image_downloaded(
            request.next(),
            0,
            Err(Error::Http { status: 500 }),
        ));
        state.update(Message::image_downloaded(request, 7, Ok(vec![0])));

        let (_, tiles) = state.results().expect("results");
        assert!(matches!(tiles[0].image, TileImage::Ready(_)));
        assert!(matches!(tiles[1].image, TileImage::Unavailable));
    }

    #[test]
    fn second_search_hides_previous_results_while_loading() {
        let mut state = loaded_state();
        let request = search(&mut state, "cattledog");
        state.update(Message::ImagesFetched {
            request,
            result: Ok(vec!["a.jpg".into()]),
        });

        search(&mut state, "cattledog");
        assert!(state.results().is_none());
        assert!(!state.shows_placeholder());
        assert!(state.is_loading());
    }

    #[test]
    fn breed_list_failure_can_be_retried_once() {
        let (mut state, _) = State::new();
        state.update(Message::BreedsLoaded(Err(Error::Http { status: 503 })));
        assert!(matches!(state.breeds(), BreedList::Failed(_)));
        assert!(state.breed_options().is_empty());

        assert_eq!(state.update(Message::RetryBreeds), Effect::FetchBreeds);
        assert!(matches!(state.breeds(), BreedList::Loading));
        assert_eq!(state.update(Message::RetryBreeds), Effect::None);
    }
}

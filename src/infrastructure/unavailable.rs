// SPDX-License-Identifier: MPL-2.0
//! Stand-in source used when the HTTP client cannot be built.
//!
//! Every call fails with the construction error, so the UI shows the problem
//! through its regular failure paths instead of the app refusing to start.

use crate::application::port::BreedSource;
use crate::domain::Breed;
use crate::error::{Error, Result};
use futures_util::future::{self, BoxFuture};
use futures_util::FutureExt;

#[derive(Debug, Clone)]
pub struct UnavailableSource {
    error: Error,
}

impl UnavailableSource {
    pub fn new(error: Error) -> Self {
        Self { error }
    }
}

impl BreedSource for UnavailableSource {
    fn list_breeds(&self) -> BoxFuture<'static, Result<Vec<Breed>>> {
        future::ready(Err(self.error.clone())).boxed()
    }

    fn search_images(&self, _breed: &Breed) -> BoxFuture<'static, Result<Vec<String>>> {
        future::ready(Err(self.error.clone())).boxed()
    }

    fn fetch_image(&self, _url: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
        future::ready(Err(self.error.clone())).boxed()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for the Dog CEO breed API (<https://dog.ceo/dog-api/>).
//!
//! Every JSON response is wrapped in an envelope:
//!
//! ```json
//! { "message": <payload or error text>, "status": "success" | "error" }
//! ```
//!
//! - `GET {base}/breeds/list/all` - payload maps breed names to sub-breeds
//! - `GET {base}/breed/{breed}/images` - payload is an array of image URLs

use crate::application::port::BreedSource;
use crate::config::ApiConfig;
use crate::domain::breed::{breed_list, Breed};
use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;

const USER_AGENT: &str = concat!("DoggyDirectory/", env!("CARGO_PKG_VERSION"));
const STATUS_SUCCESS: &str = "success";

/// [`BreedSource`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct DogCeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl DogCeoClient {
    /// Builds a client honoring the configured base URL and timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn breed_list_url(&self) -> String {
        format!("{}/breeds/list/all", self.base_url)
    }

    fn breed_images_url(&self, breed: &Breed) -> String {
        format!("{}/breed/{}/images", self.base_url, breed.as_str())
    }
}

impl BreedSource for DogCeoClient {
    fn list_breeds(&self) -> BoxFuture<'static, Result<Vec<Breed>>> {
        let client = self.client.clone();
        let url = self.breed_list_url();
        async move {
            let body = get_json_body(&client, &url).await?;
            parse_breed_list(&body)
        }
        .boxed()
    }

    fn search_images(&self, breed: &Breed) -> BoxFuture<'static, Result<Vec<String>>> {
        let client = self.client.clone();
        let url = self.breed_images_url(breed);
        async move {
            let body = get_json_body(&client, &url).await?;
            parse_image_list(&body)
        }
        .boxed()
    }

    fn fetch_image(&self, url: &str) -> BoxFuture<'static, Result<Vec<u8>>> {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            let response = client.get(&url).send().await?.error_for_status()?;
            let bytes = response.bytes().await?;
            Ok(bytes.to_vec())
        }
        .boxed()
    }
}

/// Performs a GET and returns the body, mapping failure statuses to errors.
async fn get_json_body(client: &reqwest::Client, url: &str) -> Result<String> {
    tracing::debug!(url, "GET");
    let response = client.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    check_status(status, body)
}

/// Passes successful bodies through and turns failures into errors.
///
/// The API reports unknown breeds as a 404 with an error envelope; that
/// envelope message is preferred over the bare status.
fn check_status(status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        return Ok(body);
    }
    match unwrap_envelope::<serde_json::Value>(&body) {
        Err(api_error @ Error::Api(_)) => Err(api_error),
        _ => Err(Error::Http {
            status: status.as_u16(),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    status: String,
    message: serde_json::Value,
}

fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: Envelope = serde_json::from_str(body)?;
    if envelope.status != STATUS_SUCCESS {
        let message = match envelope.message {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };
        return Err(Error::Api(message));
    }
    Ok(serde_json::from_value(envelope.message)?)
}

/// Parses a `breeds/list/all` body. Sub-breeds are not listed separately.
pub fn parse_breed_list(body: &str) -> Result<Vec<Breed>> {
    let breeds: BTreeMap<String, Vec<String>> = unwrap_envelope(body)?;
    Ok(breed_list(breeds.keys()))
}

/// Parses a `breed/{breed}/images` body, preserving API order.
pub fn parse_image_list(body: &str) -> Result<Vec<String>> {
    unwrap_envelope(body)
}

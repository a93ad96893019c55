// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Payloads are plain strings so errors can travel inside Iced messages,
//! which must be `Clone`.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// The request never produced a response (DNS, TLS, timeout...).
    #[error("Network Error: {0}")]
    Network(String),

    /// The server answered with a non-success status and no usable body.
    #[error("HTTP Error: status {status}")]
    Http { status: u16 },

    /// The API answered but reported a failure in its envelope.
    #[error("API Error: {0}")]
    Api(String),

    /// The response body did not have the expected shape.
    #[error("Decode Error: {0}")]
    Decode(String),
}

impl Error {
    /// Returns the i18n message key used to present this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) | Error::Config(_) => "error-local",
            Error::Network(_) => "error-network",
            Error::Http { .. } => "error-http",
            Error::Api(_) => "error-api",
            Error::Decode(_) => "error-decode",
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return Error::Http {
                status: status.as_u16(),
            };
        }
        if err.is_decode() {
            Error::Decode(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

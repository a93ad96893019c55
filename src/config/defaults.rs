// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the public Dog CEO API.
pub const DEFAULT_API_BASE_URL: &str = "https://dog.ceo/api";

/// Default timeout applied to every HTTP request (in seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Default number of result images downloaded in parallel.
pub const DEFAULT_DOWNLOAD_CONCURRENCY: usize = 6;

/// Minimum parallel downloads.
pub const MIN_DOWNLOAD_CONCURRENCY: usize = 1;

/// Maximum parallel downloads.
pub const MAX_DOWNLOAD_CONCURRENCY: usize = 32;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 900.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

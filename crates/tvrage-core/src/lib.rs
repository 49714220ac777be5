//! TVRage Client Core Library
//!
//! This crate fetches TV show metadata from the TVRage XML feeds and turns
//! it into validated records.
//!
//! # Features
//! - Search for shows by name
//! - Get full show information (networks, AKAs, genres, air times)
//! - Get complete episode lists ordered by season and episode
//! - Get single-episode details
//! - Rate-limited HTTP transport, replaceable through the [`Transport`] trait
//!
//! Missing or malformed fields never produce errors: they fall back to the
//! [`UNKNOWN`] sentinel, zero, or `None`. Check `is_valid()` on results.

pub mod api;
pub mod client;
pub mod error;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use api::TvRageApi;
pub use client::{ClientConfig, HttpTransport, ProxyConfig, RateLimiter, RawResponse, Transport};
pub use error::{Result, TvRageError};
pub use types::{CountryDetail, Episode, EpisodeList, EpisodeNumber, ShowInfo, UNKNOWN};

//! Core components of the `yf-esg` crate.
//!
//! This module contains the foundational building blocks of the library:
//! - The [`EsgClient`] and its builder.
//! - The primary [`EsgError`] type.
//! - Internal networking and fixture-recording helpers.

/// The client (`EsgClient`), builder, and cache mode.
pub mod client;
/// The primary error type (`EsgError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EsgClient`
pub use client::{CacheMode, EsgClient, EsgClientBuilder};
pub use error::EsgError;

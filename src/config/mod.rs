//! Configuration for the learnpath CLI.
//!
//! Credentials and endpoint overrides come from the process environment,
//! optionally seeded from `.env` files at startup. Settings are assembled
//! through a builder and validated before any network call is made.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{CatalogSettings, Config, LlmSettings};

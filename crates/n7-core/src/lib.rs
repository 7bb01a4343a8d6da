//! Core types and trait definitions for the N7 prompt catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The API, storage, and server crates all depend on it.

pub mod catalog;
pub mod error;
pub mod loader;
pub mod memory;
pub mod query;
pub mod refresh;
pub mod seed;
pub mod store;

pub use catalog::{Catalog, Prompt};
pub use error::{Error, Result};
pub use query::{FlatPrompt, StatusRecord};
pub use store::CatalogStore;

//! # cibon-client - HAL Client
//!
//! Talks to the farmer records API: a thin HTTP wrapper, a link-following
//! resolver that walks named relations from the API root, and the collection
//! operations built on top of them.
//!
//! Depends on [`cibon_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### HTTP
//! - [`HttpClient`] - reqwest client bound to an API root
//! - [`Request`], [`Response`] - Method/path/entity/headers in, status/headers/entity out
//!
//! ### Link Following
//! - [`follow()`] - GET the root and follow a chain of relations
//! - [`Hop`] - One relation, optionally with query parameters
//!
//! ### Collection Operations
//! - [`CollectionApi`] - load, navigate, create, update, delete
//! - [`LoadedCollection`] - First page plus schema from a full load

pub mod api;
pub mod follow;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use api::{CollectionApi, LoadedCollection};
pub use follow::{follow, Hop};
pub use http::{HttpClient, Method, Request, Response, APPLICATION_JSON, HAL_JSON, SCHEMA_JSON};

//! # cibon-core - Core Domain Types
//!
//! Foundation crate for the Cibon farmer desk. Provides the hypermedia (HAL)
//! link model, the record/page/schema domain types, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing, percent-encoding).
//!
//! ## Public API
//!
//! ### Hypermedia (`hal`)
//! - [`Link`], [`Links`] - The `_links` section of a HAL representation
//! - [`NavRel`] - Pagination relations (first, prev, next, last)
//! - [`expand_template()`] - RFC 6570 expansion for templated hrefs
//! - [`embedded_items()`] - Items under `_embedded.<rel>`
//!
//! ### Domain Types
//! - [`Record`] - A farmer record with self link and concurrency token
//! - [`Page`], [`PageMetadata`] - One page of the collection
//! - [`Schema`], [`Attribute`] - Attributes discovered from the profile schema
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use cibon_core::prelude::*;
//! ```

pub mod error;
pub mod hal;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod record;
pub mod schema;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use hal::{embedded_items, expand_template, Link, Links, NavRel, Params};
pub use page::{Page, PageMetadata};
pub use record::{display_json, FieldValues, Record};
pub use schema::{Attribute, Schema};

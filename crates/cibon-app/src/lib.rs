//! cibon-app - Application state and orchestration for the Cibon farmer desk
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! [`AppState`] mutated only by [`handler::update`], [`Message`]s coming from
//! the keyboard and from background tasks, and [`UpdateAction`]s that run
//! HAL requests through [`cibon_client::CollectionApi`]. It also loads the
//! configuration file.

pub mod actions;
pub mod config;
pub mod form;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod notice;
pub mod page_size;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};

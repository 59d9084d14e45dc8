//! Item service module
//!
//! This module implements the item catalog side of the marketplace:
//! - Item CRUD for owners
//! - The owner's listing view with last/next booking times and comments
//! - Free-text search over available items
//! - Comment creation gated on a finished rental

mod service;

#[cfg(test)]
mod tests;

pub use service::{ItemService, ItemUpdate, NewItem};

//! User service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{NewUser, UserService, UserUpdate};

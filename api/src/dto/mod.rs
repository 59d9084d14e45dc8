//! Request and response bodies for the HTTP API.

pub mod booking_dto;
pub mod item_dto;
pub mod request_dto;
pub mod user_dto;

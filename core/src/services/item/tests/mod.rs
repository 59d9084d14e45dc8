//! Unit tests for the item service

mod service_tests;

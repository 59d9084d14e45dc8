//! Unit tests for the catalog request service

mod service_tests;

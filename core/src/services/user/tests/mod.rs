//! Unit tests for the user service

mod service_tests;

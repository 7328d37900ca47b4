//! Tests for the dataset loader

mod loader_tests;
mod record_parser_tests;

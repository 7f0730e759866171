//! Unit tests for service payload handling.
//!
//! These tests feed captured and hand-written response bodies through the
//! parsers and check the normalized records and generated requests.

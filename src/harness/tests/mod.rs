//! Integration tests for the harness
//!
//! These tests exercise the pieces together the way a scenario does:
//! sandbox, simulated generator output, manifest capture, and the
//! assertion helpers.

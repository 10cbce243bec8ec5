//! Internal test modules - whitebox tests with crate access
//!
//! Scenario tests drive the session through the scripted provider from
//! `test_harness`; property tests use the synchronous two-phase API.

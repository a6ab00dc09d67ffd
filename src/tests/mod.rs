//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the picker through key events and
//! inspect both the navigation state and the rendered frame.

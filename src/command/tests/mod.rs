//! Unit tests for the command module.
//!
//! Tests are organised by component: signatures, inbound decoding, the
//! registry, help rendering, and the dispatcher.

mod registry_tests;

//! Whole-record encoding tests.

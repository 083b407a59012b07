//! Shared building blocks for the cardsmith workspace: settings, errors and
//! constants that every other crate agrees on.

pub mod config;
pub mod constants;
pub mod error;

//! cardsmith contact generator - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `cardsmith_test::` paths.

pub mod component {
    pub use cardsmith_core::config;
    pub use cardsmith_core::constants;
    pub use cardsmith_service::*;
}

pub mod app {
    pub use cardsmith_app::*;
}

pub use cardsmith_rfc as rfc;

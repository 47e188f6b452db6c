//! canvass-core
//!
//! Pure survey domain types, authoring normalization, and storage key
//! conventions. No AWS SDK dependency: this is the shared vocabulary of the
//! Canvass system.

pub mod authoring;
pub mod error;
pub mod keys;
pub mod models;

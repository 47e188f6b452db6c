//! canvass-responses
//!
//! Response validation and reporting. Pure functions over survey schemas and
//! respondent records, with no storage or network dependency.
//!
//! - [`validate`] decides whether a submission is complete and normalizes it
//!   into stored answer records.
//! - [`submission`] decodes the wire submission format into an answer map.
//! - [`matrix`] rebuilds the respondent × question report table.
//! - [`page`] slices any row set into fixed-size pages.

pub mod error;
pub mod matrix;
pub mod page;
pub mod submission;
pub mod validate;

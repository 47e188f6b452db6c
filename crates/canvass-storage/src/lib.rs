//! canvass-storage
//!
//! The storage collaborator. [`store::SurveyStore`] is the seam the API talks
//! to; [`s3::S3Store`] keeps surveys and respondents as JSON objects in a
//! bucket, [`memory::MemoryStore`] keeps them in process for tests and local
//! runs.

pub mod client;
pub mod error;
pub mod memory;
pub mod objects;
pub mod s3;
pub mod state;
pub mod store;

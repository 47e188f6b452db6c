use serde::{Deserialize, Serialize};

pub mod health;
pub mod respondents;
pub mod stats;
pub mod submissions;
pub mod surveys;

/// `?page=&per_page=` query for paginated listings. Pages are 1-based.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

/// Acknowledgement for mutations with nothing else to return.
#[derive(Debug, Serialize, Deserialize)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

use std::env;
use std::str::FromStr;

/// Which storage collaborator backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

impl FromStr for StoreKind {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s3" => Ok(StoreKind::S3),
            "memory" => Ok(StoreKind::Memory),
            other => Err(eyre::eyre!("unknown CANVASS_STORE '{other}', expected 's3' or 'memory'")),
        }
    }
}

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// `CANVASS_BUCKET`, default `canvass`.
    pub bucket: String,
    /// `CANVASS_STORE`, default `s3`.
    pub store: StoreKind,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable lookup, so tests need not touch the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bucket = lookup("CANVASS_BUCKET").unwrap_or_else(|| "canvass".to_string());
        let store = match lookup("CANVASS_STORE") {
            Some(value) => value.parse()?,
            None => StoreKind::S3,
        };
        Ok(Self { bucket, store })
    }
}

//! Small JSON documents updated under ETag optimistic locking.

use aws_sdk_s3::Client;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::objects::{self, Precondition};

/// Read a document together with the ETag to write it back against.
pub async fn load_state<T: DeserializeOwned>(
    client: &Client,
    bucket: &str,
    key: &str,
) -> Result<(T, String), StorageError> {
    let fetched = objects::get_object(client, bucket, key).await?;
    let value = serde_json::from_slice(&fetched.body)?;
    Ok((value, fetched.etag.unwrap_or_default()))
}

/// Replace a document only if it is still at `expected_etag`.
pub async fn save_state_if_match<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
    expected_etag: &str,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_json(client, bucket, key, body, Precondition::Matches(expected_etag)).await
}

/// Create a document, failing with `PreconditionFailed` if one exists.
pub async fn create_state<T: Serialize>(
    client: &Client,
    bucket: &str,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    objects::put_json(client, bucket, key, body, Precondition::Absent).await
}

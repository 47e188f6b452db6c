use aws_sdk_s3::Client;
use aws_smithy_types::byte_stream::ByteStream;

use crate::error::StorageError;

const JSON: &str = "application/json";

/// A fetched JSON document and the ETag it was read at.
pub struct Fetched {
    pub body: Vec<u8>,
    pub etag: Option<String>,
}

/// Condition a write must meet for S3 to accept it.
#[derive(Debug, Clone, Copy)]
pub enum Precondition<'a> {
    /// Overwrite unconditionally.
    Always,
    /// Only replace the version carrying this ETag.
    Matches(&'a str),
    /// Only create; fail if the key already exists.
    Absent,
}

pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<Fetched, StorageError> {
    let resp = client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_no_such_key() {
                StorageError::NotFound {
                    key: key.to_string(),
                }
            } else {
                StorageError::GetObject(err.to_string())
            }
        })?;

    let etag = resp.e_tag().map(str::to_string);
    let body = resp
        .body
        .collect()
        .await
        .map_err(|e| StorageError::GetObject(e.to_string()))?
        .into_bytes()
        .to_vec();

    Ok(Fetched { body, etag })
}

/// Write a JSON document. A conditional write that loses its race fails with
/// `PreconditionFailed`.
pub async fn put_json(
    client: &Client,
    bucket: &str,
    key: &str,
    body: Vec<u8>,
    precondition: Precondition<'_>,
) -> Result<(), StorageError> {
    let req = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(JSON)
        .body(ByteStream::from(body));

    let req = match precondition {
        Precondition::Always => req,
        Precondition::Matches(etag) => req.if_match(etag),
        Precondition::Absent => req.if_none_match("*"),
    };

    req.send().await.map_err(|e| {
        // 412 when the condition no longer holds, 409 while a competing
        // conditional write is in flight.
        let status = e.raw_response().map(|r| r.status().as_u16());
        match (precondition, status) {
            (Precondition::Always, _) | (_, None) => {
                StorageError::PutObject(e.into_service_error().to_string())
            }
            (_, Some(409 | 412)) => StorageError::PreconditionFailed {
                key: key.to_string(),
            },
            _ => StorageError::PutObject(e.into_service_error().to_string()),
        }
    })?;

    Ok(())
}

/// Deleting a missing key succeeds.
pub async fn delete_object(client: &Client, bucket: &str, key: &str) -> Result<(), StorageError> {
    client
        .delete_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|e| StorageError::DeleteObject(e.into_service_error().to_string()))?;

    Ok(())
}

/// Delete every object under `prefix`, returning how many there were.
pub async fn delete_objects_by_prefix(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<usize, StorageError> {
    let keys = list_objects(client, bucket, prefix).await?;
    for key in &keys {
        delete_object(client, bucket, key).await?;
    }
    Ok(keys.len())
}

/// All keys under `prefix`, following continuation tokens.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: &str,
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let resp = client
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .set_continuation_token(continuation_token.take())
            .send()
            .await
            .map_err(|e| StorageError::ListObjects(e.into_service_error().to_string()))?;

        keys.extend(resp.contents().iter().filter_map(|obj| obj.key().map(str::to_string)));

        match resp.next_continuation_token() {
            Some(token) if resp.is_truncated() == Some(true) => {
                continuation_token = Some(token.to_string());
            }
            _ => break,
        }
    }

    Ok(keys)
}

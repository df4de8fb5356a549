use std::string::FromUtf8Error;

use aws_lambda_events::event::s3::S3EventRecord;
use thiserror::Error;


/// The bucket every incoming object is copied into.
pub const DESTINATION_BUCKET: &str = "bucketdestinoprocessamentocamila";

/// The message returned to the invoker once the object was copied.
pub const SUCCESS_MESSAGE: &str = "Processamento concluído e arquivo copiado com sucesso!";

/// The error type produced while handling a notification
#[derive(Debug, Error)]
pub enum CopyErr {
    /// the notification had no records to process
    #[error("the s3 notification does not contain any records")]
    NoRecords,
    /// the record did not name its bucket
    #[error("the s3 record does not contain a bucket name")]
    MissingBucket,
    /// the record did not name its object key
    #[error("the s3 record does not contain an object key")]
    MissingKey,
    /// the object key could not be url decoded
    #[error("the object key is not valid url encoded utf-8: {0}")]
    InvalidKey(#[from] FromUtf8Error),
    /// the copy operation failed, the underlying cause is forwarded unchanged
    #[error(transparent)]
    Copy(anyhow::Error),
}

/// Decodes an object key as it is delivered in s3 event notifications.
/// S3 form encodes keys so spaces arrive as `+` and a literal `+` arrives as `%2B`.
pub fn decode_key(raw: &str) -> Result<String, CopyErr> {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced)?;
    Ok(decoded.into_owned())
}

/// An object in a bucket, as announced by an s3 notification record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub key: String,
}

impl TryFrom<&S3EventRecord> for ObjectLocation {
    type Error = CopyErr;

    fn try_from(record: &S3EventRecord) -> Result<Self, Self::Error> {
        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(CopyErr::MissingBucket)?;
        let raw_key = record
            .s3
            .object
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(CopyErr::MissingKey)?;

        Ok(ObjectLocation {
            bucket: bucket.to_string(),
            key: decode_key(raw_key)?,
        })
    }
}

/// Instruction to copy one object into [DESTINATION_BUCKET].
/// The key is stored once because the destination key is always the source key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyRequest {
    source_bucket: String,
    key: String,
}

impl CopyRequest {
    /// build the request which copies `source` into the destination bucket
    pub fn to_destination(source: ObjectLocation) -> Self {
        let ObjectLocation { bucket, key } = source;
        CopyRequest {
            source_bucket: bucket,
            key,
        }
    }

    pub fn source_bucket(&self) -> &str {
        &self.source_bucket
    }

    pub fn source_key(&self) -> &str {
        &self.key
    }

    pub fn destination_bucket(&self) -> &'static str {
        DESTINATION_BUCKET
    }

    pub fn destination_key(&self) -> &str {
        &self.key
    }
}

/// The payload returned to the lambda invoker
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CopyResponse {
    pub status_code: u16,
    /// json encoded message
    pub body: String,
}

impl CopyResponse {
    /// the response for a successfully copied object
    pub fn copied() -> Self {
        CopyResponse {
            status_code: 200,
            body: serde_json::Value::from(SUCCESS_MESSAGE).to_string(),
        }
    }
}

use anyhow::Context;
use tracing::instrument;

/// Builds the `x-amz-copy-source` value for an object.
/// The key must be url encoded, the bucket is used as is.
pub(crate) fn copy_source(bucket: &str, key: &str) -> String {
    format!("{}/{}", bucket, urlencoding::encode(key))
}

#[instrument(skip(client))]
pub(crate) async fn copy_object(
    client: &aws_sdk_s3::Client,
    source_bucket: &str,
    source_key: &str,
    destination_bucket: &str,
    destination_key: &str,
) -> anyhow::Result<()> {
    client
        .copy_object()
        .copy_source(copy_source(source_bucket, source_key))
        .bucket(destination_bucket)
        .key(destination_key)
        .send()
        .await
        .context(format!(
            "could not copy {source_bucket}/{source_key} to {destination_bucket}/{destination_key}"
        ))?;

    Ok(())
}

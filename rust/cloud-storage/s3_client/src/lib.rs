mod copy;

#[derive(Clone, Debug)]
pub struct S3 {
    inner: aws_sdk_s3::Client,
}

impl S3 {
    pub fn new(inner: aws_sdk_s3::Client) -> Self {
        Self { inner }
    }

    /// Copies an object from one bucket into another bucket.
    /// The object data never passes through this process.
    pub async fn copy_object(
        &self,
        source_bucket: &str,
        source_key: &str,
        destination_bucket: &str,
        destination_key: &str,
    ) -> anyhow::Result<()> {
        copy::copy_object(
            &self.inner,
            source_bucket,
            source_key,
            destination_bucket,
            destination_key,
        )
        .await
    }
}

//! [ObjectCopier] backed by the shared [s3_client::S3] wrapper

use crate::domain::{models::CopyRequest, ports::ObjectCopier};

impl ObjectCopier for s3_client::S3 {
    type Err = anyhow::Error;

    async fn copy_object(&self, req: &CopyRequest) -> Result<(), Self::Err> {
        s3_client::S3::copy_object(
            self,
            req.source_bucket(),
            req.source_key(),
            req.destination_bucket(),
            req.destination_key(),
        )
        .await
    }
}

use aws_lambda_events::event::s3::S3Event;

use crate::domain::{
    models::{CopyErr, CopyRequest, CopyResponse, ObjectLocation},
    ports::ObjectCopier,
};


/// Copies the object announced by an s3 notification into the destination bucket.
/// Holds no state besides the injected [ObjectCopier], so one instance serves every invocation.
pub struct CopyHandler<C> {
    copier: C,
}

impl<C> CopyHandler<C>
where
    C: ObjectCopier,
    anyhow::Error: From<C::Err>,
{
    pub fn new(copier: C) -> Self {
        CopyHandler { copier }
    }

    /// Copies the object named by the first record of `event`.
    ///
    /// Returns the fixed success response, or the [CopyErr] describing why the object was not copied.
    /// Copy failures are logged once and returned as [CopyErr::Copy] carrying the underlying cause.
    #[tracing::instrument(skip(self, event), fields(record_count = event.records.len()))]
    pub async fn handle(&self, event: S3Event) -> Result<CopyResponse, CopyErr> {
        let req = copy_request(&event).inspect_err(|err| {
            tracing::error!(error=?err, "invalid s3 notification");
        })?;

        match self
            .copier
            .copy_object(&req)
            .await
            .map_err(anyhow::Error::from)
        {
            Ok(()) => {
                tracing::info!(
                    source_bucket = req.source_bucket(),
                    destination_bucket = req.destination_bucket(),
                    key = req.source_key(),
                    "copied object to destination bucket"
                );
                Ok(CopyResponse::copied())
            }
            Err(err) => {
                tracing::error!(
                    error=?err,
                    source_bucket = req.source_bucket(),
                    key = req.source_key(),
                    "could not copy object to destination bucket"
                );
                Err(CopyErr::Copy(err))
            }
        }
    }
}

/// Builds the [CopyRequest] for the first record of the notification.
/// Any further records are not copied.
pub(crate) fn copy_request(event: &S3Event) -> Result<CopyRequest, CopyErr> {
    let Some(record) = event.records.first() else {
        return Err(CopyErr::NoRecords);
    };

    if event.records.len() > 1 {
        tracing::warn!(
            ignored_records = event.records.len() - 1,
            "notification holds more than one record, only the first one is copied"
        );
    }

    let source = ObjectLocation::try_from(record)?;
    tracing::debug!(event_name=?record.event_name, source=?source, "extracted source object");

    Ok(CopyRequest::to_destination(source))
}

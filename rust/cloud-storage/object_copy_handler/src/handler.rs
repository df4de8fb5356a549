use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{
    Error, LambdaEvent,
    tracing::{self},
};

use crate::domain::{models::CopyResponse, ports::ObjectCopier, service::CopyHandler};

/// Processes the s3 event.
/// Any error is handed back to the lambda runtime so the invocation is reported as failed.
#[tracing::instrument(skip(copy_handler, event), fields(request_id = %event.context.request_id))]
pub async fn handler<C>(
    copy_handler: &CopyHandler<C>,
    event: LambdaEvent<S3Event>,
) -> Result<CopyResponse, Error>
where
    C: ObjectCopier,
    anyhow::Error: From<C::Err>,
{
    tracing::trace!("processing s3 event");

    let response = copy_handler.handle(event.payload).await?;

    tracing::trace!("processing complete");

    Ok(response)
}

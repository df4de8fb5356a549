#![recursion_limit = "256"]

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use lambda_entrypoint::LambdaEntrypoint;
use lambda_runtime::{
    Error, LambdaEvent, run, service_fn,
    tracing::{self},
};
use object_copy_handler::{
    config::Config,
    domain::{models::DESTINATION_BUCKET, service::CopyHandler},
    handler::handler,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env().context("all necessary env vars should be available")?;

    LambdaEntrypoint::new(config.environment).init();

    tracing::trace!("initiating lambda");

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .load()
        .await;

    let s3_client = s3_client::S3::new(aws_sdk_s3::Client::new(&aws_config));
    tracing::trace!("initialized s3 client");

    tracing::info!(
        destination_bucket = DESTINATION_BUCKET,
        environment = %config.environment,
        "lambda configured"
    );

    let copy_handler = CopyHandler::new(s3_client);
    let shared_copy_handler = &copy_handler;

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let copy_handler = shared_copy_handler;
        async move { handler(copy_handler, event).await }
    });

    run(func).await
}

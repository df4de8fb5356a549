//! Lambda which copies every object announced by an s3 notification into the
//! processing destination bucket, keeping the object key unchanged.
//!
//! The crate follows the ports and adapters layout used by the other services:
//! - [domain] holds the models, the [domain::ports::ObjectCopier] port and the [domain::service::CopyHandler]
//! - [outbound] implements the port on top of [s3_client::S3]
//! - [handler] adapts the lambda runtime event to the domain

pub mod config;
pub mod domain;
pub mod handler;
pub mod outbound;

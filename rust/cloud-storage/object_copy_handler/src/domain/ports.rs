//! This module defines the ports that the copy handler domain requires

use crate::domain::models::CopyRequest;

/// Trait for the storage service which performs the actual copy.
/// Implementations must either copy the whole object or fail, there is no partial success.
#[cfg_attr(test, mockall::automock(type Err = anyhow::Error;))]
pub trait ObjectCopier: Send + Sync + 'static {
    /// the error type that can occur
    type Err;

    /// copy the source object of `req` into its destination
    fn copy_object(&self, req: &CopyRequest) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

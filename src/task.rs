//! Helpers for unwrapping joined async task failures.

use std::error::Error;

use tokio::task::JoinError;

use crate::error::{HttpUtilError, Result};

/// Flatten the result of a joined task into the inner result.
///
/// A panicking task is resumed on the calling thread, matching the
/// behavior of awaiting the work directly. Cancellation surfaces as
/// [`HttpUtilError::Cancelled`]; inner errors propagate unchanged.
pub fn flatten_join<T>(joined: std::result::Result<Result<T>, JoinError>) -> Result<T> {
    match joined {
        Ok(inner) => inner,
        Err(join_error) => {
            if join_error.is_panic() {
                std::panic::resume_unwind(join_error.into_panic());
            }
            Err(HttpUtilError::Cancelled)
        }
    }
}

/// Try to recover a concrete error type from a boxed failure cause.
///
/// On a type mismatch the original boxed error is handed back to the
/// caller so it can be reported or propagated; nothing is discarded.
pub fn downcast_failure<E: Error + Send + Sync + 'static>(
    cause: Box<dyn Error + Send + Sync>,
) -> std::result::Result<E, Box<dyn Error + Send + Sync>> {
    cause.downcast::<E>().map(|boxed| *boxed)
}

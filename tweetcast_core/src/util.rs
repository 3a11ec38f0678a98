use std::{future::Future, time::Duration};

use crate::error::{Error, Result};

/// Bound a request by `duration`, mapping the elapsed case to `Error::Timeout`.
pub fn timeout<T, E: Into<Error>>(
    duration: Duration,
    f: impl Future<Output = std::result::Result<T, E>>,
) -> impl Future<Output = Result<T>> {
    use futures::FutureExt;
    tokio::time::timeout(duration, f).map(move |result| {
        result
            .map(|r| r.map_err(Into::into))
            .unwrap_or_else(|_| Err(Error::Timeout(format!("after {} ms", duration.as_millis()))))
    })
}

use backon::{ConstantBuilder, Retryable};
use futures::Future;
use std::time::Duration;

/// Retries a feed call exactly once after a fixed delay. Network blips are
/// the only failure mode worth absorbing here; a second failure propagates.
pub async fn retry_once<T, Fut, FutureFn, E>(delay: Duration, fut: FutureFn) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    FutureFn: FnMut() -> Fut,
{
    fut.retry(
        ConstantBuilder::default()
            .with_delay(delay)
            .with_max_times(1),
    )
    .await
}

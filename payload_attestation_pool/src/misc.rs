use core::future::Future;

use anyhow::Result;

pub trait PoolTask: Send + 'static {
    type Output: Send;

    fn run(self) -> impl Future<Output = Result<Self::Output>> + Send;
}

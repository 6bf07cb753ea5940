use super::{Request, Response};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiddlewareResult {
    Next,
    Stop,
}

/// Trait for middleware handlers.
#[async_trait]
pub trait Middleware: Send + Sync + 'static {
    async fn call(&self, req: &mut Request, res: &mut Response) -> MiddlewareResult;
}

pub const fn next() -> MiddlewareResult {
    MiddlewareResult::Next
}

pub const fn stop() -> MiddlewareResult {
    MiddlewareResult::Stop
}

impl MiddlewareResult {
    pub fn is_stop(&self) -> bool {
        matches!(self, MiddlewareResult::Stop)
    }
}

/// Blanket impl for closures or functions that match the async signature.
#[async_trait]
impl<F, Fut> Middleware for F
where
    F: Fn(&mut Request, &mut Response) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = MiddlewareResult> + Send + 'static,
{
    async fn call(&self, req: &mut Request, res: &mut Response) -> MiddlewareResult {
        (self)(req, res).await
    }
}

use async_trait::async_trait;

pub mod middleware;
pub mod request;
pub mod response;

pub use middleware::{Middleware, MiddlewareResult};
pub use request::Request;
pub use response::Response;

/// Terminal request handler, run after every middleware said `Next`.
#[async_trait]
pub trait Handler: Send + Sync + 'static {
    async fn handle(&self, req: &mut Request, res: &mut Response);
}

/// Blanket impl for closures or functions that match the async signature.
#[async_trait]
impl<F, Fut> Handler for F
where
    F: Fn(&mut Request, &mut Response) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn handle(&self, req: &mut Request, res: &mut Response) {
        (self)(req, res).await
    }
}

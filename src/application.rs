use crate::handler::{Handler, Middleware, Request as ExpressRequest, Response as ExpressResponse};
use crate::server::{Server, ServerError};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;
use hyper::{Request, Response, StatusCode};
use log::{info, warn};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

/// A middleware chain in front of a single terminal handler.
///
/// Middleware runs in registration order. The first one to return `Stop`
/// ends the request. The handler runs only when every middleware continued.
#[derive(Clone, Default)]
pub struct App {
    middleware: Vec<Arc<dyn Middleware>>,
    handler: Option<Arc<dyn Handler>>,
}

impl App {
    pub fn use_with<M: Middleware>(&mut self, middleware: M) -> &mut Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    pub fn handler<H: Handler>(&mut self, handler: H) -> &mut Self {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Runs the middleware chain and the handler against `res`.
    pub async fn dispatch(&self, req: &mut ExpressRequest, res: &mut ExpressResponse) {
        for middleware in &self.middleware {
            if middleware.call(req, res).await.is_stop() {
                return;
            }
        }

        match &self.handler {
            Some(handler) => handler.handle(req, res).await,
            None => {
                res.status(StatusCode::NOT_FOUND).send("Not Found");
            }
        }
    }

    /// Handles an in-memory request and returns the finished response.
    pub async fn handle(&self, mut req: ExpressRequest) -> ExpressResponse {
        let mut res = ExpressResponse::new();
        self.dispatch(&mut req, &mut res).await;
        res
    }

    pub async fn listen<T: FnOnce()>(self, port: u16, callback: T) -> Result<(), ServerError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        callback();

        Server::bind(addr, self).await
    }
}

impl Service<Request<Incoming>> for App {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let app = self.clone();

        Box::pin(async move {
            let start = Instant::now();
            let (parts, body) = req.into_parts();

            let body = match body.collect().await {
                Ok(collected) => collected.to_bytes(),
                Err(e) => {
                    warn!("Failed to read request body: {}", e);
                    return Ok(ExpressResponse::bad_request().into_hyper());
                }
            };

            let method = parts.method.clone();
            let path = parts.uri.path().to_string();

            let response = app.handle(ExpressRequest::from_parts(parts, body)).await;

            info!(
                "{} {} {} ({} ms)",
                method,
                path,
                response.get_status().as_u16(),
                start.elapsed().as_millis()
            );

            Ok(response.into_hyper())
        })
    }
}

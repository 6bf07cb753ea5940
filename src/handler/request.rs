use hyper::{Request as HRequest, body::Bytes};

/// Aliased request type.
///
/// The body is fully buffered before the middleware chain runs, so handlers
/// and tests can build requests in memory with `Request::builder()`.
pub type Request = HRequest<Bytes>;

//! HTTP security headers for Rust, similar to Helmet.js.
//!
//! [`Helmet`] holds one value per security header and writes them onto every
//! response, either as a [`Middleware`](handler::Middleware) in an [`App`] or by
//! wrapping a single handler with [`Helmet::secure`].

pub mod application;
pub mod handler;
pub mod helmet;
mod server;

pub use application::App;
pub use helmet::Helmet;
pub use server::ServerError;

pub fn app() -> App {
    App::default()
}

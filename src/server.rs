use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::signal;

use crate::application::App;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind listener: {0}")]
    Bind(#[from] std::io::Error),
}

pub(crate) struct Server;

impl Server {
    pub async fn bind(addr: SocketAddr, app: App) -> Result<(), ServerError> {
        let listener = TcpListener::bind(addr).await?;

        let shutdown = signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, _) = match accepted {
                        Ok(conn) => conn,
                        Err(e) => {
                            log::warn!("Failed to accept connection: {}", e);
                            continue;
                        }
                    };

                    let service = app.clone();
                    let io = TokioIo::new(stream);

                    tokio::spawn(async move {
                        if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                            log::error!("Connection error: {}", err);
                        }
                    });
                }
                result = &mut shutdown => {
                    if let Err(e) = result {
                        log::error!("Failed to listen for Ctrl+C: {}", e);
                    }
                    log::info!("🛑 Received Ctrl+C, shutting down server...");
                    break;
                }
            }
        }

        Ok(())
    }
}

//! Static file server for browser artifacts.
//!
//! Emscripten output has to be loaded over HTTP, so `.html` artifacts are
//! served from their directory with [`ServeDir`] instead of being opened from
//! disk.

use std::future::Future;
use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::error::{Error, Result};

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 8000;

/// Serve `root` on `127.0.0.1:<port>` until Ctrl+C.
///
/// Runs a current-thread tokio runtime and blocks the caller. `on_ready` is
/// called with the bound address once the listener is accepting connections.
pub fn serve_directory<F>(root: &Path, port: u16, on_ready: F) -> Result<()>
where
    F: FnOnce(SocketAddr),
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(serve_until(root, port, on_ready, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("shutting down static server");
    }))
}

/// URL of `page` on a server bound to `addr`.
///
/// Uses the bound IP rather than `localhost`, which may resolve to `::1`
/// first.
pub fn page_url(addr: SocketAddr, page: &str) -> String {
    format!("http://{addr}/{}", page.trim_start_matches('/'))
}

/// Serve `root` until `shutdown` resolves.
pub async fn serve_until<F, S>(root: &Path, port: u16, on_ready: F, shutdown: S) -> Result<()>
where
    F: FnOnce(SocketAddr),
    S: Future<Output = ()> + Send + 'static,
{
    let app = Router::new().fallback_service(ServeDir::new(root));

    let addr: SocketAddr = ([127, 0, 0, 1], port).into();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("failed to bind to {addr}: {e}")))?;
    let local = listener.local_addr()?;

    tracing::info!(root = %root.display(), %local, "serving static files");
    on_ready(local);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| Error::Server(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::sync::oneshot;

    async fn get(addr: SocketAddr, path: &str) -> String {
        let mut stream = tokio::net::TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_serves_files_from_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("run.html"), "<canvas></canvas>").unwrap();
        let root = temp.path().to_path_buf();

        let (ready_tx, ready_rx) = oneshot::channel();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();

        let server = tokio::spawn(async move {
            serve_until(
                &root,
                0,
                move |addr| {
                    let _ = ready_tx.send(addr);
                },
                async {
                    let _ = stop_rx.await;
                },
            )
            .await
        });

        let addr = ready_rx.await.unwrap();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");

        let found = get(addr, "/run.html").await;
        assert!(found.starts_with("HTTP/1.1 200"), "{found}");
        assert!(found.contains("<canvas></canvas>"));

        let missing = get(addr, "/missing.js").await;
        assert!(missing.starts_with("HTTP/1.1 404"), "{missing}");

        stop_tx.send(()).unwrap();
        server.await.unwrap().unwrap();
    }

    #[test]
    fn test_page_url_uses_bound_address() {
        let v4: SocketAddr = ([127, 0, 0, 1], 8000).into();
        assert_eq!(page_url(v4, "run.html"), "http://127.0.0.1:8000/run.html");

        let v6: SocketAddr = "[::1]:9000".parse().unwrap();
        assert_eq!(page_url(v6, "/run.html"), "http://[::1]:9000/run.html");
    }

    #[tokio::test]
    async fn test_port_in_use_is_a_server_error() {
        let taken = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = taken.local_addr().unwrap().port();
        let temp = TempDir::new().unwrap();

        let result = serve_until(temp.path(), port, |_| {}, async {}).await;
        assert!(matches!(result, Err(Error::Server(msg)) if msg.contains("failed to bind")));
    }
}

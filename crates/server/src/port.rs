use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use tokio::net::TcpListener;

/// Bind the listening socket.
///
/// An explicit port is bound as-is. Without one, `start` is tried first and
/// then every port in `(start, end)` in random order; the first socket that
/// binds is returned, so the port cannot be taken between probe and serve.
pub async fn bind_listener(host: &str, port: Option<u16>, start: u16, end: u16) -> Result<TcpListener> {
    match port {
        Some(port) => TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Failed to bind {}:{}", host, port)),
        None => probe_port(host, start, end).await,
    }
}

pub async fn probe_port(host: &str, start: u16, end: u16) -> Result<TcpListener> {
    if let Ok(listener) = TcpListener::bind((host, start)).await {
        return Ok(listener);
    }
    tracing::debug!(port = start, "Default port unavailable, scanning range");

    let mut candidates: Vec<u16> = (start.saturating_add(1)..end).collect();
    candidates.shuffle(&mut rand::thread_rng());

    for port in candidates {
        if let Ok(listener) = TcpListener::bind((host, port)).await {
            return Ok(listener);
        }
    }

    anyhow::bail!("No available ports found in range {}-{}", start, end)
}

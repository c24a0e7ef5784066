use std::path::{Component, Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};

/// Accept connections and serve files from `dir`. Blocks forever.
pub async fn serve(addr: &str, dir: &str) -> Result<(), String> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind failed on {}: {}", addr, e))?;

    log::info!("serving {} on {}", dir, addr);

    let root = PathBuf::from(dir);
    loop {
        match listener.accept().await {
            Ok((stream, peer)) => {
                let root = root.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, &root).await {
                        log::warn!("connection error from {}: {}", peer, e);
                    }
                });
            }
            Err(e) => {
                log::warn!("accept error: {}", e);
            }
        }
    }
}

async fn handle_connection(stream: TcpStream, root: &Path) -> Result<(), String> {
    let mut reader = BufReader::new(stream);

    let mut buf = vec![0u8; 4096];
    let n = reader
        .read(&mut buf)
        .await
        .map_err(|e| format!("read failed: {}", e))?;
    let request = String::from_utf8_lossy(&buf[..n]);

    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");

    let stream = reader.into_inner();
    if method != "GET" {
        return respond(stream, 405, "text/plain; charset=utf-8", b"method not allowed").await;
    }

    match resolve_path(root, target) {
        Some(path) => match tokio::fs::read(&path).await {
            Ok(body) => {
                log::debug!("GET {} -> {}", target, path.display());
                respond(stream, 200, content_type(&path), &body).await
            }
            Err(_) => respond(stream, 404, "text/plain; charset=utf-8", b"not found").await,
        },
        None => respond(stream, 404, "text/plain; charset=utf-8", b"not found").await,
    }
}

async fn respond(
    mut stream: TcpStream,
    status: u16,
    content_type: &str,
    body: &[u8],
) -> Result<(), String> {
    let reason = match status {
        200 => "OK",
        405 => "Method Not Allowed",
        _ => "Not Found",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        content_type,
        body.len()
    );
    stream
        .write_all(header.as_bytes())
        .await
        .map_err(|e| format!("write failed: {}", e))?;
    stream
        .write_all(body)
        .await
        .map_err(|e| format!("write failed: {}", e))?;
    Ok(())
}

/// Map a request target to a file under the root, refusing traversal.
fn resolve_path(root: &Path, target: &str) -> Option<PathBuf> {
    let path = target.split(['?', '#']).next().unwrap_or("/");
    let trimmed = path.trim_start_matches('/');
    let relative = if trimmed.is_empty() { "index.html" } else { trimmed };

    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(root.join(relative))
}

/// Content type from the file extension. Wasm needs the exact MIME type
/// for streaming instantiation in browsers.
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

//! Static file server for the dApp
//!
//! Serves the built Leptos app from `WALLET_WEB_DIST` (default `dist/`) on
//! `WALLET_WEB_ADDR` (default `127.0.0.1:8080`). Unknown paths fall back to
//! `index.html` so client-side routes survive a reload.

use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

use lib_utils::get_env_or;

fn main() -> io::Result<()> {
    let addr = get_env_or("WALLET_WEB_ADDR", "127.0.0.1:8080");
    let dist = PathBuf::from(get_env_or("WALLET_WEB_DIST", "dist"));
    let listener = TcpListener::bind(&addr)?;

    println!("Hydra Playground running at http://{}", addr);
    println!("Serving from {}", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
    Ok(())
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split_once('?').map_or(target, |(p, _)| p);
    let file_path = resolve_path(dist, path);

    let (status, body, content_type) = match fs::read(&file_path) {
        Ok(body) => ("200 OK", body, content_type(&file_path)),
        Err(e) => {
            eprintln!("Cannot read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()).and_then(|_| stream.write_all(&body)) {
        eprintln!("Failed to write response: {}", e);
        return;
    }
    let _ = stream.flush();
}

/// Map a request path to a file under `dist`, falling back to `index.html`
/// for directories, missing files and anything that tries to leave `dist`.
fn resolve_path(dist: &Path, path: &str) -> PathBuf {
    let index = dist.join("index.html");
    let relative = Path::new(path.trim_start_matches('/'));

    if relative.as_os_str().is_empty() || relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return index;
    }

    let candidate = dist.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type() {
        assert_eq!(content_type(Path::new("dist/app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("dist/index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("dist/LICENSE")), "application/octet-stream");
    }

    #[test]
    fn test_resolve_path_falls_back_to_index() {
        let dist = Path::new("does-not-exist");

        assert_eq!(resolve_path(dist, "/"), dist.join("index.html"));
        assert_eq!(resolve_path(dist, "/status"), dist.join("index.html"));
        assert_eq!(resolve_path(dist, "/../Cargo.toml"), dist.join("index.html"));
    }

    #[test]
    fn test_resolve_existing_file() {
        let dist = std::env::temp_dir().join("hydra-playground-dist-test");
        fs::create_dir_all(&dist).unwrap();
        fs::write(dist.join("app.js"), "export {}").unwrap();

        assert_eq!(resolve_path(&dist, "/app.js"), dist.join("app.js"));

        fs::remove_dir_all(&dist).unwrap();
    }
}

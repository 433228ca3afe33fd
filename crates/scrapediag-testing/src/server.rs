//! Minimal HTTP/1.1 stub for the scraping service.
//!
//! Serves canned responses by path, records every request target, and can
//! delay a response to exercise client timeouts. One thread per connection
//! so a slow route never blocks the others.

use anyhow::Result;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const ACCEPT_POLL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
    pub delay: Option<Duration>,
}

impl StubResponse {
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/json".to_string(),
            body: body.into(),
            delay: None,
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8".to_string(),
            body: body.into(),
            delay: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Hold the response back this long before answering.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn not_found() -> Self {
        Self::json(r#"{"detail": "Not Found"}"#).with_status(404)
    }
}

type Routes = Arc<HashMap<String, StubResponse>>;

/// A running stub service on an ephemeral localhost port.
///
/// # Example
/// ```no_run
/// use scrapediag_testing::{StubResponse, StubServer};
///
/// let server = StubServer::builder()
///     .route("/", StubResponse::json(r#"{"message": "ok"}"#))
///     .start()
///     .unwrap();
/// println!("{}", server.base_url());
/// ```
pub struct StubServer {
    addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

#[derive(Default)]
pub struct StubServerBuilder {
    routes: HashMap<String, StubResponse>,
}

impl StubServerBuilder {
    pub fn route(mut self, path: &str, response: StubResponse) -> Self {
        self.routes.insert(path.to_string(), response);
        self
    }

    pub fn start(self) -> Result<StubServer> {
        StubServer::start(self.routes)
    }
}

impl StubServer {
    pub fn builder() -> StubServerBuilder {
        StubServerBuilder::default()
    }

    fn start(routes: HashMap<String, StubResponse>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let routes: Routes = Arc::new(routes);

        let handle = {
            let shutdown = Arc::clone(&shutdown);
            let requests = Arc::clone(&requests);
            thread::spawn(move || accept_loop(listener, routes, requests, shutdown))
        };

        Ok(Self {
            addr,
            shutdown,
            requests,
            handle: Some(handle),
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Every request target seen so far (path plus query), in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Request targets whose path is exactly `path`.
    pub fn requests_to(&self, path: &str) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|target| split_target(target).0 == path)
            .collect()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn accept_loop(
    listener: TcpListener,
    routes: Routes,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown: Arc<AtomicBool>,
) {
    while !shutdown.load(Ordering::SeqCst) {
        match listener.accept() {
            Ok((stream, _)) => {
                let routes = Arc::clone(&routes);
                let requests = Arc::clone(&requests);
                thread::spawn(move || {
                    let _ = serve(stream, &routes, &requests);
                });
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => thread::sleep(ACCEPT_POLL),
            Err(_) => break,
        }
    }
}

fn serve(stream: TcpStream, routes: &Routes, requests: &Mutex<Vec<String>>) -> Result<()> {
    stream.set_nonblocking(false)?;
    let mut reader = BufReader::new(stream.try_clone()?);

    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let target = request_line
        .split_whitespace()
        .nth(1)
        .unwrap_or("/")
        .to_string();

    // Drain headers; requests are all bodiless GETs.
    loop {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    if let Ok(mut seen) = requests.lock() {
        seen.push(target.clone());
    }

    let (path, _) = split_target(&target);
    let response = routes
        .get(path)
        .cloned()
        .unwrap_or_else(StubResponse::not_found);

    if let Some(delay) = response.delay {
        thread::sleep(delay);
    }

    let mut stream = stream;
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason(response.status),
        response.content_type,
        response.body.len()
    );
    stream.write_all(head.as_bytes())?;
    stream.write_all(response.body.as_bytes())?;
    stream.flush()?;
    Ok(())
}

fn split_target(target: &str) -> (&str, Option<&str>) {
    match target.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (target, None),
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A base URL on a localhost port nothing is listening on.
pub fn closed_port_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn get(base: &str, target: &str) -> Result<String> {
        let addr = base.trim_start_matches("http://");
        let mut stream = TcpStream::connect(addr)?;
        write!(stream, "GET {} HTTP/1.1\r\nHost: {}\r\n\r\n", target, addr)?;
        let mut buf = String::new();
        stream.read_to_string(&mut buf)?;
        Ok(buf)
    }

    #[test]
    fn test_routes_and_records_requests() -> Result<()> {
        let server = StubServer::builder()
            .route("/debug", StubResponse::json("{}"))
            .start()?;

        let resp = get(&server.base_url(), "/debug?use_playwright=true")?;
        assert!(resp.starts_with("HTTP/1.1 200 OK"));
        assert!(resp.ends_with("{}"));

        let resp = get(&server.base_url(), "/missing")?;
        assert!(resp.starts_with("HTTP/1.1 404"));

        assert_eq!(server.requests_to("/debug"), vec!["/debug?use_playwright=true"]);
        assert_eq!(server.requests().len(), 2);
        Ok(())
    }

    #[test]
    fn test_closed_port_refuses() -> Result<()> {
        let url = closed_port_url()?;
        assert!(TcpStream::connect(url.trim_start_matches("http://")).is_err());
        Ok(())
    }
}

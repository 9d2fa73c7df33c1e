//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use release_upload::config::{ConfigHandle, UploadConfig};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

/// A request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub request_line: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    #[allow(dead_code)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Mock HTTP backend running on its own Tokio runtime.
///
/// Tests drive it from a plain `#[test]` thread, since the client under test
/// is blocking.
pub struct MockBackend {
    pub addr: SocketAddr,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
    hits: Arc<AtomicU32>,
    _runtime: Runtime,
}

impl MockBackend {
    pub fn url(&self) -> String {
        format!("http://{}/releases", self.addr)
    }

    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Start a programmable mock backend. `f` receives the 1-based request
/// number and returns status and body.
pub fn start_programmable_backend<F>(f: F) -> MockBackend
where
    F: Fn(u32) -> (u16, String) + Send + Sync + 'static,
{
    let runtime = Runtime::new().unwrap();
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let requests = Arc::new(Mutex::new(Vec::new()));
    let hits = Arc::new(AtomicU32::new(0));
    let f = Arc::new(f);

    let recorded = requests.clone();
    let counter = hits.clone();
    runtime.spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    let recorded = recorded.clone();
                    let counter = counter.clone();
                    tokio::spawn(async move {
                        let Some(request) = read_request(&mut socket).await else {
                            return;
                        };
                        recorded.lock().unwrap().push(request);
                        let n = counter.fetch_add(1, Ordering::SeqCst) + 1;

                        let (status, body) = f(n);
                        let status_text = match status {
                            200 => "200 OK".to_string(),
                            201 => "201 Created".to_string(),
                            401 => "401 Unauthorized".to_string(),
                            500 => "500 Internal Server Error".to_string(),
                            502 => "502 Bad Gateway".to_string(),
                            503 => "503 Service Unavailable".to_string(),
                            other => format!("{other} Mock"),
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    MockBackend {
        addr,
        requests,
        hits,
        _runtime: runtime,
    }
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let request_line = lines.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body = String::from_utf8_lossy(&buf[header_end..]).to_string();
    Some(RecordedRequest {
        request_line,
        headers,
        body,
    })
}

/// Configuration pointing at `endpoint` with fixed identity and source control,
/// so no test depends on a local git checkout.
pub fn test_config(endpoint: &str, retry_count: Option<i64>) -> ConfigHandle {
    let mut config = UploadConfig::default();
    config.releases_endpoint = endpoint.to_string();
    config.retry_count = retry_count;
    config.timeout_millis = 2_000;
    config.builder_name = Some("ci".into());
    config.source_control.repository = Some("https://github.com/org/app.git".into());
    config.source_control.revision = Some("0123abcd".into());
    config.manifest.api_key = "test-api-key".into();
    config.manifest.version_name = "3.0.0".into();
    config.manifest.version_code = "300".into();
    ConfigHandle::new(config)
}

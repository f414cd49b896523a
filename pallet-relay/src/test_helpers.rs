//! Shared test utilities.
//!
//! A queue-based mock HTTP server for exercising the relay against a
//! scripted upstream without real endpoints.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A queue-based mock HTTP server.
///
/// Responses are consumed in FIFO order: each incoming request receives
/// the next `(status_code, body)` from the queue. Every request's raw
/// text (head and body) is recorded for assertions, including the
/// zero-requests case.
pub struct MockHttpServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl MockHttpServer {
    /// Start a mock server that returns the given responses in order.
    pub async fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let queue = Arc::new(Mutex::new(VecDeque::from(responses)));
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let handle = {
            let requests = requests.clone();
            tokio::spawn(async move {
                loop {
                    match listener.accept().await {
                        Ok((mut stream, _)) => {
                            let queue = queue.clone();
                            let requests = requests.clone();
                            tokio::spawn(async move {
                                let raw = read_request(&mut stream).await;
                                requests.lock().unwrap().push(raw);

                                let (status, body) = queue
                                    .lock()
                                    .unwrap()
                                    .pop_front()
                                    .unwrap_or((500, r#"{"error":"queue empty"}"#.to_string()));

                                let status_text = match status {
                                    200 => "OK",
                                    201 => "Created",
                                    400 => "Bad Request",
                                    401 => "Unauthorized",
                                    403 => "Forbidden",
                                    404 => "Not Found",
                                    500 => "Internal Server Error",
                                    _ => "Error",
                                };

                                let resp = format!(
                                    "HTTP/1.1 {} {}\r\n\
                                     Content-Type: application/json\r\n\
                                     Content-Length: {}\r\n\
                                     Connection: close\r\n\
                                     \r\n\
                                     {}",
                                    status,
                                    status_text,
                                    body.len(),
                                    body
                                );
                                let _ = stream.write_all(resp.as_bytes()).await;
                            });
                        }
                        Err(_) => break,
                    }
                }
            })
        };

        Self {
            base_url,
            requests,
            _handle: handle,
        }
    }

    /// Raw text of every request received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Read one HTTP/1.1 request: headers plus the advertised body length.
///
/// Bodies here are tiny JSON payloads, so a bounded buffer is plenty.
async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
    let mut buf: Vec<u8> = Vec::with_capacity(16384);
    let mut chunk = [0u8; 4096];
    loop {
        match stream.read(&mut chunk).await {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if request_complete(&buf) || buf.len() > 1 << 20 {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// True once `buf` holds the full head and `Content-Length` bytes of body.
fn request_complete(buf: &[u8]) -> bool {
    let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
        return false;
    };
    let head = String::from_utf8_lossy(&buf[..head_end]);
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    buf.len() >= head_end + 4 + content_length
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_detects_head_and_body() {
        assert!(!request_complete(b"POST / HTTP/1.1\r\n"));
        assert!(request_complete(b"GET / HTTP/1.1\r\nHost: x\r\n\r\n"));
        let partial = b"POST / HTTP/1.1\r\nContent-Length: 4\r\n\r\nab";
        assert!(!request_complete(partial));
        let full = b"POST / HTTP/1.1\r\nContent-Length: 4\r\n\r\nabcd";
        assert!(request_complete(full));
    }

    #[tokio::test]
    async fn serves_queued_responses_in_order() {
        let server = MockHttpServer::start(vec![
            (201, r#"{"n":1}"#.to_string()),
            (403, r#"{"n":2}"#.to_string()),
        ])
        .await;

        let client = reqwest::Client::new();
        let first = client.post(&server.base_url).body("one").send().await.unwrap();
        assert_eq!(first.status(), 201);
        let second = client.post(&server.base_url).body("two").send().await.unwrap();
        assert_eq!(second.status(), 403);

        assert_eq!(server.request_count(), 2);
        let requests = server.requests();
        assert!(requests[0].contains("one"));
        assert!(requests[1].contains("two"));
    }
}
